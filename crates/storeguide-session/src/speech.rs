//! Spoken-text composition helpers.

use storeguide_core::Route;

/// Joins items naturally: `"milk"`, `"milk and bread"`,
/// `"milk, cheese and bread"`.
pub fn join_natural(items: &[String]) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        _ => format!(
            "{} and {}",
            items[..items.len() - 1].join(", "),
            items[items.len() - 1]
        ),
    }
}

/// The confirmation prompt for the current product list.
pub fn confirmation_prompt(products: &[String]) -> String {
    let plural = if products.len() > 1 { "s" } else { "" };
    format!(
        "I have {} item{}: {}. Say yes to confirm and generate the route, \
         or tell me what you want to add or remove.",
        products.len(),
        plural,
        products.join(", ")
    )
}

/// The full route summary, visiting each product stop in order.
pub fn route_summary(route: &Route) -> String {
    let product_stops = route.product_stops();
    let zone_products = route.zone_products();

    let mut text = format!(
        "Your route is ready. You will visit {} zones. ",
        product_stops.len()
    );

    for (index, stop) in product_stops.iter().enumerate() {
        let products = match zone_products.get(stop) {
            Some(products) if !products.is_empty() => products,
            _ => continue,
        };
        let zone_name = route.zone_name(*stop).unwrap_or("Unknown");
        let product_text = join_natural(products);
        if index == 0 {
            text.push_str(&format!(
                "First, go to the {} zone to get {}. ",
                zone_name, product_text
            ));
        } else if index == product_stops.len() - 1 {
            text.push_str(&format!(
                "Finally, visit the {} zone for {}. ",
                zone_name, product_text
            ));
        } else {
            text.push_str(&format!(
                "Then, go to the {} zone for {}. ",
                zone_name, product_text
            ));
        }
    }

    text.push_str(
        "The route is shown on the map. When you finish shopping, \
         say thank you for the purchase. Happy shopping!",
    );
    text
}
