//! Navigation stepper: turn-by-turn instructions over a planned route.
//!
//! Directions use a coarse axis-dominant heuristic rather than true
//! bearing, which is acceptable for the store's axis-aligned layout: the
//! dominant displacement axis decides the phrase, and a near-zero
//! displacement (both deltas within tolerance) becomes "right here".
//! The map's y axis grows downward, so positive delta-y is a right turn
//! when walking left to right.

use std::fmt;

use storeguide_core::Route;

use crate::speech::join_natural;

/// Displacements smaller than this on both axes count as "right here".
const NEAR_ZERO: f64 = 5.0;

/// Compass-relative walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    StraightAhead,
    Behind,
    Right,
    Left,
    Here,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Direction::StraightAhead => "straight ahead",
            Direction::Behind => "behind you and turn around",
            Direction::Right => "to your right",
            Direction::Left => "to your left",
            Direction::Here => "right here",
        };
        write!(f, "{}", text)
    }
}

/// Classifies the direction of travel from one point to another.
pub fn direction_between(from: (f64, f64), to: (f64, f64)) -> Direction {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;

    if dx.abs() < NEAR_ZERO && dy.abs() < NEAR_ZERO {
        return Direction::Here;
    }
    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            Direction::StraightAhead
        } else {
            Direction::Behind
        }
    } else if dy > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Produces the instruction for the stop at `cursor` and the advanced
/// cursor.
///
/// At cursor 0 the direction is taken from the entry; at cursor k>0 from
/// stop k-1. Once the product stops are exhausted the instruction points
/// at the chosen exit and the cursor does not advance, so repeating
/// "next zone" repeats the same exit instruction.
pub fn next_instruction(route: &Route, cursor: usize) -> (String, usize) {
    let product_stops = route.product_stops();

    if cursor >= product_stops.len() {
        return (exit_instruction(route), cursor);
    }

    let zone_products = route.zone_products();
    let stop = product_stops[cursor];
    let zone_name = route.zone_name(stop).unwrap_or("Unknown").to_string();
    let products = zone_products.get(&stop).cloned().unwrap_or_default();
    let product_text = join_natural(&products);

    let here = route.point_for(stop).map(|p| (p.x, p.y));
    let mut instruction = if cursor == 0 {
        let entry = route.point_for(route.stops[0]).map(|p| (p.x, p.y));
        match (entry, here) {
            (Some(from), Some(to)) => format!(
                "From the entrance, turn {} and head to the {} zone to get {}.",
                direction_between(from, to),
                zone_name,
                product_text
            ),
            _ => format!(
                "From the entrance, head to the {} zone to get {}.",
                zone_name, product_text
            ),
        }
    } else {
        let previous = product_stops[cursor - 1];
        let previous_name = route.zone_name(previous).unwrap_or("Unknown");
        let from = route.point_for(previous).map(|p| (p.x, p.y));
        match (from, here) {
            (Some(from), Some(to)) => format!(
                "From the {} zone, turn {} and go to the {} zone to get {}.",
                previous_name,
                direction_between(from, to),
                zone_name,
                product_text
            ),
            _ => format!(
                "From the {} zone, go to the {} zone to get {}.",
                previous_name, zone_name, product_text
            ),
        }
    };

    let next_index = cursor + 1;
    instruction.push_str(&format!(
        " This is stop {} of {}.",
        next_index,
        product_stops.len()
    ));
    if next_index < product_stops.len() {
        instruction.push_str(" Say next zone when you are ready to continue.");
    } else {
        instruction.push_str(" This is your last stop.");
    }

    (instruction, next_index)
}

/// The closing instruction toward the route's chosen exit.
fn exit_instruction(route: &Route) -> String {
    let mut text = String::from("You have reached all product locations. ");

    let last_zone = route.product_stops().last().copied();
    let exit = route.exit_stop();
    let last_point = last_zone.and_then(|id| route.point_for(id));
    let exit_point = exit.and_then(|id| route.point_for(id));

    match (last_point, exit_point, exit) {
        (Some(from), Some(to), Some(exit_id)) => {
            let direction = direction_between((from.x, from.y), (to.x, to.y));
            let exit_name = route.zone_name(exit_id).unwrap_or("exit").to_string();
            text.push_str(&format!(
                "Turn {} and head to the {}. ",
                direction, exit_name
            ));
        }
        _ => text.push_str("Head to the nearest exit. "),
    }

    text.push_str("When finished, say thank you for the purchase.");
    text
}
