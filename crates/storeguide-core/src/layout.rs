//! The fixed store topology and the standard zone catalog.
//!
//! The layout is known at build time: one entry, 17 product zones, 15
//! navigation junctions, and 4 exits, positioned in map coordinates
//! (x grows left-to-right, y grows top-to-bottom). Each entry in
//! [`LAYOUT`] lists a node and its adjacency; [`standard`] materializes
//! the symmetric closure of those connections.

use crate::catalog::ZoneCatalog;
use crate::error::CoreError;
use crate::graph::StoreGraph;
use crate::id::NodeId;
use crate::node::StoreNode;

/// One row of the fixed layout: id, x, y, name, connected ids.
type LayoutRow = (u32, f64, f64, &'static str, &'static [u32]);

/// The fixed store layout.
const LAYOUT: &[LayoutRow] = &[
    (1, 5.5, 17.3, "Entry", &[101]),
    (2, 35.5, 17.3, "Seafood", &[102, 103]),
    (3, 74.0, 17.3, "Frozen Food & Meat", &[104, 105]),
    (4, 14.5, 34.0, "Health", &[101, 201, 106]),
    (5, 28.5, 34.0, "Cosmetics", &[102, 107]),
    (6, 42.5, 34.0, "Paper & Cleaning", &[103, 108]),
    (7, 57.0, 33.0, "Kitchen Items", &[104, 8, 109]),
    (8, 74.0, 33.0, "Fruit", &[7, 9]),
    (9, 92.0, 33.0, "Dairy", &[105, 8, 110]),
    (10, 74.0, 49.25, "Vegetables", &[109, 110]),
    (11, 14.5, 66.0, "Juices", &[106, 203, 111]),
    (12, 28.5, 66.0, "Water & Beer", &[107, 112]),
    (13, 42.5, 66.0, "Wine & Candy", &[108, 113]),
    (14, 57.0, 65.0, "Snacks", &[109, 114]),
    (15, 74.0, 65.0, "Condiments & Oils", &[14, 16]),
    (16, 92.0, 65.0, "Canned", &[110, 15, 115]),
    (17, 35.5, 82.0, "Soft Drinks", &[112, 113]),
    (18, 74.0, 82.0, "Pasta & Bakery", &[114, 115]),
    (101, 14.5, 17.3, "Point1", &[1, 4, 102]),
    (102, 28.5, 17.3, "Point2", &[101, 5, 2]),
    (103, 42.5, 17.3, "Point3", &[2, 6, 104]),
    (104, 57.0, 17.3, "Point4", &[103, 7, 3]),
    (105, 92.0, 17.3, "Point5", &[3, 9]),
    (106, 14.5, 49.25, "Point6", &[4, 202, 107, 11]),
    (107, 28.5, 49.25, "Point7", &[5, 106, 108, 12]),
    (108, 42.5, 49.25, "Point8", &[6, 107, 109, 13]),
    (109, 57.0, 49.25, "Point9", &[7, 108, 10, 14]),
    (110, 92.0, 49.25, "Point10", &[9, 10, 16]),
    (111, 14.5, 82.0, "Point11", &[11, 204, 112]),
    (112, 28.5, 82.0, "Point12", &[12, 111, 17]),
    (113, 42.5, 82.0, "Point13", &[13, 17, 114]),
    (114, 57.0, 82.0, "Point14", &[14, 113, 18]),
    (115, 92.0, 82.0, "Point15", &[16, 18]),
    (201, 7.0, 34.0, "EXIT1", &[4]),
    (202, 7.0, 49.25, "EXIT2", &[106]),
    (203, 7.0, 66.0, "EXIT3", &[11]),
    (204, 7.0, 82.0, "EXIT4", &[111]),
];

/// Builds the fixed store graph. The adjacency is the symmetric closure
/// of the layout rows: a connection listed by either endpoint becomes one
/// undirected edge.
pub fn standard() -> StoreGraph {
    let mut graph = StoreGraph::new();
    for &(id, x, y, name, _) in LAYOUT {
        graph
            .add_node(StoreNode::new(NodeId(id), x, y, name))
            .expect("layout contains duplicate node id");
    }
    for &(id, _, _, _, connections) in LAYOUT {
        for &other in connections {
            graph
                .connect(NodeId(id), NodeId(other))
                .expect("layout references unknown node id");
        }
    }
    debug_assert!(graph.validate().is_ok());
    graph
}

/// Keyword-to-zone mapping of the standard catalog, in catalog order.
/// Lookup is first-match-wins over this order (documented, tested).
const KEYWORDS: &[(&str, u32)] = &[
    // Health
    ("vitamins", 4), ("medicine", 4), ("health", 4), ("vitaminas", 4), ("medicina", 4),
    // Cosmetics
    ("cosmetics", 5), ("shampoo", 5), ("soap", 5), ("personal care", 5), ("jabón", 5), ("champú", 5),
    // Paper & Cleaning
    ("paper", 6), ("cleaning", 6), ("towels", 6), ("papel", 6), ("limpieza", 6), ("toallas", 6),
    // Kitchen
    ("kitchen", 7), ("pots", 7), ("pans", 7), ("cocina", 7), ("ollas", 7), ("sartenes", 7),
    // Fruit
    ("fruit", 8), ("apples", 8), ("bananas", 8), ("apple", 8), ("banana", 8),
    ("plátanos", 8), ("plátano", 8), ("manzanas", 8), ("manzana", 8), ("frutas", 8),
    // Dairy
    ("milk", 9), ("cheese", 9), ("yogurt", 9), ("dairy", 9), ("leche", 9), ("queso", 9), ("yogur", 9),
    // Vegetables
    ("vegetables", 10), ("lettuce", 10), ("tomatoes", 10), ("tomato", 10), ("verduras", 10),
    ("lechuga", 10), ("tomates", 10), ("tomate", 10), ("zanahorias", 10), ("zanahoria", 10),
    // Juices
    ("juice", 11), ("juices", 11), ("orange juice", 11), ("jugo", 11), ("jugos", 11),
    // Water & Beer
    ("water", 12), ("beer", 12), ("alcohol", 12), ("agua", 12), ("cerveza", 12),
    // Wine & Candy
    ("wine", 13), ("candy", 13), ("chocolate", 13), ("vino", 13), ("dulces", 13),
    // Snacks
    ("snacks", 14), ("chips", 14), ("crackers", 14), ("botanas", 14), ("papas", 14),
    // Condiments & Oils
    ("oil", 15), ("vinegar", 15), ("condiments", 15), ("sauce", 15), ("sauces", 15),
    ("aceite", 15), ("vinagre", 15), ("salsa", 15), ("salsas", 15),
    // Canned
    ("canned", 16), ("beans", 16), ("soup", 16), ("enlatados", 16), ("frijoles", 16), ("sopa", 16),
    // Soft Drinks
    ("soda", 17), ("cola", 17), ("soft drinks", 17), ("refresco", 17), ("refrescos", 17),
    // Pasta & Bakery
    ("pasta", 18), ("bread", 18), ("bakery", 18), ("pan", 18), ("panadería", 18),
    ("tortillas", 18), ("arroz", 18),
    // Seafood
    ("seafood", 2), ("fish", 2), ("pescado", 2), ("mariscos", 2),
    // Frozen & Meat
    ("frozen", 3), ("meat", 3), ("chicken", 3), ("beef", 3), ("congelados", 3),
    ("carne", 3), ("pollo", 3), ("res", 3), ("huevos", 3), ("huevo", 3),
    // Coffee
    ("coffee", 12), ("café", 12),
];

/// Builds the standard product-keyword catalog. Every keyword maps to a
/// product zone of the standard graph; unmatched items fall back to the
/// entry zone.
pub fn standard_catalog() -> ZoneCatalog {
    let mut catalog = ZoneCatalog::new(NodeId::ENTRY);
    for &(keyword, zone) in KEYWORDS {
        catalog.insert(keyword, NodeId(zone));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeRole;

    #[test]
    fn standard_graph_has_expected_shape() {
        let g = standard();
        assert_eq!(g.node_count(), 37);
        assert_eq!(g.entry_id(), NodeId(1));
        assert_eq!(
            g.exit_ids(),
            vec![NodeId(201), NodeId(202), NodeId(203), NodeId(204)]
        );
    }

    #[test]
    fn standard_graph_is_connected() {
        standard().validate().unwrap();
    }

    #[test]
    fn asymmetric_layout_rows_become_symmetric_edges() {
        // Zone 15 lists 14 but 14 does not list 15; the closure connects both.
        let g = standard();
        assert!(g.neighbors(NodeId(14)).unwrap().contains(&NodeId(15)));
        assert!(g.neighbors(NodeId(15)).unwrap().contains(&NodeId(14)));
    }

    #[test]
    fn zone_names_match_layout() {
        let g = standard();
        assert_eq!(g.node(NodeId(9)).unwrap().name, "Dairy");
        assert_eq!(g.node(NodeId(18)).unwrap().name, "Pasta & Bakery");
        assert_eq!(g.node(NodeId(202)).unwrap().role, NodeRole::Exit);
    }

    #[test]
    fn catalog_zones_exist_in_graph() {
        let g = standard();
        let catalog = standard_catalog();
        catalog.validate(&g).unwrap();
    }

    #[test]
    fn nearest_exit_from_juices_is_exit3() {
        // Zone 11 (Juices) sits at (14.5, 66); EXIT3 is at (7, 66).
        let g = standard();
        assert_eq!(g.nearest_exit(NodeId(11)).unwrap(), NodeId(203));
    }
}
