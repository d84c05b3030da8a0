pub mod catalog;
pub mod error;
pub mod graph;
pub mod id;
pub mod layout;
pub mod node;
pub mod route;

// Re-export commonly used types
pub use catalog::ZoneCatalog;
pub use error::CoreError;
pub use graph::StoreGraph;
pub use id::NodeId;
pub use node::{NodeRole, StoreNode};
pub use route::{ItemZone, PathPoint, Route};
