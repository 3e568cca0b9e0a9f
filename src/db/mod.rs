pub mod initialize;
pub mod pool;
pub mod schema;
pub mod stats;

pub use initialize::{apply_groups, initialize_schema};
