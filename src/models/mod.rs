pub mod table;
pub mod build;
pub mod status;
pub mod schema;

pub use table::*;
pub use build::*;
pub use status::*;
pub use schema::{ColumnSpec, SchemaReport};
