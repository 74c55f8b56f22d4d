pub mod convert;
pub mod schema;

pub use convert::*;
pub use schema::*;
