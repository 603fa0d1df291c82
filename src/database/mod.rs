mod check;
mod connect;
mod ingest;
mod schema;

pub use check::*;
pub use connect::*;
pub use ingest::*;
pub use schema::*;
