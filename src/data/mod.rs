mod dataset;
mod record;

pub use dataset::*;
pub use record::*;
