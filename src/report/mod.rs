mod chart;
mod table;

pub use chart::*;
pub use table::*;
