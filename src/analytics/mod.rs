mod analysis;
mod bloc;
mod gdp;
mod longevity;
mod pivot;

pub use analysis::*;
pub use bloc::*;
pub use gdp::*;
pub use longevity::*;
pub use pivot::*;
