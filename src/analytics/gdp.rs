use crate::Value;
use crate::Year;

/// Total PPP-adjusted GDP of one bloc in one year, summed across member
/// countries where both population and GDP-per-capita are present.
#[derive(Debug, Clone, PartialEq)]
pub struct BlocGdp {
    pub entity: String,
    pub year: Year,
    pub total_gdp_ppp: Value,
}
