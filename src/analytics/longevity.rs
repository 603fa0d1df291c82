use crate::Value;

/// Per-country life-expectancy/GDP snapshot for a fixed year.
#[derive(Debug, Clone, PartialEq)]
pub struct Longevity {
    pub country_name: String,
    pub life_expectancy: Value,
    pub gdp_per_capita: Value,
}

/// Both bounds are exclusive: a country qualifies only when it exceeds
/// life expectancy and income at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub life_expectancy: Value,
    pub gdp_per_capita: Value,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            life_expectancy: 75.,
            gdp_per_capita: 20000.,
        }
    }
}
