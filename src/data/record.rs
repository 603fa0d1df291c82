use crate::Value;
use crate::Year;
use serde::Deserialize;
use serde::Serialize;

/// One observation of one indicator for one country in one year.
/// Mirrors the long/tidy layout of the country_indicators table.
/// A missing value field in the source CSV becomes None and lands
/// in Postgres as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub country_name: String,
    pub country_code: String,
    pub indicator_name: String,
    pub indicator_code: String,
    pub year: Year,
    pub value: Option<Value>,
}

/// Membership of a country in an economic bloc. A country may appear
/// under several bloc labels (e.g. both EU and EURO_ZONE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub country_code: String,
    pub economic_bloc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_missing_value_none() {
        let csv = "country_name,country_code,indicator_name,indicator_code,year,value\n\
                   Brazil,BRA,\"Population, total\",SP.POP.TOTL,2020,\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let row: Indicator = reader.deserialize().next().unwrap().unwrap();
        assert!(row.value.is_none());
        assert!(row.year == 2020);
        assert!(row.country_code == "BRA");
    }

    #[test]
    fn is_present_value_some() {
        let csv = "country_name,country_code,indicator_name,indicator_code,year,value\n\
                   Brazil,BRA,\"Population, total\",SP.POP.TOTL,2020,212559417\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let row: Indicator = reader.deserialize().next().unwrap().unwrap();
        assert!(row.value == Some(212559417.));
    }
}
