use crate::data::Blocs;
use crate::data::Dataset;
use const_format::concatcp;
use tokio_postgres::types::Type;

/// Long/tidy fact table of (country, indicator, year, value) rows.
pub const INDICATORS: &str = "country_indicators";
/// Clone of the fact table with a surrogate key, populated row-by-row
/// purely to benchmark insert throughput against COPY.
pub const INDICATORS_INSERT: &str = "country_indicators_insert";
/// Maps country_code to one or more economic-bloc labels.
pub const CLASSIFICATION: &str = "country_classification";

/// Pure schema definitions for Postgres tables.
/// No I/O operations - just metadata about table structure.
/// All methods return &'static str to avoid runtime allocations.
/// Use const_format::concatcp! to build SQL strings at compile time.
pub trait Schema {
    /// Returns the name of the table in the database.
    fn name() -> &'static str;
    /// Returns the SQL to drop and recreate the table.
    fn creates() -> &'static str;
    /// Returns the COPY command used to load data into the database.
    fn copy() -> &'static str;
    /// Returns the SQL to create indices on the table.
    fn indices() -> &'static str;
    /// Returns the column types for the table.
    fn columns() -> &'static [Type];
}

impl Schema for Dataset {
    fn name() -> &'static str {
        INDICATORS
    }
    fn creates() -> &'static str {
        concatcp!(
            "DROP TABLE IF EXISTS ", INDICATORS, ";
             CREATE TABLE ", INDICATORS, " (
                country_name   TEXT,
                country_code   VARCHAR(3),
                indicator_name TEXT,
                indicator_code TEXT,
                year           INTEGER,
                value          DOUBLE PRECISION
             );"
        )
    }
    fn copy() -> &'static str {
        concatcp!(
            "COPY ", INDICATORS,
            " (country_name, country_code, indicator_name, indicator_code, year, value)",
            " FROM STDIN WITH (FORMAT BINARY)"
        )
    }
    fn indices() -> &'static str {
        concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_indicators_code ON ", INDICATORS, " (country_code);
             CREATE INDEX IF NOT EXISTS idx_indicators_name_year ON ", INDICATORS, " (indicator_name, year);"
        )
    }
    fn columns() -> &'static [Type] {
        &[
            Type::TEXT,
            Type::VARCHAR,
            Type::TEXT,
            Type::TEXT,
            Type::INT4,
            Type::FLOAT8,
        ]
    }
}

impl Schema for Blocs {
    fn name() -> &'static str {
        CLASSIFICATION
    }
    fn creates() -> &'static str {
        concatcp!(
            "DROP TABLE IF EXISTS ", CLASSIFICATION, ";
             CREATE TABLE ", CLASSIFICATION, " (
                country_code  VARCHAR(3),
                economic_bloc TEXT
             );"
        )
    }
    fn copy() -> &'static str {
        concatcp!(
            "COPY ", CLASSIFICATION,
            " (country_code, economic_bloc)",
            " FROM STDIN WITH (FORMAT BINARY)"
        )
    }
    fn indices() -> &'static str {
        concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_classification_code ON ",
            CLASSIFICATION,
            " (country_code);"
        )
    }
    fn columns() -> &'static [Type] {
        &[Type::VARCHAR, Type::TEXT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_copy_binary_format() {
        assert!(Dataset::copy().starts_with(concatcp!("COPY ", INDICATORS)));
        assert!(Dataset::copy().ends_with("(FORMAT BINARY)"));
        assert!(Blocs::copy().starts_with(concatcp!("COPY ", CLASSIFICATION)));
    }

    #[test]
    fn is_column_arity_consistent() {
        // one Type per column named in the COPY list
        assert!(Dataset::columns().len() == 6);
        assert!(Blocs::columns().len() == 2);
    }
}
