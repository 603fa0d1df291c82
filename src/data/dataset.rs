use super::Classification;
use super::Indicator;
use std::path::Path;

/// The combined long-format indicator dataset staged for database load.
/// Multiple source files concatenate into a single row vector, in file
/// order, preserving each file's internal row order.
#[derive(Debug, Clone, Default)]
pub struct Dataset(Vec<Indicator>);

impl Dataset {
    /// Read and concatenate one or more long-format CSV files.
    pub fn load<P>(paths: &[P]) -> Result<Self, csv::Error>
    where
        P: AsRef<Path>,
    {
        let mut rows = Vec::new();
        for path in paths {
            let mut reader = csv::Reader::from_path(path)?;
            for row in reader.deserialize() {
                rows.push(row?);
            }
            log::info!(
                "read {} rows so far ({})",
                rows.len(),
                path.as_ref().display()
            );
        }
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[Indicator] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Indicator>> for Dataset {
    fn from(rows: Vec<Indicator>) -> Self {
        Self(rows)
    }
}

impl IntoIterator for Dataset {
    type Item = Indicator;
    type IntoIter = std::vec::IntoIter<Indicator>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Country-to-bloc classification rows staged for database load.
#[derive(Debug, Clone, Default)]
pub struct Blocs(Vec<Classification>);

impl Blocs {
    /// Read a (country_code, economic_bloc) CSV.
    pub fn load<P>(path: P) -> Result<Self, csv::Error>
    where
        P: AsRef<Path>,
    {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader.deserialize().collect::<Result<Vec<_>, _>>()?;
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[Classification] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Classification>> for Blocs {
    fn from(rows: Vec<Classification>) -> Self {
        Self(rows)
    }
}

impl IntoIterator for Blocs {
    type Item = Classification;
    type IntoIter = std::vec::IntoIter<Classification>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(contents.as_bytes()).expect("write");
        f
    }

    #[test]
    fn is_concatenation_order_preserving() {
        let a = file(
            "country_name,country_code,indicator_name,indicator_code,year,value\n\
             India,IND,\"Population, total\",SP.POP.TOTL,2019,1366417754\n\
             India,IND,\"Population, total\",SP.POP.TOTL,2020,1380004385\n",
        );
        let b = file(
            "country_name,country_code,indicator_name,indicator_code,year,value\n\
             China,CHN,\"Population, total\",SP.POP.TOTL,2020,1411100000\n",
        );
        let dataset = Dataset::load(&[a.path(), b.path()]).expect("load");
        assert!(dataset.len() == 3);
        assert!(dataset.rows()[0].year == 2019);
        assert!(dataset.rows()[2].country_code == "CHN");
    }

    #[test]
    fn is_classification_many_to_many() {
        let f = file(
            "country_code,economic_bloc\n\
             DEU,EU\n\
             DEU,EURO_ZONE\n",
        );
        let blocs = Blocs::load(f.path()).expect("load");
        assert!(blocs.len() == 2);
        assert!(blocs.rows().iter().all(|c| c.country_code == "DEU"));
    }
}
