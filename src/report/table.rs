use crate::analytics::Longevity;

/// Aligned text table for longevity results. Concatenated blocks keep
/// their internal order; no order holds across the boundary.
#[derive(Debug, Clone, Default)]
pub struct Table(Vec<Longevity>);

impl From<Vec<Longevity>> for Table {
    fn from(rows: Vec<Longevity>) -> Self {
        Self(rows)
    }
}

impl Table {
    pub fn concat(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<30} {:>15} {:>15}",
            "country_name", "life_expectancy", "gdp_per_capita"
        )?;
        for row in self.0.iter() {
            writeln!(
                f,
                "{:<30} {:>15.1} {:>15.1}",
                row.country_name, row.life_expectancy, row.gdp_per_capita
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> Longevity {
        Longevity {
            country_name: name.to_string(),
            life_expectancy: 80.,
            gdp_per_capita: 50000.,
        }
    }

    #[test]
    fn is_concat_length_additive() {
        let asean = Table::from(vec![row("Malaysia"), row("Singapore"), row("Thailand")]);
        let mercosur = Table::from(vec![row("Argentina"), row("Uruguay")]);
        let sum = asean.len() + mercosur.len();
        let combined = asean.concat(mercosur);
        assert!(combined.len() == sum);
    }

    #[test]
    fn is_block_order_preserved() {
        let combined = Table::from(vec![row("Singapore")])
            .concat(Table::from(vec![row("Argentina")]));
        let shown = combined.to_string();
        let first = shown.find("Singapore").expect("asean row");
        let second = shown.find("Argentina").expect("mercosur row");
        assert!(first < second);
    }

    #[test]
    fn is_header_present() {
        let shown = Table::default().to_string();
        assert!(shown.contains("country_name"));
        assert!(shown.contains("life_expectancy"));
        assert!(shown.contains("gdp_per_capita"));
    }
}
