use super::BlocGdp;
use crate::Value;
use crate::Year;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Wide reshape of aggregated rows: one row per year, one column per
/// entity. Entity columns are sorted by name; years sort ascending
/// under the BTreeMap. A missing (year, entity) cell is None.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pivot {
    entities: Vec<String>,
    cells: BTreeMap<Year, Vec<Option<Value>>>,
}

impl FromIterator<BlocGdp> for Pivot {
    fn from_iter<I: IntoIterator<Item = BlocGdp>>(iter: I) -> Self {
        let rows = iter.into_iter().collect::<Vec<_>>();
        let entities = rows
            .iter()
            .map(|row| row.entity.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let mut cells = BTreeMap::<Year, Vec<Option<Value>>>::new();
        for row in rows {
            let column = entities
                .iter()
                .position(|entity| *entity == row.entity)
                .expect("entity indexed");
            cells
                .entry(row.year)
                .or_insert_with(|| vec![None; entities.len()])[column] =
                Some(row.total_gdp_ppp);
        }
        Self { entities, cells }
    }
}

impl Pivot {
    pub fn entities(&self) -> &[String] {
        &self.entities
    }
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.cells.keys().copied()
    }
    pub fn value(&self, year: Year, column: usize) -> Option<Value> {
        self.cells
            .get(&year)
            .and_then(|row| row.get(column))
            .copied()
            .flatten()
    }
    /// Keep only the plot years.
    pub fn retain_years(&mut self, years: &[Year]) {
        self.cells.retain(|year, _| years.contains(year));
    }
    /// Largest cell value, 0 when the table is empty.
    pub fn max(&self) -> Value {
        self.cells
            .values()
            .flatten()
            .flatten()
            .fold(0., |max, value| max.max(*value))
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: &str, year: Year, total: Value) -> BlocGdp {
        BlocGdp {
            entity: entity.to_string(),
            year,
            total_gdp_ppp: total,
        }
    }

    #[test]
    fn is_wide_by_year_and_entity() {
        let pivot = vec![
            row("BRICS (Calculated)", 2020, 1.0e13),
            row("ASEAN (Calculated)", 2020, 2.0e13),
            row("BRICS (Calculated)", 2021, 3.0e13),
        ]
        .into_iter()
        .collect::<Pivot>();
        assert!(pivot.entities() == ["ASEAN (Calculated)", "BRICS (Calculated)"]);
        assert!(pivot.years().collect::<Vec<_>>() == [2020, 2021]);
        assert!(pivot.value(2020, 1) == Some(1.0e13));
        assert!(pivot.value(2020, 0) == Some(2.0e13));
    }

    #[test]
    fn is_missing_cell_none() {
        let pivot = vec![
            row("A", 2020, 1.),
            row("B", 2021, 2.),
        ]
        .into_iter()
        .collect::<Pivot>();
        assert!(pivot.value(2021, 0).is_none());
        assert!(pivot.value(2020, 1).is_none());
        assert!(pivot.value(2019, 0).is_none());
    }

    #[test]
    fn is_year_filter_retaining() {
        let mut pivot = vec![
            row("A", 2013, 1.),
            row("A", 2014, 2.),
            row("A", 2024, 3.),
        ]
        .into_iter()
        .collect::<Pivot>();
        pivot.retain_years(&(2014..=2024).collect::<Vec<_>>());
        assert!(pivot.years().collect::<Vec<_>>() == [2014, 2024]);
        assert!(pivot.max() == 3.);
    }

    #[test]
    fn is_empty_pivot_max_zero() {
        let pivot = Vec::<BlocGdp>::new().into_iter().collect::<Pivot>();
        assert!(pivot.is_empty());
        assert!(pivot.max() == 0.);
    }
}
