use crate::Value;
use crate::analytics::Pivot;
use colored::ColoredString;
use colored::Colorize;

/// Grouped bar chart over a Pivot, rendered with unicode block glyphs.
/// One group per year, one colored bar per entity, y-axis labeled in
/// trillions of dollars.
pub struct Chart<'a>(&'a Pivot);

impl<'a> From<&'a Pivot> for Chart<'a> {
    fn from(pivot: &'a Pivot) -> Self {
        Self(pivot)
    }
}

/// Vertical resolution of the chart, in glyph rows.
const HEIGHT: usize = 12;

/// Currency-in-trillions axis label.
pub fn trillions(value: Value) -> String {
    format!("${:.1}T", value * 1e-12)
}

fn paint(column: usize, glyph: &str) -> ColoredString {
    match column % 5 {
        0 => glyph.blue(),
        1 => glyph.red(),
        2 => glyph.green(),
        3 => glyph.yellow(),
        _ => glyph.magenta(),
    }
}

impl std::fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pivot = self.0;
        let max = pivot.max();
        if pivot.is_empty() || max <= 0. {
            return write!(f, "no data to chart");
        }
        let entities = pivot.entities();
        let years = pivot.years().collect::<Vec<_>>();
        // group width leaves room for a 4-digit year label underneath
        let group = entities.len().max(4);
        writeln!(f, "total GDP (PPP, current international $)")?;
        for level in (1..=HEIGHT).rev() {
            write!(f, "{:>7} ┤ ", trillions(max * level as f64 / HEIGHT as f64))?;
            for year in years.iter().copied() {
                for column in 0..entities.len() {
                    let value = pivot.value(year, column).unwrap_or(0.);
                    let fill = value / max * HEIGHT as f64;
                    let glyph = if fill >= level as f64 {
                        "█"
                    } else if fill >= level as f64 - 0.25 {
                        "▆"
                    } else if fill >= level as f64 - 0.50 {
                        "▄"
                    } else if fill >= level as f64 - 0.75 {
                        "▂"
                    } else {
                        " "
                    };
                    write!(f, "{}", paint(column, glyph))?;
                }
                for _ in entities.len()..group {
                    write!(f, " ")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        write!(f, "{:>7} └─", "")?;
        for _ in 0..years.len() * (group + 1) {
            write!(f, "─")?;
        }
        writeln!(f)?;
        write!(f, "{:>10}", "")?;
        for year in years.iter() {
            write!(f, "{:<width$}", year, width = group + 1)?;
        }
        writeln!(f)?;
        for (column, entity) in entities.iter().enumerate() {
            writeln!(f, "{:>10}{} {}", "", paint(column, "█"), entity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::BlocGdp;

    fn pivot(rows: Vec<(&str, i32, f64)>) -> Pivot {
        rows.into_iter()
            .map(|(entity, year, total)| BlocGdp {
                entity: entity.to_string(),
                year,
                total_gdp_ppp: total,
            })
            .collect()
    }

    #[test]
    fn is_trillions_formatted() {
        assert!(trillions(3.0e13) == "$30.0T");
        assert!(trillions(1.05e12) == "$1.1T");
        assert!(trillions(0.) == "$0.0T");
    }

    #[test]
    fn is_chart_labeled() {
        colored::control::set_override(false);
        let pivot = pivot(vec![("BRICS (Calculated)", 2020, 3.0e13)]);
        let shown = Chart::from(&pivot).to_string();
        assert!(shown.contains("2020"));
        assert!(shown.contains("BRICS (Calculated)"));
        assert!(shown.contains("$30.0T"));
        assert!(shown.contains("█"));
    }

    #[test]
    fn is_tallest_bar_full_height() {
        colored::control::set_override(false);
        let pivot = pivot(vec![("A", 2020, 4.0e12), ("B", 2020, 1.0e12)]);
        let shown = Chart::from(&pivot).to_string();
        // legend contributes one block glyph per entity
        let bars = shown.matches('█').count() - 2;
        assert!(bars == HEIGHT + HEIGHT / 4);
    }

    #[test]
    fn is_empty_chart_graceful() {
        let pivot = pivot(vec![]);
        assert!(Chart::from(&pivot).to_string() == "no data to chart");
    }
}
