//! Analyze Binary
//!
//! Runs the analytical queries against the populated tables and renders
//! the chart and tables to the terminal.

use blocwatch::Year;
use blocwatch::analytics::Analysis;
use blocwatch::analytics::Bloc;
use blocwatch::analytics::Pivot;
use blocwatch::analytics::Thresholds;
use blocwatch::report::Chart;
use blocwatch::report::Table;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Report {
    #[command(about = "Chart total PPP GDP per economic bloc per year")]
    Gdp {
        /// years to include in the chart
        #[arg(long, value_delimiter = ',', default_values_t = 2014..=2024)]
        years: Vec<Year>,
        /// blocs to aggregate
        #[arg(long, value_delimiter = ',', value_enum,
              default_values_t = [Bloc::Brics, Bloc::Asean, Bloc::Eu, Bloc::Usmca])]
        blocs: Vec<Bloc>,
    },
    #[command(
        about = "Countries beating life-expectancy and income thresholds",
        alias = "life"
    )]
    Longevity {
        #[arg(long, default_value_t = 2019)]
        year: Year,
        #[arg(long, default_value_t = 75.)]
        life_expectancy: f64,
        #[arg(long, default_value_t = 20000.)]
        gdp_per_capita: f64,
        /// blocs to compare side by side
        #[arg(long, value_delimiter = ',', value_enum,
              default_values_t = [Bloc::Asean, Bloc::Mercosur])]
        blocs: Vec<Bloc>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blocwatch::log();
    let report = Report::parse();
    let analysis = Analysis::new().await?;
    anyhow::ensure!(
        analysis.ready().await?,
        "analytical tables missing, run ingest first"
    );
    match report {
        Report::Gdp { years, blocs } => {
            let rows = analysis.bloc_gdp(&blocs).await?;
            let mut pivot = rows.into_iter().collect::<Pivot>();
            pivot.retain_years(&years);
            println!("{}", Chart::from(&pivot));
        }
        Report::Longevity {
            year,
            life_expectancy,
            gdp_per_capita,
            blocs,
        } => {
            let ref thresholds = Thresholds {
                life_expectancy,
                gdp_per_capita,
            };
            let mut table = Table::default();
            for bloc in blocs {
                let rows = analysis.longevity(bloc, year, thresholds).await?;
                log::info!("{} countries qualify in {}", rows.len(), bloc);
                table = table.concat(Table::from(rows));
            }
            println!("{}", table);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_gdp_subcommand_parsed() {
        assert!(Report::try_parse_from(["analyze", "gdp"]).is_ok());
    }

    #[test]
    fn is_longevity_alias_parsed() {
        assert!(matches!(
            Report::try_parse_from(["analyze", "life"]),
            Ok(Report::Longevity { year: 2019, .. })
        ));
    }

    #[test]
    fn is_threshold_default_fixed() {
        match Report::try_parse_from(["analyze", "longevity"]) {
            Ok(Report::Longevity {
                life_expectancy,
                gdp_per_capita,
                ..
            }) => {
                assert!(life_expectancy == 75.);
                assert!(gdp_per_capita == 20000.);
            }
            _ => panic!("longevity defaults"),
        }
    }
}
