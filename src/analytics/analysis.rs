use super::Bloc;
use super::BlocGdp;
use super::Longevity;
use super::Thresholds;
use crate::GDP_PER_CAPITA_PPP;
use crate::LIFE_EXPECTANCY;
use crate::POPULATION_TOTAL;
use crate::Year;
use crate::database::CLASSIFICATION;
use crate::database::Check;
use crate::database::INDICATORS;
use const_format::concatcp;
use tokio_postgres::Client;
use tokio_postgres::Error as E;

/// Read interface for the analytical queries. All SELECT text is
/// consolidated here, decoupling SQL from reporting. Bloc labels,
/// indicator names, year and thresholds all travel as bind parameters.
pub struct Analysis(Client);

impl Analysis {
    pub async fn new() -> Result<Self, E> {
        Ok(Self(crate::database::db().await?))
    }

    /// Both analytical tables must exist before any query runs.
    pub async fn ready(&self) -> Result<bool, E> {
        Ok(self.0.exists(INDICATORS).await? && self.0.exists(CLASSIFICATION).await?)
    }

    /// One row per (entity, year): the bloc's total PPP GDP, i.e. the
    /// sum over member countries of population x GDP-per-capita,
    /// counting only country-years where both indicators are present.
    /// Sorted by (entity, year) across blocs.
    pub async fn bloc_gdp(&self, blocs: &[Bloc]) -> Result<Vec<BlocGdp>, E> {
        const SQL: &str = concatcp!(
            "WITH bloc_country_gdp AS (
                SELECT ci.year,
                       ci.country_name,
                       (MAX(CASE WHEN ci.indicator_name = $2 THEN ci.value END) *
                        MAX(CASE WHEN ci.indicator_name = $3 THEN ci.value END)) AS total_gdp
                FROM   ", INDICATORS, " ci
                JOIN   ", CLASSIFICATION, " cc ON ci.country_code = cc.country_code
                WHERE  cc.economic_bloc = ANY($1)
                AND    ci.indicator_name IN ($2, $3)
                GROUP BY ci.year, ci.country_name
                HAVING MAX(CASE WHEN ci.indicator_name = $2 THEN ci.value END) IS NOT NULL
                AND    MAX(CASE WHEN ci.indicator_name = $3 THEN ci.value END) IS NOT NULL
            )
            SELECT year, SUM(total_gdp) AS total_gdp_ppp
            FROM   bloc_country_gdp
            GROUP BY year
            ORDER BY year"
        );
        let mut out = Vec::new();
        for bloc in blocs {
            log::info!("aggregating gdp ({})", bloc);
            let rows = self
                .0
                .query(SQL, &[&bloc.labels(), &GDP_PER_CAPITA_PPP, &POPULATION_TOTAL])
                .await?;
            for row in rows {
                out.push(BlocGdp {
                    entity: bloc.entity().to_string(),
                    year: row.get::<_, Year>(0),
                    total_gdp_ppp: row.get::<_, f64>(1),
                });
            }
        }
        out.sort_by(|a, b| a.entity.cmp(&b.entity).then(a.year.cmp(&b.year)));
        Ok(out)
    }

    /// Countries of one bloc whose life expectancy and GDP-per-capita
    /// both exceed the thresholds in the given year, sorted by name.
    pub async fn longevity(
        &self,
        bloc: Bloc,
        year: Year,
        thresholds: &Thresholds,
    ) -> Result<Vec<Longevity>, E> {
        const SQL: &str = concatcp!(
            "WITH bloc_life_gdp AS (
                SELECT ci.country_name,
                       MAX(CASE WHEN ci.indicator_name = $2 THEN ci.value END) AS life_expectancy,
                       MAX(CASE WHEN ci.indicator_name = $3 THEN ci.value END) AS gdp_per_capita
                FROM   ", INDICATORS, " ci
                JOIN   ", CLASSIFICATION, " cc ON ci.country_code = cc.country_code
                WHERE  cc.economic_bloc = ANY($1)
                AND    ci.year = $4
                AND    ci.indicator_name IN ($2, $3)
                GROUP BY ci.country_name
            )
            SELECT country_name, life_expectancy, gdp_per_capita
            FROM   bloc_life_gdp
            WHERE  life_expectancy > $5
            AND    gdp_per_capita > $6
            ORDER BY country_name"
        );
        log::info!("filtering longevity ({}, {})", bloc, year);
        Ok(self
            .0
            .query(
                SQL,
                &[
                    &bloc.labels(),
                    &LIFE_EXPECTANCY,
                    &GDP_PER_CAPITA_PPP,
                    &year,
                    &thresholds.life_expectancy,
                    &thresholds.gdp_per_capita,
                ],
            )
            .await?
            .into_iter()
            .map(|row| Longevity {
                country_name: row.get::<_, String>(0),
                life_expectancy: row.get::<_, f64>(1),
                gdp_per_capita: row.get::<_, f64>(2),
            })
            .collect())
    }
}
