use super::Schema;
use super::INDICATORS_INSERT;
use crate::data::Blocs;
use crate::data::Classification;
use crate::data::Dataset;
use crate::data::Indicator;
use const_format::concatcp;
use std::pin::Pin;
use std::time::Duration;
use std::time::Instant;
use tokio_postgres::Client;
use tokio_postgres::Error as E;
use tokio_postgres::binary_copy::BinaryCopyInWriter;

/// A row that can write itself to a pinned BinaryCopyInWriter.
/// Each implementation handles its own arity.
#[async_trait::async_trait]
pub trait Row: Send {
    async fn write(self, writer: Pin<&mut BinaryCopyInWriter>) -> Result<(), E>;
}

/// (country_name, country_code, indicator_name, indicator_code, year, value)
#[async_trait::async_trait]
impl Row for Indicator {
    async fn write(self, writer: Pin<&mut BinaryCopyInWriter>) -> Result<(), E> {
        writer
            .write(&[
                &self.country_name,
                &self.country_code,
                &self.indicator_name,
                &self.indicator_code,
                &self.year,
                &self.value,
            ])
            .await
    }
}

/// (country_code, economic_bloc)
#[async_trait::async_trait]
impl Row for Classification {
    async fn write(self, writer: Pin<&mut BinaryCopyInWriter>) -> Result<(), E> {
        writer
            .write(&[&self.country_code, &self.economic_bloc])
            .await
    }
}

/// Types that can bulk-load into their table via binary COPY.
/// Recreates the table, streams every row, then builds indices.
/// The elapsed time covers the COPY stream only, so it is directly
/// comparable with the row-by-row insert path.
#[async_trait::async_trait]
pub trait Streamable: Schema + Sized + Send {
    type Row: Row;

    /// Consume self into table rows.
    fn rows(self) -> Vec<Self::Row>;

    /// Stream rows to Postgres via binary COPY.
    async fn stream(self, client: &Client) -> Result<Loaded, E> {
        log::info!("copying into {}", Self::name());
        client.batch_execute(Self::creates()).await?;
        let clock = Instant::now();
        let sink = client.copy_in(Self::copy()).await?;
        let writer = BinaryCopyInWriter::new(sink, Self::columns());
        futures::pin_mut!(writer);
        for row in self.rows() {
            row.write(writer.as_mut()).await?;
        }
        let rows = writer.finish().await?;
        let elapsed = clock.elapsed();
        log::info!("indexing {}", Self::name());
        client.batch_execute(Self::indices()).await?;
        Ok(Loaded { rows, elapsed })
    }
}

impl Streamable for Dataset {
    type Row = Indicator;
    fn rows(self) -> Vec<Indicator> {
        self.into_iter().collect()
    }
}

impl Streamable for Blocs {
    type Row = Classification;
    fn rows(self) -> Vec<Classification> {
        self.into_iter().collect()
    }
}

/// Row-by-row insert path, the slow baseline of the load benchmark.
/// One prepared statement, one execute per row, one commit at the end,
/// exercising the per-statement round-trip cost that COPY amortizes.
#[async_trait::async_trait]
pub trait Insert: Send {
    /// Drop and recreate the benchmark table with its surrogate key.
    async fn rebuild(&self) -> Result<(), E>;
    /// Replay the dataset through single-row inserts in one transaction.
    async fn insert(&mut self, dataset: Dataset) -> Result<Loaded, E>;
}

#[async_trait::async_trait]
impl Insert for Client {
    async fn rebuild(&self) -> Result<(), E> {
        const SQL: &str = concatcp!(
            "DROP TABLE IF EXISTS ", INDICATORS_INSERT, ";
             CREATE TABLE ", INDICATORS_INSERT, " (
                id             SERIAL PRIMARY KEY,
                country_name   TEXT,
                country_code   VARCHAR(3),
                indicator_name TEXT,
                indicator_code TEXT,
                year           INTEGER,
                value          DOUBLE PRECISION
             );"
        );
        log::info!("recreating {}", INDICATORS_INSERT);
        self.batch_execute(SQL).await
    }

    async fn insert(&mut self, dataset: Dataset) -> Result<Loaded, E> {
        #[rustfmt::skip]
        const SQL: &str = concatcp!(
            "INSERT INTO ", INDICATORS_INSERT,
            " (country_name, country_code, indicator_name, indicator_code, year, value) ",
            "VALUES ($1, $2, $3, $4, $5, $6)"
        );
        log::info!("inserting into {} row by row", INDICATORS_INSERT);
        let clock = Instant::now();
        let transaction = self.transaction().await?;
        let statement = transaction.prepare(SQL).await?;
        let mut rows = 0;
        for row in dataset {
            transaction
                .execute(
                    &statement,
                    &[
                        &row.country_name,
                        &row.country_code,
                        &row.indicator_name,
                        &row.indicator_code,
                        &row.year,
                        &row.value,
                    ],
                )
                .await?;
            rows += 1;
        }
        transaction.commit().await?;
        let elapsed = clock.elapsed();
        Ok(Loaded { rows, elapsed })
    }
}

/// Timing summary for one load strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loaded {
    pub rows: u64,
    pub elapsed: Duration,
}

impl Loaded {
    /// Rows per second over the measured interval.
    pub fn throughput(&self) -> f64 {
        self.rows as f64 / self.elapsed.as_secs_f64()
    }
}

impl std::fmt::Display for Loaded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows in {:.2}ms ({:.0} rows/s)",
            self.rows,
            self.elapsed.as_secs_f64() * 1e3,
            self.throughput()
        )
    }
}

/// COPY vs INSERT comparison over the same dataset.
/// Both timings come from the same run and the same clock, so the
/// ratio is unit-consistent.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub copy: Loaded,
    pub insert: Loaded,
}

impl Benchmark {
    /// How efficient the insert path is relative to copy, in percent.
    /// 25.0 means the insert path took 4x as long as the copy path.
    pub fn efficiency(&self) -> f64 {
        self.copy.elapsed.as_secs_f64() / self.insert.elapsed.as_secs_f64() * 100.
    }
}

impl std::fmt::Display for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "comparison COPY vs INSERT")?;
        writeln!(f, "time COPY:   {}", self.copy)?;
        writeln!(f, "time INSERT: {}", self.insert)?;
        write!(
            f,
            "insert path is {:.1}% as efficient as copy",
            self.efficiency()
        )
    }
}
