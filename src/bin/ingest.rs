//! Ingest Binary
//!
//! Loads the combined indicator dataset into Postgres via binary COPY,
//! replays it through row-by-row INSERTs, and reports the comparison.

use blocwatch::data::Blocs;
use blocwatch::data::Dataset;
use blocwatch::database::Benchmark;
use blocwatch::database::Check;
use blocwatch::database::INDICATORS;
use blocwatch::database::INDICATORS_INSERT;
use blocwatch::database::Insert;
use blocwatch::database::Streamable;
use blocwatch::database::db;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Load indicator CSVs into Postgres and benchmark COPY vs INSERT"
)]
struct Args {
    /// long-format indicator CSV files, combined in order
    #[arg(required = true)]
    indicators: Vec<PathBuf>,
    /// country -> economic bloc classification CSV
    #[arg(long)]
    classification: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blocwatch::log();
    let args = Args::parse();
    let dataset = Dataset::load(&args.indicators)?;
    anyhow::ensure!(!dataset.is_empty(), "no rows in input files");
    log::info!("combined dataset has {} rows", dataset.len());

    let mut client = db().await?;
    if let Some(ref path) = args.classification {
        let loaded = Blocs::load(path)?.stream(&client).await?;
        log::info!("classification loaded: {}", loaded);
    }

    let copy = dataset.clone().stream(&client).await?;
    anyhow::ensure!(
        copy.rows == dataset.len() as u64,
        "copy wrote {} of {} rows",
        copy.rows,
        dataset.len()
    );
    let counted = client.rows(INDICATORS).await?;
    anyhow::ensure!(
        counted == dataset.len() as i64,
        "copy verification counted {} of {} rows",
        counted,
        dataset.len()
    );
    log::info!("copy loaded and verified: {}", copy);

    client.rebuild().await?;
    let insert = client.insert(dataset.clone()).await?;
    let counted = client.rows(INDICATORS_INSERT).await?;
    anyhow::ensure!(
        counted == dataset.len() as i64,
        "verification counted {} of {} rows",
        counted,
        dataset.len()
    );
    log::info!("verification: {} rows in {}", counted, INDICATORS_INSERT);

    println!("{}", Benchmark { copy, insert });
    Ok(())
}
