pub mod analytics;
pub mod data;
pub mod database;
pub mod report;

/// Calendar year of an indicator observation.
pub type Year = i32;
/// Numeric value of an indicator observation.
pub type Value = f64;

/// World Bank indicator names exactly as they appear in the source data.
pub const GDP_PER_CAPITA_PPP: &str = "GDP per capita PPP (current international $)";
pub const POPULATION_TOTAL: &str = "Population, total";
pub const LIFE_EXPECTANCY: &str = "Life expectancy at birth, total (years)";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
