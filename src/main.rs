use clap::Parser;
use lectio::core::config;
use lectio::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lectio", version, about = "Terminal Bible navigator")]
struct Args {}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    // The logger's own settings come from the config, so how loading went can
    // only be logged once the logger is up
    let (file_config, loaded) = match config::load_config() {
        Ok((c, source)) => (c, Ok(source)),
        Err(e) => (config::LectioConfig::default(), Err(e)),
    };
    let resolved = config::resolve(&file_config);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    match loaded {
        Ok(source @ config::ConfigSource::File(_)) => {
            log::info!("{}", source);
            log::debug!("Config: {:?}", file_config);
        }
        Ok(source @ config::ConfigSource::Missing(_)) => log::debug!("{}", source),
        Ok(source @ config::ConfigSource::NoHomeDir) => log::warn!("{}", source),
        Err(e) => log::warn!("Ignoring config file: {}", e),
    }

    log::info!(
        "Lectio starting up (translation: {}, log: {})",
        resolved.translation,
        resolved.log_file.display()
    );

    if let Err(e) = tui::run(resolved) {
        log::error!("Fatal: {}", e);
        eprintln!("Error running program: {e}");
        std::process::exit(1);
    }
}
