//! Logger setup for the desktop app.

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Installs the terminal logger. Later calls are ignored.
pub fn initialize() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        build_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// Terminal logger for tests; no-ops if another test already set one.
pub fn initialize_for_tests() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
