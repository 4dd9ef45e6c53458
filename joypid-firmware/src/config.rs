//! Board configuration loading
//!
//! `board.toml` is validated by the build script and compiled into the
//! image. A parse failure here can only come from a hand-edited binary, so
//! it falls back to the built-in defaults rather than refusing to boot.

use defmt::*;

use joypid_core::config::{parse_config, BoardConfig};

/// Embedded board configuration
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse the embedded configuration
pub fn load() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded board configuration");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            BoardConfig::default()
        }
    }
}

fn log_config_summary(config: &BoardConfig) {
    debug!("  tick: {} Hz", config.clock.tick_hz);
    debug!(
        "  joystick: poll {} ms, dead zone {}, max step {}, active_low={}",
        config.poll_interval_ms(),
        config.joystick.dead_zone,
        config.joystick.max_step,
        config.joystick.active_low
    );
}
