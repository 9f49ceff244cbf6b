//! Command line configuration. The board size is fixed and not exposed here.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Parser)]
#[command(name = "snake", version, about = "Grid snake in the terminal")]
pub struct Config {
    /// Milliseconds between two snake steps.
    #[arg(long, env = "SNAKE_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for food placement. Random when omitted.
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u64>,

    /// Write log records to this file. Filtered by RUST_LOG, `info` by default.
    /// Without it nothing is logged, since stderr shares the screen with the board.
    #[arg(long, env = "SNAKE_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["snake"]).unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(config.seed.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["snake", "--tick-ms", "50", "--seed", "9", "--log-file", "s.log"])
                .unwrap();
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_file, Some(PathBuf::from("s.log")));
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Config::try_parse_from(["snake", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_debug_assert() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
