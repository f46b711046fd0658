//! Run-time settings read from the environment by the binary.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const SEED_VAR: &str = "TUI_MATCH_SEED";
pub const LOG_PATH_VAR: &str = "TUI_MATCH_LOG_PATH";

/// Environment knobs. Game rules are fixed and do not live here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Board seed; `None` derives one from the system clock.
    pub seed: Option<u32>,
    /// Log file; logging stays off when unset.
    pub log_path: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Unparsable or blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { seed, log_path }
    }

    /// Explicit seed, or one derived from the current time.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }

    /// Route `log` output to the configured file (`RUST_LOG`, default `info`).
    ///
    /// Returns `false` when no log path is configured.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = self.log_path.as_deref() else {
            return Ok(false);
        };
        let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
        Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .try_init()
            .context("initializing logger")?;
        Ok(true)
    }
}
