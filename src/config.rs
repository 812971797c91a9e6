//! Command-line and environment configuration shared by the binaries.
use crate::*;
use crate::records::Sheet;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Rock paper scissors against a move-predicting opponent")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = BIND_ADDR)]
    pub bind: String,
    /// Number of recent moves that form a prediction key.
    #[arg(long, env = "MODEL_ORDER", default_value_t = ORDER)]
    pub order: Order,
    /// HTTP worker threads.
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,
    /// Delimited or .xlsx move log to preload into every new session.
    #[arg(long)]
    pub history: Option<PathBuf>,
    /// Most sessions held at once.
    #[arg(long, env = "MAX_SESSIONS", default_value_t = MAX_SESSIONS)]
    pub max_sessions: usize,
    /// Seconds a session may sit idle before it is dropped.
    #[arg(long, env = "SESSION_TTL", default_value_t = SESSION_TTL.as_secs())]
    pub session_ttl: u64,
}

impl Config {
    /// Parses process arguments and rejects out-of-range values.
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_ORDER).contains(&self.order),
            "order must be within 1..={}, got {}",
            MAX_ORDER,
            self.order
        );
        anyhow::ensure!(self.workers > 0, "workers must be positive");
        anyhow::ensure!(self.max_sessions > 0, "max sessions must be positive");
        anyhow::ensure!(self.session_ttl > 0, "session ttl must be positive");
        Ok(())
    }
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl)
    }
    /// The preload log, or an empty one when none was given.
    pub fn preload(&self) -> anyhow::Result<Sheet> {
        match self.history {
            Some(ref path) => Ok(Sheet::read(path)?),
            None => Ok(Sheet::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::try_parse_from(["roshambo", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.workers, WORKERS);
        assert!(config.history.is_none());
        assert_eq!(config.max_sessions, MAX_SESSIONS);
        assert_eq!(config.ttl(), SESSION_TTL);
        assert!(config.validate().is_ok());
        assert!(config.preload().unwrap().is_empty());
    }

    #[test]
    fn order_bounds() {
        for (order, ok) in [("0", false), ("1", true), ("16", true), ("17", false)] {
            let config = Config::try_parse_from(["roshambo", "--order", order]).unwrap();
            assert_eq!(config.validate().is_ok(), ok, "order {}", order);
        }
    }

    #[test]
    fn session_limits_must_be_positive() {
        let config = Config::try_parse_from(["roshambo", "--max-sessions", "0"]).unwrap();
        assert!(config.validate().is_err());
        let config = Config::try_parse_from(["roshambo", "--session-ttl", "0"]).unwrap();
        assert!(config.validate().is_err());
        let config = Config::try_parse_from(["roshambo", "--session-ttl", "90"]).unwrap();
        assert_eq!(config.ttl(), Duration::from_secs(90));
    }

    #[test]
    fn order_must_be_a_number() {
        assert!(Config::try_parse_from(["roshambo", "--order", "three"]).is_err());
    }

    #[test]
    fn missing_history_file_fails_preload() {
        let config =
            Config::try_parse_from(["roshambo", "--history", "/no/such/moves.csv"]).unwrap();
        assert!(config.preload().is_err());
    }
}
