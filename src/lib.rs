//! Rock paper scissors against an opponent that learns.
//!
//! The engine watches the player's moves, keeps a frequency table keyed by the
//! last few moves, forecasts the most likely next move and answers with the
//! move that beats it.
//!
//! ## Modules
//!
//! - [`gameplay`]: moves, outcomes and round bookkeeping
//! - [`predict`]: move history and the variable-order prediction engine
//! - [`records`]: bulk import of historical moves from tabular files
//! - [`hosting`]: HTTP game sessions (requires `server`)
#![allow(dead_code)]

pub mod gameplay;
pub mod predict;
pub mod records;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Occurrence counts in the transition table.
pub type Count = usize;
/// Window length of recent moves used as a prediction key.
pub type Order = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and fallback play.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// PREDICTION PARAMETERS
// ============================================================================
/// Default number of recent moves forming a state key.
pub const ORDER: Order = 3;
/// Largest order accepted from configuration. Tables get sparse long before this.
pub const MAX_ORDER: Order = 16;

// ============================================================================
// SERVER PARAMETERS
// ============================================================================
/// Default listen address when neither `--bind` nor `BIND_ADDR` is given.
pub const BIND_ADDR: &str = "127.0.0.1:8080";
/// Default actix worker count.
pub const WORKERS: usize = 4;
/// Default cap on concurrently held sessions.
pub const MAX_SESSIONS: usize = 1024;
/// Default idle time after which a session is dropped.
pub const SESSION_TTL: std::time::Duration = std::time::Duration::from_secs(30 * 60);
/// How often the server sweeps idle sessions.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
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

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
