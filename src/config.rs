//! Queue construction settings
//!
//! [`QueueConfig`] selects the initial capacity and what happens when the
//! queue fills up:
//!
//! - [`GrowthPolicy::Fixed`]: inserts into a full queue fail with
//!   [`QueueError::CapacityExceeded`](crate::error::QueueError::CapacityExceeded).
//! - [`GrowthPolicy::Doubling`]: the backing buffer doubles, optionally up to
//!   `max_capacity`.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::config::{GrowthPolicy, QueueConfig};
//! # fn main() -> Result<(), rust_priority_queue::QueueError> {
//! let config = QueueConfig::builder()
//!     .initial_capacity(8)
//!     .growth(GrowthPolicy::Doubling)
//!     .max_capacity(1024)
//!     .build()?;
//! assert_eq!(config.initial_capacity, 8);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! [`QueueConfig::from_env`] reads `PQ_INITIAL_CAPACITY`, `PQ_GROWTH`
//! (`fixed` or `doubling`) and `PQ_MAX_CAPACITY`. Unset variables keep their
//! defaults; unparsable ones are rejected.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{QueueError, Result};

/// Initial capacity used by [`QueueConfig::default`]
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Environment variable prefix used by [`QueueConfig::from_env`]
pub const DEFAULT_ENV_PREFIX: &str = "PQ_";

/// What a full queue does on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Capacity never changes; inserts into a full queue fail
    Fixed,
    /// Capacity doubles when the queue is full
    #[default]
    Doubling,
}

impl fmt::Display for GrowthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPolicy::Fixed => f.write_str("fixed"),
            GrowthPolicy::Doubling => f.write_str("doubling"),
        }
    }
}

impl FromStr for GrowthPolicy {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(GrowthPolicy::Fixed),
            "doubling" | "dynamic" => Ok(GrowthPolicy::Doubling),
            other => Err(QueueError::invalid_config(
                "growth",
                format!("unknown growth policy '{}', expected 'fixed' or 'doubling'", other),
            )),
        }
    }
}

/// Settings for building a [`PriorityQueue`](crate::binary::PriorityQueue)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Slots allocated up front. Zero is clamped to one at construction.
    pub initial_capacity: usize,
    /// Behavior when the queue is full
    pub growth: GrowthPolicy,
    /// Hard ceiling for [`GrowthPolicy::Doubling`]; `None` means unbounded
    pub max_capacity: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth: GrowthPolicy::Doubling,
            max_capacity: None,
        }
    }
}

impl QueueConfig {
    /// A queue that holds at most `capacity` elements
    pub fn fixed(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            growth: GrowthPolicy::Fixed,
            max_capacity: None,
        }
    }

    /// A queue that starts with `initial_capacity` slots and doubles when full
    pub fn growable(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::Doubling,
            max_capacity: None,
        }
    }

    /// Starts a builder from the defaults
    pub fn builder() -> QueueConfigBuilder {
        QueueConfigBuilder::default()
    }

    /// The capacity actually allocated at construction
    pub fn effective_initial_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }

    /// Checks the settings for consistency
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfig`] when `max_capacity` is combined
    /// with [`GrowthPolicy::Fixed`], or is smaller than the initial capacity.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_capacity {
            if self.growth == GrowthPolicy::Fixed {
                return Err(QueueError::invalid_config(
                    "max_capacity",
                    "only meaningful with the doubling growth policy",
                ));
            }
            if max < self.effective_initial_capacity() {
                return Err(QueueError::invalid_config(
                    "max_capacity",
                    format!(
                        "{} is smaller than the initial capacity {}",
                        max,
                        self.effective_initial_capacity()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Reads settings from `PQ_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Reads settings from environment variables named `{prefix}INITIAL_CAPACITY`,
    /// `{prefix}GROWTH` and `{prefix}MAX_CAPACITY`
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfig`] if a variable is set but cannot
    /// be parsed, or if the result fails [`validate`](Self::validate).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |name| env::var(name).ok())
    }

    fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(&format!("{}INITIAL_CAPACITY", prefix)) {
            config.initial_capacity = parse_capacity("initial_capacity", &raw)?;
        }
        if let Some(raw) = lookup(&format!("{}GROWTH", prefix)) {
            config.growth = raw.parse()?;
        }
        if let Some(raw) = lookup(&format!("{}MAX_CAPACITY", prefix)) {
            config.max_capacity = Some(parse_capacity("max_capacity", &raw)?);
        }

        config.validate()?;
        log::trace!("queue config loaded from environment: {:?}", config);
        Ok(config)
    }
}

fn parse_capacity(field: &'static str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| QueueError::invalid_config(field, format!("'{}': {}", raw, e)))
}

/// Builder for [`QueueConfig`]
#[derive(Debug, Clone, Default)]
pub struct QueueConfigBuilder {
    config: QueueConfig,
}

impl QueueConfigBuilder {
    /// Sets the initial capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Sets the growth policy
    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.config.growth = growth;
        self
    }

    /// Caps doubling growth at `max` elements
    pub fn max_capacity(mut self, max: usize) -> Self {
        self.config.max_capacity = Some(max);
        self
    }

    /// Validates and returns the configuration
    pub fn build(self) -> Result<QueueConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
