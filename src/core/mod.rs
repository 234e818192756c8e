//! Data contract between the host RPC runtime and the executor.
//!
//! A [`DelayRequest`] carries the untrusted duration exactly as it arrived on
//! the wire; a [`DelayOutcome`] reports how the wait ended. Neither outlives a
//! single invocation.

use crate::error::InvalidDuration;
use crate::runtime::DEFAULT_MAX_DELAY_MS;

/// A single delay request as received from a caller.
///
/// The duration is signed on purpose: negative values must survive until
/// validation so they can be rejected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayRequest {
    /// Requested delay in milliseconds.
    pub duration_millis: i64,
}

impl DelayRequest {
    /// Wrap a raw caller-supplied duration.
    #[inline]
    pub const fn from_millis(duration_millis: i64) -> Self {
        Self { duration_millis }
    }

    /// Check the request against `config` and return the duration to wait.
    ///
    /// # Errors
    ///
    /// - [`InvalidDuration::Negative`] when `duration_millis < 0`
    /// - [`InvalidDuration::TooLong`] when it exceeds `config.max_delay_ms()`
    pub fn validate(&self, config: &DelayConfig) -> Result<u64, InvalidDuration> {
        let millis = self.duration_millis;
        if millis < 0 {
            return Err(InvalidDuration::Negative { millis });
        }
        let wait = millis as u64;
        if wait > config.max_delay_ms {
            return Err(InvalidDuration::TooLong {
                millis,
                max: config.max_delay_ms,
            });
        }
        Ok(wait)
    }
}

impl From<i64> for DelayRequest {
    fn from(duration_millis: i64) -> Self {
        Self::from_millis(duration_millis)
    }
}

impl From<i32> for DelayRequest {
    fn from(duration_millis: i32) -> Self {
        Self::from_millis(duration_millis as i64)
    }
}

/// Terminal state of a timed wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayOutcome {
    /// The full requested duration elapsed.
    Completed,
    /// The host cancelled the wait before the duration elapsed.
    Cancelled,
}

impl DelayOutcome {
    /// The full duration elapsed.
    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self, DelayOutcome::Completed)
    }

    /// The host cut the wait short.
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, DelayOutcome::Cancelled)
    }
}

//==================================================================================CONFIG
/// Executor configuration.
///
/// # Example
///
/// ```
/// use sleep_bench::core::DelayConfig;
///
/// let config = DelayConfig::builder().max_delay_ms(60_000).build();
/// assert_eq!(config.max_delay_ms(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayConfig {
    max_delay_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayConfig {
    /// Configuration with [`DEFAULT_MAX_DELAY_MS`] as ceiling.
    pub const fn new() -> Self {
        Self {
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }

    /// Create a builder starting from the defaults.
    #[inline]
    pub const fn builder() -> DelayConfigBuilder {
        DelayConfigBuilder::new()
    }

    /// Longest accepted delay (inclusive).
    #[inline]
    pub const fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }
}

/// Fluent builder for [`DelayConfig`].
#[derive(Debug, Clone, Copy)]
pub struct DelayConfigBuilder {
    max_delay_ms: u64,
}

impl Default for DelayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayConfigBuilder {
    /// Builder holding the defaults of [`DelayConfig::new`].
    pub const fn new() -> Self {
        Self {
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }

    /// Set the longest accepted delay in milliseconds.
    pub const fn max_delay_ms(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Finish the configuration.
    pub const fn build(self) -> DelayConfig {
        DelayConfig {
            max_delay_ms: self.max_delay_ms,
        }
    }
}
