//! Error definitions for the delay primitive.
//! Cancellation is deliberately absent: it is an outcome, not an error
//! (see [`DelayOutcome`](crate::core::DelayOutcome)).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Reasons a requested duration is rejected before any wait begins.
pub enum InvalidDuration {
    /// Caller asked for a negative delay.
    #[error("Negative delay: {millis} ms")]
    Negative { millis: i64 },
    /// Caller asked for more than the configured ceiling.
    #[error("Delay too long: {millis} ms exceeds {max} ms")]
    TooLong { millis: i64, max: u64 },
}

#[derive(Error, Debug)]
/// Failures returned by [`DelayExecutor::execute`](crate::executor::DelayExecutor::execute).
pub enum DelayError<E: core::fmt::Debug> {
    /// The request was rejected during validation; no timer was armed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidDuration),

    /// The platform timer failed while waiting. Fatal for the call.
    #[error("Timer error: {0:?}")]
    Timer(E),
}

impl<E: core::fmt::Debug> DelayError<E> {
    /// Whether the caller sent an unacceptable duration.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DelayError::InvalidArgument(_))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures of the bundled [`EmbassyTimer`](crate::runtime::traits::delay_timer::EmbassyTimer).
pub enum TimerError {
    /// The deadline does not fit in the embassy tick counter.
    #[error("Delay of {millis} ms overflows the tick counter")]
    Overflow { millis: u64 },
}
