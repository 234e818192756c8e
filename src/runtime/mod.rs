//! Runtime seams of the delay primitive: the timed-wait abstraction and the
//! host cancellation source, plus the timing constants shared by both.
//!
//! ## Timing constants
//!
//! These constants bound what callers can request and what latency they
//! should expect when cancelling a pending wait.

pub mod traits;

/// Default ceiling for a single delay (ms).
///
/// The benchmark endpoint historically takes a 32-bit signed integer, so
/// anything above `i32::MAX` milliseconds (about 24.8 days) is outside the
/// contract and rejected as an invalid argument.
pub const DEFAULT_MAX_DELAY_MS: u64 = i32::MAX as u64;

/// Expected upper bound between a cancellation signal and the executor
/// returning [`DelayOutcome::Cancelled`](crate::core::DelayOutcome::Cancelled) (ms).
///
/// Cancellation is event driven: the signal wakes the waiting task directly,
/// so the actual latency is one scheduler round-trip. The figure gives
/// timing-sensitive callers (and tests) a generous margin for jitter on a
/// loaded host.
///
/// # Example
///
/// ```rust,ignore
/// use embassy_time::{with_timeout, Duration};
/// use sleep_bench::runtime::CANCEL_WAKE_LATENCY_MS;
///
/// signal.signal(());
/// with_timeout(Duration::from_millis(CANCEL_WAKE_LATENCY_MS), pending_call)
///     .await
///     .expect("cancellation was not honoured in time");
/// ```
pub const CANCEL_WAKE_LATENCY_MS: u64 = 50;
