//! Unit tests for `DelayExecutor`: validation, zero delay, cancellation race,
//! timer failures. Timers here resolve instantly or never; wall-clock timing
//! is covered by the integration tests.
use super::*;
use crate::error::InvalidDuration;
use core::cell::Cell;
use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};

/// Timer that counts calls and resolves at once.
#[derive(Default)]
struct InstantTimer {
    calls: Cell<u32>,
}

impl DelayTimer for InstantTimer {
    type Error = ();

    async fn delay_ms(&self, _millis: u64) -> Result<(), Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Timer that never resolves.
struct StuckTimer;

impl DelayTimer for StuckTimer {
    type Error = ();

    async fn delay_ms(&self, _millis: u64) -> Result<(), Self::Error> {
        core::future::pending().await
    }
}

/// Timer whose driver is broken.
struct BrokenTimer;

impl DelayTimer for BrokenTimer {
    type Error = &'static str;

    async fn delay_ms(&self, _millis: u64) -> Result<(), Self::Error> {
        Err("driver gone")
    }
}

//==================================================================================VALIDATION
#[tokio::test]
/// Negative input fails before the timer is touched.
async fn test_negative_never_arms_timer() {
    let executor = DelayExecutor::new(InstantTimer::default());
    let result = executor.execute_uncancellable((-5i64).into()).await;

    assert!(matches!(
        result,
        Err(DelayError::InvalidArgument(InvalidDuration::Negative { millis: -5 }))
    ));
    assert_eq!(executor.timer.calls.get(), 0);
}

#[tokio::test]
/// Oversized input fails against the configured ceiling.
async fn test_too_long_rejected() {
    let config = DelayConfig::builder().max_delay_ms(10).build();
    let executor = DelayExecutor::with_config(InstantTimer::default(), config);
    let result = executor.execute_uncancellable(11i64.into()).await;

    assert!(matches!(
        result,
        Err(DelayError::InvalidArgument(InvalidDuration::TooLong { millis: 11, max: 10 }))
    ));
    assert_eq!(executor.timer.calls.get(), 0);
}

//==================================================================================WAIT
#[tokio::test]
/// Zero completes without arming a timer.
async fn test_zero_completes_without_timer() {
    let executor = DelayExecutor::new(InstantTimer::default());
    let outcome = executor.execute_uncancellable(0i64.into()).await.unwrap();

    assert_eq!(outcome, DelayOutcome::Completed);
    assert_eq!(executor.timer.calls.get(), 0);
}

#[tokio::test]
async fn test_positive_arms_timer_once() {
    let executor = DelayExecutor::new(InstantTimer::default());
    let outcome = executor.execute_uncancellable(10i64.into()).await.unwrap();

    assert_eq!(outcome, DelayOutcome::Completed);
    assert_eq!(executor.timer.calls.get(), 1);
}

#[tokio::test]
/// Timer failures are errors, never disguised as cancellation.
async fn test_timer_failure_surfaces() {
    let executor = DelayExecutor::new(BrokenTimer);
    let result = executor.execute_uncancellable(10i64.into()).await;

    assert!(matches!(result, Err(DelayError::Timer("driver gone"))));
}

//==================================================================================CANCELLATION
#[tokio::test]
/// A signal raised before the call wins even against an instant timer.
async fn test_pre_signalled_cancel_wins() {
    let signal = Signal::<NoopRawMutex, ()>::new();
    signal.signal(());

    let executor = DelayExecutor::new(InstantTimer::default());
    let outcome = executor.execute(10i64.into(), &signal).await.unwrap();

    assert_eq!(outcome, DelayOutcome::Cancelled);
}

#[tokio::test]
/// Cancellation releases a wait that would otherwise never end.
async fn test_cancel_releases_stuck_wait() {
    let signal = Signal::<NoopRawMutex, ()>::new();
    let executor = DelayExecutor::new(StuckTimer);

    let (outcome, ()) = futures_util::future::join(
        executor.execute(1_000i64.into(), &signal),
        async {
            tokio::task::yield_now().await;
            signal.signal(());
        },
    )
    .await;

    assert_eq!(outcome.unwrap(), DelayOutcome::Cancelled);
}

#[tokio::test]
/// A signal raised after completion leaves the outcome untouched.
async fn test_late_cancel_is_noop() {
    let signal = Signal::<NoopRawMutex, ()>::new();
    let executor = DelayExecutor::new(InstantTimer::default());

    let outcome = executor.execute(10i64.into(), &signal).await.unwrap();
    signal.signal(());

    assert_eq!(outcome, DelayOutcome::Completed);
    assert!(signal.signaled());
}

#[tokio::test]
/// Validation still runs first when a cancellation is pending.
async fn test_invalid_beats_cancel() {
    let signal = Signal::<NoopRawMutex, ()>::new();
    signal.signal(());

    let executor = DelayExecutor::new(InstantTimer::default());
    let result = executor.execute((-1i64).into(), &signal).await;

    assert!(result.unwrap_err().is_invalid_argument());
}
