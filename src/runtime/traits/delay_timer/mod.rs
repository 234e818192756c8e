//! Asynchronous timer abstraction providing the timed wait behind every delay.

use embassy_time::{Duration, Instant, TICK_HZ};

use crate::error::TimerError;

/// Timer trait abstraction.
///
/// Implementations must suspend through a timer wake (never by blocking a
/// thread) and must never resolve before `millis` has elapsed. Rounding up to
/// the next tick is fine; rounding down is not.
///
/// The method takes `&self` so one executor can serve any number of
/// concurrent calls without a lock.
pub trait DelayTimer {
    /// Platform failure raised by the timer itself.
    type Error: core::fmt::Debug;

    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a self,
        millis: u64,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a;
}

/// [`DelayTimer`] backed by `embassy_time::Timer`.
///
/// Needs an embassy time driver (the firmware's, or the `std` driver on a
/// host). Which executor may poll it depends on the timer queue:
///
/// - default (integrated queue): embassy-executor only; any other executor
///   panics on the first poll.
/// - `generic-queue` feature of this crate: any executor (tokio included).
///
/// Each call arms its own timer; dropping the future disarms it. Durations
/// whose deadline does not fit in the tick counter fail with
/// [`TimerError::Overflow`] instead of wrapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

impl DelayTimer for EmbassyTimer {
    type Error = TimerError;

    fn delay_ms<'a>(
        &'a self,
        millis: u64,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        async move {
            let deadline = deadline_after(Instant::now(), millis)?;
            embassy_time::Timer::at(deadline).await;
            Ok(())
        }
    }
}

/// Instant `millis` after `now`, rounded up to the next tick.
fn deadline_after(now: Instant, millis: u64) -> Result<Instant, TimerError> {
    let ticks = millis
        .checked_mul(TICK_HZ)
        .map(|scaled| scaled.div_ceil(1000))
        .ok_or(TimerError::Overflow { millis })?;
    now.checked_add(Duration::from_ticks(ticks))
        .ok_or(TimerError::Overflow { millis })
}

/// Lend a timer to an executor without giving it away.
impl<T: DelayTimer> DelayTimer for &T {
    type Error = T::Error;

    fn delay_ms<'a>(
        &'a self,
        millis: u64,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        (**self).delay_ms(millis)
    }
}
