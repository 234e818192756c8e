//! Controlled-delay executor: validate the requested duration, race the timed
//! wait against the host cancellation source, and report how it ended.
//!
//! ```text
//!            validate ──Err──▶ InvalidArgument (no timer armed)
//!               │
//!               ▼
//!  ┌──────── Waiting ────────┐
//!  │ timer fires             │ cancel fires
//!  ▼                         ▼
//! Completed              Cancelled (timer dropped)
//! ```
//!
//! Nothing is retried: a cancelled wait is never resumed. The embedding RPC
//! handler decides what to answer.
use futures_util::future::{select, Either};
use futures_util::pin_mut;

use crate::core::{DelayConfig, DelayOutcome, DelayRequest};
use crate::error::DelayError;
use crate::runtime::traits::{
    cancel_signal::{CancelSignal, NeverCancel},
    delay_timer::DelayTimer,
};

/// Delay executor parameterised by the platform timer.
///
/// Holds no mutable state: share it by reference across any number of
/// concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
/// use sleep_bench::{executor::DelayExecutor, runtime::traits::delay_timer::EmbassyTimer};
///
/// static EXECUTOR: DelayExecutor<EmbassyTimer> = DelayExecutor::new(EmbassyTimer);
///
/// let disconnect = Signal::<CriticalSectionRawMutex, ()>::new();
/// let outcome = EXECUTOR.execute(250.into(), &disconnect).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DelayExecutor<T: DelayTimer> {
    timer: T,
    config: DelayConfig,
}

impl<T: DelayTimer> DelayExecutor<T> {
    /// Executor with the default [`DelayConfig`].
    pub const fn new(timer: T) -> Self {
        Self::with_config(timer, DelayConfig::new())
    }

    pub const fn with_config(timer: T, config: DelayConfig) -> Self {
        Self { timer, config }
    }

    pub fn config(&self) -> &DelayConfig {
        &self.config
    }

    /// Suspend for the requested duration unless `cancel` fires first.
    ///
    /// Strategy:
    /// 1. Validate the request; reject it before touching the timer.
    /// 2. A zero duration completes at once, without arming a timer.
    /// 3. Otherwise race cancellation against the timer. Cancellation is polled
    ///    first, so a signal raised before the call yields `Cancelled`.
    ///
    /// # Errors
    ///
    /// - [`DelayError::InvalidArgument`] for a negative or oversized duration
    /// - [`DelayError::Timer`] when the platform timer fails
    pub async fn execute<C: CancelSignal>(
        &self,
        request: DelayRequest,
        mut cancel: C,
    ) -> Result<DelayOutcome, DelayError<T::Error>> {
        let millis = match request.validate(&self.config) {
            Ok(millis) => millis,
            Err(invalid) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Rejected delay request: {}", invalid);
                return Err(invalid.into());
            }
        };

        if millis == 0 {
            return Ok(DelayOutcome::Completed);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Waiting {} ms", millis);

        let cancelled = cancel.cancelled();
        let wait = self.timer.delay_ms(millis);
        pin_mut!(cancelled);
        pin_mut!(wait);

        match select(cancelled, wait).await {
            Either::Left(((), _)) => {
                // The pending timer future is dropped on return, disarming it.
                #[cfg(feature = "defmt")]
                defmt::debug!("Delay of {} ms cancelled", millis);
                Ok(DelayOutcome::Cancelled)
            }
            Either::Right((result, _)) => {
                result.map_err(|err| {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Timer failed during a {} ms delay", millis);
                    DelayError::Timer(err)
                })?;
                #[cfg(feature = "defmt")]
                defmt::trace!("Delay of {} ms completed", millis);
                Ok(DelayOutcome::Completed)
            }
        }
    }

    /// [`execute`](Self::execute) without a cancellation source.
    pub async fn execute_uncancellable(
        &self,
        request: DelayRequest,
    ) -> Result<DelayOutcome, DelayError<T::Error>> {
        self.execute(request, NeverCancel).await
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
