//! Registration facade for the host RPC runtime.
//!
//! Host runtimes register plain callables by service and method name. The
//! [`SleepService`] trait is that callable: one integer argument in, a
//! completion or cancellation report out. Routing, marshaling and the wire
//! protocol belong to the host.
use crate::core::{DelayOutcome, DelayRequest};
use crate::error::DelayError;
use crate::executor::DelayExecutor;
use crate::runtime::traits::{cancel_signal::CancelSignal, delay_timer::DelayTimer};

/// Name under which the service is registered.
pub const SERVICE_NAME: &str = "SleepService";
/// Name of the single remotely invocable method.
pub const PERFORM_METHOD: &str = "perform";

/// Latency-injection endpoint of a benchmark server.
pub trait SleepService {
    type Error: core::fmt::Debug;

    /// Block the calling request for `millis` milliseconds.
    fn perform<'a>(
        &'a self,
        millis: i64,
    ) -> impl core::future::Future<Output = Result<DelayOutcome, Self::Error>> + 'a;

    /// Same as [`perform`](Self::perform), cut short when `cancel` fires.
    fn perform_cancellable<'a, C: CancelSignal + 'a>(
        &'a self,
        millis: i64,
        cancel: C,
    ) -> impl core::future::Future<Output = Result<DelayOutcome, Self::Error>> + 'a;
}

impl<T: DelayTimer> SleepService for DelayExecutor<T> {
    type Error = DelayError<T::Error>;

    fn perform<'a>(
        &'a self,
        millis: i64,
    ) -> impl core::future::Future<Output = Result<DelayOutcome, Self::Error>> + 'a {
        self.execute_uncancellable(DelayRequest::from_millis(millis))
    }

    fn perform_cancellable<'a, C: CancelSignal + 'a>(
        &'a self,
        millis: i64,
        cancel: C,
    ) -> impl core::future::Future<Output = Result<DelayOutcome, Self::Error>> + 'a {
        self.execute(DelayRequest::from_millis(millis), cancel)
    }
}
