//! Host cancellation source.
//!
//! The host runtime (client disconnect, shutdown, deadline exceeded) fires a
//! signal; the executor only ever *awaits* it. Firing is the host's business,
//! so the trait has no `cancel` method.
use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};

/// Contract for anything able to tell the executor "stop waiting".
pub trait CancelSignal {
    /// Resolve once cancellation has been requested. Must resolve on the first
    /// poll if the request was issued before the call.
    fn cancelled<'a>(&'a mut self) -> impl core::future::Future<Output = ()> + 'a;
}

/// Cancellation source that never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn cancelled<'a>(&'a mut self) -> impl core::future::Future<Output = ()> + 'a {
        core::future::pending()
    }
}

/// A borrowed embassy [`Signal`] as cancellation source.
///
/// `Signal` has a single waiter and the executor consumes it on wake, so one
/// `signal()` cancels exactly one call. Give each in-flight call its own
/// signal; for a shutdown that must reach every call, implement
/// [`CancelSignal`] over a multi-waiter primitive such as
/// `embassy_sync::watch::Watch` instead of sharing one `Signal`.
///
/// A signal raised after the call returned stays pending and does not affect
/// the outcome already produced.
impl<'s, M: RawMutex> CancelSignal for &'s Signal<M, ()> {
    fn cancelled<'a>(&'a mut self) -> impl core::future::Future<Output = ()> + 'a {
        let signal: &'s Signal<M, ()> = *self;
        signal.wait()
    }
}

/// Lend a cancellation source to one call and keep it for the next.
impl<C: CancelSignal> CancelSignal for &mut C {
    fn cancelled<'a>(&'a mut self) -> impl core::future::Future<Output = ()> + 'a {
        (**self).cancelled()
    }
}
