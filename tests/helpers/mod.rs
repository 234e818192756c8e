/// Test doubles standing in for the host runtime: a tokio-driven timer,
/// a failing timer, and a oneshot-backed cancellation source.
use sleep_bench::runtime::traits::{cancel_signal::CancelSignal, delay_timer::DelayTimer};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::time::sleep;

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep`.
pub struct MockTimer;

impl DelayTimer for MockTimer {
    type Error = ();

    async fn delay_ms(&self, millis: u64) -> Result<(), Self::Error> {
        sleep(Duration::from_millis(millis)).await;
        Ok(())
    }
}

#[allow(dead_code)]
/// Timer whose platform driver fails on every call.
pub struct FailingTimer;

impl DelayTimer for FailingTimer {
    type Error = &'static str;

    async fn delay_ms(&self, _millis: u64) -> Result<(), Self::Error> {
        Err("timer driver unavailable")
    }
}

#[allow(dead_code)]
/// Cancellation source fired through a oneshot sender, the way a host
/// connection task would on client disconnect.
pub struct MockCancel {
    rx: oneshot::Receiver<()>,
}

#[allow(dead_code)]
impl MockCancel {
    /// Build the host-side trigger and the executor-side source.
    pub fn pair() -> (oneshot::Sender<()>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }
}

impl CancelSignal for MockCancel {
    async fn cancelled(&mut self) {
        // A dropped trigger means the host will never cancel.
        if (&mut self.rx).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[allow(dead_code)]
/// Fire `trigger` after `after`, from a separate task.
pub(crate) fn cancel_after(trigger: oneshot::Sender<()>, after: Duration) {
    tokio::spawn(async move {
        sleep(after).await;
        let _ = trigger.send(());
    });
}

#[allow(dead_code)]
/// Time a future from its first poll to completion.
pub(crate) async fn timed<F: std::future::Future>(fut: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let out = fut.await;
    (out, start.elapsed())
}
