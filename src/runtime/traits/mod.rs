//! Abstraction traits used by the executor (timer and cancellation source).
pub mod cancel_signal;
pub mod delay_timer;
