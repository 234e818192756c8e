//! `sleep-bench` library: a controlled-delay primitive for RPC benchmark
//! endpoints, usable in a `no_std` environment. The crate exposes the data
//! contract (requests and outcomes), the runtime seams (timer and
//! cancellation), the executor, and a registration-ready service facade.
#![no_std]
#[cfg(test)]
extern crate std;
//==================================================================================
/// Delay requests, outcomes and executor configuration.
pub mod core;
/// Validation and timer failures.
pub mod error;
/// The delay executor: validation, timed wait, cancellation race.
pub mod executor;
/// Runtime abstractions: timer and cancellation traits with embassy-backed implementations.
pub mod runtime;
/// `SleepService` facade exposed to the host RPC runtime.
pub mod service;
//==================================================================================
