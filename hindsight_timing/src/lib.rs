// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Timing: a host-agnostic timer queue for cooperative runtimes.
//!
//! Nothing in this crate reads a clock. The host owns time: it passes the
//! current [`HostTime`] in when scheduling and when draining due timers, which
//! keeps every animation loop deterministic under test.
//!
//! - [`HostTime`] / [`Duration`]: monotonic microsecond values.
//! - [`FrameRate`]: converts "steps per second" into a frame period.
//! - [`TimerQueue`]: scheduled payloads addressed by generational
//!   [`TimerId`] tokens. Cancelling a token is synchronous; a cancelled or
//!   already-fired token is never delivered.
//!
//! ## Minimal example
//!
//! ```rust
//! use hindsight_timing::{Duration, FrameRate, HostTime, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let period = FrameRate::new(30).period();
//! let t0 = HostTime::ZERO;
//!
//! let a = timers.schedule(t0 + period, "a");
//! let b = timers.schedule(t0 + period, "b");
//! assert!(timers.cancel(a));
//!
//! // Only `b` is delivered once its deadline passes.
//! assert!(timers.pop_due(t0).is_none());
//! assert_eq!(timers.pop_due(t0 + period), Some((b, "b")));
//! assert!(timers.is_empty());
//! # let _ = Duration::ZERO;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod queue;
mod time;

pub use queue::{TimerId, TimerQueue};
pub use time::{Duration, FrameRate, HostTime};
