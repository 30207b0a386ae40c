// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Fade: press-and-hold fading of the current imagery layer.
//!
//! While the fade tool is active, holding the pointer down fades the visible
//! year's layer out, revealing the basemap (or the layers beneath it), and
//! releasing fades it back in to the opacity it had when the hold began.
//!
//! [`FadeAnimator`] is a small state machine over an optional
//! [`AnimationSession`]. It never reads a clock: sessions schedule
//! [`FadeTick`] timers on a host-owned [`TimerQueue`], and the host feeds due
//! timers back through [`FadeAnimator::on_tick`]. At most one continuation is
//! pending at any time; starting a new session or cancelling clears the old
//! one synchronously.
//!
//! ## Minimal example
//!
//! ```rust
//! use hindsight_fade::{FadeAnimator, FadeConfig, FadeTick};
//! use hindsight_layers::{LayerInfo, TemporalLayerSet, YearConvention};
//! use hindsight_timing::{HostTime, TimerQueue};
//!
//! let mut layers = TemporalLayerSet::from_layers(
//!     &YearConvention::default(),
//!     [LayerInfo::new("Preserve - 2012").with_opacity(0.5)],
//! );
//! layers.set_visible_year(2012);
//!
//! let mut timers = TimerQueue::<FadeTick>::new();
//! let mut fade = FadeAnimator::new(FadeConfig::default());
//! let mut now = HostTime::ZERO;
//! assert!(fade.hold_start(now, &layers, &mut timers));
//!
//! // Drive the host loop until the fade-out settles.
//! while let Some(deadline) = timers.next_deadline() {
//!     now = deadline;
//!     while let Some((id, _)) = timers.pop_due(now) {
//!         fade.on_tick(id, now, &mut layers, &mut timers);
//!     }
//! }
//! assert_eq!(layers.opacity(2012), Some(0.0));
//! assert_eq!(fade.max_opacity(), Some(0.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animator;

pub use animator::{AnimationSession, FadeAnimator, FadeConfig, FadeDirection, FadeTick};
