// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_layers::TemporalLayerSet;
use hindsight_timing::{Duration, FrameRate, HostTime, TimerId, TimerQueue};

/// Payload of the timers a [`FadeAnimator`] schedules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTick;

/// Which way a session moves the layer's opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    /// Towards the recorded maximum opacity.
    FadeIn,
    /// Towards zero.
    FadeOut,
}

/// Fade speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeConfig {
    /// Ticks per second.
    pub rate: FrameRate,
    /// Opacity change per tick.
    pub step: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            rate: FrameRate::new(30),
            step: 0.01,
        }
    }
}

/// One running fade.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSession {
    direction: FadeDirection,
    year: i32,
    start: f64,
    target: f64,
    step: f64,
    period: Duration,
    pending: Option<TimerId>,
    ticks: u32,
}

impl AnimationSession {
    /// Direction of the fade.
    #[must_use]
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Year of the animated layer.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Opacity the session started from.
    #[must_use]
    pub fn start_opacity(&self) -> f64 {
        self.start
    }

    /// Opacity the session ends at.
    #[must_use]
    pub fn target_opacity(&self) -> f64 {
        self.target
    }

    /// Opacity change per tick.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Time between ticks.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Token of the scheduled continuation.
    #[must_use]
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Ticks run so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Opacity after `ticks` steps and whether it reached the target.
    fn value_at(&self, ticks: u32) -> (f64, bool) {
        let delta = self.step * f64::from(ticks);
        let epsilon = self.step * 1e-6;
        match self.direction {
            FadeDirection::FadeOut => {
                let value = self.start - delta;
                if value > self.target + epsilon {
                    (value, false)
                } else {
                    (self.target, true)
                }
            }
            FadeDirection::FadeIn => {
                let value = self.start + delta;
                if value < self.target - epsilon {
                    (value, false)
                } else {
                    (self.target, true)
                }
            }
        }
    }
}

/// Drives fade-out on hold and fade-in on release.
#[derive(Clone, Debug)]
pub struct FadeAnimator {
    config: FadeConfig,
    max_opacity: Option<f64>,
    session: Option<AnimationSession>,
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self::new(FadeConfig::default())
    }
}

impl FadeAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            max_opacity: None,
            session: None,
        }
    }

    /// The fade speed.
    #[must_use]
    pub fn config(&self) -> FadeConfig {
        self.config
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session has a tick pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.pending.is_some())
    }

    /// Opacity recorded when the current hold began.
    #[must_use]
    pub fn max_opacity(&self) -> Option<f64> {
        self.max_opacity
    }

    /// Starts fading the visible layer out.
    ///
    /// Records the layer's current opacity as the level to fade back in to,
    /// even when a fade-in from an earlier hold is still running. Returns
    /// `false` when no layer is visible.
    pub fn hold_start(
        &mut self,
        now: HostTime,
        layers: &TemporalLayerSet,
        timers: &mut TimerQueue<FadeTick>,
    ) -> bool {
        let Some(layer) = layers.find_visible() else {
            log::debug!("fade hold ignored: no visible imagery layer");
            return false;
        };
        let (year, opacity) = (layer.year(), layer.opacity());
        self.max_opacity = Some(opacity.clamp(0.0, 1.0));
        self.start(FadeDirection::FadeOut, year, opacity, 0.0, now, timers);
        true
    }

    /// Starts fading back in to the recorded maximum opacity.
    ///
    /// A pending fade-out tick is cancelled first. Returns `false` when no hold
    /// preceded the release.
    pub fn release(
        &mut self,
        now: HostTime,
        layers: &TemporalLayerSet,
        timers: &mut TimerQueue<FadeTick>,
    ) -> bool {
        let Some(max) = self.max_opacity else {
            return false;
        };
        let year = self
            .session
            .as_ref()
            .map(AnimationSession::year)
            .or_else(|| layers.visible_year());
        let Some(year) = year else {
            self.clear_pending(timers);
            return false;
        };
        let opacity = layers.opacity(year).unwrap_or(0.0);
        self.start(FadeDirection::FadeIn, year, opacity, max, now, timers);
        true
    }

    /// Runs one step of the session that scheduled `id`.
    ///
    /// Tokens other than the pending one are ignored and `false` is returned.
    pub fn on_tick(
        &mut self,
        id: TimerId,
        now: HostTime,
        layers: &mut TemporalLayerSet,
        timers: &mut TimerQueue<FadeTick>,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.pending != Some(id) {
            log::trace!("ignoring stale fade tick {id:?}");
            return false;
        }
        session.pending = None;
        session.ticks += 1;
        let (value, done) = session.value_at(session.ticks);
        log::trace!(
            "fade {:?} tick {} for {}: {value}",
            session.direction,
            session.ticks,
            session.year
        );
        if !done {
            layers.set_layer_opacity(session.year, value);
            session.pending = Some(timers.schedule(now + session.period, FadeTick));
            return true;
        }

        let direction = session.direction;
        self.session = None;
        layers.set_group_opacity(value);
        if direction == FadeDirection::FadeIn {
            self.max_opacity = None;
        }
        log::debug!("fade {direction:?} finished at opacity {value}");
        true
    }

    /// Stops any fade, for example when the tool is deactivated.
    ///
    /// The pending tick is cancelled and, if a hold was in progress, the
    /// recorded maximum opacity is restored to every layer. Returns `true` if
    /// anything was interrupted.
    pub fn cancel(
        &mut self,
        timers: &mut TimerQueue<FadeTick>,
        layers: &mut TemporalLayerSet,
    ) -> bool {
        let had_session = self.clear_pending(timers);
        let restored = self.max_opacity.take().map(|max| {
            layers.set_group_opacity(max);
            max
        });
        if had_session || restored.is_some() {
            log::debug!("fade cancelled, restored opacity {restored:?}");
            true
        } else {
            false
        }
    }

    fn start(
        &mut self,
        direction: FadeDirection,
        year: i32,
        start: f64,
        target: f64,
        now: HostTime,
        timers: &mut TimerQueue<FadeTick>,
    ) {
        self.clear_pending(timers);
        let pending = timers.schedule(now, FadeTick);
        log::debug!("fade {direction:?} of {year} from {start} to {target}");
        self.session = Some(AnimationSession {
            direction,
            year,
            start,
            target,
            step: self.config.step,
            period: self.config.rate.period(),
            pending: Some(pending),
            ticks: 0,
        });
    }

    fn clear_pending(&mut self, timers: &mut TimerQueue<FadeTick>) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        if let Some(id) = session.pending {
            timers.cancel(id);
        }
        true
    }
}
