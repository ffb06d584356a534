// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility for the playback screen.
//!
//! One authoritative indicator slot holds at most one of the brightness and
//! volume indicators, so both can never be visible together. The control
//! bar is independent. Every overlay owns at most one pending auto-hide
//! timer; rescheduling replaces it instead of stacking.

use std::time::Instant;

use crate::domain::playback::Percent;
use crate::domain::ui::OverlayDelay;

use super::timer::{TimerHandle, TimerQueue};

/// The two transient level indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Brightness,
    Volume,
}

/// A visible indicator and the percentage it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub percent: Percent,
}

/// Timers owned by the overlay manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTimer {
    IndicatorDismiss,
    ControlBarHide,
}

/// Visibility changes the view layer must render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Shown, or its percentage changed.
    IndicatorShown(Indicator),
    IndicatorHidden(IndicatorKind),
    ControlBarShown,
    ControlBarHidden,
}

#[derive(Debug, Clone)]
pub struct OverlayManager {
    timers: TimerQueue<OverlayTimer>,
    indicator: Option<Indicator>,
    indicator_timer: Option<TimerHandle>,
    control_bar_visible: bool,
    control_bar_timer: Option<TimerHandle>,
    indicator_delay: OverlayDelay,
    control_bar_delay: OverlayDelay,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(OverlayDelay::INDICATOR, OverlayDelay::CONTROL_BAR)
    }
}

impl OverlayManager {
    #[must_use]
    pub fn new(indicator_delay: OverlayDelay, control_bar_delay: OverlayDelay) -> Self {
        Self {
            timers: TimerQueue::new(),
            indicator: None,
            indicator_timer: None,
            control_bar_visible: false,
            control_bar_timer: None,
            indicator_delay,
            control_bar_delay,
        }
    }

    /// Visible indicator, if any.
    #[must_use]
    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    #[must_use]
    pub fn control_bar_visible(&self) -> bool {
        self.control_bar_visible
    }

    /// When the visible indicator will hide itself.
    #[must_use]
    pub fn indicator_deadline(&self) -> Option<Instant> {
        self.indicator_timer
            .and_then(|handle| self.timers.deadline(handle))
    }

    /// When the control bar will hide itself.
    #[must_use]
    pub fn control_bar_deadline(&self) -> Option<Instant> {
        self.control_bar_timer
            .and_then(|handle| self.timers.deadline(handle))
    }

    /// Earliest pending auto-hide deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Shows `kind` with `percent`, replacing the other indicator and
    /// restarting the dismiss countdown.
    pub fn show_indicator(
        &mut self,
        kind: IndicatorKind,
        percent: Percent,
        now: Instant,
    ) -> Vec<OverlayEffect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.indicator {
            if previous.kind != kind {
                effects.push(OverlayEffect::IndicatorHidden(previous.kind));
            }
        }
        self.cancel_indicator_timer();

        let indicator = Indicator { kind, percent };
        self.indicator = Some(indicator);
        self.indicator_timer = Some(self.timers.schedule(
            OverlayTimer::IndicatorDismiss,
            now,
            self.indicator_delay.as_duration(),
        ));
        tracing::debug!(?kind, %percent, "indicator shown");
        effects.push(OverlayEffect::IndicatorShown(indicator));
        effects
    }

    /// Hides whichever indicator is visible.
    pub fn hide_indicator(&mut self) -> Option<OverlayEffect> {
        self.cancel_indicator_timer();
        self.indicator
            .take()
            .map(|indicator| OverlayEffect::IndicatorHidden(indicator.kind))
    }

    /// Flips control-bar visibility. Showing arms the auto-hide timer,
    /// hiding cancels it. Indicator timers are left alone.
    pub fn toggle_control_bar(&mut self, now: Instant) -> OverlayEffect {
        if self.control_bar_visible {
            self.hide_control_bar()
        } else {
            self.show_control_bar(now)
        }
    }

    pub fn show_control_bar(&mut self, now: Instant) -> OverlayEffect {
        self.control_bar_visible = true;
        self.arm_control_bar_timer(now);
        tracing::debug!("control bar shown");
        OverlayEffect::ControlBarShown
    }

    pub fn hide_control_bar(&mut self) -> OverlayEffect {
        self.control_bar_visible = false;
        self.cancel_control_bar_timer();
        tracing::debug!("control bar hidden");
        OverlayEffect::ControlBarHidden
    }

    /// Records user interaction with an overlay: restarts the control-bar
    /// countdown without changing visibility.
    pub fn touch(&mut self, now: Instant) {
        if self.control_bar_visible {
            self.arm_control_bar_timer(now);
        }
    }

    /// Fires every auto-hide timer due at `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<OverlayEffect> {
        let mut effects = Vec::new();
        for (handle, timer) in self.timers.expire(now) {
            match timer {
                OverlayTimer::IndicatorDismiss if self.indicator_timer == Some(handle) => {
                    self.indicator_timer = None;
                    if let Some(indicator) = self.indicator.take() {
                        tracing::debug!(kind = ?indicator.kind, "indicator dismissed");
                        effects.push(OverlayEffect::IndicatorHidden(indicator.kind));
                    }
                }
                OverlayTimer::ControlBarHide if self.control_bar_timer == Some(handle) => {
                    self.control_bar_timer = None;
                    if self.control_bar_visible {
                        self.control_bar_visible = false;
                        tracing::debug!("control bar auto-hidden");
                        effects.push(OverlayEffect::ControlBarHidden);
                    }
                }
                _ => {}
            }
        }
        effects
    }

    /// Cancels every pending timer. Visibility is kept as is.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
        self.indicator_timer = None;
        self.control_bar_timer = None;
    }

    fn arm_control_bar_timer(&mut self, now: Instant) {
        self.cancel_control_bar_timer();
        self.control_bar_timer = Some(self.timers.schedule(
            OverlayTimer::ControlBarHide,
            now,
            self.control_bar_delay.as_duration(),
        ));
    }

    fn cancel_indicator_timer(&mut self) {
        if let Some(handle) = self.indicator_timer.take() {
            self.timers.cancel(handle);
        }
    }

    fn cancel_control_bar_timer(&mut self) {
        if let Some(handle) = self.control_bar_timer.take() {
            self.timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn percent(value: f32) -> Percent {
        Percent::from_ratio(value)
    }

    #[test]
    fn showing_one_indicator_hides_the_other() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_indicator(IndicatorKind::Brightness, percent(0.5), t0);

        let effects = overlay.show_indicator(IndicatorKind::Volume, percent(0.4), t0 + ms(10));
        assert_eq!(
            effects,
            vec![
                OverlayEffect::IndicatorHidden(IndicatorKind::Brightness),
                OverlayEffect::IndicatorShown(Indicator {
                    kind: IndicatorKind::Volume,
                    percent: percent(0.4),
                }),
            ]
        );
        assert_eq!(
            overlay.indicator().map(|indicator| indicator.kind),
            Some(IndicatorKind::Volume)
        );
    }

    #[test]
    fn fresh_tick_resets_dismiss_countdown() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_indicator(IndicatorKind::Volume, percent(0.4), t0);
        overlay.show_indicator(IndicatorKind::Volume, percent(0.5), t0 + ms(1000));

        assert!(overlay.expire(t0 + ms(1500)).is_empty());
        assert!(overlay.indicator().is_some());
        assert_eq!(
            overlay.expire(t0 + ms(2500)),
            vec![OverlayEffect::IndicatorHidden(IndicatorKind::Volume)]
        );
        assert!(overlay.indicator().is_none());
        assert_eq!(overlay.next_deadline(), None);
    }

    #[test]
    fn replaced_indicator_timer_never_fires() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_indicator(IndicatorKind::Brightness, percent(0.5), t0);
        overlay.show_indicator(IndicatorKind::Volume, percent(0.4), t0 + ms(500));

        // The brightness timer would have fired at 1500.
        assert!(overlay.expire(t0 + ms(1600)).is_empty());
        assert_eq!(
            overlay.indicator_deadline(),
            Some(t0 + ms(2000))
        );
    }

    #[test]
    fn control_bar_toggle_arms_and_cancels_timer() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();

        assert_eq!(overlay.toggle_control_bar(t0), OverlayEffect::ControlBarShown);
        assert_eq!(overlay.control_bar_deadline(), Some(t0 + ms(3000)));

        assert_eq!(
            overlay.toggle_control_bar(t0 + ms(100)),
            OverlayEffect::ControlBarHidden
        );
        assert_eq!(overlay.control_bar_deadline(), None);
        assert!(overlay.expire(t0 + ms(5000)).is_empty());
    }

    #[test]
    fn control_bar_auto_hides() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_control_bar(t0);
        assert_eq!(
            overlay.expire(t0 + ms(3000)),
            vec![OverlayEffect::ControlBarHidden]
        );
        assert!(!overlay.control_bar_visible());
    }

    #[test]
    fn interaction_postpones_auto_hide() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_control_bar(t0);
        overlay.touch(t0 + ms(2000));

        assert!(overlay.expire(t0 + ms(3000)).is_empty());
        assert!(overlay.control_bar_visible());
        assert_eq!(overlay.control_bar_deadline(), Some(t0 + ms(5000)));
    }

    #[test]
    fn interaction_with_hidden_bar_does_nothing() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.touch(t0);
        assert!(!overlay.control_bar_visible());
        assert_eq!(overlay.next_deadline(), None);
    }

    #[test]
    fn showing_control_bar_keeps_indicator_timer() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_indicator(IndicatorKind::Volume, percent(0.2), t0);
        overlay.show_control_bar(t0 + ms(100));

        assert_eq!(overlay.indicator_deadline(), Some(t0 + ms(1500)));
        assert_eq!(
            overlay.expire(t0 + ms(1500)),
            vec![OverlayEffect::IndicatorHidden(IndicatorKind::Volume)]
        );
        assert!(overlay.control_bar_visible());
    }

    #[test]
    fn custom_delays_are_used() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::new(OverlayDelay::new(400), OverlayDelay::new(800));
        overlay.show_indicator(IndicatorKind::Brightness, percent(1.0), t0);
        overlay.show_control_bar(t0);
        assert_eq!(overlay.next_deadline(), Some(t0 + ms(400)));
        assert_eq!(overlay.control_bar_deadline(), Some(t0 + ms(800)));
    }

    #[test]
    fn cancel_all_keeps_visibility() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        overlay.show_indicator(IndicatorKind::Brightness, percent(1.0), t0);
        overlay.show_control_bar(t0);
        overlay.cancel_all();

        assert!(overlay.expire(t0 + ms(10_000)).is_empty());
        assert!(overlay.indicator().is_some());
        assert!(overlay.control_bar_visible());
    }

    #[test]
    fn hide_indicator_reports_hidden_kind() {
        let t0 = Instant::now();
        let mut overlay = OverlayManager::default();
        assert_eq!(overlay.hide_indicator(), None);
        overlay.show_indicator(IndicatorKind::Brightness, percent(0.3), t0);
        assert_eq!(
            overlay.hide_indicator(),
            Some(OverlayEffect::IndicatorHidden(IndicatorKind::Brightness))
        );
        assert_eq!(overlay.next_deadline(), None);
    }
}
