// SPDX-License-Identifier: MPL-2.0
//! Touch gesture classification on the playback surface.
//!
//! A touch sequence is either a tap (short, no movement beyond the drag
//! threshold) or a drag. Vertical drags adjust brightness on the left half
//! of the surface and volume on the right half; horizontal movement is
//! ignored.

use std::time::Instant;

use crate::domain::ui::{DragThreshold, TapTimeout};

/// A position on the playback surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Raw pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point, at: Instant },
    Move { position: Point, at: Instant },
    Up { at: Instant },
    /// The platform took the touch away (e.g. a system gesture).
    Cancel,
}

/// Level a vertical drag adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustTarget {
    Brightness,
    Volume,
}

/// Result of feeding one pointer event to the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    None,
    /// Short touch without movement.
    Tap,
    /// One vertical drag tick. `delta_y` is in screen coordinates (positive
    /// is downwards). `drag_started` is set on the first tick of a drag.
    Adjust {
        target: AdjustTarget,
        delta_y: f32,
        drag_started: bool,
    },
}

/// Ephemeral state of one touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub started_at: Instant,
    pub start: Point,
    pub last: Point,
    /// Movement accumulated since the touch went down.
    pub total_dx: f32,
    pub total_dy: f32,
    pub is_dragging: bool,
    /// Decided by the horizontal position at touch-down.
    pub target: AdjustTarget,
    adjusted: bool,
    /// Vertical movement of a horizontal crossing tick, added to the next
    /// vertical tick.
    carried_dy: f32,
}

/// Turns pointer events into taps and adjustment ticks.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    threshold: DragThreshold,
    tap_timeout: TapTimeout,
    surface_width: f32,
    current: Option<GestureState>,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(threshold: DragThreshold, tap_timeout: TapTimeout, surface_width: f32) -> Self {
        Self {
            threshold,
            tap_timeout,
            surface_width: surface_width.max(1.0),
            current: None,
        }
    }

    /// Updates the surface width after a layout change.
    pub fn set_surface_width(&mut self, width: f32) {
        self.surface_width = width.max(1.0);
    }

    #[must_use]
    pub fn surface_width(&self) -> f32 {
        self.surface_width
    }

    /// The touch sequence in progress, if any.
    #[must_use]
    pub fn current(&self) -> Option<&GestureState> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.current.is_some_and(|state| state.is_dragging)
    }

    fn target_for(&self, position: Point) -> AdjustTarget {
        if position.x < self.surface_width / 2.0 {
            AdjustTarget::Brightness
        } else {
            AdjustTarget::Volume
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> Gesture {
        match event {
            PointerEvent::Down { position, at } => {
                self.current = Some(GestureState {
                    started_at: at,
                    start: position,
                    last: position,
                    total_dx: 0.0,
                    total_dy: 0.0,
                    is_dragging: false,
                    target: self.target_for(position),
                    adjusted: false,
                    carried_dy: 0.0,
                });
                Gesture::None
            }
            PointerEvent::Move { position, .. } => {
                let threshold = self.threshold;
                let Some(state) = self.current.as_mut() else {
                    return Gesture::None;
                };
                let step_dx = position.x - state.last.x;
                let step_dy = position.y - state.last.y;
                state.last = position;
                state.total_dx += step_dx;
                state.total_dy += step_dy;

                let crossing = !state.is_dragging;
                let (dx, dy) = if state.is_dragging {
                    (step_dx, step_dy)
                } else if threshold.is_exceeded_by(state.total_dx, state.total_dy) {
                    state.is_dragging = true;
                    // Movement below the threshold is applied on the crossing tick.
                    (state.total_dx, state.total_dy)
                } else {
                    return Gesture::None;
                };

                if dy.abs() <= dx.abs() {
                    if crossing {
                        state.carried_dy = dy;
                    }
                    return Gesture::None;
                }
                let drag_started = !state.adjusted;
                state.adjusted = true;
                Gesture::Adjust {
                    target: state.target,
                    delta_y: dy + std::mem::take(&mut state.carried_dy),
                    drag_started,
                }
            }
            PointerEvent::Up { at } => match self.current.take() {
                Some(state)
                    if !state.is_dragging
                        && self
                            .tap_timeout
                            .admits(at.saturating_duration_since(state.started_at)) =>
                {
                    Gesture::Tap
                }
                _ => Gesture::None,
            },
            PointerEvent::Cancel => {
                self.current = None;
                Gesture::None
            }
        }
    }
}
