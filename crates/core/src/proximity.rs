//! Hover-driven expand/collapse state machine.
//!
//! The monitor is polled with the last known cursor position.  Each poll
//! evaluates the hover region against the *current* (possibly animating)
//! notch rectangle and starts a new animation only when the target state
//! differs from the state already being shown.

use crate::geometry::{NotchGeometry, Point, Rect};
use lilt::{Animated, Easing};
use std::time::{Duration, Instant};

/// The only two states the notch can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Collapsed,
    Expanded,
}

impl HoverState {
    fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// A state change reported by [`ProximityMonitor::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: HoverState,
    pub to:   HoverState,
}

#[derive(Debug, Clone)]
pub struct ProximityMonitor {
    geometry:  NotchGeometry,
    buffer:    f32,
    duration:  Duration,
    state:     HoverState,
    current:   Rect,
    /// `true` while expanded; drives the height between the two presets.
    expansion: Animated<bool, Instant>,
    animating: bool,
}

fn expansion(value: bool, duration: Duration) -> Animated<bool, Instant> {
    Animated::new(value)
        .duration(duration.as_secs_f32() * 1_000.0)
        .easing(Easing::Linear)
}

impl ProximityMonitor {
    /// Start collapsed, with no animation in flight.
    pub fn new(geometry: NotchGeometry, buffer: f32, duration: Duration) -> Self {
        Self {
            geometry,
            buffer,
            duration,
            state: HoverState::Collapsed,
            current: geometry.rect(HoverState::Collapsed),
            expansion: expansion(false, duration),
            animating: false,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Geometry as of the last [`advance`](Self::advance) / [`sample`](Self::sample).
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Whether the last [`advance`](Self::advance) found the animation in flight.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current rectangle extended downward by the hover buffer.
    pub fn hover_region(&self) -> Rect {
        self.current.extend_down(self.buffer)
    }

    pub fn set_buffer(&mut self, buffer: f32) {
        self.buffer = buffer;
    }

    /// Applies to animations started after the call.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Move the animation forward to `now`.  Once it has finished the notch
    /// sits exactly on the preset for the current state.
    pub fn advance(&mut self, now: Instant) {
        self.animating = self.expansion.in_progress(now);
        self.current = if self.animating {
            let NotchGeometry { width, collapsed_height, expanded_height } = self.geometry;
            let height = self.expansion.animate_bool(collapsed_height, expanded_height, now);
            Rect::new(0.0, 0.0, width, height)
        } else {
            self.geometry.rect(self.state)
        };
    }

    /// Evaluate the proximity predicate for one poll.
    ///
    /// `cursor` is `None` when the pointer is outside the surface.  Returns the
    /// transition when the state changed; redundant polls return `None` and
    /// leave any in-flight animation untouched.
    pub fn sample(&mut self, cursor: Option<Point>, now: Instant) -> Option<Transition> {
        self.advance(now);

        let region = self.hover_region();
        let target = match cursor {
            Some(p) if region.contains(p) => HoverState::Expanded,
            _ => HoverState::Collapsed,
        };

        if target == self.state {
            return None;
        }

        let from = self.state;
        self.state = target;

        if self.duration.is_zero() {
            self.expansion = expansion(target.is_expanded(), self.duration);
            self.current = self.geometry.rect(target);
            self.animating = false;
        } else {
            // A reversal mid-flight keeps the running animation so it turns
            // around from where it is; otherwise pick up the latest duration.
            if !self.animating {
                self.expansion = expansion(from.is_expanded(), self.duration);
            }
            self.expansion.transition(target.is_expanded(), now);
            self.animating = true;
        }

        Some(Transition { from, to: target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIM: Duration = Duration::from_millis(300);
    /// Comfortably past the end of an animation.
    const SETTLED: Duration = Duration::from_millis(310);

    fn monitor() -> ProximityMonitor {
        let geometry = NotchGeometry { width: 300.0, collapsed_height: 30.0, expanded_height: 100.0 };
        ProximityMonitor::new(geometry, 10.0, ANIM)
    }

    #[test]
    fn cursor_in_buffer_expands_within_one_poll() {
        let mut m = monitor();
        let t0 = Instant::now();

        // Below the collapsed notch but inside the 10 px buffer.
        let t = m.sample(Some(Point::new(150.0, 35.0)), t0);

        assert_eq!(t, Some(Transition { from: HoverState::Collapsed, to: HoverState::Expanded }));
        assert_eq!(m.state(), HoverState::Expanded);
        assert!(m.is_animating());
    }

    #[test]
    fn cursor_outside_region_stays_collapsed() {
        let mut m = monitor();
        let t0 = Instant::now();

        assert_eq!(m.sample(Some(Point::new(150.0, 40.0)), t0), None);
        assert_eq!(m.sample(None, t0), None);
        assert_eq!(m.state(), HoverState::Collapsed);
        assert!(!m.is_animating());
    }

    #[test]
    fn leaving_collapses_within_one_poll() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);
        m.advance(t0 + SETTLED);

        let t = m.sample(None, t0 + SETTLED + Duration::from_millis(50));

        assert_eq!(t.map(|t| t.to), Some(HoverState::Collapsed));
        assert_eq!(m.state(), HoverState::Collapsed);
    }

    #[test]
    fn redundant_poll_does_not_restart_animation() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);

        let mid = t0 + Duration::from_millis(150);
        assert_eq!(m.sample(Some(Point::new(10.0, 5.0)), mid), None);

        // The first animation completes on its own schedule.
        m.advance(t0 + SETTLED);
        assert!(!m.is_animating());
        assert_eq!(m.current().height, 100.0);
    }

    #[test]
    fn animation_interpolates_then_settles_on_preset() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);

        m.advance(t0 + Duration::from_millis(150));
        let h = m.current().height;
        assert!(h > 30.0 && h < 100.0, "mid-animation height was {h}");

        m.advance(t0 + Duration::from_secs(1));
        assert_eq!(m.current(), Rect::new(0.0, 0.0, 300.0, 100.0));
    }

    #[test]
    fn hover_region_tracks_expanded_geometry() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);
        m.advance(t0 + SETTLED);

        // Inside the expanded notch's buffer, well below the collapsed one.
        assert_eq!(m.sample(Some(Point::new(10.0, 105.0)), t0 + SETTLED), None);
        assert_eq!(m.state(), HoverState::Expanded);
    }

    #[test]
    fn reversal_starts_from_current_rect() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);

        let mid = t0 + Duration::from_millis(150);
        m.sample(None, mid);
        let start = m.current().height;

        m.advance(mid + Duration::from_millis(1));
        assert!(m.current().height <= start);
        m.advance(mid + SETTLED);
        assert_eq!(m.current().height, 30.0);
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let geometry = NotchGeometry { width: 300.0, collapsed_height: 30.0, expanded_height: 100.0 };
        let mut m = ProximityMonitor::new(geometry, 10.0, Duration::ZERO);
        let t0 = Instant::now();
        m.sample(Some(Point::new(10.0, 5.0)), t0);
        m.advance(t0);
        assert_eq!(m.current().height, 100.0);
        assert!(!m.is_animating());
    }
}
