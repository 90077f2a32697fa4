use crate::proximity::HoverState;

/// A cursor position in surface-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x < self.x + self.width
            && p.y >= self.y
            && p.y < self.y + self.height
    }

    /// Same rectangle with its bottom edge pushed down by `by` pixels.
    #[must_use]
    pub fn extend_down(mut self, by: f32) -> Self {
        self.height += by.max(0.0);
        self
    }
}

/// The two fixed notch presets.  The notch is anchored at the surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchGeometry {
    pub width:            f32,
    pub collapsed_height: f32,
    pub expanded_height:  f32,
}

impl NotchGeometry {
    pub fn rect(&self, state: HoverState) -> Rect {
        let height = match state {
            HoverState::Collapsed => self.collapsed_height,
            HoverState::Expanded  => self.expanded_height,
        };
        Rect::new(0.0, 0.0, self.width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 300.0, 30.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(299.9, 29.9)));
        assert!(!r.contains(Point::new(300.0, 10.0)));
        assert!(!r.contains(Point::new(10.0, 30.0)));
        assert!(!r.contains(Point::new(-1.0, 10.0)));
    }

    #[test]
    fn extend_down_only_grows_height() {
        let r = Rect::new(5.0, 0.0, 300.0, 30.0).extend_down(10.0);
        assert_eq!(r, Rect::new(5.0, 0.0, 300.0, 40.0));
        assert_eq!(r.extend_down(-4.0), r);
    }

    #[test]
    fn presets_are_anchored_at_origin() {
        let g = NotchGeometry { width: 300.0, collapsed_height: 30.0, expanded_height: 100.0 };
        assert_eq!(g.rect(HoverState::Expanded).extend_down(10.0), Rect::new(0.0, 0.0, 300.0, 110.0));
        assert_eq!(g.rect(HoverState::Collapsed).height, 30.0);
        assert_eq!(g.rect(HoverState::Expanded).height, 100.0);
    }
}
