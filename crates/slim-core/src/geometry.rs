/// An axis-aligned rectangle in integer pixel coordinates.
///
/// Used both for image-space source rectangles and window-space destination
/// rectangles. Origin is top-left; width and height are signed so that
/// intermediate clipping results can be represented before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True if the rectangle is non-empty and lies entirely inside
    /// `[0, bound_w) x [0, bound_h)`.
    pub fn fits_within(&self, bound_w: u32, bound_h: u32) -> bool {
        !self.is_empty()
            && self.x >= 0
            && self.y >= 0
            && i64::from(self.right()) <= i64::from(bound_w)
            && i64::from(self.bottom()) <= i64::from(bound_h)
    }

    /// Intersection with `[0, bound_w) x [0, bound_h)`, or `None` if they
    /// do not overlap.
    pub fn clipped_to(&self, bound_w: u32, bound_h: u32) -> Option<PixelRect> {
        let bw = i32::try_from(bound_w).unwrap_or(i32::MAX);
        let bh = i32::try_from(bound_h).unwrap_or(i32::MAX);
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(bw);
        let y1 = self.bottom().min(bh);
        let clipped = PixelRect::new(x0, y0, x1 - x0, y1 - y0);
        (!clipped.is_empty()).then_some(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within() {
        assert!(PixelRect::new(0, 0, 10, 10).fits_within(10, 10));
        assert!(!PixelRect::new(1, 0, 10, 10).fits_within(10, 10));
        assert!(!PixelRect::new(-1, 0, 5, 5).fits_within(10, 10));
        assert!(!PixelRect::new(0, 0, 0, 5).fits_within(10, 10));
    }

    #[test]
    fn test_clipped_to() {
        let r = PixelRect::new(-5, 3, 20, 4);
        assert_eq!(r.clipped_to(10, 10), Some(PixelRect::new(0, 3, 10, 4)));
        assert_eq!(PixelRect::new(12, 0, 4, 4).clipped_to(10, 10), None);
    }
}
