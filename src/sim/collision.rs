//! Axis-aligned collision tests
//!
//! Overlap is strict on half-open intervals: boxes that merely share an
//! edge do not collide.

use glam::Vec2;

use crate::consts::PADDLE_Y;

/// An axis-aligned box, `min` inclusive, `max` exclusive
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Whether a falling item has been caught by the paddle: its bottom edge
/// has reached the paddle's vertical band and the horizontal extents
/// overlap. The band test is one-sided, so an item that misses the paddle
/// stays catchable until it drops past the bottom of the canvas.
pub fn paddle_catches(item: &Aabb, paddle: &Aabb) -> bool {
    item.max.y >= PADDLE_Y && item.min.x < paddle.max.x && paddle.min.x < item.max.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn item_at(x: f32, y: f32) -> Aabb {
        Aabb::new(
            Vec2::new(x, y),
            Vec2::new(x + ITEM_WIDTH, y + ITEM_HEIGHT),
        )
    }

    fn paddle_at(x: f32) -> Aabb {
        Aabb::new(
            Vec2::new(x, PADDLE_Y),
            Vec2::new(x + PADDLE_WIDTH, PADDLE_Y + PADDLE_HEIGHT),
        )
    }

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_catch_requires_band_and_horizontal_overlap() {
        let paddle = paddle_at(100.0);

        // Above the band, directly over the paddle: no catch yet
        assert!(!paddle_catches(&item_at(100.0, 100.0), &paddle));

        // Bottom edge in the band, overlapping horizontally: caught
        assert!(paddle_catches(
            &item_at(100.0, PADDLE_Y - ITEM_HEIGHT + 1.0),
            &paddle
        ));

        // In the band but off to the side: miss
        assert!(!paddle_catches(
            &item_at(100.0 + PADDLE_WIDTH, PADDLE_Y - ITEM_HEIGHT + 1.0),
            &paddle
        ));
    }

    #[test]
    fn test_catch_still_possible_below_band() {
        // The band test is one-sided: an item that slipped past the paddle
        // keeps testing until the tick drops it past the canvas bottom.
        let paddle = paddle_at(100.0);
        let below = item_at(100.0, PADDLE_Y + PADDLE_HEIGHT + 10.0);
        assert!(paddle_catches(&below, &paddle));
    }

    #[test]
    fn test_catch_horizontal_extents_are_half_open() {
        let paddle = paddle_at(100.0);
        // Item whose right edge exactly touches the paddle's left edge
        let touching = item_at(100.0 - ITEM_WIDTH, PADDLE_Y);
        assert!(!paddle_catches(&touching, &paddle));
        // One pixel of real overlap
        let overlapping = item_at(100.0 - ITEM_WIDTH + 1.0, PADDLE_Y);
        assert!(paddle_catches(&overlapping, &paddle));
    }
}
