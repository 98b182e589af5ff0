//! 2D vector and scalar helpers
//!
//! `Vector` mutators work in place and return `&mut Self` so calls chain:
//! `p.add_xy(1.0, 0.0).mul(2.0)`. `Vector` is `Copy`; a game that wants two
//! names for one position must keep one owner and pass it by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Clamp `v` into `[low, high]`
#[inline]
pub fn clamp(v: f32, low: f32, high: f32) -> f32 {
    low.max(v.min(high))
}

/// Wrap `v` into `[low, high)`
pub fn wrap(v: f32, low: f32, high: f32) -> f32 {
    let w = high - low;
    let o = v - low;
    if o >= 0.0 {
        o % w + low
    } else {
        let mut wv = w + o % w + low;
        if wv >= high {
            wv -= w;
        }
        wv
    }
}

/// Half-open range test: `low <= v < high`
#[inline]
pub fn is_in_range(v: f32, low: f32, high: f32) -> bool {
    low <= v && v < high
}

/// Anything with an x and a y
pub trait VectorLike {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

impl<T: VectorLike + ?Sized> VectorLike for &T {
    fn x(&self) -> f32 {
        (**self).x()
    }
    fn y(&self) -> f32 {
        (**self).y()
    }
}

impl VectorLike for Vec2 {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
}

impl VectorLike for (f32, f32) {
    fn x(&self) -> f32 {
        self.0
    }
    fn y(&self) -> f32 {
        self.1
    }
}

/// Mutable 2D vector used for positions, sizes and velocities
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl VectorLike for Vector {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
}

/// Shorthand constructor used by game code
#[inline]
pub fn vec(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Copy the components of any vector-like value
    pub fn from_like(v: impl VectorLike) -> Self {
        Self::new(v.x(), v.y())
    }

    pub fn set(&mut self, v: impl VectorLike) -> &mut Self {
        self.x = v.x();
        self.y = v.y();
        self
    }

    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add(&mut self, v: impl VectorLike) -> &mut Self {
        self.x += v.x();
        self.y += v.y();
        self
    }

    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    pub fn sub(&mut self, v: impl VectorLike) -> &mut Self {
        self.x -= v.x();
        self.y -= v.y();
        self
    }

    pub fn sub_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self
    }

    pub fn mul(&mut self, v: f32) -> &mut Self {
        self.x *= v;
        self.y *= v;
        self
    }

    pub fn div(&mut self, v: f32) -> &mut Self {
        self.x /= v;
        self.y /= v;
        self
    }

    pub fn clamp(&mut self, x_low: f32, x_high: f32, y_low: f32, y_high: f32) -> &mut Self {
        self.x = clamp(self.x, x_low, x_high);
        self.y = clamp(self.y, y_low, y_high);
        self
    }

    pub fn wrap(&mut self, x_low: f32, x_high: f32, y_low: f32, y_high: f32) -> &mut Self {
        self.x = wrap(self.x, x_low, x_high);
        self.y = wrap(self.y, y_low, y_high);
        self
    }

    pub fn add_with_angle(&mut self, angle: f32, length: f32) -> &mut Self {
        self.x += angle.cos() * length;
        self.y += angle.sin() * length;
        self
    }

    pub fn swap_xy(&mut self) -> &mut Self {
        std::mem::swap(&mut self.x, &mut self.y);
        self
    }

    /// Scale to unit length.
    ///
    /// A zero vector yields NaN components; callers must not normalize one.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.div(len)
    }

    /// Rotate by `angle` radians (y axis points down, so positive is clockwise on screen)
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        if angle == 0.0 {
            return self;
        }
        let r = Vec2::from_angle(angle).rotate(self.to_vec2());
        self.x = r.x;
        self.y = r.y;
        self
    }

    /// Angle of this vector from the origin
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Angle from this point toward `to`
    pub fn angle_to(&self, to: impl VectorLike) -> f32 {
        (to.y() - self.y).atan2(to.x() - self.x)
    }

    pub fn distance_to(&self, to: impl VectorLike) -> f32 {
        let ox = self.x - to.x();
        let oy = self.y - to.y();
        (ox * ox + oy * oy).sqrt()
    }

    pub fn is_in_rect(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        is_in_range(self.x, x, x + width) && is_in_range(self.y, y, y + height)
    }

    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Round half up, matching how the pixel grid snaps `.5`
    pub fn round(&mut self) -> &mut Self {
        self.x = (self.x + 0.5).floor();
        self.y = (self.y + 0.5).floor();
        self
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        v.to_vec2()
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_chained_mutation() {
        let mut p = vec(1.0, 2.0);
        p.add_xy(1.0, 1.0).mul(2.0).sub(vec(1.0, 1.0));
        assert_eq!(p, vec(3.0, 5.0));
    }

    #[test]
    fn test_add_accepts_vector_likes() {
        let mut p = Vector::ZERO;
        p.add(Vec2::new(1.0, 2.0)).add((3.0, 4.0)).add(&vec(1.0, 1.0));
        assert_eq!(p, vec(5.0, 7.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut p = vec(10.0, 0.0);
        p.rotate(PI / 2.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let mut p = vec(3.0, -7.0);
        p.rotate(0.0);
        assert_eq!(p, vec(3.0, -7.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let mut p = Vector::ZERO;
        p.normalize();
        assert!(p.x.is_nan() && p.y.is_nan());
    }

    #[test]
    fn test_angles_and_distance() {
        let p = vec(0.0, 0.0);
        assert!((p.angle_to(vec(0.0, 5.0)) - PI / 2.0).abs() < 1e-6);
        assert_eq!(p.distance_to(vec(3.0, 4.0)), 5.0);
        assert!((vec(-1.0, 0.0).angle() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_is_in_rect_half_open() {
        assert!(vec(0.0, 0.0).is_in_rect(0.0, 0.0, 10.0, 10.0));
        assert!(!vec(10.0, 5.0).is_in_rect(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1.0, 0.0, 4.0), 3.0);
        assert_eq!(wrap(5.0, 0.0, 4.0), 1.0);
        assert_eq!(wrap(-4.0, 0.0, 4.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        let mut p = vec(-2.5, 2.5);
        p.round();
        assert_eq!(p, vec(-2.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_rotate_preserves_length(x in -100.0f32..100.0, y in -100.0f32..100.0, a in -10.0f32..10.0) {
            let mut p = vec(x, y);
            let before = p.length();
            p.rotate(a);
            prop_assert!((p.length() - before).abs() < 1e-3);
        }

        #[test]
        fn prop_wrap_lands_in_range(v in -1000.0f32..1000.0) {
            let w = wrap(v, -3.0, 7.0);
            prop_assert!((-3.0..7.0).contains(&w));
        }
    }
}
