use crate::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle.
///
/// Stored as two corners, so the quadrants of a region share their edges exactly and tile
/// the parent without floating point gaps.
/// No validation is done, a region with negative extent simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    // bounds as an AABB
    from: [f64; 2],
    to: [f64; 2],
}

impl Region {
    /// `[x, y]` is the top-left corner
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            from: [x, y],
            to: [x + w, y + h],
        }
    }

    pub fn from_corners(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { from: min, to: max }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.from[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.from[1]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.to[0] - self.from[0]
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.to[1] - self.from[1]
    }

    #[inline]
    pub fn min(&self) -> [f64; 2] {
        self.from
    }

    #[inline]
    pub fn max(&self) -> [f64; 2] {
        self.to
    }

    pub fn center(&self) -> [f64; 2] {
        [
            self.from[0] + self.width() * 0.5,
            self.from[1] + self.height() * 0.5,
        ]
    }

    #[inline]
    pub fn contains<T>(&self, point: &Point<T>) -> bool {
        self.contains_xy(point.x(), point.y())
    }

    #[inline]
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.from[0] <= x && x <= self.to[0] && self.from[1] <= y && y <= self.to[1]
    }

    /// Touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Region) -> bool {
        if self.to[0] < other.from[0] || self.from[0] > other.to[0] {
            return false;
        }
        if self.to[1] < other.from[1] || self.from[1] > other.to[1] {
            return false;
        }
        true
    }

    /// Return wether `other` lies entirely within this region
    #[inline]
    pub fn wraps(&self, other: &Region) -> bool {
        self.from[0] <= other.from[0]
            && self.from[1] <= other.from[1]
            && other.to[0] <= self.to[0]
            && other.to[1] <= self.to[1]
    }

    /// Return the quadrants in `[NE, NW, SE, SW]` order.
    pub fn quadrants(&self) -> [Region; 4] {
        let [fromx, fromy] = self.from;
        let [tox, toy] = self.to;
        let [midx, midy] = self.center();

        [
            Self::from_corners([midx, fromy], [tox, midy]),
            Self::from_corners([fromx, fromy], [midx, midy]),
            Self::from_corners([midx, midy], [tox, toy]),
            Self::from_corners([fromx, midy], [midx, toy]),
        ]
    }

    /// Whether `quadrants` would tile this region with finite, ordered edges.
    pub fn is_divisible(&self) -> bool {
        let [midx, midy] = self.center();
        midx.is_finite()
            && midy.is_finite()
            && self.from[0] <= midx
            && midx <= self.to[0]
            && self.from[1] <= midy
            && midy <= self.to[1]
    }

    /// Finite corners and non-negative extent
    pub fn is_well_formed(&self) -> bool {
        self.from.iter().chain(self.to.iter()).all(|c| c.is_finite())
            && self.width() >= 0.0
            && self.height() >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_boundary_inclusive() {
        let r = Region::new(0., 0., 100., 100.);

        assert!(r.contains(&Point::new(0., 0., ())));
        assert!(r.contains(&Point::new(100., 100., ())));
        assert!(r.contains(&Point::new(100., 0., ())));
        assert!(!r.contains(&Point::new(100.5, 50., ())));
        assert!(!r.contains(&Point::new(50., -0.1, ())));
        assert!(!r.contains(&Point::new(f64::NAN, 50., ())));
    }

    #[test]
    fn touching_regions_intersect() {
        let a = Region::new(0., 0., 10., 10.);
        let b = Region::new(10., 10., 5., 5.);
        let c = Region::new(10.01, 0., 5., 5.);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn wraps_itself_and_inner_regions() {
        let outer = Region::new(0., 0., 100., 100.);
        let inner = Region::new(25., 25., 50., 75.);
        let crossing = Region::new(50., 50., 60., 10.);

        assert!(outer.wraps(&outer));
        assert!(outer.wraps(&inner));
        assert!(!inner.wraps(&outer));
        assert!(!outer.wraps(&crossing));
        assert!(outer.intersects(&crossing));
    }

    #[test]
    fn quadrants_tile_the_parent() {
        let r = Region::new(0., 0., 100., 50.);
        let [ne, nw, se, sw] = r.quadrants();

        assert_eq!(ne, Region::new(50., 0., 50., 25.));
        assert_eq!(nw, Region::new(0., 0., 50., 25.));
        assert_eq!(se, Region::new(50., 25., 50., 25.));
        assert_eq!(sw, Region::new(0., 25., 50., 25.));

        for q in r.quadrants().iter() {
            assert!(r.wraps(q));
        }
    }

    #[test]
    fn odd_quadrants_share_exact_edges() {
        let r = Region::new(0.1, 0.3, 0.7, 1.9);
        let [ne, nw, se, sw] = r.quadrants();

        assert_eq!(nw.max()[0], ne.min()[0]);
        assert_eq!(sw.max()[0], se.min()[0]);
        assert_eq!(nw.max()[1], sw.min()[1]);
        assert_eq!(ne.max()[0], r.max()[0]);
        assert_eq!(se.max(), r.max());
        assert_eq!(nw.min(), r.min());
    }

    #[test]
    fn malformed_regions_are_accepted() {
        let r = Region::new(10., 10., -5., -5.);

        assert!(!r.is_well_formed());
        assert!(!r.contains_xy(7., 7.));
        assert!(!r.contains_xy(10., 10.));

        assert!(!Region::new(0., 0., f64::INFINITY, 1.).is_well_formed());
        assert!(Region::new(0., 0., 0., 0.).is_well_formed());
    }

    #[test]
    fn infinite_regions_are_not_divisible() {
        let r = Region::from_corners([f64::NEG_INFINITY, 0.], [f64::INFINITY, 1.]);

        assert!(!r.is_divisible());
        assert!(Region::new(0., 0., 0., 0.).is_divisible());
    }
}
