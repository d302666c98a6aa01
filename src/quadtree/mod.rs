mod parallel;

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::region::Region;
use crate::Point;
use std::iter::FromIterator;
use std::mem;
use tracing::{debug, trace};

type Children<T> = Option<Box<[Quadtree<T>; 4]>>;

/// Position of a child inside its parent. The discriminant is the index into `children`,
/// which is also the order insertions try them in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthEast = 2,
    SouthWest = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A node of the tree. The root is just the node the caller holds on to.
///
/// A node is either a leaf owning a list of points, or an internal node owning exactly 4
/// children and no points.
#[derive(Debug, Clone)]
pub struct Quadtree<T> {
    boundary: Region,
    capacity: usize,
    max_depth: u32,
    depth: u32,

    children: Children<T>,

    points: Vec<Point<T>>,
}

impl<T> Quadtree<T> {
    /// Create an empty tree with the default capacity of 5
    pub fn new(boundary: Region) -> Self {
        Self::with_config(boundary, QuadtreeConfig::default())
    }

    pub fn with_capacity(boundary: Region, capacity: usize) -> Self {
        Self::with_config(boundary, QuadtreeConfig::default().with_capacity(capacity))
    }

    /// Accepts any input. A zero capacity leaf splits on its first insertion, all the way down
    /// to `max_depth`.
    pub fn with_config(boundary: Region, config: QuadtreeConfig) -> Self {
        Self::node(boundary, config.capacity, config.max_depth, 0)
    }

    /// Like `with_config` but rejects configurations that would produce a degenerate tree.
    pub fn try_with_config(boundary: Region, config: QuadtreeConfig) -> Result<Self, QuadtreeError> {
        config.validate()?;
        if !boundary.is_well_formed() {
            return Err(QuadtreeError::MalformedBoundary {
                from: boundary.min(),
                to: boundary.max(),
            });
        }
        Ok(Self::with_config(boundary, config))
    }

    fn node(boundary: Region, capacity: usize, max_depth: u32, depth: u32) -> Self {
        Self {
            boundary,
            capacity,
            max_depth,
            depth,
            children: None,
            points: Vec::new(),
        }
    }

    #[inline]
    pub fn boundary(&self) -> &Region {
        &self.boundary
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Distance from the root, which is at depth 0
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Points held directly by this node. Always empty for internal nodes.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Children in `[NE, NW, SE, SW]` order
    pub fn children(&self) -> Option<&[Quadtree<T>; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Quadtree<T>> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Return if the insertion was successful.
    /// Points outside of the boundary are rejected and the tree is left untouched.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Same as `insert` but hands a rejected point back to the caller
    pub fn try_insert(&mut self, point: Point<T>) -> Result<(), Point<T>> {
        if !self.boundary.contains(&point) {
            return Err(point);
        }

        if let Some(children) = self.children.as_mut() {
            let mut point = point;
            for child in children.iter_mut() {
                match child.try_insert(point) {
                    Ok(()) => return Ok(()),
                    Err(p) => point = p,
                }
            }
            // the quadrants tile the boundary, so one of them must have accepted
            debug_assert!(false, "All child insertions failed");
            return Err(point);
        }

        if self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        if self.depth >= self.max_depth || !self.boundary.is_divisible() {
            debug!(
                depth = self.depth,
                len = self.points.len() + 1,
                capacity = self.capacity,
                "Leaf can not be split further, exceeding capacity"
            );
            self.points.push(point);
            return Ok(());
        }

        self.subdivide();
        self.try_insert(point)
    }

    fn subdivide(&mut self) {
        debug_assert!(self.children.is_none());

        trace!(
            depth = self.depth,
            boundary = ?self.boundary,
            "Subdividing"
        );

        let [ne, nw, se, sw] = self.boundary.quadrants();
        let (capacity, max_depth, depth) = (self.capacity, self.max_depth, self.depth + 1);
        self.children = Some(Box::new([
            Self::node(ne, capacity, max_depth, depth),
            Self::node(nw, capacity, max_depth, depth),
            Self::node(se, capacity, max_depth, depth),
            Self::node(sw, capacity, max_depth, depth),
        ]));

        for point in mem::take(&mut self.points) {
            let res = self.try_insert(point);
            debug_assert!(res.is_ok(), "Failed to redistribute a point");
        }
    }

    /// Every point that lies inside `range`, in no particular order.
    pub fn query(&self, range: &Region) -> Vec<&Point<T>> {
        let mut out = Vec::new();
        self.query_into(range, &mut out);
        out
    }

    /// Append every point inside `range` to `out`.
    pub fn query_into<'a>(&'a self, range: &Region, out: &mut Vec<&'a Point<T>>) {
        // every point under this node lies inside `boundary`, no need to test them one by one
        if range.wraps(&self.boundary) {
            self.get_all_points_into(out);
            return;
        }

        match self.children.as_ref() {
            Some(children) => {
                for child in children.iter() {
                    child.query_into(range, out);
                }
            }
            None => {
                if range.intersects(&self.boundary) {
                    out.extend(self.points.iter().filter(|p| range.contains(*p)));
                }
            }
        }
    }

    /// Every point within `radius` of `[x, y]`, boundary inclusive.
    pub fn query_radius(&self, x: f64, y: f64, radius: f64) -> Vec<&Point<T>> {
        let mut out = Vec::new();
        self.query_radius_into(x, y, radius, &mut out);
        out
    }

    pub fn query_radius_into<'a>(
        &'a self,
        x: f64,
        y: f64,
        radius: f64,
        out: &mut Vec<&'a Point<T>>,
    ) {
        // negative or NaN
        if !(radius >= 0.) {
            return;
        }
        let aabb = Region::from_corners([x - radius, y - radius], [x + radius, y + radius]);
        self.query_radius_impl([x, y], radius * radius, &aabb, out);
    }

    fn query_radius_impl<'a>(
        &'a self,
        center: [f64; 2],
        radius_sq: f64,
        aabb: &Region,
        out: &mut Vec<&'a Point<T>>,
    ) {
        if !aabb.intersects(&self.boundary) {
            return;
        }

        out.extend(self.points.iter().filter(|p| p.dist_sq(center) <= radius_sq));

        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.query_radius_impl(center, radius_sq, aabb, out);
            }
        }
    }

    pub fn get_all_points(&self) -> Vec<&Point<T>> {
        let mut out = Vec::with_capacity(self.size());
        self.get_all_points_into(&mut out);
        out
    }

    pub fn get_all_points_into<'a>(&'a self, out: &mut Vec<&'a Point<T>>) {
        out.extend(self.points.iter());
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.get_all_points_into(out);
            }
        }
    }

    /// Number of points held by this node and its descendants
    pub fn size(&self) -> usize {
        let mut size = self.points.len();
        if let Some(ref children) = self.children {
            size += children.iter().map(|c| c.size()).sum::<usize>();
        }
        size
    }

    pub fn is_empty(&self) -> bool {
        match self.children {
            Some(ref children) => children.iter().all(|c| c.is_empty()),
            None => self.points.is_empty(),
        }
    }

    /// Drop every point and every child. Boundary and configuration are kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.children = None;
    }

    /// Visit the boundary of every node, parents before children.
    ///
    /// This is the hook renderers use to draw the partitioning of the tree.
    pub fn for_each_boundary<F>(&self, mut f: F)
    where
        F: FnMut(&Region, u32),
    {
        self.for_each_boundary_impl(&mut f);
    }

    fn for_each_boundary_impl<F>(&self, f: &mut F)
    where
        F: FnMut(&Region, u32),
    {
        f(&self.boundary, self.depth);
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.for_each_boundary_impl(f);
            }
        }
    }
}

impl<T> Extend<Point<T>> for Quadtree<T> {
    /// Points outside of the boundary are skipped
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point<T>>,
    {
        let mut rejected = 0usize;
        for point in it {
            if !self.insert(point) {
                rejected += 1;
            }
        }
        if rejected > 0 {
            debug!(rejected, boundary = ?self.boundary, "Skipped points outside of the boundary");
        }
    }
}

impl<T> FromIterator<Point<T>> for Quadtree<T> {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Point<T>>,
    {
        let mut min = [f64::INFINITY, f64::INFINITY];
        let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        let values = it
            .into_iter()
            .map(|p| {
                let [x, y] = p.position();
                min[0] = min[0].min(x);
                min[1] = min[1].min(y);
                max[0] = max[0].max(x);
                max[1] = max[1].max(y);
                p
            })
            .collect::<Vec<_>>();
        // calculate the minimum bounding box to speed up queries by having a more balanced tree
        let boundary = if values.is_empty() {
            Region::default()
        } else {
            Region::from_corners(min, max)
        };
        let mut tree = Self::new(boundary);
        tree.extend(values);
        tree
    }
}
