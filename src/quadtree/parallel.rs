use super::Quadtree;
use crate::region::Region;
use crate::Point;

// below this depth the children of a node are queried in parallel
const PAR_DEPTH: u32 = 3;

impl<T: Sync> Quadtree<T> {
    /// Same result as `query`, the upper levels of the tree are visited on the rayon thread
    /// pool.
    pub fn par_query(&self, range: &Region) -> Vec<&Point<T>> {
        if self.depth >= PAR_DEPTH || range.wraps(&self.boundary) {
            return self.query(range);
        }

        let children = match self.children.as_ref() {
            Some(children) => children,
            None => return self.query(range),
        };
        if !range.intersects(&self.boundary) {
            return Vec::new();
        }
        let [ne, nw, se, sw] = &**children;

        let ((mut res, b), (c, d)) = rayon::join(
            || rayon::join(|| ne.par_query(range), || nw.par_query(range)),
            || rayon::join(|| se.par_query(range), || sw.par_query(range)),
        );
        res.reserve(b.len() + c.len() + d.len());
        res.extend(b);
        res.extend(c);
        res.extend(d);
        res
    }
}
