//! Floor rasterization: obstacle rectangles onto a free/blocked grid.

use egress_core::{Point, Range};

use crate::error::Error;

/// A square floor plan of free and blocked cells, immutable once built.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    size: i32,
    blocked: Vec<bool>,
}

impl FloorPlan {
    /// Rasterize `obstacles` onto an all-free `size`×`size` floor.
    ///
    /// Each obstacle is a half-open rectangle whose covered cells become
    /// blocked; overlapping obstacles are idempotent. Fails if any obstacle
    /// covers a cell outside the floor. There is no way to free a cell
    /// afterwards.
    pub fn new(size: i32, obstacles: &[Range]) -> Result<Self, Error> {
        let bounds = Range::new(0, 0, size, size);
        let mut blocked = vec![false; bounds.len()];
        for &ob in obstacles {
            if !ob.in_range(bounds) {
                return Err(Error::ObstacleOutOfBounds {
                    obstacle: ob,
                    floor: bounds,
                });
            }
            for p in ob {
                blocked[(p.y * size + p.x) as usize] = true;
            }
        }
        Ok(Self { size, blocked })
    }

    /// Side length of the floor.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The floor rectangle `[0, size) × [0, size)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// Whether `p` lies on the floor.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` is a free (traversable) cell. Out-of-floor points are
    /// never free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.contains(p) && !self.blocked[(p.y * self.size + p.x) as usize]
    }
}
