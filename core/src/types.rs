use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis. The board spans the whole signed plane.
pub type Coord = i64;

/// Two-dimensional coordinates `(x, y)`, `x` grows right and `y` grows down.
pub type Coord2 = (Coord, Coord);

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays inside the `i64` plane.
fn apply_delta(coords: Coord2, delta: (Coord, Coord)) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Iterates over the eight tiles surrounding `coords`.
pub fn neighbors(coords: Coord2) -> NeighborIter {
    NeighborIter::new(coords)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Rectangular window onto the board, `origin` being its top-left tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ViewportFields")]
pub struct Viewport {
    origin: Coord2,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct ViewportFields {
    origin: Coord2,
    width: u32,
    height: u32,
}

impl TryFrom<ViewportFields> for Viewport {
    type Error = GameError;

    fn try_from(fields: ViewportFields) -> Result<Self> {
        Self::new(fields.origin, fields.width, fields.height)
    }
}

impl Viewport {
    /// Validates that the rectangle is non-empty and that its far corner is addressable.
    pub fn new(origin: Coord2, width: u32, height: u32) -> Result<Self> {
        let fits = width > 0
            && height > 0
            && origin.0.checked_add(Coord::from(width) - 1).is_some()
            && origin.1.checked_add(Coord::from(height) - 1).is_some();
        if !fits {
            return Err(GameError::InvalidViewport { width, height });
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    pub const fn origin(&self) -> Coord2 {
        self.origin
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Shape as `(rows, columns)`, the layout used for materialized grids.
    pub const fn shape(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        let (ox, oy) = self.origin;
        // i128 so that the comparison cannot overflow near the edges of the plane
        let dx = x as i128 - ox as i128;
        let dy = y as i128 - oy as i128;
        dx >= 0 && dy >= 0 && dx < self.width as i128 && dy < self.height as i128
    }

    /// Board coordinates of the cell at `(row, col)` of this viewport.
    pub const fn tile_at(&self, row: usize, col: usize) -> Coord2 {
        let (ox, oy) = self.origin;
        (ox + col as Coord, oy + row as Coord)
    }

    /// Grows the rectangle by `margin` tiles on every side, shrinking the margin where the plane
    /// runs out.
    pub fn padded(&self, margin: u32) -> Self {
        let margin = Coord::from(margin);
        let (ox, oy) = self.origin;
        let left = ox.saturating_sub(margin);
        let top = oy.saturating_sub(margin);
        let right = (ox + Coord::from(self.width) - 1).saturating_add(margin);
        let bottom = (oy + Coord::from(self.height) - 1).saturating_add(margin);
        let width = (right as i128 - left as i128 + 1).min(u32::MAX as i128) as u32;
        let height = (bottom as i128 - top as i128 + 1).min(u32::MAX as i128) as u32;
        Self {
            origin: (left, top),
            width,
            height,
        }
    }

    /// All tiles of the viewport in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Coord2> + use<> {
        let Self {
            origin: (ox, oy),
            width,
            height,
        } = *self;
        (0..Coord::from(height))
            .flat_map(move |dy| (0..Coord::from(width)).map(move |dx| (ox + dx, oy + dy)))
    }
}
