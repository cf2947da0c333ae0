//! Dense voxel grid with bounds-checked accessors.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Block identifier stored per cell; 0 means empty (not drawn).
pub type BlockId = u16;

pub const EMPTY: BlockId = 0;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world dimensions must be positive, got {sx}x{sy}x{sz}")]
    InvalidDims { sx: i32, sy: i32, sz: i32 },
    #[error("failed to allocate world buffer ({cells} cells)")]
    Alloc { cells: usize },
}

/// A dense `sx * sy * sz` grid of block ids.
///
/// All coordinate access funnels through one bounds gate: `set` refuses to
/// mutate out of range and `get` reads out of range as empty. The linear
/// layout is `x + y*sx + z*sx*sy`.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    sx: i32,
    sy: i32,
    sz: i32,
    cells: Vec<BlockId>,
}

impl VoxelWorld {
    pub fn new(sx: i32, sy: i32, sz: i32) -> Result<Self, WorldError> {
        if sx <= 0 || sy <= 0 || sz <= 0 {
            return Err(WorldError::InvalidDims { sx, sy, sz });
        }
        let cells = (sx as usize)
            .checked_mul(sy as usize)
            .and_then(|n| n.checked_mul(sz as usize))
            .ok_or(WorldError::Alloc { cells: usize::MAX })?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(cells)
            .map_err(|_| WorldError::Alloc { cells })?;
        buf.resize(cells, EMPTY);
        Ok(Self {
            sx,
            sy,
            sz,
            cells: buf,
        })
    }

    #[inline]
    pub fn dims(&self) -> (i32, i32, i32) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && y >= 0 && z >= 0 && x < self.sx && y < self.sy && z < self.sz
    }

    #[inline]
    fn idx(&self, x: i32, y: i32, z: i32) -> usize {
        (x + y * self.sx + z * self.sx * self.sy) as usize
    }

    /// Overwrite every cell with `id` in one pass.
    pub fn clear(&mut self, id: BlockId) {
        self.cells.fill(id);
    }

    /// Store `id` at (x,y,z); returns false (no mutation) out of range.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        if !self.contains(x, y, z) {
            return false;
        }
        let i = self.idx(x, y, z);
        self.cells[i] = id;
        true
    }

    /// Read the cell at (x,y,z); out of range reads as empty.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.contains(x, y, z) {
            return EMPTY;
        }
        self.cells[self.idx(x, y, z)]
    }

    /// Fill the inclusive axis-aligned box spanned by the two corners.
    ///
    /// Corner order per axis does not matter; the box is clamped to the grid
    /// once up front, then filled row by row without per-cell checks. A box
    /// that clamps away entirely is a no-op.
    pub fn fill_box(&mut self, x0: i32, y0: i32, z0: i32, x1: i32, y1: i32, z1: i32, id: BlockId) {
        let (x0, x1) = (x0.min(x1).max(0), x0.max(x1).min(self.sx - 1));
        let (y0, y1) = (y0.min(y1).max(0), y0.max(y1).min(self.sy - 1));
        let (z0, z1) = (z0.min(z1).max(0), z0.max(z1).min(self.sz - 1));
        if x0 > x1 || y0 > y1 || z0 > z1 {
            return;
        }
        for z in z0..=z1 {
            for y in y0..=y1 {
                let base = self.idx(0, y, z);
                self.cells[base + x0 as usize..=base + x1 as usize].fill(id);
            }
        }
    }
}
