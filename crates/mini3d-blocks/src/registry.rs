use crate::config::BlocksConfig;

pub type TileIndex = u16;

/// Highest block id the registry will map; ids above this are rejected.
pub const MAX_BLOCK_ID: u16 = 255;

/// Maps block ids to tile indices in the currently loaded atlas.
///
/// The registry never owns textures; it only records the atlas's tile count
/// so it can gate definitions at assignment time and treat mappings that a
/// smaller atlas reload left dangling as undefined at lookup time.
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    tiles: Vec<Option<TileIndex>>,
    tile_count: usize,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tile count of the atlas that was just loaded.
    ///
    /// Existing mappings are left in place; ones at or past the new count
    /// simply stop resolving until redefined.
    pub fn set_atlas_tiles(&mut self, count: usize) {
        self.tile_count = count;
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Map `block_id` to `tile`; rejected (no mutation) when the tile is not
    /// in the current atlas or the block id is out of the mappable range.
    pub fn define(&mut self, block_id: u16, tile: TileIndex) -> bool {
        if block_id > MAX_BLOCK_ID || (tile as usize) >= self.tile_count {
            return false;
        }
        let slot = block_id as usize;
        if self.tiles.len() <= slot {
            self.tiles.resize(slot + 1, None);
        }
        self.tiles[slot] = Some(tile);
        true
    }

    /// Tile for `block_id`, or None when unset or stale for the current atlas.
    #[inline]
    pub fn resolve(&self, block_id: u16) -> Option<TileIndex> {
        let tile = (*self.tiles.get(block_id as usize)?)?;
        ((tile as usize) < self.tile_count).then_some(tile)
    }

    /// Apply every definition from a parsed config; returns how many were
    /// accepted so the caller can log the remainder.
    pub fn apply(&mut self, cfg: &BlocksConfig) -> usize {
        cfg.blocks
            .iter()
            .filter(|def| self.define(def.id, def.tile))
            .count()
    }
}
