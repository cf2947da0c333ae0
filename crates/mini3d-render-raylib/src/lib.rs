//! Raylib-facing helpers: vector conversions, the tile palette, and atlas
//! slicing into per-tile textures.

use raylib::prelude::*;

pub mod conv {
    use mini3d_geom::Vec3;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Flat color for a tile index, cycling through a fixed 8-entry palette.
/// Cubes render with these even when the atlas is textured; the sliced
/// tiles themselves show up in the HUD strip.
pub fn tile_color(tile: u16) -> Color {
    match tile % 8 {
        0 => Color::new(80, 170, 80, 255),    // grass
        1 => Color::new(255, 180, 60, 255),   // flowers / warm
        2 => Color::new(139, 105, 80, 255),   // dirt
        3 => Color::new(230, 220, 170, 255),  // sand
        4 => Color::new(150, 150, 150, 255),  // stone
        5 => Color::new(70, 130, 200, 255),   // water
        6 => Color::new(150, 110, 70, 255),   // wood
        _ => Color::new(245, 250, 255, 255),  // snow
    }
}

/// Per-tile textures sliced from one atlas image.
///
/// Tile 0 is the top-left cell; indices run row-major. The textures live for
/// the render side's lifetime; world data only refers to them by index.
pub struct TileSet {
    tiles: Vec<Texture2D>,
    pub tile_px: i32,
    pub cols: i32,
    pub rows: i32,
}

impl TileSet {
    /// Load `path` and slice it into `cols * rows` square tiles of
    /// `tile_px` pixels. Missing files, decode failures and a grid that does
    /// not fit the image all surface as `Err`.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        tile_px: i32,
        cols: i32,
        rows: i32,
    ) -> Result<Self, String> {
        if tile_px <= 0 || cols <= 0 || rows <= 0 {
            return Err(format!(
                "bad atlas grid: tile_px={tile_px} cols={cols} rows={rows}"
            ));
        }
        let img = Image::load_image(path)?;
        if cols * tile_px > img.width() || rows * tile_px > img.height() {
            return Err(format!(
                "atlas {}x{} too small for {}x{} tiles of {}px",
                img.width(),
                img.height(),
                cols,
                rows,
                tile_px
            ));
        }
        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for i in 0..cols * rows {
            let col = i % cols;
            let row = i / cols;
            let rec = Rectangle::new(
                (col * tile_px) as f32,
                (row * tile_px) as f32,
                tile_px as f32,
                tile_px as f32,
            );
            let sub = img.from_image(rec);
            tiles.push(rl.load_texture_from_image(thread, &sub)?);
        }
        Ok(Self {
            tiles,
            tile_px,
            cols,
            rows,
        })
    }

    /// Build a solid-color sheet from the palette when no atlas file is
    /// supplied, so the registry still has a real tile count to gate on.
    pub fn generate(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        tile_px: i32,
        cols: i32,
        rows: i32,
    ) -> Result<Self, String> {
        if tile_px <= 0 || cols <= 0 || rows <= 0 {
            return Err(format!(
                "bad atlas grid: tile_px={tile_px} cols={cols} rows={rows}"
            ));
        }
        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for i in 0..cols * rows {
            let img = Image::gen_image_color(tile_px, tile_px, tile_color(i as u16));
            tiles.push(rl.load_texture_from_image(thread, &img)?);
        }
        Ok(Self {
            tiles,
            tile_px,
            cols,
            rows,
        })
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn tile(&self, index: usize) -> Option<&Texture2D> {
        self.tiles.get(index)
    }
}
