mod render;
mod step;

use std::error::Error;

use mini3d_blocks::{BlocksConfig, TileRegistry};
use mini3d_geom::Vec3;
use mini3d_player::FirstPersonController;
use mini3d_render_raylib::TileSet;
use mini3d_world::VoxelWorld;
use raylib::prelude::*;

use crate::Args;
use crate::worldgen;

pub struct App {
    pub world: VoxelWorld,
    pub registry: TileRegistry,
    pub controller: FirstPersonController,
    pub tiles: TileSet,
    pub show_grid: bool,
    pub show_wires: bool,
    pub cubes_drawn: usize,
    pub tick: u64,
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        args: &Args,
    ) -> Result<Self, Box<dyn Error>> {
        let tiles = match args.atlas.as_deref() {
            Some(path) => {
                log::info!("loading atlas {} ({}x{} tiles)", path, args.cols, args.rows);
                TileSet::load(rl, thread, path, args.tile_px, args.cols, args.rows)?
            }
            None => {
                log::info!("no atlas given; generating a flat-color tile sheet");
                TileSet::generate(rl, thread, args.tile_px, args.cols, args.rows)?
            }
        };

        let mut registry = TileRegistry::new();
        registry.set_atlas_tiles(tiles.tile_count());
        let cfg = BlocksConfig::load_path(&args.blocks)?;
        let accepted = registry.apply(&cfg);
        if accepted < cfg.blocks.len() {
            log::warn!(
                "{} of {} block definitions rejected (tile out of atlas range?)",
                cfg.blocks.len() - accepted,
                cfg.blocks.len()
            );
        }
        log::info!("defined {} block tiles", accepted);

        let mut world = VoxelWorld::new(args.world_x, args.world_y, args.world_z)?;
        worldgen::populate(&mut world, &cfg, args.seed);

        let (sx, sy, sz) = world.dims();
        let spawn = Vec3::new(sx as f32 * 0.5, (sy - 4).max(4) as f32, sz as f32 + 16.0);
        let mut controller = FirstPersonController::new(spawn);
        controller.invert_x = args.invert_x;
        controller.invert_y = args.invert_y;

        Ok(Self {
            world,
            registry,
            controller,
            tiles,
            show_grid: true,
            show_wires: true,
            cubes_drawn: 0,
            tick: 0,
        })
    }
}
