use clap::Parser;

mod app;
mod worldgen;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "mini3d", about = "Minimal first-person voxel world viewer")]
pub struct Args {
    #[arg(long, default_value_t = 1280)]
    pub width: i32,
    #[arg(long, default_value_t = 720)]
    pub height: i32,
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    /// World dimensions in blocks
    #[arg(long, default_value_t = 64)]
    pub world_x: i32,
    #[arg(long, default_value_t = 32)]
    pub world_y: i32,
    #[arg(long, default_value_t = 64)]
    pub world_z: i32,
    /// Tile atlas image; when omitted a flat-color sheet is generated
    #[arg(long)]
    pub atlas: Option<String>,
    #[arg(long, default_value_t = 64)]
    pub tile_px: i32,
    #[arg(long, default_value_t = 8)]
    pub cols: i32,
    #[arg(long, default_value_t = 8)]
    pub rows: i32,
    /// Block definitions (block id -> atlas tile)
    #[arg(long, default_value = "assets/voxels/blocks.toml")]
    pub blocks: String,
    #[arg(long, default_value_t = 1337)]
    pub seed: i32,
    /// Invert horizontal mouse look
    #[arg(long)]
    pub invert_x: bool,
    /// Invert vertical mouse look
    #[arg(long)]
    pub invert_y: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.width.max(320), args.height.max(240))
        .title("mini3d")
        .build();
    rl.set_target_fps(args.fps.max(1));
    rl.disable_cursor();

    let mut app = match App::new(&mut rl, &thread, &args) {
        Ok(app) => app,
        Err(e) => {
            log::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    // One tick = one input sample, one physics update, one full world scan,
    // one submitted frame. The close signal is polled only at this boundary.
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, dt);
        app.render(&mut rl, &thread);
    }
}
