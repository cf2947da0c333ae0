use mini3d_render_raylib::{conv::vec3_to_rl, tile_color};
use mini3d_world::EMPTY;
use raylib::prelude::*;

use super::App;

impl App {
    /// Draw one frame: exhaustive scan of every populated cell whose tile
    /// resolves, one cube each. No culling; this is the documented ceiling
    /// of the design and only viable at small world sizes.
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let cam = Camera3D::perspective(
            vec3_to_rl(self.controller.pos),
            vec3_to_rl(self.controller.look_target()),
            Vector3::up(),
            60.0,
        );

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::SKYBLUE);

        let mut cubes = 0usize;
        {
            let mut d3 = d.begin_mode3D(cam);
            if self.show_grid {
                d3.draw_grid(64, 1.0);
            }
            let (sx, sy, sz) = self.world.dims();
            for z in 0..sz {
                for y in 0..sy {
                    for x in 0..sx {
                        let id = self.world.get(x, y, z);
                        if id == EMPTY {
                            continue;
                        }
                        // unset or stale mappings degrade to "skip", never a fault
                        let Some(tile) = self.registry.resolve(id) else {
                            continue;
                        };
                        let pos = Vector3::new(x as f32, y as f32, z as f32);
                        d3.draw_cube(pos, 1.0, 1.0, 1.0, tile_color(tile));
                        if self.show_wires {
                            d3.draw_cube_wires(pos, 1.0, 1.0, 1.0, Color::new(0, 0, 0, 51));
                        }
                        cubes += 1;
                    }
                }
            }
        }
        self.cubes_drawn = cubes;

        self.draw_hud(&mut d);
    }

    fn draw_hud(&self, d: &mut RaylibDrawHandle) {
        d.draw_text(
            "WASD move | SPACE jump | SHIFT sprint | TAB cursor | F wires | G grid | P pose",
            10,
            10,
            14,
            Color::DARKGRAY,
        );
        d.draw_text(
            &format!("cubes drawn: {}", self.cubes_drawn),
            10,
            30,
            16,
            Color::BLACK,
        );
        d.draw_fps(10, 50);

        // strip of sliced atlas tiles along the bottom edge
        let cell = 28i32;
        let shown = self.tiles.tile_count().min(16);
        let y = d.get_screen_height() - cell - 8;
        for i in 0..shown {
            if let Some(tex) = self.tiles.tile(i) {
                let src = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
                let dst = Rectangle::new(
                    (10 + i as i32 * (cell + 2)) as f32,
                    y as f32,
                    cell as f32,
                    cell as f32,
                );
                d.draw_texture_pro(tex, src, dst, Vector2::zero(), 0.0, Color::WHITE);
            }
        }
    }
}
