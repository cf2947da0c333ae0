use mini3d_player::InputSnapshot;
use raylib::prelude::*;

use super::App;

impl App {
    /// Sample input once and advance the walker; drawing happens afterwards
    /// in [`App::render`], never here.
    pub fn step(&mut self, rl: &mut RaylibHandle, dt: f32) {
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            if self.controller.toggle_cursor() {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            self.show_grid = !self.show_grid;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            self.show_wires = !self.show_wires;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            let c = &self.controller;
            log::info!(
                "[tick {}] pos=({:.2},{:.2},{:.2}) yaw={:.2} pitch={:.2}",
                self.tick,
                c.pos.x,
                c.pos.y,
                c.pos.z,
                c.yaw,
                c.pitch
            );
        }

        let md = rl.get_mouse_delta();
        let input = InputSnapshot {
            mouse_dx: md.x,
            mouse_dy: md.y,
            forward: rl.is_key_down(KeyboardKey::KEY_W),
            backward: rl.is_key_down(KeyboardKey::KEY_S),
            left: rl.is_key_down(KeyboardKey::KEY_A),
            right: rl.is_key_down(KeyboardKey::KEY_D),
            sprint: rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
                || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT),
            jump_pressed: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        };
        self.controller.update(&input, dt.max(0.0));
        self.tick = self.tick.wrapping_add(1);
    }
}
