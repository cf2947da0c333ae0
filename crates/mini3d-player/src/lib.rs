//! First-person walker: mouse look plus a small gravity/jump integrator.
//!
//! The controller is window-free; each tick the app hands it an
//! [`InputSnapshot`] sampled once from the input layer, and reads back the
//! camera pose. Cursor capture is a mode bit here; flipping it and actually
//! showing or hiding the OS cursor stays with the caller.
#![forbid(unsafe_code)]

use mini3d_geom::Vec3;

/// Radians of look rotation per pixel of mouse travel.
pub const MOUSE_SENSITIVITY: f32 = 0.0025;

/// Pitch stays inside ±π/2.2 to keep the view short of the poles.
pub const PITCH_LIMIT: f32 = std::f32::consts::PI / 2.2;

/// Below this length a direction is treated as zero instead of normalized.
const MOVE_EPSILON: f32 = 1e-4;

/// Raw input for one tick: one mouse delta, the held movement keys, and the
/// discrete presses that must fire exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub jump_pressed: bool,
}

#[derive(Clone, Debug)]
pub struct FirstPersonController {
    pub pos: Vec3,
    pub yaw: f32,   // radians; 0 looks toward -Z, PI toward +Z
    pub pitch: f32, // radians, clamped to ±PITCH_LIMIT
    pub vel_y: f32,
    pub on_ground: bool,
    pub invert_x: bool,
    pub invert_y: bool,
    pub move_speed: f32,
    pub sprint_mult: f32,
    pub eye_height: f32,
    pub ground_level: f32,
    pub gravity: f32, // negative
    pub jump_speed: f32,
    cursor_locked: bool,
}

impl FirstPersonController {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            yaw: std::f32::consts::PI,
            pitch: -0.15,
            vel_y: 0.0,
            on_ground: false,
            invert_x: false,
            invert_y: false,
            move_speed: 6.0,
            sprint_mult: 1.8,
            eye_height: 1.7,
            ground_level: 0.0,
            gravity: -18.0,
            jump_speed: 6.5,
            cursor_locked: true,
        }
    }

    #[inline]
    pub fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// Flip cursor capture and return the new state so the caller can show
    /// or hide the OS cursor. Call once per toggle press, not per held frame.
    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor_locked = !self.cursor_locked;
        self.cursor_locked
    }

    /// View direction from yaw/pitch; yaw = 0 faces -Z, yaw = π faces +Z.
    pub fn forward(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cp * sy, sp, -cp * cy)
    }

    /// Where the camera looks this tick; always derived, never stored.
    pub fn look_target(&self) -> Vec3 {
        self.pos + self.forward()
    }

    /// Advance look and movement by `dt` seconds of the given input.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        if self.cursor_locked {
            let mx = if self.invert_x { -input.mouse_dx } else { input.mouse_dx };
            let my = if self.invert_y { -input.mouse_dy } else { input.mouse_dy };
            self.yaw += mx * MOUSE_SENSITIVITY;
            self.pitch = (self.pitch + my * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        let forward = self.forward();
        // Walking direction hugs the ground plane; looking straight up or
        // down must not stall W/S into a divide-by-near-zero.
        let mut flat = forward.horizontal();
        let flat_len = flat.length();
        flat = if flat_len > MOVE_EPSILON {
            flat / flat_len
        } else {
            Vec3::ZERO
        };
        let right = forward.cross(Vec3::UP).normalized();

        let mut wish = Vec3::ZERO;
        if input.forward {
            wish += flat;
        }
        if input.backward {
            wish -= flat;
        }
        if input.right {
            wish += right;
        }
        if input.left {
            wish -= right;
        }
        // Diagonals move at walk speed, not sqrt(2) times it
        if wish.length() > MOVE_EPSILON {
            wish = wish.normalized();
        }

        let mut speed = self.move_speed;
        if input.sprint {
            speed *= self.sprint_mult;
        }
        self.pos += wish * (speed * dt);

        self.vel_y += self.gravity * dt;
        self.pos.y += self.vel_y * dt;

        let floor = self.ground_level + self.eye_height;
        self.on_ground = false;
        if self.pos.y <= floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
            self.on_ground = true;
        }
        // Landing and jumping may happen in the same tick; the jump wins
        // over the clamp's zeroed velocity.
        if self.on_ground && input.jump_pressed {
            self.vel_y = self.jump_speed;
        }
    }
}
