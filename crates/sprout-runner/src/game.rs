use sprout_engine::core::{Capabilities, Script};
use sprout_engine::input::{Key, Modifiers, MouseButton};
use sprout_engine::surface::{Color, Surface};
use sprout_engine::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

const SQUARE_SIZE: f32 = 48.0;
const SQUARE_SPEED: f32 = 240.0;
const SQUARE_COLOR: Color = Color::rgb(80, 200, 120);

/// Seconds a spark stays visible.
const SPARK_LIFETIME: f32 = 1.0;
const SPARK_RADIUS: i32 = 12;
const SPARK_COLOR: Color = Color::rgb(255, 210, 60);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spark {
    x: i32,
    y: i32,
    age: f32,
}

/// Demo script: a square bouncing inside the window plus sparks where the
/// mouse is clicked.
#[derive(Debug)]
pub struct Game {
    bounds: (f32, f32),
    pos: (f32, f32),
    vel: (f32, f32),
    sparks: Vec<Spark>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_bounds(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    fn with_bounds(width: u32, height: u32) -> Self {
        let bounds = (width as f32, height as f32);
        Self {
            bounds,
            pos: ((bounds.0 - SQUARE_SIZE) / 2.0, (bounds.1 - SQUARE_SIZE) / 2.0),
            vel: (SQUARE_SPEED, SQUARE_SPEED * 0.75),
            sparks: Vec::new(),
        }
    }

    fn step_square(&mut self, dt: f32) {
        let max_x = (self.bounds.0 - SQUARE_SIZE).max(0.0);
        let max_y = (self.bounds.1 - SQUARE_SIZE).max(0.0);

        self.pos.0 += self.vel.0 * dt;
        self.pos.1 += self.vel.1 * dt;

        if self.pos.0 < 0.0 || self.pos.0 > max_x {
            self.vel.0 = -self.vel.0;
            self.pos.0 = self.pos.0.clamp(0.0, max_x);
        }
        if self.pos.1 < 0.0 || self.pos.1 > max_y {
            self.vel.1 = -self.vel.1;
            self.pos.1 = self.pos.1.clamp(0.0, max_y);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Script for Game {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            keydown: true,
            mousedown: true,
            update: true,
            draw: true,
            ..Capabilities::NONE
        }
    }

    fn keydown(&mut self, key: Key, modifiers: Modifiers, _unicode: Option<char>, _scancode: u32) {
        if key == Key::Space {
            self.vel = (-self.vel.0, -self.vel.1);
            log::debug!("square reversed (modifiers {:#06b})", modifiers.bits());
        }
    }

    fn mousedown(&mut self, button: MouseButton, x: i32, y: i32) {
        log::debug!("spark at {x},{y} (button {})", button.id());
        self.sparks.push(Spark { x, y, age: 0.0 });
    }

    fn update(&mut self, dt: f32) {
        self.step_square(dt);

        for spark in &mut self.sparks {
            spark.age += dt;
        }
        self.sparks.retain(|s| s.age < SPARK_LIFETIME);
    }

    fn draw(&mut self, surface: &mut Surface) {
        for spark in &self.sparks {
            let color = SPARK_COLOR.lerp(Color::BLACK, spark.age / SPARK_LIFETIME);
            surface.fill_circle(spark.x, spark.y, SPARK_RADIUS, color);
        }

        let size = SQUARE_SIZE as i32;
        surface.fill_rect(self.pos.0 as i32, self.pos.1 as i32, size, size, SQUARE_COLOR);
    }
}
