use clap::ValueEnum;
use loam_geom::{Rect, Vec2};
use loam_runtime::EnergySink;

pub const MAX_ENERGY: f32 = 100.0;
pub const IDLE_GAIN: f32 = 1.0;
pub const RUN_COST: f32 = 0.5;
pub const JUMP_COST: f32 = 10.0;
pub const SIZE: Vec2 = Vec2::new(50.0, 80.0);
/// Height a jump reaches above the walker's head.
pub const JUMP_REACH: f32 = 400.0;
/// Ticks between direction changes on the zigzag route.
pub const ZIGZAG_PERIOD: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Route {
    Right,
    Left,
    Zigzag,
}

/// Scripted stand-in for the player: walks a route, spends and regains
/// energy, and jumps for fruit overhead.
#[derive(Clone, Debug)]
pub struct Walker {
    x: f32,
    ground: f32,
    energy: f32,
    step: f32,
    route: Route,
    ticks: u64,
}

impl Walker {
    pub fn new(x: f32, ground: f32, step: f32, route: Route) -> Self {
        Self {
            x,
            ground,
            energy: MAX_ENERGY,
            step,
            route,
            ticks: 0,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Whole energy points, the way a HUD would show them.
    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy.floor()
    }

    fn direction(&self) -> f32 {
        match self.route {
            Route::Right => 1.0,
            Route::Left => -1.0,
            Route::Zigzag => {
                if (self.ticks / ZIGZAG_PERIOD) % 2 == 0 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }

    /// One tick of movement. Runs when there is energy for it, otherwise
    /// rests. Returns the new x.
    pub fn advance(&mut self) -> f32 {
        if self.step > 0.0 && self.energy >= RUN_COST {
            self.x += self.direction() * self.step;
            self.energy -= RUN_COST;
        } else {
            self.energy += IDLE_GAIN;
        }
        self.energy = self.energy.clamp(0.0, MAX_ENERGY);
        self.ticks += 1;
        self.x
    }

    /// Snaps the feet to the terrain surface at the current x.
    pub fn land(&mut self, surface_y: f32) {
        self.ground = surface_y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            Vec2::new(self.x - SIZE.x / 2.0, self.ground - SIZE.y),
            SIZE,
        )
    }

    /// Everything the walker could touch with a jump from where it stands.
    pub fn reach(&self) -> Rect {
        let b = self.bounds();
        Rect::new(Vec2::new(b.min.x, b.min.y - JUMP_REACH), b.max)
    }

    pub fn try_jump(&mut self) -> bool {
        if self.energy < JUMP_COST {
            return false;
        }
        self.energy -= JUMP_COST;
        true
    }
}

impl EnergySink for Walker {
    fn add_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).clamp(0.0, MAX_ENERGY);
    }
}
