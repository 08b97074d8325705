use crate::model::CollisionMode;

pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 0.1;
pub const DEFAULT_BODY_RADIUS: f64 = 25.0;
pub const DEFAULT_BODY_DENSITY: f64 = 1.0;
// Ticks it takes a newly placed body to cover the length of its drag line
pub const DEFAULT_DRAG_VELOCITY_DIVISOR: f64 = 60.0;

/// Knobs for a `Universe` and for placing new bodies in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gravitational_constant: f64,
    pub collision_mode: CollisionMode,
    /// Fixed RNG seed for body colors; `None` draws from entropy.
    pub seed: Option<u64>,
    pub new_body_radius: f64,
    pub new_body_density: f64,
    pub drag_velocity_divisor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            collision_mode: CollisionMode::Merge,
            seed: None,
            new_body_radius: DEFAULT_BODY_RADIUS,
            new_body_density: DEFAULT_BODY_DENSITY,
            drag_velocity_divisor: DEFAULT_DRAG_VELOCITY_DIVISOR,
        }
    }
}
