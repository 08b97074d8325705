use super::body::BodyID;
use super::preset::Preset;
use super::universe::CollisionMode;
use crate::math::Vector2;

/// User input, as handed to `Universe::apply` by whatever is driving the
/// simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddBody {
        position: Vector2,
        radius: f64,
        density: f64,
    },
    SetVelocity {
        id: BodyID,
        velocity: Vector2,
    },
    SetGravitationalConstant(f64),
    SetCollisionMode(CollisionMode),
    SetPaused(bool),
    TogglePaused,
    LoadPreset {
        preset: Preset,
        width: f64,
        height: f64,
    },
    Clear,
}
