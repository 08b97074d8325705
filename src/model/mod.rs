mod body;
mod command;
mod placement;
mod preset;
mod universe;

pub use body::{Body, BodyID, Color, MAX_TRAIL_LENGTH};
pub use command::Command;
pub use placement::Placement;
pub use preset::{BodySpec, Preset};
pub use universe::{CollisionMode, Universe};
