use tracing::debug;

use super::body::BodyID;
use super::command::Command;
use super::universe::Universe;
use crate::config::Config;
use crate::error::Result;
use crate::math::Vector2;

/// Tracks the "click to place, drag to aim" gesture for adding bodies.
///
/// This lives with whoever drives the simulation, not in the universe: the
/// universe only ever sees the resulting commands.
#[derive(Debug, Clone)]
pub struct Placement {
    adding: bool,
    pending: Option<BodyID>,
    radius: f64,
    density: f64,
    velocity_divisor: f64,
}

impl Placement {
    pub fn new(config: &Config) -> Self {
        Placement {
            adding: false,
            pending: None,
            radius: config.new_body_radius,
            density: config.new_body_density,
            velocity_divisor: config.drag_velocity_divisor,
        }
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn is_dragging(&self) -> bool {
        self.pending.is_some()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // Sizes are validated when the body is created, not here
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Entering add mode pauses the universe, so new bodies can be aimed at
    /// a still scene. Leaving it does not unpause.
    pub fn toggle_adding(&mut self, universe: &mut Universe) -> Result<()> {
        self.adding = !self.adding;
        if self.adding {
            universe.apply(Command::SetPaused(true))?;
        } else {
            self.pending = None;
        }
        Ok(())
    }

    /// Drops a body under the cursor, if we're in add mode.
    pub fn press(&mut self, universe: &mut Universe, cursor: Vector2) -> Result<Option<BodyID>> {
        if !self.adding {
            return Ok(None);
        }
        let id = universe.apply(Command::AddBody {
            position: cursor,
            radius: self.radius,
            density: self.density,
        })?;
        self.pending = id;
        Ok(id)
    }

    /// Finishes a drag: the new body gets a velocity pointing from itself
    /// towards the release point.
    pub fn release(&mut self, universe: &mut Universe, cursor: Vector2) -> Result<()> {
        let id = match self.pending.take() {
            Some(id) => id,
            None => return Ok(()),
        };

        // The body may be gone already, e.g. if a preset was loaded mid-drag
        let position = match universe.get_body(id) {
            Some(body) => body.position(),
            None => {
                debug!("Dropping drag for vanished body {:?}", id);
                return Ok(());
            }
        };
        let velocity = position.displacement_to(&cursor) / self.velocity_divisor;
        universe.apply(Command::SetVelocity { id, velocity })?;
        Ok(())
    }

    /// Line from the body being aimed to the cursor.
    pub fn drag_line(&self, universe: &Universe, cursor: Vector2) -> Option<(Vector2, Vector2)> {
        let body = universe.get_body(self.pending?)?;
        Some((body.position(), cursor))
    }

    /// Where the next body would go, and how big it would be.
    pub fn ghost(&self, cursor: Vector2) -> Option<(Vector2, f64)> {
        match (self.adding, self.pending) {
            (true, None) => Some((cursor, self.radius)),
            _ => None,
        }
    }
}
