use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::body::{Body, BodyID, Color};
use super::command::Command;
use super::preset::Preset;
use crate::config::Config;
use crate::error::{check_finite, check_positive, Error, Result};
use crate::math::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    /// The smaller body is swallowed by the larger one.
    Merge,
    /// Bodies bounce off each other elastically.
    Bounce,
}

impl FromStr for CollisionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(CollisionMode::Merge),
            "bounce" => Ok(CollisionMode::Bounce),
            other => Err(format!("unknown collision mode {:?}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Universe {
    // Invariants:
    //   - bodies are kept in insertion order
    //   - between steps, no body is marked for removal
    bodies: Vec<Body>,
    next_body_id: usize,
    gravitational_constant: f64,
    collision_mode: CollisionMode,
    paused: bool,
    steps: u64,
    rng: StdRng,
}

impl Default for Universe {
    fn default() -> Self {
        Universe::new()
    }
}

impl Universe {
    pub fn new() -> Self {
        Self::from_checked_config(&Config::default())
    }

    /// Fails if the configured gravitational constant isn't finite.
    pub fn with_config(config: &Config) -> Result<Self> {
        check_finite("gravitational constant", config.gravitational_constant)?;
        Ok(Self::from_checked_config(config))
    }

    fn from_checked_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Universe {
            bodies: Vec::new(),
            next_body_id: 0,
            gravitational_constant: config.gravitational_constant,
            collision_mode: config.collision_mode,
            paused: false,
            steps: 0,
            rng,
        }
    }

    pub fn bodies(&self) -> impl ExactSizeIterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn get_body(&self, id: BodyID) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn get_body_mut(&mut self, id: BodyID) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of (unpaused) steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn add_body(&mut self, position: Vector2, radius: f64, density: f64) -> Result<BodyID> {
        let id = BodyID(self.next_body_id);
        let color = Color::random(&mut self.rng);
        let body = Body::new(id, position, radius, density, color)?;

        self.next_body_id += 1;
        self.bodies.push(body);
        Ok(id)
    }

    pub fn set_velocity(&mut self, id: BodyID, velocity: Vector2) -> Result<()> {
        check_finite("velocity.x", velocity.x)?;
        check_finite("velocity.y", velocity.y)?;
        let body = self.get_body_mut(id).ok_or(Error::UnknownBody(id))?;
        body.set_velocity(velocity);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Any finite value is allowed; a negative constant makes gravity repulsive.
    pub fn set_gravitational_constant(&mut self, value: f64) -> Result<()> {
        self.gravitational_constant = check_finite("gravitational constant", value)?;
        Ok(())
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.collision_mode
    }

    pub fn set_collision_mode(&mut self, mode: CollisionMode) {
        self.collision_mode = mode;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Replaces every body with the preset's initial configuration.
    pub fn load_preset(&mut self, preset: Preset, width: f64, height: f64) -> Result<()> {
        check_positive("viewport width", width)?;
        check_positive("viewport height", height)?;

        self.clear();
        for spec in preset.bodies(width, height) {
            let id = self.add_body(spec.position, spec.radius, spec.density)?;
            self.set_velocity(id, spec.velocity)?;
        }
        info!("Loaded preset {:?} with {} bodies", preset, self.bodies.len());
        Ok(())
    }

    /// Returns the new handle for `AddBody`, and `None` for everything else.
    pub fn apply(&mut self, command: Command) -> Result<Option<BodyID>> {
        match command {
            Command::AddBody {
                position,
                radius,
                density,
            } => return self.add_body(position, radius, density).map(Some),
            Command::SetVelocity { id, velocity } => self.set_velocity(id, velocity)?,
            Command::SetGravitationalConstant(g) => self.set_gravitational_constant(g)?,
            Command::SetCollisionMode(mode) => self.set_collision_mode(mode),
            Command::SetPaused(paused) => self.set_paused(paused),
            Command::TogglePaused => self.toggle_paused(),
            Command::LoadPreset {
                preset,
                width,
                height,
            } => self.load_preset(preset, width, height)?,
            Command::Clear => self.clear(),
        }
        Ok(None)
    }

    /// Advances the universe by one tick.
    ///
    /// Every ordered pair (A, B) is visited, so each unordered pair is seen
    /// twice per step. Effects are applied immediately, which means the
    /// visit of (B, A) sees whatever (A, B) did. Once all pairs are done,
    /// swallowed bodies are dropped and the survivors move.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        let n = self.bodies.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                interact(a, b, self.gravitational_constant, self.collision_mode);
            }
        }

        self.bodies.retain(|b| !b.marked_for_removal);
        for body in self.bodies.iter_mut() {
            body.update();
        }
        self.steps += 1;
    }
}

/// Borrows two distinct bodies mutably at once.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

// Either collide or attract, never both. Only A feels gravity here; B gets
// its share when the pair comes around as (B, A).
fn interact(a: &mut Body, b: &mut Body, g: f64, mode: CollisionMode) {
    let distance = a.position.distance(&b.position);
    if distance < a.radius + b.radius {
        match mode {
            CollisionMode::Merge => merge(a, b),
            CollisionMode::Bounce => bounce(a, b, distance),
        }
    } else {
        attract(a, b, distance, g);
    }
}

fn attract(a: &mut Body, b: &Body, distance: f64, g: f64) {
    let direction = match a.position.direction_to(&b.position) {
        Ok(direction) => direction,
        Err(e) => {
            debug!("Skipping gravity between {:?} and {:?}: {}", a.id, b.id, e);
            return;
        }
    };
    let magnitude = g * b.mass() / distance.powi(2);
    a.velocity += direction * magnitude;
}

fn merge(a: &mut Body, b: &mut Body) {
    // A swallowed body can't swallow or be swallowed again in the same step
    if a.marked_for_removal || b.marked_for_removal {
        return;
    }

    let (survivor, swallowed) = if b.radius < a.radius { (a, b) } else { (b, a) };
    swallowed.marked_for_removal = true;
    survivor.radius += swallowed.radius;
    debug!(
        "{:?} swallowed {:?}, radius is now {}",
        survivor.id, swallowed.id, survivor.radius
    );
}

fn bounce(a: &mut Body, b: &mut Body, distance: f64) {
    if distance == 0.0 {
        debug!(
            "Skipping bounce between {:?} and {:?}: bodies are coincident",
            a.id, b.id
        );
        return;
    }

    // Contact normal points from B to A
    let normal = (a.position - b.position) / distance;
    let tangent = Vector2::new(-normal.y, normal.x);

    // Pairs that are already moving apart were handled earlier (usually by
    // the mirrored visit in this same step).
    if (a.velocity - b.velocity).dot(&normal) >= 0.0 {
        return;
    }

    let (tan_a, tan_b) = (a.velocity.dot(&tangent), b.velocity.dot(&tangent));
    let (norm_a, norm_b) = (a.velocity.dot(&normal), b.velocity.dot(&normal));

    // 1D elastic collision along the normal
    let (m_a, m_b) = (a.mass(), b.mass());
    let total = m_a + m_b;
    let new_norm_a = (norm_a * (m_a - m_b) + 2.0 * m_b * norm_b) / total;
    let new_norm_b = (norm_b * (m_b - m_a) + 2.0 * m_a * norm_a) / total;

    // Undo this tick's movement before it happens, so the bodies don't
    // advance further into each other.
    a.position += -a.velocity;
    b.position += -b.velocity;

    a.velocity = tangent * tan_a + normal * new_norm_a;
    b.velocity = tangent * tan_b + normal * new_norm_b;
}
