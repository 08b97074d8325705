use clap::Args;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{
    Config, DEFAULT_BODY_DENSITY, DEFAULT_BODY_RADIUS, DEFAULT_DRAG_VELOCITY_DIVISOR,
    DEFAULT_GRAVITATIONAL_CONSTANT,
};
use crate::error::{check_positive, Result};
use crate::model::{CollisionMode, Preset, Universe};

/// Options shared by every binary that sets up a universe.
#[derive(Debug, Clone, Args)]
pub struct SimArgs {
    /// Starting scenario: orbit, twobodies or threebodies
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Viewport width that presets are laid out against
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height that presets are laid out against
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Gravitational constant
    #[arg(short, long, default_value_t = DEFAULT_GRAVITATIONAL_CONSTANT)]
    pub gravity: f64,

    /// What happens when bodies touch: merge or bounce
    #[arg(short, long, default_value = "merge")]
    pub collisions: CollisionMode,

    /// Seed for body colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Radius of bodies placed by hand
    #[arg(long, default_value_t = DEFAULT_BODY_RADIUS)]
    pub radius: f64,

    /// Density of bodies placed by hand
    #[arg(long, default_value_t = DEFAULT_BODY_DENSITY)]
    pub density: f64,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl SimArgs {
    pub fn config(&self) -> Config {
        Config {
            gravitational_constant: self.gravity,
            collision_mode: self.collisions,
            seed: self.seed,
            new_body_radius: self.radius,
            new_body_density: self.density,
            drag_velocity_divisor: DEFAULT_DRAG_VELOCITY_DIVISOR,
        }
    }

    pub fn build_universe(&self) -> Result<Universe> {
        // Checked even without a preset, since plotting sizes its image by it
        check_positive("viewport width", self.width)?;
        check_positive("viewport height", self.height)?;

        let mut universe = Universe::with_config(&self.config())?;
        if let Some(preset) = self.preset {
            universe.load_preset(preset, self.width, self.height)?;
        }
        Ok(universe)
    }
}

pub fn parse_log_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

pub fn init_logging(log_level: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(log_level))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
