use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::math::Vector2;
use crate::model::{CollisionMode, Command, Placement, Preset, Universe};

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_TOGGLE_ADD: Key = Key::A;
const KEY_TOGGLE_COLLISIONS: Key = Key::B;
const KEY_GRAVITY_UP: Key = Key::Period;
const KEY_GRAVITY_DOWN: Key = Key::Comma;
const KEY_CLEAR: Key = Key::Delete;
const KEY_PRESET_ORBIT: Key = Key::Key1;
const KEY_PRESET_TWO_BODIES: Key = Key::Key2;
const KEY_PRESET_THREE_BODIES: Key = Key::Key3;

const MOUSE_PLACE: MouseButton = MouseButton::Button1;

pub struct Controller {
    placement: Placement,
    // Last known cursor position, in universe coordinates
    cursor: Vector2,
    fps_counter: FpsCounter,
}

/// Frames per second, averaged over fixed sampling windows.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    sample_window: Duration,
    fps: f64,
}

impl FpsCounter {
    pub fn new(sample_window: Duration) -> Self {
        FpsCounter {
            window_start: Instant::now(),
            frames: 0,
            sample_window,
            fps: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.fps
    }

    pub fn increment(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= self.sample_window {
            self.fps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Controller {
            placement: Placement::new(config),
            cursor: Vector2::zeros(),
            fps_counter: FpsCounter::new(Duration::from_secs(1)),
        }
    }

    /// `viewport` is the window size, which presets are laid out against.
    pub fn process_event(&mut self, event: Event, universe: &mut Universe, viewport: (f64, f64)) {
        // A bad command shouldn't take the whole window down with it
        if let Err(e) = self.handle_window_event(event.value, universe, viewport) {
            warn!("Ignoring input: {}", e);
        }
    }

    fn handle_window_event(
        &mut self,
        event: WindowEvent,
        universe: &mut Universe,
        (width, height): (f64, f64),
    ) -> Result<()> {
        let load = |preset| Command::LoadPreset {
            preset,
            width,
            height,
        };

        match event {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Vector2::new(x, y);
            }
            WindowEvent::MouseButton(MOUSE_PLACE, Action::Press, _) => {
                self.placement.press(universe, self.cursor)?;
            }
            WindowEvent::MouseButton(MOUSE_PLACE, Action::Release, _) => {
                self.placement.release(universe, self.cursor)?;
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                universe.apply(Command::TogglePaused)?;
            }
            WindowEvent::Key(KEY_TOGGLE_ADD, Action::Press, _) => {
                self.placement.toggle_adding(universe)?;
            }
            WindowEvent::Key(KEY_TOGGLE_COLLISIONS, Action::Press, _) => {
                let mode = match universe.collision_mode() {
                    CollisionMode::Merge => CollisionMode::Bounce,
                    CollisionMode::Bounce => CollisionMode::Merge,
                };
                universe.apply(Command::SetCollisionMode(mode))?;
                info!("Collision mode is {:?}", mode);
            }
            WindowEvent::Key(KEY_GRAVITY_UP, Action::Press, _) => {
                let g = universe.gravitational_constant() * 2.0;
                universe.apply(Command::SetGravitationalConstant(g))?;
                info!("Gravitational constant is {}", g);
            }
            WindowEvent::Key(KEY_GRAVITY_DOWN, Action::Press, _) => {
                let g = universe.gravitational_constant() / 2.0;
                universe.apply(Command::SetGravitationalConstant(g))?;
                info!("Gravitational constant is {}", g);
            }
            WindowEvent::Key(KEY_CLEAR, Action::Press, _) => {
                universe.apply(Command::Clear)?;
            }
            WindowEvent::Key(KEY_PRESET_ORBIT, Action::Press, _) => {
                universe.apply(load(Preset::Orbit))?;
            }
            WindowEvent::Key(KEY_PRESET_TWO_BODIES, Action::Press, _) => {
                universe.apply(load(Preset::TwoBodies))?;
            }
            WindowEvent::Key(KEY_PRESET_THREE_BODIES, Action::Press, _) => {
                universe.apply(load(Preset::ThreeBodies))?;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn cursor(&self) -> Vector2 {
        self.cursor
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}
