use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use self::view::{ScreenTransform, View};
use crate::config::Config;
use crate::model::Universe;

mod controller;
mod view;

pub struct Simulation {
    universe: Universe,
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(universe: Universe, config: &Config) -> Self {
        Self {
            universe,
            view: View::new(),
            controller: Controller::new(config),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager, viewport: (f64, f64)) {
        // Process events
        for event in events.iter() {
            self.controller
                .process_event(event, &mut self.universe, viewport);
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (None, Some(self.view.planar_camera()), None, None)
    }

    fn step(&mut self, window: &mut Window) {
        let viewport = ScreenTransform::of(window).viewport();
        self.process_user_input(window.events(), viewport);
        self.view
            .prerender_scene(window, &self.universe, &self.controller);
        self.universe.step();
        self.controller.increment_frame_counter();
    }
}
