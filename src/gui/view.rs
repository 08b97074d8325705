use std::collections::{HashMap, HashSet};
use std::f32::consts::PI;
use std::rc::Rc;

use kiss3d::planar_camera::FixedView;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2};

use super::controller::Controller;
use crate::math::Vector2;
use crate::model::{Body, BodyID, Universe};

const CIRCLE_SEGMENTS: usize = 48;
const TEXT_SIZE: f32 = 40.0;

/// Maps universe coordinates (origin top-left, y down, like a canvas) into
/// kiss3d's planar coordinates (origin at the center, y up).
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    width: f32,
    height: f32,
}

impl ScreenTransform {
    pub fn of(window: &Window) -> Self {
        ScreenTransform {
            width: window.width() as f32,
            height: window.height() as f32,
        }
    }

    pub fn viewport(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    pub fn to_planar(&self, v: Vector2) -> Point2<f32> {
        let p = v.to_point();
        Point2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}

pub struct View {
    body_circles: HashMap<BodyID, PlanarSceneNode>,
    planar_camera: FixedView,
    font: Rc<Font>,
}

impl View {
    pub fn new() -> Self {
        View {
            body_circles: HashMap::new(),
            planar_camera: FixedView::new(),
            font: Font::default(),
        }
    }

    pub fn planar_camera(&mut self) -> &mut FixedView {
        &mut self.planar_camera
    }

    fn create_body_object(window: &mut Window, body: &Body) -> PlanarSceneNode {
        // Unit circle, scaled up to the body's radius every frame
        let mut circle = window.add_circle(1.0);
        let color = body.color().to_point();
        circle.set_color(color.x, color.y, color.z);
        circle
    }

    pub fn prerender_scene(&mut self, window: &mut Window, universe: &Universe, controller: &Controller) {
        let transform = ScreenTransform::of(window);

        // Forget the circles of bodies that got swallowed (or cleared)
        let alive: HashSet<BodyID> = universe.bodies().map(|b| b.id).collect();
        self.body_circles.retain(|id, circle| {
            if !alive.contains(id) {
                window.remove_planar_node(circle);
            }
            alive.contains(id)
        });

        for body in universe.bodies() {
            let circle = self
                .body_circles
                .entry(body.id)
                .or_insert_with(|| Self::create_body_object(window, body));
            let center = transform.to_planar(body.position());
            let radius = body.radius() as f32;
            circle.set_local_scale(radius, radius);
            circle.set_local_translation(Translation2::new(center.x, center.y));

            draw_trail(window, &transform, body);
        }

        let placement = controller.placement();
        let cursor = controller.cursor();
        if let Some((from, to)) = placement.drag_line(universe, cursor) {
            window.draw_planar_line(
                &transform.to_planar(from),
                &transform.to_planar(to),
                &Point3::new(1.0, 1.0, 1.0),
            );
        }
        if let Some((center, radius)) = placement.ghost(cursor) {
            draw_circle_outline(
                window,
                transform.to_planar(center),
                radius as f32,
                &Point3::new(0.3, 0.3, 0.3),
            );
        }

        window.draw_text(
            &status_text(universe, controller),
            &Point2::origin(),
            TEXT_SIZE,
            &self.font,
            &Point3::new(1.0, 1.0, 1.0),
        );
    }
}

fn draw_trail(window: &mut Window, transform: &ScreenTransform, body: &Body) {
    let color = body.color().to_point();
    let points: Vec<Point2<f32>> = body.trail().map(|p| transform.to_planar(*p)).collect();
    for segment in points.windows(2) {
        window.draw_planar_line(&segment[0], &segment[1], &color);
    }
}

fn draw_circle_outline(window: &mut Window, center: Point2<f32>, radius: f32, color: &Point3<f32>) {
    let point_at = |k: usize| {
        let theta = 2.0 * PI * (k as f32) / (CIRCLE_SEGMENTS as f32);
        Point2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
    };
    for k in 0..CIRCLE_SEGMENTS {
        window.draw_planar_line(&point_at(k), &point_at(k + 1), color);
    }
}

fn status_text(universe: &Universe, controller: &Controller) -> String {
    let mut text = format!(
        "G: {}\nCollisions: {:?}\nBodies: {}\nFPS: {:.0}",
        universe.gravitational_constant(),
        universe.collision_mode(),
        universe.len(),
        controller.fps(),
    );
    if controller.placement().is_adding() {
        text.push_str("\nAdding");
    }
    if universe.is_paused() {
        text.push_str("\nPAUSED");
    }
    text
}
