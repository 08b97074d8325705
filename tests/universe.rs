use approx::{assert_abs_diff_eq, assert_relative_eq};

use rust_grav::config::Config;
use rust_grav::math::Vector2;
use rust_grav::model::{CollisionMode, Command, Placement, Preset, Universe, MAX_TRAIL_LENGTH};

fn seeded_universe(mode: CollisionMode) -> Universe {
    Universe::with_config(&Config {
        collision_mode: mode,
        seed: Some(2024),
        ..Config::default()
    })
    .unwrap()
}

fn snapshot(universe: &Universe) -> Vec<(Vector2, Vector2, f64, usize)> {
    universe
        .bodies()
        .map(|b| (b.position(), b.velocity(), b.radius(), b.trail().len()))
        .collect()
}

#[test]
fn test_bodies_fall_towards_each_other() {
    let mut universe = seeded_universe(CollisionMode::Bounce);
    let a = universe.add_body(Vector2::new(100.0, 100.0), 10.0, 1.0).unwrap();
    let b = universe.add_body(Vector2::new(300.0, 250.0), 10.0, 1.0).unwrap();
    let (a_start, b_start) = (
        universe.get_body(a).unwrap().position(),
        universe.get_body(b).unwrap().position(),
    );

    universe.step();

    let (a_end, b_end) = (
        universe.get_body(a).unwrap().position(),
        universe.get_body(b).unwrap().position(),
    );
    assert!(a_end.distance(&b_start) < a_start.distance(&b_start));
    assert!(b_end.distance(&a_start) < b_start.distance(&a_start));

    // Equal masses, so equal and opposite pulls
    let (va, vb) = (
        universe.get_body(a).unwrap().velocity(),
        universe.get_body(b).unwrap().velocity(),
    );
    assert_relative_eq!(va.x, -vb.x);
    assert_relative_eq!(va.y, -vb.y);
}

#[test]
fn test_merge_sums_radii() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    universe.add_body(Vector2::new(0.0, 0.0), 10.0, 1.0).unwrap();
    let big = universe.add_body(Vector2::new(25.0, 0.0), 20.0, 1.0).unwrap();
    let mass = universe.get_body(big).unwrap().mass();

    universe.step();

    assert_eq!(universe.len(), 1);
    let survivor = universe.bodies().next().unwrap();
    assert_eq!(survivor.id, big);
    assert_relative_eq!(survivor.radius(), 30.0);
    assert_relative_eq!(survivor.mass(), mass);
    assert!(!survivor.is_marked_for_removal());
}

#[test]
fn test_merge_tie_break() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    let first = universe.add_body(Vector2::new(0.0, 0.0), 12.0, 1.0).unwrap();
    let second = universe.add_body(Vector2::new(0.0, 20.0), 12.0, 1.0).unwrap();

    universe.step();

    assert_eq!(universe.len(), 1);
    assert!(universe.get_body(first).is_none());
    assert_relative_eq!(universe.get_body(second).unwrap().radius(), 24.0);
}

#[test]
fn test_merge_chain() {
    // Three overlapping bodies end up as one, holding all of the radius
    let mut universe = seeded_universe(CollisionMode::Merge);
    universe.add_body(Vector2::new(0.0, 0.0), 5.0, 1.0).unwrap();
    universe.add_body(Vector2::new(6.0, 0.0), 6.0, 1.0).unwrap();
    universe.add_body(Vector2::new(12.0, 0.0), 7.0, 1.0).unwrap();

    universe.step();

    assert_eq!(universe.len(), 1);
    assert_relative_eq!(universe.bodies().next().unwrap().radius(), 18.0);
}

#[test]
fn test_merge_growth_reaches_later_pair() {
    // The last two only touch once the middle body has grown, which happens
    // earlier in the same step
    let mut universe = seeded_universe(CollisionMode::Merge);
    universe.add_body(Vector2::new(0.0, 0.0), 5.0, 1.0).unwrap();
    let middle = universe.add_body(Vector2::new(6.0, 0.0), 6.0, 1.0).unwrap();
    universe.add_body(Vector2::new(15.0, 0.0), 2.0, 1.0).unwrap();

    universe.step();

    assert_eq!(universe.len(), 1);
    assert_relative_eq!(universe.get_body(middle).unwrap().radius(), 13.0);
}

#[test]
fn test_bounce_rewind_reaches_later_pair() {
    // The first bounce rewinds the middle body into the third one, which
    // starts out of reach
    let mut universe = Universe::with_config(&Config {
        gravitational_constant: 0.0,
        collision_mode: CollisionMode::Bounce,
        seed: Some(7),
        ..Config::default()
    })
    .unwrap();
    let left = universe.add_body(Vector2::new(0.0, 0.0), 10.0, 1.0).unwrap();
    let middle = universe.add_body(Vector2::new(15.0, 0.0), 10.0, 1.0).unwrap();
    let right = universe.add_body(Vector2::new(34.0, 0.0), 5.0, 4.0).unwrap();
    universe.set_velocity(left, Vector2::new(5.0, 0.0)).unwrap();
    universe.set_velocity(middle, Vector2::new(-5.0, 0.0)).unwrap();

    universe.step();

    let body = |id| universe.get_body(id).unwrap();
    assert_relative_eq!(body(left).velocity().x, -5.0);
    assert_abs_diff_eq!(body(middle).velocity().x, 0.0);
    assert_relative_eq!(body(right).velocity().x, 5.0);

    assert_relative_eq!(body(left).position().x, -10.0);
    assert_relative_eq!(body(middle).position().x, 15.0);
    assert_relative_eq!(body(right).position().x, 39.0);
}

#[test]
fn test_bounce_reverses_head_on() {
    let mut universe = seeded_universe(CollisionMode::Bounce);
    let a = universe.add_body(Vector2::new(90.0, 50.0), 30.0, 2.0).unwrap();
    let b = universe.add_body(Vector2::new(108.0, 50.0), 30.0, 2.0).unwrap();
    universe.set_velocity(a, Vector2::new(3.0, 0.0)).unwrap();
    universe.set_velocity(b, Vector2::new(-3.0, 0.0)).unwrap();

    universe.step();

    let (va, vb) = (
        universe.get_body(a).unwrap().velocity(),
        universe.get_body(b).unwrap().velocity(),
    );
    assert_relative_eq!(va.x, -3.0);
    assert_relative_eq!(vb.x, 3.0);
    assert_abs_diff_eq!(va.y, 0.0);
    assert_abs_diff_eq!(vb.y, 0.0);

    // Overlapping but separating: left alone on the next step
    universe.step();
    assert_relative_eq!(universe.get_body(a).unwrap().velocity().x, -3.0);
    assert_relative_eq!(universe.get_body(b).unwrap().velocity().x, 3.0);
}

#[test]
fn test_trail_length_is_capped() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    let id = universe.add_body(Vector2::new(0.0, 0.0), 1.0, 1.0).unwrap();
    universe.set_velocity(id, Vector2::new(0.5, 0.25)).unwrap();

    for _ in 0..2000 {
        universe.step();
        assert!(universe.get_body(id).unwrap().trail().len() <= MAX_TRAIL_LENGTH);
    }
    assert_eq!(universe.get_body(id).unwrap().trail().len(), 1000);
}

#[test]
fn test_pause_freezes_everything() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    universe.load_preset(Preset::Orbit, 1000.0, 800.0).unwrap();
    for _ in 0..10 {
        universe.step();
    }
    let before = snapshot(&universe);

    universe.apply(Command::SetPaused(true)).unwrap();
    for _ in 0..500 {
        universe.step();
    }

    assert_eq!(snapshot(&universe), before);
    assert_eq!(universe.steps(), 10);
}

#[test]
fn test_orbit_preset_stays_bound() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    universe.load_preset(Preset::Orbit, 1000.0, 800.0).unwrap();
    let center = Vector2::new(500.0, 400.0);

    for _ in 0..300 {
        universe.step();
    }

    // The moon is still around, and hasn't wandered off
    assert_eq!(universe.len(), 2);
    let moon = universe.bodies().nth(1).unwrap();
    let distance = moon.position().distance(&center);
    assert!(distance > 60.0 && distance < 700.0, "distance = {}", distance);
}

#[test]
fn test_loading_preset_replaces_bodies() {
    let mut universe = seeded_universe(CollisionMode::Merge);
    let stray = universe.add_body(Vector2::new(1.0, 1.0), 3.0, 1.0).unwrap();
    universe.load_preset(Preset::ThreeBodies, 1000.0, 800.0).unwrap();

    assert_eq!(universe.len(), 2);
    assert!(universe.get_body(stray).is_none());
    let positions: Vec<_> = universe.bodies().map(|b| b.position()).collect();
    assert_eq!(
        positions,
        vec![Vector2::new(250.0, 200.0), Vector2::new(250.0, 300.0)]
    );

    assert!(universe.load_preset(Preset::Orbit, 0.0, 800.0).is_err());
    // A rejected viewport leaves the universe as it was
    assert_eq!(universe.len(), 2);
}

#[test]
fn test_colors_are_reproducible() {
    let colors = |seed| {
        let mut universe = Universe::with_config(&Config {
            seed: Some(seed),
            ..Config::default()
        })
        .unwrap();
        universe.load_preset(Preset::TwoBodies, 800.0, 600.0).unwrap();
        universe.bodies().map(|b| b.color()).collect::<Vec<_>>()
    };
    assert_eq!(colors(5), colors(5));
    for c in colors(6) {
        assert_eq!(c.r + c.g + c.b, 255);
    }
}

#[test]
fn test_drag_to_throw() {
    let config = Config {
        seed: Some(11),
        ..Config::default()
    };
    let mut universe = Universe::with_config(&config).unwrap();
    let mut placement = Placement::new(&config);

    placement.toggle_adding(&mut universe).unwrap();
    let id = placement
        .press(&mut universe, Vector2::new(200.0, 200.0))
        .unwrap()
        .unwrap();
    placement
        .release(&mut universe, Vector2::new(80.0, 260.0))
        .unwrap();

    let body = universe.get_body(id).unwrap();
    assert_relative_eq!(body.velocity().x, -2.0);
    assert_relative_eq!(body.velocity().y, 1.0);

    // Adding paused the universe; nothing moves until it is resumed
    universe.step();
    assert_eq!(
        universe.get_body(id).unwrap().position(),
        Vector2::new(200.0, 200.0)
    );
    universe.apply(Command::TogglePaused).unwrap();
    universe.step();
    assert_eq!(
        universe.get_body(id).unwrap().position(),
        Vector2::new(198.0, 201.0)
    );
}
