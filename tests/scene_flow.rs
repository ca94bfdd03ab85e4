use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use showcard::camera::Camera;
use showcard::geometry;
use showcard::scene::Scene;
use showcard::text;
use showcard::viewport::Viewport;

/// The scene the app builds before the font resolves: panel + light.
fn startup_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(geometry::panel());
    scene
}

#[test]
fn startup_scene_has_two_nodes() {
    let scene = startup_scene();
    assert_eq!(scene.node_count(), 2);
    assert_eq!(scene.object_count(), 1);
}

#[test]
fn font_delivery_grows_scene_to_six_exactly_once() {
    let mut scene = startup_scene();

    let (tx, receiver) = mpsc::channel();
    let mut rx = Some(receiver);

    // Loading: nothing delivered yet.
    assert!(!text::drain_into(&mut rx, &mut scene));
    assert_eq!(scene.node_count(), 2);

    // One mesh per text entry, four entries.
    let batch: Vec<_> = (0..text::portfolio_entries().len())
        .map(|_| geometry::panel())
        .collect();
    tx.send(batch).unwrap();

    assert!(text::drain_into(&mut rx, &mut scene));
    assert_eq!(scene.node_count(), 6);

    // Loading -> Ready happens once; no further transition for the rest of
    // the process.
    for _ in 0..10 {
        assert!(!text::drain_into(&mut rx, &mut scene));
    }
    assert_eq!(scene.node_count(), 6);
}

#[test]
fn font_failure_leaves_scene_at_two_nodes() {
    let mut scene = startup_scene();
    let mut rx = Some(text::spawn_loader(
        PathBuf::from("/definitely/not/a/font.ttf"),
        text::portfolio_entries(),
    ));

    let deadline = Instant::now() + Duration::from_secs(5);
    while rx.is_some() && Instant::now() < deadline {
        assert!(!text::drain_into(&mut rx, &mut scene));
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(rx.is_none());
    assert_eq!(scene.node_count(), 2);
}

#[test]
fn resize_updates_camera_aspect_and_surface_extent() {
    let mut viewport = Viewport::from_physical(1920, 1080, 1.0);
    let mut camera = Camera::new(viewport.aspect());
    assert!((camera.aspect - 1.7777778).abs() < 1e-4);

    viewport.resize(800, 600, 1.0);
    camera.set_aspect(viewport.aspect());

    assert!((camera.aspect - 1.3333334).abs() < 1e-4);
    assert_eq!(viewport.surface_extent(), (800, 600));

    // Repeating the identical event changes nothing.
    let before = (viewport, camera.aspect);
    viewport.resize(800, 600, 1.0);
    camera.set_aspect(viewport.aspect());
    assert_eq!((viewport, camera.aspect), before);
}

#[test]
fn surface_extent_clamps_high_density_displays() {
    // A 4x display: physical size is logical * 4, but the surface renders
    // at logical * 2.
    let viewport = Viewport::from_physical(3200, 2400, 4.0);
    assert_eq!(viewport.pixel_ratio(), 2.0);
    assert_eq!(viewport.surface_extent(), (1600, 1200));
}
