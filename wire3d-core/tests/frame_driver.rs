use wire3d_core::palette::{BACKGROUND, LINE};
use wire3d_core::{
    AnimationState, Buttons, FrameDriver, MeshKind, ProjectionMode, RenderConfig,
    SimulatedDisplay,
};

fn setup(config: RenderConfig) -> (FrameDriver, SimulatedDisplay) {
    let display = SimulatedDisplay::new(config.width as usize, config.height as usize);
    (FrameDriver::new(config).unwrap(), display)
}

fn line_pixels(page: &[u8]) -> usize {
    page.iter().filter(|p| **p == LINE).count()
}

#[test]
fn test_step_presents_front_page_and_flips() {
    let (mut driver, mut display) = setup(RenderConfig::default());
    let back = driver.framebuffer().back_index();

    driver.step(&mut display).unwrap();

    assert_eq!(display.frames_presented(), 1);
    assert_eq!(display.vblanks(), 1);
    assert_ne!(driver.framebuffer().back_index(), back);
    assert_eq!(display.last_frame(), driver.framebuffer().front_page());
    assert!(line_pixels(display.last_frame()) > 0);
}

#[test]
fn test_presented_page_survives_next_frame() {
    let (mut driver, mut display) = setup(RenderConfig::default());
    driver.step(&mut display).unwrap();
    let first = display.last_frame().to_vec();

    driver.step(&mut display).unwrap();

    // The first frame's page is back again but not yet redrawn
    assert_eq!(driver.framebuffer().back_page(), first.as_slice());
    assert_ne!(display.last_frame(), first.as_slice());
}

#[test]
fn test_frames_use_background_and_line_only() {
    let (mut driver, mut display) = setup(RenderConfig::default());
    display.push_input(Buttons::empty());
    display.push_input(Buttons::A);
    for _ in 0..40 {
        driver.step(&mut display).unwrap();
        assert!(display
            .last_frame()
            .iter()
            .all(|p| *p == BACKGROUND || *p == LINE));
    }
}

#[test]
fn test_mesh_toggles_on_press_not_hold() {
    let (mut driver, display) = setup(RenderConfig::default());
    let mut display = display.with_inputs([
        Buttons::A,
        Buttons::A,
        Buttons::A,
        Buttons::empty(),
        Buttons::A | Buttons::UP,
    ]);

    driver.step(&mut display).unwrap();
    assert_eq!(driver.selection().mesh, MeshKind::Torus);
    driver.step(&mut display).unwrap();
    driver.step(&mut display).unwrap();
    assert_eq!(driver.selection().mesh, MeshKind::Torus);
    driver.step(&mut display).unwrap();
    driver.step(&mut display).unwrap();
    assert_eq!(driver.selection().mesh, MeshKind::Cube);
    assert_eq!(driver.selection().camera, ProjectionMode::Perspective);
}

#[test]
fn test_camera_toggles_independently() {
    let (mut driver, display) = setup(RenderConfig::default());
    let mut display = display.with_inputs([Buttons::B, Buttons::A | Buttons::B]);

    driver.step(&mut display).unwrap();
    assert_eq!(driver.selection().camera, ProjectionMode::Orthographic);
    assert_eq!(driver.selection().mesh, MeshKind::Cube);

    driver.step(&mut display).unwrap();
    assert_eq!(driver.selection().camera, ProjectionMode::Orthographic);
    assert_eq!(driver.selection().mesh, MeshKind::Torus);
}

#[test]
fn test_animation_advances_and_wraps() {
    let (mut driver, mut display) = setup(RenderConfig::default());
    for _ in 0..3 {
        driver.step(&mut display).unwrap();
    }
    assert_eq!(driver.animation(), AnimationState::new(3, 6, 3));

    for _ in 3..256 {
        driver.step(&mut display).unwrap();
    }
    assert_eq!(driver.animation(), AnimationState::new(0, 0, 0));
}

#[test]
fn test_torus_edges_all_accounted_for() {
    let config = RenderConfig {
        initial_mesh: MeshKind::Torus,
        ..RenderConfig::high_precision()
    };
    let (mut driver, mut display) = setup(config);
    for _ in 0..64 {
        let stats = driver.step(&mut display).unwrap();
        assert_eq!(stats.vertices, 128);
        assert_eq!(
            stats.edges_drawn + stats.edges_clipped + stats.edges_rejected + stats.edges_hidden,
            256
        );
    }
    assert!(line_pixels(display.last_frame()) > 0);
}

#[test]
fn test_close_camera_clips_edges() {
    let config = RenderConfig {
        initial_mesh: MeshKind::Torus,
        viewer_distance: 1024,
        ..RenderConfig::default()
    };
    let (mut driver, mut display) = setup(config);
    let mut clipped = 0;
    for _ in 0..32 {
        clipped += driver.step(&mut display).unwrap().edges_clipped;
    }
    assert!(clipped > 0);
}

#[test]
fn test_same_inputs_same_frames() {
    let run = || {
        let (mut driver, display) = setup(RenderConfig::default());
        let mut display = display.with_inputs([Buttons::empty(), Buttons::A, Buttons::empty()]);
        for _ in 0..10 {
            driver.step(&mut display).unwrap();
        }
        display.last_frame().to_vec()
    };
    assert_eq!(run(), run());
}
