use std::sync::Arc;
use std::sync::mpsc::Receiver;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use showcard::camera::Camera;
use showcard::cli::Cli;
use showcard::clock::Clock;
use showcard::controls::OrbitControls;
use showcard::geometry;
use showcard::renderer::Renderer;
use showcard::scene::{Scene, SceneObject};
use showcard::text;
use showcard::viewport::Viewport;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    camera: Camera,
    controls: OrbitControls,
    viewport: Viewport,
    clock: Clock,
    /// Pending font work; cleared after the single delivery (or failure).
    text_rx: Option<Receiver<Vec<SceneObject>>>,
}

impl App {
    fn new(cli: Cli) -> Self {
        // Static geometry enters the scene before the first frame; text
        // meshes arrive whenever the font worker finishes.
        let mut scene = Scene::new();
        scene.add(geometry::panel());

        let viewport = Viewport::from_physical(cli.width, cli.height, 1.0);
        let camera = Camera::new(viewport.aspect());
        let controls = OrbitControls::new(&camera);
        let text_rx = Some(text::spawn_loader(
            cli.font.clone(),
            text::portfolio_entries(),
        ));

        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            camera,
            controls,
            viewport,
            clock: Clock::new(),
            text_rx,
        }
    }

    fn handle_resize(&mut self, physical: winit::dpi::PhysicalSize<u32>) {
        let scale_factor = self
            .window
            .as_ref()
            .map(|w| w.scale_factor())
            .unwrap_or(1.0);
        self.viewport
            .resize(physical.width, physical.height, scale_factor);
        self.camera.set_aspect(self.viewport.aspect());
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(self.viewport.surface_extent());
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Elapsed time is tracked per frame but drives no visual effect.
        let _elapsed = self.clock.tick();

        if text::drain_into(&mut self.text_rx, &mut self.scene) {
            log::info!("scene ready: {} nodes", self.scene.node_count());
        }

        self.controls.update(&mut self.camera);

        if self.viewport.is_zero() {
            return;
        }
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.scene, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.cli.title.clone())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.viewport
                .resize(size.width, size.height, window.scale_factor());
            self.camera.set_aspect(self.viewport.aspect());

            let renderer = match pollster::block_on(Renderer::new(
                window.clone(),
                self.viewport.surface_extent(),
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::MouseInput { state, button, .. } => {
                self.controls.on_mouse_button(button, state)
            }
            WindowEvent::CursorMoved { position, .. } => self.controls.on_cursor_moved(position),
            WindowEvent::MouseWheel { delta, .. } => self.controls.on_scroll(delta),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Re-arm the frame loop: the next redraw is requested only after the
        // previous one has fully run.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "showcard starting: font {}, {}x{}",
        cli.font.display(),
        cli.width,
        cli.height
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
