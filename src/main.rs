use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use flight_viewer::cli::Cli;
use flight_viewer::config::ViewerConfig;
use flight_viewer::core::{Button, Controller, FpsCounter, WinitController};
use flight_viewer::frame::FrameClock;
use flight_viewer::renderer::SceneRenderer;
use flight_viewer::viewer::Viewer;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: ViewerConfig,
    show_ui: bool,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    viewer: Viewer,
    controller: WinitController,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(config: ViewerConfig, show_ui: bool) -> Self {
        Self {
            viewer: Viewer::new(&config),
            config,
            show_ui,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("Cursor grab unavailable: {}", e);
        }
        window.set_cursor_visible(false);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        let frame = self.clock.tick_at(Instant::now());
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        self.viewer.update(&frame, &self.controller);
        self.controller.reset_deltas();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.render(&self.viewer, window, self.fps.fps()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            self.config.scene.floor_extent,
            self.show_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        Self::grab_cursor(&window);

        // The first frame starts now, not at process start
        self.clock = FrameClock::new();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Key releases must reach the controller even when egui consumes them
        self.controller.process_event(&event);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config, !cli.no_ui);

    log::info!("Flight Viewer - O: chase, F: free, C/V: manual/scripted, WASD/Space, Escape to quit");
    event_loop.run_app(&mut app).context("Event loop terminated with an error")?;

    Ok(())
}
