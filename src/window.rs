//! Window runner: drives a [`Scene`] until the window closes or Escape is pressed.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::canvas::Canvas;
use crate::error::SimulationError;
use crate::gpu::GpuState;
use crate::scene::Scene;
use crate::time::FrameClock;

/// Frames between scene status reports.
const REPORT_INTERVAL: u64 = 120;

/// Lifecycle of a run. There is no pause; `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Scene built, no window yet.
    Initialized,
    /// Window and GPU up; every redraw steps and renders.
    Running,
    Terminated,
}

/// Open a window and run `scene` until the user exits.
///
/// Blocks until the window is closed or Escape is pressed.
pub fn run<S: Scene + 'static>(scene: S) -> Result<(), SimulationError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scene);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App<S: Scene> {
    scene: S,
    state: RunState,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    canvas: Canvas,
    clock: FrameClock,
    error: Option<SimulationError>,
}

impl<S: Scene> App<S> {
    fn new(scene: S) -> Self {
        Self {
            scene,
            state: RunState::Initialized,
            window: None,
            gpu_state: None,
            canvas: Canvas::new(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let (width, height) = self.scene.window_size();
        let window_attrs = Window::default_attributes()
            .with_title(self.scene.title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;

        window.request_redraw();
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn terminate(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != RunState::Terminated {
            log::info!("exiting after {} frames", self.clock.frame());
            self.state = RunState::Terminated;
        }
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        self.scene.step();
        self.scene.draw(&mut self.canvas);

        match gpu_state.render(&self.canvas) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                self.terminate(event_loop);
                return;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if self.clock.tick() {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} fps", self.scene.title(), self.clock.fps()));
            }
        }
        if self.clock.frame() % REPORT_INTERVAL == 0 {
            self.scene.report();
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<S: Scene> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != RunState::Initialized {
            return;
        }

        match self.start(event_loop) {
            Ok(()) => {
                log::info!("running \"{}\"", self.scene.title());
                self.state = RunState::Running;
            }
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e);
                self.terminate(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.terminate(event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.terminate(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if self.state == RunState::Running {
                    self.frame(event_loop);
                }
            }
            _ => {}
        }
    }
}
