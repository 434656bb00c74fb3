use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{FrameLoop, LoopControl};
use crate::device::{Gpu, GpuInit};
use crate::render::TrianglePipeline;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL".to_string(),
            size: LogicalSize::new(800.0, 600.0),
            resizable: false,
        }
    }
}

impl RuntimeConfig {
    pub fn window_attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size)
            .with_resizable(self.resizable)
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, builds the pipeline and redraws until the window is closed.
    ///
    /// Returns an error if startup fails; a clean close returns `Ok`.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => {
                let stats = state.frame_loop.stats();
                log::info!(
                    "shut down cleanly: {} frames drawn, {} presented",
                    stats.frames_drawn,
                    stats.frames_presented
                );
                Ok(())
            }
        }
    }
}

/// The single window plus everything rendered into it.
struct Scene {
    // Released explicitly in `exiting`, while `gpu` still holds a current context.
    pipeline: Option<TrianglePipeline<glow::Context>>,
    gpu: Gpu,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    scene: Option<Scene>,
    frame_loop: FrameLoop,
    fatal: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            scene: None,
            frame_loop: FrameLoop::new(),
            fatal: None,
        }
    }

    fn bootstrap(&self, event_loop: &ActiveEventLoop) -> Result<Scene> {
        let gpu = Gpu::new(
            event_loop,
            self.config.window_attributes(),
            self.gpu_init.clone(),
        )
        .context("failed to bring up window and GL context")?;

        let pipeline =
            TrianglePipeline::new(gpu.gl()).context("failed to build triangle pipeline")?;

        Ok(Scene {
            pipeline: Some(pipeline),
            gpu,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.frame_loop.abort();
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let Some(pipeline) = scene.pipeline.as_ref() else {
            return;
        };

        match self.frame_loop.run_frame(scene.gpu.gl(), pipeline, &scene.gpu) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => event_loop.exit(),
            Err(e) => {
                log::error!("{e}");
                self.frame_loop.abort();
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_some() || self.frame_loop.is_closed() {
            return;
        }

        match self.bootstrap(event_loop) {
            Ok(scene) => {
                scene.gpu.window().request_redraw();
                self.scene = Some(scene);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_closed() {
            event_loop.exit();
            return;
        }

        // Continuous redraw: every pass through the loop draws a frame.
        if let Some(scene) = &self.scene {
            scene.gpu.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.frame_loop.handle_window_event(&event) == LoopControl::Exit {
            event_loop.exit();
            return;
        }

        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(mut scene) = self.scene.take() else {
            return;
        };

        if let Some(pipeline) = scene.pipeline.take() {
            pipeline.release(scene.gpu.gl());
        }

        // Dropping `scene` tears down the surface, context and window.
        log::debug!("GL context and window released");
    }
}
