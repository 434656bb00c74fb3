use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplate, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, DisplayApiPreference, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::api::describe_driver;
use super::{BootstrapError, GpuInit, PresentError};
use crate::core::Present;

/// Owns the window, its GL surface and current context, and the loaded
/// function table.
///
/// Field order is drop order: the function table and surface go before the
/// context, and the window outlives all of them.
pub struct Gpu {
    /// Loaded GL entry points for `context`.
    gl: glow::Context,

    /// Window-backed default framebuffer.
    surface: Surface<WindowSurface>,

    /// Context current on the thread that created this value.
    context: PossiblyCurrentContext,

    window: Window,
}

impl Gpu {
    /// Creates the window and a current GL context, then loads GL entry points.
    ///
    /// Must run on the event-loop thread; the context stays current there for
    /// the lifetime of the returned value.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: GpuInit,
    ) -> Result<Self, BootstrapError> {
        let GpuInit { gl_version, vsync } = init;

        let (window, config) = open_window(event_loop, attributes)?;

        log::debug!(
            "picked GL config: {} samples, srgb={}",
            config.num_samples(),
            config.srgb_capable()
        );

        let raw_window_handle = window
            .window_handle()
            .map_err(BootstrapError::context)?
            .as_raw();

        let display = config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                gl_version.0,
                gl_version.1,
            ))))
            .build(Some(raw_window_handle));

        // SAFETY: `raw_window_handle` belongs to `window`, which is stored
        // alongside the context and dropped after it.
        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(|e| {
                BootstrapError::ContextCreationFailed(format!(
                    "OpenGL {}.{} core profile unavailable: {e}",
                    gl_version.0, gl_version.1
                ))
            })?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::new())
            .map_err(BootstrapError::context)?;

        // SAFETY: same window ownership argument as above.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(BootstrapError::context)?;

        let context = not_current
            .make_current(&surface)
            .map_err(BootstrapError::context)?;

        if vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("could not enable vsync: {e}");
            }
        }

        // SAFETY: the context was made current on this thread just above.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name).cast())
        };

        let size = window.inner_size();
        log::info!(
            "GL context ready: {} | {}x{} px",
            describe_driver(&gl),
            size.width,
            size.height
        );

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    /// GL entry points for this context.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Present for Gpu {
    fn present(&self) -> Result<(), PresentError> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| PresentError(e.to_string()))
    }
}

/// WGL needs the native window before a display can be created, so the
/// window comes first and the config is matched against it.
#[cfg(windows)]
fn open_window(
    event_loop: &ActiveEventLoop,
    attributes: WindowAttributes,
) -> Result<(Window, Config), BootstrapError> {
    let window = event_loop
        .create_window(attributes)
        .map_err(BootstrapError::context)?;
    let raw_window_handle = window
        .window_handle()
        .map_err(BootstrapError::context)?
        .as_raw();

    let display = create_display(
        event_loop,
        DisplayApiPreference::WglThenEgl(Some(raw_window_handle)),
    )?;
    let template = ConfigTemplateBuilder::new()
        .compatible_with_native_window(raw_window_handle)
        .build();
    let config = find_config(&display, template)?;

    Ok((window, config))
}

/// The config is picked first; the window is then created with the config's
/// native visual.
#[cfg(not(windows))]
fn open_window(
    event_loop: &ActiveEventLoop,
    attributes: WindowAttributes,
) -> Result<(Window, Config), BootstrapError> {
    let display = create_display(event_loop, display_preference())?;
    let config = find_config(&display, ConfigTemplateBuilder::new().build())?;

    let window = glutin_winit::finalize_window(event_loop, attributes, &config)
        .map_err(BootstrapError::context)?;

    Ok((window, config))
}

#[cfg(target_os = "macos")]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(target_os = "android")]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::GlxThenEgl(Box::new(winit::platform::x11::register_xlib_error_hook))
}

fn create_display(
    event_loop: &ActiveEventLoop,
    preference: DisplayApiPreference,
) -> Result<Display, BootstrapError> {
    let raw_display_handle = event_loop
        .display_handle()
        .map_err(BootstrapError::context)?
        .as_raw();

    // SAFETY: the display handle comes from the running event loop, which
    // outlives every GL object created from this display.
    unsafe { Display::new(raw_display_handle, preference) }.map_err(BootstrapError::context)
}

fn find_config(display: &Display, template: ConfigTemplate) -> Result<Config, BootstrapError> {
    // SAFETY: a native window referenced by the template is alive for the
    // whole lookup.
    let configs = unsafe { display.find_configs(template) }.map_err(BootstrapError::context)?;
    pick_config(configs)
}

/// Prefers a plain single-sampled config; nothing here needs MSAA.
///
/// The display may legitimately report zero matches, which is a startup failure.
pub(crate) fn pick_config(
    configs: impl Iterator<Item = Config>,
) -> Result<Config, BootstrapError> {
    configs.min_by_key(|c| c.num_samples()).ok_or_else(|| {
        BootstrapError::ContextCreationFailed("no GL config matches the template".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_list_is_context_creation_failure() {
        let Err(err) = pick_config(std::iter::empty()) else {
            panic!("an empty config list must not yield a config");
        };
        assert!(matches!(
            err,
            BootstrapError::ContextCreationFailed(ref msg) if msg == "no GL config matches the template"
        ));
        assert_eq!(
            err.to_string(),
            "failed to create GL context: no GL config matches the template"
        );
    }
}
