/*!
Window creation and the event loop.

The window and its OpenGL context are created when the event loop delivers `Resumed`, and
destroyed with all the GPU resources on `Suspended`. On desktop platforms `Resumed` is delivered
once at startup.

*/

use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;

use glium::{Display, IncompatibleOpenGl, Surface, SwapBuffersError};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{EventLoopBuilder, EventLoopWindowTarget};
use winit::window::WindowBuilder;

use crate::animation::FrameClock;
use crate::camera::Camera;
use crate::config::Config;
use crate::input;
use crate::scene::{FrameState, Scene, SceneCreationError};
use crate::timer::RedrawTimer;

/// Error that can happen while opening the window.
#[derive(Debug)]
pub enum DisplayCreationError {
    /// The window or the GL configuration couldn't be created.
    Window(Box<dyn Error>),

    /// The platform returned a GL configuration without a window.
    NoWindow,

    /// The window has a zero width or height.
    EmptyWindow,

    /// Error while creating the context or the surface.
    Glutin(glutin::error::Error),

    /// The OpenGL context is missing features required by glium.
    IncompatibleOpenGl(IncompatibleOpenGl),

    /// Error while creating the buffers, textures and programs.
    Scene(SceneCreationError),
}

impl fmt::Display for DisplayCreationError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            DisplayCreationError::Window(err) =>
                write!(formatter, "Could not create the window: {}", err),
            DisplayCreationError::NoWindow =>
                formatter.write_str("The platform did not create a window"),
            DisplayCreationError::EmptyWindow =>
                formatter.write_str("The window has no area to draw on"),
            DisplayCreationError::Glutin(err) =>
                write!(formatter, "Could not create the OpenGL context: {}", err),
            DisplayCreationError::IncompatibleOpenGl(err) =>
                write!(formatter, "{}", err),
            DisplayCreationError::Scene(err) =>
                write!(formatter, "{}", err),
        }
    }
}

impl Error for DisplayCreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DisplayCreationError::Glutin(err) => Some(err),
            DisplayCreationError::IncompatibleOpenGl(err) => Some(err),
            DisplayCreationError::Scene(err) => Some(err),
            _ => None,
        }
    }
}

impl From<glutin::error::Error> for DisplayCreationError {
    fn from(err: glutin::error::Error) -> DisplayCreationError {
        DisplayCreationError::Glutin(err)
    }
}

impl From<IncompatibleOpenGl> for DisplayCreationError {
    fn from(err: IncompatibleOpenGl) -> DisplayCreationError {
        DisplayCreationError::IncompatibleOpenGl(err)
    }
}

impl From<SceneCreationError> for DisplayCreationError {
    fn from(err: SceneCreationError) -> DisplayCreationError {
        DisplayCreationError::Scene(err)
    }
}

/// Error that can happen while drawing a frame.
#[derive(Debug)]
pub enum FrameError {
    Draw(glium::DrawError),
    Swap(SwapBuffersError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            FrameError::Draw(err) => write!(formatter, "Error while drawing the scene: {}", err),
            FrameError::Swap(err) => write!(formatter, "Error while swapping buffers: {}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FrameError::Draw(err) => Some(err),
            FrameError::Swap(err) => Some(err),
        }
    }
}

/// Creates a window from `window_builder` together with an OpenGL display drawing on it.
///
/// The configuration is required to have a 24 bits depth buffer. Desktop OpenGL is tried first,
/// then OpenGL ES.
pub fn create_display<T>(
    event_loop: &EventLoopWindowTarget<T>,
    window_builder: WindowBuilder,
) -> Result<(winit::window::Window, Display<WindowSurface>), DisplayCreationError> {
    let config_template_builder = ConfigTemplateBuilder::new().with_depth_size(24);
    let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

    // glutin only calls the picker with at least one configuration
    let (window, gl_config) = display_builder
        .build(event_loop, config_template_builder, |mut configs| {
            configs.next().expect("no OpenGL configuration available")
        })
        .map_err(DisplayCreationError::Window)?;
    let window = window.ok_or(DisplayCreationError::NoWindow)?;

    let raw_window_handle = window.raw_window_handle();
    let context_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));
    let fallback_context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(None))
        .build(Some(raw_window_handle));

    let not_current_gl_context = unsafe {
        match gl_config.display().create_context(&gl_config, &context_attributes) {
            Ok(context) => context,
            Err(err) => {
                log::warn!("desktop OpenGL context unavailable ({}), trying OpenGL ES", err);
                gl_config.display().create_context(&gl_config, &fallback_context_attributes)?
            }
        }
    };

    let (width, height): (u32, u32) = window.inner_size().into();
    let (width, height) = match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(width), Some(height)) => (width, height),
        _ => return Err(DisplayCreationError::EmptyWindow),
    };
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window_handle, width, height);
    let surface = unsafe { gl_config.display().create_window_surface(&gl_config, &attrs)? };
    let current_context = not_current_gl_context.make_current(&surface)?;
    let display = Display::from_context_surface(current_context, surface)?;

    log::info!("OpenGL version: {}", display.get_opengl_version_string());
    log::info!("OpenGL renderer: {}", display.get_opengl_renderer_string());

    Ok((window, display))
}

/// What outlives the window: the camera and the animation clock.
///
/// A suspend/resume cycle destroys the window and every GPU resource, but the camera stays
/// where it was and the animation goes on.
#[derive(Debug, Clone)]
pub struct Session {
    pub camera: Camera,
    clock: FrameClock,
}

impl Session {
    pub fn new(config: &Config) -> Session {
        Session::with_clock(Camera::new(config.camera_speed), FrameClock::start())
    }

    pub fn with_clock(camera: Camera, clock: FrameClock) -> Session {
        Session { camera, clock }
    }

    /// Moves the camera if the key is bound to a movement.
    pub fn handle_key(&mut self, state: ElementState, key: Option<VirtualKeyCode>) {
        if let Some(movement) = input::movement_for(state, key) {
            self.camera.step(movement);
        }
    }

    pub fn frame_state_at(&self, dimensions: (u32, u32), now: Instant) -> FrameState {
        FrameState::new(&self.camera, dimensions, self.clock.millis_at(now))
    }
}

/// A window, its OpenGL display, and what is drawn on it.
pub struct State {
    pub display: Display<WindowSurface>,
    pub window: winit::window::Window,
    pub scene: Scene,
}

impl State {
    pub fn new<T>(event_loop: &EventLoopWindowTarget<T>, config: &Config) -> Result<State, DisplayCreationError> {
        let window_builder = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));
        let (window, display) = create_display(event_loop, window_builder)?;
        let scene = Scene::new(&display, &config.texture_sources())?;

        Ok(State { display, window, scene })
    }

    pub fn draw_frame(&self, session: &Session) -> Result<(), FrameError> {
        let mut target = self.display.draw();
        let frame = session.frame_state_at(target.get_dimensions(), Instant::now());
        let drawn = self.scene.draw(&mut target, &frame);

        // the frame has to be finished even if drawing failed
        target.finish().map_err(FrameError::Swap)?;
        drawn.map_err(FrameError::Draw)
    }

    pub fn resize(&self, new_size: PhysicalSize<u32>) {
        log::debug!("resized to {}x{}", new_size.width, new_size.height);
        self.display.resize(new_size.into());
    }
}

/// Opens the window and runs the event loop until the window is closed.
///
/// Never returns: the process exits with code 1 if the window or a frame fails.
pub fn run(config: Config) -> ! {
    let event_loop = EventLoopBuilder::new().build();
    let mut timer = RedrawTimer::new(config.frame_interval(), Instant::now());
    let mut session = Session::new(&config);
    let mut state: Option<State> = None;

    event_loop.run(move |event, window_target, control_flow| {
        match event {
            Event::NewEvents(_) => {
                if timer.fire(Instant::now()) {
                    if let Some(state) = &state {
                        state.window.request_redraw();
                    }
                }
                control_flow.set_wait_until(timer.deadline());
            },
            Event::Resumed => match State::new(window_target, &config) {
                Ok(new_state) => state = Some(new_state),
                Err(err) => {
                    log::error!("{}", err);
                    control_flow.set_exit_with_code(1);
                },
            },
            // the session survives, only the window and the GPU resources go away
            Event::Suspended => state = None,
            Event::RedrawRequested(_) => {
                if let Some(state) = &state {
                    if let Err(err) = state.draw_frame(&session) {
                        log::error!("{}", err);
                        control_flow.set_exit_with_code(1);
                    }
                }
            },
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::KeyboardInput { input: key, .. } if input::is_exit(key.state, key.virtual_keycode) => {
                    control_flow.set_exit();
                },
                WindowEvent::KeyboardInput { input: key, .. } => session.handle_key(key.state, key.virtual_keycode),
                WindowEvent::Resized(new_size) => {
                    if let Some(state) = &state {
                        state.resize(new_size);
                    }
                },
                _ => (),
            },
            _ => (),
        }
    })
}
