//! Strafe Sandbox
//!
//! Windowed shell around the sandbox state. Opens a window, feeds winit
//! events through the input router and advances the simulation once per
//! redraw. The window title doubles as the status display.
//!
//! Usage: `sandbox [config.json]`

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use strafe_engine::game::config::{from_physical_key, from_winit_button};
use strafe_engine::game::{AppCommand, InputEvent, InputMode, InputRouter, SandboxState};
use strafe_engine::SandboxConfig;

/// Seconds between window title refreshes
const TITLE_INTERVAL: f32 = 0.25;

struct SandboxApp {
    window: Option<Arc<Window>>,
    state: SandboxState,
    router: InputRouter,
    last_frame: Instant,
    title_timer: f32,
}

impl SandboxApp {
    fn new(config: SandboxConfig) -> Self {
        Self {
            window: None,
            state: SandboxState::new(config),
            router: InputRouter::new(),
            last_frame: Instant::now(),
            title_timer: 0.0,
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        if let Some(command) = self.router.handle_event(&mut self.state, event) {
            self.apply_command(event_loop, command);
        }
    }

    fn apply_command(&self, event_loop: &ActiveEventLoop, command: AppCommand) {
        match command {
            AppCommand::Exit => event_loop.exit(),
            AppCommand::CaptureCursor => {
                if let Some(window) = &self.window {
                    capture_cursor(window);
                }
            }
            AppCommand::ReleaseCursor => {
                if let Some(window) = &self.window {
                    release_cursor(window);
                }
            }
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.state.tick(dt);

        self.title_timer += dt;
        if self.title_timer >= TITLE_INTERVAL {
            self.title_timer = 0.0;
            if let Some(window) = &self.window {
                window.set_title(&self.status_line());
            }
        }
    }

    fn status_line(&self) -> String {
        let controller = self.state.controller();
        let position = controller.position();
        let mode = match self.router.mode() {
            InputMode::Play if controller.is_fly_mode() => "Fly",
            InputMode::Play => "Play",
            InputMode::Editor => "Editor",
        };

        let mut line = format!(
            "Strafe Sandbox [{mode}] pos ({:.1}, {:.1}, {:.1}) speed {:.1}",
            position.x,
            position.y,
            position.z,
            controller.horizontal_speed(),
        );

        if self.router.mode() == InputMode::Editor {
            let editor = self.state.editor();
            line.push_str(&format!(" | objects {}", editor.len()));
            if let Some(item) = editor.selected_inventory_item() {
                line.push_str(&format!(" | placing {}", item.name()));
            }
            if let (Some(index), Some(object)) = (editor.selected_index(), editor.selected_object()) {
                line.push_str(&format!(" | selected #{index} {}", object.object_type()));
            }
        }
        line
    }
}

fn capture_cursor(window: &Window) {
    if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
        if let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined) {
            log::warn!("Cursor grab failed: {err}");
        }
    }
    window.set_cursor_visible(false);
}

fn release_cursor(window: &Window) {
    if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
        log::warn!("Cursor release failed: {err}");
    }
    window.set_cursor_visible(true);
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("Strafe Sandbox")
            .with_inner_size(PhysicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                let size = window.inner_size();
                self.router.handle_event(
                    &mut self.state,
                    InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    },
                );
                capture_cursor(&window);
                self.window = Some(window);
                self.last_frame = Instant::now();
            }
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let key = from_physical_key(event.physical_key);
                let pressed = event.state == ElementState::Pressed;
                self.dispatch(event_loop, InputEvent::Key { key, pressed });
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let button = from_winit_button(button);
                let pressed = state == ElementState::Pressed;
                self.dispatch(event_loop, InputEvent::MouseButton { button, pressed });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
            }

            WindowEvent::Resized(size) => {
                self.dispatch(
                    event_loop,
                    InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    },
                );
            }

            WindowEvent::Focused(false) => self.dispatch(event_loop, InputEvent::FocusLost),

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }
    }

    fn device_event(&mut self, event_loop: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.dispatch(
                event_loop,
                InputEvent::MouseMotion {
                    dx: delta.0 as f32,
                    dy: delta.1 as f32,
                },
            );
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(&path)?,
        None => SandboxConfig::default(),
    };

    log::info!("Controls:");
    log::info!("  WASD: Move, Shift: Run, Space: Jump, Mouse: Look");
    log::info!("  Shift+G: Toggle fly mode (Space/Shift: up/down)");
    log::info!("  Tab/M: Toggle editor mode, ESC: Exit");
    log::info!("  Editor: 1-6 pick item, P place, X cancel, Delete remove");
    log::info!("  Editor: click select, arrows/PageUp/PageDown move, [ ] resize, , . cycle, G grid snap");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SandboxApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
