//! Application state and main loop

use anyhow::Result;
use std::time::Duration;
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::config::GameConfig;
use crate::game::{GameController, GamePhase, ItemSpawner};
use crate::render::Renderer;
use crate::ui::UiState;

const WINDOW_TITLE: &str = "EcoSort - Waste Sorting Game";

pub struct App {
    // Declared before the window so the surface is dropped first
    renderer: Renderer,
    window: Window,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    ui_state: UiState,
    controller: GameController,
    config: GameConfig,
    last_frame: Instant,
}

impl App {
    pub async fn new(config: GameConfig) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let web_window =
                web_sys::window().ok_or_else(|| anyhow::anyhow!("Failed to get web window"))?;
            let document = web_window
                .document()
                .ok_or_else(|| anyhow::anyhow!("Failed to get document"))?;
            let canvas = document
                .get_element_by_id("canvas")
                .ok_or_else(|| anyhow::anyhow!("Failed to find canvas element with id='canvas'"))?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| anyhow::anyhow!("Element 'canvas' is not an HTMLCanvasElement"))?;

            log::info!("Found canvas element, binding to window");

            WindowAttributes::default()
                .with_title(WINDOW_TITLE)
                .with_canvas(Some(canvas))
        };

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.ui.window_width,
                config.ui.window_height,
            ));

        // Use deprecated create_window to avoid async complexity for now
        #[allow(deprecated)]
        let window = event_loop.create_window(window_attrs)?;

        let renderer = Renderer::new(&window).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None, // max_texture_side
        );

        let spawner = match config.debug.seed {
            Some(seed) => ItemSpawner::new(seed),
            None => ItemSpawner::from_entropy(),
        };
        let controller = GameController::new(config.rules.clone(), spawner);

        let app = Self {
            renderer,
            window,
            egui_ctx,
            egui_state,
            ui_state: UiState::new(),
            controller,
            config,
            last_frame: Instant::now(),
        };

        Ok((app, event_loop))
    }

    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    fn handle_redraw(&mut self) {
        let now = Instant::now();
        let dt: Duration = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.controller.update(dt);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.ui_state.render(ctx, &mut self.controller, &self.config);
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        if let Err(e) = self.renderer.render(
            &self.egui_ctx,
            full_output.textures_delta,
            full_output.shapes,
            full_output.pixels_per_point,
        ) {
            log::error!("Render error: {e}");
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::NumpadEnter => match self.controller.phase() {
                GamePhase::Waiting => self.controller.start(),
                GamePhase::Ended => self.controller.play_again(),
                _ => {}
            },
            KeyCode::Space | KeyCode::KeyP => self.controller.toggle_pause(),
            KeyCode::KeyR => self.controller.reset(),
            KeyCode::Escape => self.controller.dismiss_tip(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer are already initialized in new()
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle events first
        let _ = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, final score {}", self.controller.session().score);
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if self.egui_ctx.wants_keyboard_input() {
                    return;
                }
                if key_event.state != ElementState::Pressed || key_event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    log::debug!("Keyboard: {:?} pressed", code);
                    self.handle_key(code);
                }
            }
            WindowEvent::RedrawRequested => {
                self.handle_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }
}
