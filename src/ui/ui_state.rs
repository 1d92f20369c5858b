//! Central UI state management

use web_time::Instant;

use super::bins::BinRow;
use super::hud::Hud;
use super::playfield::Playfield;
use super::screens::{render_phase_screen, ScreenAction};
use super::theme::GameColors;
use super::tip_dialog::render_tip_dialog;
use crate::config::GameConfig;
use crate::game::{GameController, GameSnapshot, ItemId, PointerEvent, QueuedPointer, ScreenRect};

/// What the player asked for during one frame
#[derive(Debug, Default)]
struct UiActions {
    screen: ScreenAction,
    pause: bool,
    reset: bool,
    dismiss_tip: bool,
    begin_drag: Option<ItemId>,
}

/// Central UI state container
pub struct UiState {
    pub hud: Hud,
    pub playfield: Playfield,
    pub bins: BinRow,
    pub colors: GameColors,

    /// Toast notification (message, shown_at)
    pub toast_message: Option<(String, Instant)>,

    /// Pointer events gathered from egui, drained into the controller
    pointer: QueuedPointer,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            hud: Hud::new(),
            playfield: Playfield::new(),
            bins: BinRow::new(),
            colors: GameColors::default(),
            toast_message: None,
            pointer: QueuedPointer::new(),
        }
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// Draw the frame from a snapshot, then feed the player's input back into the controller
    pub fn render(&mut self, ctx: &egui::Context, controller: &mut GameController, config: &GameConfig) {
        let snapshot = controller.snapshot();
        let mut actions = UiActions::default();

        let bin_rects = self.render_board(ctx, &snapshot, config, &mut actions);

        self.playfield.render_drag_ghost(ctx, &snapshot, &self.colors);

        if let Some(category) = snapshot.tip {
            actions.dismiss_tip = render_tip_dialog(ctx, category, &self.colors);
        }

        actions.screen = render_phase_screen(ctx, &snapshot.session, &self.colors);

        self.render_toast(ctx, config.ui.toast_secs);

        // Bins must be laid out before pointer events are hit-tested
        for (category, rect) in bin_rects {
            controller.set_bin_rect(category, to_screen_rect(rect));
        }

        self.apply_actions(ctx, controller, actions);

        for notification in controller.drain_notifications() {
            if let Some(text) = notification.toast_text() {
                self.show_toast(&text);
            }
        }
    }

    fn render_board(
        &mut self,
        ctx: &egui::Context,
        snapshot: &GameSnapshot,
        config: &GameConfig,
        actions: &mut UiActions,
    ) -> Vec<(crate::game::BinCategory, egui::Rect)> {
        let mut rects = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.colors.sky).inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.heading(egui::RichText::new("♻ EcoSort").size(28.0).strong().color(self.colors.correct));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let playing = snapshot.session.phase == crate::game::GamePhase::Playing;
                            if ui.add_enabled(playing, egui::Button::new("↺ Reset")).clicked() {
                                actions.reset = true;
                            }
                            if ui.add_enabled(playing, egui::Button::new("⏸ Pause")).clicked() {
                                actions.pause = true;
                            }
                        });
                    });
                    ui.add_space(8.0);

                    self.hud.render(ui, &snapshot.session, config.rules.initial_time_secs, &self.colors);
                    ui.add_space(12.0);

                    actions.begin_drag = self.playfield.render(ui, snapshot, &config.rules.play_area, &self.colors);
                    ui.add_space(16.0);

                    rects = self.bins.render(ui, snapshot, &self.colors);
                });
            });

        rects
    }

    fn apply_actions(&mut self, ctx: &egui::Context, controller: &mut GameController, actions: UiActions) {
        if actions.dismiss_tip {
            controller.dismiss_tip();
        }
        if actions.pause {
            controller.pause();
        }
        if actions.reset {
            controller.reset();
        }

        let screen = actions.screen;
        if screen.start {
            controller.start();
        }
        if screen.resume {
            controller.resume();
        }
        if screen.reset {
            controller.reset();
        }
        if screen.play_again {
            controller.play_again();
        }

        if let Some(item) = actions.begin_drag {
            controller.begin_drag(item);
        }

        if controller.drag().is_none() {
            return;
        }

        let (latest, released) = ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_released()));
        if let Some(pos) = latest {
            self.pointer.push(PointerEvent::Moved(to_vec2(pos)));
        }
        if released {
            self.pointer.push(PointerEvent::Released);
        }
        controller.pump_input(&mut self.pointer);
    }

    fn render_toast(&mut self, ctx: &egui::Context, toast_secs: f32) {
        let Some((msg, shown_at)) = &self.toast_message else {
            return;
        };
        if shown_at.elapsed().as_secs_f32() >= toast_secs {
            self.toast_message = None;
            return;
        }

        egui::Area::new("toast_notification".into())
            .anchor(egui::Align2::CENTER_TOP, [0.0, 70.0])
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_black_alpha(190))
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).size(18.0).color(egui::Color32::WHITE));
                    });
            });

        // Keep repainting so the toast disappears on time
        ctx.request_repaint();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn to_vec2(pos: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x, pos.y)
}

fn to_screen_rect(rect: egui::Rect) -> ScreenRect {
    ScreenRect::new(to_vec2(rect.min), to_vec2(rect.max))
}
