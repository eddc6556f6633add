//! App shell: drains timer events, routes input to the carousel, and lays
//! out the hero title, track strip, and status footer.

use std::time::{Duration, Instant};

use carousel::{Carousel, Typewriter};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Direction, ViewportClass};

use crate::config::{Settings, ShowcaseItem};
use crate::controller::events::{OverlayHost, UiEvent};
use crate::controller::orchestration::dispatch_timer_command;
use crate::timer_bridge::commands::TimerCommand;
use crate::ui::theme;
use crate::ui::track_strip::TrackStrip;

pub struct ShowcaseApp {
    cmd_tx: Sender<TimerCommand>,
    ui_rx: Receiver<UiEvent>,

    carousel: Carousel<ShowcaseItem>,
    strip: TrackStrip,
    typewriter: Typewriter,

    status: String,
    about_open: bool,
    last_viewport_width: Option<f32>,
    theme_applied: bool,
}

impl ShowcaseApp {
    pub fn new(settings: Settings, cmd_tx: Sender<TimerCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        // The carousel is built against the configured window width; the
        // first frame's real viewport width follows as a resize event.
        let carousel = Carousel::initialize(settings.items.clone(), settings.window_width);
        Self {
            cmd_tx,
            ui_rx,
            carousel,
            strip: TrackStrip::new(),
            typewriter: Typewriter::new(settings.hero_title),
            status: "Autoplay every 4 s · ←/→ to step · Esc closes overlays".to_string(),
            about_open: false,
            last_viewport_width: None,
            theme_applied: false,
        }
    }

    /// Single intake for every carousel mutation: timer ticks, settle
    /// deadlines, and the typewriter cadence, applied in arrival order.
    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::AutoplayTick => self.request_move(Direction::Forward),
                UiEvent::SettleElapsed { ticket } => {
                    self.carousel.settle(ticket, &mut self.strip);
                }
                UiEvent::TypewriterStarted => self.typewriter.start(),
                UiEvent::TypewriterTick => {
                    self.typewriter.advance();
                }
            }
        }
    }

    fn request_move(&mut self, direction: Direction) {
        if let Some(ticket) = self.carousel.move_by(direction, &mut self.strip) {
            dispatch_timer_command(
                &self.cmd_tx,
                TimerCommand::ScheduleSettle { ticket },
                &mut self.status,
            );
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.request_move(Direction::Back);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.request_move(Direction::Forward);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.hide_active_overlay();
        }
    }

    fn show_hero_title(&self, ui: &mut egui::Ui) {
        let mut title = self.typewriter.visible().to_string();
        if self.typewriter.has_started() && !self.typewriter.is_complete() {
            title.push('▌');
        }
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(30.0)
                    .strong()
                    .color(theme::ACCENT),
            );
        });
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }
        egui::Window::new("About")
            .open(&mut self.about_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("A showcase shell with an infinite tech carousel.");
                ui.small("Autoplay advances every 4 seconds; arrow keys step manually.");
            });
    }
}

impl OverlayHost for ShowcaseApp {
    fn hide_active_overlay(&mut self) -> bool {
        let was_open = self.about_open;
        self.about_open = false;
        was_open
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
        let now = Instant::now();

        self.process_ui_events();
        self.handle_keyboard(ctx);

        let viewport_width = ctx.screen_rect().width();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(28.0);
            self.show_hero_title(ui);
            ui.add_space(28.0);

            // Measure the representative card before any render call so the
            // controller sees this frame's layout. The breakpoints mirror
            // the controller's items-per-view classes.
            let layout_items = ViewportClass::from_width(viewport_width).items_per_view();
            let card_width = TrackStrip::card_width(ui.available_width(), layout_items);
            self.strip.set_measured_item_width(card_width);

            if self.last_viewport_width != Some(viewport_width) {
                self.last_viewport_width = Some(viewport_width);
                self.carousel.viewport_resized(viewport_width, &mut self.strip);
            }

            if self.carousel.is_disabled() {
                ui.vertical_centered(|ui| {
                    ui.weak("No showcase items configured.");
                });
            } else {
                self.strip.show(ui, self.carousel.track_entries(), now);
            }

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.request_move(Direction::Back);
                }
                if ui.button("▶").clicked() {
                    self.request_move(Direction::Forward);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("About").clicked() {
                        self.about_open = true;
                    }
                });
            });
        });

        self.show_about_window(ctx);

        if self.strip.is_animating(now) || !self.typewriter.is_complete() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    fn app_with_channels() -> (
        ShowcaseApp,
        Sender<UiEvent>,
        Receiver<TimerCommand>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        (ShowcaseApp::new(Settings::default(), cmd_tx, ui_rx), ui_tx, cmd_rx)
    }

    #[test]
    fn autoplay_tick_schedules_a_settle_deadline() {
        let (mut app, ui_tx, cmd_rx) = app_with_channels();
        ui_tx.send(UiEvent::AutoplayTick).expect("send");

        app.process_ui_events();

        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(TimerCommand::ScheduleSettle { .. })
        ));
    }

    #[test]
    fn typewriter_events_start_and_advance_the_reveal() {
        let (mut app, ui_tx, _cmd_rx) = app_with_channels();
        ui_tx.send(UiEvent::TypewriterTick).expect("send");
        app.process_ui_events();
        assert_eq!(app.typewriter.visible(), "", "inert before start");

        ui_tx.send(UiEvent::TypewriterStarted).expect("send");
        ui_tx.send(UiEvent::TypewriterTick).expect("send");
        app.process_ui_events();
        assert_eq!(app.typewriter.visible().chars().count(), 1);
    }

    #[test]
    fn escape_capability_reports_whether_an_overlay_was_open() {
        let (mut app, _ui_tx, _cmd_rx) = app_with_channels();
        assert!(!app.hide_active_overlay());

        app.about_open = true;
        assert!(app.hide_active_overlay());
        assert!(!app.about_open);
    }
}
