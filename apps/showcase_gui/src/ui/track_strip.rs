//! The carousel strip: holds the measured card width, draws the clipped
//! track, and eases offset changes over the fixed transition duration.

use std::time::Instant;

use carousel::{TrackEntry, TrackSurface, ITEM_GAP_PX, TRANSITION_DURATION};
use egui::{pos2, vec2, Align2, FontId, Rect};
use shared::domain::TransitionMode;

use crate::config::ShowcaseItem;
use crate::ui::theme;

pub const CARD_HEIGHT: f32 = 160.0;

struct Animation {
    from: f32,
    started: Instant,
}

pub struct TrackStrip {
    measured_item_width: Option<f32>,
    target_offset: f32,
    animation: Option<Animation>,
}

impl TrackStrip {
    pub fn new() -> Self {
        Self {
            measured_item_width: None,
            target_offset: 0.0,
            animation: None,
        }
    }

    /// Card width that fits `items_per_view` cards plus the gaps between
    /// them into `avail_width`.
    pub fn card_width(avail_width: f32, items_per_view: usize) -> f32 {
        let items = items_per_view.max(1) as f32;
        ((avail_width - ITEM_GAP_PX * (items - 1.0)) / items).max(1.0)
    }

    /// Records this frame's card width; the controller reads it back as the
    /// representative item measurement.
    pub fn set_measured_item_width(&mut self, width: f32) {
        self.measured_item_width = Some(width);
    }

    pub fn current_offset(&self, now: Instant) -> f32 {
        let Some(animation) = &self.animation else {
            return self.target_offset;
        };
        let elapsed = now.saturating_duration_since(animation.started);
        if elapsed >= TRANSITION_DURATION {
            return self.target_offset;
        }
        let t = elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32();
        animation.from + (self.target_offset - animation.from) * ease_in_out(t)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| {
                now.saturating_duration_since(animation.started) < TRANSITION_DURATION
            })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, entries: &[TrackEntry<ShowcaseItem>], now: Instant) {
        let Some(card_width) = self.measured_item_width else {
            return;
        };

        let (strip_rect, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), CARD_HEIGHT),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(strip_rect);
        let offset = self.current_offset(now);
        let stride = card_width + ITEM_GAP_PX;

        for (position, entry) in entries.iter().enumerate() {
            let x = strip_rect.left() + offset + position as f32 * stride;
            if x + card_width < strip_rect.left() || x > strip_rect.right() {
                continue;
            }
            let card = Rect::from_min_size(pos2(x, strip_rect.top()), vec2(card_width, CARD_HEIGHT));
            painter.rect_filled(card, 12.0, theme::CARD_BACKGROUND);
            painter.rect_stroke(card, 12.0, egui::Stroke::new(1.0, theme::CARD_STROKE));
            painter.text(
                card.center() - vec2(0.0, 20.0),
                Align2::CENTER_CENTER,
                &entry.item.glyph,
                FontId::proportional(44.0),
                egui::Color32::WHITE,
            );
            painter.text(
                card.center() + vec2(0.0, 36.0),
                Align2::CENTER_CENTER,
                &entry.item.label,
                FontId::proportional(16.0),
                theme::LABEL_TEXT,
            );
        }
    }
}

impl TrackSurface for TrackStrip {
    fn item_width(&self) -> Option<f32> {
        self.measured_item_width
    }

    fn set_track_offset(&mut self, offset_px: f32, mode: TransitionMode) {
        match mode {
            TransitionMode::Animated => {
                let now = Instant::now();
                self.animation = Some(Animation {
                    from: self.current_offset(now),
                    started: now,
                });
            }
            TransitionMode::Snap => {
                self.animation = None;
            }
        }
        self.target_offset = offset_px;
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
