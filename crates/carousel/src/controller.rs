//! Carousel state machine: move, settle, and resize transitions over an
//! explicit state value owned by the host.

use serde::Serialize;
use shared::domain::{Direction, TransitionMode, ViewportClass};
use tracing::debug;

use crate::track::{Track, TrackEntry};
use crate::ITEM_GAP_PX;

/// Render target for the track. The host measures a representative item and
/// applies horizontal translations; everything else stays in the controller.
pub trait TrackSurface {
    /// Width of one rendered item, when the track has been laid out.
    fn item_width(&self) -> Option<f32>;
    fn set_track_offset(&mut self, offset_px: f32, mode: TransitionMode);
}

/// Deadline handle for one transition. Delivering it back after the
/// transition duration triggers the wrap correction; a ticket from a
/// superseded transition is dropped at settle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

/// Diagnostic view of controller state for logs, tests, and the headless
/// simulator. Not a control surface: the index cannot be set from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub logical_index: i64,
    pub items_per_view: usize,
    pub total_items: usize,
    pub in_transition: bool,
}

#[derive(Debug, Clone)]
struct CarouselState {
    /// May transiently leave [0, total_items) between a move and its settle.
    logical_index: i64,
    items_per_view: usize,
    total_items: usize,
}

#[derive(Debug)]
pub struct ActiveCarousel<T> {
    state: CarouselState,
    track: Track<T>,
    generation: u64,
    in_transition: bool,
}

#[derive(Debug)]
pub enum Carousel<T> {
    /// Initialization without items yields a permanently inert carousel;
    /// every operation on it is a silent no-op.
    Disabled,
    Active(ActiveCarousel<T>),
}

impl<T: Clone> Carousel<T> {
    /// Builds the controller, or a disabled one when no items exist. Clone
    /// blocks are sized by the items-per-view at construction time and are
    /// never rebuilt afterwards, even when a resize changes items-per-view.
    pub fn initialize(items: Vec<T>, viewport_width: f32) -> Self {
        if items.is_empty() {
            debug!("carousel disabled: no items to display");
            return Self::Disabled;
        }

        let items_per_view = ViewportClass::from_width(viewport_width).items_per_view();
        let total_items = items.len();
        let track = Track::with_boundary_clones(items, items_per_view);
        Self::Active(ActiveCarousel {
            state: CarouselState {
                logical_index: 0,
                items_per_view,
                total_items,
            },
            track,
            generation: 0,
            in_transition: false,
        })
    }
}

impl<T> Carousel<T> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Rendered track entries, clones included. Empty when disabled.
    pub fn track_entries(&self) -> &[TrackEntry<T>] {
        match self {
            Self::Disabled => &[],
            Self::Active(carousel) => carousel.track.entries(),
        }
    }

    pub fn items_per_view(&self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Active(carousel) => carousel.state.items_per_view,
        }
    }

    /// Steps the logical index one item and renders the new offset with
    /// animation. Returns the settle ticket the caller must deliver back
    /// after the transition duration; `None` when disabled.
    pub fn move_by(
        &mut self,
        direction: Direction,
        surface: &mut dyn TrackSurface,
    ) -> Option<SettleTicket> {
        let Self::Active(carousel) = self else {
            return None;
        };

        carousel.state.logical_index += direction.step();
        carousel.generation += 1;
        carousel.in_transition = true;
        carousel.render(surface, TransitionMode::Animated);
        Some(SettleTicket {
            generation: carousel.generation,
        })
    }

    /// Post-transition correction. Wraps an out-of-range index back into
    /// [0, total) and snaps the corrected offset without animation to hide
    /// the jump across the clone boundary; an in-range index needs no
    /// correction render. Stale tickets are dropped so a rapid follow-up
    /// move keeps sole ownership of the index.
    pub fn settle(&mut self, ticket: SettleTicket, surface: &mut dyn TrackSurface) {
        let Self::Active(carousel) = self else {
            return;
        };

        if ticket.generation != carousel.generation {
            debug!(
                ticket = ticket.generation,
                current = carousel.generation,
                "dropping settle ticket from superseded transition"
            );
            return;
        }

        carousel.in_transition = false;
        let total = carousel.state.total_items as i64;
        if carousel.state.logical_index >= total {
            carousel.state.logical_index = 0;
            carousel.render(surface, TransitionMode::Snap);
        } else if carousel.state.logical_index < 0 {
            carousel.state.logical_index = total - 1;
            carousel.render(surface, TransitionMode::Snap);
        }
    }

    /// Viewport width changed: recompute items-per-view and re-render the
    /// offset for the current index. Clone blocks stay as built, so the
    /// boundary padding can drift from the live items-per-view.
    pub fn viewport_resized(&mut self, width: f32, surface: &mut dyn TrackSurface) {
        let Self::Active(carousel) = self else {
            return;
        };

        carousel.state.items_per_view = ViewportClass::from_width(width).items_per_view();
        carousel.render(surface, TransitionMode::Snap);
    }

    /// Re-applies the offset for the current state without mutating it.
    pub fn render_offset(&self, surface: &mut dyn TrackSurface) {
        if let Self::Active(carousel) = self {
            carousel.render(surface, TransitionMode::Snap);
        }
    }

    pub fn snapshot(&self) -> Option<CarouselSnapshot> {
        match self {
            Self::Disabled => None,
            Self::Active(carousel) => Some(CarouselSnapshot {
                logical_index: carousel.state.logical_index,
                items_per_view: carousel.state.items_per_view,
                total_items: carousel.state.total_items,
                in_transition: carousel.in_transition,
            }),
        }
    }
}

impl<T> ActiveCarousel<T> {
    /// The visual window is always shifted right past the leading clone
    /// block: offset = -(logical_index + items_per_view) * stride.
    fn render(&self, surface: &mut dyn TrackSurface, mode: TransitionMode) {
        let Some(item_width) = surface.item_width() else {
            return;
        };
        let stride = item_width + ITEM_GAP_PX;
        let offset =
            -((self.state.logical_index + self.state.items_per_view as i64) as f32) * stride;
        surface.set_track_offset(offset, mode);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
