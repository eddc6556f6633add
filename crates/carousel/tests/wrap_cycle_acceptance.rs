//! End-to-end pass over the public API: a full autoplay cycle at desktop
//! width, exercised the way the GUI shell drives the controller.

use carousel::{Carousel, TrackSurface, ITEM_GAP_PX};
use shared::domain::{Direction, TransitionMode};

struct FixedWidthSurface {
    item_width: f32,
    offset: Option<f32>,
    last_mode: Option<TransitionMode>,
}

impl FixedWidthSurface {
    fn new(item_width: f32) -> Self {
        Self {
            item_width,
            offset: None,
            last_mode: None,
        }
    }
}

impl TrackSurface for FixedWidthSurface {
    fn item_width(&self) -> Option<f32> {
        Some(self.item_width)
    }

    fn set_track_offset(&mut self, offset_px: f32, mode: TransitionMode) {
        self.offset = Some(offset_px);
        self.last_mode = Some(mode);
    }
}

#[test]
fn full_cycle_at_desktop_width_returns_to_the_initial_offset() {
    let items: Vec<String> = (0..6).map(|n| format!("card-{n}")).collect();
    // 1100 px viewport -> four items per view -> 4 + 6 + 4 track entries.
    let mut carousel = Carousel::initialize(items, 1100.0);
    let mut surface = FixedWidthSurface::new(180.0);
    let stride = 180.0 + ITEM_GAP_PX;

    assert_eq!(carousel.track_entries().len(), 14);

    carousel.render_offset(&mut surface);
    let initial_offset = surface.offset.expect("rendered");
    assert_eq!(initial_offset, -4.0 * stride);

    for step in 1..=6 {
        let ticket = carousel
            .move_by(Direction::Forward, &mut surface)
            .expect("active carousel");
        assert_eq!(surface.offset, Some(-((step as f32) + 4.0) * stride));
        assert_eq!(surface.last_mode, Some(TransitionMode::Animated));
        carousel.settle(ticket, &mut surface);
    }

    // The sixth settle wrapped: same offset as the initial render, snapped.
    assert_eq!(surface.offset, Some(initial_offset));
    assert_eq!(surface.last_mode, Some(TransitionMode::Snap));
    let snapshot = carousel.snapshot().expect("active carousel");
    assert_eq!(snapshot.logical_index, 0);
    assert!(!snapshot.in_transition);
}
