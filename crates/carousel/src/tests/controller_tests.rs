use super::*;
use shared::domain::Direction;

#[derive(Debug, Default)]
struct RecordingSurface {
    item_width: Option<f32>,
    calls: Vec<(f32, TransitionMode)>,
}

impl RecordingSurface {
    fn with_item_width(width: f32) -> Self {
        Self {
            item_width: Some(width),
            calls: Vec::new(),
        }
    }
}

impl TrackSurface for RecordingSurface {
    fn item_width(&self) -> Option<f32> {
        self.item_width
    }

    fn set_track_offset(&mut self, offset_px: f32, mode: TransitionMode) {
        self.calls.push((offset_px, mode));
    }
}

fn items(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("item-{n}")).collect()
}

#[test]
fn six_forward_moves_wrap_back_to_zero_exactly_once() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    // 500 px viewport -> one item per view.
    let mut carousel = Carousel::initialize(items(6), 500.0);

    let mut settled_indices = Vec::new();
    for _ in 0..6 {
        let ticket = carousel.move_by(Direction::Forward, &mut surface).expect("active");
        carousel.settle(ticket, &mut surface);
        settled_indices.push(carousel.snapshot().expect("active").logical_index);
    }

    assert_eq!(settled_indices, vec![1, 2, 3, 4, 5, 0]);

    let snaps = surface
        .calls
        .iter()
        .filter(|(_, mode)| *mode == TransitionMode::Snap)
        .count();
    assert_eq!(snaps, 1, "exactly one wrap correction per full cycle");
}

#[test]
fn backward_move_from_zero_settles_on_the_last_item() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let mut carousel = Carousel::initialize(items(6), 500.0);

    let ticket = carousel.move_by(Direction::Back, &mut surface).expect("active");
    assert_eq!(carousel.snapshot().expect("active").logical_index, -1);
    // -(-1 + 1) * stride renders the leading clone adjacent to the originals.
    assert_eq!(surface.calls.last(), Some(&(0.0, TransitionMode::Animated)));

    carousel.settle(ticket, &mut surface);
    let snapshot = carousel.snapshot().expect("active");
    assert_eq!(snapshot.logical_index, 5);
    assert!(!snapshot.in_transition);
    assert_eq!(
        surface.calls.last(),
        Some(&(-(5.0 + 1.0) * 120.0, TransitionMode::Snap))
    );
}

#[test]
fn settle_without_wrap_performs_no_correction_render() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    // 900 px viewport -> three items per view, nine items.
    let mut carousel = Carousel::initialize(items(9), 900.0);

    carousel.render_offset(&mut surface);
    assert_eq!(surface.calls.last(), Some(&(-360.0, TransitionMode::Snap)));

    let ticket = carousel.move_by(Direction::Forward, &mut surface).expect("active");
    assert_eq!(surface.calls.last(), Some(&(-480.0, TransitionMode::Animated)));

    let renders_before_settle = surface.calls.len();
    carousel.settle(ticket, &mut surface);
    assert_eq!(surface.calls.len(), renders_before_settle);
    assert_eq!(carousel.snapshot().expect("active").logical_index, 1);
}

#[test]
fn render_offset_is_idempotent_for_unchanged_state() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let carousel = Carousel::initialize(items(9), 900.0);

    carousel.render_offset(&mut surface);
    carousel.render_offset(&mut surface);

    assert_eq!(surface.calls.len(), 2);
    assert_eq!(surface.calls[0], surface.calls[1]);
}

#[test]
fn stale_settle_ticket_from_superseded_transition_is_dropped() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let mut carousel = Carousel::initialize(items(6), 500.0);

    let first = carousel.move_by(Direction::Forward, &mut surface).expect("active");
    let second = carousel.move_by(Direction::Forward, &mut surface).expect("active");

    let renders = surface.calls.len();
    carousel.settle(first, &mut surface);
    assert_eq!(surface.calls.len(), renders, "stale ticket must not render");
    assert_eq!(carousel.snapshot().expect("active").logical_index, 2);
    assert!(carousel.snapshot().expect("active").in_transition);

    carousel.settle(second, &mut surface);
    let snapshot = carousel.snapshot().expect("active");
    assert_eq!(snapshot.logical_index, 2);
    assert!(!snapshot.in_transition);
}

#[test]
fn rapid_moves_past_the_end_settle_back_to_zero() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let mut carousel = Carousel::initialize(items(3), 500.0);

    let mut ticket = None;
    for _ in 0..4 {
        ticket = carousel.move_by(Direction::Forward, &mut surface);
    }
    assert_eq!(carousel.snapshot().expect("active").logical_index, 4);

    carousel.settle(ticket.expect("active"), &mut surface);
    assert_eq!(carousel.snapshot().expect("active").logical_index, 0);
}

#[test]
fn disabled_carousel_is_permanently_inert() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let mut carousel: Carousel<String> = Carousel::initialize(Vec::new(), 900.0);

    assert!(carousel.is_disabled());
    assert!(carousel.move_by(Direction::Forward, &mut surface).is_none());
    carousel.viewport_resized(1200.0, &mut surface);
    carousel.settle(SettleTicket { generation: 1 }, &mut surface);
    carousel.render_offset(&mut surface);

    assert!(surface.calls.is_empty());
    assert!(carousel.snapshot().is_none());
    assert!(carousel.track_entries().is_empty());
}

#[test]
fn render_is_skipped_until_an_item_width_is_measurable() {
    let mut surface = RecordingSurface::default();
    let mut carousel = Carousel::initialize(items(6), 900.0);

    let ticket = carousel.move_by(Direction::Forward, &mut surface).expect("active");
    carousel.settle(ticket, &mut surface);
    assert!(surface.calls.is_empty());

    // Once measurable, the next render applies the already-advanced index.
    surface.item_width = Some(100.0);
    carousel.render_offset(&mut surface);
    assert_eq!(surface.calls.last(), Some(&(-480.0, TransitionMode::Snap)));
}

#[test]
fn resize_recomputes_items_per_view_but_keeps_index_and_clones() {
    let mut surface = RecordingSurface::with_item_width(100.0);
    let mut carousel = Carousel::initialize(items(9), 900.0);
    let entries_at_init = carousel.track_entries().len();

    carousel.viewport_resized(1200.0, &mut surface);

    let snapshot = carousel.snapshot().expect("active");
    assert_eq!(snapshot.items_per_view, 4);
    assert_eq!(snapshot.logical_index, 0);
    assert_eq!(surface.calls.last(), Some(&(-480.0, TransitionMode::Snap)));
    // Clone blocks are sized at construction and never rebuilt.
    assert_eq!(carousel.track_entries().len(), entries_at_init);
}
