//! Core of the showcase carousel: responsive items-per-view, boundary-clone
//! track construction, offset computation, and the settle/wrap state machine.
//!
//! The crate is timer-free. Hosts (the GUI shell, the simulator) deliver
//! move requests, resize notifications, and settle deadlines as explicit
//! calls, so every mutation is serialized by the owner and the state machine
//! stays deterministic under test.

use std::time::Duration;

pub mod controller;
pub mod track;
pub mod typewriter;

pub use controller::{Carousel, CarouselSnapshot, SettleTicket, TrackSurface};
pub use track::{Track, TrackEntry};
pub use typewriter::Typewriter;

/// Cadence of the automatic forward advance.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(4000);
/// Duration of the eased slide; the settle correction is due when it ends.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);
/// Horizontal spacing between track items.
pub const ITEM_GAP_PX: f32 = 20.0;
/// The title reveal starts this long after the shell comes up.
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(1000);
/// One title character is revealed per period once the reveal has started.
pub const TYPEWRITER_CHAR_PERIOD: Duration = Duration::from_millis(80);
