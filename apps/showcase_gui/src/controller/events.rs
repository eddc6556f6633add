//! Events delivered from the timer runtime to the UI loop.

use carousel::SettleTicket;

/// Every carousel mutation arrives through this single stream and is applied
/// in arrival order on the UI thread, so timer callbacks and user input can
/// never interleave inside a transition.
pub enum UiEvent {
    AutoplayTick,
    SettleElapsed { ticket: SettleTicket },
    TypewriterStarted,
    TypewriterTick,
}

/// Capability the Escape handler invokes: hide whatever overlay is currently
/// active. Returns whether one was open.
pub trait OverlayHost {
    fn hide_active_overlay(&mut self) -> bool;
}
