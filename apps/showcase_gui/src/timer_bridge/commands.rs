//! Commands from the UI loop to the timer runtime.

use carousel::SettleTicket;

pub enum TimerCommand {
    /// Deliver a `SettleElapsed` for this ticket once the transition
    /// duration has passed.
    ScheduleSettle { ticket: SettleTicket },
}
