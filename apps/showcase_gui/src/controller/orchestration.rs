//! Command orchestration from UI actions to the timer runtime queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::timer_bridge::commands::TimerCommand;

pub fn dispatch_timer_command(
    cmd_tx: &Sender<TimerCommand>,
    cmd: TimerCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        TimerCommand::ScheduleSettle { .. } => "schedule_settle",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->timer command"),
        Err(TrySendError::Full(_)) => {
            *status = "Timer queue is full; the next step settles late".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Timer runtime disconnected; autoplay and settles stopped".to_string();
        }
    }
}
