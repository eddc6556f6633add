//! Dedicated timer thread: autoplay ticks, the typewriter cadence, and
//! settle deadlines, all delivered to the UI as ordinary events.

use std::thread;

use carousel::{
    AUTOPLAY_PERIOD, TRANSITION_DURATION, TYPEWRITER_CHAR_PERIOD, TYPEWRITER_START_DELAY,
};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error};

use crate::controller::events::UiEvent;
use crate::timer_bridge::commands::TimerCommand;

/// Spawns the timer thread. Periodic senders run for the life of the
/// process; there is no way to pause or cancel them, matching the always-on
/// autoplay of the showcase. Dropped events (full UI queue) are harmless:
/// ticks repeat and a stale settle would be ignored anyway.
pub fn launch(cmd_rx: Receiver<TimerCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build timer runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let autoplay_tx = ui_tx.clone();
            tokio::spawn(async move {
                let mut ticks = tokio::time::interval(AUTOPLAY_PERIOD);
                // An interval yields immediately; the first advance belongs
                // one full period after startup.
                ticks.tick().await;
                loop {
                    ticks.tick().await;
                    let _ = autoplay_tx.try_send(UiEvent::AutoplayTick);
                }
            });

            let typewriter_tx = ui_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(TYPEWRITER_START_DELAY).await;
                let _ = typewriter_tx.try_send(UiEvent::TypewriterStarted);
                let mut ticks = tokio::time::interval(TYPEWRITER_CHAR_PERIOD);
                ticks.tick().await;
                loop {
                    ticks.tick().await;
                    let _ = typewriter_tx.try_send(UiEvent::TypewriterTick);
                }
            });

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    TimerCommand::ScheduleSettle { ticket } => {
                        debug!(?ticket, "scheduling settle deadline");
                        let settle_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep(TRANSITION_DURATION).await;
                            let _ = settle_tx.try_send(UiEvent::SettleElapsed { ticket });
                        });
                    }
                }
            }
        });
    });
}
