//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use site_core::ContactRelay;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker. Commands are handled one at a time on a
/// single-threaded runtime; every accepted submission produces exactly one
/// `ContactSubmissionSettled` event.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    relay: Arc<dyn ContactRelay>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::BackendReady);
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "processing ui->backend command");
                match cmd {
                    BackendCommand::SubmitContact { submission } => {
                        let outcome = relay.submit(&submission).await;
                        // Blocking send: the UI must always learn that the call settled.
                        if ui_tx
                            .send(UiEvent::ContactSubmissionSettled(outcome))
                            .is_err()
                        {
                            tracing::warn!("ui event queue closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}
