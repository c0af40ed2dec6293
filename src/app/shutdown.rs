//! Ctrl-C handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// The returned handle should be aborted once the run is over.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log::warn!("Received Ctrl-C, cancelling update");
                cancel.cancel();
            }
            Err(e) => log::warn!("Failed to listen for Ctrl-C: {e}"),
        }
    })
}
