use crate::events::AppEvent;
use crate::{config, sys::server};
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the control socket and the config watcher on a dedicated runtime
/// thread, feeding the GTK main loop through the event channel.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start background runtime: {}", e);
                return;
            }
        };

        rt.block_on(async move {
            let server = tokio::spawn(server::run_server(tx.clone()));
            let watcher = tokio::spawn(config::run_async_watcher(tx));
            let _ = tokio::join!(server, watcher);
        });
    });
}
