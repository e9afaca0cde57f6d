use crate::events::AppEvent;
use crate::sys::pointer;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>) {
    if let Err(e) = pointer::spawn_button_watcher(tx.clone()) {
        log::error!("Button watcher unavailable: {}", e);
    }

    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create Tokio runtime");

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    pointer::run_cursor_poll(tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}
