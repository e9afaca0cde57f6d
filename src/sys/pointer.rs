use crate::events::AppEvent;
use crate::sys::wm::{self, Point};
use async_channel::Sender;
use evdev::{Device, EventType, InputEventKind, Key};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Cursor poll cadence. Matches the 60 Hz frame cadence of the overlay.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

const DEV_INPUT: &str = "/dev/input";

#[derive(Debug, Error)]
pub enum PointerError {
    #[error("Failed to scan /dev/input: {0}")]
    Scan(#[from] std::io::Error),
    #[error("No device with a left mouse button found under /dev/input")]
    NoButtonDevice,
}

/// Poll the compositor for the global cursor position and forward changes.
///
/// The overlay windows are click-through layer surfaces and never receive
/// motion events themselves, so this IPC poll is the system-wide monitor.
pub async fn run_cursor_poll(tx: Sender<AppEvent>) {
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    let mut last = Point::default();

    loop {
        interval.tick().await;

        let Some(pos) = wm::cursor_position() else {
            continue;
        };
        if pos == last {
            continue;
        }
        last = pos;

        if tx.send(AppEvent::CursorMove(pos)).await.is_err() {
            break;
        }
    }
}

fn find_button_devices() -> Result<Vec<Device>, PointerError> {
    let mut devices = Vec::new();

    for entry in std::fs::read_dir(DEV_INPUT)? {
        let entry = entry?;
        if let Ok(device) = Device::open(entry.path())
            && let Some(keys) = device.supported_keys()
            && keys.contains(Key::BTN_LEFT)
        {
            log::info!("Listening for buttons on {:?}", device.name());
            devices.push(device);
        }
    }

    if devices.is_empty() {
        return Err(PointerError::NoButtonDevice);
    }
    Ok(devices)
}

/// Spawn one blocking reader thread per pointing device, forwarding left
/// button transitions into the event channel. Value 1 is a press, 0 a
/// release; key repeats (2) are ignored.
pub fn spawn_button_watcher(tx: Sender<AppEvent>) -> Result<(), PointerError> {
    for mut device in find_button_devices()? {
        let tx = tx.clone();
        thread::spawn(move || {
            loop {
                let events = match device.fetch_events() {
                    Ok(events) => events,
                    Err(e) => {
                        log::warn!("Button device went away: {}", e);
                        return;
                    }
                };

                for event in events {
                    if event.event_type() != EventType::KEY {
                        continue;
                    }
                    if let InputEventKind::Key(key) = event.kind() {
                        if key != Key::BTN_LEFT {
                            continue;
                        }
                        let sent = match event.value() {
                            1 => tx.send_blocking(AppEvent::Pressed),
                            0 => tx.send_blocking(AppEvent::Released),
                            _ => continue,
                        };
                        if sent.is_err() {
                            return;
                        }
                    }
                }
            }
        });
    }
    Ok(())
}
