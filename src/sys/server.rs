use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/corona.sock";

/// There is no menu bar to hang a glyph off on a layer-shell desktop, so
/// the settings menu is summoned over a command socket instead, typically
/// from a compositor keybinding: `printf menu | nc -U /tmp/corona.sock`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    match line.trim() {
        "menu" => Some(AppEvent::ToggleMenu),
        "quit" => Some(AppEvent::Quit),
        _ => None,
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if let Some(event) = parse_command(&line) {
                            let _ = tx.send(event).await;
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("menu"), Some(AppEvent::ToggleMenu)));
        assert!(matches!(parse_command("  menu \n"), Some(AppEvent::ToggleMenu)));
        assert!(matches!(parse_command("quit"), Some(AppEvent::Quit)));
        assert!(parse_command("show").is_none());
        assert!(parse_command("").is_none());
    }
}
