use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/dial.sock";

/// Line protocol for external writes to the value, one command per line.
fn parse_command(line: &str) -> Option<AppEvent> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "set" => parts.next()?.parse().ok().map(AppEvent::SetValue),
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
                        match parse_command(line.trim()) {
                            Some(event) => {
                                if tx.send(event).await.is_err() {
                                    return;
                                }
                            }
                            None => log::warn!("Ignoring unknown command: {:?}", line),
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
    fn test_set_commands_parse() {
        assert!(matches!(
            parse_command("set 42"),
            Some(AppEvent::SetValue(v)) if v == 42.0
        ));
        assert!(matches!(
            parse_command("set -2.5"),
            Some(AppEvent::SetValue(v)) if v == -2.5
        ));
    }

    #[test]
    fn test_garbage_commands_are_ignored() {
        assert!(parse_command("").is_none());
        assert!(parse_command("set").is_none());
        assert!(parse_command("set many words").is_none());
        assert!(parse_command("show").is_none());
    }
}
