pub mod catalog;
pub mod chat; // Chat session transcript
pub mod config;
pub mod explorer; // Per-session UI selection state
pub mod library; // Formula library search
pub mod matcher; // Symptom → condition scoring
pub mod models;
pub mod reply;
pub mod research; // Research database search
pub mod trends;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::chat::ChatSession;
use crate::config::{ChatConfig, ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the fmt subscriber. `RUST_LOG` wins over the built-in filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Decode one raw stdin line. Invalid UTF-8 is replaced, never rejected;
/// the trailing `\n` / `\r\n` is dropped.
pub fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Terminal chat: one user message per stdin line, replies on stdout.
pub async fn run() -> Result<(), AppError> {
    init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let chat_config = ChatConfig::from_env()?;
    let catalog = catalog::builtin();
    let mut session = if chat_config.greeting {
        ChatSession::with_greeting(catalog)
    } else {
        ChatSession::new(catalog)
    };
    tracing::info!(session = %session.id(), "Chat session opened");

    let mut stdout = tokio::io::stdout();
    for message in session.messages() {
        stdout
            .write_all(format!("{}: {}\n\n", message.role, message.content).as_bytes())
            .await?;
    }
    stdout.flush().await?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if stdin.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);
        if let Err(err) = session.begin_reply(&line) {
            tracing::debug!(error = %err, "Submission ignored");
            continue;
        }

        stdout.write_all(b"assistant is typing...\n").await?;
        stdout.flush().await?;
        tokio::time::sleep(chat_config.typing_delay).await;

        match session.finish_reply() {
            Ok(exchange) => {
                let reply = &exchange.reply;
                stdout
                    .write_all(format!("{}: {}\n\n", reply.role, reply.content).as_bytes())
                    .await?;
                stdout.flush().await?;
            }
            Err(err) => tracing::warn!(error = %err, "Reply failed"),
        }
    }

    tracing::info!(
        session = %session.id(),
        messages = session.messages().len(),
        "Chat session closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"cough\n"), "cough");
        assert_eq!(decode_line(b"fever\r\n"), "fever");
        assert_eq!(decode_line(b"no newline"), "no newline");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn decode_line_replaces_invalid_utf8() {
        let line = decode_line(b"\xff\xfe fever\n");
        assert_eq!(line, "\u{FFFD}\u{FFFD} fever");
    }

    #[test]
    fn invalid_line_still_reaches_the_session() {
        let mut session = ChatSession::new(catalog::builtin());
        let first = session.submit(&decode_line(b"\xff\xfe fever\n")).unwrap();
        assert!(first.reply.content.contains("Respiratory Infection"));

        let second = session.submit(&decode_line(b"cough, sore throat, fever\n")).unwrap();
        assert!(second.reply.content.contains("(60% confidence)"));
        assert_eq!(session.messages().len(), 4);
    }
}
