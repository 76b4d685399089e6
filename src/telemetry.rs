use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Error,
    Warn,
    Log,
}

/// The fmt layer prints the level first once timestamps are off.
fn console_level(line: &str) -> ConsoleLevel {
    match line.split_whitespace().next() {
        Some("ERROR") => ConsoleLevel::Error,
        Some("WARN") => ConsoleLevel::Warn,
        _ => ConsoleLevel::Log,
    }
}

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        emit(console_level(line), line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: ConsoleLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        ConsoleLevel::Error => web_sys::console::error_1(&value),
        ConsoleLevel::Warn => web_sys::console::warn_1(&value),
        ConsoleLevel::Log => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: ConsoleLevel, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. The browser has no clock the fmt layer
/// can use, so timestamps are dropped.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleWriter::default)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_from_prefix() {
        assert_eq!(
            console_level("ERROR pricepulse::config: Using default config"),
            ConsoleLevel::Error
        );
        assert_eq!(console_level(" WARN pricepulse::state: offline"), ConsoleLevel::Warn);
        assert_eq!(console_level(" INFO pricepulse: mounted"), ConsoleLevel::Log);
        assert_eq!(console_level(""), ConsoleLevel::Log);
    }

    #[test]
    fn test_writer_buffers_everything() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"DEBUG ").unwrap();
        writer.write_all(b"hello\n").unwrap();
        assert_eq!(writer.buf, b"DEBUG hello\n");
        writer.buf.clear();
    }
}
