//! Console Logging
//!
//! Installs a `tracing` fmt subscriber whose writer forwards each formatted
//! event to the browser console at the event's level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event; emits it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::with_capacity(128) }
    }
}

impl io::Write for ConsoleWriter {
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
        let line = JsValue::from_str(text.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    // fmt always asks through make_writer_for; this is only a fallback
    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::DEBUG)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the console subscriber. Safe to call twice; the second call only warns.
pub fn init(max_level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[LOG] subscriber not installed: {}", err).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_writer_is_debug() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::DEBUG);
        assert!(writer.buf.is_empty());
    }
}
