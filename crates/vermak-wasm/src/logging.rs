// crates/vermak-wasm/src/logging.rs
//! Routes `tracing` events from vermak-core and this crate to the browser
//! console, one console call per event at the matching severity.
use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    fn from_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Severity::Error
        } else if *level == Level::WARN {
            Severity::Warn
        } else if *level == Level::INFO {
            Severity::Info
        } else {
            Severity::Debug
        }
    }

    fn emit(self, line: &str) {
        let value: wasm_bindgen::JsValue = line.into();
        match self {
            Severity::Error => web_sys::console::error_1(&value),
            Severity::Warn => web_sys::console::warn_1(&value),
            Severity::Info => web_sys::console::info_1(&value),
            Severity::Debug => web_sys::console::debug_1(&value),
        }
    }
}

/// Collects one formatted event and hands it to the console on drop.
pub struct ConsoleWriter {
    severity: Severity,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
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
        let line = self.line();
        if !line.is_empty() {
            self.severity.emit(&line);
        }
    }
}

pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { severity: Severity::Info, buf: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { severity: Severity::from_level(meta.level()), buf: Vec::new() }
    }
}

/// Installs the console subscriber. A second call is a no-op.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
    if installed.is_err() {
        web_sys::console::debug_1(&"tracing subscriber already installed".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(Severity::from_level(&Level::ERROR), Severity::Error);
        assert_eq!(Severity::from_level(&Level::WARN), Severity::Warn);
        assert_eq!(Severity::from_level(&Level::INFO), Severity::Info);
        assert_eq!(Severity::from_level(&Level::DEBUG), Severity::Debug);
        assert_eq!(Severity::from_level(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn writer_collects_one_line_per_event() {
        let mut writer = ConsoleWriter { severity: Severity::Warn, buf: Vec::new() };
        write!(writer, " WARN unreadable provider object").unwrap();
        writer.write_all(b" error=EOF\n").unwrap();
        assert_eq!(writer.line(), " WARN unreadable provider object error=EOF");
        // Emptied so the drop stays off the console.
        writer.buf.clear();
    }
}
