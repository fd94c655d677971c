use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend printing to the browser console, prefixed with the record target
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install the console logger. Calling it twice keeps the first installation.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_line(target: &str, message: &str) -> String {
    let component = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(
            format_line("billed_frontend::controllers::new_bill", "uploaded"),
            "[new_bill] uploaded"
        );
        assert_eq!(format_line("app", "started"), "[app] started");
    }
}
