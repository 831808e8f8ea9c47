use super::{DiagnosticSink, Level, LocalLogger};

/// Adapts a [`LocalLogger`] to the [`DiagnosticSink`] interface.
///
/// Messages below `min_level` are dropped before they reach the logger.
#[derive(Debug)]
pub struct LoggerAdapter {
    logger: LocalLogger,
    min_level: Level,
}

impl LoggerAdapter {
    pub fn new(logger: LocalLogger) -> Self {
        Self {
            logger,
            min_level: Level::Info,
        }
    }

    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn logger(&self) -> &LocalLogger {
        &self.logger
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn accepts(&self, level: Level) -> bool {
        level >= self.min_level
    }
}

impl DiagnosticSink for LoggerAdapter {
    fn write(&self, level: Level, message: &str) {
        if !self.accepts(level) {
            return;
        }

        match level {
            Level::Info => self.logger.write_info(message),
            Level::Warn => self.logger.write_warn(message),
            Level::Error => self.logger.write_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::local::captured_logger;

    #[test]
    fn test_default_min_level_accepts_everything() {
        let adapter = LoggerAdapter::new(LocalLogger::new("test"));
        assert!(adapter.accepts(Level::Info));
        assert!(adapter.accepts(Level::Warn));
        assert!(adapter.accepts(Level::Error));
    }

    #[test]
    fn test_min_level_filters_lower_levels() {
        let adapter = LoggerAdapter::new(LocalLogger::new("test")).with_min_level(Level::Warn);
        assert!(!adapter.accepts(Level::Info));
        assert!(adapter.accepts(Level::Warn));
        assert!(adapter.accepts(Level::Error));
        assert_eq!(adapter.min_level(), Level::Warn);
    }

    #[test]
    fn test_levels_routed_to_matching_writer() {
        let (logger, out, err) = captured_logger("kitchen");
        let adapter = LoggerAdapter::new(logger);
        let sink: &dyn DiagnosticSink = &adapter;

        sink.info("grill on");
        sink.warn("low on buns");
        sink.error("grill off");

        assert_eq!(
            out.contents(),
            "[kitchen Log] grill on\n[kitchen Log] low on buns\n"
        );
        assert_eq!(err.contents(), "[kitchen Log] grill off\n");
    }

    #[test]
    fn test_filtered_levels_write_nothing() {
        let (logger, out, err) = captured_logger("kitchen");
        let adapter = LoggerAdapter::new(logger).with_min_level(Level::Error);

        adapter.write(Level::Info, "hidden");
        adapter.write(Level::Warn, "also hidden");
        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());

        adapter.write(Level::Error, "shown");
        assert_eq!(err.contents(), "[kitchen Log] shown\n");
        assert!(out.contents().is_empty());
    }
}
