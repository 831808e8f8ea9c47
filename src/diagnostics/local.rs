use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

use colored::Colorize;

use super::Level;

/// Console logger that prefixes every line with the origin it was created for.
///
/// Info, warn and plain log lines go to the `out` writer, errors to `err`.
/// They default to stdout and stderr.
pub struct LocalLogger {
    origin: String,
    colors: bool,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
}

impl fmt::Debug for LocalLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalLogger")
            .field("origin", &self.origin)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl LocalLogger {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            colors: Self::should_use_colors(),
            out: RefCell::new(Box::new(io::stdout())),
            err: RefCell::new(Box::new(io::stderr())),
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors && Self::should_use_colors();
        self
    }

    pub fn with_writers(mut self, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        self.out = RefCell::new(out);
        self.err = RefCell::new(err);
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn should_use_colors() -> bool {
        std::env::var("NO_COLOR").is_err()
    }

    fn prefix(&self) -> String {
        format!("[{} Log]", self.origin)
    }

    /// Formats a message the way `write_log` prints it.
    pub fn format_log(&self, message: &str) -> String {
        if self.colors {
            format!("{} {}", self.prefix(), message.green())
        } else {
            format!("{} {}", self.prefix(), message)
        }
    }

    pub fn format_line(&self, level: Level, message: &str) -> String {
        if !self.colors {
            return format!("{} {}", self.prefix(), message);
        }

        let painted = match level {
            Level::Info => message.blue(),
            Level::Warn => message.yellow(),
            Level::Error => message.red(),
        };
        format!("{} {}", self.prefix(), painted)
    }

    // A logger has nowhere to report its own write failures; they are dropped.
    fn emit(writer: &RefCell<Box<dyn Write>>, line: &str) {
        let mut writer = writer.borrow_mut();
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }

    pub fn write_log(&self, message: &str) {
        Self::emit(&self.out, &self.format_log(message));
    }

    pub fn write_info(&self, message: &str) {
        Self::emit(&self.out, &self.format_line(Level::Info, message));
    }

    pub fn write_warn(&self, message: &str) {
        Self::emit(&self.out, &self.format_line(Level::Warn, message));
    }

    pub fn write_error(&self, message: &str) {
        Self::emit(&self.err, &self.format_line(Level::Error, message));
    }
}

/// In-memory writer that can be handed to a logger while the test keeps a
/// handle to read what was written.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn captured_logger(origin: &str) -> (LocalLogger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let logger = LocalLogger::new(origin)
        .with_colors(false)
        .with_writers(Box::new(out.clone()), Box::new(err.clone()));
    (logger, out, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format_has_origin_prefix() {
        let logger = LocalLogger::new("orders").with_colors(false);
        assert_eq!(
            logger.format_line(Level::Info, "Preparing"),
            "[orders Log] Preparing"
        );
        assert_eq!(logger.format_log("ready"), "[orders Log] ready");
    }

    #[test]
    fn test_colored_format_keeps_prefix_and_message() {
        let logger = LocalLogger::new("orders").with_colors(true);
        for level in [Level::Info, Level::Warn, Level::Error] {
            let line = logger.format_line(level, "something happened");
            assert!(line.starts_with("[orders Log] "));
            assert!(line.contains("something happened"));
        }
    }

    #[test]
    fn test_origin_accessor() {
        let logger = LocalLogger::new("burger-factory");
        assert_eq!(logger.origin(), "burger-factory");
    }

    #[test]
    fn test_writes_go_to_matching_stream() {
        let (logger, out, err) = captured_logger("orders");

        logger.write_log("ready");
        logger.write_info("opened");
        logger.write_warn("running low");
        logger.write_error("out of bread");

        assert_eq!(
            out.contents(),
            "[orders Log] ready\n[orders Log] opened\n[orders Log] running low\n"
        );
        assert_eq!(err.contents(), "[orders Log] out of bread\n");
    }
}
