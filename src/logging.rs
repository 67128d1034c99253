//! A `log` backend that prints every record as a framed table row.
//!
//! ```text
//! |12:00:01|INFO |cache warmed in 3ms                         |
//! |12:00:02|WARN |row range 4..9 is out of bounds for a table |
//! |        |     |of 3 rows                                   |
//! ```
//!
//! The message column has a fixed width and is word wrapped with the same
//! layout engine used for tables, so long messages stay inside the grid.
//! Outer whitespace and blank lines around a message are trimmed.

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::assembler::{Boundary, FrameAssembler};
use crate::cells::unit_len;
use crate::frame::{self, FrameOptions, FrameStyle};
use crate::layout::{CellLayout, PlacedBlock};
use crate::sync::lock_recover;
use crate::text::Wrapping;
use crate::trim::Trimming;

/// Width of the level column ("ERROR").
const LEVEL_WIDTH: usize = 5;

/// Default width of the message column.
pub const DEFAULT_MESSAGE_WIDTH: usize = 60;

/// Framed-row logger for the `log` crate.
///
/// # Thread Safety
///
/// The writer is guarded by a mutex with poison recovery, so records from
/// different threads never interleave within a row.
pub struct GridLogger {
    writer: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    message_width: usize,
    time_format: OwnedFormatItem,
    style: FrameStyle<'static>,
}

impl GridLogger {
    /// Create a logger writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            writer: Mutex::new(Box::new(writer)),
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            message_width: DEFAULT_MESSAGE_WIDTH,
            time_format,
            style: frame::ASCII,
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable the time column.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Set the width of the message column (at least 1).
    #[must_use]
    pub fn message_width(mut self, width: usize) -> Self {
        self.message_width = width.max(1);
        self
    }

    /// Override time format.
    ///
    /// An unparsable description keeps the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Set the frame style of the rows.
    #[must_use]
    pub fn style(mut self, style: FrameStyle<'static>) -> Self {
        self.style = style;
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    /// Lay a record out as one framed row.
    fn format_record(&self, record: &Record<'_>) -> String {
        let mut cells: Vec<(String, usize)> = Vec::with_capacity(3);
        if self.show_time {
            let time = self.format_time();
            let width = unit_len(&time);
            cells.push((time, width));
        }
        if self.show_level {
            cells.push((record.level().as_str().to_string(), LEVEL_WIDTH));
        }
        cells.push((record.args().to_string(), self.message_width));

        let blocks: Vec<(Vec<String>, CellLayout)> = cells
            .iter()
            .map(|(text, width)| {
                let layout = CellLayout::new(*width)
                    .wrapping(Wrapping::Word)
                    .trimming(Trimming::OUTER);
                (layout.lay_out(text), layout)
            })
            .collect();
        let height = blocks.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
        let placed: Vec<PlacedBlock<'_>> = blocks
            .iter()
            .map(|(lines, layout)| {
                PlacedBlock::new(
                    lines,
                    height,
                    layout.alignment.vertical(),
                    layout.width,
                    layout.fill,
                )
            })
            .collect();

        let options = FrameOptions::LEFT | FrameOptions::RIGHT | FrameOptions::INSIDE_VERTICAL;
        let widths = cells.iter().map(|(_, width)| *width).collect();
        let mut row = FrameAssembler::new(self.style, options, widths);
        row.row(&placed, height, Boundary::Contiguous);
        row.finish()
    }
}

impl Default for GridLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for GridLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let row = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // A logger has nowhere to report its own write failures.
        let _ = writer.write_all(row.as_bytes());
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            lock_recover(&self.0).extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&lock_recover(&self.0)).into_owned()
        }
    }

    fn quiet_logger() -> GridLogger {
        GridLogger::with_writer(io::sink()).show_time(false)
    }

    #[test]
    fn test_builder_chain() {
        let logger = GridLogger::with_writer(io::sink())
            .level(LevelFilter::Debug)
            .show_time(false)
            .show_level(false)
            .message_width(0)
            .style(frame::SINGLE);

        assert_eq!(logger.level, LevelFilter::Debug);
        assert!(!logger.show_time);
        assert!(!logger.show_level);
        assert_eq!(logger.message_width, 1);
        assert_eq!(logger.style, frame::SINGLE);
    }

    #[test]
    fn test_log_enabled_info_level() {
        let logger = quiet_logger().level(LevelFilter::Info);

        let info_meta = log::Metadata::builder().level(Level::Info).build();
        let error_meta = log::Metadata::builder().level(Level::Error).build();
        let debug_meta = log::Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&info_meta));
        assert!(logger.enabled(&error_meta));
        assert!(!logger.enabled(&debug_meta));
    }

    #[test]
    fn test_format_record_row() {
        let logger = quiet_logger().message_width(10);
        let record = log::Record::builder()
            .args(format_args!("Hello"))
            .level(Level::Warn)
            .build();

        assert_eq!(logger.format_record(&record), "|WARN |Hello     |\n");
    }

    #[test]
    fn test_format_record_wraps_message() {
        let logger = quiet_logger().show_level(false).message_width(8);
        let record = log::Record::builder()
            .args(format_args!("wrap this message"))
            .level(Level::Info)
            .build();

        assert_eq!(
            logger.format_record(&record),
            "|wrap    |\n|this    |\n|message |\n"
        );
    }

    #[test]
    fn test_format_record_with_time() {
        let logger = GridLogger::with_writer(io::sink()).time_format("[hour]:[minute]");
        let record = log::Record::builder()
            .args(format_args!("x"))
            .level(Level::Info)
            .build();

        let row = logger.format_record(&record);
        // "|hh:mm|INFO |x...|"
        assert_eq!(row.as_bytes()[0], b'|');
        assert_eq!(&row[6..13], "|INFO |");
    }

    #[test]
    fn test_format_record_trims_outer_whitespace() {
        let logger = quiet_logger().message_width(12);
        let record = log::Record::builder()
            .args(format_args!("\n  spaced out \n\n"))
            .level(Level::Info)
            .build();

        assert_eq!(logger.format_record(&record), "|INFO |spaced out  |\n");
    }

    #[test]
    fn test_time_format_invalid_keeps_previous() {
        let logger = GridLogger::with_writer(io::sink()).time_format("[not a component]");
        assert_eq!(logger.format_time().len(), "hh:mm:ss".len());
    }

    #[test]
    fn test_log_writes_to_writer() {
        let buffer = Buffer::default();
        let logger = GridLogger::with_writer(buffer.clone())
            .show_time(false)
            .message_width(4)
            .style(frame::SINGLE);

        logger.log(
            &log::Record::builder()
                .args(format_args!("ok"))
                .level(Level::Error)
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("skipped"))
                .level(Level::Trace)
                .build(),
        );
        logger.flush();

        assert_eq!(buffer.contents(), "│ERROR│ok  │\n");
    }
}
