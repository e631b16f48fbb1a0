use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::error::AppError;
use crate::log_buffer::{LogBuffer, LogWriter};

/// Where formatted log lines go. Never stderr: the terminal is in the
/// alternate screen while the desktop runs.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Buffer(LogBuffer),
    File(Arc<Mutex<File>>),
}

impl LogTarget {
    pub fn file(path: &Path) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(LogTarget::File(Arc::new(Mutex::new(file))))
    }
}

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    Buffer(LogWriter),
    File(Arc<Mutex<File>>),
}

impl DelegatingWriter {
    fn new(target: &LogTarget) -> Self {
        let inner = match target {
            LogTarget::Buffer(buffer) => DelegatingInner::Buffer(buffer.writer()),
            LogTarget::File(file) => DelegatingInner::File(Arc::clone(file)),
        };
        DelegatingWriter { inner }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::Buffer(w) => w.write(buf),
            DelegatingInner::File(file) => {
                let mut file = file
                    .lock()
                    .map_err(|_| io::Error::other("log file lock poisoned"))?;
                file.write_all(buf)?;
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::Buffer(w) => w.flush(),
            DelegatingInner::File(file) => file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .flush(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    target: LogTarget,
}

impl SubscriberMakeWriter {
    pub fn new(target: LogTarget) -> Self {
        Self { target }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new(&self.target)
    }
}

pub fn parse_level(value: &str) -> Result<Level, AppError> {
    Level::from_str(value.trim()).map_err(|_| AppError::LogLevel(value.to_string()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_default(target: LogTarget, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter::new(target))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn buffer_target_collects_lines() {
        let buffer = LogBuffer::default();
        let make = SubscriberMakeWriter::new(LogTarget::Buffer(buffer.clone()));
        let mut writer = make.make_writer();
        writer.write_all(b"opened window\n").unwrap();
        assert_eq!(buffer.latest().as_deref(), Some("opened window"));
    }

    #[test]
    fn file_target_appends() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let target = LogTarget::file(file.path()).unwrap();
        let make = SubscriberMakeWriter::new(target);
        make.make_writer().write_all(b"one\n").unwrap();
        make.make_writer().write_all(b"two\n").unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "one\ntwo\n");
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogTarget::file(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::LogFile { .. }));
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("warn").unwrap(), Level::WARN);
        assert!(matches!(parse_level("loud"), Err(AppError::LogLevel(_))));
    }
}
