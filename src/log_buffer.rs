//! In-memory log sink.
//!
//! The tracing subscriber writes here while the alternate screen is active,
//! and the status bar shows the most recent line.
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

const DEFAULT_MAX_LINES: usize = 500;

#[derive(Debug)]
struct Lines {
    lines: VecDeque<String>,
    max_lines: usize,
}

impl Lines {
    fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }
}

/// Shared ring buffer of formatted log lines. Clones share storage.
#[derive(Clone, Debug)]
pub struct LogBuffer {
    inner: Arc<Mutex<Lines>>,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_LINES)
    }
}

impl LogBuffer {
    pub fn with_capacity(max_lines: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Lines {
                lines: VecDeque::new(),
                max_lines: max_lines.max(1),
            })),
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        if let Ok(mut lines) = self.inner.lock() {
            lines.push(line.into());
        }
    }

    pub fn latest(&self) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|lines| lines.lines.back().cloned())
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|lines| lines.lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|lines| lines.lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn writer(&self) -> LogWriter {
        LogWriter {
            buffer: self.clone(),
            pending: Vec::new(),
        }
    }
}

/// `io::Write` adapter that splits its input into lines.
#[derive(Debug)]
pub struct LogWriter {
    buffer: LogBuffer,
    pending: Vec<u8>,
}

impl LogWriter {
    fn drain_complete_lines(&mut self) {
        let Some(pos) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return;
        };
        let drained: Vec<u8> = self.pending.drain(..=pos).collect();
        self.push_text(&drained);
    }

    fn push_text(&self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        for line in text.split('\n') {
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                self.buffer.push(line.to_string());
            }
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.drain_complete_lines();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let rest = std::mem::take(&mut self.pending);
        self.push_text(&rest);
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_splits_lines_and_flushes_partial() {
        let buffer = LogBuffer::default();
        let mut writer = buffer.writer();
        write!(writer, "first\nsec").unwrap();
        assert_eq!(buffer.lines(), vec!["first".to_string()]);
        writeln!(writer, "ond").unwrap();
        write!(writer, "tail").unwrap();
        drop(writer);
        assert_eq!(buffer.lines(), vec!["first", "second", "tail"]);
        assert_eq!(buffer.latest().as_deref(), Some("tail"));
    }

    #[test]
    fn capacity_drops_oldest() {
        let buffer = LogBuffer::with_capacity(2);
        buffer.push("a");
        buffer.push("b");
        buffer.push("c");
        assert_eq!(buffer.lines(), vec!["b", "c"]);
        assert_eq!(buffer.len(), 2);
    }
}
