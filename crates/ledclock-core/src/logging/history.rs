//! Rolling buffer of recent log lines for the web UI.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// Number of log lines retained for the web UI.
pub const MAX_HISTORY: usize = 40;

/// FIFO of the most recent composed log lines.
///
/// Insertion order is preserved; once full, the oldest line is evicted on
/// every append. Lives only as long as the process (no persistence).
#[derive(Debug, Default)]
pub struct LogHistory {
    lines: VecDeque<String>,
}

impl LogHistory {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(MAX_HISTORY + 1),
        }
    }

    /// Appends at the tail, evicting from the head past `MAX_HISTORY`.
    pub fn append(&mut self, line: &str) {
        self.lines.push_back(line.into());
        while self.lines.len() > MAX_HISTORY {
            self.lines.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Point-in-time copy of the contents, oldest first.
    ///
    /// Later appends do not show up in a snapshot already taken.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_keeps_insertion_order() {
        let mut history = LogHistory::new();
        history.append("first");
        history.append("second");

        assert_eq!(history.snapshot(), ["first", "second"]);
    }

    #[test]
    fn test_evicts_oldest_beyond_capacity() {
        let mut history = LogHistory::new();
        for i in 0..45 {
            history.append(&format!("line {}", i));
        }

        let lines = history.snapshot();
        assert_eq!(lines.len(), MAX_HISTORY);
        assert_eq!(lines[0], "line 5");
        assert_eq!(lines[MAX_HISTORY - 1], "line 44");
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut history = LogHistory::new();
        history.append("before");
        let snapshot = history.snapshot();
        history.append("after");

        assert_eq!(snapshot, ["before"]);
        assert_eq!(history.len(), 2);
    }
}
