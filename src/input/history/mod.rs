mod file_ops;

pub use file_ops::HistoryFile;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io(err)
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub num: usize,
    pub text: String,
}

/// In-memory command history, capped at a fixed number of entries.
///
/// Entries carry a sequential index; whenever the list changes size through
/// load or eviction, indices are reassigned 0..n-1.
pub struct History {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        History {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Remembers one raw input line, evicting the oldest entry when the cap
    /// is exceeded.
    pub fn push(&mut self, line: &str) {
        let num = self.entries.len();
        self.entries.push(HistoryEntry {
            num,
            text: line.to_string(),
        });
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
            self.renumber();
        }
    }

    /// Loads persisted lines, evicting from the front past the cap.
    pub fn load(&mut self, file: &HistoryFile) -> Result<usize, HistoryError> {
        for line in file.read_lines()? {
            let num = self.entries.len();
            self.entries.push(HistoryEntry { num, text: line });
        }
        while self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        self.renumber();
        Ok(self.entries.len())
    }

    pub fn save(&self, file: &HistoryFile) -> Result<(), HistoryError> {
        file.write_lines(self.entries.iter().map(|entry| entry.text.as_str()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn renumber(&mut self) {
        for (num, entry) in self.entries.iter_mut().enumerate() {
            entry.num = num;
        }
    }
}
