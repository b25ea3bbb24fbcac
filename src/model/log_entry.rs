//! Log entry data model

/// One revision from `svn log`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEntry {
    /// Revision number as printed by svn (e.g. "1042")
    pub revision: String,

    /// Committer, empty for anonymous commits
    pub author: String,

    /// Commit timestamp as svn prints it (e.g. "2024-01-29T06:30:00.123456Z")
    pub date: String,

    /// Full commit message, possibly multi-line
    pub message: String,
}

impl LogEntry {
    /// First line of the message
    pub fn first_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Get a display string for the message
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        }
    }
}

/// Log entries in the order svn returned them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Log {
    pub entries: Vec<LogEntry>,
}

impl Log {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// First entry; for a default `svn log` this is the newest revision
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.first()
    }
}

impl IntoIterator for Log {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Log {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
