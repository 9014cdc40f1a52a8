//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! Payload following the `commit <size>\0` header:
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Header lines with keys other than the four above are skipped, so objects
//! carrying `encoding`, `gpgsig` and similar extras still parse.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{DecodeError, DecodeResult, TimestampError};
use chrono::{DateTime, FixedOffset, Utc};
use std::io::BufRead;

/// Author or committer information
///
/// Contains name, email, and the timestamp in the offset it was recorded with.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Signature {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Signature {
    pub fn new(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Signature {
            name,
            email,
            timestamp,
        }
    }

    /// Placeholder for a commit that carries no author or committer line
    fn unknown() -> Self {
        Signature {
            name: String::new(),
            email: String::new(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
        }
    }

    /// Parse the value of an `author`/`committer` header line
    ///
    /// The email is bounded by the first `<` and the first `>`; the name is
    /// everything before, minus the separating space; what follows `>` is
    /// the timestamp and offset.
    fn parse(oid: &ObjectId, value: &str) -> DecodeResult<Self> {
        let malformed = || DecodeError::MalformedSignature {
            oid: oid.clone(),
            line: value.to_string(),
        };

        let email_start = value.find('<').ok_or_else(malformed)?;
        let email_end = value.find('>').ok_or_else(malformed)?;
        if email_end < email_start {
            return Err(malformed());
        }

        let name = &value[..email_start];
        let name = name.strip_suffix(' ').unwrap_or(name);
        let email = &value[email_start + 1..email_end];
        let when = &value[email_end + 1..];

        let timestamp =
            parse_timestamp(when).map_err(|source| DecodeError::MalformedTimestamp {
                oid: oid.clone(),
                value: when.trim().to_string(),
                source,
            })?;

        Ok(Signature::new(name.to_string(), email.to_string(), timestamp))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form, in the recorded offset
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

/// Parse `"<unix-seconds> <sign><HH><MM>"` into an instant with a fixed offset
///
/// The instant keeps the offset it was recorded with; it is neither
/// normalized to UTC nor to local time.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let fields = raw.split_whitespace().collect::<Vec<_>>();
    let [seconds, offset] = fields.as_slice() else {
        return Err(TimestampError::InvalidFormat);
    };

    let digits = seconds.strip_prefix('-').unwrap_or(seconds);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::InvalidSeconds(seconds.to_string()));
    }
    let seconds = seconds
        .parse::<i64>()
        .map_err(|_| TimestampError::InvalidSeconds(seconds.to_string()))?;
    let offset = parse_offset(offset)?;

    DateTime::from_timestamp(seconds, 0)
        .map(|instant| instant.with_timezone(&offset))
        .ok_or_else(|| TimestampError::InvalidSeconds(seconds.to_string()))
}

fn parse_offset(raw: &str) -> Result<FixedOffset, TimestampError> {
    let invalid = || TimestampError::InvalidOffset(raw.to_string());

    let bytes = raw.as_bytes();
    if bytes.len() != 5 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(invalid()),
    };

    let hours = raw[1..3].parse::<i32>().map_err(|_| invalid())?;
    let minutes = raw[3..5].parse::<i32>().map_err(|_| invalid())?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Git commit object
///
/// Represents a snapshot of the repository with metadata.
/// Contains references to:
/// - The tree representing the state of files
/// - Parent commit(s) for history, in on-disk order
/// - Author and committer information
/// - Commit message
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Hash the commit was loaded under
    oid: ObjectId,
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Parent commit IDs (empty for a root commit, multiple for merge commits)
    parents: Vec<ObjectId>,
    /// Author who wrote the changes
    author: Signature,
    /// Committer who recorded the commit
    committer: Signature,
    /// Commit message bytes as stored, with a single trailing newline removed
    raw_message: Vec<u8>,
    /// `raw_message` decoded as UTF-8, invalid sequences replaced
    message: String,
}

impl Commit {
    /// Parse a commit payload
    ///
    /// Header lines are read until a blank line; everything after it is the
    /// message, with at most one trailing `\n` stripped. Running out of input
    /// before the blank line ends the headers and leaves the message empty.
    ///
    /// # Arguments
    ///
    /// * `oid` - Hash the payload was loaded under (never recomputed)
    /// * `reader` - Reader bounded to exactly the commit payload
    pub fn parse(oid: ObjectId, reader: &mut impl BufRead) -> DecodeResult<Self> {
        let mut tree_oid = ObjectId::default();
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let content = trim_line_ending(&line);
            if content.is_empty() {
                break;
            }

            let content = String::from_utf8_lossy(content);
            let (key, value) =
                content
                    .split_once(' ')
                    .ok_or_else(|| DecodeError::MissingSeparator {
                        oid: oid.clone(),
                        line: content.to_string(),
                    })?;

            match key {
                "tree" => tree_oid = ObjectId::from_raw(value.to_string()),
                "parent" => parents.push(ObjectId::from_raw(value.to_string())),
                "author" => author = Some(Signature::parse(&oid, value)?),
                "committer" => committer = Some(Signature::parse(&oid, value)?),
                _ => {}
            }
        }

        let mut raw_message = Vec::new();
        reader.read_to_end(&mut raw_message)?;
        if raw_message.last() == Some(&b'\n') {
            raw_message.pop();
        }
        let message = String::from_utf8_lossy(&raw_message).into_owned();

        Ok(Commit {
            oid,
            tree_oid,
            parents,
            author: author.unwrap_or_else(Signature::unknown),
            committer: committer.unwrap_or_else(Signature::unknown),
            raw_message,
            message,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Abbreviated hash used in one-line displays
    pub fn short_oid(&self) -> String {
        self.oid.to_short_oid()
    }

    /// Get the tree object ID
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Mainline parent (first on disk)
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// True for a root commit, which has no parents
    pub fn is_leaf(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn committer(&self) -> &Signature {
        &self.committer
    }

    /// Get the full commit message
    ///
    /// Messages are not required to be UTF-8; invalid sequences are shown as
    /// U+FFFD here. Use [`Self::raw_message`] for the stored bytes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The commit message exactly as stored, minus one trailing newline
    pub fn raw_message(&self) -> &[u8] {
        &self.raw_message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log --oneline`)
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "commit {}", self.oid)?;
        writeln!(f, "tree {}", self.tree_oid)?;
        for parent in &self.parents {
            writeln!(f, "parent {parent}")?;
        }
        writeln!(
            f,
            "author {} {}",
            self.author.display_name(),
            self.author.readable_timestamp()
        )?;
        writeln!(
            f,
            "committer {} {}",
            self.committer.display_name(),
            self.committer.readable_timestamp()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.message)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
