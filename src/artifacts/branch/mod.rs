//! Branch and reference names

pub mod branch_name;

/// Names matching this are rejected, following `git check-ref-format`
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
