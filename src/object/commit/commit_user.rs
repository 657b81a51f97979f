use std::env;
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use time::UtcOffset;

use crate::{Constants, Error, Result};

use super::*;

/// Identity and time recorded on one of the signature lines of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitUser {
    pub name: String,
    pub email: String,
    pub timestamp: SystemTime,
    pub timezone: UtcOffset,
}

impl CommitUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        CommitUser {
            name: name.into(),
            email: email.into(),
            timestamp: SystemTime::now(),
            timezone: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    /// Builds the user for `kind` from the `GIT_{AUTHOR,COMMITTER}_{NAME,EMAIL}` variables.
    ///
    /// The committer falls back to the author variables, and those fall back to a fixed
    /// identity.
    pub fn from_env(kind: CommitUserKind) -> Self {
        let author_name = env_var(Constants::AUTHOR_NAME_VAR);
        let author_email = env_var(Constants::AUTHOR_EMAIL_VAR);
        let (name, email) = match kind {
            CommitUserKind::Author => (author_name, author_email),
            CommitUserKind::Committer => (
                env_var(Constants::COMMITTER_NAME_VAR).or(author_name),
                env_var(Constants::COMMITTER_EMAIL_VAR).or(author_email),
            ),
        };

        CommitUser::new(
            name.unwrap_or_else(|| Constants::DEFAULT_USER_NAME.to_owned()),
            email.unwrap_or_else(|| Constants::DEFAULT_USER_EMAIL.to_owned()),
        )
    }

    /// Seconds since the unix epoch.
    pub fn epoch_seconds(&self) -> Result<u64> {
        Ok(self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::Formatting(format!("timestamp was invalid: {e}")))?
            .as_secs())
    }

    /// Returns the user as written on a commit, without the line's leading keyword:
    ///
    /// `{name} <{email}> {seconds} {+hhmm}`
    pub fn signature(&self) -> Result<String> {
        let timezone = self
            .timezone
            .format(TIMEZONE_FORMAT)
            .map_err(|e| Error::Formatting(format!("timezone was invalid: {e}")))?;
        Ok(format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.epoch_seconds()?,
            timezone
        ))
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitUserKind {
    Author,
    Committer,
}

impl Display for CommitUserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CommitUserKind::Author => AUTHOR_STR,
            CommitUserKind::Committer => COMMITTER_STR,
        })
    }
}
