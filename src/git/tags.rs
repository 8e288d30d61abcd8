//! git::tags
//!
//! Tag listing, creation and publishing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::binary::Binary;
use super::error::Result;
use super::parse;
use crate::core::types::{Message, TagName};

/// A tag as listed by `git tag`.
///
/// `message` is the tag's subject: the annotation for annotated tags, the
/// tagged commit's subject for lightweight ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: TagName,
    message: Message,
    created: DateTime<Utc>,
}

impl Tag {
    pub fn new(name: TagName, message: Message, created: DateTime<Utc>) -> Self {
        Self {
            name,
            message,
            created,
        }
    }

    pub fn name(&self) -> &TagName {
        &self.name
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }
}

/// Tag operations of a repository.
#[derive(Debug, Clone)]
pub struct Tags {
    binary: Binary,
}

impl Tags {
    pub(crate) fn new(binary: Binary) -> Self {
        Self { binary }
    }

    /// Push all tags to the default remote (`git push --tags`).
    pub fn push(&self) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("push")
                    .with_option("tags"),
            )
            .map(drop)
    }

    /// Create a tag at HEAD.
    ///
    /// With a message the tag is annotated (`-a -m`), otherwise lightweight.
    pub fn add(&self, name: &TagName, message: Option<&Message>) -> Result<()> {
        let mut command = self
            .binary
            .command()
            .with_argument("tag")
            .with_argument(name.as_str());
        if let Some(message) = message {
            command = command
                .with_short_option('a')
                .with_short_option('m')
                .with_argument(message.as_str());
        }
        self.binary.invoke(command).map(drop)
    }

    /// Create a GPG-signed annotated tag at HEAD.
    pub fn sign(&self, name: &TagName, message: &Message) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("tag")
                    .with_short_option('s')
                    .with_short_option('a')
                    .with_argument(name.as_str())
                    .with_short_option('m')
                    .with_argument(message.as_str()),
            )
            .map(drop)
    }

    /// Every tag whose record decodes, in git's listing order.
    pub fn all(&self) -> Result<Vec<Tag>> {
        let output = self.binary.invoke(
            self.binary
                .command()
                .with_argument("tag")
                .with_option("list")
                .with_option_value("format", parse::TAG_FORMAT),
        )?;
        Ok(parse::tags(output.stdout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{Command, GitError, MockProcesses};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn tags(mock: &MockProcesses) -> Tags {
        Tags::new(Binary::new(Arc::new(mock.clone()), Command::new("git")))
    }

    #[test]
    fn all_requests_format_and_parses() {
        let mock = MockProcesses::new();
        mock.push_success(
            "0.1.0|||chore: release 0.1.0|||Sat, 16 Mar 2019 11:09:24 +0000\n\
             broken line without separators\n",
        );

        let listed = tags(&mock).all().unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name().as_str(), "0.1.0");
        assert_eq!(listed[0].message().as_str(), "chore: release 0.1.0");
        assert_eq!(
            *listed[0].created(),
            Utc.with_ymd_and_hms(2019, 3, 16, 11, 9, 24).unwrap()
        );
        assert_eq!(
            mock.executed()[0].arguments(),
            ["tag", "--list", &format!("--format={}", parse::TAG_FORMAT)]
        );
    }

    #[test]
    fn add_lightweight_and_annotated() {
        let mock = MockProcesses::new();
        let tags = tags(&mock);
        let name = TagName::new("v1.0.0").unwrap();

        tags.add(&name, None).unwrap();
        tags.add(&name, Some(&Message::new("First release").unwrap()))
            .unwrap();

        let lines: Vec<_> = mock.executed().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            ["git tag v1.0.0", "git tag v1.0.0 -a -m 'First release'"]
        );
    }

    #[test]
    fn leading_dash_name_is_passed_verbatim() {
        let mock = MockProcesses::new();

        tags(&mock)
            .add(&TagName::new("--list").unwrap(), None)
            .unwrap();

        assert_eq!(mock.executed()[0].arguments(), ["tag", "--list"]);
    }

    #[test]
    fn sign_and_push() {
        let mock = MockProcesses::new();
        let tags = tags(&mock);

        tags.sign(
            &TagName::new("v2").unwrap(),
            &Message::new("signed").unwrap(),
        )
        .unwrap();
        tags.push().unwrap();

        let lines: Vec<_> = mock.executed().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["git tag -s -a v2 -m signed", "git push --tags"]);
    }

    #[test]
    fn listing_failure_propagates() {
        let mock = MockProcesses::new();
        mock.push_failure("fatal: not a git repository");

        assert!(matches!(
            tags(&mock).all().unwrap_err(),
            GitError::CommandFailed { .. }
        ));
    }
}
