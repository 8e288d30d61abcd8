//! git::parse
//!
//! Decoding of `git` stdout into typed values.
//!
//! Every function here is pure: text in, values out. Lines that do not
//! decode are skipped, so one odd line never discards a whole listing.
//! The binary's output is not a stable contract; where a single value is
//! expected and cannot be decoded, the result is `None` and the caller
//! turns that into [`GitError::UnexpectedOutput`](super::GitError).

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::tags::Tag;
use crate::core::types::{Branch, Hash, Message, RemoteName, Revision, TagName, Version};

static DETACHED_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(HEAD detached at (?<hash>[a-z0-9]{7,40})\)").expect("detached pattern is valid")
});

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"version (?<major>\d+)\.(?<minor>\d+)\.(?<bugfix>\d+)")
        .expect("version pattern is valid")
});

/// Field separator in the tag listing format.
pub const TAG_FIELD_SEPARATOR: &str = "|||";

/// `--format` argument producing the records [`tags`] expects.
pub const TAG_FORMAT: &str = "%(refname:strip=2)|||%(subject)|||%(creatordate:rfc2822)";

const INIT_BANNERS: [&str; 2] = [
    "Initialized empty Git repository",
    "Reinitialized existing Git repository",
];

/// Branches from `git branch --no-color`.
///
/// The detached-HEAD pseudo entry is skipped.
pub fn local_branches(output: &str) -> Vec<Branch> {
    branch_lines(output, |line| line.contains("HEAD detached"))
}

/// Branches from `git branch -r --no-color`.
///
/// The `origin/HEAD -> origin/...` alias line is skipped.
pub fn remote_branches(output: &str) -> Vec<Branch> {
    branch_lines(output, |line| line.contains("-> origin/"))
}

fn branch_lines(output: &str, skip: impl Fn(&str) -> bool) -> Vec<Branch> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !skip(line))
        .filter_map(strip_marker)
        .filter_map(|name| Branch::new(name).ok())
        .collect()
}

/// Drop the two-column marker (`* ` or two spaces) git prints before names.
fn strip_marker(line: &str) -> Option<&str> {
    line.get(2..)
}

/// Current revision from `git branch --no-color`.
///
/// A detached HEAD yields the hash, otherwise the checked-out branch.
pub fn head(output: &str) -> Option<Revision> {
    let line = output.lines().find(|line| line.starts_with("* "))?;

    if let Some(captures) = DETACHED_HEAD.captures(line) {
        return Hash::new(&captures["hash"]).ok().map(Revision::Hash);
    }

    strip_marker(line)
        .and_then(|name| Branch::new(name).ok())
        .map(Revision::Branch)
}

/// Remote names from `git remote`, one per line.
pub fn remotes(output: &str) -> Vec<RemoteName> {
    output
        .lines()
        .filter_map(|line| RemoteName::new(line).ok())
        .collect()
}

/// One line of the tag listing, split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagRecord<'a> {
    name: &'a str,
    subject: &'a str,
    created: &'a str,
}

impl<'a> TagRecord<'a> {
    /// Split a line into exactly three fields; any other count is rejected.
    fn split(line: &'a str) -> Option<Self> {
        let fields: Vec<&str> = line.split(TAG_FIELD_SEPARATOR).collect();
        match *fields.as_slice() {
            [name, subject, created] => Some(Self {
                name,
                subject,
                created,
            }),
            _ => None,
        }
    }

    fn decode(self) -> Option<Tag> {
        let name = TagName::new(self.name).ok()?;
        let message = Message::new(self.subject).ok()?;
        let created = parse_rfc2822(self.created)?;
        Some(Tag::new(name, message, created))
    }
}

/// Tags from `git tag --list --format=<TAG_FORMAT>`.
///
/// A record is kept only if its name, subject and date all decode.
pub fn tags(output: &str) -> Vec<Tag> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(TagRecord::split)
        .filter_map(TagRecord::decode)
        .collect()
}

fn parse_rfc2822(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(text.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Version from the `git --version` banner.
pub fn version(output: &str) -> Option<Version> {
    let captures = VERSION.captures(output)?;
    let component = |name: &str| captures[name].parse::<u32>().ok();

    Some(Version::new(
        component("major")?,
        component("minor")?,
        component("bugfix")?,
    ))
}

/// Whether `git init` printed one of its known success banners.
pub fn is_init_banner(output: &str) -> bool {
    INIT_BANNERS.iter().any(|banner| output.contains(banner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DETACHED_LISTING: &str = "* (HEAD detached at aa4a336)\n  develop\n  foo-bar-baz\n  master\n";

    fn names(branches: &[Branch]) -> Vec<&str> {
        branches.iter().map(Branch::as_str).collect()
    }

    #[test]
    fn local_branches_skip_detached_head() {
        let branches = local_branches(DETACHED_LISTING);
        assert_eq!(names(&branches), ["develop", "foo-bar-baz", "master"]);
    }

    #[test]
    fn local_branches_strip_current_marker() {
        let branches = local_branches("* develop\n  master\n\n");
        assert_eq!(names(&branches), ["develop", "master"]);
    }

    #[test]
    fn local_branches_drop_invalid_lines() {
        let branches = local_branches("  ok\n  not valid\n* (no branch, rebasing ok)\n");
        assert_eq!(names(&branches), ["ok"]);
    }

    #[test]
    fn remote_branches_skip_alias() {
        let branches =
            remote_branches("  origin/HEAD -> origin/master\n  origin/develop\n  origin/master\n");
        assert_eq!(names(&branches), ["origin/develop", "origin/master"]);
    }

    #[test]
    fn empty_listing() {
        assert!(local_branches("").is_empty());
        assert!(remote_branches("\n").is_empty());
    }

    #[test]
    fn head_detached() {
        assert_eq!(
            head(DETACHED_LISTING),
            Some(Revision::Hash(Hash::new("aa4a336").unwrap()))
        );
    }

    #[test]
    fn head_on_branch() {
        assert_eq!(
            head("* develop\n  master"),
            Some(Revision::Branch(Branch::new("develop").unwrap()))
        );
        assert_eq!(
            head("  develop\n* master\n"),
            Some(Revision::Branch(Branch::new("master").unwrap()))
        );
    }

    #[test]
    fn head_missing_or_unparseable() {
        assert_eq!(head(""), None);
        assert_eq!(head("  develop\n  master\n"), None);
        assert_eq!(head("* (HEAD detached from aa4a336)\n"), None);
    }

    #[test]
    fn remotes_one_per_line() {
        let names: Vec<_> = remotes("origin\nupstream\n\nbad name\n")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, ["origin", "upstream"]);
    }

    #[test]
    fn tag_record_normalized_to_utc() {
        let tags = tags("1.0.0|||first release|||Sat, 16 Mar 2019 12:09:24 +0100\n");

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name().as_str(), "1.0.0");
        assert_eq!(tags[0].message().as_str(), "first release");
        assert_eq!(
            *tags[0].created(),
            Utc.with_ymd_and_hms(2019, 3, 16, 11, 9, 24).unwrap()
        );
    }

    #[test]
    fn malformed_tag_records_dropped() {
        let output = "\
1.0.0|||first release|||Sat, 16 Mar 2019 12:09:24 +0100

only-two|||fields
four|||fields|||Sat, 16 Mar 2019 12:09:24 +0100|||extra
|||no name|||Sat, 16 Mar 2019 12:09:24 +0100
no-subject||| |||Sat, 16 Mar 2019 12:09:24 +0100
bad-date|||subject|||yesterday
2.0.0|||second|||Sun, 17 Mar 2019 08:00:00 +0000
";
        let names: Vec<_> = tags(output)
            .iter()
            .map(|tag| tag.name().to_string())
            .collect();
        assert_eq!(names, ["1.0.0", "2.0.0"]);
    }

    #[test]
    fn version_banner() {
        assert_eq!(version("git version 2.39.1"), Some(Version::new(2, 39, 1)));
        assert_eq!(
            version("git version 2.39.3 (Apple Git-146)\n"),
            Some(Version::new(2, 39, 3))
        );
        assert_eq!(version("git version 2.x"), None);
        assert_eq!(version(""), None);
    }

    #[test]
    fn init_banners() {
        assert!(is_init_banner(
            "Initialized empty Git repository in /tmp/foo/.git/\n"
        ));
        assert!(is_init_banner(
            "Reinitialized existing Git repository in /tmp/foo/.git/\n"
        ));
        assert!(!is_init_banner("Dépôt Git vide initialisé dans /tmp/foo/.git/\n"));
        assert!(!is_init_banner(""));
    }
}
