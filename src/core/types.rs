//! core::types
//!
//! Strong types for the values handed to and parsed from `git`.
//!
//! # Types
//!
//! - [`Branch`] - Branch name as accepted on the command line
//! - [`Hash`] - Abbreviated or full commit hash
//! - [`Revision`] - Either a branch or a hash
//! - [`RemoteName`] - Name of a configured remote
//! - [`RemoteUrl`] - Location of a remote (URL or `user@host:path.git`)
//! - [`Message`] - Commit or tag annotation text
//! - [`TagName`] - Tag name
//! - [`Version`] - Version of the git binary
//!
//! # Validation
//!
//! Every type validates at construction and keeps the original input as its
//! canonical form. The string a value displays is exactly the string that
//! ends up as a single argument on the command line.
//!
//! # Examples
//!
//! ```
//! use gitwrap::core::types::{Branch, Hash, Message};
//!
//! let branch = Branch::new("feature/my-branch").unwrap();
//! assert_eq!(branch.as_str(), "feature/my-branch");
//!
//! assert!(Branch::new("has space").is_err());
//! assert!(Hash::new("NOT-A-HASH").is_err());
//! assert!(Message::new("   ").is_err());
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static BRANCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^[\w\-/.]+$").expect("branch pattern is valid"));

static HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{7,40}$").expect("hash pattern is valid"));

static SCP_LIKE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+(\.\S+)?:\S+(/\S+)?\.git$").expect("scp-like pattern is valid")
});

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0:?}")]
    InvalidBranch(String),

    #[error("invalid commit hash: {0:?}")]
    InvalidHash(String),

    #[error("invalid remote name: {0:?}")]
    InvalidRemoteName(String),

    #[error("invalid remote url: {0:?}")]
    InvalidRemoteUrl(String),

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("tag name cannot be empty")]
    EmptyTagName,

    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

/// Implements the string conversions shared by every string-backed type.
macro_rules! string_value {
    ($ty:ident) => {
        impl $ty {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = TypeError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// A branch name.
///
/// Accepts word characters, `-`, `/` and `.`; anything else (spaces,
/// quotes, shell metacharacters) is rejected. This is intentionally looser
/// than `git check-ref-format`: the binary has the final say on refname
/// rules, this type only guarantees the value is a single argument.
///
/// A leading `-` is accepted, and operations pass the name where git also
/// parses options, so `-d` or `--list` reach git as flags. Callers taking
/// names from untrusted input should reject a leading `-` themselves.
///
/// # Example
///
/// ```
/// use gitwrap::core::types::Branch;
///
/// let name = Branch::new("origin/feature-1.2").unwrap();
/// assert_eq!(name.to_string(), "origin/feature-1.2");
///
/// assert!(Branch::new("").is_err());
/// assert!(Branch::new("foo bar").is_err());
/// assert!(Branch::new("it's").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Branch(String);

impl Branch {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranch` if the name contains characters
    /// outside `[\w\-/.]` or is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if !BRANCH_PATTERN.is_match(&name) {
            return Err(TypeError::InvalidBranch(name));
        }
        Ok(Self(name))
    }
}

string_value!(Branch);

/// A commit hash, full (40 chars) or abbreviated (at least 7 chars).
///
/// Unlike branch names, hashes are not case-folded: `git` prints them in
/// lowercase and uppercase input is rejected.
///
/// # Example
///
/// ```
/// use gitwrap::core::types::Hash;
///
/// assert!(Hash::new("aa4a336").is_ok());
/// assert!(Hash::new("aa4a33").is_err());
/// assert!(Hash::new("AA4A336").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hash(String);

impl Hash {
    /// Create a new validated hash.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidHash` unless the input is 7 to 40
    /// characters of `[a-z0-9]`.
    pub fn new(hash: impl Into<String>) -> Result<Self, TypeError> {
        let hash = hash.into();
        if !HASH_PATTERN.is_match(&hash) {
            return Err(TypeError::InvalidHash(hash));
        }
        Ok(Self(hash))
    }

    /// Get an abbreviated form of the hash.
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }
}

string_value!(Hash);

/// Anything that resolves to a single commit.
///
/// # Example
///
/// ```
/// use gitwrap::core::types::Revision;
///
/// let rev: Revision = "develop".parse().unwrap();
/// assert!(rev.as_branch().is_some());
///
/// let rev: Revision = "aa4a336".parse().unwrap();
/// assert!(rev.as_hash().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Revision {
    /// A branch name
    Branch(Branch),
    /// A commit hash
    Hash(Hash),
}

impl Revision {
    /// Get the revision as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Revision::Branch(branch) => branch.as_str(),
            Revision::Hash(hash) => hash.as_str(),
        }
    }

    /// The branch, if this revision names one.
    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Revision::Branch(branch) => Some(branch),
            Revision::Hash(_) => None,
        }
    }

    /// The hash, if this revision is one.
    pub fn as_hash(&self) -> Option<&Hash> {
        match self {
            Revision::Hash(hash) => Some(hash),
            Revision::Branch(_) => None,
        }
    }
}

impl From<Branch> for Revision {
    fn from(branch: Branch) -> Self {
        Revision::Branch(branch)
    }
}

impl From<Hash> for Revision {
    fn from(hash: Hash) -> Self {
        Revision::Hash(hash)
    }
}

/// Parses free text typed by a user.
///
/// Text made only of 7 to 40 lowercase hex digits is taken as a hash; the
/// hash grammar alone would also swallow names like `develop`, so
/// everything else is taken as a branch.
impl FromStr for Revision {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let looks_like_hex = (7..=40).contains(&s.len())
            && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if looks_like_hex {
            Hash::new(s).map(Revision::Hash)
        } else {
            Branch::new(s).map(Revision::Branch)
        }
    }
}

impl TryFrom<String> for Revision {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Revision> for String {
    fn from(revision: Revision) -> Self {
        match revision {
            Revision::Branch(branch) => branch.into(),
            Revision::Hash(hash) => hash.into(),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a configured remote (e.g. `origin`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RemoteName(String);

impl RemoteName {
    /// Create a new validated remote name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRemoteName` for the same inputs
    /// [`Branch::new`] rejects.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if !BRANCH_PATTERN.is_match(&name) {
            return Err(TypeError::InvalidRemoteName(name));
        }
        Ok(Self(name))
    }
}

string_value!(RemoteName);

/// Location of a remote repository.
///
/// Any valid URL or URL reference (`https://...`, `ssh://...`,
/// `file:///...`, `/local/path`) or the SCP-like form `user@host:path.git`.
///
/// # Example
///
/// ```
/// use gitwrap::core::types::RemoteUrl;
///
/// assert!(RemoteUrl::new("https://example.com/project.git").is_ok());
/// assert!(RemoteUrl::new("git@github.com:owner/project.git").is_ok());
/// assert!(RemoteUrl::new("/tmp/sub/dir").is_ok());
/// assert!(RemoteUrl::new("\u{1}").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RemoteUrl(String);

impl RemoteUrl {
    /// Create a new validated remote url.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRemoteUrl` if the input is neither a URL
    /// reference nor in SCP-like form.
    pub fn new(url: impl Into<String>) -> Result<Self, TypeError> {
        let url = url.into();
        if Self::is_url_reference(&url) || SCP_LIKE_PATTERN.is_match(&url) {
            Ok(Self(url))
        } else {
            Err(TypeError::InvalidRemoteUrl(url))
        }
    }

    fn is_url_reference(url: &str) -> bool {
        if url.is_empty() || url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }
        if url::Url::parse(url).is_ok() {
            return true;
        }
        // Relative references ("/tmp/repo", "../repo") resolve against a base.
        url::Url::parse("file:///")
            .and_then(|base| base.join(url))
            .is_ok()
    }
}

string_value!(RemoteUrl);

/// Commit or tag annotation text.
///
/// Must contain something other than whitespace. The text is stored as
/// given, leading and trailing whitespace included.
///
/// # Example
///
/// ```
/// use gitwrap::core::types::Message;
///
/// let message = Message::new("  it's done\n").unwrap();
/// assert_eq!(message.as_str(), "  it's done\n");
/// assert!(Message::new(" \t\n").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Message(String);

impl Message {
    /// Create a new validated message.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::EmptyMessage` if the message is blank.
    pub fn new(message: impl Into<String>) -> Result<Self, TypeError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(TypeError::EmptyMessage);
        }
        Ok(Self(message))
    }
}

string_value!(Message);

/// Tag name.
///
/// Any non-blank text is accepted. As with [`Branch`], a name starting
/// with `-` reaches git in option position and is read as a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Create a new validated tag name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::EmptyTagName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TypeError::EmptyTagName);
        }
        Ok(Self(name))
    }
}

string_value!(TagName);

/// Version of the git binary (`major.minor.bugfix`).
///
/// # Example
///
/// ```
/// use gitwrap::core::types::Version;
///
/// let version = Version::new(2, 39, 1);
/// assert_eq!(version.to_string(), "2.39.1");
/// assert!(version > Version::new(2, 9, 5));
///
/// assert!(Version::try_from((2, -1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    major: u32,
    minor: u32,
    bugfix: u32,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u32, minor: u32, bugfix: u32) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn bugfix(&self) -> u32 {
        self.bugfix
    }
}

impl TryFrom<(i64, i64, i64)> for Version {
    type Error = TypeError;

    fn try_from((major, minor, bugfix): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let component = |value: i64| {
            u32::try_from(value)
                .map_err(|_| TypeError::InvalidVersion(format!("{major}.{minor}.{bugfix}")))
        };
        Ok(Self::new(
            component(major)?,
            component(minor)?,
            component(bugfix)?,
        ))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod branch {
        use super::*;

        #[test]
        fn valid_branch_names() {
            assert!(Branch::new("master").is_ok());
            assert!(Branch::new("feature/foo").is_ok());
            assert!(Branch::new("fix-123").is_ok());
            assert!(Branch::new("with.dot").is_ok());
            assert!(Branch::new("under_score").is_ok());
            assert!(Branch::new("origin/HEAD").is_ok());
        }

        #[test]
        fn empty_name_rejected() {
            assert_eq!(
                Branch::new(""),
                Err(TypeError::InvalidBranch(String::new()))
            );
        }

        #[test]
        fn shell_characters_rejected() {
            for name in ["has space", "it's", "a;b", "$(x)", "a\"b", "tab\there", "new\nline"] {
                assert!(Branch::new(name).is_err(), "{name:?} should be rejected");
            }
        }

        #[test]
        fn non_ascii_word_characters_rejected() {
            assert!(Branch::new("café").is_err());
        }

        #[test]
        fn keeps_input_verbatim() {
            let branch = Branch::new("Feature/X.1").unwrap();
            assert_eq!(String::from(branch), "Feature/X.1");
        }
    }

    mod hash {
        use super::*;

        #[test]
        fn length_bounds() {
            assert!(Hash::new("a".repeat(6)).is_err());
            assert!(Hash::new("a".repeat(7)).is_ok());
            assert!(Hash::new("a".repeat(40)).is_ok());
            assert!(Hash::new("a".repeat(41)).is_err());
        }

        #[test]
        fn uppercase_rejected() {
            assert!(Hash::new("ABCDEF1").is_err());
        }

        #[test]
        fn short_form() {
            let hash = Hash::new("aa4a336ff0").unwrap();
            assert_eq!(hash.short(7), "aa4a336");
            assert_eq!(hash.short(100), "aa4a336ff0");
        }
    }

    mod revision {
        use super::*;

        #[test]
        fn hex_text_parses_as_hash() {
            let rev: Revision = "aa4a336".parse().unwrap();
            assert_eq!(rev, Revision::Hash(Hash::new("aa4a336").unwrap()));
        }

        #[test]
        fn word_text_parses_as_branch() {
            let rev: Revision = "develop".parse().unwrap();
            assert_eq!(rev, Revision::Branch(Branch::new("develop").unwrap()));
        }

        #[test]
        fn invalid_text_rejected() {
            assert!("not a branch".parse::<Revision>().is_err());
        }

        #[test]
        fn serde_as_plain_string() {
            let rev = Revision::from(Branch::new("main").unwrap());
            assert_eq!(serde_json::to_string(&rev).unwrap(), "\"main\"");
        }
    }

    mod remote {
        use super::*;

        #[test]
        fn remote_names() {
            assert!(RemoteName::new("origin").is_ok());
            assert!(RemoteName::new("upstream-2").is_ok());
            assert!(RemoteName::new("").is_err());
            assert!(RemoteName::new("two words").is_err());
        }

        #[test]
        fn accepted_url_formats() {
            for url in [
                "/tmp",
                "/tmp/sub/dir",
                "/tmp/sub/dir/project.git",
                "file:///tmp/sub/dir",
                "file:///tmp/sub/dir/project.git",
                "https://example.com/gitproject.git",
                "ssh://user@server/project.git",
                "user@server:project.git",
            ] {
                let parsed = RemoteUrl::new(url).unwrap();
                assert_eq!(parsed.as_str(), url);
            }
        }

        #[test]
        fn control_characters_rejected() {
            for url in ["\x01", "\x02", "\x03", "", "has space"] {
                assert!(RemoteUrl::new(url).is_err(), "{url:?} should be rejected");
            }
        }
    }

    mod message {
        use super::*;

        #[test]
        fn blank_rejected() {
            assert_eq!(Message::new(""), Err(TypeError::EmptyMessage));
            assert_eq!(Message::new(" \n\t "), Err(TypeError::EmptyMessage));
            assert_eq!(TagName::new("   "), Err(TypeError::EmptyTagName));
        }

        #[test]
        fn stored_untrimmed() {
            assert_eq!(Message::new(" watev ").unwrap().as_str(), " watev ");
            assert_eq!(TagName::new(" 1.0.0").unwrap().as_str(), " 1.0.0");
        }
    }

    mod version {
        use super::*;

        #[test]
        fn accessors() {
            let version = Version::new(2, 39, 1);
            assert_eq!(version.major(), 2);
            assert_eq!(version.minor(), 39);
            assert_eq!(version.bugfix(), 1);
        }

        #[test]
        fn negative_components_rejected() {
            assert!(Version::try_from((-1, 0, 0)).is_err());
            assert!(Version::try_from((0, -1, 0)).is_err());
            assert!(Version::try_from((0, 0, -1)).is_err());
            assert_eq!(Version::try_from((0, 0, 0)), Ok(Version::new(0, 0, 0)));
        }

        #[test]
        fn ordering_is_numeric() {
            assert!(Version::new(2, 10, 0) > Version::new(2, 9, 9));
        }
    }
}
