//! Handle extraction from profile text
//!
//! Finds names like `alice.lens` or `bob.eth` embedded anywhere in a display
//! name or biography. A name is a run of `[a-zA-Z0-9_]` immediately followed
//! by the suffix; the leftmost match wins.

use regex::Regex;
use std::sync::LazyLock;

/// The two name systems recognised in profile text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSuffix {
    /// Lens Protocol handle, e.g. `alice.lens`
    Lens,
    /// ENS name, e.g. `bob.eth`
    Ens,
}

impl HandleSuffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lens => ".lens",
            Self::Ens => ".eth",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Lens => &*LENS_RE,
            Self::Ens => &*ENS_RE,
        }
    }
}

static LENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_]+\.lens").unwrap());

static ENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_]+\.eth").unwrap());

/// Extract the first `<name><suffix>` occurring in `text`.
///
/// Absent or empty text yields `None`.
pub fn extract_handle(text: Option<&str>, suffix: HandleSuffix) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;
    suffix.regex().find(text).map(|m| m.as_str().to_string())
}

/// Try each field in order and return the first match found.
pub fn first_in<'a, I>(fields: I, suffix: HandleSuffix) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fields
        .into_iter()
        .find_map(|field| extract_handle(field, suffix))
}

pub fn parse_lens_name(text: Option<&str>) -> Option<String> {
    extract_handle(text, HandleSuffix::Lens)
}

pub fn parse_ens_name(text: Option<&str>) -> Option<String> {
    extract_handle(text, HandleSuffix::Ens)
}
