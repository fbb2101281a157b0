use regex::Regex;
use std::sync::OnceLock;

/// `scheme://host[...]`: host may hold Unicode letters, marks and digits.
const URL_FORM: &str = r"(?i:https?|ftp)://[\p{L}\p{M}\p{N}.-]+(?::[0-9]+)?(?:[/?#][-\p{L}\p{M}\p{N}()@:%_+.~#?&/=]*)?";

/// Bare `label(.label)+` whose last label is punycode, ASCII alphabetic or
/// Unicode letters, optionally followed by a path.
const BARE_FORM: &str = concat!(
    r"\b(?:[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}-]*[\p{L}\p{M}\p{N}])?\.)+",
    r"(?:xn--[a-zA-Z0-9-]+|[a-zA-Z]{2,}|[\p{L}\p{M}]{2,})\b",
    r"(?:/[-a-zA-Z0-9@:%_+.~#?&/=]*)?",
);

static FRAGMENT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn fragment_pattern() -> &'static Regex {
    FRAGMENT_PATTERN.get_or_init(|| {
        Regex::new(&format!("{URL_FORM}|{BARE_FORM}")).expect("fragment pattern compiles")
    })
}

/// A substring of source text that looks like a URL or host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCandidate<'a> {
    pub text: &'a str,
    pub fragment_id: &'a str,
}

/// Pulls URL-like and hostname-like substrings out of free text.
#[derive(Debug, Clone)]
pub struct FragmentTokenizer {
    pattern: Regex,
}

impl Default for FragmentTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentTokenizer {
    pub fn new() -> Self {
        Self {
            pattern: fragment_pattern().clone(),
        }
    }

    /// Matches in order of appearance; duplicates are kept.
    pub fn candidates<'a>(
        &'a self,
        fragment_id: &'a str,
        text: &'a str,
    ) -> impl Iterator<Item = RawCandidate<'a>> + 'a {
        self.pattern.find_iter(text).map(move |m| RawCandidate {
            text: m.as_str(),
            fragment_id,
        })
    }

    /// One candidate per non-blank line, for attachments that are already
    /// plain domain lists.
    pub fn line_candidates<'a>(
        &'a self,
        fragment_id: &'a str,
        text: &'a str,
    ) -> impl Iterator<Item = RawCandidate<'a>> + 'a {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(move |line| RawCandidate {
                text: line,
                fragment_id,
            })
    }
}
