use blockdecree_domain::TextPreparation;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
static ENUMERATED_URL: OnceLock<Regex> = OnceLock::new();

fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"))
}

fn enumerated_url() -> &'static Regex {
    ENUMERATED_URL
        .get_or_init(|| Regex::new(r"\d+\s*\.\s*http").expect("enumeration pattern compiles"))
}

/// Applies a document's preparation strategy before tokenizing.
///
/// `Lines` leaves the text untouched; the extractor splits it per line.
pub fn prepare(preparation: TextPreparation, text: &str) -> Cow<'_, str> {
    match preparation {
        TextPreparation::Raw | TextPreparation::Lines => Cow::Borrowed(text),
        TextPreparation::JoinLines => join_lines(text),
        TextPreparation::Flatten => Cow::Owned(flatten(text)),
    }
}

fn join_lines(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Line breaks become spaces, whitespace runs collapse, and list numbers in
/// front of URLs (`12. http…`) are dropped.
fn flatten(text: &str) -> String {
    let collapsed = whitespace_run().replace_all(text, " ");
    enumerated_url()
        .replace_all(&collapsed, " http")
        .into_owned()
}
