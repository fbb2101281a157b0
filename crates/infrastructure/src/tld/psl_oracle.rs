use blockdecree_application::ports::TldOracle;
use rustc_hash::FxHashSet;

const MAX_LABEL_LENGTH: usize = 63;
const MAX_HOST_LENGTH: usize = 253;

/// TLD oracle backed by the Public Suffix List compiled into the `psl`
/// crate, plus any TLDs added in configuration.
#[derive(Debug, Default, Clone)]
pub struct PslTldOracle {
    extra_tlds: FxHashSet<String>,
}

impl PslTldOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_tlds<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_tlds: tlds
                .into_iter()
                .map(|t| t.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl TldOracle for PslTldOracle {
    fn is_valid_domain(&self, ascii: &str) -> bool {
        if ascii.is_empty() || ascii.len() > MAX_HOST_LENGTH {
            return false;
        }
        let labels: Vec<&str> = ascii.split('.').collect();
        if labels.len() < 2 || !labels.iter().all(|l| is_ldh_label(l)) {
            return false;
        }
        // an all-numeric last label reads as an IPv4 address
        labels
            .last()
            .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
    }

    fn is_known_tld(&self, tld: &str) -> bool {
        let tld = tld.to_ascii_lowercase();
        if self.extra_tlds.contains(&tld) {
            return true;
        }
        if tld.is_empty() || tld.contains('.') {
            return false;
        }
        psl::suffix(tld.as_bytes()).is_some_and(|suffix| suffix.is_known())
    }
}

fn is_ldh_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
