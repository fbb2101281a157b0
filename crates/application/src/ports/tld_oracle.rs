/// Knows which host names are syntactically valid and which top-level
/// domains exist. Implementations are expected to be cheap to call; the
/// canonicalizer memoizes TLD answers per run on top of them.
pub trait TldOracle: Send + Sync {
    /// Generic dot-separated label grammar check on an ASCII host.
    fn is_valid_domain(&self, ascii: &str) -> bool;

    /// `tld` is the label after the last dot, without the dot.
    fn is_known_tld(&self, tld: &str) -> bool;
}
