use serde::{Deserialize, Serialize};

/// Why a raw candidate did not become a canonical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    Empty,
    TooLong,
    IsIpLiteral,
    IsExcludedSource,
    IdnConversionFailed,
    InvalidSyntax,
    InvalidTld,
}

impl RejectionReason {
    pub const ALL: [RejectionReason; 7] = [
        RejectionReason::Empty,
        RejectionReason::TooLong,
        RejectionReason::IsIpLiteral,
        RejectionReason::IsExcludedSource,
        RejectionReason::IdnConversionFailed,
        RejectionReason::InvalidSyntax,
        RejectionReason::InvalidTld,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            RejectionReason::Empty => "empty",
            RejectionReason::TooLong => "too_long",
            RejectionReason::IsIpLiteral => "is_ip_literal",
            RejectionReason::IsExcludedSource => "is_excluded_source",
            RejectionReason::IdnConversionFailed => "idn_conversion_failed",
            RejectionReason::InvalidSyntax => "invalid_syntax",
            RejectionReason::InvalidTld => "invalid_tld",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.to_str() == s)
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
