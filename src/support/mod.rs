//! Pre-resolved GitHub user classification.
//!
//! WTF looks the running user up against the project's contributor and sponsor
//! lists once per run (an external, network-backed lookup outside this crate) and
//! hands the result here as two independent flags. Neither flag implies the
//! other; both may be set at once.

/// Classification of the running user relative to the WTF project.
///
/// Immutable for the process lifetime; consumers take it by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitHubUser {
    /// The user has submitted code to the project.
    pub is_contributor: bool,
    /// The user financially supports the project.
    pub is_sponsor: bool,
}

impl GitHubUser {
    pub fn new(is_contributor: bool, is_sponsor: bool) -> Self {
        Self {
            is_contributor,
            is_sponsor,
        }
    }
}
