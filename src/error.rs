// src/error.rs
//! Error taxonomy shared by every league adapter.
//!
//! - `InvalidParameter` / `InvalidFlag`: the caller passed something outside the
//!   league's enumerated domain. Always recoverable by re-prompting.
//! - `Fetch`: network, HTTP status, timeout or "no table in the page".
//!   Recoverable by retrying the whole operation later.
//! - `SchemaMismatch`: the page layout matches none of the known rule sets.
//!   Fatal for this request.
//!
//! The `Display` text is what the GUI/CLI show to the user, verbatim.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{value} is not a valid {field}. Try one of: {}", .allowed.join(", "))]
    InvalidParameter {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{value} is not a valid {field}: must be true or false")]
    InvalidFlag { field: &'static str, value: String },

    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{operation} table matches no known layout (tried {}); headers: {}", .tried.join(", "), .headers.join(" | "))]
    SchemaMismatch {
        operation: &'static str,
        tried: Vec<&'static str>,
        headers: Vec<String>,
    },
}

impl Error {
    pub fn invalid(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Error::InvalidParameter {
            field,
            value: s!(value),
            allowed: allowed.iter().map(|a| s!(*a)).collect(),
        }
    }

    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Error::Fetch { url: s!(url), reason: reason.to_string() }
    }

    /// Parameter and fetch errors can be fixed by the user (new input / retry later).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::SchemaMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
