//! Credential names and the immutable credential value type.
//!
//! A [`Credential`] redacts itself in `Debug` and `Display`; the raw
//! string is only reachable through an explicit [`Credential::expose`]
//! call, so a credential cannot leak into logs by accident.

use std::fmt;

/// The two credentials this crate manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialName {
    /// Google Sheets API client identifier, i.e. the OAuth username.
    ClientIdentifier,
    /// Google Sheets API client secret, i.e. the OAuth password.
    ClientSecret,
}

impl CredentialName {
    /// Stable lowercase name used in messages and structured log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClientIdentifier => "client identifier",
            Self::ClientSecret => "client secret",
        }
    }

    /// Environment variable that provisions this credential, both at
    /// build time (embedding) and at run time (override).
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ClientIdentifier => "GOOGLE_SHEETS_CLIENT_ID",
            Self::ClientSecret => "GOOGLE_SHEETS_CLIENT_SECRET",
        }
    }
}

impl fmt::Display for CredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable named credential value.
///
/// The value is fixed at construction and cannot be changed afterwards;
/// the provider facade keeps one instance per name for the lifetime of
/// the process.
#[derive(Clone)]
pub struct Credential {
    name: CredentialName,
    value: String,
}

impl Credential {
    /// Wrap a resolved value under its name.
    pub fn new(name: CredentialName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Which credential this is.
    pub const fn name(&self) -> CredentialName {
        self.name
    }

    /// Access the underlying value.
    ///
    /// The caller is responsible for everything that happens to the
    /// string afterwards; this crate never logs, transmits, or stores it.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
