//! Domain errors for the AirSecrets credential surface.

use thiserror::Error;

use super::models::credential::CredentialName;

/// Errors raised by the credential accessor surface.
///
/// There is exactly one kind: a credential that was never provisioned.
/// The variant is `Clone` because the facade caches the outcome of the
/// first access and hands the same failure back on every later call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The requested credential has no provisioned value. Set the named
    /// environment variable at run time, or export it before building so
    /// the value is embedded in the binary.
    #[error("Google Sheets {} is not provisioned: set {} or embed it at build time", .name, .name.env_var())]
    ConfigurationMissing {
        /// Which of the two credentials is missing.
        name: CredentialName,
    },
}

/// Errors raised while parsing a `Localizable.strings` catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The parsed text contained no usable `"key" = "value";` entries.
    #[error("strings catalog does not have any key-value entries")]
    EmptyCatalog,
}

/// Errors raised while converting sheet rows into catalog entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SheetError {
    /// A data row was too short to carry a key and a translation.
    #[error("sheet row {index} has {cells} cell(s); expected at least a key and a value")]
    MalformedRow {
        /// Index of the offending row in the downloaded values, where
        /// the header row occupies index 0.
        index: usize,
        /// Number of cells the row actually carried.
        cells: usize,
    },
}
