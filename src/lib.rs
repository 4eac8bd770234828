//! AirSecrets - Google Sheets credentials for the airstrings tools
//!
//! AirSecrets holds the OAuth client identifier and client secret for the
//! Google Sheets API and hands them out read-only for the lifetime of the
//! process, together with the offline plumbing those credentials serve:
//! the `Localizable.strings` catalog format and the Sheets v4 payload
//! models. The crate never talks to the network: transport, token
//! exchange, and storage belong to the caller.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential, catalog, and sheet models,
//!   error types, and the provisioning-source port
//! - **Infrastructure Layer** (`infrastructure`): concrete provisioning
//!   sources, the resolver behind the [`GoogleSheets`] facade, and secret
//!   scrubbing for diagnostics
//!
//! # Example
//!
//! ```no_run
//! use airsecrets::GoogleSheets;
//!
//! fn main() -> Result<(), airsecrets::CredentialError> {
//!     let client_id = GoogleSheets::client_identifier()?;
//!     let client_secret = GoogleSheets::client_secret()?;
//!     // Hand both to your OAuth client of choice.
//!     let _ = (client_id, client_secret);
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::{CatalogError, CredentialError, SheetError};
pub use domain::models::{
    Credential, CredentialName, LocalizedString, MajorDimension, Spreadsheet, StringsCatalog,
    ValueRange,
};
pub use domain::ports::CredentialSource;
pub use infrastructure::credentials::{
    CredentialResolver, EmbeddedSource, EnvSource, GoogleSheets,
};
pub use infrastructure::logging::SecretScrubber;
