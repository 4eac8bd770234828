//! Domain models: credentials, strings catalogs, and sheet payloads.

pub mod credential;
pub mod sheet;
pub mod strings;

pub use credential::{Credential, CredentialName};
pub use sheet::{MajorDimension, Spreadsheet, ValueRange};
pub use strings::{LocalizedString, StringsCatalog};
