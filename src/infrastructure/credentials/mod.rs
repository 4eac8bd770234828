//! Credentials management infrastructure
//!
//! Read-only provisioning of the Google Sheets OAuth client pair:
//! - Build-time embedded constants
//! - Environment variable override
//! - Process-wide read-only facade

pub mod embedded;
pub mod resolver;
pub mod sources;

pub use resolver::{CredentialResolver, GoogleSheets};
pub use sources::{EmbeddedSource, EnvSource};
