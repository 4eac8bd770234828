//! Concrete credential provisioning sources.

use std::env;

use tracing::warn;

use crate::domain::models::CredentialName;
use crate::domain::ports::CredentialSource;

use super::embedded;

/// Reads credentials from the process environment.
///
/// This is the override source: setting a credential's variable at run
/// time takes precedence over whatever was embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl CredentialSource for EnvSource {
    fn describe(&self) -> &'static str {
        "environment"
    }

    fn resolve(&self, name: CredentialName) -> Option<String> {
        match env::var(name.env_var()) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                warn!(
                    var = name.env_var(),
                    "environment value is not valid Unicode, treating as unprovisioned"
                );
                None
            }
        }
    }
}

/// Serves the constants captured from the build environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CredentialSource for EmbeddedSource {
    fn describe(&self) -> &'static str {
        "embedded"
    }

    fn resolve(&self, name: CredentialName) -> Option<String> {
        let embedded = match name {
            CredentialName::ClientIdentifier => embedded::EMBEDDED_CLIENT_ID,
            CredentialName::ClientSecret => embedded::EMBEDDED_CLIENT_SECRET,
        };
        embedded.map(str::to_string)
    }
}
