//! Credential resolution and the process-wide facade.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::domain::error::CredentialError;
use crate::domain::models::{Credential, CredentialName};
use crate::domain::ports::CredentialSource;

use super::sources::{EmbeddedSource, EnvSource};

/// Resolved client identifier, fixed at first access.
static CLIENT_IDENTIFIER: OnceLock<Result<Credential, CredentialError>> = OnceLock::new();

/// Resolved client secret, fixed at first access.
static CLIENT_SECRET: OnceLock<Result<Credential, CredentialError>> = OnceLock::new();

/// Walks an ordered chain of provisioning sources until one yields a
/// usable value.
///
/// An empty value never counts: a source that hands one back is skipped
/// the same as a source with nothing, so callers cannot end up holding
/// an empty credential.
pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    /// Build a resolver over an explicit source chain.
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// The default chain: the environment first, then the constants
    /// embedded at build time.
    pub fn with_defaults() -> Self {
        Self::new(vec![Box::new(EnvSource), Box::new(EmbeddedSource)])
    }

    /// Resolve a credential by name.
    ///
    /// The first source with a non-empty value wins. Exhausting the chain
    /// is a `ConfigurationMissing` error; there is no fallback value.
    pub fn resolve(&self, name: CredentialName) -> Result<Credential, CredentialError> {
        for source in &self.sources {
            let Some(value) = source.resolve(name) else {
                continue;
            };
            if value.is_empty() {
                warn!(
                    credential = %name,
                    source = source.describe(),
                    "ignoring empty value"
                );
                continue;
            }
            debug!(
                credential = %name,
                source = source.describe(),
                "credential resolved"
            );
            return Ok(Credential::new(name, value));
        }
        Err(CredentialError::ConfigurationMissing { name })
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&'static str> = self.sources.iter().map(|s| s.describe()).collect();
        f.debug_struct("CredentialResolver")
            .field("sources", &kinds)
            .finish()
    }
}

/// Read-only access to the Google Sheets OAuth client credentials.
///
/// The first access per credential resolves it through the default chain
/// and fixes the outcome, success or failure alike, for the lifetime of
/// the process. Later calls hand back the same value or the same error
/// without consulting the sources again, so a mid-process environment
/// change cannot make the accessors contradict themselves.
pub struct GoogleSheets;

impl GoogleSheets {
    /// The OAuth client identifier.
    pub fn client_identifier() -> Result<&'static str, CredentialError> {
        Self::credential(CredentialName::ClientIdentifier).map(Credential::expose)
    }

    /// The OAuth client secret.
    ///
    /// Handle with care: the value must not end up in logs or on disk.
    pub fn client_secret() -> Result<&'static str, CredentialError> {
        Self::credential(CredentialName::ClientSecret).map(Credential::expose)
    }

    /// The resolved credential for a name.
    pub fn credential(name: CredentialName) -> Result<&'static Credential, CredentialError> {
        let cell = match name {
            CredentialName::ClientIdentifier => &CLIENT_IDENTIFIER,
            CredentialName::ClientSecret => &CLIENT_SECRET,
        };
        cell.get_or_init(|| CredentialResolver::with_defaults().resolve(name))
            .as_ref()
            .map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        kind: &'static str,
        identifier: Option<&'static str>,
        secret: Option<&'static str>,
    }

    impl CredentialSource for FixedSource {
        fn describe(&self) -> &'static str {
            self.kind
        }

        fn resolve(&self, name: CredentialName) -> Option<String> {
            match name {
                CredentialName::ClientIdentifier => self.identifier.map(str::to_string),
                CredentialName::ClientSecret => self.secret.map(str::to_string),
            }
        }
    }

    #[test]
    fn test_first_source_with_a_value_wins() {
        let resolver = CredentialResolver::new(vec![
            Box::new(FixedSource {
                kind: "primary",
                identifier: Some("first"),
                secret: None,
            }),
            Box::new(FixedSource {
                kind: "fallback",
                identifier: Some("second"),
                secret: Some("fallback-secret"),
            }),
        ]);

        let identifier = resolver.resolve(CredentialName::ClientIdentifier).unwrap();
        assert_eq!(identifier.expose(), "first");
        assert_eq!(identifier.name(), CredentialName::ClientIdentifier);

        // The secret is not provisioned by the primary source, so the
        // chain falls through independently of the identifier.
        let secret = resolver.resolve(CredentialName::ClientSecret).unwrap();
        assert_eq!(secret.expose(), "fallback-secret");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let resolver = CredentialResolver::new(vec![
            Box::new(FixedSource {
                kind: "primary",
                identifier: Some(""),
                secret: Some(""),
            }),
            Box::new(FixedSource {
                kind: "fallback",
                identifier: Some("usable"),
                secret: None,
            }),
        ]);

        let identifier = resolver.resolve(CredentialName::ClientIdentifier).unwrap();
        assert_eq!(identifier.expose(), "usable");

        // Both sources are useless for the secret: one empty, one absent.
        let err = resolver.resolve(CredentialName::ClientSecret).unwrap_err();
        assert_eq!(
            err,
            CredentialError::ConfigurationMissing {
                name: CredentialName::ClientSecret
            }
        );
    }

    #[test]
    fn test_exhausted_chain_is_configuration_missing() {
        let resolver = CredentialResolver::new(vec![]);
        let err = resolver
            .resolve(CredentialName::ClientIdentifier)
            .unwrap_err();
        assert_eq!(
            err,
            CredentialError::ConfigurationMissing {
                name: CredentialName::ClientIdentifier
            }
        );
    }

    #[test]
    fn test_environment_overrides_the_default_chain() {
        temp_env::with_var("GOOGLE_SHEETS_CLIENT_ID", Some("env-override"), || {
            let resolved = CredentialResolver::with_defaults()
                .resolve(CredentialName::ClientIdentifier)
                .unwrap();
            assert_eq!(resolved.expose(), "env-override");
        });
    }

    #[test]
    fn test_empty_environment_value_is_never_handed_out() {
        temp_env::with_var("GOOGLE_SHEETS_CLIENT_ID", Some(""), || {
            match CredentialResolver::with_defaults().resolve(CredentialName::ClientIdentifier) {
                // An embedded constant may legitimately take over here.
                Ok(credential) => assert!(!credential.expose().is_empty()),
                Err(CredentialError::ConfigurationMissing { name }) => {
                    assert_eq!(name, CredentialName::ClientIdentifier);
                }
            }
        });
    }

    #[test]
    fn test_debug_lists_source_kinds_only() {
        let rendered = format!("{:?}", CredentialResolver::with_defaults());
        assert!(rendered.contains("environment"));
        assert!(rendered.contains("embedded"));
    }
}
