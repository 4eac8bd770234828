use super::models::CredentialName;

/// Interface for one credential provisioning source
///
/// This trait defines the contract between the resolver and the places a
/// credential value can come from. Sources are consulted in order and the
/// first one that yields a value wins; a source never invents a value and
/// answers `None` when it has nothing for the requested name.
pub trait CredentialSource: Send + Sync {
    /// Short human-readable kind of this source, used in diagnostics
    fn describe(&self) -> &'static str;

    /// Look up the raw value for a credential name
    ///
    /// # Arguments
    /// * `name` - The credential to look up
    ///
    /// # Returns
    /// * `Some(value)` when the source has a value for this name
    /// * `None` when this source does not provision the name
    fn resolve(&self, name: CredentialName) -> Option<String>;
}
