//! Domain layer for the AirSecrets credential surface
//!
//! This module contains the credential, catalog, and sheet models together
//! with the error types and the provisioning-source port. Everything here
//! is pure data and string handling; infrastructure implementations satisfy
//! the port defined in this layer.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{CatalogError, CredentialError, SheetError};
