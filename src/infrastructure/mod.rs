//! Infrastructure layer module
//!
//! This module contains the concrete halves of the domain ports:
//! - Credential provisioning (embedded constants, environment, resolver, facade)
//! - Logging infrastructure (secret scrubbing for diagnostics)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod credentials;
pub mod logging;
