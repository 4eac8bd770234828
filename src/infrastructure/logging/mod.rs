//! Logging infrastructure
//!
//! The crate emits `tracing` events and leaves subscriber installation
//! to the embedding application. What lives here is the piece callers
//! need when they forward diagnostics elsewhere:
//! - Secret scrubbing

pub mod scrubbing;

pub use scrubbing::SecretScrubber;
