//! Build-time embedded credentials
//!
//! Credentials are injected at build time via environment variables.
//! This keeps secrets out of source control while release binaries can
//! still carry them.
//!
//! To build with embedded Google Sheets credentials:
//!   GOOGLE_SHEETS_CLIENT_ID="your-id" GOOGLE_SHEETS_CLIENT_SECRET="your-secret" cargo build --release
//!
//! For development, set the same variables in your shell instead; the
//! environment takes precedence over the embedded constants at run time.

/// The OAuth client identifier, injected at compile time
///
/// Set GOOGLE_SHEETS_CLIENT_ID before building to embed it.
pub const EMBEDDED_CLIENT_ID: Option<&str> = option_env!("GOOGLE_SHEETS_CLIENT_ID");

/// The OAuth client secret, injected at compile time
///
/// Set GOOGLE_SHEETS_CLIENT_SECRET before building to embed it.
///
/// Note: for tools distributed as binaries this isn't truly secret (it's
/// in the binary), but Google's OAuth flow requires it to be presented.
pub const EMBEDDED_CLIENT_SECRET: Option<&str> = option_env!("GOOGLE_SHEETS_CLIENT_SECRET");
