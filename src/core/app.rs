//! Application identity from Cargo.toml.
//!
//! Single source of truth for the plugin name, version, and vendor used across
//! the codebase.

/// Plugin name (from Cargo.toml `package.name`). Also the file-name prefix of
/// every generated path.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Plugin version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vendor / organization. Used in ProjectDirs.
pub const VENDOR: &str = "autoname";

/// Set this environment variable to show debug logging messages. Checked once
/// at startup.
pub const DEV_MODE_ENV: &str = "AUTONAME_DEV_MODE";
