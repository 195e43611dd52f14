// Data model shared by the installer components.

// Host platform and package-manager tags.
pub mod platform;
// Build mode and Windows toolchain enums with their vendor tokens.
pub mod toolchain;
// Catalog record for one library.
pub mod dependency;
// Structured commands and install plans.
pub mod plan;
// Per-command and per-dependency execution results.
pub mod execution;
// Optional YAML settings file.
pub mod settings;
