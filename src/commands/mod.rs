// Application entry points.

// Resolves the run configuration and installs every catalog dependency.
pub mod install;
