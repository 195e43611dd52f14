// Host-facing helpers shared by the installer components.

// Raw platform identifier -> canonical `Platform`.
pub mod platform;
// Executable presence checks (`ToolProbe`).
pub mod executables;
