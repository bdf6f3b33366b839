// Library surface for the binary and headless/integration tests.
// Rendering lives in the binary; keep this free of terminal setup.
pub mod app_dirs;
pub mod config;
pub mod history;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod sparkline;
pub mod timer;
pub mod util;
