//! Process-wide infrastructure shared by the CLI and tests.

pub mod logging;
