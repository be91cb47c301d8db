//! Library components of the `a34` command-line tool.

pub mod logging;
