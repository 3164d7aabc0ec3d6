//! Shared utilities: logging and colors

pub mod colors;
pub mod logger;
