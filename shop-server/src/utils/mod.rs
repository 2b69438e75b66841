//! Utility functions

pub mod logger;
pub mod time;
