//! Command implementations.

pub mod options;
pub mod platforms;
pub mod version;
