pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod git;
pub mod helper;
pub mod ui;
pub mod version;

pub use error::{ReleaseGateError, Result};
