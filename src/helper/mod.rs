//! External tag-creation helper
//!
//! The gate never creates tags itself; it delegates to an independently
//! invocable helper process. The helper receives its inputs as
//! RELEASEGATE_* environment variables and signals success solely through
//! its exit code.

pub mod context;
pub mod executor;
pub mod mock;

pub use context::HelperContext;
pub use executor::{ScriptHelper, TagHelper};
pub use mock::MockHelper;
