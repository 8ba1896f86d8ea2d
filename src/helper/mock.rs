use crate::error::{ReleaseGateError, Result};
use crate::helper::{HelperContext, TagHelper};
use std::sync::Mutex;

/// Mock helper that records invocations instead of spawning processes
pub struct MockHelper {
    calls: Mutex<Vec<HelperContext>>,
    fail: bool,
}

impl MockHelper {
    /// Create a helper that succeeds
    pub fn new() -> Self {
        MockHelper {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a helper that fails every invocation
    pub fn failing() -> Self {
        MockHelper {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Number of times the helper was invoked
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Contexts the helper was invoked with, in order
    pub fn calls(&self) -> Vec<HelperContext> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl TagHelper for MockHelper {
    fn tag_release(&self, context: &HelperContext) -> Result<()> {
        self.calls.lock().unwrap().push(context.clone());

        if self.fail {
            return Err(ReleaseGateError::helper("mock helper failure"));
        }
        Ok(())
    }
}
