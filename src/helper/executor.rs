use crate::config::HelperConfig;
use crate::error::{ReleaseGateError, Result};
use crate::helper::HelperContext;
use std::path::Path;
use std::process::Command;

/// Seam for tag creation, so gate logic can be exercised without spawning
/// processes. The production implementation is [ScriptHelper].
pub trait TagHelper {
    /// Create the tag described by `context`
    ///
    /// # Returns
    /// * `Ok(())` if the helper succeeds
    /// * `Err` with the fixed tagging-failure message otherwise
    fn tag_release(&self, context: &HelperContext) -> Result<()>;
}

/// Runs the configured external helper script
pub struct ScriptHelper {
    command: String,
    args: Vec<String>,
}

impl ScriptHelper {
    /// Build a helper from configuration
    pub fn new(config: &HelperConfig) -> Self {
        ScriptHelper {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

impl TagHelper for ScriptHelper {
    /// Execute the helper with the given context
    ///
    /// The helper is executed with environment variables set from the
    /// context. Exit code 0 means the tag was created; any non-zero exit
    /// code is a tagging failure. Captured output of a failed helper is
    /// logged at debug level.
    fn tag_release(&self, context: &HelperContext) -> Result<()> {
        let path = Path::new(&self.command);

        if !path.exists() {
            log::debug!("helper script not found: {}", self.command);
            return Err(ReleaseGateError::helper(format!(
                "Helper script not found: {}",
                self.command
            )));
        }

        if !path.is_file() {
            log::debug!("helper path is not a file: {}", self.command);
            return Err(ReleaseGateError::helper(format!(
                "Helper path is not a file: {}",
                self.command
            )));
        }

        let mut cmd = Command::new(path);
        cmd.args(&self.args);

        for (key, value) in context.to_env_vars() {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| {
            log::debug!("failed to execute helper {}: {}", self.command, e);
            ReleaseGateError::helper(format!(
                "Failed to execute helper {}: {}",
                self.command, e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            log::debug!(
                "helper {} failed with exit code {}\nstdout: {}\nstderr: {}",
                self.command,
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            );
            return Err(ReleaseGateError::helper(format!(
                "Helper {} failed with exit code {}",
                self.command,
                output.status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}
