//! JSON output formatting

use serde::Serialize;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
}

impl<T: Serialize> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
        }
    }

    /// Print the response to stdout
    pub fn print(&self) -> Result<(), treehop_core::TreehopError> {
        let rendered = serde_json::to_string_pretty(self)
            .map_err(|e| treehop_core::TreehopError::Io(std::io::Error::other(e)))?;
        println!("{}", rendered);
        Ok(())
    }
}

/// Data payload for the add command
#[derive(Debug, Clone, Serialize)]
pub struct AddData {
    /// Path of the new worktree
    pub path: String,
    /// Branch checked out there
    pub branch: String,
    /// Whether a brand-new branch was created
    pub created_branch: bool,
}

/// Data payload for jump commands
#[derive(Debug, Clone, Serialize)]
pub struct JumpData {
    /// Path of the target worktree
    pub path: String,
    /// Branch checked out there
    pub branch: String,
}
