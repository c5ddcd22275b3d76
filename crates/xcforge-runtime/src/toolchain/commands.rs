//! Running toolchain commands and capturing their output.

use std::process::Command;

use tracing::debug;
use xcforge_core::BinaryMetadataError;

/// Run `tool` with `args` and return its stdout.
///
/// Launch failures map to `ToolUnavailable`; a non-zero exit maps to
/// `ToolFailed` carrying the trimmed stderr.
pub fn run_tool(tool: &str, args: &[&str]) -> Result<String, BinaryMetadataError> {
    debug!(tool, ?args, "Running toolchain command");

    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| BinaryMetadataError::ToolUnavailable {
            tool: tool.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(BinaryMetadataError::ToolFailed {
            tool: tool.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_unavailable() {
        let err = run_tool("xcforge-no-such-tool", &["-info"]).unwrap_err();
        assert!(matches!(
            err,
            BinaryMetadataError::ToolUnavailable { ref tool, .. } if tool == "xcforge-no-such-tool"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let out = run_tool("sh", &["-c", "echo arm64"]).unwrap();
        assert_eq!(out.trim(), "arm64");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure_with_stderr() {
        let err = run_tool("sh", &["-c", "echo broken >&2; exit 3"]).unwrap_err();
        assert_eq!(
            err,
            BinaryMetadataError::ToolFailed {
                tool: "sh".to_string(),
                code: Some(3),
                stderr: "broken".to_string(),
            }
        );
    }
}
