/// Desktop notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a task is checked off
pub fn notify_task_completed(task_title: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "🎉 {}" with title "Trakr - Task Completed""#,
            escape_applescript(task_title)
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::trace!(task_title, "desktop notifications unsupported on this platform");
    }
}

/// Quote text for an AppleScript string literal. Backslashes go first so
/// the ones added for quotes are not doubled.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_applescript() {
        assert_eq!(escape_applescript("Ship it"), "Ship it");
        assert_eq!(escape_applescript(r#"Say "hi""#), r#"Say \"hi\""#);
        // A trailing backslash must not swallow the closing quote
        assert_eq!(escape_applescript(r"C:\temp\"), r"C:\\temp\\");
        assert_eq!(escape_applescript(r#"a\"b"#), r#"a\\\"b"#);
    }
}
