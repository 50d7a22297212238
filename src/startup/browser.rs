//! Browser executable verification.
//!
//! # Responsibilities
//! - Check whether a usable Chromium executable exists under the configured
//!   browsers directory
//! - Trigger a best-effort install when none is found
//!
//! # Design Decisions
//! - Presence of the executable file is the whole check; launching the
//!   browser to verify it works stays out of scope
//! - A failed install is logged and startup continues; a later consumer of
//!   the browser surfaces its own error

use std::fs;
use std::path::{Path, PathBuf};

use crate::startup::steps::{self, StartupStep};

/// Executable names that count as an installed browser.
pub const CHROME_EXECUTABLES: [&str; 2] = ["chrome", "chrome.exe"];

/// Browser verification work derived from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCheck {
    /// Directory the browser runtime installs into.
    pub browsers_path: PathBuf,

    /// Step that installs the browser when it is missing.
    pub installer: StartupStep,
}

/// Search a directory tree for a browser executable.
///
/// Returns the first match of [`CHROME_EXECUTABLES`]. Symlinks are skipped
/// and a missing or unreadable directory yields `None`.
pub fn find_browser_executable(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            continue;
        }

        let path = entry.path();
        if file_type.is_dir() {
            if let Some(found) = find_browser_executable(&path) {
                return Some(found);
            }
        } else if file_type.is_file() {
            let name = entry.file_name();
            if CHROME_EXECUTABLES.iter().any(|candidate| name == *candidate) {
                return Some(path);
            }
        }
    }

    None
}

/// Verify the browser is installed, installing it if necessary.
///
/// Best-effort throughout: every outcome is logged and none of them aborts
/// startup.
pub async fn ensure_browser(check: &BrowserCheck) {
    if let Some(executable) = find_browser_executable(&check.browsers_path) {
        tracing::info!(path = %executable.display(), "Browser executable found");
        return;
    }

    tracing::warn!(
        path = %check.browsers_path.display(),
        "Browser executable not found, installing"
    );
    steps::run_best_effort(&check.installer).await;

    match find_browser_executable(&check.browsers_path) {
        Some(executable) => {
            tracing::info!(path = %executable.display(), "Browser executable installed");
        }
        None => {
            tracing::warn!(
                path = %check.browsers_path.display(),
                "Browser executable still missing after install, continuing"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_none() {
        assert_eq!(
            find_browser_executable(Path::new("/definitely/not/a/real/path")),
            None
        );
    }

    #[test]
    fn test_finds_nested_executable() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("chromium-1140").join("chrome-linux");
        fs::create_dir_all(&nested).unwrap();
        let executable = nested.join("chrome");
        fs::write(&executable, b"").unwrap();

        assert_eq!(find_browser_executable(dir.path()), Some(executable));
    }

    #[test]
    fn test_finds_windows_executable_name() {
        let dir = tempfile::tempdir().unwrap();
        let executable = dir.path().join("chrome.exe");
        fs::write(&executable, b"").unwrap();

        assert_eq!(find_browser_executable(dir.path()), Some(executable));
    }

    #[test]
    fn test_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("headless_shell"), b"").unwrap();
        fs::write(dir.path().join("chrome.txt"), b"").unwrap();

        assert_eq!(find_browser_executable(dir.path()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real-chrome");
        fs::write(&real, b"").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("chrome")).unwrap();

        assert_eq!(find_browser_executable(dir.path()), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ensure_browser_runs_installer_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("chrome");
        let installer = StartupStep::new(
            "fake-install",
            "sh",
            &["-c", &format!("touch {}", target.display())],
        );
        let check = BrowserCheck {
            browsers_path: dir.path().to_path_buf(),
            installer,
        };

        ensure_browser(&check).await;

        assert_eq!(find_browser_executable(dir.path()), Some(target));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ensure_browser_skips_installer_when_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chrome"), b"").unwrap();
        // An installer that leaves a marker if it runs.
        let marker = dir.path().join("installer-ran");
        let installer = StartupStep::new(
            "fake-install",
            "sh",
            &["-c", &format!("touch {}", marker.display())],
        );
        let check = BrowserCheck {
            browsers_path: dir.path().to_path_buf(),
            installer,
        };

        ensure_browser(&check).await;

        assert!(!marker.exists());
    }
}
