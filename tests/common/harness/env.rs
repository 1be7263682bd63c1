//! Isolated test environment with temp directory.

use super::WikiCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary entries directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Entries live in `<temp>/entries`; `<temp>/config` stands in for the
/// user's config directory.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    entries_dir: PathBuf,
    config_home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates a new isolated test environment with an empty entries directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let entries_dir = temp_dir.path().join("entries");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir(&entries_dir).expect("Failed to create entries directory");
        std::fs::create_dir(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            entries_dir,
            config_home,
        }
    }

    /// Returns the path to the entries directory.
    pub fn entries_dir(&self) -> &Path {
        &self.entries_dir
    }

    /// Returns the temp root, outside the entries directory.
    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Returns the path an entry's file is stored at.
    pub fn entry_path(&self, title: &str) -> PathBuf {
        self.entries_dir.join(format!("{}.md", title))
    }

    /// Writes an entry file directly, bypassing the CLI.
    pub fn add_entry(&self, title: &str, body: &str) -> PathBuf {
        let path = self.entry_path(title);
        std::fs::write(&path, body).expect("Failed to write test entry");
        path
    }

    /// Reads an entry file directly, `None` if absent.
    pub fn read_entry(&self, title: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(title)).ok()
    }

    /// Writes an arbitrary file under the temp root and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the config file the binary will load.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.config_home.join("encyclopedia");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Creates a WikiCommand configured for this test environment.
    pub fn cmd(&self) -> WikiCommand {
        WikiCommand::new()
            .config_home(&self.config_home)
            .dir(&self.entries_dir)
    }

    /// Creates a WikiCommand without `--dir`, for config-resolution tests.
    pub fn cmd_without_dir(&self) -> WikiCommand {
        WikiCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_entries_directory() {
        let env = TestEnv::new();
        assert!(env.entries_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_and_read_entry() {
        let env = TestEnv::new();
        let path = env.add_entry("Python", "# Python");
        assert!(path.ends_with("entries/Python.md"));
        assert_eq!(env.read_entry("Python").as_deref(), Some("# Python"));
        assert_eq!(env.read_entry("Ruby"), None);
    }

    #[test]
    fn test_env_provides_command_with_dir() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.entries_dir().to_string_lossy());
    }
}
