use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch working directory with no appfleet.yaml in sight
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    #[allow(dead_code)]
    pub fn write_roster(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("students.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        fs::write(self.root.path().join("appfleet.yaml"), content).unwrap();
    }

    /// A binary invocation isolated from the caller's environment
    pub fn command(&self, bin: &str) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin(bin).unwrap();
        cmd.current_dir(self.root.path())
            .env("APPFLEET_CONFIG_PATH", self.root.path().join("missing.yaml"))
            .env("XDG_CONFIG_HOME", self.root.path())
            .env_remove("APPFLEET_STACK")
            .env_remove("APPFLEET_USER")
            .env_remove("APPFLEET_FLEET")
            .env_remove("APPFLEET_PROFILE")
            .env_remove("APPFLEET_REGION");
        cmd
    }
}
