//! Shared helpers for the CLI specs.

use std::path::Path;
use std::process::Output;

use assert_cmd::Command;

pub use crate::agent_fake::FakeAgentServer;

/// Start building an `lbl` invocation.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), envs: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Point the binary at an agent socket via the environment.
    pub fn agent(self, socket: &Path) -> Self {
        let socket = socket.display().to_string();
        self.env("LBL_AGENT_SOCK", &socket)
    }

    fn output(self) -> Output {
        let mut cmd = Command::cargo_bin("lbl").unwrap();
        cmd.env_remove("LBL_AGENT_SOCK").env_remove("LBL_LOG").env_remove("RUST_LOG");
        cmd.env("LBL_IPC_TIMEOUT_MS", "2000");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args).output().unwrap()
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and require a non-zero exit code.
    pub fn fails(self) -> RunAssert {
        let out = RunAssert::from(self.output());
        assert_ne!(out.code, Some(0), "expected failure\n{}", out.describe());
        out
    }

    /// Run and require a specific exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        let out = RunAssert::from(self.output());
        assert_eq!(out.code, Some(code), "unexpected exit code\n{}", out.describe());
        out
    }
}

pub struct RunAssert {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunAssert {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    fn describe(&self) -> String {
        format!("--- stdout ---\n{}--- stderr ---\n{}", self.stdout, self.stderr)
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout, expected, "\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {:?}\n{}", needle, self.describe());
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
