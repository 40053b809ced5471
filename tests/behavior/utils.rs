use assert_cmd::Command;
use libtest_mimic::{Failed, Trial};
use signer_alerts::error::Result;
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "SIGNER_ALERTS_CONFIG",
    "SIGNER_ALERTS_PRESENTER",
    "SIGNER_ALERTS_ANSWER",
    "SIGNER_ALERTS_CLIPBOARD",
    "SIGNER_ALERTS_SECRET",
];

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create fixture dir"),
        }
    }

    /// Config path that never exists, so commands run with defaults.
    pub fn absent_config(&self) -> PathBuf {
        self.dir.path().join("absent.toml")
    }

    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write config");
        path
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub static TEST_FIXTURE: LazyLock<Fixture> = LazyLock::new(Fixture::new);

/// Binary under test, isolated from the caller's environment and config.
pub fn signer_alerts_cmd() -> Command {
    let mut cmd = Command::cargo_bin("signer-alerts").expect("binary built");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SIGNER_ALERTS_CONFIG", TEST_FIXTURE.absent_config());
    cmd
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn build_trial(name: &str, f: fn() -> Result<()>) -> Trial {
    Trial::test(format!("behavior::{name}"), move || {
        f().map_err(|err| Failed::from(err.to_string()))
    })
}

#[macro_export]
macro_rules! trials {
    ($($test:ident),* $(,)?) => {
        vec![$(
            build_trial(stringify!($test), $test),
        )*]
    };
}
