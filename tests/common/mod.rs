use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());

        let env = Self {
            _tmp: tmp,
            home,
            catalog,
        };
        // Zero out the simulated network delays so the suite stays fast.
        env.write_sim_config(0);
        env
    }

    /// Rewrite the simulation delays; tests exercising overlapping searches
    /// slow one invocation down and keep the rest instant.
    pub fn write_sim_config(&self, search_delay_ms: u64) {
        let config_dir = self.home.join(".config/safepath");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(
            config_dir.join("config.toml"),
            format!(
                "[simulation]\nsearch_delay_ms = {}\nlogin_delay_ms = 0\nassess_delay_ms = 0\n",
                search_delay_ms
            ),
        )
        .expect("write test config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("safepath");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_areas(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--areas")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_fail(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn login(&self) {
        let login = self.run_json(&[
            "login",
            "--email",
            "sarah@example.com",
            "--password",
            "secret123",
        ]);
        assert_eq!(login["ok"], true);
    }
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let path = base.join("areas.json");
    let catalog = serde_json::json!({
        "name": "fixture-city",
        "areas": [
            {
                "id": "1",
                "name": "Downtown",
                "rating": 85,
                "position": [37.7749, -122.4194],
                "radius_meters": 1000
            },
            {
                "id": "2",
                "name": "Riverside Park",
                "rating": 72,
                "position": [37.7699, -122.4330],
                "radius_meters": 800
            },
            {
                "id": "3",
                "name": "Harbor View",
                "rating": 55,
                "position": [37.7580, -122.4100],
                "radius_meters": 500
            }
        ]
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write fixture catalog");
    path
}
