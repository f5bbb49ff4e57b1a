use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("safepath");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn areas_list_text_output() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["areas", "list"])
        .assert()
        .success()
        .stdout(contains("Downtown"))
        .stdout(contains("#22c55e"));
}

#[test]
fn areas_validate_text_output() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["areas", "validate"])
        .assert()
        .success()
        .stdout(contains("catalog valid"));
}

#[test]
fn whoami_defaults_to_signed_out() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("signed out"));
}
