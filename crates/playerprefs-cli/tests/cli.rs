use std::path::Path;

use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

fn playerprefs(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("playerprefs"));
    cmd.env("PLAYERPREFS_DIR", data_dir);
    cmd
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    playerprefs(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("playerprefs"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    playerprefs(dir.path()).arg("--version").assert().success();
}

#[test]
fn test_signin_status_signout_flow() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .args([
            "signin",
            "--phone",
            "15551234567",
            "--pass",
            "hunter2",
            "--avatar",
            "FOX",
        ])
        .assert()
        .success()
        .stdout(contains("Signed in as 15551234567 (FOX)"));

    playerprefs(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Signed in: yes"))
        .stdout(contains("15551234567"))
        .stdout(contains("*******"))
        .stdout(contains("FOX"));

    playerprefs(dir.path())
        .args(["status", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"signed_in\": true"))
        .stdout(contains("\"pass\": \"*******\""));

    playerprefs(dir.path())
        .arg("signout")
        .assert()
        .success()
        .stdout(contains("Signed out."));

    playerprefs(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No profile saved."));
}

#[test]
fn test_status_never_prints_the_password() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .args([
            "signin",
            "--phone",
            "15551234567",
            "--pass",
            "hunter2",
            "--avatar",
            "OWL",
        ])
        .assert()
        .success();

    playerprefs(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("hunter2").not());

    playerprefs(dir.path())
        .args(["status", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("hunter2").not());
}

#[test]
fn test_signin_rejects_unknown_avatar() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .args([
            "signin",
            "--phone",
            "15551234567",
            "--pass",
            "hunter2",
            "--avatar",
            "DRAGON",
        ])
        .assert()
        .failure()
        .stderr(contains("unknown avatar"));

    // A rejected sign-in must not leave a partial profile behind.
    playerprefs(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No profile saved."));
}

#[test]
fn test_signin_rejects_empty_phone() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .args(["signin", "--phone", "  ", "--pass", "pw", "--avatar", "FOX"])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));
}

#[test]
fn test_signout_on_empty_store_succeeds() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .arg("signout")
        .assert()
        .success()
        .stdout(contains("nothing to do"));
}

#[test]
fn test_status_fails_on_unknown_stored_avatar() {
    use playerprefs_storage::{PreferenceStore, RedbPrefs};

    let dir = tempdir().unwrap();
    {
        let prefs = RedbPrefs::open(dir.path().join("prefs.redb")).unwrap();
        let mut editor = prefs.edit();
        editor.put("playerPreferences.avatar", "DRAGON");
        editor.commit();
    }

    playerprefs(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("DRAGON"));
}

#[test]
fn test_avatars_lists_the_set() {
    let dir = tempdir().unwrap();

    playerprefs(dir.path())
        .arg("avatars")
        .assert()
        .success()
        .stdout(contains("FOX"))
        .stdout(contains("ASTRONAUT"));

    playerprefs(dir.path())
        .args(["avatars", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"NINJA\""));
}
