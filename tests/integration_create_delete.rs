use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test that create makes an empty file and exits 0
#[test]
fn test_create_new_file() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path())
        .arg("create")
        .arg("fresh.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created file fresh.txt"));

    let path = temp.path().join("fresh.txt");
    assert!(path.exists());
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

/// Test that create on an existing path fails and leaves it unchanged
#[test]
fn test_create_existing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taken.txt");
    std::fs::write(&path, "keep me").unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path())
        .arg("create")
        .arg("taken.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
}

/// Test create failure when the parent directory is missing
#[test]
fn test_create_in_missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path())
        .arg("create")
        .arg("no-such-dir/fresh.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to create"));
}

/// Test that delete removes an existing file and exits 0
#[test]
fn test_delete_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stale.txt");
    std::fs::write(&path, "old").unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path())
        .arg("delete")
        .arg("stale.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted file stale.txt"));

    assert!(!path.exists());
}

/// Test that delete on a missing path exits 1 with no side effect
#[test]
fn test_delete_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path())
        .arg("delete")
        .arg("never-was.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to remove"));
}

/// Test that delete does not remove directories
#[test]
fn test_delete_directory_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("subdir");
    std::fs::create_dir(&dir).unwrap();

    let mut cmd = Command::cargo_bin("filem").unwrap();
    cmd.current_dir(temp.path()).arg("delete").arg("subdir").assert().code(1);

    assert!(dir.exists());
}

/// Test create followed by delete round-trips to an unchanged directory
#[test]
fn test_create_then_delete() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("filem")
        .unwrap()
        .current_dir(temp.path())
        .arg("create")
        .arg("ephemeral.txt")
        .assert()
        .success();

    Command::cargo_bin("filem")
        .unwrap()
        .current_dir(temp.path())
        .arg("delete")
        .arg("ephemeral.txt")
        .assert()
        .success();

    assert!(!temp.path().join("ephemeral.txt").exists());
}
