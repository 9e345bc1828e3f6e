//! Integration tests for the `provkit` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "#ifndef NEWPROVIDER_H\n#define NEWPROVIDER_H\nclass NewProvider : public Provider {}\n#endif\n";

/// A fake BIQT installation with all four templates.
fn biqt_home() -> TempDir {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("scripts").join("templates");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Provider.h"), HEADER).unwrap();
    fs::write(dir.join("Provider.cpp"), "#include <NewProvider.h>\n").unwrap();
    fs::write(dir.join("descriptor.json"), "{\"name\": \"NewProvider\"}\n").unwrap();
    fs::write(dir.join("CMakeLists.txt"), "project(NewProvider)\n").unwrap();
    home
}

fn provkit(work: &Path) -> Command {
    let mut cmd = Command::cargo_bin("provkit").unwrap();
    cmd.current_dir(work)
        .env_remove("BIQT_HOME")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn help_flag() {
    let work = TempDir::new().unwrap();
    provkit(work.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PNAME"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    let work = TempDir::new().unwrap();
    provkit(work.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn creates_provider_tree() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let root = work.path().join("Iris3");
    assert!(root.join("Iris3.h").is_file());
    assert!(root.join("Iris3.cpp").is_file());
    assert!(root.join("descriptor.json").is_file());
    assert!(root.join("CMakeLists.txt").is_file());
    assert!(is_empty_dir(&root.join("src")));
    assert!(is_empty_dir(&root.join("config")));
    assert_eq!(fs::read_dir(&root).unwrap().count(), 6);

    assert_eq!(
        fs::read_to_string(root.join("Iris3.h")).unwrap(),
        "#ifndef IRIS3_H\n#define IRIS3_H\nclass Iris3 : public Provider {}\n#endif\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("descriptor.json")).unwrap(),
        "{\"name\": \"Iris3\"}\n"
    );
}

#[test]
fn biqt_home_flag_works_without_env() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .arg("--biqt-home")
        .arg(home.path())
        .arg("face_quality")
        .assert()
        .success();

    assert!(work.path().join("face_quality/face_quality.cpp").is_file());
}

#[test]
fn second_run_succeeds_and_keeps_files() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .success();

    let header = work.path().join("Iris3/Iris3.h");
    fs::write(&header, "// my edits\n").unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("nothing to do"));

    assert_eq!(fs::read_to_string(&header).unwrap(), "// my edits\n");
}

#[test]
fn preexisting_target_is_byte_identical_after_run() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();
    let root = work.path().join("Iris3");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("Iris3.h"), b"original NewProvider NEWPROVIDER_H").unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .success();

    assert_eq!(
        fs::read(root.join("Iris3.h")).unwrap(),
        b"original NewProvider NEWPROVIDER_H"
    );
    assert!(root.join("Iris3.cpp").is_file());
}

#[test]
fn missing_biqt_home_fails_without_side_effects() {
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .arg("Iris3")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "The BIQT_HOME environment variable is not set",
        ));

    assert!(is_empty_dir(work.path()));
}

#[test]
fn empty_biqt_home_fails_without_side_effects() {
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", "")
        .arg("Iris3")
        .assert()
        .failure()
        .code(4);

    assert!(is_empty_dir(work.path()));
}

#[test]
fn missing_home_is_reported_before_a_bad_name() {
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .arg("bad name")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("BIQT_HOME"));
}

#[test]
fn invalid_names_are_rejected_without_side_effects() {
    let home = biqt_home();
    for name in ["my provider", "a.b", "a/b", "../up", "Iris3!"] {
        let work = TempDir::new().unwrap();

        provkit(work.path())
            .env("BIQT_HOME", home.path())
            .arg(name)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid provider name"));

        assert!(is_empty_dir(work.path()), "mutated for {name:?}");
    }
}

#[test]
fn missing_template_fails_with_not_found() {
    let home = biqt_home();
    fs::remove_file(home.path().join("scripts/templates/CMakeLists.txt")).unwrap();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("CMakeLists.txt"));

    // No rollback: the earlier files stay.
    assert!(work.path().join("Iris3/Iris3.h").is_file());
    assert!(!work.path().join("Iris3/CMakeLists.txt").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .args(["--dry-run", "Iris3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would create"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(is_empty_dir(work.path()));
}

#[test]
fn json_report_lists_every_path() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    let assert = provkit(work.path())
        .env("BIQT_HOME", home.path())
        .args(["--output-format", "json", "Iris3"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["provider"], "Iris3");

    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert!(entries.iter().all(|e| e["outcome"] == "created"));
}

#[test]
fn quiet_prints_nothing_on_success() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .args(["-q", "Iris3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_to_stderr() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .args(["-v", "Iris3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("File instantiated"));
}

#[test]
fn no_arguments_reports_missing_home_first() {
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("BIQT_HOME"));

    assert!(is_empty_dir(work.path()));
}

#[test]
fn missing_name_is_a_user_error() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No provider name was given"));

    assert!(is_empty_dir(work.path()));
}

// ── .env ─────────────────────────────────────────────────────────────────────

#[test]
fn dotenv_in_working_directory_supplies_biqt_home() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();
    fs::write(
        work.path().join(".env"),
        format!("BIQT_HOME={}\n", home.path().display()),
    )
    .unwrap();

    provkit(work.path()).arg("Iris3").assert().success();

    assert!(work.path().join("Iris3/Iris3.h").is_file());
}

#[test]
fn dotenv_in_parent_directory_is_ignored() {
    let home = biqt_home();
    let outer = TempDir::new().unwrap();
    fs::write(
        outer.path().join(".env"),
        format!("BIQT_HOME={}\n", home.path().display()),
    )
    .unwrap();
    let work = outer.path().join("work");
    fs::create_dir(&work).unwrap();

    provkit(&work).arg("Iris3").assert().failure().code(4);

    assert!(is_empty_dir(&work));
}

#[test]
fn malformed_dotenv_is_reported() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join(".env"), "BIQT_HOME='unterminated\n").unwrap();

    provkit(work.path())
        .arg("--biqt-home")
        .arg(home.path())
        .arg("Iris3")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to load .env"));

    assert!(!work.path().join("Iris3").exists());
}

// ── unreadable templates ─────────────────────────────────────────────────────

#[test]
fn template_that_is_a_directory_is_an_internal_error() {
    let home = biqt_home();
    let header = home.path().join("scripts/templates/Provider.h");
    fs::remove_file(&header).unwrap();
    fs::create_dir(&header).unwrap();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Provider.h"))
        .stderr(predicate::str::contains("unreadable"));
}

#[test]
fn non_utf8_template_is_an_internal_error() {
    let home = biqt_home();
    fs::write(
        home.path().join("scripts/templates/descriptor.json"),
        b"{\"name\": \"\xff\"}\n",
    )
    .unwrap();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("descriptor.json"));
}

// ── single diagnostic ────────────────────────────────────────────────────────

#[test]
fn failure_prints_the_message_once() {
    let home = biqt_home();
    fs::remove_file(home.path().join("scripts/templates/Provider.cpp")).unwrap();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("Iris3")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("could not be read").count(1))
        .stderr(predicate::str::contains("WARN").not())
        .stderr(predicate::str::contains("ERROR").not());
}

#[test]
fn invalid_name_prints_the_message_once() {
    let home = biqt_home();
    let work = TempDir::new().unwrap();

    provkit(work.path())
        .env("BIQT_HOME", home.path())
        .arg("a.b")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid provider name").count(1));
}
