//! End-to-end tests for the `pashu` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn pashu() -> Command {
    let mut cmd = Command::cargo_bin("pashu").unwrap();
    cmd.arg("--no-color")
        .env_remove("PASHU_CONFIG")
        .env_remove("PASHU_DEFAULT_LANGUAGE");
    cmd
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_help_lists_commands() {
    pashu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("identify"))
        .stdout(predicate::str::contains("locales"));
}

#[test]
fn test_script_full_journey() {
    let dir = tempfile::tempdir().unwrap();
    let image = write(dir.path(), "cow.jpg", b"\xff\xd8\xff\xe0");
    let script = write(
        dir.path(),
        "journey.pashu",
        format!(
            "# happy path\n\
             get-started\n\
             login aadhaar 1234 5678 9012\n\
             expect recognition\n\
             image {image}\n\
             submit\n\
             details\n\
             expect dashboard\n\
             show\n"
        )
        .as_bytes(),
    );

    pashu()
        .args(["--instant", "--seed", "1", "script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"))
        .stdout(predicate::str::contains("Analysis completed successfully!"))
        .stdout(predicate::str::contains("Last Identification"))
        .stdout(predicate::str::contains("Confidence"));
}

#[test]
fn test_script_short_aadhaar_stays_on_login() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(
        dir.path(),
        "bad.pashu",
        b"get-started\nlogin aadhaar 12345\nexpect login\n",
    );

    pashu()
        .args(["--instant", "script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid 12-digit Aadhaar number"));
}

#[test]
fn test_script_overlong_or_mixed_credentials_stay_on_login() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(
        dir.path(),
        "overlong.pashu",
        b"get-started
          login aadhaar 1234567890123
          expect login
          login phone 98765abc43210
          expect login
          open dashboard
          expect login
",
    );

    pashu()
        .args(["--instant", "script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid 12-digit Aadhaar number"))
        .stdout(predicate::str::contains("Please enter a valid 10-digit phone number"))
        .stdout(predicate::str::contains("Login successful!").not());
}

#[test]
fn test_script_guard_redirect() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "guard.pashu", b"open dashboard\nexpect login\n");

    pashu()
        .args(["script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("/dashboard"))
        .stdout(predicate::str::contains("/login"));
}

#[test]
fn test_script_failed_expectation_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "wrong.pashu", b"get-started\n\nexpect dashboard\n");

    pashu()
        .args(["script", &script])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script line 3"));
}

#[test]
fn test_script_from_stdin_in_hindi() {
    pashu()
        .args(["--instant", "--lang", "hi", "script", "-", "--show"])
        .write_stdin("get-started\nlogin phone 98765\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("कृपया एक वैध 10-अंकीय फोन नंबर दर्ज करें"))
        .stdout(predicate::str::contains("लॉगिन"));
}

#[test]
fn test_catalog_json() {
    pashu()
        .args(["catalog", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"breed\": \"Gir Cow\""))
        .stdout(predicate::str::contains("\"confidence\": 87"));
}

#[test]
fn test_identify_with_custom_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(
        dir.path(),
        "breeds.json",
        br#"[{"breed": "Tharparkar", "confidence": 81}]"#,
    );
    let image = write(dir.path(), "cow.png", b"\x89PNG");

    pashu()
        .args(["--instant", "--catalog", &catalog, "identify", &image])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tharparkar"))
        .stdout(predicate::str::contains("81%"));
}

#[test]
fn test_identify_missing_file() {
    pashu()
        .args(["--instant", "identify", "/no/such/image.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_locales_check_passes() {
    pashu()
        .args(["locales", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("हिंदी (hi)"));
}

#[test]
fn test_locales_check_reports_gap() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en.json", br#"{"newFeature": "New feature"}"#);

    pashu()
        .args(["locales", "check", "--dir", &dir.path().to_string_lossy()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("newFeature"));
}

#[test]
fn test_locales_show_key() {
    pashu()
        .args(["locales", "show", "getStarted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Get Started"))
        .stdout(predicate::str::contains("शुरू करें"));
}

#[test]
fn test_schemes_in_hindi() {
    pashu()
        .args(["--lang", "hi", "schemes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("राष्ट्रीय गोकुल मिशन"));
}

#[test]
fn test_emergency_vets() {
    pashu()
        .args(["vets", "--emergency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Central Veterinary Hospital"))
        .stdout(predicate::str::contains("Maharashtra Vet Care").not());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "pashu.toml",
        b"default_language = \"hi\"\nlogin_latency_ms = 250\n",
    );

    pashu()
        .args(["--config", &file, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_language = \"hi\""))
        .stdout(predicate::str::contains("login_latency_ms = 250"));

    pashu().args(["config", "check", &file]).assert().success();
}

#[test]
fn test_config_rejects_unknown_language() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "bad.toml", b"default_language = \"fr\"\n");

    pashu()
        .args(["config", "check", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_language"));
}
