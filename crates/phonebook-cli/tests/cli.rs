use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(config_home: &Path, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("phonebook")
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(config_home: &Path, args: &[&str]) -> String {
    let output = run(config_home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).expect("metadata").permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms).expect("chmod");
    }
}

#[test]
fn cli_lists_seed_contacts() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(temp.path(), &["list"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["1  Анна Петрова  +79123456789", "2  Иван Смирнов  +79876543210"]
    );

    let json: Value =
        serde_json::from_str(&run_ok(temp.path(), &["--json", "list"])).expect("parse json");
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["initials"], "АП");
}

#[test]
fn cli_list_appends_config_contacts() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("phonebook");
    fs::create_dir_all(&dir).expect("config dir");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "seed_defaults = false\n\n[[contacts]]\nname = \"Ольга Кузнецова\"\nphone = \"89001234567\"\n",
    )
    .expect("write config");
    restrict_permissions(&path);

    let json: Value =
        serde_json::from_str(&run_ok(temp.path(), &["--json", "list"])).expect("parse json");
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ольга Кузнецова");
    assert_eq!(items[0]["phone"], "+79001234567");
}

#[test]
fn cli_normalize_prints_canonical_phone() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(temp.path(), &["normalize", "8 (912) 345-67-89"]);
    assert_eq!(stdout.trim(), "+79123456789");
}

#[test]
fn cli_normalize_rejects_short_phone() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(temp.path(), &["normalize", "123"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "+123");
}

#[test]
fn cli_validate_reports_field_errors() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(temp.path(), &["validate", "--name", "A", "--phone", "123"]);
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("name: Имя должно содержать минимум 2 символа"));
    assert!(stdout.contains("phone: Номер должен содержать от 10 до 15 цифр"));

    let stdout = run_ok(
        temp.path(),
        &["validate", "--name", "Anna Smith", "--phone", "89123456789"],
    );
    assert!(stdout.contains("name: ok"));
    assert!(stdout.contains("phone: ok (+79123456789)"));
}

#[test]
fn cli_rejects_invalid_config() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("custom.toml");
    fs::write(&path, "copy_feedback_ms = 0\n").expect("write config");
    restrict_permissions(&path);

    let output = run(
        temp.path(),
        &["--config", path.to_str().expect("path"), "list"],
    );
    assert_eq!(output.status.code(), Some(3));
}
