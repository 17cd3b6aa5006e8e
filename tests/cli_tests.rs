mod common;

use assert_cmd::Command;
use common::temp_project_with_config_file;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("app-icon-kit").unwrap()
}

#[test]
fn test_audit_always_succeeds() {
    let (tmp, _project) = temp_project_with_config_file();
    cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("❌ android/app/src/main/res/mipmap-mdpi/ic_launcher.png (missing)"));
}

#[test]
fn test_audit_survives_broken_config() {
    let (tmp, _project) = temp_project_with_config_file();
    std::fs::write(tmp.path().join("icon-kit.yaml"), "output:\n  jpeg_quality: 0\n").unwrap();

    cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("audit")
        .assert()
        .success()
        .stderr(contains("Ignoring config"));
}

#[test]
fn test_check_icons_survives_broken_config() {
    let (tmp, _project) = temp_project_with_config_file();
    std::fs::write(tmp.path().join("icon-kit.yaml"), "paths: [not, a, map").unwrap();

    Command::cargo_bin("check-icons")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(contains("Ignoring config"))
        .stdout(contains("0/9 files present"));
}

#[test]
fn test_export_without_base_icon_fails() {
    let (tmp, _project) = temp_project_with_config_file();
    cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("export")
        .assert()
        .failure()
        .stderr(contains("Base icon not found"));
}

#[test]
fn test_all_then_audit_reports_every_file() {
    let (tmp, _project) = temp_project_with_config_file();
    cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("all")
        .assert()
        .success()
        .stdout(contains("✅ App icon created!"))
        .stdout(contains("mipmap-xxxhdpi/ic_launcher.png (192x192px)"))
        .stdout(contains("9/9 files present"));
}

#[test]
fn test_script_binaries_run_in_working_directory() {
    let (tmp, _project) = temp_project_with_config_file();

    Command::cargo_bin("create-app-icon")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(contains("app_icon_512x512.png"));

    Command::cargo_bin("create-android-icons")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(contains("mipmap-mdpi/ic_launcher.png (48x48px)"));

    Command::cargo_bin("check-icons")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(contains("✅ app_icons/app_icon_512x512.jpg"))
        .stdout(contains("2/9 files present"));
}

#[test]
fn test_show_config_prints_yaml() {
    let (tmp, _project) = temp_project_with_config_file();
    cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("show-config")
        .assert()
        .success()
        .stdout(contains("jpeg_quality: 95"))
        .stdout(contains("search_user_font_dir: false"));
}
