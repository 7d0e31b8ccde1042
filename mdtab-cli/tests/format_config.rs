use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn format_respects_min_width_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "|a|\n|-|\n").unwrap();

    let config_path = dir.path().join("mdtab.toml");
    fs::write(
        &config_path,
        r#"[table]
min_column_width = 6
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdtab");
    cmd.arg("format")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout, "| a      |\n| ------ |\n");
}

#[test]
fn fullwidth_padding_can_be_turned_off_in_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "|日本語|\n|-|\n|日|\n").unwrap();

    let config_path = dir.path().join("mdtab.toml");
    fs::write(&config_path, "[table]\nfullwidth_padding = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdtab");
    cmd.arg("format")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("| 日     |\n"));
    assert!(!stdout.contains('\u{3000}'));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdtab");
    cmd.arg("format")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(dir.path().join("missing.toml").as_os_str());

    cmd.assert().failure();
}
