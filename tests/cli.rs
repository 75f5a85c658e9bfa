use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed_fixture_dir(dir: &Path) {
    write_file(
        &dir.join("src/Widget.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\nclass Widget\n{\n}\n",
    );
    write_file(
        &dir.join("src/Renderable.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\ninterface Renderable\n{\n}\n",
    );
    write_file(
        &dir.join("src/HasLabel.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\ntrait HasLabel\n{\n}\n",
    );
    write_file(
        &dir.join("src/Size.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\nenum Size: string\n{\n    case Small = 's';\n}\n",
    );
    write_file(
        &dir.join("src/WidgetTest.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\nclass WidgetTest\n{\n}\n",
    );
    write_file(
        &dir.join("src/helpers.php"),
        "<?php\n\nnamespace Acme\\Widgets;\n\nfunction helper() {}\n\n$anon = new class {};\n",
    );
}

#[test]
fn cli_find_lists_all_constructs_sorted() {
    let dir = tempdir().unwrap();
    seed_fixture_dir(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_construct-finder"))
        .args(["find", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "trait\tAcme\\Widgets\\HasLabel",
            "interface\tAcme\\Widgets\\Renderable",
            "enum\tAcme\\Widgets\\Size",
            "class\tAcme\\Widgets\\Widget",
            "class\tAcme\\Widgets\\WidgetTest",
        ]
    );
}

#[test]
fn cli_find_respects_excludes_kind_filter_and_names() {
    let dir = tempdir().unwrap();
    seed_fixture_dir(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_construct-finder"))
        .args([
            "find",
            dir.path().to_str().unwrap(),
            "--exclude",
            "*Test.php",
            "--kind",
            "class",
            "--names",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "Acme\\Widgets\\Widget");
}

#[test]
fn cli_find_json_output_has_names_and_kinds() {
    let dir = tempdir().unwrap();
    seed_fixture_dir(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_construct-finder"))
        .args([
            "find",
            dir.path().to_str().unwrap(),
            "--exclude",
            "*Test.php",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let constructs = v.get("constructs").and_then(|c| c.as_array()).unwrap();

    assert_eq!(constructs.len(), 4);
    assert_eq!(
        constructs[0].get("name").unwrap().as_str().unwrap(),
        "Acme\\Widgets\\HasLabel"
    );
    assert_eq!(constructs[0].get("kind").unwrap().as_str().unwrap(), "trait");
}

#[test]
fn cli_find_no_enums_hides_enum_declarations() {
    let dir = tempdir().unwrap();
    seed_fixture_dir(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_construct-finder"))
        .args([
            "find",
            dir.path().to_str().unwrap(),
            "--no-enums",
            "--kind",
            "enum",
            "--names",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_json_error_output_is_valid_json_even_with_quotes_in_path() {
    let dir = tempdir().unwrap();

    let bad_path = dir.path().join("does-not-exist-\"quoted\"");

    let output = Command::new(env!("CARGO_BIN_EXE_construct-finder"))
        .args(["find", bad_path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let _: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
}
