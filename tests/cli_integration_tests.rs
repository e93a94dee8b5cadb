use std::process::Command;

/// Integration tests that run the actual rustle-rules binary

fn rustle_rules() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rustle-rules"))
}

#[test]
fn test_cli_lists_modules() {
    let output = rustle_rules()
        .arg("--list-modules")
        .output()
        .expect("Failed to run rustle-rules --list-modules");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for module in ["directory", "fail", "file", "log", "shell"] {
        assert!(stdout.lines().any(|l| l == module), "missing {module}");
    }
}

#[test]
fn test_cli_applies_rule_file() {
    let tmp = tempfile::tempdir().unwrap();
    let rules = tmp.path().join("site.yml");
    std::fs::write(
        &rules,
        r#"
- name: conf-dir
  module: directory
  params:
    target: etc/app
- name: conf
  module: file
  params:
    target: etc/app/app.conf
    content: "port = 8080\n"
- module: log
  params:
    message: "configured ${conf-dir.missing}"
"#,
    )
    .unwrap();

    let run = || {
        rustle_rules()
            .arg("-C")
            .arg(tmp.path())
            .arg(&rules)
            .output()
            .expect("Failed to run rustle-rules")
    };

    let first = run();
    assert!(first.status.success());
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.lines().any(|l| l == "changed: conf-dir"));
    assert!(stdout.lines().any(|l| l == "changed: conf"));
    assert!(stdout.lines().any(|l| l == "3 rules applied, 2 changed"));
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("etc/app/app.conf")).unwrap(),
        "port = 8080\n"
    );

    let second = run();
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(!stdout.lines().any(|l| l.starts_with("changed: ")));
    assert!(stdout.lines().any(|l| l == "3 rules applied, 0 changed"));
}

#[test]
fn test_cli_fails_on_unknown_module() {
    let tmp = tempfile::tempdir().unwrap();
    let rules = tmp.path().join("broken.yml");
    std::fs::write(&rules, "- name: typo\n  module: fiel\n").unwrap();

    let output = rustle_rules().arg(&rules).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown module fiel"));
}
