use assert_cmd::Command;

fn pwgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pwgen"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_length_exits_with_message() {
    for length in ["3", "-5", "1025"] {
        let output = pwgen().args(["--length", length]).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert_eq!(
            stderr.trim_end(),
            format!("invalid password length {length}: must be between 4 and 1024")
        );
    }
}

#[test]
fn count_prints_one_password_per_line() {
    let output = pwgen()
        .args(["-l", "12", "-c", "digits", "-n", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line.len(), 12);
        assert!(line.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn default_is_one_password_of_default_length() {
    let output = pwgen().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().map(str::len).collect::<Vec<_>>(), [16]);
}

#[test]
fn json_output_has_config_and_passwords() {
    let output = pwgen()
        .args(["--json", "-c", "special", "-c", "upper", "-l", "8", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(value["config"]["length"], 8);
    assert_eq!(value["config"]["classes"], serde_json::json!(["upper", "special"]));

    let passwords = value["passwords"].as_array().unwrap();
    assert_eq!(passwords.len(), 3);
    for password in passwords {
        let password = password.as_str().unwrap();
        assert_eq!(password.len(), 8);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_uppercase() || "!#$%@=^*+-".contains(c)));
    }
}

#[test]
fn unknown_class_is_rejected() {
    let output = pwgen().args(["-c", "symbols"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown character class \"symbols\""));
}
