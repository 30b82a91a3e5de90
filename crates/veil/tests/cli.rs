use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veil"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute veil");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ghost mode"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veil"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute veil");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("veil"));
}

#[test]
fn action_help_lists_every_action() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veil"));
    cmd.args(["action", "--help"]);

    // Act
    let output = cmd.output().expect("failed to execute veil");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "opacity-up",
        "opacity-down",
        "toggle-borderless",
        "toggle-ghost-mode",
        "reset-all",
    ] {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn unknown_action_is_rejected() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veil"));
    cmd.args(["action", "spin-window"]);

    // Act
    let output = cmd.output().expect("failed to execute veil");

    // Assert
    assert!(!output.status.success());
}

#[test]
fn daemon_subcommand_is_hidden() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veil"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute veil");

    // Assert
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("daemon ("));
    assert!(!stdout.contains("Run the daemon"));
}
