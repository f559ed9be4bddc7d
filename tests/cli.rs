//! Runs the `factorial` binary and checks what it prints.

use std::process::Command;

#[cfg(target_os = "linux")]
use std::fs::File;

#[test]
fn prints_both_results_for_five() {
    let output = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .output()
        .expect("Failed to execute factorial");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "recursive: 120\niterative: 120\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn ignores_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .args(["7", "--verbose"])
        .output()
        .expect("Failed to execute factorial");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "recursive: 120\niterative: 120\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_with_status_one() -> std::io::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .stdout(File::create("/dev/full")?)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("factorial: cannot write result"),
        "stderr: {}",
        stderr
    );
    Ok(())
}
