use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reverser"))
        .args(args)
        .output()
        .expect("Failed to execute reverser")
}

#[test]
fn test_default_points_reverse() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Slope:     2.0000"));
    assert!(stdout.contains("Suggested reversal point: (24.41, -3.73)"));
    assert!(stdout.contains("Analysis with 5 points"));
    assert!(stdout.contains("Slope reversed"));
}

#[test]
fn test_user_fifth_point_with_negative_coordinates() {
    let output = run(&["1,7", "2,9", "8,21", "10,25", "--fifth", "-3,11"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Outlier:   (-3.00, 11.00)"));
    assert!(stdout.contains("Slope not reversed"));
}

#[test]
fn test_base_only() {
    let output = run(&["--base-only"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Suggested reversal point"));
    assert!(!stdout.contains("Analysis with 5 points"));
}

#[test]
fn test_json_output() {
    let output = run(&["--json", "--random", "7"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"combined_fit\""));
    assert!(stdout.contains("\"suggestion\""));
}

#[test]
fn test_validation_errors() {
    let output = run(&["1,7", "2,x", "8,21", "10,25"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("valid numbers"));

    let output = run(&["1,7", "2,9", "8,21"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Exactly four points"));

    let output = run(&["1,4", "2,3", "3,2", "4,1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("positive slope"));
}

#[test]
fn test_invalid_policy_flag() {
    let output = run(&["--leverage", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("leverage"));
}

#[test]
fn test_negative_base_points_after_separator() {
    let output = run(&["--base-only", "--", "-4,1", "-2,2", "0,4", "3,5"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("(-4.00, 1.00)"));
}

#[test]
fn test_config_file_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("reverser.toml");
    std::fs::write(
        &config_path,
        "points = [{ x = 0.0, y = 1.0 }, { x = 1.0, y = 2.0 }, { x = 2.0, y = 2.5 }, { x = 3.0, y = 4.0 }]\n\
         [policy]\n\
         absolute_margin = 50.0\n",
    )
    .unwrap();
    let report_path = dir.path().join("out/report.txt");

    let output = run(&[
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(written, String::from_utf8_lossy(&output.stdout));
    assert!(written.contains("(3.00, 4.00)"));
    assert!(written.contains("Slope reversed"));
}
