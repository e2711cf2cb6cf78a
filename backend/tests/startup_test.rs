use std::process::Command;

#[test]
fn test_invalid_config_logs_once_and_exits_with_status_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_txn-tracker-backend"))
        .current_dir(std::env::temp_dir())
        .env_remove("DATABASE_URL")
        .env_remove("LOKI_ENABLED")
        .env("STORAGE_BACKEND", "sqlite")
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to launch server binary");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);
    assert_eq!(combined.matches("invalid configuration").count(), 1, "{}", combined);
    assert!(combined.contains("STORAGE_BACKEND"));
    assert!(!stderr.contains("Error: "), "{}", stderr);
}
