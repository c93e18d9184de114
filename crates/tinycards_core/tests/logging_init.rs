use tinycards_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let first_dir = first.path().to_str().unwrap().to_string();
    let second_dir = second.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());
    init_logging("info", &first_dir).unwrap();
    init_logging("INFO", &first_dir).unwrap();

    let err = init_logging("debug", &first_dir).unwrap_err();
    assert!(err.contains("refusing to switch"), "unexpected error: {err}");
    let err = init_logging("info", &second_dir).unwrap_err();
    assert!(err.contains("refusing to switch"), "unexpected error: {err}");

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());
}

#[test]
fn init_logging_rejects_relative_directory() {
    let err = init_logging("info", "relative/logs").unwrap_err();
    assert!(err.contains("absolute"));
}
