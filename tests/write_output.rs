use receipt_splash::{generate, splash_animation, write, SplashConfig, SplashError, SplashSummary};
use std::fs;
use std::path::PathBuf;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn generate_writes_indented_json_and_reports_it() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("splash_animation.json");

    let summary = generate(&SplashConfig::default(), &path, true).expect("generation succeeds");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"v\""));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["layers"].as_array().unwrap().len(), 7);

    assert_eq!(summary.output, path);
    assert_eq!(summary.total_frames, 120.0);
    assert_eq!(summary.width, 200);
    assert_eq!(summary.height, 200);
}

#[test]
fn summary_prints_three_status_lines() {
    let summary = SplashSummary {
        output: PathBuf::from("../assets/splash_animation.json"),
        duration_seconds: 2.0,
        total_frames: 120.0,
        fps: 60.0,
        width: 200,
        height: 200,
    };
    assert_eq!(
        summary.to_string(),
        "✓ Lottie animation saved to ../assets/splash_animation.json\n  - Duration: 2.0s (120 frames @ 60fps)\n  - Canvas: 200x200"
    );
}

#[test]
fn compact_output_has_no_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compact.json");

    let bytes = write(&splash_animation(), &path, false).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(bytes, text.len());
    assert!(!text.contains('\n'));
}

#[test]
fn running_twice_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    generate(&SplashConfig::default(), &first, true).unwrap();
    generate(&SplashConfig::default(), &second, true).unwrap();
    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn missing_directory_surfaces_the_io_error() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("splash_animation.json");

    let err = generate(&SplashConfig::default(), &path, true).unwrap_err();
    let SplashError::Write { path: failed, source } = &err else {
        panic!("expected a write error, got {err:?}");
    };
    assert_eq!(failed, &path);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().starts_with("failed to write"));
    assert!(!path.exists());
}

#[test]
fn inconsistent_timing_is_caught_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    // Half a second leaves the checkmark finishing after the out point.
    let config = SplashConfig {
        duration_seconds: 0.5,
        ..SplashConfig::default()
    };

    let err = generate(&config, &path, true).unwrap_err();
    assert!(matches!(err, SplashError::Audit(_)), "{err:?}");
    assert!(!path.exists());
}
