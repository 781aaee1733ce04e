//! Integration tests for bedtime estimation.

use betterrest_core::{
    BedtimeEstimator, CaffeineIntake, ClockStyle, Coefficients, Config, CoreError, SleepGoal,
    SleepModel, WakeTime,
};

fn write_model(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("model.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_identity_model_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(
        dir.path(),
        r#"
[model]
name = "Identity"

[coefficients]
intercept = 0.0
wake = 0.0
estimated_sleep = 1.0
coffee = 0.0
"#,
    );

    let estimator = BedtimeEstimator::from_path(&path).unwrap();
    assert_eq!(estimator.model().model.name, "Identity");

    let bedtime = estimator
        .estimate(
            "07:00".parse().unwrap(),
            SleepGoal::new(8.0).unwrap(),
            CaffeineIntake::new(0).unwrap(),
        )
        .unwrap();
    assert_eq!(bedtime.to_string(), "23:00");
}

#[test]
fn test_missing_model_file_is_model_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = BedtimeEstimator::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CoreError::ModelUnavailable(_)));
}

#[test]
fn test_corrupt_model_file_is_model_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(dir.path(), "[coefficients]\nintercept = \"zero\"\n");
    let err = BedtimeEstimator::from_path(&path).unwrap_err();
    assert!(matches!(err, CoreError::ModelUnavailable(_)));
}

#[test]
fn test_boundary_inputs_with_bundled_model() {
    let estimator = BedtimeEstimator::bundled().unwrap();
    let wake = WakeTime::from_hm(7, 0).unwrap();

    let low = estimator.estimate(
        wake,
        SleepGoal::new(4.0).unwrap(),
        CaffeineIntake::new(0).unwrap(),
    );
    let high = estimator.estimate(
        wake,
        SleepGoal::new(12.0).unwrap(),
        CaffeineIntake::new(20).unwrap(),
    );

    assert!(low.is_ok());
    assert!(high.is_ok());
    let low = low.unwrap().minute_of_day();
    let high = high.unwrap().minute_of_day();
    assert_ne!(low, high);
}

#[test]
fn test_bundled_default_form_values() {
    let estimator = BedtimeEstimator::bundled().unwrap();
    let report = estimator
        .report(WakeTime::default(), SleepGoal::default(), CaffeineIntake::default())
        .unwrap();
    // Around eight hours before 07:00.
    let hour = report.bedtime.hour();
    assert!(hour == 22 || hour == 23, "bedtime {}", report.bedtime);
}

#[test]
fn test_describe_matches_form_sentence() {
    let estimator = BedtimeEstimator::new(
        SleepModel::new(Coefficients {
            intercept: 0.5,
            wake: 0.0,
            estimated_sleep: 1.0,
            coffee: 0.25,
        })
        .unwrap(),
    );
    let text = estimator.describe(
        WakeTime::from_hm(6, 30).unwrap(),
        SleepGoal::new(7.5).unwrap(),
        CaffeineIntake::new(2).unwrap(),
        ClockStyle::TwentyFourHour,
    );
    // 0.5 + 7.5 + 0.5 = 8.5h before 06:30
    assert_eq!(text, "Your ideal bedtime is 22:00");
}

#[test]
fn test_config_selects_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = write_model(
        dir.path(),
        "[coefficients]\nintercept = 1.0\nwake = 0.0\nestimated_sleep = 1.0\ncoffee = 0.0\n",
    );
    let config_path = dir.path().join("config.toml");

    let mut config = Config::load_from(&config_path).unwrap();
    config
        .set("model.path", model_path.to_str().unwrap())
        .unwrap();
    config.save_to(&config_path).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let estimator = config.estimator().unwrap();
    let bedtime = estimator
        .estimate(
            config.wake_time().unwrap(),
            config.sleep_goal().unwrap(),
            config.caffeine().unwrap(),
        )
        .unwrap();
    // 1h + 8h before 07:00
    assert_eq!(bedtime.to_string(), "22:00");
}

#[test]
fn test_config_with_missing_model_file_fails_at_estimator() {
    let mut config = Config::default();
    config.set("model.path", "/no/such/model.toml").unwrap();
    assert!(matches!(
        config.estimator(),
        Err(CoreError::ModelUnavailable(_))
    ));
}
