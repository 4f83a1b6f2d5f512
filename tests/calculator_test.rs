use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use training_stats::calculator::{sample_packages, Calculator, Package};
use training_stats::config::{Config, LabelsConfig};
use training_stats::{
    compute_report, create_workout, render_report, show_report, UnknownCodePolicy,
    WorkoutError, WorkoutFactory, WorkoutType,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_running_report() {
    let workout = create_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let report = compute_report(&workout, &LabelsConfig::default()).unwrap();

    assert_eq!(report.workout_type_name, "Running");
    assert_close(report.distance_km, 9.75);
    assert_close(report.mean_speed_kmh, 9.75);
    assert_close(report.calories_kcal, (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 60.0);
}

#[test]
fn test_swimming_report() {
    let workout = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let report = compute_report(&workout, &LabelsConfig::default()).unwrap();

    assert_eq!(report.workout_type_name, "Swimming");
    assert_close(report.distance_km, 0.9936);
    assert_close(report.mean_speed_kmh, 1.0);
    assert_close(report.calories_kcal, 336.0);
}

#[test]
fn test_sports_walking_report() {
    let workout = create_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let report = compute_report(&workout, &LabelsConfig::default()).unwrap();

    let speed_ms = 5.85 * 1000.0 / 3600.0;
    let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;

    assert_eq!(report.workout_type_name, "Sports Walking");
    assert_close(report.distance_km, 5.85);
    assert_close(report.mean_speed_kmh, 5.85);
    assert_close(report.calories_kcal, expected);
}

#[test]
fn test_rendered_sample_reports() {
    let rendered: Vec<String> = sample_packages()
        .iter()
        .map(|p| render_report(&create_workout(&p.code, &p.data).unwrap()).unwrap())
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000."
                .to_string(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 797.805."
                .to_string(),
            "Training type: Sports Walking; Duration: 1.000 h.; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 348.945."
                .to_string(),
        ]
    );
}

#[test]
fn test_show_report_returns_rendered_text() {
    let workout = create_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert_eq!(
        show_report(&workout, &LabelsConfig::default()).unwrap(),
        render_report(&workout).unwrap()
    );
}

#[test]
fn test_computation_is_repeatable() {
    let workout = create_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let labels = LabelsConfig::default();

    assert_eq!(
        compute_report(&workout, &labels).unwrap(),
        compute_report(&workout, &labels).unwrap()
    );
}

#[test]
fn test_zero_duration_fails_for_every_type() {
    let packages = [
        Package::new("RUN", vec![15000.0, 0.0, 75.0]),
        Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        Package::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ];
    let calculator = Calculator::default();

    for package in &packages {
        assert_eq!(
            calculator.report(package),
            Err(WorkoutError::DivisionByZero {
                quantity: "duration_hours"
            })
        );
    }
}

#[test]
fn test_zero_height_fails_for_walking() {
    let result = Calculator::default().report(&Package::new("WLK", vec![9000.0, 1.0, 75.0, 0.0]));

    assert_eq!(
        result,
        Err(WorkoutError::DivisionByZero {
            quantity: "height_cm"
        })
    );
}

#[test]
fn test_overflowing_inputs_are_reported() {
    let calculator = Calculator::default();
    let cases = [
        (Package::new("RUN", vec![15000.0, 1e-310, 75.0]), "mean_speed_kmh"),
        (Package::new("WLK", vec![9000.0, 1.0, 75.0, 1e-320]), "calories_kcal"),
        (Package::new("SWM", vec![720.0, 1.0, 1e308, 25.0, 40.0]), "calories_kcal"),
    ];

    for (package, quantity) in &cases {
        assert_eq!(
            calculator.report(package),
            Err(WorkoutError::NonFinite {
                quantity: *quantity
            })
        );
    }
}

#[test]
fn test_running_with_four_values_is_arity_error() {
    let result = create_workout("RUN", &[15000.0, 1.0, 75.0, 180.0]);

    assert_matches!(
        result,
        Err(WorkoutError::Arity {
            workout_type: WorkoutType::Running,
            expected: 3,
            actual: 4
        })
    );
}

#[test]
fn test_unknown_code_policy() {
    let data = [9000.0, 1.0, 75.0, 180.0];

    assert_eq!(
        WorkoutFactory::default().create("XYZ", &data),
        Err(WorkoutError::UnknownTypeCode("XYZ".to_string()))
    );

    let fallback = WorkoutFactory::new(UnknownCodePolicy::SportsWalking)
        .create("XYZ", &data)
        .unwrap();
    assert_eq!(fallback, create_workout("WLK", &data).unwrap());
}

#[test]
fn test_custom_labels_from_config() {
    let config = Config::from_toml(
        r#"
        [labels]
        running = "Бег"
        sports_walking = "Спортивная ходьба"
        swimming = "Плавание"
        "#,
    )
    .unwrap();

    let outcome = Calculator::from_config(&config).run_batch(&sample_packages());
    let names: Vec<&str> = outcome
        .reports
        .iter()
        .map(|r| r.workout_type_name.as_str())
        .collect();

    assert_eq!(names, vec!["Плавание", "Бег", "Спортивная ходьба"]);
}

#[test]
fn test_error_messages() {
    let arity = create_workout("SWM", &[720.0, 1.0]).unwrap_err();
    assert_eq!(arity.to_string(), "Swimming expects 5 values, got 2");

    let unknown = create_workout("BIKE", &[1.0]).unwrap_err();
    assert_eq!(unknown.to_string(), "Unknown workout type code: \"BIKE\"");
}
