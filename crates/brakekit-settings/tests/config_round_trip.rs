use brakekit_core::{DeductionStrategy, LengthReference, MaterialSpec, TrailingAngle};
use brakekit_settings::config::{FlipMode, MeasurementSystem};
use brakekit_settings::{Config, SettingsError};
use tempfile::tempdir;

fn customized() -> Config {
    let mut config = Config::new();
    config.convention = config
        .convention
        .with_deduction(DeductionStrategy::KFactor { k_factor: 0.42 })
        .with_length_reference(LengthReference::Inner)
        .with_trailing_angle(TrailingAngle::Active);
    config.material = MaterialSpec::named("Aluminium 3mm", 3.0, 4.5);
    config.simulation.frames_per_bend = 48;
    config.simulation.flip = FlipMode::NoFlip;
    config.display.measurement_system = MeasurementSystem::Imperial;
    config.display.decimals = 3;
    config
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[display]\nmeasurement_system = \"imperial\"\n\n[convention.deduction]\nkind = \"tangent\"\n",
    )
    .unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.display.measurement_system, MeasurementSystem::Imperial);
    assert_eq!(loaded.display.decimals, 1);
    assert_eq!(loaded.convention.deduction, DeductionStrategy::Tangent);
    assert_eq!(loaded.material, MaterialSpec::default());
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "simulation": { "frame_interval_ms": 0 } }"#).unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(_))
    ));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Config::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(SettingsError::IoError(_))));
}
