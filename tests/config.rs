use std::io::Write;

use aev_route_energy::config::load_vehicle_configs;
use aev_route_energy::route::vehicle::{self, VehicleError};
use aev_route_energy::units::mph_to_ms;
use aev_route_energy::vehicle::VehicleParameters;

const SHUTTLE_YAML: &str = "\
- name: shuttle
  max_velocity_ms: 11.176
  max_accel_ms2: 1.0
  max_jerk_ms3: 2.5
  drag_coefficient: 0.5
  rolling_resistance: 0.03
  mass_kg: 1350.0
  frontal_area_m2: 2.646
- name: cargo-cart
  max_velocity_ms: 6.7
  max_accel_ms2: 0.8
  max_jerk_ms3: 2.0
  drag_coefficient: 0.6
  rolling_resistance: 0.035
  mass_kg: 2100.0
  frontal_area_m2: 3.1
";

const SHUTTLE_TOML: &str = r#"
name = "shuttle"
max_velocity_ms = 11.176
max_accel_ms2 = 1.0
max_jerk_ms3 = 2.5
drag_coefficient = 0.5
rolling_resistance = 0.03
mass_kg = 1350.0
frontal_area_m2 = 2.646
"#;

#[test]
fn yaml_catalog_round_trips_into_validated_parameters() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp file");
    file.write_all(SHUTTLE_YAML.as_bytes()).expect("write yaml");

    let configs = load_vehicle_configs(file.path()).expect("load yaml");
    assert_eq!(configs.len(), 2);

    let params = vehicle::from_config(&configs[0]).expect("valid vehicle");
    assert_eq!(params.name, "shuttle");
    assert!((params.max_velocity_ms - 11.176).abs() < 1e-12);
    assert_eq!(params.mass_kg, 1350.0);
}

#[test]
fn toml_file_loads_a_single_vehicle() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(SHUTTLE_TOML.as_bytes()).expect("write toml");

    let configs = load_vehicle_configs(file.path()).expect("load toml");
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].name, "shuttle");
}

#[test]
fn selection_is_case_insensitive_and_reports_misses() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp file");
    file.write_all(SHUTTLE_YAML.as_bytes()).expect("write yaml");
    let configs = load_vehicle_configs(file.path()).expect("load yaml");

    let chosen = vehicle::select(&configs, Some("SHUTTLE")).expect("select by name");
    assert_eq!(chosen.name, "shuttle");

    // No request: first catalog entry wins.
    let default = vehicle::select(&configs, None).expect("select default");
    assert_eq!(default.name, "shuttle");

    let err = vehicle::select(&configs, Some("hovercraft")).unwrap_err();
    assert!(matches!(err, VehicleError::NotFound(_)), "got {err:?}");

    let err = vehicle::select(&[], None).unwrap_err();
    assert!(matches!(err, VehicleError::EmptyCatalog), "got {err:?}");
}

#[test]
fn invalid_catalog_entries_fail_conversion() {
    let mut config = {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        file.write_all(SHUTTLE_YAML.as_bytes()).expect("write yaml");
        load_vehicle_configs(file.path()).expect("load yaml").remove(0)
    };
    config.mass_kg = -10.0;

    let err = vehicle::from_config(&config).unwrap_err();
    assert!(matches!(err, VehicleError::Invalid(_)), "got {err:?}");
}

#[test]
fn named_default_matches_the_reference_design() {
    let params = VehicleParameters::city_default();
    params.validate().expect("default is valid");
    assert_eq!(params.max_velocity_ms, mph_to_ms(25.0));
    assert_eq!(params.mass_kg, 1350.0);
}

#[test]
fn version_smoke() {
    assert!(!aev_route_energy::version().is_empty());
}
