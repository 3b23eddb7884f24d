use cubic_grid::{
    range_len, CubicCoordinate, Grid, GridConfig, HexagonOrientation,
};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        orientation: HexagonOrientation::EdgeUp, // valid
        center: CubicCoordinate::ZERO,           // valid
        radius: 1001,                            // invalid (too big)
    };

    // This is a bit of a lazy check but it works well enough
    let err = Grid::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["radius"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_grid_config_max_radius() {
    let config = GridConfig {
        radius: 1000,
        ..Default::default()
    };
    let grid = Grid::new(config).unwrap();
    assert_eq!(grid.len(), range_len(1000));
    assert_eq!(grid.len(), 3_003_001);
}
