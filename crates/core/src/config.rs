use crate::{CubicCoordinate, HexagonOrientation};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a grid. Two grids built from the same config
/// will always hold exactly the same cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// How the grid should be drawn. This has no bearing on which cells are
    /// in the grid, it's only carried along for whatever ends up rendering
    /// it.
    pub orientation: HexagonOrientation,

    /// The cell at the center of the grid. When deserializing, this must
    /// satisfy `q + r + s = 0` or the whole config is rejected.
    pub center: CubicCoordinate,

    /// Distance from the center of the grid to the edge (in cells). 0 means
    /// the grid is exactly 1 cell, 1 means 7 cells, and so on. Capped so
    /// that every valid config can be materialized in memory.
    #[validate(range(min = 0, max = 1000))]
    pub radius: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: HexagonOrientation::default(),
            center: CubicCoordinate::ZERO,
            radius: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());

        let config: GridConfig =
            serde_json::from_str(r#"{"orientation": "edge_up", "radius": 4}"#)
                .unwrap();
        assert_eq!(config.orientation, HexagonOrientation::EdgeUp);
        assert_eq!(config.center, CubicCoordinate::ZERO);
        assert_eq!(config.radius, 4);
    }

    #[test]
    fn test_deserialize_center() {
        let config: GridConfig = serde_json::from_str(
            r#"{"center": {"q": 2, "r": -2, "s": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.center, CubicCoordinate::from_qr(2, -2).unwrap());

        let error = serde_json::from_str::<GridConfig>(
            r#"{"center": {"q": 2, "r": 2, "s": 0}}"#,
        )
        .unwrap_err();
        assert!(
            error.to_string().contains("q + r + s must equal 0"),
            "unexpected error: {}",
            error
        );
    }

    #[test]
    fn test_validate() {
        assert!(GridConfig::default().validate().is_ok());
        let config = GridConfig {
            radius: 1001,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.errors().contains_key("radius"));
    }
}
