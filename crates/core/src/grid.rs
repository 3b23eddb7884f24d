use crate::{
    timed, CoordinateSet, CubicCoordinate, CubicRange, GridConfig,
    HexagonOrientation, UnsignedGridUnit,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hexagonal grid: a super hexagon of cells around a center, plus the
/// orientation it should be drawn in. The grid is fully defined by its
/// [GridConfig], and once built it can't change. Use [Grid::resize] or
/// [Grid::recenter] to build a modified copy.
///
/// ## Serialization
/// Only the config is serialized. The cells are regenerated when the grid is
/// loaded, and the config is validated the same way [Grid::new] does it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfig", into = "GridConfig")]
pub struct Grid {
    /// The config used to build this grid
    config: GridConfig,
    /// Every cell in the grid
    range: CubicRange,
}

impl Grid {
    /// Build a new grid with the given config. Returns an error if the config
    /// is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building grid with config {:?}", config);

        config.validate().context("invalid grid config")?;

        let range = timed!(
            "Grid range generation",
            CubicRange::new(config.center, config.radius)
        );

        Ok(Self { config, range })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// How the cells of this grid should be laid out when drawn
    pub fn orientation(&self) -> HexagonOrientation {
        self.config.orientation
    }

    /// Get a reference to the range that holds all the cells in this grid
    pub fn range(&self) -> &CubicRange {
        &self.range
    }

    /// Get a reference to the set of all the cells in this grid
    pub fn coordinates(&self) -> &CoordinateSet {
        self.range.coordinates()
    }

    /// Is the given cell part of this grid?
    pub fn contains(&self, coordinate: CubicCoordinate) -> bool {
        self.range.contains(coordinate)
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// A grid always has at least one cell, so this is never true
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Build a copy of this grid with a different radius. The cells are
    /// regenerated from scratch. Fails if the new radius is out of bounds.
    pub fn resize(&self, radius: UnsignedGridUnit) -> anyhow::Result<Self> {
        Self::new(GridConfig {
            radius,
            ..self.config
        })
    }

    /// Build a copy of this grid around a different center. The cells are
    /// regenerated from scratch.
    pub fn recenter(&self, center: CubicCoordinate) -> anyhow::Result<Self> {
        Self::new(GridConfig {
            center,
            ..self.config
        })
    }

    /// Deserialize a grid from JSON. A grid can be serialized into JSON with
    /// [Grid::to_json]. Will fail if the input is malformed or the config it
    /// holds is invalid.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing grid")
    }

    /// Serialize this grid into JSON. Only the config is written out.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("error serializing grid")
    }
}

impl TryFrom<GridConfig> for Grid {
    type Error = anyhow::Error;

    fn try_from(config: GridConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<Grid> for GridConfig {
    fn from(grid: Grid) -> Self {
        grid.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubicVector;

    #[test]
    fn test_new() {
        let grid = Grid::new(GridConfig {
            orientation: HexagonOrientation::EdgeUp,
            center: CubicCoordinate::from_qr(3, 3).unwrap(),
            radius: 2,
        })
        .unwrap();
        assert_eq!(grid.len(), 19);
        assert_eq!(grid.orientation(), HexagonOrientation::EdgeUp);
        assert_eq!(
            grid.range().center(),
            CubicCoordinate::from_qr(3, 3).unwrap()
        );
        assert!(grid.contains(CubicCoordinate::from_qr(3, 3).unwrap()));
        assert!(grid.contains(CubicCoordinate::from_qr(5, 1).unwrap()));
        assert!(!grid.contains(CubicCoordinate::ZERO));
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_new_default() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        assert_eq!(grid.coordinates().len(), 1);
        assert!(grid.contains(CubicCoordinate::ZERO));
    }

    #[test]
    fn test_new_invalid() {
        let error = Grid::new(GridConfig {
            radius: 2000,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(error.to_string(), "invalid grid config");
    }

    #[test]
    fn test_resize_and_recenter() {
        let grid = Grid::new(GridConfig {
            radius: 1,
            ..Default::default()
        })
        .unwrap();

        let bigger = grid.resize(3).unwrap();
        assert_eq!(bigger.len(), 37);
        assert_eq!(bigger.orientation(), grid.orientation());
        assert_eq!(grid.len(), 7);

        let target = CubicCoordinate::ZERO + CubicVector::S * 5;
        let moved = grid.recenter(target).unwrap();
        assert_eq!(moved.len(), 7);
        assert!(moved.contains(target));
        assert!(!moved.contains(CubicCoordinate::ZERO));

        assert!(grid.resize(1001).is_err());
    }

    #[test]
    fn test_serde() {
        let grid = Grid::new(GridConfig {
            radius: 2,
            ..Default::default()
        })
        .unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let parsed: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);

        // Invalid configs are rejected on load too
        let result = serde_json::from_str::<Grid>(r#"{"radius": 1001}"#);
        assert!(result.is_err());
    }
}
