use cubic_grid::{
    range_len, CubicCoordinate, CubicVector, Grid, GridConfig,
    HexagonOrientation,
};

/// Sanity check, make sure the default grid config doesn't horrifically crash
/// and burn
#[test]
fn test_grid_default() {
    let grid = Grid::new(GridConfig::default()).unwrap();
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.orientation(), HexagonOrientation::VertexUp);
}

#[test]
fn test_grid_large() {
    let config = GridConfig {
        center: CubicCoordinate::from_qr(-40, 17).unwrap(),
        radius: 400,
        ..Default::default()
    };
    let grid = Grid::new(config).unwrap();
    assert_eq!(grid.len(), 481201);
    assert_eq!(grid.len(), range_len(400));
}

/// A small neighborhood scenario: a one-step grid around the
/// origin holds the origin plus its six neighbors
#[test]
fn test_grid_neighborhood() {
    let grid = Grid::new(GridConfig {
        radius: 1,
        ..Default::default()
    })
    .unwrap();
    let neighbor = CubicCoordinate::ZERO + CubicVector::QR;
    assert_eq!(neighbor, CubicCoordinate::new(1, -1, 0).unwrap());
    assert_eq!(CubicCoordinate::ZERO.distance_to(neighbor), 1);
    assert_eq!(grid.len(), 7);
    for cell in CubicCoordinate::ZERO.adjacents() {
        assert!(grid.contains(cell));
    }
}

/// Every cell on a line between two cells of a grid is also in the grid,
/// since a range is convex
#[test]
fn test_grid_line_stays_inside() {
    let grid = Grid::new(GridConfig {
        radius: 6,
        ..Default::default()
    })
    .unwrap();
    let ring = CubicCoordinate::ZERO.ring(6);
    for &a in &ring {
        for &b in &ring {
            for cell in a.line_to(b) {
                assert!(grid.contains(cell), "{} -> {} left grid", a, b);
            }
        }
    }
}

#[cfg(feature = "json")]
#[test]
fn test_grid_json() {
    let grid = Grid::new(GridConfig {
        orientation: HexagonOrientation::EdgeUp,
        center: CubicCoordinate::from_qr(2, -1).unwrap(),
        radius: 3,
    })
    .unwrap();
    let json = grid.to_json().unwrap();
    assert_eq!(
        json,
        r#"{"orientation":"edge_up","center":{"q":2,"r":-1,"s":-1},"radius":3}"#
    );
    assert_eq!(Grid::from_json(&json).unwrap(), grid);
    assert!(Grid::from_json(r#"{"center":{"q":1,"r":1,"s":1}}"#).is_err());
}
