use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How hexagons are laid out visually. Both orientations describe the exact
/// same coordinate system, so nothing in this crate depends on which one is
/// used. It's purely a label for renderers, telling them how to map the
/// `q`/`r`/`s` axes onto the screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexagonOrientation {
    /// Hexagons stand on a vertex (⬢). The `q` axis runs from bottom-left
    /// (negative) to top-right (positive), `s` runs from top-left (positive)
    /// to bottom-right (negative), and `r` runs from bottom (positive) to top
    /// (negative).
    #[display(fmt = "vertex-up")]
    VertexUp,
    /// Hexagons lay on an edge (⬣). This is the vertex-up layout rotated
    /// clockwise so that the `q` axis is horizontal, running from left
    /// (negative) to right (positive).
    #[display(fmt = "edge-up")]
    EdgeUp,
}

impl Default for HexagonOrientation {
    fn default() -> Self {
        Self::VertexUp
    }
}
