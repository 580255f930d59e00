//! Wiring diagram selection by panel count.

use std::fmt;

use serde::Serialize;

/// Upper bound (inclusive) of the small-installation bucket.
pub const SMALL_MAX_PANELS: i64 = 10;
/// Upper bound (inclusive) of the medium-installation bucket.
pub const MEDIUM_MAX_PANELS: i64 = 20;

/// Symbolic name of a static wiring diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum DiagramId {
    /// Up to 10 panels.
    TenPanels,
    /// 11 to 20 panels.
    TwentyPanels,
    /// More than 20 panels.
    Default,
}

impl DiagramId {
    pub const ALL: [DiagramId; 3] = [Self::TenPanels, Self::TwentyPanels, Self::Default];

    /// Identifier string used to look up the diagram resource.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TenPanels => "conexion_10_paneles",
            Self::TwentyPanels => "conexion_20_paneles",
            Self::Default => "conexion_default",
        }
    }
}

impl From<DiagramId> for &'static str {
    fn from(id: DiagramId) -> Self {
        id.as_str()
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a panel count to its diagram.
///
/// Thresholds are evaluated in order: `<= 10`, `<= 20`, otherwise default.
/// Zero and negative counts land in the smallest bucket.
///
/// # Examples
///
/// ```
/// use solar_sizer::sizing::diagram::{DiagramId, select_diagram};
///
/// assert_eq!(select_diagram(10), DiagramId::TenPanels);
/// assert_eq!(select_diagram(11), DiagramId::TwentyPanels);
/// assert_eq!(select_diagram(21), DiagramId::Default);
/// ```
pub fn select_diagram(panel_count: i64) -> DiagramId {
    if panel_count <= SMALL_MAX_PANELS {
        DiagramId::TenPanels
    } else if panel_count <= MEDIUM_MAX_PANELS {
        DiagramId::TwentyPanels
    } else {
        DiagramId::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(select_diagram(1), DiagramId::TenPanels);
        assert_eq!(select_diagram(10), DiagramId::TenPanels);
        assert_eq!(select_diagram(11), DiagramId::TwentyPanels);
        assert_eq!(select_diagram(20), DiagramId::TwentyPanels);
        assert_eq!(select_diagram(21), DiagramId::Default);
        assert_eq!(select_diagram(i64::MAX), DiagramId::Default);
    }

    #[test]
    fn non_positive_counts_use_smallest_diagram() {
        assert_eq!(select_diagram(0), DiagramId::TenPanels);
        assert_eq!(select_diagram(-3), DiagramId::TenPanels);
    }

    #[test]
    fn identifiers_match_resource_names() {
        assert_eq!(DiagramId::TenPanels.to_string(), "conexion_10_paneles");
        assert_eq!(DiagramId::TwentyPanels.to_string(), "conexion_20_paneles");
        assert_eq!(DiagramId::Default.to_string(), "conexion_default");
    }
}
