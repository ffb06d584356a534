// SPDX-License-Identifier: MPL-2.0
//! Crop/resize mode selection for the rendering surface.

/// User-facing crop choice offered by the crop menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeMode {
    /// Whole frame visible, letterboxed.
    #[default]
    Original,
    /// Frame stretched to the surface; aspect ratio is not preserved.
    Fill,
    /// Frame zoomed until the surface is covered; edges are cropped.
    Fit,
}

/// Scaling behaviour understood by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingMode {
    Letterbox,
    Stretch,
    Zoom,
}

impl ResizeMode {
    /// Menu entries, in display order.
    pub const ALL: [Self; 3] = [Self::Original, Self::Fill, Self::Fit];

    /// Surface scaling applied for this choice.
    #[must_use]
    pub fn scaling(self) -> ScalingMode {
        match self {
            Self::Original => ScalingMode::Letterbox,
            Self::Fill => ScalingMode::Stretch,
            Self::Fit => ScalingMode::Zoom,
        }
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Fill => "Fill",
            Self::Fit => "Fit",
        }
    }

    /// Parses a menu label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_maps_to_distinct_scaling() {
        assert_eq!(ResizeMode::Original.scaling(), ScalingMode::Letterbox);
        assert_eq!(ResizeMode::Fill.scaling(), ScalingMode::Stretch);
        assert_eq!(ResizeMode::Fit.scaling(), ScalingMode::Zoom);
    }

    #[test]
    fn menu_order_matches_labels() {
        let labels: Vec<_> = ResizeMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Original", "Fill", "Fit"]);
    }

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(ResizeMode::from_label("fill"), Some(ResizeMode::Fill));
        assert_eq!(ResizeMode::from_label(" FIT "), Some(ResizeMode::Fit));
        assert_eq!(ResizeMode::from_label("zoom"), None);
    }
}
