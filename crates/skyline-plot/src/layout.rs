//! Layout and camera descriptor handed to the renderer alongside the traces.

use glam::Vec3;

use crate::color::Color;
use crate::control::ControlAction;
use crate::request::ChartKind;
use crate::schema::AxisFields;

/// Light/dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Scene/paper background color.
    pub fn background(&self) -> Color {
        match self {
            Theme::Light => Color::from_hex(0xF7F9FC),
            Theme::Dark => Color::from_hex(0x12161F),
        }
    }

    /// Axis label and annotation font color.
    pub fn font_color(&self) -> Color {
        match self {
            Theme::Light => Color::from_hex(0x2B2F36),
            Theme::Dark => Color::from_hex(0xD8DEE9),
        }
    }

    /// Background for hover labels.
    pub fn hover_background(&self) -> Color {
        match self {
            Theme::Light => Color::WHITE.with_alpha(0.95),
            Theme::Dark => Color::from_hex(0x1E2430).with_alpha(0.95),
        }
    }
}

/// Initial camera pose for the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// Default pose for a chart kind. Bar charts get a steeper eye elevation
    /// so bar tops stay distinguishable at the default zoom.
    pub fn for_chart(kind: ChartKind) -> Self {
        let eye = match kind {
            ChartKind::Bar3d => Vec3::new(1.4, 1.4, 2.0),
            _ => Vec3::new(1.5, 1.5, 1.2),
        };
        Self {
            eye,
            center: Vec3::ZERO,
            up: Vec3::Z,
        }
    }
}

/// Renderer-agnostic layout descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub x_title: String,
    pub y_title: String,
    pub z_title: String,
    pub camera: CameraPose,
    pub theme: Theme,
    pub background: Color,
    pub font_color: Color,
    /// Human-readable summary of the reduction applied, when any was.
    pub annotation: Option<String>,
    /// Control actions the embedding UI may bind for this chart.
    pub actions: Vec<ControlAction>,
}

impl Layout {
    pub fn new(axes: &AxisFields, kind: ChartKind, theme: Theme) -> Self {
        Self {
            x_title: axes.x.clone(),
            y_title: axes.y.clone(),
            z_title: axes.z.clone(),
            camera: CameraPose::for_chart(kind),
            theme,
            background: theme.background(),
            font_color: theme.font_color(),
            annotation: None,
            actions: ControlAction::ALL.to_vec(),
        }
    }

    /// Attach the reduction annotation shown in a corner of the chart.
    pub fn with_reduction_note(mut self, original: usize, rendered: usize) -> Self {
        if rendered < original {
            self.annotation = Some(format!(
                "Showing {} of {} points ({:.1}% reduction)",
                rendered,
                original,
                (1.0 - rendered as f64 / original as f64) * 100.0
            ));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_camera_steeper() {
        let bar = CameraPose::for_chart(ChartKind::Bar3d);
        let scatter = CameraPose::for_chart(ChartKind::Scatter3d);
        assert!(bar.eye.z > scatter.eye.z);
        assert_eq!(bar.up, Vec3::Z);
    }

    #[test]
    fn test_reduction_note() {
        let axes = AxisFields::new("a", "b", "c");
        let layout = Layout::new(&axes, ChartKind::Scatter3d, Theme::Light)
            .with_reduction_note(1000, 250);
        assert_eq!(
            layout.annotation.as_deref(),
            Some("Showing 250 of 1000 points (75.0% reduction)")
        );
    }

    #[test]
    fn test_no_note_without_reduction() {
        let axes = AxisFields::new("a", "b", "c");
        let layout =
            Layout::new(&axes, ChartKind::Scatter3d, Theme::Dark).with_reduction_note(100, 100);
        assert_eq!(layout.annotation, None);
    }
}
