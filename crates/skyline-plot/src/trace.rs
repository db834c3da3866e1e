//! Trace assembly: points to renderer-agnostic output units.

use glam::DVec3;

use crate::color::Color;
use crate::geometry::{BarSolid, max_abs_height, normalized_height};
use crate::layout::Theme;
use crate::palette::Palette;
use crate::point::Point3D;
use crate::request::ChartKind;
use crate::schema::AxisFields;

/// Width and depth of a bar footprint, in axis units. Categorical ordinals
/// are spaced 1.0 apart, so 0.8 leaves a visible gutter between bars.
pub const BAR_FOOTPRINT: f64 = 0.8;

/// Theme-derived hover label styling carried on each interactive trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    pub background: Color,
    pub font_color: Color,
}

impl HoverStyle {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            background: theme.hover_background(),
            font_color: theme.font_color(),
        }
    }
}

/// How a mesh trace is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshColor {
    /// One flat color for the whole mesh (bar solids).
    Uniform(Color),
    /// Per-vertex intensity mapped through a color scale.
    Scale {
        intensity: Vec<f64>,
        stops: Vec<(f32, Color)>,
    },
}

/// A renderer-agnostic output unit.
///
/// Bar mode emits one `Mesh3d` per bar plus a single `Marker` to host the
/// legend entry (solid meshes expose no legend swatch in common renderers);
/// every other kind emits a single trace.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Scatter3d {
        name: String,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        hover_text: Vec<String>,
        hover_style: HoverStyle,
        color_values: Vec<f64>,
        color_stops: Vec<(f32, Color)>,
        show_legend: bool,
    },
    Mesh3d {
        name: String,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        /// Explicit triangles; empty means the renderer hulls the cloud.
        faces: Vec<[u32; 3]>,
        color: MeshColor,
        hover_text: Vec<String>,
        hover_style: HoverStyle,
        show_legend: bool,
    },
    Surface {
        name: String,
        /// Row-major height grid.
        z_grid: Vec<Vec<f64>>,
        color_stops: Vec<(f32, Color)>,
        show_legend: bool,
    },
    /// Near-invisible single marker whose only job is the legend entry.
    Marker {
        name: String,
        position: DVec3,
        color: Color,
        opacity: f32,
        show_legend: bool,
    },
}

impl Trace {
    /// Whether this trace asks for a legend entry.
    pub fn shows_legend(&self) -> bool {
        match self {
            Trace::Scatter3d { show_legend, .. }
            | Trace::Mesh3d { show_legend, .. }
            | Trace::Surface { show_legend, .. }
            | Trace::Marker { show_legend, .. } => *show_legend,
        }
    }
}

fn hover_text(point: &Point3D, axes: &AxisFields) -> String {
    let mut text = format!(
        "{}: {}<br>{}: {}<br>{}: {}",
        axes.x, point.source_x, axes.y, point.source_y, axes.z, point.source_z
    );
    if let Some(info) = &point.aggregate {
        text.push_str(&format!("<br>aggregated from {} points", info.count));
        for sample in &info.samples {
            text.push_str(&format!(
                "<br>  ({:.3}, {:.3}, {:.3})",
                sample.x, sample.y, sample.z
            ));
        }
    }
    text
}

fn coordinate_arrays(points: &[Point3D]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x = points.iter().map(|p| p.x).collect();
    let y = points.iter().map(|p| p.y).collect();
    let z = points.iter().map(|p| p.z).collect();
    (x, y, z)
}

fn scatter_trace(
    points: &[Point3D],
    axes: &AxisFields,
    palette: &Palette,
    theme: Theme,
) -> Trace {
    let (x, y, z) = coordinate_arrays(points);
    Trace::Scatter3d {
        name: axes.z.clone(),
        color_values: z.clone(),
        x,
        y,
        z,
        hover_text: points.iter().map(|p| hover_text(p, axes)).collect(),
        hover_style: HoverStyle::for_theme(theme),
        color_stops: Palette::color_stops(&palette.gradient),
        show_legend: true,
    }
}

fn mesh_trace(points: &[Point3D], axes: &AxisFields, palette: &Palette, theme: Theme) -> Trace {
    let (x, y, z) = coordinate_arrays(points);
    Trace::Mesh3d {
        name: axes.z.clone(),
        color: MeshColor::Scale {
            intensity: z.clone(),
            stops: Palette::color_stops(&palette.gradient),
        },
        x,
        y,
        z,
        faces: Vec::new(),
        hover_text: points.iter().map(|p| hover_text(p, axes)).collect(),
        hover_style: HoverStyle::for_theme(theme),
        show_legend: true,
    }
}

/// Fold a point list into a square height grid: side `ceil(sqrt(n))`,
/// `row = i / side`, `col = i % side`, vacant cells at height 0.
fn surface_trace(points: &[Point3D], axes: &AxisFields, palette: &Palette) -> Trace {
    let side = (points.len() as f64).sqrt().ceil() as usize;
    let mut z_grid = vec![vec![0.0; side]; side];
    for (i, point) in points.iter().enumerate() {
        z_grid[i / side][i % side] = point.z;
    }
    Trace::Surface {
        name: axes.z.clone(),
        z_grid,
        color_stops: Palette::color_stops(&palette.surface),
        show_legend: true,
    }
}

fn bar_traces(points: &[Point3D], axes: &AxisFields, palette: &Palette, theme: Theme) -> Vec<Trace> {
    let max_abs = max_abs_height(points);
    let hover_style = HoverStyle::for_theme(theme);
    let mut traces: Vec<Trace> = points
        .iter()
        .map(|point| {
            let solid = BarSolid::build(
                point,
                BAR_FOOTPRINT,
                BAR_FOOTPRINT,
                normalized_height(point.z, max_abs),
                palette,
            );
            let (x, y, z) = solid.coordinate_arrays();
            Trace::Mesh3d {
                name: format!("{}: {}", axes.z, point.source_z),
                x,
                y,
                z,
                faces: solid.faces.to_vec(),
                color: MeshColor::Uniform(solid.color),
                hover_text: vec![hover_text(point, axes); 8],
                hover_style,
                show_legend: false,
            }
        })
        .collect();

    // Mesh traces carry no legend swatch, so a barely-visible marker hosts
    // the legend entry for the whole series.
    let anchor = points
        .first()
        .map(|p| DVec3::new(p.x, p.y, p.z))
        .unwrap_or(DVec3::ZERO);
    traces.push(Trace::Marker {
        name: axes.z.clone(),
        position: anchor,
        color: palette.accent[3],
        opacity: 0.01,
        show_legend: true,
    });
    traces
}

/// Package a reduced point set into traces for the requested chart kind.
pub fn assemble(
    points: &[Point3D],
    kind: ChartKind,
    axes: &AxisFields,
    palette: &Palette,
    theme: Theme,
) -> Vec<Trace> {
    if points.is_empty() {
        return Vec::new();
    }
    match kind {
        ChartKind::Scatter3d => vec![scatter_trace(points, axes, palette, theme)],
        ChartKind::Mesh3d => vec![mesh_trace(points, axes, palette, theme)],
        ChartKind::Surface3d => vec![surface_trace(points, axes, palette)],
        ChartKind::Bar3d => bar_traces(points, axes, palette, theme),
    }
}
