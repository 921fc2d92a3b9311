//! # Plot Geometry
//!
//! Packages a calculated stress state as plain numeric primitives on the
//! normal stress (x) / shear stress (y) plane:
//!
//! - the circle as a closed polyline
//! - four construction lines (stress points, transformed stress, principal
//!   stresses, max-shear centre line)
//! - named marker points
//! - vertical and horizontal reference lines through the x-face stress point
//! - legend names, colors, and chart titles
//!
//! Nothing here knows how to draw. A renderer walks [`PlotGeometry::traces`],
//! [`PlotGeometry::markers`] and [`PlotGeometry::reference_lines`] and maps
//! them onto its own primitives.
//!
//! ## Sign Convention
//!
//! The x-face point is plotted at (σx, −τxz) and the z-face point at
//! (σz, τxz). The transformed points reuse the same pattern, (σx′, −τ′) and
//! (σz′, τ′).

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::mohr_circle::{
    CircleGeometry, PrincipalStresses, StressState, TransformedStresses,
};
use crate::settings::PlotSettings;

/// Marker size used for every named point
pub const MARKER_SIZE: f32 = 10.0;

/// Stroke width of the reference lines
pub const REFERENCE_LINE_WIDTH: f32 = 1.0;

// ============================================================================
// Primitives
// ============================================================================

/// A point on the (σ, τ) plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        PlotPoint { x, y }
    }
}

/// A two-point line segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub start: PlotPoint,
    pub end: PlotPoint,
}

impl Segment {
    pub fn new(start: PlotPoint, end: PlotPoint) -> Self {
        Segment { start, end }
    }

    pub fn midpoint(&self) -> PlotPoint {
        PlotPoint::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Named colors used by the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotColor {
    Black,
    Red,
    Cyan,
    Blue,
    Magenta,
}

impl PlotColor {
    /// RGB components in 0.0..=1.0
    pub fn rgb(self) -> [f32; 3] {
        match self {
            PlotColor::Black => [0.0, 0.0, 0.0],
            PlotColor::Red => [1.0, 0.0, 0.0],
            PlotColor::Cyan => [0.0, 1.0, 1.0],
            PlotColor::Blue => [0.0, 0.0, 1.0],
            PlotColor::Magenta => [1.0, 0.0, 1.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlotColor::Black => "black",
            PlotColor::Red => "red",
            PlotColor::Cyan => "cyan",
            PlotColor::Blue => "blue",
            PlotColor::Magenta => "magenta",
        }
    }
}

// ============================================================================
// Line traces
// ============================================================================

/// The four construction lines of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstructionLines {
    /// (σx, −τxz) to (σz, τxz)
    pub stress: Segment,

    /// (σx′, −τ′) to (σz′, τ′)
    pub transformed: Segment,

    /// (σ2, 0) to (σ1, 0)
    pub principal: Segment,

    /// (C, −R) to (C, R)
    pub max_shear: Segment,
}

/// Line traces in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Circle,
    CenterLines,
    PrincipalStresses,
    StressPoints,
    TransformedStress,
}

impl TraceKind {
    pub const ALL: [TraceKind; 5] = [
        TraceKind::Circle,
        TraceKind::CenterLines,
        TraceKind::PrincipalStresses,
        TraceKind::StressPoints,
        TraceKind::TransformedStress,
    ];

    /// Legend entry
    pub fn legend_name(self) -> &'static str {
        match self {
            TraceKind::Circle => "Mohr's Circle",
            TraceKind::CenterLines => "Center Lines",
            TraceKind::PrincipalStresses => "Principle Stresses",
            TraceKind::StressPoints => "Stress Points",
            TraceKind::TransformedStress => "Transformed Stress",
        }
    }

    pub fn color(self) -> PlotColor {
        match self {
            TraceKind::Circle | TraceKind::CenterLines | TraceKind::PrincipalStresses => PlotColor::Black,
            TraceKind::StressPoints => PlotColor::Red,
            TraceKind::TransformedStress => PlotColor::Cyan,
        }
    }
}

/// A polyline ready to stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub kind: TraceKind,
    pub points: Vec<PlotPoint>,
}

// ============================================================================
// Markers and reference lines
// ============================================================================

/// Named points drawn on top of the traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    SigmaX,
    SigmaZ,
    MajorPrincipal,
    MinorPrincipal,
    Centre,
    TransformedX,
    TransformedZ,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 7] = [
        MarkerKind::SigmaX,
        MarkerKind::SigmaZ,
        MarkerKind::MajorPrincipal,
        MarkerKind::MinorPrincipal,
        MarkerKind::Centre,
        MarkerKind::TransformedX,
        MarkerKind::TransformedZ,
    ];

    pub fn legend_name(self) -> &'static str {
        match self {
            MarkerKind::SigmaX => "σx",
            MarkerKind::SigmaZ => "σz",
            MarkerKind::MajorPrincipal => "σ'1",
            MarkerKind::MinorPrincipal => "σ'2",
            MarkerKind::Centre => "Centre",
            MarkerKind::TransformedX => "Transformed Point 1",
            MarkerKind::TransformedZ => "Transformed Point 2",
        }
    }

    pub fn color(self) -> PlotColor {
        match self {
            MarkerKind::SigmaX | MarkerKind::TransformedX | MarkerKind::TransformedZ => PlotColor::Cyan,
            MarkerKind::SigmaZ => PlotColor::Black,
            MarkerKind::MajorPrincipal => PlotColor::Blue,
            MarkerKind::MinorPrincipal => PlotColor::Red,
            MarkerKind::Centre => PlotColor::Magenta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: PlotPoint,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// x = value
    Vertical,
    /// y = value
    Horizontal,
}

/// An unbounded line spanning the whole plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
    pub color: PlotColor,
    pub width: f32,
}

// ============================================================================
// Layout and bounds
// ============================================================================

/// Chart titles and axis behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,

    /// One unit of normal stress spans the same length as one unit of shear
    pub equal_aspect: bool,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            title: "Mohr's Circle of Stresses".to_string(),
            x_axis_title: "Normal Stress (σx)".to_string(),
            y_axis_title: "Shear Stress (τxz)".to_string(),
            equal_aspect: true,
        }
    }
}

/// Axis-aligned extents of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds of a single point
    pub fn at(point: PlotPoint) -> Self {
        Bounds {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    pub fn include(&mut self, point: PlotPoint) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> PlotPoint {
        PlotPoint::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Grow each side by `fraction` of the larger extent.
    ///
    /// Zero-size bounds (a degenerate circle) grow by one unit instead so the
    /// view never collapses.
    pub fn padded(&self, fraction: f64) -> Self {
        let extent = self.width().max(self.height());
        let pad = if extent > 0.0 { extent * fraction } else { 1.0 };
        Bounds {
            min_x: self.min_x - pad,
            max_x: self.max_x + pad,
            min_y: self.min_y - pad,
            max_y: self.max_y + pad,
        }
    }
}

// ============================================================================
// PlotGeometry
// ============================================================================

/// Everything a renderer needs to draw the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    /// Closed polyline around the circle; first point == last point
    pub circle: Vec<PlotPoint>,

    pub lines: ConstructionLines,
    pub markers: Vec<Marker>,
    pub reference_lines: Vec<ReferenceLine>,
    pub layout: ChartLayout,

    /// Copied from the circle so renderers need not look elsewhere
    pub center: f64,
    pub radius: f64,
}

impl PlotGeometry {
    /// Assemble the plot from calculated stresses.
    pub fn build(
        state: &StressState,
        circle: &CircleGeometry,
        principal: &PrincipalStresses,
        transformed: &TransformedStresses,
        settings: &PlotSettings,
    ) -> Self {
        let x_face = PlotPoint::new(state.sigma_x, -state.tau_xz);
        let z_face = PlotPoint::new(state.sigma_z, state.tau_xz);
        let x_face_rotated = PlotPoint::new(transformed.sigma_x, -transformed.tau);
        let z_face_rotated = PlotPoint::new(transformed.sigma_z, transformed.tau);
        let major = PlotPoint::new(principal.major, 0.0);
        let minor = PlotPoint::new(principal.minor, 0.0);
        let centre = PlotPoint::new(circle.center, 0.0);

        let lines = ConstructionLines {
            stress: Segment::new(x_face, z_face),
            transformed: Segment::new(x_face_rotated, z_face_rotated),
            principal: Segment::new(minor, major),
            max_shear: Segment::new(
                PlotPoint::new(circle.center, -circle.radius),
                PlotPoint::new(circle.center, circle.radius),
            ),
        };

        let markers = MarkerKind::ALL
            .iter()
            .map(|&kind| {
                let position = match kind {
                    MarkerKind::SigmaX => x_face,
                    MarkerKind::SigmaZ => z_face,
                    MarkerKind::MajorPrincipal => major,
                    MarkerKind::MinorPrincipal => minor,
                    MarkerKind::Centre => centre,
                    MarkerKind::TransformedX => x_face_rotated,
                    MarkerKind::TransformedZ => z_face_rotated,
                };
                Marker {
                    kind,
                    position,
                    size: MARKER_SIZE,
                }
            })
            .collect();

        let reference_lines = vec![
            ReferenceLine {
                orientation: Orientation::Vertical,
                value: state.sigma_x,
                color: PlotColor::Blue,
                width: REFERENCE_LINE_WIDTH,
            },
            ReferenceLine {
                orientation: Orientation::Horizontal,
                value: state.tau_xz,
                color: PlotColor::Blue,
                width: REFERENCE_LINE_WIDTH,
            },
        ];

        PlotGeometry {
            circle: sample_circle(circle, settings.circle_samples),
            lines,
            markers,
            reference_lines,
            layout: ChartLayout::default(),
            center: circle.center,
            radius: circle.radius,
        }
    }

    /// A zero radius circle is drawn as a single point at (C, 0).
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }

    /// Line traces in drawing order: circle, centre line, principal line,
    /// stress line, transformed line.
    pub fn traces(&self) -> Vec<Trace> {
        TraceKind::ALL
            .iter()
            .map(|&kind| {
                let points = match kind {
                    TraceKind::Circle => self.circle.clone(),
                    TraceKind::CenterLines => segment_points(&self.lines.max_shear),
                    TraceKind::PrincipalStresses => segment_points(&self.lines.principal),
                    TraceKind::StressPoints => segment_points(&self.lines.stress),
                    TraceKind::TransformedStress => segment_points(&self.lines.transformed),
                };
                Trace { kind, points }
            })
            .collect()
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    /// Extents of the circle, construction lines, and markers.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::at(PlotPoint::new(self.center, 0.0));
        for point in &self.circle {
            bounds.include(*point);
        }
        for segment in [
            &self.lines.stress,
            &self.lines.transformed,
            &self.lines.principal,
            &self.lines.max_shear,
        ] {
            bounds.include(segment.start);
            bounds.include(segment.end);
        }
        for marker in &self.markers {
            bounds.include(marker.position);
        }
        bounds
    }
}

/// Sample `samples` points uniformly over the closed interval [0, 2π].
///
/// The final point is pinned to the first so the polyline closes exactly.
pub fn sample_circle(circle: &CircleGeometry, samples: usize) -> Vec<PlotPoint> {
    let steps = samples.saturating_sub(1).max(1) as f64;
    let mut points: Vec<PlotPoint> = (0..samples)
        .map(|i| {
            let t = TAU * i as f64 / steps;
            PlotPoint::new(circle.center + circle.radius * t.cos(), circle.radius * t.sin())
        })
        .collect();

    if let Some(&first) = points.first() {
        if let Some(last) = points.last_mut() {
            *last = first;
        }
    }

    trace!(samples = points.len(), "sampled circle");
    points
}

fn segment_points(segment: &Segment) -> Vec<PlotPoint> {
    vec![segment.start, segment.end]
}
