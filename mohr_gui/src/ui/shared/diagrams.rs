//! Canvas drawing for Mohr's circle
//!
//! Renders the plot geometry computed by `mohr_core`: the circle, the four
//! construction lines, the reference lines through the x-face stress point,
//! the named markers, axes, titles, and a legend.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use mohr_core::plot::{Bounds, Orientation, PlotColor, PlotGeometry, PlotPoint, TraceKind};
use mohr_core::report::format_value;

use crate::Message;

const MARGIN: f32 = 40.0;
const LEGEND_WIDTH: f32 = 160.0;
const LEGEND_ROW_HEIGHT: f32 = 14.0;

/// Fraction of the data extent left empty around the circle
const VIEW_PADDING: f64 = 0.1;

/// Radius of the dot drawn for a zero-radius circle
const DEGENERATE_DOT_RADIUS: f32 = 3.0;

/// Maps (σ, τ) coordinates onto canvas pixels.
struct Viewport {
    area: Rectangle,
    bounds: Bounds,
    scale_x: f64,
    scale_y: f64,
    left: f32,
    bottom: f32,
}

impl Viewport {
    /// Fit `bounds` inside `area`, keeping one scale for both axes when
    /// `equal_aspect` is set and centring the leftover space.
    fn fit(bounds: Bounds, area: Rectangle, equal_aspect: bool) -> Self {
        let mut scale_x = f64::from(area.width) / bounds.width();
        let mut scale_y = f64::from(area.height) / bounds.height();
        if equal_aspect {
            let scale = scale_x.min(scale_y);
            scale_x = scale;
            scale_y = scale;
        }

        let used_width = (bounds.width() * scale_x) as f32;
        let used_height = (bounds.height() * scale_y) as f32;

        Viewport {
            area,
            bounds,
            scale_x,
            scale_y,
            left: area.x + (area.width - used_width) / 2.0,
            bottom: area.y + area.height - (area.height - used_height) / 2.0,
        }
    }

    fn to_screen(&self, point: PlotPoint) -> Point {
        Point::new(
            self.left + ((point.x - self.bounds.min_x) * self.scale_x) as f32,
            self.bottom - ((point.y - self.bounds.min_y) * self.scale_y) as f32,
        )
    }

    fn x_visible(&self, x: f64) -> bool {
        x >= self.bounds.min_x && x <= self.bounds.max_x
    }

    fn y_visible(&self, y: f64) -> bool {
        y >= self.bounds.min_y && y <= self.bounds.max_y
    }
}

/// Canvas program for drawing Mohr's circle
pub struct MohrDiagram {
    plot: PlotGeometry,
}

impl MohrDiagram {
    pub fn new(plot: PlotGeometry) -> Self {
        Self { plot }
    }

    fn draw_titles(&self, frame: &mut Frame, bounds: Rectangle, area: Rectangle, color: Color) {
        let layout = &self.plot.layout;

        frame.fill_text(Text {
            content: layout.title.clone(),
            position: Point::new(area.x + area.width / 2.0, 8.0),
            color,
            size: iced::Pixels(13.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        frame.fill_text(Text {
            content: layout.x_axis_title.clone(),
            position: Point::new(area.x + area.width / 2.0, bounds.height - 16.0),
            color,
            size: iced::Pixels(10.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        frame.fill_text(Text {
            content: layout.y_axis_title.clone(),
            position: Point::new(area.x, area.y - 14.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });
    }

    /// Plot border, zero axes, and extent labels
    fn draw_axes(&self, frame: &mut Frame, viewport: &Viewport, axis_color: Color, label_color: Color) {
        let area = viewport.area;
        let border = Path::rectangle(Point::new(area.x, area.y), Size::new(area.width, area.height));
        frame.stroke(&border, Stroke::default().with_color(axis_color).with_width(1.0));

        if viewport.y_visible(0.0) {
            let y = viewport.to_screen(PlotPoint::new(0.0, 0.0)).y;
            let axis = Path::line(Point::new(area.x, y), Point::new(area.x + area.width, y));
            frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));
        }
        if viewport.x_visible(0.0) {
            let x = viewport.to_screen(PlotPoint::new(0.0, 0.0)).x;
            let axis = Path::line(Point::new(x, area.y), Point::new(x, area.y + area.height));
            frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));
        }

        let b = viewport.bounds;
        let labels = [
            (format_value(b.min_x, 1), Point::new(area.x, area.y + area.height + 4.0)),
            (format_value(b.max_x, 1), Point::new(area.x + area.width - 30.0, area.y + area.height + 4.0)),
            (format_value(b.max_y, 1), Point::new(area.x - MARGIN + 2.0, area.y)),
            (format_value(b.min_y, 1), Point::new(area.x - MARGIN + 2.0, area.y + area.height - 10.0)),
        ];
        for (content, position) in labels {
            frame.fill_text(Text {
                content,
                position,
                color: label_color,
                size: iced::Pixels(8.0),
                ..Text::default()
            });
        }
    }

    /// Vertical and horizontal lines spanning the whole plot area
    fn draw_reference_lines(&self, frame: &mut Frame, viewport: &Viewport, text_color: Color) {
        let area = viewport.area;
        for line in &self.plot.reference_lines {
            let path = match line.orientation {
                Orientation::Vertical if viewport.x_visible(line.value) => {
                    let x = viewport.to_screen(PlotPoint::new(line.value, 0.0)).x;
                    Path::line(Point::new(x, area.y), Point::new(x, area.y + area.height))
                }
                Orientation::Horizontal if viewport.y_visible(line.value) => {
                    let y = viewport.to_screen(PlotPoint::new(0.0, line.value)).y;
                    Path::line(Point::new(area.x, y), Point::new(area.x + area.width, y))
                }
                _ => continue,
            };
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(to_color(line.color, text_color))
                    .with_width(line.width),
            );
        }
    }

    fn draw_traces(&self, frame: &mut Frame, viewport: &Viewport, text_color: Color) {
        for trace in self.plot.traces() {
            let color = to_color(trace.kind.color(), text_color);

            if trace.kind == TraceKind::Circle && self.plot.is_degenerate() {
                let centre = viewport.to_screen(PlotPoint::new(self.plot.center, 0.0));
                frame.fill(&Path::circle(centre, DEGENERATE_DOT_RADIUS), color);
                continue;
            }

            let Some((first, rest)) = trace.points.split_first() else {
                continue;
            };
            let path = Path::new(|builder| {
                builder.move_to(viewport.to_screen(*first));
                for point in rest {
                    builder.line_to(viewport.to_screen(*point));
                }
            });
            frame.stroke(&path, Stroke::default().with_color(color).with_width(1.5));
        }
    }

    fn draw_markers(&self, frame: &mut Frame, viewport: &Viewport, text_color: Color) {
        for marker in &self.plot.markers {
            let dot = Path::circle(viewport.to_screen(marker.position), marker.size / 2.0);
            frame.fill(&dot, to_color(marker.kind.color(), text_color));
        }
    }

    /// Legend to the right of the plot: line swatches for traces, dots for markers
    fn draw_legend(&self, frame: &mut Frame, area: Rectangle, text_color: Color) {
        let x = area.x + area.width + 15.0;
        let mut y = area.y;

        for kind in TraceKind::ALL {
            let swatch = Path::line(
                Point::new(x, y + LEGEND_ROW_HEIGHT / 2.0),
                Point::new(x + 16.0, y + LEGEND_ROW_HEIGHT / 2.0),
            );
            frame.stroke(
                &swatch,
                Stroke::default()
                    .with_color(to_color(kind.color(), text_color))
                    .with_width(2.0),
            );
            self.legend_label(frame, kind.legend_name(), Point::new(x + 22.0, y), text_color);
            y += LEGEND_ROW_HEIGHT;
        }

        for marker in &self.plot.markers {
            let dot = Path::circle(Point::new(x + 8.0, y + LEGEND_ROW_HEIGHT / 2.0), 4.0);
            frame.fill(&dot, to_color(marker.kind.color(), text_color));
            self.legend_label(frame, marker.kind.legend_name(), Point::new(x + 22.0, y), text_color);
            y += LEGEND_ROW_HEIGHT;
        }
    }

    fn legend_label(&self, frame: &mut Frame, label: &str, position: Point, color: Color) {
        frame.fill_text(Text {
            content: label.to_string(),
            position,
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        });
    }
}

/// Black follows the theme text color so the diagram stays visible in dark mode.
fn to_color(color: PlotColor, text_color: Color) -> Color {
    match color {
        PlotColor::Black => text_color,
        other => {
            let [r, g, b] = other.rgb();
            Color::from_rgb(r, g, b)
        }
    }
}

impl canvas::Program<Message> for MohrDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let text_color = theme.palette().text;
        let axis_color = Color::from_rgb(0.6, 0.6, 0.6);

        let plot_area = Rectangle {
            x: MARGIN,
            y: MARGIN,
            width: (bounds.width - 2.0 * MARGIN - LEGEND_WIDTH).max(10.0),
            height: (bounds.height - 2.0 * MARGIN).max(10.0),
        };
        let viewport = Viewport::fit(
            self.plot.bounds().padded(VIEW_PADDING),
            plot_area,
            self.plot.layout.equal_aspect,
        );

        self.draw_titles(&mut frame, bounds, plot_area, text_color);
        self.draw_axes(&mut frame, &viewport, axis_color, text_color);
        self.draw_reference_lines(&mut frame, &viewport, text_color);
        self.draw_traces(&mut frame, &viewport, text_color);
        self.draw_markers(&mut frame, &viewport, text_color);
        self.draw_legend(&mut frame, plot_area, text_color);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_area() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_viewport_equal_aspect_centres_data() {
        let bounds = Bounds { min_x: -1.0, max_x: 1.0, min_y: -1.0, max_y: 1.0 };
        let viewport = Viewport::fit(bounds, square_area(), true);

        // Height limits the scale, so the data is centred horizontally
        let centre = viewport.to_screen(PlotPoint::new(0.0, 0.0));
        assert!((centre.x - 100.0).abs() < 1e-3);
        assert!((centre.y - 50.0).abs() < 1e-3);

        let top_right = viewport.to_screen(PlotPoint::new(1.0, 1.0));
        assert!((top_right.x - 150.0).abs() < 1e-3);
        assert!(top_right.y.abs() < 1e-3);
    }

    #[test]
    fn test_viewport_visibility() {
        let bounds = Bounds { min_x: 10.0, max_x: 20.0, min_y: -5.0, max_y: 5.0 };
        let viewport = Viewport::fit(bounds, square_area(), false);
        assert!(!viewport.x_visible(0.0));
        assert!(viewport.y_visible(0.0));
    }

    #[test]
    fn test_black_follows_theme() {
        let text = Color::from_rgb(0.9, 0.9, 0.9);
        assert_eq!(to_color(PlotColor::Black, text), text);
        assert_eq!(to_color(PlotColor::Red, text), Color::from_rgb(1.0, 0.0, 0.0));
    }
}
