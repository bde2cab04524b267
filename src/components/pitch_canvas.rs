use crate::pitch::surface::arc_points;
use crate::pitch::{Axes, Mark, MarkerShape, PitchSurface, Point, Stroke};
use crate::ui::layout::fit_aspect;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Color;
use tui::symbols::Marker;
use tui::text::Line as TextLine;
use tui::widgets::Widget;
use tui::widgets::canvas::{Canvas, Circle, Context, Line, Painter, Shape};

/// Width of the reference figure in points. Marker sizes are given in points
/// and scale with the x span of the axes against this width.
pub const FIGURE_WIDTH_PT: f64 = 12.0 * 72.0;

/// Braille packs 2x4 dots into one cell.
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);

/// Strokes at least this wide get a second, offset pass.
const THICK_STROKE: f64 = 2.0;

/// Replays a `PitchSurface` onto a ratatui canvas.
pub struct PitchCanvas<'a> {
    pub surface: &'a PitchSurface,
}

impl<'a> PitchCanvas<'a> {
    pub fn new(surface: &'a PitchSurface) -> Self {
        Self { surface }
    }
}

impl Widget for PitchCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let axes = *self.surface.axes();
        let area = if axes.equal_aspect { fit_aspect(area, axes.x_span(), axes.y_span()) } else { area };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let dot = (
            axes.x_span() / (f64::from(area.width) * DOTS_PER_CELL.0),
            axes.y_span() / (f64::from(area.height) * DOTS_PER_CELL.1),
        );
        let surface = self.surface;
        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(axes.x_limits)
            .y_bounds(axes.y_limits)
            .paint(move |ctx| paint_surface(ctx, surface, dot));
        if let Some(background) = surface.background() {
            canvas = canvas.background_color(background);
        }
        canvas.render(area, buf);
    }
}

fn paint_surface(ctx: &mut Context, surface: &PitchSurface, dot: (f64, f64)) {
    let axes = surface.axes();

    for mark in surface.marks() {
        match *mark {
            Mark::Line { from, to, stroke } => {
                let (from, to) = (axes.to_screen(from), axes.to_screen(to));
                ctx.draw(&Line::new(from.0, from.1, to.0, to.1, stroke.color));
                if is_thick(stroke) {
                    // nudge across the line, one dot
                    let (ox, oy) = if (to.0 - from.0).abs() >= (to.1 - from.1).abs() { (0.0, dot.1) } else { (dot.0, 0.0) };
                    ctx.draw(&Line::new(from.0 + ox, from.1 + oy, to.0 + ox, to.1 + oy, stroke.color));
                }
            }
            Mark::Circle { center, radius, stroke } => {
                let (x, y) = axes.to_screen(center);
                ctx.draw(&Circle { x, y, radius, color: stroke.color });
                if is_thick(stroke) {
                    ctx.draw(&Circle { x, y, radius: radius + dot.0, color: stroke.color });
                }
            }
            Mark::Arc { center, radius, start_deg, end_deg, stroke } => {
                let points = screen_arc(axes, center, radius, start_deg, end_deg);
                ctx.draw(&Polyline { points: &points, color: stroke.color });
                if is_thick(stroke) {
                    let outer = screen_arc(axes, center, radius + dot.0, start_deg, end_deg);
                    ctx.draw(&Polyline { points: &outer, color: stroke.color });
                }
            }
            Mark::Marker { .. } => {}
        }
    }

    // markers sit above every line
    ctx.layer();
    for mark in surface.marks() {
        if let Mark::Marker { at, shape, size, color } = *mark {
            let center = axes.to_screen(at);
            let radius = marker_radius(size, axes).max(dot.0 / 2.0);
            match shape {
                MarkerShape::Circle => ctx.draw(&Disc { center, radius, color, step: dot.0 }),
                MarkerShape::Square => ctx.draw(&FilledSquare { center, half: radius, color, step: dot.0 }),
            }
        }
    }

    if !axes.ticks_hidden {
        let [x0, x1] = axes.x_limits;
        let [y0, y1] = axes.y_limits;
        ctx.print(x0, y0, TextLine::from(format!("{x0:.0},{y0:.0}")));
        ctx.print(x1 - axes.x_span() / 10.0, y1, TextLine::from(format!("{x1:.0},{y1:.0}")));
    }
}

fn is_thick(stroke: Stroke) -> bool {
    stroke.width >= THICK_STROKE
}

fn screen_arc(axes: &Axes, center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Vec<Point> {
    arc_points(center, radius, start_deg, end_deg)
        .into_iter()
        .map(|p| axes.to_screen(p))
        .collect()
}

/// Radius in data units of a marker `size` points across.
pub fn marker_radius(size: f64, axes: &Axes) -> f64 {
    size / FIGURE_WIDTH_PT * axes.x_span() / 2.0
}

struct Polyline<'a> {
    points: &'a [Point],
    color: Color,
}

impl Shape for Polyline<'_> {
    fn draw(&self, painter: &mut Painter) {
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            Line::new(a.0, a.1, b.0, b.1, self.color).draw(painter);
        }
    }
}

/// Filled circle, built from concentric rings `step` apart.
struct Disc {
    center: Point,
    radius: f64,
    color: Color,
    step: f64,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        if let Some((x, y)) = painter.get_point(self.center.0, self.center.1) {
            painter.paint(x, y, self.color);
        }
        let rings = (self.radius / self.step.max(f64::EPSILON)).ceil().max(1.0) as usize;
        for ring in 1..=rings {
            let radius = self.radius * ring as f64 / rings as f64;
            Circle { x: self.center.0, y: self.center.1, radius, color: self.color }.draw(painter);
        }
    }
}

struct FilledSquare {
    center: Point,
    half: f64,
    color: Color,
    step: f64,
}

impl Shape for FilledSquare {
    fn draw(&self, painter: &mut Painter) {
        let (cx, cy) = self.center;
        let rows = ((2.0 * self.half) / self.step.max(f64::EPSILON)).ceil().max(1.0) as usize;
        for row in 0..=rows {
            let y = cy - self.half + 2.0 * self.half * row as f64 / rows as f64;
            Line::new(cx - self.half, y, cx + self.half, y, self.color).draw(painter);
        }
    }
}
