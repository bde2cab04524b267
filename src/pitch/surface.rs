use tui::style::Color;

/// A point in pitch data coordinates.
pub type Point = (f64, f64);

/// Arcs are drawn as polylines with this many segments per full turn.
const ARC_SEGMENTS_PER_TURN: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

/// One drawing primitive recorded on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Line { from: Point, to: Point, stroke: Stroke },
    Circle { center: Point, radius: f64, stroke: Stroke },
    /// Counter-clockwise from `start_deg` to `end_deg`; wraps through 0° when
    /// `end_deg < start_deg`.
    Arc { center: Point, radius: f64, start_deg: f64, end_deg: f64, stroke: Stroke },
    /// Filled marker; `size` is the marker diameter in points.
    Marker { at: Point, shape: MarkerShape, size: f64, color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub x_limits: [f64; 2],
    pub y_limits: [f64; 2],
    /// Y grows downwards on screen.
    pub y_inverted: bool,
    /// One data unit is the same length on both axes.
    pub equal_aspect: bool,
    pub ticks_hidden: bool,
}

impl Axes {
    pub fn new(x_limits: [f64; 2], y_limits: [f64; 2]) -> Self {
        Self { x_limits, y_limits, y_inverted: false, equal_aspect: false, ticks_hidden: false }
    }

    pub fn x_span(&self) -> f64 {
        self.x_limits[1] - self.x_limits[0]
    }

    pub fn y_span(&self) -> f64 {
        self.y_limits[1] - self.y_limits[0]
    }

    /// Map a data point into a y-up plane with the same limits, mirroring Y
    /// when the axis is inverted.
    pub fn to_screen(&self, (x, y): Point) -> Point {
        if self.y_inverted {
            (x, self.y_limits[0] + self.y_limits[1] - y)
        } else {
            (x, y)
        }
    }
}

/// Drawing canvas with its own coordinate system. Marks are only ever
/// appended: pitch markings first, overlays after.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchSurface {
    axes: Axes,
    background: Option<Color>,
    marks: Vec<Mark>,
}

impl PitchSurface {
    pub fn new(axes: Axes) -> Self {
        Self { axes, background: None, marks: Vec::new() }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn set_limits(&mut self, x_limits: [f64; 2], y_limits: [f64; 2]) {
        self.axes.x_limits = x_limits;
        self.axes.y_limits = y_limits;
    }

    pub fn invert_y_axis(&mut self) {
        self.axes.y_inverted = !self.axes.y_inverted;
    }

    pub fn set_equal_aspect(&mut self) {
        self.axes.equal_aspect = true;
    }

    pub fn hide_ticks(&mut self) {
        self.axes.ticks_hidden = true;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    pub fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.marks.push(Mark::Line { from, to, stroke });
    }

    /// Draw an open polyline through `points` as consecutive line marks.
    pub fn draw_path(&mut self, points: &[Point], stroke: Stroke) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], stroke);
        }
    }

    pub fn draw_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.marks.push(Mark::Circle { center, radius, stroke });
    }

    pub fn draw_arc(&mut self, center: Point, radius: f64, start_deg: f64, end_deg: f64, stroke: Stroke) {
        self.marks.push(Mark::Arc { center, radius, start_deg, end_deg, stroke });
    }

    pub fn draw_marker(&mut self, at: Point, shape: MarkerShape, size: f64, color: Color) {
        self.marks.push(Mark::Marker { at, shape, size, color });
    }

    /// Positions of every marker painted in `color`, in drawing order.
    #[cfg(test)]
    pub fn markers_with_color(&self, color: Color) -> Vec<Point> {
        self.marks
            .iter()
            .filter_map(|m| match m {
                Mark::Marker { at, color: c, .. } if *c == color => Some(*at),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.marks.iter().filter_map(|m| match m {
            Mark::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

/// Sample an arc into a polyline, counter-clockwise from `start_deg`.
pub fn arc_points(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Vec<Point> {
    let mut sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep == 0.0 {
        sweep = 360.0;
    }
    let steps = ((sweep / 360.0) * ARC_SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let theta = (start_deg + sweep * i as f64 / steps as f64).to_radians();
            (center.0 + radius * theta.cos(), center.1 + radius * theta.sin())
        })
        .collect()
}
