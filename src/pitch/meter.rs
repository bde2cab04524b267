//! Pitch drawn in meters around the kick-off spot. Standard markings are
//! defined in yards and converted.

use super::surface::{Axes, MarkerShape, PitchSurface, Stroke};
use super::{Dimensions, FieldTheme};
use tui::style::Color;

const METERS_PER_YARD: f64 = 0.9144;
/// Grass shown around the touch and goal lines.
const BORDER: f64 = 3.0;

const GOAL_LINE_WIDTH: f64 = 8.0 * METERS_PER_YARD;
const SIX_YARD_BOX_WIDTH: f64 = 20.0 * METERS_PER_YARD;
const SIX_YARD_BOX_LENGTH: f64 = 6.0 * METERS_PER_YARD;
const PENALTY_AREA_WIDTH: f64 = 44.0 * METERS_PER_YARD;
const PENALTY_AREA_LENGTH: f64 = 18.0 * METERS_PER_YARD;
const PENALTY_SPOT: f64 = 12.0 * METERS_PER_YARD;
const CORNER_RADIUS: f64 = 1.0 * METERS_PER_YARD;
/// Half chord of the penalty arc where it meets the penalty area line.
const D_LENGTH: f64 = 8.0 * METERS_PER_YARD;
const D_RADIUS: f64 = 10.0 * METERS_PER_YARD;
const D_POS: f64 = 12.0 * METERS_PER_YARD;
const CENTRE_CIRCLE_RADIUS: f64 = 10.0 * METERS_PER_YARD;

const SEA_GREEN: Color = Color::Rgb(60, 179, 113);
const WHITESMOKE: Color = Color::Rgb(245, 245, 245);

struct Palette {
    field: Color,
    line: Color,
    spot: Color,
}

fn palette(theme: FieldTheme) -> Palette {
    match theme {
        FieldTheme::Green => Palette { field: SEA_GREEN, line: WHITESMOKE, spot: Color::White },
        FieldTheme::White => Palette { field: Color::White, line: Color::Black, spot: Color::Black },
    }
}

pub(super) fn render(
    dimensions: Dimensions,
    theme: FieldTheme,
    line_width: f64,
    marker_size: f64,
) -> PitchSurface {
    let colors = palette(theme);
    let line = Stroke::new(colors.line, line_width);
    // scatter sizes are areas in pt²; markers are sized by diameter
    let spot_size = marker_size.sqrt();
    let post_size = 6.0 * marker_size / 20.0;

    let half_length = dimensions.length / 2.0;
    let half_width = dimensions.width / 2.0;
    let xmax = half_length + BORDER;
    let ymax = half_width + BORDER;

    let mut surface = PitchSurface::new(Axes::new([-xmax, xmax], [-ymax, ymax]));
    surface.set_background(colors.field);
    surface.set_equal_aspect();
    surface.hide_ticks();

    // half-way line, centre spot, centre circle
    surface.draw_line((0.0, -half_width), (0.0, half_width), line);
    surface.draw_marker((0.0, 0.0), MarkerShape::Circle, spot_size, colors.line);
    surface.draw_circle((0.0, 0.0), CENTRE_CIRCLE_RADIUS, line);

    // penalty arc half-angle, measured from the goal-to-goal axis
    let d_half_angle = (D_LENGTH / D_RADIUS).asin().to_degrees();

    for s in [-1.0, 1.0] {
        let goal_line = s * half_length;

        // boundary
        surface.draw_line((-half_length, s * half_width), (half_length, s * half_width), line);
        surface.draw_line((goal_line, -half_width), (goal_line, half_width), line);

        // goal posts and the goal mouth between them
        let post_top = (goal_line, GOAL_LINE_WIDTH / 2.0);
        let post_bottom = (goal_line, -GOAL_LINE_WIDTH / 2.0);
        surface.draw_line(post_bottom, post_top, line);
        surface.draw_marker(post_bottom, MarkerShape::Square, post_size, colors.spot);
        surface.draw_marker(post_top, MarkerShape::Square, post_size, colors.spot);

        // six-yard box
        let box_edge = goal_line - s * SIX_YARD_BOX_LENGTH;
        surface.draw_line((goal_line, SIX_YARD_BOX_WIDTH / 2.0), (box_edge, SIX_YARD_BOX_WIDTH / 2.0), line);
        surface.draw_line((goal_line, -SIX_YARD_BOX_WIDTH / 2.0), (box_edge, -SIX_YARD_BOX_WIDTH / 2.0), line);
        surface.draw_line((box_edge, -SIX_YARD_BOX_WIDTH / 2.0), (box_edge, SIX_YARD_BOX_WIDTH / 2.0), line);

        // penalty area
        let area_edge = goal_line - s * PENALTY_AREA_LENGTH;
        surface.draw_line((goal_line, PENALTY_AREA_WIDTH / 2.0), (area_edge, PENALTY_AREA_WIDTH / 2.0), line);
        surface.draw_line((goal_line, -PENALTY_AREA_WIDTH / 2.0), (area_edge, -PENALTY_AREA_WIDTH / 2.0), line);
        surface.draw_line((area_edge, -PENALTY_AREA_WIDTH / 2.0), (area_edge, PENALTY_AREA_WIDTH / 2.0), line);

        // penalty spot
        surface.draw_marker((goal_line - s * PENALTY_SPOT, 0.0), MarkerShape::Circle, spot_size, colors.line);

        // corner arcs, bending into the field
        if s > 0.0 {
            surface.draw_arc((goal_line, -half_width), CORNER_RADIUS, 90.0, 180.0, line);
            surface.draw_arc((goal_line, half_width), CORNER_RADIUS, 180.0, 270.0, line);
        } else {
            surface.draw_arc((goal_line, -half_width), CORNER_RADIUS, 0.0, 90.0, line);
            surface.draw_arc((goal_line, half_width), CORNER_RADIUS, 270.0, 360.0, line);
        }

        // the "D", bulging away from the goal
        let d_center = (goal_line - s * D_POS, 0.0);
        if s > 0.0 {
            surface.draw_arc(d_center, D_RADIUS, 180.0 - d_half_angle, 180.0 + d_half_angle, line);
        } else {
            surface.draw_arc(d_center, D_RADIUS, -d_half_angle, d_half_angle, line);
        }
    }

    surface
}
