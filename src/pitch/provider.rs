//! StatsBomb pitch: 120x80 units, origin at the top-left corner flag, Y axis
//! pointing down (events documentation, pitch coordinates).

use super::surface::{Axes, MarkerShape, PitchSurface, Stroke};
use super::{Dimensions, PitchProfile};
use crate::error::PipelineError;
use tui::style::Color;

const MARGIN: f64 = 10.0;
const LINE: Stroke = Stroke { color: Color::Black, width: 1.5 };
const SPOT_SIZE: f64 = 2.0;

pub(super) fn render(dimensions: Dimensions) -> Result<PitchSurface, PipelineError> {
    // every marking below is a literal in the 120x80 frame
    if dimensions != PitchProfile::PROVIDER_DEFAULT {
        return Err(PipelineError::InvalidDimensions {
            length: dimensions.length,
            width: dimensions.width,
            reason: "provider pitch markings are fixed to the 120x80 frame",
        });
    }
    let Dimensions { length, width } = dimensions;

    let mut surface = PitchSurface::new(Axes::new([0.0, 1.0], [0.0, 1.0]));
    surface.set_limits([-MARGIN, length + MARGIN], [-MARGIN, width + MARGIN]);
    surface.invert_y_axis();
    surface.set_background(Color::White);

    // boundaries
    surface.draw_line((0.0, 0.0), (0.0, 80.0), LINE);
    surface.draw_line((120.0, 0.0), (120.0, 80.0), LINE);
    surface.draw_line((0.0, 0.0), (120.0, 0.0), LINE);
    surface.draw_line((0.0, 80.0), (120.0, 80.0), LINE);

    // penalty areas
    surface.draw_line((0.0, 18.0), (18.0, 18.0), LINE);
    surface.draw_line((0.0, 62.0), (18.0, 62.0), LINE);
    surface.draw_line((102.0, 18.0), (120.0, 18.0), LINE);
    surface.draw_line((102.0, 62.0), (120.0, 62.0), LINE);
    surface.draw_line((18.0, 18.0), (18.0, 62.0), LINE);
    surface.draw_line((102.0, 18.0), (102.0, 62.0), LINE);

    // six-yard boxes
    surface.draw_line((0.0, 30.0), (6.0, 30.0), LINE);
    surface.draw_line((0.0, 50.0), (6.0, 50.0), LINE);
    surface.draw_line((114.0, 30.0), (120.0, 30.0), LINE);
    surface.draw_line((114.0, 50.0), (120.0, 50.0), LINE);
    surface.draw_line((6.0, 30.0), (6.0, 50.0), LINE);
    surface.draw_line((114.0, 30.0), (114.0, 50.0), LINE);

    // goals, drawn behind the goal lines
    surface.draw_path(&[(0.0, 36.0), (-4.0, 36.0), (-4.0, 44.0), (0.0, 44.0)], LINE);
    surface.draw_path(&[(120.0, 36.0), (124.0, 36.0), (124.0, 44.0), (120.0, 44.0)], LINE);

    surface.draw_circle((60.0, 40.0), 10.0, LINE);

    // penalty arcs, width/height 16.2
    surface.draw_arc((13.0, 40.0), 8.1, 310.0, 50.0, LINE);
    surface.draw_arc((107.0, 40.0), 8.1, 130.0, 230.0, LINE);

    // penalty spots and centre spot
    surface.draw_marker((12.0, 40.0), MarkerShape::Circle, SPOT_SIZE, Color::Black);
    surface.draw_marker((108.0, 40.0), MarkerShape::Circle, SPOT_SIZE, Color::Black);
    surface.draw_marker((60.0, 40.0), MarkerShape::Circle, SPOT_SIZE, Color::Black);

    surface.draw_line((60.0, 0.0), (60.0, 80.0), LINE);

    surface.set_equal_aspect();
    surface.hide_ticks();
    Ok(surface)
}
