mod meter;
mod provider;
pub mod surface;

use crate::error::PipelineError;
use log::debug;
use std::fmt;
use std::str::FromStr;
pub use surface::{Axes, Mark, MarkerShape, PitchSurface, Point, Stroke};

/// Field length and width in the profile's own distance unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
}

impl Dimensions {
    pub const fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn validate(self) -> Result<Self, PipelineError> {
        let invalid = |reason| PipelineError::InvalidDimensions {
            length: self.length,
            width: self.width,
            reason,
        };
        if !self.length.is_finite() || !self.width.is_finite() {
            return Err(invalid("dimensions must be finite numbers"));
        }
        if self.length <= 0.0 || self.width <= 0.0 {
            return Err(invalid("dimensions must be positive"));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldTheme {
    #[default]
    Green,
    White,
}

impl FromStr for FieldTheme {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(FieldTheme::Green),
            "white" => Ok(FieldTheme::White),
            _ => Err(PipelineError::InvalidTheme(s.to_owned())),
        }
    }
}

impl fmt::Display for FieldTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTheme::Green => write!(f, "green"),
            FieldTheme::White => write!(f, "white"),
        }
    }
}

/// How a pitch is laid out and styled. Both kinds go through `render_pitch`,
/// so axes conventions stay identical between them.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchProfile {
    /// Real-world meters, centered on the kick-off spot.
    Meter {
        dimensions: Dimensions,
        theme: FieldTheme,
        line_width: f64,
        /// Spot marker area in pt², as in a scatter plot.
        marker_size: f64,
    },
    /// StatsBomb's 120x80 frame: origin top-left, Y pointing down.
    Provider { dimensions: Dimensions },
}

impl PitchProfile {
    pub const METER_DEFAULT: Dimensions = Dimensions::new(110.0, 80.0);
    pub const PROVIDER_DEFAULT: Dimensions = Dimensions::new(120.0, 80.0);

    pub fn meter(dimensions: Dimensions, theme: FieldTheme) -> Self {
        PitchProfile::Meter { dimensions, theme, line_width: 2.0, marker_size: 20.0 }
    }

    pub fn provider() -> Self {
        PitchProfile::Provider { dimensions: Self::PROVIDER_DEFAULT }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            PitchProfile::Meter { dimensions, .. } | PitchProfile::Provider { dimensions } => {
                *dimensions
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PitchProfile::Meter { .. } => "meter",
            PitchProfile::Provider { .. } => "provider",
        }
    }

    /// Place a point given in provider coordinates onto this profile's field.
    pub fn project(&self, (x, y): Point) -> Point {
        match self {
            PitchProfile::Provider { .. } => (x, y),
            PitchProfile::Meter { dimensions, .. } => {
                let source = Self::PROVIDER_DEFAULT;
                let mx = x / source.length * dimensions.length - dimensions.length / 2.0;
                // provider Y points down, meter Y points up
                let my = dimensions.width / 2.0 - y / source.width * dimensions.width;
                (mx, my)
            }
        }
    }
}

/// Draw the static markings of a pitch onto a fresh surface.
pub fn render_pitch(profile: &PitchProfile) -> Result<PitchSurface, PipelineError> {
    let surface = match profile {
        PitchProfile::Meter { dimensions, theme, line_width, marker_size } => {
            meter::render(dimensions.validate()?, *theme, *line_width, *marker_size)
        }
        PitchProfile::Provider { dimensions } => provider::render(dimensions.validate()?)?,
    };
    debug!("rendered {} pitch with {} marks", profile.label(), surface.marks().len());
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for dims in [Dimensions::new(0.0, 80.0), Dimensions::new(110.0, -1.0)] {
            let err = render_pitch(&PitchProfile::meter(dims, FieldTheme::Green)).unwrap_err();
            assert!(matches!(err, PipelineError::InvalidDimensions { .. }), "{err}");
        }
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        let dims = Dimensions::new(f64::NAN, 80.0);
        let err = render_pitch(&PitchProfile::meter(dims, FieldTheme::White)).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDimensions { .. }));
        let dims = Dimensions::new(120.0, f64::INFINITY);
        assert!(render_pitch(&PitchProfile::Provider { dimensions: dims }).is_err());
    }

    #[test]
    fn theme_parsing_rejects_unknown_names() {
        assert_eq!("green".parse::<FieldTheme>().unwrap(), FieldTheme::Green);
        assert_eq!(" White ".parse::<FieldTheme>().unwrap(), FieldTheme::White);
        let err = "purple".parse::<FieldTheme>().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidTheme(ref name) if name == "purple"));
    }

    #[test]
    fn rendering_is_deterministic() {
        for profile in [
            PitchProfile::provider(),
            PitchProfile::meter(PitchProfile::METER_DEFAULT, FieldTheme::Green),
        ] {
            let first = render_pitch(&profile).unwrap();
            let second = render_pitch(&profile).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn provider_projection_is_identity() {
        assert_eq!(PitchProfile::provider().project((100.0, 40.0)), (100.0, 40.0));
    }

    #[test]
    fn meter_projection_centers_and_flips() {
        let profile = PitchProfile::meter(Dimensions::new(110.0, 80.0), FieldTheme::Green);
        assert_eq!(profile.project((60.0, 40.0)), (0.0, 0.0));
        assert_eq!(profile.project((0.0, 0.0)), (-55.0, 40.0));
        assert_eq!(profile.project((120.0, 80.0)), (55.0, -40.0));
    }
}
