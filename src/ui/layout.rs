use tui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const GOAL_LIST_WIDTH: u16 = 34;
pub const LOG_PANE_HEIGHT: u16 = 8;

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f64 = 2.0;

/// Pre-computed layout areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    pub header: Rect,
    pub pitch: Rect,
    pub goal_list: Rect,
    pub logs: Rect,
}

impl LayoutAreas {
    pub fn new(area: Rect, full_screen: bool, show_goals: bool, show_logs: bool) -> Self {
        if full_screen {
            return LayoutAreas { header: Rect::ZERO, pitch: area, goal_list: Rect::ZERO, logs: Rect::ZERO };
        }

        let [header, body] = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)]).areas(area);

        let (body, logs) = if show_logs {
            let [body, logs] = Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(body);
            (body, logs)
        } else {
            (body, Rect::ZERO)
        };

        let (pitch, goal_list) = if show_goals {
            let [pitch, goals] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(GOAL_LIST_WIDTH)]).areas(body);
            (pitch, goals)
        } else {
            (body, Rect::ZERO)
        };

        LayoutAreas { header, pitch, goal_list, logs }
    }
}

/// Largest centred rect inside `area` whose on-screen shape matches
/// `x_span : y_span`.
pub fn fit_aspect(area: Rect, x_span: f64, y_span: f64) -> Rect {
    if area.width == 0 || area.height == 0 || x_span <= 0.0 || y_span <= 0.0 {
        return area;
    }
    let target = x_span / y_span;
    let width = f64::from(area.width);
    let height = f64::from(area.height);

    if width / (height * CELL_ASPECT) > target {
        let fitted = ((height * CELL_ASPECT * target).round() as u16).clamp(1, area.width);
        Rect::new(area.x + (area.width - fitted) / 2, area.y, fitted, area.height)
    } else {
        let fitted = ((width / target / CELL_ASPECT).round() as u16).clamp(1, area.height);
        Rect::new(area.x, area.y + (area.height - fitted) / 2, area.width, fitted)
    }
}
