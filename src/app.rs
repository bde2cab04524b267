use crate::pipeline::MatchFigure;

/// View state for the terminal page. The figure itself never changes once
/// built; only what is shown around it does.
pub struct App {
    pub figure: MatchFigure,
    pub show_goals: bool,
    pub show_logs: bool,
    pub full_screen: bool,
}

impl App {
    pub fn new(figure: MatchFigure) -> Self {
        Self { figure, show_goals: true, show_logs: false, full_screen: false }
    }

    pub fn toggle_goals(&mut self) {
        self.show_goals = !self.show_goals;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
    }

    pub fn title(&self) -> String {
        let dims = self.figure.profile.dimensions();
        format!(
            " Match {} | {} pitch {}x{} | {} goals from {} shots ",
            self.figure.match_id,
            self.figure.profile.label(),
            dims.length,
            dims.width,
            self.figure.goals.len(),
            self.figure.shot_count
        )
    }
}
