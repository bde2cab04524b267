use tui::Frame;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::pitch_canvas::PitchCanvas;
use crate::goals::GoalSummary;
use crate::ui::layout::LayoutAreas;

const HELP: &str = "q quit  g goals  f full screen  \" logs";

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.width <= 10 || area.height <= 10 {
        return;
    }

    let layout = LayoutAreas::new(area, app.full_screen, app.show_goals, app.show_logs);

    if !app.full_screen {
        draw_header(f, layout.header, app);
    }
    draw_pitch(f, layout.pitch, app);
    if !layout.goal_list.is_empty() {
        draw_goal_list(f, layout.goal_list, app);
    }
    if !layout.logs.is_empty() {
        draw_logs(f, layout.logs);
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(app.title(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {HELP}"), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

fn draw_pitch(f: &mut Frame, area: Rect, app: &App) {
    if app.full_screen {
        f.render_widget(PitchCanvas::new(&app.figure.surface), area);
        return;
    }
    let block = default_border(Color::DarkGray).title(format!(" {} pitch ", app.figure.profile.label()));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(PitchCanvas::new(&app.figure.surface), inner);
}

fn draw_goal_list(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Goals ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.figure.goals.is_empty() {
        f.render_widget(
            Paragraph::new("No goals in this match")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app.figure.goals.iter().flat_map(goal_lines).collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn goal_lines(goal: &GoalSummary) -> [Line<'static>; 2] {
    let xg = goal.xg.map(|xg| format!(" xG {xg:.2}")).unwrap_or_default();
    [
        Line::from(vec![
            Span::styled(format!("{:<9}", goal.time_label()), Style::default().fg(Color::Red)),
            Span::styled(goal.team.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(xg, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("         {}", goal.player.as_deref().unwrap_or("Unknown player")),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    f.render_widget(widget, area);
}
