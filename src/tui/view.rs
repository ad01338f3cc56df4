use gitfinder_core::app::SelectionEngine;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "🔍 Git Finder";
const HELP: &str = "↑/↓: navigate | Enter: select | Esc: exit";
const EMPTY: &str = "No repositories found.";

/// Rows taken by the title, search box and help line
const CHROME_ROWS: u16 = 5;

/// The View component - renders the selection state, nothing else.
/// Holds no state of its own so the engine can be driven headless.
pub struct TuiView {
    pub show_paths: bool,
}

impl Default for TuiView {
    fn default() -> Self {
        Self { show_paths: true }
    }
}

impl TuiView {
    pub fn new(show_paths: bool) -> Self {
        Self { show_paths }
    }

    pub fn render(&self, engine: &SelectionEngine, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Search input
                Constraint::Min(1),    // Results
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        Self::render_title(frame, chunks[0]);
        Self::render_search(engine, frame, chunks[1]);
        self.render_results(engine, frame, chunks[2]);
        Self::render_help(frame, chunks[3]);
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(TITLE)
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }

    fn render_search(engine: &SelectionEngine, frame: &mut Frame, area: Rect) {
        let counter = format!(" {}/{} ", engine.filtered_len(), engine.total());
        let search = Paragraph::new(Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::raw(engine.query()),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL).title(counter));
        frame.render_widget(search, area);
    }

    fn render_results(&self, engine: &SelectionEngine, frame: &mut Frame, area: Rect) {
        let lines = self.result_lines(engine, Self::result_rows(engine, area));
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Row budget for the result list, taken from the engine's viewport.
    /// Before the first resize the layout area is all there is to go on.
    pub fn result_rows(engine: &SelectionEngine, area: Rect) -> usize {
        let rows = match engine.viewport().height {
            0 => area.height,
            height => height.saturating_sub(CHROME_ROWS).min(area.height),
        };
        rows as usize
    }

    /// Lines for the result list, windowed so the cursor stays on screen
    pub fn result_lines(&self, engine: &SelectionEngine, rows: usize) -> Vec<Line<'static>> {
        if engine.filtered_len() == 0 {
            return vec![Line::from(Span::styled(EMPTY, Style::default().fg(Color::Yellow)))];
        }

        let range = engine.visible_range(rows);
        let selected_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

        engine
            .filtered()
            .enumerate()
            .skip(range.start)
            .take(range.len())
            .map(|(i, repo)| {
                let label = if self.show_paths {
                    repo.to_string()
                } else {
                    repo.name().to_string()
                };

                if i == engine.cursor() {
                    Line::from(Span::styled(format!("▶ {}", label), selected_style))
                } else {
                    Line::from(format!("  {}", label))
                }
            })
            .collect()
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}
