use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use super::components::{BusyState, PromptContext, render_cards, render_empty, render_prompt};
use super::state::App;

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        let prompt_ctx = PromptContext {
            search_input: &self.search_input,
            input_title: self.input_title.as_deref(),
            area: layout[0],
            theme: &self.theme,
        };
        let busy = BusyState {
            loading: self.request.is_loading(),
            throbber_state: &self.throbber_state,
        };
        render_prompt(frame, prompt_ctx, busy);

        self.render_status(frame, layout[1]);
        self.render_results(frame, layout[2]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = self.request.error() {
            let widget = Paragraph::new(message.to_string()).style(self.theme.error);
            frame.render_widget(widget, area);
            return;
        }

        let count = self.request.results().len();
        if count > 0 {
            let label = if count == 1 {
                "1 result".to_string()
            } else {
                format!("{count} results")
            };
            frame.render_widget(Paragraph::new(label).style(self.theme.empty), area);
        }
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        if self.request.results().is_empty() {
            if !self.request.is_loading() && self.request.error().is_none() {
                render_empty(frame, area, &self.theme);
            }
            return;
        }

        let results = self.request.results();
        render_cards(frame, area, results, &mut self.list_state, &self.theme);
    }
}
