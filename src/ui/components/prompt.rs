//! Prompt row: title, query input, and the busy indicator.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Label shown next to the throbber while a request is in flight.
const BUSY_LABEL: &str = "Searching";

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
    pub search_input: &'a SearchInput,
    pub input_title: Option<&'a str>,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Whether and how to show the busy indicator.
pub struct BusyState<'a> {
    pub loading: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the prompt row with the busy indicator right-aligned in the input
/// area.
pub fn render_prompt(frame: &mut ratatui::Frame, prompt: PromptContext<'_>, busy: BusyState<'_>) {
    let PromptContext {
        search_input,
        input_title,
        area,
        theme,
    } = prompt;

    let title = input_title.unwrap_or("Search");
    let prompt_text = format!("{title} > ");
    let prompt_width = prompt_text.width() as u16;

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
        .split(area);

    let prompt_widget = Paragraph::new(prompt_text).style(theme.prompt);
    frame.render_widget(prompt_widget, horizontal[0]);

    let input_area = horizontal[1];
    search_input.render(frame, input_area, theme.title);
    render_busy(frame, input_area, busy, theme);
}

fn render_busy(frame: &mut ratatui::Frame, area: Rect, busy: BusyState<'_>, theme: &Theme) {
    if !busy.loading || area.width == 0 || area.height == 0 {
        return;
    }

    let muted_style = theme.empty;
    let spinner = Throbber::default()
        .style(muted_style)
        .throbber_style(muted_style);
    let mut line = Line::default();
    line.spans.push(spinner.to_symbol_span(busy.throbber_state));
    line.spans
        .push(Span::styled(BUSY_LABEL.to_string(), muted_style));

    let line_width = line.width() as u16;
    let start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };
    let busy_area = Rect {
        x: start_x,
        width: area.right().saturating_sub(start_x),
        ..area
    };
    frame.render_widget(Paragraph::new(line), busy_area);
}
