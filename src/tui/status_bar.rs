//! Status bar widget for displaying status messages and shortcut hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status message, or the default hints when there is none
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let line = if state.status_message.is_empty() {
            Line::from(vec![
                Span::styled("←/→", Style::default().fg(theme.accent)),
                Span::styled(" change key  ", Style::default().fg(theme.text_muted)),
                Span::styled("v", Style::default().fg(theme.accent)),
                Span::styled(" previews  ", Style::default().fg(theme.text_muted)),
                Span::styled("f", Style::default().fg(theme.accent)),
                Span::styled(" pentatonic  ", Style::default().fg(theme.text_muted)),
                Span::styled("?", Style::default().fg(theme.accent)),
                Span::styled(" help  ", Style::default().fg(theme.text_muted)),
                Span::styled("q", Style::default().fg(theme.accent)),
                Span::styled(" quit", Style::default().fg(theme.text_muted)),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(status, area);
    }
}
