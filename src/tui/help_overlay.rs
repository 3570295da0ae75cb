//! Help overlay listing every keyboard shortcut.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;
use crate::branding::APP_DISPLAY_NAME;
use crate::shortcuts::{KeyBinding, ShortcutRegistry};

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    /// Lines of the overlay, one per action.
    #[must_use]
    pub fn content(registry: &ShortcutRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (action, bindings) in registry.grouped() {
            let keys = bindings
                .iter()
                .map(KeyBinding::label)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(Line::from(vec![
                Span::styled(format!("{keys:<16}"), Style::default().fg(theme.accent)),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Roman numerals show the chord function in the scale",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the overlay centered on top of `area`.
    pub fn render(f: &mut Frame, area: Rect, registry: &ShortcutRegistry, theme: &Theme) {
        let content = Self::content(registry, theme);
        let height = u16::try_from(content.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered_rect(56, height, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {APP_DISPLAY_NAME} Help "))
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(content).block(block), popup);
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}
