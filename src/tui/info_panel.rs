//! Musical information panel below the chord grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::music::{key_facts, popular_progression, Key, KeyFacts};

/// Pentatonic positions, relative minor, progression and key signature.
pub struct InfoPanel;

impl InfoPanel {
    /// Rows the panel needs for the given pentatonic setting.
    #[must_use]
    pub const fn height(show_pentatonic: bool) -> u16 {
        if show_pentatonic {
            11
        } else {
            6
        }
    }

    /// Render the panel for the current key.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let key = state.navigator.current();
        let facts = key_facts(key);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Musical Information ")
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let pentatonic_height = if state.config.ui.show_pentatonic { 5 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(pentatonic_height),
                Constraint::Min(4),
            ])
            .split(inner);

        if state.config.ui.show_pentatonic {
            Self::render_pentatonic(f, chunks[0], &facts, theme);
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[1]);

        Self::render_key_facts(f, columns[0], &facts, theme);
        Self::render_progression(f, columns[1], key, theme);
    }

    fn render_pentatonic(f: &mut Frame, area: Rect, facts: &KeyFacts, theme: &Theme) {
        let heading = Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD);
        let label = Style::default().fg(theme.text);
        let value = Style::default().fg(theme.text_secondary);

        let lines = vec![
            Line::from(Span::styled("Pentatonic Scale Starting Positions:", heading)),
            Line::from(vec![
                Span::styled("Position 1: ", label),
                Span::styled(facts.pentatonic.position1, value),
            ]),
            Line::from(vec![
                Span::styled("Position 2: ", label),
                Span::styled(facts.pentatonic.position2, value),
            ]),
            Line::from(Span::styled(
                "Ideal root note positions for solos and scales",
                Style::default().fg(theme.text_muted),
            )),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_key_facts(f: &mut Frame, area: Rect, facts: &KeyFacts, theme: &Theme) {
        let heading = Style::default().fg(theme.primary);
        let value = Style::default().fg(theme.text);

        let lines = vec![
            Line::from(vec![
                Span::styled("Relative Minor: ", heading),
                Span::styled(facts.relative_minor, value),
            ]),
            Line::from(vec![
                Span::styled("Key Signature: ", heading),
                Span::styled(facts.key_signature, value),
            ]),
            Line::from(vec![
                Span::styled("Circle Position: ", heading),
                Span::styled(facts.circle_position, value),
            ]),
        ];

        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_progression(f: &mut Frame, area: Rect, key: Key, theme: &Theme) {
        let chord = Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD);
        let arrow = Style::default().fg(theme.accent);

        let mut spans = Vec::new();
        for (i, symbol) in popular_progression(key).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", arrow));
            }
            spans.push(Span::styled(symbol, chord));
        }

        let lines = vec![
            Line::from(Span::styled(
                format!("Popular Chord Progression in {}:", key.name()),
                Style::default().fg(theme.primary),
            )),
            Line::from(spans),
            Line::from(Span::styled(
                "(vi - IV - I - V progression)",
                Style::default().fg(theme.text_muted),
            )),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
