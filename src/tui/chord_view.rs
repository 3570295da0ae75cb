//! Chord family widget: key header, chord grid and neighbor previews.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::music::{chord_family, Key, ROMAN_NUMERALS};

/// Width of one chord cell, borders included.
const CELL_WIDTH: u16 = 10;
/// Height of one chord cell, borders included.
const CELL_HEIGHT: u16 = 4;

/// Chord family widget
pub struct ChordView;

impl ChordView {
    /// Rows the widget needs for the given preview setting.
    #[must_use]
    pub const fn height(show_previews: bool) -> u16 {
        let previews = if show_previews { 4 } else { 0 };
        3 + CELL_HEIGHT * 2 + previews
    }

    /// Render previews, key header and the 4 + 3 chord grid.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let show_previews = state.config.ui.show_neighbor_previews;
        let preview_height = if show_previews { 2 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(preview_height), // Previous natural key
                Constraint::Length(3),              // Key header
                Constraint::Length(CELL_HEIGHT),    // I ii iii IV
                Constraint::Length(CELL_HEIGHT),    // V vi vii°
                Constraint::Length(preview_height), // Next natural key
            ])
            .split(area);

        if show_previews {
            if let Some(key) = state.navigator.previous_natural() {
                Self::render_preview(f, chunks[0], key, theme);
            }
        }

        Self::render_key_header(f, chunks[1], state.navigator.current(), theme);

        let chords = chord_family(state.navigator.current());
        Self::render_chord_row(f, chunks[2], &chords[..4], 0, theme);
        Self::render_chord_row(f, chunks[3], &chords[4..], 4, theme);

        if show_previews {
            if let Some(key) = state.navigator.next_natural() {
                Self::render_preview(f, chunks[4], key, theme);
            }
        }
    }

    fn render_key_header(f: &mut Frame, area: Rect, key: Key, theme: &Theme) {
        let lines = vec![
            Line::from(vec![
                Span::styled("◀   ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    key.name(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   ▶", Style::default().fg(theme.text_secondary)),
            ]),
            Line::from(Span::styled(
                "Major Scale",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let header = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// One row of chord cells; `first_degree` offsets the Roman numerals.
    fn render_chord_row(
        f: &mut Frame,
        area: Rect,
        chords: &[&str],
        first_degree: usize,
        theme: &Theme,
    ) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(chords.iter().map(|_| Constraint::Length(CELL_WIDTH)))
            .flex(Flex::Center)
            .spacing(1)
            .split(area);

        for (offset, (chord, cell)) in chords.iter().zip(cells.iter()).enumerate() {
            let numeral = ROMAN_NUMERALS[first_degree + offset];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.surface));

            let lines = vec![
                Line::from(Span::styled(numeral, Style::default().fg(theme.accent))),
                Line::from(Span::styled(
                    *chord,
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
            ];

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, *cell);
        }
    }

    fn render_preview(f: &mut Frame, area: Rect, key: Key, theme: &Theme) {
        let muted = Style::default().fg(theme.text_muted);
        let lines = vec![
            Line::from(Span::styled(format!("{} Major", key.name()), muted)),
            Line::from(Span::styled(chord_family(key).join("  "), muted)),
        ];

        let preview = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(preview, area);
    }
}
