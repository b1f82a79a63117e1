use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::layout::PickerLayout;
use super::state::PickerState;
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::TuiState;

const APP_TITLE: &str = "🌟 EmojLover 🌟";

/// Renders the picker screen. Pure: reads state, draws to the frame.
pub fn render_picker(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let layout = PickerLayout::compute(area);
    let picker = &tui.picker;

    render_title_bar(frame, &layout, picker.edit.active);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", tui.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        layout.heading,
    );

    render_live_preview(frame, layout.live, picker);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Choose your Emoji:",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))),
        layout.grid_label,
    );

    render_grid(frame, &layout, picker);
    render_footer(frame, layout.footer, picker);
}

fn render_title_bar(frame: &mut Frame, layout: &PickerLayout, editing: bool) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        layout.title,
    );

    let label = if editing { "[Done]" } else { "[Edit]" };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(Color::Cyan)))
            .alignment(Alignment::Center),
        layout.edit_button,
    );
}

fn render_live_preview(frame: &mut Frame, area: Rect, picker: &PickerState) {
    let border_color = if picker.is_animating() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(" live ")
        .title_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut glyph_style = Style::default();
    if picker.is_animating() {
        glyph_style = glyph_style.add_modifier(Modifier::BOLD);
    }
    let top_pad = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); usize::from(top_pad)];
    lines.push(Line::from(Span::styled(
        picker.surface.live().glyph().to_string(),
        glyph_style,
    )));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_grid(frame: &mut Frame, layout: &PickerLayout, picker: &PickerState) {
    let grid = layout.grid_geometry();
    let collection = picker.surface.collection();

    if collection.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No emojis left.",
                Style::default().fg(Color::DarkGray),
            ))),
            grid.area,
        );
        return;
    }

    for (index, glyph) in collection.iter().enumerate() {
        let Some(rect) = grid.tile_rect(index, picker.scroll) else {
            continue;
        };
        let focused = index == picker.focus;
        let marked = picker.edit.is_marked(index);

        let border_color = match (marked, focused) {
            (true, _) => Color::Red,
            (false, true) => Color::Cyan,
            (false, false) => Color::DarkGray,
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        if marked {
            block = block.title(Span::styled("✗", Style::default().fg(Color::Red)));
        } else if picker.edit.active {
            block = block.title(Span::styled("○", Style::default().fg(Color::DarkGray)));
        }
        if focused {
            block = block.style(Style::default().bg(Color::Rgb(40, 40, 48)));
        }

        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            Paragraph::new(glyph.to_string()).alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, picker: &PickerState) {
    let edit_hints = [
        InputHint::new("Space", "mark"),
        InputHint::new("d", "delete"),
        InputHint::new("e/Esc", "done"),
    ];
    let browse_hints = [
        InputHint::new("Enter/click", "view"),
        InputHint::new("Space", "live"),
        InputHint::new("e", "edit"),
        InputHint::new("q", "quit"),
    ];
    let hints: &[InputHint] = if picker.edit.active {
        &edit_hints
    } else {
        &browse_hints
    };
    render_hints(frame, area, hints, Color::Cyan, Color::DarkGray);
}
