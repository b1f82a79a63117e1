use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Builds a hint line: `key action • key action`.
pub fn hints_line<'a>(hints: &[InputHint<'a>], key_color: Color, text_color: Color) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(text_color)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(key_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(text_color),
        ));
    }
    Line::from(spans)
}

/// Renders a centered line of keyboard hints into `area`.
pub fn render_hints(
    frame: &mut Frame,
    area: Rect,
    hints: &[InputHint],
    key_color: Color,
    text_color: Color,
) {
    let para =
        Paragraph::new(hints_line(hints, key_color, text_color)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Centers a `width` x `height` rectangle inside `area`, shrinking to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
