//! Pure view functions for the TUI.
//!
//! Rendering takes `&AppState`, draws to a ratatui Frame and never mutates
//! state or returns effects.

use ratatui::Frame;

use crate::features::picker::render_picker;
use crate::overlays::OverlayExt;
use crate::state::AppState;

/// Renders the picker, then the viewer on top of it when one is open.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    render_picker(&app.tui, frame, area);
    app.overlay.render(frame, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use emojlover_core::{Config, PaletteColor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::events::UiEvent;
    use crate::overlays::viewer::terminal_color;
    use crate::update::update;

    fn draw(app: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> AppState {
        let config = Config {
            title: "Pick one".to_string(),
            emojis: vec!["🐶".to_string(), "🐱".to_string()],
            palette: vec![PaletteColor::Purple],
            ..Config::default()
        };
        let mut app = AppState::with_rng(&config, StdRng::seed_from_u64(1));
        update(
            &mut app,
            UiEvent::Frame {
                width: 80,
                height: 24,
            },
        );
        app
    }

    #[test]
    fn test_picker_screen_shows_title_and_grid() {
        let buffer = draw(&app());
        let screen = text(&buffer);
        assert!(screen.contains("EmojLover"));
        assert!(screen.contains("Pick one"));
        assert!(screen.contains("Choose your Emoji:"));
        assert!(screen.contains("🐶"));
        assert!(screen.contains("🐱"));
        assert!(screen.contains("[Edit]"));
    }

    #[test]
    fn test_viewer_covers_picker() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))),
        );
        let buffer = draw(&app);
        let screen = text(&buffer);
        assert!(!screen.contains("Choose your Emoji:"));
        assert!(screen.contains("1 / 2"));
        assert_eq!(buffer[(0, 5)].bg, terminal_color(PaletteColor::Purple));
    }
}
