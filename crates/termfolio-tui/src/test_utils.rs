//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full frames using ratatui's
//! TestBackend, plus a sample portfolio and session states to render.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! let frame = Text::from("Bye!");
//! term.render_widget(FrameView::new(&frame), term.area());
//! assert!(term.buffer_contains("Bye!"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;
use termfolio_app::{SessionState, Settings};
use termfolio_core::{Contact, Experience, Overview, Portfolio, Project, ProjectLinks};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Portfolio with two experience entries and two projects
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        name: "Ada Lovelace".into(),
        tagline: "Analyst & Metaphysician".into(),
        overview: Overview {
            intro: "I write programs for engines that do not exist yet.".into(),
            bullets: vec![
                "Engines: Analytical, Difference".into(),
                "  ".into(),
                "Notes: Bernoulli numbers".into(),
            ],
        },
        experiences: vec![
            Experience {
                company: "Acme Engine Works".into(),
                role: "Engineer".into(),
                period: "1842 – 1843".into(),
                location: "London".into(),
                bullets: vec![
                    "Translated the memoir".into(),
                    "Wrote Note G".into(),
                    "Corresponded with Babbage".into(),
                    "Hidden fourth bullet".into(),
                ],
                stack: "Punch cards, Gears".into(),
            },
            Experience {
                company: "Royal Society".into(),
                location: "London".into(),
                ..Default::default()
            },
        ],
        projects: vec![
            Project {
                name: "Difference Engine".into(),
                bullets: vec!["Tabulates polynomials".into()],
                stack: "Brass".into(),
                links: ProjectLinks {
                    code: "https://github.com/ada/engine".into(),
                    demo: String::new(),
                },
                ..Default::default()
            },
            Project {
                name: "Note G".into(),
                links: ProjectLinks {
                    code: String::new(),
                    demo: "https://example.com/note-g".into(),
                },
                ..Default::default()
            },
        ],
        contact: Contact {
            email: "ada@example.com".into(),
            github: "https://github.com/ada".into(),
            linkedin: String::new(),
        },
    }
}

/// Fresh session for the given portfolio, before any tick
pub fn create_test_state(portfolio: Option<&Portfolio>) -> SessionState {
    SessionState::new("alice", portfolio, &Settings::default())
}

/// Session whose intro animation has finished
pub fn finished_state(portfolio: Option<&Portfolio>) -> SessionState {
    let mut state = create_test_state(portfolio);
    while !state.animation.is_done() {
        state.animation = state.animation.advance();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_finished_state_is_done() {
        let state = finished_state(Some(&sample_portfolio()));
        assert!(state.animation.is_done());
        assert_eq!(state.experience_pager.total(), 2);
    }
}
