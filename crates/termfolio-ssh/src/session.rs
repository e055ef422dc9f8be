//! One portfolio session on an SSH channel

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Rect, Size};
use ratatui::{Terminal, TerminalOptions, Viewport};
use tokio::sync::mpsc;

use termfolio_app::{Message, SessionState};
use termfolio_core::prelude::*;
use termfolio_tui::{run_session, SessionConfig};

use crate::writer::ChannelWriter;

/// Viewport assumed when the client never requested a PTY
pub const FALLBACK_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Run a session whose terminal is the client at the other end of `writer`.
///
/// The viewport is fixed to the size the client reported and follows its
/// `window-change` requests, which arrive as [`Message::Resize`]. The
/// alternate screen is left again however the session ends.
pub async fn run_channel_session(
    writer: ChannelWriter,
    config: SessionConfig,
    size: Size,
    messages: mpsc::Receiver<Message>,
) -> Result<SessionState> {
    let options = TerminalOptions {
        viewport: Viewport::Fixed(Rect::new(0, 0, size.width, size.height)),
    };
    let mut term = Terminal::with_options(CrosstermBackend::new(writer), options)?;
    execute!(term.backend_mut(), EnterAlternateScreen, Hide)?;

    let result = run_session(&mut term, &config, size, messages).await;

    if let Err(e) = execute!(term.backend_mut(), LeaveAlternateScreen, Show) {
        debug!("Could not restore client terminal: {}", e);
    }
    result
}
