//! Session runner - entry point and event loop
//!
//! [`run_session`] owns one session: messages from its input channel and the
//! intro's self-scheduled tick timer are fed through [`process_message`];
//! effects returned by the reducer are carried out here and nowhere else.
//! [`run`] drives a session on the process's own terminal; the SSH server
//! drives one per channel with the channel as the terminal.

use std::io::Write;
use std::sync::Arc;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Rect, Size};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::Instant;

use termfolio_app::{process_message, signals, Message, SessionState, Settings, UpdateAction};
use termfolio_core::prelude::*;
use termfolio_core::Portfolio;

use crate::event;
use crate::render::Renderer;
use crate::terminal;
use crate::theme::Theme;
use crate::widgets::FrameView;

/// Capacity of a session's input channel
pub const MESSAGE_BUFFER: usize = 64;

/// Everything a session needs besides the terminal
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub portfolio: Arc<Portfolio>,
    pub settings: Settings,
    pub theme: Theme,
    /// Remote user's display name
    pub username: String,
}

/// Run one session on the process's terminal until the user quits
pub async fn run(config: SessionConfig) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let result = run_local(&mut term, &config).await;
    ratatui::restore();

    result
}

async fn run_local(term: &mut ratatui::DefaultTerminal, config: &SessionConfig) -> Result<()> {
    let size = term.size().context("Failed to query terminal size")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);
    signals::spawn_signal_handler(msg_tx.clone());
    spawn_input_task(msg_tx);

    run_session(term, config, size, msg_rx).await?;
    Ok(())
}

/// Forward crossterm events from the local terminal into the session
fn spawn_input_task(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(ev) = events.next().await {
            let message = match ev {
                Ok(ev) => match event::to_message(ev) {
                    Some(message) => message,
                    None => continue,
                },
                Err(e) => {
                    warn!("Terminal input error: {}", e);
                    break;
                }
            };
            if tx.send(message).await.is_err() {
                return;
            }
        }

        info!("Terminal input closed");
        let _ = tx.send(Message::Quit).await;
    });
}

/// Pending tick of the intro animation.
///
/// At most one deadline is armed at a time; firing disarms it.
#[derive(Debug, Default)]
struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    fn arm(&mut self, after: std::time::Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deadline to sleep until; only meaningful while armed
    fn deadline(&self) -> Instant {
        self.deadline.unwrap_or_else(Instant::now)
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }
}

/// Drive one session until it quits, returning its final state.
///
/// `size` is the client's viewport when the session starts. Every session
/// gets its own state and timer; only the portfolio is shared. A closed input
/// channel ends the session like a quit key.
pub async fn run_session<W: Write>(
    term: &mut Terminal<CrosstermBackend<W>>,
    config: &SessionConfig,
    size: Size,
    mut messages: mpsc::Receiver<Message>,
) -> Result<SessionState> {
    let renderer = Renderer::new(config.theme, config.settings.ui.clone());
    let portfolio = config.portfolio.as_ref();

    let mut timer = TickTimer::default();
    let mut state = SessionState::new(config.username.clone(), Some(portfolio), &config.settings);

    for message in [
        Message::SessionStarting,
        Message::Resize {
            width: size.width,
            height: size.height,
        },
    ] {
        state = dispatch(term, &renderer, portfolio, state, message, &mut timer)?;
    }

    while !state.should_quit() {
        let message = tokio::select! {
            maybe_message = messages.recv() => match maybe_message {
                Some(message) => message,
                None => {
                    debug!("Session input closed");
                    Message::Quit
                }
            },
            _ = tokio::time::sleep_until(timer.deadline()), if timer.is_armed() => {
                timer.disarm();
                Message::Tick
            }
        };

        state = dispatch(term, &renderer, portfolio, state, message, &mut timer)?;
    }

    debug!("Session loop finished for {:?}", state.username);
    Ok(state)
}

/// Run one message through the reducer, perform its effects and redraw
fn dispatch<W: Write>(
    term: &mut Terminal<CrosstermBackend<W>>,
    renderer: &Renderer,
    portfolio: &Portfolio,
    state: SessionState,
    message: Message,
    timer: &mut TickTimer,
) -> Result<SessionState> {
    trace!("Dispatching {:?}", message);

    if let Message::Resize { width, height } = message {
        if width > 0 && height > 0 {
            term.resize(Rect::new(0, 0, width, height))?;
        }
    }

    let (state, outcome) = process_message(state, message);

    for action in outcome.actions {
        match action {
            UpdateAction::ScheduleTick { after } => timer.arm(after),
            UpdateAction::SetWindowTitle(title) => {
                if let Err(e) = terminal::set_title(term.backend_mut(), &title) {
                    warn!("Failed to set window title: {}", e);
                }
            }
        }
    }

    if state.should_quit() {
        timer.disarm();
    }

    if outcome.redraw {
        let frame = renderer.render(&state, Some(portfolio));
        term.draw(|f| f.render_widget(FrameView::new(&frame), f.area()))?;
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_starts_disarmed() {
        let timer = TickTimer::default();
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_timer_arm_sets_future_deadline() {
        let mut timer = TickTimer::default();
        let before = Instant::now();
        timer.arm(Duration::from_millis(60));

        assert!(timer.is_armed());
        assert!(timer.deadline() >= before + Duration::from_millis(60));
    }

    #[test]
    fn test_rearming_replaces_deadline() {
        let mut timer = TickTimer::default();
        timer.arm(Duration::from_secs(60));
        let far = timer.deadline();
        timer.arm(Duration::from_millis(1));

        assert!(timer.deadline() < far);
    }

    #[test]
    fn test_disarm() {
        let mut timer = TickTimer::default();
        timer.arm(Duration::from_millis(60));
        timer.disarm();
        assert!(!timer.is_armed());
    }

    fn fixed_terminal(width: u16, height: u16) -> Terminal<CrosstermBackend<Vec<u8>>> {
        let options = ratatui::TerminalOptions {
            viewport: ratatui::Viewport::Fixed(Rect::new(0, 0, width, height)),
        };
        Terminal::with_options(CrosstermBackend::new(Vec::new()), options)
            .expect("in-memory terminal")
    }

    fn test_config(username: &str) -> SessionConfig {
        SessionConfig {
            portfolio: Arc::new(crate::test_utils::sample_portfolio()),
            settings: Settings::default(),
            theme: Theme::plain(),
            username: username.to_string(),
        }
    }

    #[tokio::test]
    async fn test_session_ends_on_quit_and_keeps_its_navigation() {
        let mut term = fixed_terminal(120, 40);
        let (tx, rx) = mpsc::channel(MESSAGE_BUFFER);
        for message in [
            Message::Key(termfolio_app::InputKey::Char('3')),
            Message::Key(termfolio_app::InputKey::Char('j')),
            Message::Quit,
        ] {
            tx.send(message).await.expect("session is listening");
        }

        let state = run_session(&mut term, &test_config("ada"), Size::new(120, 40), rx)
            .await
            .expect("session runs");

        assert!(state.should_quit());
        assert_eq!(state.active_tab, termfolio_app::Tab::Projects);
        assert_eq!(state.project_pager.current_index(), 1);
        assert_eq!(state.viewport, termfolio_app::Viewport::new(120, 40));
    }

    #[tokio::test]
    async fn test_closed_input_ends_session() {
        let mut term = fixed_terminal(80, 24);
        let (tx, rx) = mpsc::channel(MESSAGE_BUFFER);
        drop(tx);

        let state = run_session(&mut term, &test_config("ada"), Size::new(80, 24), rx)
            .await
            .expect("session runs");
        assert!(state.should_quit());
    }

    #[tokio::test]
    async fn test_window_title_goes_to_session_output() {
        let mut term = fixed_terminal(80, 24);
        let (tx, rx) = mpsc::channel(MESSAGE_BUFFER);
        tx.send(Message::Quit).await.expect("session is listening");

        run_session(&mut term, &test_config("ada"), Size::new(80, 24), rx)
            .await
            .expect("session runs");

        let output = String::from_utf8_lossy(term.backend().writer()).to_string();
        assert!(output.contains("\x1b]0;Portfolio"));
        assert!(output.contains("Bye!"));
    }

    #[tokio::test]
    async fn test_armed_timer_fires_once() {
        let mut timer = TickTimer::default();
        timer.arm(Duration::from_millis(5));

        let mut fired = 0;
        for _ in 0..3 {
            tokio::select! {
                _ = tokio::time::sleep_until(timer.deadline()), if timer.is_armed() => {
                    timer.disarm();
                    fired += 1;
                }
                _ = tokio::time::sleep(Duration::from_millis(30)) => {}
            }
        }

        assert_eq!(fired, 1);
    }
}
