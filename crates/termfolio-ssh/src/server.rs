//! SSH server: one portfolio session per shell channel
//!
//! Every accepted connection gets a [`Connection`] handler. A `shell` request
//! starts a session on that channel with its own state, timer and terminal;
//! `pty-req` and `window-change` become resize messages and channel data is
//! decoded into key presses. The portfolio is loaded once and shared by all
//! sessions behind one `Arc`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Size;
use russh::server::{self, Auth, Handle, Msg, Server as _, Session};
use russh::{Channel, ChannelId, CryptoVec, Pty};
use tokio::sync::mpsc;

use termfolio_app::{Message, Settings};
use termfolio_core::prelude::*;
use termfolio_core::Portfolio;
use termfolio_tui::{SessionConfig, Theme, MESSAGE_BUFFER};

use crate::host_key;
use crate::input::KeyDecoder;
use crate::session::{run_channel_session, FALLBACK_SIZE};
use crate::writer::ChannelWriter;

/// Port the server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 22;

/// Idle connections are dropped after this long
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(3600);

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub listen: SocketAddr,
    /// Host key file; generated on first start
    pub host_key: PathBuf,
    pub portfolio: Arc<Portfolio>,
    pub settings: Settings,
    pub theme: Theme,
}

/// State shared by every connection
#[derive(Debug)]
struct Shared {
    portfolio: Arc<Portfolio>,
    settings: Settings,
    theme: Theme,
}

impl Shared {
    fn session_config(&self, username: &str) -> SessionConfig {
        SessionConfig {
            portfolio: Arc::clone(&self.portfolio),
            settings: self.settings.clone(),
            theme: self.theme,
            username: username.to_string(),
        }
    }
}

/// Serve the portfolio until interrupted
pub async fn serve(config: ServeConfig) -> Result<()> {
    let key = host_key::load_or_create(&config.host_key)?;

    let ssh_config = Arc::new(server::Config {
        inactivity_timeout: Some(INACTIVITY_TIMEOUT),
        auth_rejection_time: Duration::from_secs(1),
        auth_rejection_time_initial: Some(Duration::from_secs(0)),
        keys: vec![key],
        nodelay: true,
        ..Default::default()
    });

    let mut server = PortfolioServer::new(Shared {
        portfolio: config.portfolio,
        settings: config.settings,
        theme: config.theme,
    });

    info!("Serving portfolio over SSH on {}", config.listen);
    tokio::select! {
        result = server.run_on_address(ssh_config, config.listen) => {
            result.map_err(|e| Error::ssh(format!("Failed to serve on {}: {}", config.listen, e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}

struct PortfolioServer {
    shared: Arc<Shared>,
    next_id: usize,
}

impl PortfolioServer {
    fn new(shared: Shared) -> Self {
        Self {
            shared: Arc::new(shared),
            next_id: 0,
        }
    }
}

impl server::Server for PortfolioServer {
    type Handler = Connection;

    fn new_client(&mut self, peer: Option<SocketAddr>) -> Connection {
        self.next_id += 1;
        info!("Connection {} from {:?}", self.next_id, peer);
        Connection::new(self.next_id, Arc::clone(&self.shared))
    }

    fn handle_session_error(&mut self, error: <Self::Handler as server::Handler>::Error) {
        warn!("SSH session error: {}", error);
    }
}

/// Per-channel bookkeeping
#[derive(Debug, Default)]
struct ChannelSlot {
    /// Size from the last `pty-req` or `window-change`
    size: Option<Size>,
    decoder: KeyDecoder,
    /// Input of the running session, once the shell has started
    input: Option<mpsc::Sender<Message>>,
}

impl ChannelSlot {
    async fn send(&self, message: Message) {
        if let Some(input) = &self.input {
            if input.send(message).await.is_err() {
                trace!("Session already finished");
            }
        }
    }
}

/// Handler for one SSH connection
pub struct Connection {
    id: usize,
    shared: Arc<Shared>,
    /// SSH user name, shown as the visitor's display name
    username: String,
    channels: HashMap<ChannelId, ChannelSlot>,
}

impl Connection {
    fn new(id: usize, shared: Arc<Shared>) -> Self {
        Self {
            id,
            shared,
            username: String::new(),
            channels: HashMap::new(),
        }
    }

    /// Every visitor is let in; the user name only personalises the session
    fn accept(&mut self, user: &str) -> Auth {
        debug!("Connection {} authenticated as {:?}", self.id, user);
        self.username = user.to_string();
        Auth::Accept
    }

    async fn resize(&mut self, channel: ChannelId, cols: u32, rows: u32) {
        let Some(slot) = self.channels.get_mut(&channel) else {
            return;
        };
        let size = Size::new(clamp_dimension(cols), clamp_dimension(rows));
        slot.size = Some(size);
        slot.send(Message::Resize {
            width: size.width,
            height: size.height,
        })
        .await;
    }

    fn start_session(&mut self, channel: ChannelId, handle: Handle) -> bool {
        let Some(slot) = self.channels.get_mut(&channel) else {
            return false;
        };
        if slot.input.is_some() {
            return false;
        }

        let (input_tx, input_rx) = mpsc::channel(MESSAGE_BUFFER);
        slot.input = Some(input_tx);
        let size = slot.size.unwrap_or(FALLBACK_SIZE);

        let (output_tx, output_rx) = mpsc::unbounded_channel();
        tokio::spawn(forward_output(handle, channel, output_rx));

        let config = self.shared.session_config(&self.username);
        let id = self.id;
        tokio::spawn(async move {
            let writer = ChannelWriter::new(output_tx);
            match run_channel_session(writer, config, size, input_rx).await {
                Ok(state) => info!("Connection {} session for {:?} ended", id, state.username),
                Err(e) => warn!("Connection {} session failed: {}", id, e),
            }
        });
        true
    }
}

impl server::Handler for Connection {
    type Error = russh::Error;

    async fn auth_none(&mut self, user: &str) -> std::result::Result<Auth, Self::Error> {
        Ok(self.accept(user))
    }

    async fn auth_publickey(
        &mut self,
        user: &str,
        _public_key: &russh::keys::PublicKey,
    ) -> std::result::Result<Auth, Self::Error> {
        Ok(self.accept(user))
    }

    async fn channel_open_session(
        &mut self,
        channel: Channel<Msg>,
        _session: &mut Session,
    ) -> std::result::Result<bool, Self::Error> {
        self.channels.insert(channel.id(), ChannelSlot::default());
        Ok(true)
    }

    async fn pty_request(
        &mut self,
        channel: ChannelId,
        term: &str,
        col_width: u32,
        row_height: u32,
        _pix_width: u32,
        _pix_height: u32,
        _modes: &[(Pty, u32)],
        session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        debug!(
            "Connection {} pty {:?} {}x{}",
            self.id, term, col_width, row_height
        );
        self.resize(channel, col_width, row_height).await;
        session.channel_success(channel)?;
        Ok(())
    }

    async fn window_change_request(
        &mut self,
        channel: ChannelId,
        col_width: u32,
        row_height: u32,
        _pix_width: u32,
        _pix_height: u32,
        _session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        self.resize(channel, col_width, row_height).await;
        Ok(())
    }

    async fn shell_request(
        &mut self,
        channel: ChannelId,
        session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        if self.start_session(channel, session.handle()) {
            session.channel_success(channel)?;
        } else {
            session.channel_failure(channel)?;
        }
        Ok(())
    }

    async fn data(
        &mut self,
        channel: ChannelId,
        data: &[u8],
        _session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        if let Some(slot) = self.channels.get_mut(&channel) {
            let keys = slot.decoder.feed(data);
            for key in keys {
                slot.send(Message::Key(key)).await;
            }
        }
        Ok(())
    }

    async fn channel_eof(
        &mut self,
        channel: ChannelId,
        _session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        if let Some(slot) = self.channels.get(&channel) {
            slot.send(Message::Quit).await;
        }
        Ok(())
    }

    async fn channel_close(
        &mut self,
        channel: ChannelId,
        _session: &mut Session,
    ) -> std::result::Result<(), Self::Error> {
        // Dropping the slot closes the session's input, which ends it
        self.channels.remove(&channel);
        Ok(())
    }
}

/// Send a session's output to the client, then close the channel once the
/// session has dropped its terminal.
async fn forward_output(
    handle: Handle,
    channel: ChannelId,
    mut output: mpsc::UnboundedReceiver<Vec<u8>>,
) {
    while let Some(chunk) = output.recv().await {
        if handle.data(channel, CryptoVec::from(chunk)).await.is_err() {
            debug!("Client went away before output was delivered");
            return;
        }
    }

    let _ = handle.exit_status_request(channel, 0).await;
    let _ = handle.eof(channel).await;
    let _ = handle.close(channel).await;
}

/// Terminal dimensions arrive as `u32`; anything out of range is clamped
fn clamp_dimension(cells: u32) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}
