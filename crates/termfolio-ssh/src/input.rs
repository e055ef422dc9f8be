//! Decoding of raw client keystrokes
//!
//! Over SSH there is no local terminal to parse input for us: the channel
//! carries the bytes the client's terminal sends. [`KeyDecoder`] turns them
//! into [`InputKey`]s, keeping partial escape sequences and UTF-8 characters
//! across packets.

use termfolio_app::InputKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParseState {
    #[default]
    Ground,
    /// After ESC
    Escape,
    /// After `ESC [`, skipping parameter bytes until the final byte
    Csi,
    /// After `ESC O`
    Ss3,
}

/// Stateful byte-to-key decoder for one channel
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: ParseState,
    utf8: Vec<u8>,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one packet of client input.
    ///
    /// An ESC that ends the packet is reported as the Escape key: terminals
    /// send escape sequences in a single write.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<InputKey> {
        let mut keys = Vec::new();
        for &byte in bytes {
            if let Some(key) = self.process_byte(byte) {
                keys.push(key);
            }
        }
        if self.state == ParseState::Escape {
            self.state = ParseState::Ground;
            keys.push(InputKey::Esc);
        }
        keys
    }

    fn process_byte(&mut self, byte: u8) -> Option<InputKey> {
        match self.state {
            ParseState::Ground => self.ground(byte),
            ParseState::Escape => self.escape(byte),
            ParseState::Csi => self.csi(byte),
            ParseState::Ss3 => {
                self.state = ParseState::Ground;
                arrow(byte)
            }
        }
    }

    fn ground(&mut self, byte: u8) -> Option<InputKey> {
        if !self.utf8.is_empty() || byte >= 0x80 {
            return self.utf8_byte(byte);
        }
        match byte {
            0x1b => {
                self.state = ParseState::Escape;
                None
            }
            // Tab, newline and carriage return have no binding
            b'\t' | b'\n' | b'\r' => None,
            0x01..=0x1a => Some(InputKey::CharCtrl(char::from(b'a' + byte - 1))),
            0x20..=0x7e => Some(InputKey::Char(char::from(byte))),
            _ => None,
        }
    }

    fn escape(&mut self, byte: u8) -> Option<InputKey> {
        match byte {
            b'[' => {
                self.state = ParseState::Csi;
                None
            }
            b'O' => {
                self.state = ParseState::Ss3;
                None
            }
            0x1b => Some(InputKey::Esc),
            _ => {
                // Alt+key is reported as the key alone
                self.state = ParseState::Ground;
                self.ground(byte)
            }
        }
    }

    fn csi(&mut self, byte: u8) -> Option<InputKey> {
        match byte {
            // Parameter and intermediate bytes
            0x20..=0x3f => None,
            0x40..=0x7e => {
                self.state = ParseState::Ground;
                arrow(byte)
            }
            _ => {
                // Invalid: abort the sequence
                self.state = ParseState::Ground;
                None
            }
        }
    }

    fn utf8_byte(&mut self, byte: u8) -> Option<InputKey> {
        self.utf8.push(byte);
        match std::str::from_utf8(&self.utf8) {
            Ok(s) => {
                let key = s.chars().next().map(InputKey::Char);
                self.utf8.clear();
                key
            }
            Err(e) if e.error_len().is_none() && self.utf8.len() < 4 => None,
            Err(_) => {
                self.utf8.clear();
                None
            }
        }
    }
}

fn arrow(final_byte: u8) -> Option<InputKey> {
    match final_byte {
        b'A' => Some(InputKey::Up),
        b'B' => Some(InputKey::Down),
        b'C' => Some(InputKey::Right),
        b'D' => Some(InputKey::Left),
        _ => None,
    }
}
