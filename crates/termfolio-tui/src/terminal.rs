//! Terminal setup and restoration

use std::io::Write;

use crossterm::{queue, terminal::SetTitle};
use termfolio_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Set the client's window title
pub fn set_title(out: &mut impl Write, title: &str) -> Result<()> {
    queue!(out, SetTitle(title))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_title_writes_osc_sequence() {
        let mut out = Vec::new();
        set_title(&mut out, "Portfolio").expect("write to Vec cannot fail");

        let written = String::from_utf8(out).expect("title is UTF-8");
        assert!(written.starts_with("\x1b]0;"));
        assert!(written.contains("Portfolio"));
    }
}
