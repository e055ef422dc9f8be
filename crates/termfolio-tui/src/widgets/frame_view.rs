//! Widget that draws a rendered frame into the terminal buffer
//!
//! Plain spans are written cell by cell with their style. Spans holding an
//! OSC 8 hyperlink are written as their label first, then the label cells are
//! overwritten with hyperlink symbols two characters at a time, the way
//! ratatui's hyperlink example works around crossterm counting the escape
//! bytes as visible width.

use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};
use termfolio_core::parse_hyperlink;

/// Draws a frame produced by [`crate::render::Renderer`]
pub struct FrameView<'a> {
    text: &'a Text<'a>,
}

impl<'a> FrameView<'a> {
    pub fn new(text: &'a Text<'a>) -> Self {
        Self { text }
    }
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_x = area.right();

        for (row, line) in self.text.lines.iter().enumerate() {
            if row >= usize::from(area.height) {
                break;
            }
            let y = area.y + row as u16;
            let mut x = area.x;

            for span in &line.spans {
                if x >= max_x {
                    break;
                }
                let remaining = usize::from(max_x - x);
                let style = self.text.style.patch(line.style).patch(span.style);

                match parse_hyperlink(&span.content) {
                    Some((url, label)) => {
                        let (end_x, _) = buf.set_stringn(x, y, label, remaining, style);
                        apply_hyperlink(buf, x, end_x, y, label, url);
                        x = end_x;
                    }
                    None => {
                        let (end_x, _) =
                            buf.set_stringn(x, y, span.content.as_ref(), remaining, style);
                        x = end_x;
                    }
                }
            }
        }
    }
}

/// Overlay OSC 8 symbols on the cells in `start_x..end_x` holding `label`
fn apply_hyperlink(buf: &mut Buffer, start_x: u16, end_x: u16, y: u16, label: &str, url: &str) {
    let chars: Vec<char> = label.chars().collect();
    for (i, chunk) in chars.chunks(2).enumerate() {
        let x = start_x + (i as u16) * 2;
        if x >= end_x {
            break;
        }
        // A label clipped at the area edge may leave a single column
        let room = usize::from(end_x - x);
        let chunk: String = chunk.iter().take(room).collect();
        buf[(x, y)].set_symbol(&format!("\x1b]8;;{url}\x07{chunk}\x1b]8;;\x07"));
    }
}
