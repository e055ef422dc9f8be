//! Frame layout helpers
//!
//! Everything here works on display columns, measured with escape sequences
//! stripped, so OSC 8 hyperlink spans count only as wide as their label.

use ratatui::text::{Line, Span, Text};
use termfolio_app::Viewport;
use termfolio_core::{display_width, parse_hyperlink};
use unicode_width::UnicodeWidthChar;

/// Display width of a line
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| display_width(&span.content))
        .sum()
}

/// Display width of the widest line
pub fn text_width(text: &Text<'_>) -> usize {
    text.lines.iter().map(line_width).max().unwrap_or(0)
}

fn blank(width: usize) -> Span<'static> {
    Span::raw(" ".repeat(width))
}

/// Pad a line with trailing spaces up to `width` columns
pub fn pad_right(mut line: Line<'static>, width: usize) -> Line<'static> {
    let used = line_width(&line);
    if used < width {
        line.spans.push(blank(width - used));
    }
    line
}

/// Center a line within `width` columns; wider lines are returned as-is
pub fn center_line(line: Line<'static>, width: usize) -> Line<'static> {
    let used = line_width(&line);
    if used >= width {
        return line;
    }
    let left = (width - used) / 2;
    let right = width - used - left;

    let mut spans = Vec::with_capacity(line.spans.len() + 2);
    if left > 0 {
        spans.push(blank(left));
    }
    spans.extend(line.spans);
    if right > 0 {
        spans.push(blank(right));
    }
    Line {
        spans,
        style: line.style,
        alignment: line.alignment,
    }
}

/// Cut a line down to at most `width` columns.
///
/// Plain spans are cut at a character boundary. A hyperlink span that does not
/// fit is dropped whole, so no half-open escape sequence is ever produced.
pub fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    if line_width(&line) <= width {
        return line;
    }

    let mut used = 0;
    let mut spans = Vec::new();
    for span in line.spans {
        let span_width = display_width(&span.content);
        if used + span_width <= width {
            used += span_width;
            spans.push(span);
            continue;
        }

        if parse_hyperlink(&span.content).is_none() {
            let mut cut = String::new();
            for c in span.content.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > width {
                    break;
                }
                used += w;
                cut.push(c);
            }
            if !cut.is_empty() {
                spans.push(Span::styled(cut, span.style));
            }
        }
        break;
    }

    Line {
        spans,
        style: line.style,
        alignment: line.alignment,
    }
}

/// Word-wrap plain text into lines of at most `width` columns.
///
/// Words wider than `width` are split across lines. Runs of whitespace
/// collapse to a single space.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard split an over-long word
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Like [`wrap`], but keeps the text's own line breaks. Blank lines between
/// paragraphs are preserved as empty lines.
pub fn wrap_paragraphs(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n').map(|p| p.trim_end_matches('\r')) {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrap(paragraph, width));
        }
    }
    lines
}

/// Center a frame inside the viewport.
///
/// Every line gets the same left offset so the block keeps its shape, and
/// blank rows above and below fill the viewport height. An unknown viewport
/// (no resize seen yet) returns the frame unchanged; a frame larger than the
/// viewport is pinned to the top-left corner.
pub fn place(text: Text<'static>, viewport: Viewport) -> Text<'static> {
    if !viewport.is_known() {
        return text;
    }

    let width = usize::from(viewport.width);
    let height = usize::from(viewport.height);
    let left = width.saturating_sub(text_width(&text)) / 2;
    let free_rows = height.saturating_sub(text.lines.len());
    let top = free_rows / 2;
    let bottom = free_rows - top;

    let mut lines = Vec::with_capacity(top + text.lines.len() + bottom);
    lines.extend(std::iter::repeat_with(Line::default).take(top));
    for line in text.lines {
        if left == 0 || line.spans.is_empty() {
            lines.push(line);
            continue;
        }
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        spans.push(blank(left));
        spans.extend(line.spans);
        lines.push(Line {
            spans,
            style: line.style,
            alignment: line.alignment,
        });
    }
    lines.extend(std::iter::repeat_with(Line::default).take(bottom));

    Text {
        lines,
        style: text.style,
        alignment: text.alignment,
    }
}
