//! Render pipeline (View in TEA pattern)
//!
//! [`Renderer::render`] is a pure function of the session state and the
//! portfolio. It returns the whole frame as styled text, already centered in
//! the viewport; hyperlinks travel inside spans as OSC 8 sequences and are
//! turned into cells by [`crate::widgets::FrameView`].


use ratatui::text::{Line, Span, Text};
use termfolio_app::{Pager, SessionState, Tab, UiSettings};
use termfolio_core::{display_width, hyperlink, Experience, Portfolio, Project};

use crate::layout::{
    center_line, line_width, pad_right, place, truncate_line, wrap, wrap_paragraphs,
};
use crate::theme::Theme;

/// Cursor drawn after the typed intro text
pub const CURSOR_GLYPH: &str = "█";

/// Bullets shown per experience or project entry
pub const MAX_BULLETS: usize = 3;

const BULLET: &str = "• ";
const DOT_ACTIVE: &str = "•";
const DOT_INACTIVE: &str = "○";
const LINK_SEPARATOR: &str = "  ·  ";
const META_SEPARATOR: &str = " · ";
const FOOTER_SEPARATOR: &str = "  •  ";

const NO_OVERVIEW: &str = "Overview not available.";
const NO_EXPERIENCE: &str = "No experience data yet.";
const NO_PROJECTS: &str = "No projects data yet.";
const CONTACT_PLACEHOLDER: &str = "Contact tab — placeholder content.";

/// Border plus horizontal padding on each side of the card
const CARD_BORDER: usize = 1;
const CARD_PADDING_X: usize = 2;

const HELP_LISTING: &[(&str, &str)] = &[
    ("1–4", "jump to tab"),
    ("h/←  l/→", "previous / next tab"),
    ("j/k  ↑/↓", "previous / next entry (Experience, Projects)"),
    ("?", "toggle this help"),
    ("q  Esc  Ctrl-c", "quit"),
];

/// Builds frames from session state
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    ui: UiSettings,
}

impl Renderer {
    pub fn new(theme: Theme, ui: UiSettings) -> Self {
        Self { theme, ui }
    }

    /// Produce the frame for the current state.
    ///
    /// A quitting session yields only the farewell line. During the intro
    /// the frame is the typed text and cursor; afterwards it is the
    /// portfolio card. Both are centered once the viewport size is known.
    pub fn render(&self, state: &SessionState, portfolio: Option<&Portfolio>) -> Text<'static> {
        if state.should_quit() {
            return Text::from(self.ui.farewell.clone());
        }

        let frame = if state.animation.is_done() {
            self.card(state, portfolio)
        } else {
            Text::from(self.intro(state))
        };

        place(frame, state.viewport)
    }

    fn intro(&self, state: &SessionState) -> Line<'static> {
        let mut spans = vec![Span::styled(state.typed_intro(), self.theme.name)];
        if state.animation.cursor_visible {
            spans.push(Span::styled(CURSOR_GLYPH, self.theme.cursor));
        }
        Line::from(spans)
    }

    // ─────────────────────────────────────────────────────────
    // Card
    // ─────────────────────────────────────────────────────────

    /// Columns available to content inside border and padding
    fn inner_width(&self) -> usize {
        usize::from(self.ui.card_width)
            .saturating_sub(2 * (CARD_BORDER + CARD_PADDING_X))
            .max(1)
    }

    fn card(&self, state: &SessionState, portfolio: Option<&Portfolio>) -> Text<'static> {
        let width = self.inner_width();

        let mut body = self.tab_content(state, portfolio, width);
        let content_height = usize::from(self.ui.content_height);
        if body.len() < content_height {
            body.resize_with(content_height, Line::default);
        }

        body.push(Line::default());
        body.push(center_line(self.tab_strip(state.active_tab), width));
        body.extend(
            self.footer(state.active_tab, width)
                .into_iter()
                .map(|line| center_line(line, width)),
        );
        if state.help_expanded {
            body.extend(self.help_listing(width));
        }

        self.boxed(body, width)
    }

    /// Wrap body lines in a rounded border with padding
    fn boxed(&self, body: Vec<Line<'static>>, width: usize) -> Text<'static> {
        let border = self.theme.border;
        let span_width = width + 2 * CARD_PADDING_X;
        let horizontal = "─".repeat(span_width);
        let padding = " ".repeat(CARD_PADDING_X);

        let mut lines = Vec::with_capacity(body.len() + 4);
        lines.push(Line::styled(format!("╭{horizontal}╮"), border));
        lines.push(self.blank_row(span_width));
        for line in body {
            let line = pad_right(truncate_line(line, width), width);
            let mut spans = Vec::with_capacity(line.spans.len() + 4);
            spans.push(Span::styled("│", border));
            spans.push(Span::raw(padding.clone()));
            spans.extend(line.spans);
            spans.push(Span::raw(padding.clone()));
            spans.push(Span::styled("│", border));
            lines.push(Line::from(spans));
        }
        lines.push(self.blank_row(span_width));
        lines.push(Line::styled(format!("╰{horizontal}╯"), border));

        Text::from(lines)
    }

    fn blank_row(&self, width: usize) -> Line<'static> {
        Line::from(vec![
            Span::styled("│", self.theme.border),
            Span::raw(" ".repeat(width)),
            Span::styled("│", self.theme.border),
        ])
    }

    fn tab_strip(&self, active: Tab) -> Line<'static> {
        let spans: Vec<Span<'static>> = Tab::ALL
            .iter()
            .map(|&tab| {
                let style = if tab == active {
                    self.theme.tab_active
                } else {
                    self.theme.tab_inactive
                };
                Span::styled(format!(" {} ", tab.title()), style)
            })
            .collect();
        Line::from(spans)
    }

    /// Key hints, packed into as few lines as the card width allows
    fn footer(&self, active: Tab, width: usize) -> Vec<Line<'static>> {
        let mut hints = vec![
            "h/← & l/→: switch tabs",
            "1–4: jump to tab",
            "q: quit",
        ];
        match active {
            Tab::Experience => hints.push("j/k or ↑/↓: switch experience"),
            Tab::Projects => hints.push("j/k or ↑/↓: switch project"),
            Tab::Overview | Tab::Contact => {}
        }
        hints.push("?: help");

        let mut lines = Vec::new();
        let mut current = String::new();
        for hint in hints {
            if current.is_empty() {
                current.push_str(hint);
            } else if display_width(&current)
                + display_width(FOOTER_SEPARATOR)
                + display_width(hint)
                <= width
            {
                current.push_str(FOOTER_SEPARATOR);
                current.push_str(hint);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(hint);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        lines
            .into_iter()
            .map(|line| Line::styled(line, self.theme.footer))
            .collect()
    }

    fn help_listing(&self, width: usize) -> Vec<Line<'static>> {
        let key_width = HELP_LISTING
            .iter()
            .map(|(keys, _)| display_width(keys))
            .max()
            .unwrap_or(0);

        let rows: Vec<Line<'static>> = HELP_LISTING
            .iter()
            .map(|(keys, action)| {
                let pad = key_width - display_width(keys) + 3;
                Line::from(vec![
                    Span::styled(format!("{keys}{}", " ".repeat(pad)), self.theme.heading),
                    Span::styled(action.to_string(), self.theme.footer),
                ])
            })
            .collect();
        let block_width = rows.iter().map(line_width).max().unwrap_or(0);

        let mut lines = vec![
            Line::default(),
            center_line(
                pad_right(Line::styled("Key bindings", self.theme.heading), block_width),
                width,
            ),
        ];
        lines.extend(
            rows.into_iter()
                .map(|row| center_line(pad_right(row, block_width), width)),
        );
        lines
    }

    // ─────────────────────────────────────────────────────────
    // Tab content
    // ─────────────────────────────────────────────────────────

    fn tab_content(
        &self,
        state: &SessionState,
        portfolio: Option<&Portfolio>,
        width: usize,
    ) -> Vec<Line<'static>> {
        match state.active_tab {
            Tab::Overview => match portfolio {
                Some(p) => self.overview(p, &state.username, width),
                None => vec![Line::from(NO_OVERVIEW)],
            },
            Tab::Experience => {
                let entry = portfolio
                    .and_then(|p| p.experiences.get(state.experience_pager.current_index()));
                match entry {
                    Some(exp) => self.experience(exp, state.experience_pager, width),
                    None => vec![Line::from(NO_EXPERIENCE)],
                }
            }
            Tab::Projects => {
                let entry =
                    portfolio.and_then(|p| p.projects.get(state.project_pager.current_index()));
                match entry {
                    Some(proj) => self.project(proj, state.project_pager, width),
                    None => vec![Line::from(NO_PROJECTS)],
                }
            }
            Tab::Contact => vec![Line::from(CONTACT_PLACEHOLDER)],
        }
    }

    fn overview(&self, p: &Portfolio, username: &str, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(name) = non_empty(&p.name) {
            lines.push(center_line(Line::styled(name, self.theme.name), width));
        }
        if let Some(tagline) = non_empty(&p.tagline) {
            lines.push(center_line(Line::styled(tagline, self.theme.tagline), width));
        }
        lines.push(Line::default());

        if let Some(intro) = non_empty(&p.overview.intro) {
            lines.extend(
                wrap_paragraphs(&intro, width)
                    .into_iter()
                    .map(|l| Line::styled(l, self.theme.body)),
            );
            lines.push(Line::default());
        }

        for bullet in p.overview.bullets.iter().filter_map(|b| non_empty(b)) {
            lines.extend(self.bullet(&bullet, width));
        }

        let mut socials = Vec::new();
        if let Some(github) = non_empty(&p.contact.github) {
            socials.push(("GitHub", github));
        }
        if let Some(linkedin) = non_empty(&p.contact.linkedin) {
            socials.push(("LinkedIn", linkedin));
        }
        if let Some(email) = non_empty(&p.contact.email) {
            socials.push(("Email", format!("mailto:{email}")));
        }
        if !socials.is_empty() {
            lines.push(Line::default());
            lines.push(center_line(self.link_line(&socials), width));
        }

        if !username.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(format!("Welcome, {username}!"), self.theme.dim));
        }

        lines
    }

    fn experience(&self, exp: &Experience, pager: Pager, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let title: Vec<String> = [&exp.company, &exp.role]
            .into_iter()
            .filter_map(|s| non_empty(s))
            .collect();
        if !title.is_empty() {
            lines.push(Line::styled(title.join(" — "), self.theme.heading));
        }

        let meta: Vec<String> = [&exp.period, &exp.location]
            .into_iter()
            .filter_map(|s| non_empty(s))
            .collect();
        if !meta.is_empty() {
            lines.push(Line::styled(meta.join(META_SEPARATOR), self.theme.meta));
        }

        lines.push(Line::default());
        lines.extend(self.bullets(&exp.bullets, width));
        lines.extend(self.stack(&exp.stack, width));

        lines.push(Line::default());
        lines.push(self.pager_line(pager));
        lines
    }

    fn project(&self, proj: &Project, pager: Pager, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(name) = non_empty(&proj.name) {
            lines.push(Line::styled(name, self.theme.heading));
        }
        lines.push(Line::default());
        if let Some(summary) = non_empty(&proj.summary) {
            lines.extend(
                wrap(&summary, width)
                    .into_iter()
                    .map(|l| Line::styled(l, self.theme.body)),
            );
        }
        lines.extend(self.bullets(&proj.bullets, width));
        lines.extend(self.stack(&proj.stack_line(), width));

        let mut links = Vec::new();
        if let Some(code) = non_empty(&proj.links.code) {
            links.push(("Code", code));
        }
        if let Some(demo) = non_empty(&proj.links.demo) {
            links.push(("Demo", demo));
        }
        if !links.is_empty() {
            lines.push(Line::default());
            lines.push(self.link_line(&links));
        }

        lines.push(Line::default());
        lines.push(self.pager_line(pager));
        lines
    }

    /// The first few bullets of an entry, skipping blank ones
    fn bullets(&self, bullets: &[String], width: usize) -> Vec<Line<'static>> {
        bullets
            .iter()
            .take(MAX_BULLETS)
            .filter_map(|b| non_empty(b))
            .flat_map(|b| self.bullet(&b, width))
            .collect()
    }

    /// One bullet, wrapped with a hanging indent
    fn bullet(&self, text: &str, width: usize) -> Vec<Line<'static>> {
        let indent = " ".repeat(BULLET.chars().count());
        wrap(text, width.saturating_sub(indent.len()))
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                let marker = if i == 0 { BULLET.to_string() } else { indent.clone() };
                Line::styled(format!("{marker}{l}"), self.theme.body)
            })
            .collect()
    }

    fn stack(&self, stack: &str, width: usize) -> Vec<Line<'static>> {
        let Some(stack) = non_empty(stack) else {
            return Vec::new();
        };
        let mut lines = vec![Line::default()];
        lines.extend(
            wrap(&format!("Stack: {stack}"), width)
                .into_iter()
                .map(|l| Line::styled(l, self.theme.meta)),
        );
        lines
    }

    fn link_line(&self, links: &[(&str, String)]) -> Line<'static> {
        let mut spans = Vec::with_capacity(links.len() * 2);
        for (i, (label, url)) in links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(LINK_SEPARATOR, self.theme.meta));
            }
            spans.push(Span::styled(hyperlink(label, url), self.theme.link));
        }
        Line::from(spans)
    }

    /// "(i/n)" followed by one dot per item
    fn pager_line(&self, pager: Pager) -> Line<'static> {
        let current = pager.current_index();
        let mut spans = vec![Span::styled(
            format!("({}/{})  ", current + 1, pager.total()),
            self.theme.meta,
        )];
        spans.extend((0..pager.total()).map(|i| {
            if i == current {
                Span::styled(DOT_ACTIVE, self.theme.dot_active)
            } else {
                Span::styled(DOT_INACTIVE, self.theme.dot_inactive)
            }
        }));
        Line::from(spans)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Flatten a frame to a string, one row per line.
///
/// Hyperlink escape sequences are kept; styles are dropped.
pub fn frame_to_string(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
