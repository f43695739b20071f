//! Overlay layer: navigation bar, page sections and status lines.
//!
//! The view reads the palette and the scroll offset and produces a [`Layout`]
//! of drawing operations plus the hit rectangles the input layer needs. Its
//! only state is which sections have already slid into view.

use crate::color::Rgb;
use crate::content::{self, Card};
use crate::math::ease_out_cubic;
use crate::screen::{Rect, Screen};
use crate::theme::Palette;

/// Seconds a section takes to slide in
pub const REVEAL_DURATION: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Strategist,
    Alchemist,
    Contact,
}

pub const SECTIONS: [SectionId; 4] = [
    SectionId::Hero,
    SectionId::Strategist,
    SectionId::Alchemist,
    SectionId::Contact,
];

impl SectionId {
    fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::Strategist => 1,
            SectionId::Alchemist => 2,
            SectionId::Contact => 3,
        }
    }

    /// Where the block starts before sliding in, in cells
    fn reveal_from(self) -> (isize, isize) {
        match self {
            SectionId::Hero => (0, 2),
            SectionId::Strategist => (-6, 0),
            SectionId::Alchemist => (6, 0),
            SectionId::Contact => (0, 0),
        }
    }

    /// Contact is drawn in place without a slide
    fn animated(self) -> bool {
        self != SectionId::Contact
    }

    /// Cards slide in again each time they come back into view
    fn replays(self) -> bool {
        matches!(self, SectionId::Strategist | SectionId::Alchemist)
    }
}

/// Records when each section last slid into the viewport
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealTracker {
    revealed_at: [Option<f64>; SECTIONS.len()],
}

impl RevealTracker {
    /// Starts the slide when `section` enters view. Replaying sections are
    /// hidden again once they leave it.
    pub fn observe(&mut self, section: SectionId, visible: bool, now: f64) {
        let slot = &mut self.revealed_at[section.index()];
        if visible && slot.is_none() {
            *slot = Some(now);
        } else if !visible && section.replays() {
            *slot = None;
        }
    }

    /// Eased reveal progress in `[0, 1]`; 0 while the section is hidden
    pub fn progress(&self, section: SectionId, now: f64) -> f64 {
        if !section.animated() {
            return 1.0;
        }
        match self.revealed_at[section.index()] {
            None => 0.0,
            Some(start) => ease_out_cubic((now - start) / REVEAL_DURATION),
        }
    }

    /// Treats every section as fully revealed
    pub fn reveal_all(&mut self) {
        self.revealed_at = [Some(f64::NEG_INFINITY); SECTIONS.len()];
    }
}

/// Everything the view needs for one frame
pub struct ViewContext<'a> {
    pub cols: usize,
    pub rows: usize,
    /// Scroll offset in rows
    pub offset: usize,
    pub palette: &'a Palette,
    /// Wall-clock seconds, used for reveals
    pub now: f64,
    pub status: Option<&'a str>,
    pub hud: &'a [String],
    pub paused: bool,
}

#[derive(Clone, Debug, PartialEq)]
enum DrawOp {
    Fill { rect: Rect, color: Rgb, opacity: f64 },
    Frame { rect: Rect, color: Rgb },
    Text { col: isize, row: isize, text: String, fg: Rgb, bold: bool },
}

/// Drawing operations for one frame plus hit targets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub toggle_button: Rect,
    /// Present while the contact button is on screen
    pub contact_button: Option<Rect>,
    ops: Vec<DrawOp>,
}

impl Layout {
    pub fn paint(&self, screen: &mut Screen) {
        for op in &self.ops {
            match op {
                DrawOp::Fill { rect, color, opacity } => screen.fill(*rect, *color, *opacity),
                DrawOp::Frame { rect, color } => screen.frame(*rect, *color),
                DrawOp::Text { col, row, text, fg, bold } => {
                    screen.put_str(*col, *row, text, *fg, *bold)
                }
            }
        }
    }

    fn text(&mut self, col: isize, row: isize, text: impl Into<String>, fg: Rgb, bold: bool) {
        self.ops.push(DrawOp::Text { col, row, text: text.into(), fg, bold });
    }
}

#[cfg(test)]
impl Layout {
    /// All text drawn on screen row `row`, in draw order
    pub fn text_on_row(&self, row: isize) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { row: r, text, .. } if *r == row => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Colour of the first text op equal to `needle`
    pub fn text_color(&self, needle: &str) -> Option<Rgb> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { text, fg, .. } if text == needle => Some(*fg),
            _ => None,
        })
    }
}

/// One coloured run of text within a line
#[derive(Clone, Debug, PartialEq)]
struct Run {
    text: String,
    fg: Rgb,
    bold: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

/// A section's content before placement
struct Block {
    lines: Vec<Vec<Run>>,
    /// Alignment of the block inside the viewport and of lines inside the block
    align: Align,
    border: Option<Rgb>,
    fill: Option<(Rgb, f64)>,
    /// Line index holding the framed call-to-action button
    button_line: Option<usize>,
    inner_width: usize,
}

impl Block {
    fn width(&self) -> usize {
        self.inner_width + 4
    }

    fn height(&self) -> usize {
        self.lines.len() + 2
    }
}

/// Owns the reveal state and the contact address
pub struct View {
    reveal: RevealTracker,
    contact_address: String,
}

impl View {
    pub fn new(contact_address: impl Into<String>) -> Self {
        View {
            reveal: RevealTracker::default(),
            contact_address: contact_address.into(),
        }
    }

    pub fn contact_address(&self) -> &str {
        &self.contact_address
    }

    /// Rows of scrollable content for a viewport: one screen per section
    pub fn content_rows(viewport_rows: usize) -> usize {
        SECTIONS.len() * viewport_rows
    }

    pub fn reveal_all(&mut self) {
        self.reveal.reveal_all();
    }

    #[cfg(test)]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn layout(&mut self, ctx: &ViewContext) -> Layout {
        let mut layout = Layout::default();
        let (cols, rows) = (ctx.cols, ctx.rows);
        if cols == 0 || rows == 0 {
            return layout;
        }

        for (index, section) in SECTIONS.iter().enumerate() {
            let block = build_block(*section, ctx.palette, cols);
            let section_top = (index * rows) as isize - ctx.offset as isize;
            let top = section_top + (rows as isize - block.height() as isize) / 2;
            let margin = (cols / 12).max(2) as isize;
            let left = match block.align {
                Align::Left => margin,
                Align::Center => (cols as isize - block.width() as isize) / 2,
                Align::Right => cols as isize - margin - block.width() as isize,
            };
            let target = Rect::new(left, top, block.width(), block.height());

            // Row 0 belongs to the navigation bar
            let visible = target.overlaps_rows(1, rows as isize);
            self.reveal.observe(*section, visible, ctx.now);
            let progress = self.reveal.progress(*section, ctx.now);
            if progress <= 0.0 {
                continue;
            }

            let (from_x, from_y) = section.reveal_from();
            let remaining = 1.0 - progress;
            let rect = Rect::new(
                target.col + (from_x as f64 * remaining).round() as isize,
                target.row + (from_y as f64 * remaining).round() as isize,
                target.width,
                target.height,
            );
            if let Some(button) = place_block(&mut layout, &block, rect, ctx.palette, progress) {
                if button.overlaps_rows(1, rows as isize) {
                    layout.contact_button = Some(button);
                }
            }
        }

        self.nav(&mut layout, ctx);

        if let Some(status) = ctx.status {
            let row = rows as isize - 1;
            layout.ops.push(DrawOp::Fill {
                rect: Rect::new(0, row, cols, 1),
                color: ctx.palette.background,
                opacity: 0.8,
            });
            layout.text(1, row, status, ctx.palette.text, false);
        }

        if !ctx.hud.is_empty() {
            let width = ctx.hud.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
            layout.ops.push(DrawOp::Fill {
                rect: Rect::new(0, 1, width, ctx.hud.len()),
                color: ctx.palette.background,
                opacity: 0.7,
            });
            for (i, line) in ctx.hud.iter().enumerate() {
                layout.text(1, 1 + i as isize, line.as_str(), ctx.palette.text, false);
            }
        }

        if ctx.paused {
            // Semi-transparent overlay with a centred label
            layout.ops.push(DrawOp::Fill {
                rect: Rect::new(0, 0, cols, rows),
                color: Rgb::BLACK,
                opacity: 0.6,
            });
            let label = "Paused";
            layout.text(
                (cols as isize - label.len() as isize) / 2,
                rows as isize / 2,
                label,
                Rgb::WHITE,
                true,
            );
        }

        layout
    }

    fn nav(&self, layout: &mut Layout, ctx: &ViewContext) {
        let palette = ctx.palette;
        layout.ops.push(DrawOp::Fill {
            rect: Rect::new(0, 0, ctx.cols, 1),
            color: palette.background,
            opacity: 0.5,
        });
        layout.text(2, 0, content::BRAND, palette.text, true);

        let label = format!(" {} ", palette.toggle_label);
        let width = label.chars().count();
        let col = ctx.cols as isize - width as isize - 2;
        let button = Rect::new(col, 0, width, 1);
        layout.ops.push(DrawOp::Fill {
            rect: button,
            color: palette.text,
            opacity: 0.2,
        });
        layout.text(col, 0, label, palette.text, false);
        layout.toggle_button = button;
    }
}

/// Emits the ops for a block at `rect`; returns the button rectangle if any
fn place_block(
    layout: &mut Layout,
    block: &Block,
    rect: Rect,
    palette: &Palette,
    progress: f64,
) -> Option<Rect> {
    if let Some((color, opacity)) = block.fill {
        layout.ops.push(DrawOp::Fill { rect, color, opacity: opacity * progress });
    }
    if let Some(border) = block.border {
        let color = palette.background.mix(border, progress);
        layout.ops.push(DrawOp::Frame { rect, color });
    }

    let mut button = None;
    for (i, line) in block.lines.iter().enumerate() {
        let row = rect.row + 1 + i as isize;
        let line_width: usize = line.iter().map(|r| r.text.chars().count()).sum();
        let inner_left = rect.col + 2;
        let mut col = match block.align {
            Align::Left => inner_left,
            Align::Center => inner_left + (block.inner_width as isize - line_width as isize) / 2,
            Align::Right => inner_left + block.inner_width as isize - line_width as isize,
        };
        if block.button_line == Some(i) {
            let frame = Rect::new(col - 2, row - 1, line_width + 4, 3);
            let color = palette.background.mix(palette.contact_button, progress);
            layout.ops.push(DrawOp::Frame { rect: frame, color });
            button = Some(frame);
        }
        for run in line {
            let fg = palette.background.mix(run.fg, progress);
            layout.text(col, row, run.text.clone(), fg, run.bold);
            col += run.text.chars().count() as isize;
        }
    }
    button
}

fn build_block(section: SectionId, palette: &Palette, cols: usize) -> Block {
    let max_inner = cols.saturating_sub(8).max(8);
    match section {
        SectionId::Hero => {
            let subtitle = fit_spaced(content::HERO_SUBTITLE, max_inner);
            let lines = vec![
                vec![run(content::HERO_TITLE, palette.hero_accent, true)],
                Vec::new(),
                vec![run(&subtitle, palette.text, false)],
            ];
            Block {
                inner_width: widest(&lines).min(max_inner),
                lines,
                align: Align::Center,
                border: None,
                fill: Some((palette.card_fill, palette.card_opacity / 3.0)),
                button_line: None,
            }
        }
        SectionId::Strategist => card_block(
            &content::STRATEGIST,
            palette.strategist_accent,
            palette.strategist_border,
            Align::Left,
            palette,
            max_inner,
        ),
        SectionId::Alchemist => card_block(
            &content::ALCHEMIST,
            palette.alchemist_accent,
            palette.alchemist_border,
            Align::Right,
            palette,
            max_inner,
        ),
        SectionId::Contact => {
            let title = fit_spaced(content::CONTACT_TITLE, max_inner);
            let lines = vec![
                vec![run(&title, palette.text, false)],
                Vec::new(),
                Vec::new(),
                vec![run(content::CONTACT_BUTTON, palette.contact_button, true)],
                Vec::new(),
                Vec::new(),
                vec![run(content::CONTACT_LOCATION, palette.muted_text, false)],
            ];
            Block {
                inner_width: widest(&lines).max(content::CONTACT_BUTTON.len() + 4).min(max_inner),
                lines,
                align: Align::Center,
                border: None,
                fill: None,
                button_line: Some(3),
            }
        }
    }
}

fn card_block(
    card: &Card,
    accent: Rgb,
    border: Rgb,
    align: Align,
    palette: &Palette,
    max_inner: usize,
) -> Block {
    let inner = max_inner.min(56);
    let mut lines = vec![vec![run(card.title, accent, true)], Vec::new()];
    for words in wrap(card.body, inner) {
        lines.push(highlight_runs(&words, palette.text, accent));
    }
    lines.push(Vec::new());

    let mut tags = Vec::new();
    for (i, tag) in card.tags.iter().enumerate() {
        if i > 0 {
            tags.push(run(" ", palette.text, false));
        }
        tags.push(run(&format!("[{tag}]"), accent, false));
    }
    lines.push(tags);

    Block {
        lines,
        align,
        border: Some(border),
        fill: Some((palette.card_fill, palette.card_opacity)),
        button_line: None,
        inner_width: inner,
    }
}

fn run(text: &str, fg: Rgb, bold: bool) -> Run {
    Run {
        text: text.to_string(),
        fg,
        bold,
    }
}

fn widest(lines: &[Vec<Run>]) -> usize {
    lines
        .iter()
        .map(|l| l.iter().map(|r| r.text.chars().count()).sum::<usize>())
        .max()
        .unwrap_or(0)
}

/// Letter-spaced rendering of `text` when it fits in `width`
fn fit_spaced(text: &str, width: usize) -> String {
    let spaced = text
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if spaced.chars().count() <= width {
        spaced
    } else {
        text.to_string()
    }
}

/// A word plus whether it is highlighted
type Word = (String, bool);

/// Greedy word wrap; `*`-delimited words are flagged and stripped of markers.
/// Words longer than `width` are hard-split.
fn wrap(text: &str, width: usize) -> Vec<Vec<Word>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Word>> = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut current_len = 0;
    let mut highlight = false;

    for raw in text.split_whitespace() {
        let mut word = raw;
        let starts = word.starts_with('*');
        if starts {
            word = &word[1..];
            highlight = true;
        }
        let is_highlighted = highlight;
        if let Some(idx) = word.find('*') {
            // Closing marker, possibly followed by punctuation
            let mut owned = word[..idx].to_string();
            owned.push_str(&word[idx + 1..]);
            highlight = false;
            push_word(&mut lines, &mut current, &mut current_len, owned, is_highlighted, width);
            continue;
        }
        push_word(&mut lines, &mut current, &mut current_len, word.to_string(), is_highlighted, width);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_word(
    lines: &mut Vec<Vec<Word>>,
    current: &mut Vec<Word>,
    current_len: &mut usize,
    word: String,
    highlighted: bool,
    width: usize,
) {
    let mut word = word;
    loop {
        let len = word.chars().count();
        let needed = if current.is_empty() { len } else { *current_len + 1 + len };
        if needed <= width {
            *current_len = needed;
            current.push((word, highlighted));
            return;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_len = 0;
            continue;
        }
        // Word alone is too long: split it
        let head: String = word.chars().take(width).collect();
        let tail: String = word.chars().skip(width).collect();
        lines.push(vec![(head, highlighted)]);
        word = tail;
        if word.is_empty() {
            return;
        }
    }
}

/// Joins wrapped words into runs, switching colour at highlight boundaries
fn highlight_runs(words: &[Word], text: Rgb, accent: Rgb) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (i, (word, highlighted)) in words.iter().enumerate() {
        let fg = if *highlighted { accent } else { text };
        let piece = if i == 0 { word.clone() } else { format!(" {word}") };
        match runs.last_mut() {
            Some(last) if last.fg == fg && last.bold == *highlighted => last.text.push_str(&piece),
            _ => runs.push(Run {
                text: piece,
                fg,
                bold: *highlighted,
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeState;

    fn ctx<'a>(palette: &'a Palette, offset: usize, now: f64) -> ViewContext<'a> {
        ViewContext {
            cols: 100,
            rows: 30,
            offset,
            palette,
            now,
            status: None,
            hud: &[],
            paused: false,
        }
    }

    fn all_text(layout: &Layout, rows: isize) -> String {
        (0..rows)
            .flat_map(|r| layout.text_on_row(r))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn nav_shows_brand_and_toggle_label() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        let layout = view.layout(&ctx(&palette, 0, 0.0));
        let nav = layout.text_on_row(0);
        assert!(nav.contains(&"KRISHNA.IO"));
        assert!(nav.contains(&" LIGHT MODE "));
        assert_eq!(layout.toggle_button, Rect::new(86, 0, 12, 1));
        assert!(layout.toggle_button.contains(90, 0));
    }

    #[test]
    fn toggle_label_follows_theme() {
        let palette = Palette::for_theme(ThemeState::Light);
        let mut view = View::new("me@example.com");
        let layout = view.layout(&ctx(&palette, 0, 0.0));
        assert!(layout.text_on_row(0).contains(&" DARK MODE "));
    }

    #[test]
    fn hero_is_visible_at_the_top() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        view.layout(&ctx(&palette, 0, 0.0));
        let layout = view.layout(&ctx(&palette, 0, 5.0));
        let text = all_text(&layout, 30);
        assert!(text.contains("IT'S ME, KRISHNA"));
        assert!(!text.contains("THE STRATEGIST"));
        assert!(layout.contact_button.is_none());
    }

    #[test]
    fn scrolling_brings_sections_into_view() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        view.layout(&ctx(&palette, 30, 0.0));
        let layout = view.layout(&ctx(&palette, 30, 5.0));
        let text = all_text(&layout, 30);
        assert!(text.contains("THE STRATEGIST"));
        assert!(text.contains("[TRADINGVIEW]"));
        assert!(!text.contains("IT'S ME, KRISHNA"));
    }

    #[test]
    fn contact_button_is_hit_testable_at_the_bottom() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        view.layout(&ctx(&palette, 90, 0.0));
        let layout = view.layout(&ctx(&palette, 90, 5.0));
        let button = layout.contact_button.expect("contact button on screen");
        assert_eq!(button.height, 3);
        assert!(all_text(&layout, 30).contains("INITIATE CONTACT"));
    }

    #[test]
    fn sections_stay_hidden_until_seen() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        view.layout(&ctx(&palette, 0, 0.0));
        assert_eq!(view.reveal().progress(SectionId::Strategist, 10.0), 0.0);
        assert_eq!(view.reveal().progress(SectionId::Hero, 10.0), 1.0);
    }

    #[test]
    fn hero_reveals_once() {
        let mut tracker = RevealTracker::default();
        tracker.observe(SectionId::Hero, true, 2.0);
        tracker.observe(SectionId::Hero, false, 3.0);
        tracker.observe(SectionId::Hero, true, 9.0);
        assert_eq!(tracker.progress(SectionId::Hero, 2.0), 0.0);
        assert!(tracker.progress(SectionId::Hero, 2.3) > 0.5);
        assert_eq!(tracker.progress(SectionId::Hero, 2.0 + REVEAL_DURATION), 1.0);
        assert_eq!(tracker.progress(SectionId::Hero, 9.0), 1.0);
    }

    #[test]
    fn cards_replay_when_seen_again() {
        let mut tracker = RevealTracker::default();
        tracker.observe(SectionId::Alchemist, true, 2.0);
        assert_eq!(tracker.progress(SectionId::Alchemist, 5.0), 1.0);
        tracker.observe(SectionId::Alchemist, false, 5.0);
        assert_eq!(tracker.progress(SectionId::Alchemist, 6.0), 0.0);
        tracker.observe(SectionId::Alchemist, true, 9.0);
        assert_eq!(tracker.progress(SectionId::Alchemist, 9.0), 0.0);
        assert_eq!(tracker.progress(SectionId::Alchemist, 9.0 + REVEAL_DURATION), 1.0);
    }

    #[test]
    fn contact_is_never_animated() {
        let tracker = RevealTracker::default();
        assert_eq!(tracker.progress(SectionId::Contact, 0.0), 1.0);
    }

    #[test]
    fn revealing_cards_slide_from_their_side() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        let first = view.layout(&ctx(&palette, 30, 0.0));
        let mut settled_view = View::new("me@example.com");
        settled_view.reveal_all();
        let settled = settled_view.layout(&ctx(&palette, 30, 0.0));
        // Nothing is drawn on the frame a section is first seen
        assert_eq!(first.text_color("THE STRATEGIST"), None);
        assert_eq!(settled.text_color("THE STRATEGIST"), Some(palette.strategist_accent));
    }

    #[test]
    fn card_styles_follow_theme() {
        let dark = Palette::for_theme(ThemeState::Dark);
        let light = Palette::for_theme(ThemeState::Light);
        let mut view = View::new("me@example.com");
        view.reveal_all();
        let d = view.layout(&ctx(&dark, 60, 0.0));
        let l = view.layout(&ctx(&light, 60, 0.0));
        assert_eq!(d.text_color("THE ALCHEMIST"), Some(dark.alchemist_accent));
        assert_eq!(l.text_color("THE ALCHEMIST"), Some(light.alchemist_accent));
        assert_ne!(dark.alchemist_accent, light.alchemist_accent);
    }

    #[test]
    fn status_and_hud_render() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        let hud = vec!["FPS: 30.00".to_string()];
        let context = ViewContext {
            status: Some("mailto:me@example.com"),
            hud: &hud,
            paused: true,
            ..ctx(&palette, 0, 0.0)
        };
        let layout = view.layout(&context);
        assert!(layout.text_on_row(29).contains(&"mailto:me@example.com"));
        assert!(layout.text_on_row(1).contains(&"FPS: 30.00"));
        assert!(layout.text_on_row(15).contains(&"Paused"));
    }

    #[test]
    fn wrap_respects_width_and_markers() {
        let lines = wrap("Using *Pine Script* and advanced logic", 12);
        for line in &lines {
            let len: usize = line.iter().map(|(w, _)| w.len()).sum::<usize>() + line.len() - 1;
            assert!(len <= 12);
        }
        let flat: Vec<_> = lines.concat();
        assert!(flat.contains(&("Pine".to_string(), true)));
        assert!(flat.contains(&("Script".to_string(), true)));
        assert!(flat.contains(&("and".to_string(), false)));
    }

    #[test]
    fn wrap_keeps_trailing_punctuation() {
        let flat: Vec<_> = wrap("Founder of *RECRENZO*. I fuse", 40).concat();
        assert!(flat.contains(&("RECRENZO.".to_string(), true)));
        assert!(flat.contains(&("I".to_string(), false)));
    }

    #[test]
    fn wrap_splits_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2][0].0, "ij");
    }

    #[test]
    fn spaced_text_falls_back_when_narrow() {
        assert_eq!(fit_spaced("ABC", 10), "A B C");
        assert_eq!(fit_spaced("ABC", 4), "ABC");
    }

    #[test]
    fn tiny_viewport_produces_nothing() {
        let palette = Palette::for_theme(ThemeState::Dark);
        let mut view = View::new("me@example.com");
        let context = ViewContext { cols: 0, ..ctx(&palette, 0, 0.0) };
        assert_eq!(view.layout(&context), Layout::default());
    }
}
