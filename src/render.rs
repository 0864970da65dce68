use raylib::prelude::*;

use crate::constants::*;
use crate::deck::{BulletGroup, Slide};

/// Live window dimensions, sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// A run of title text that is either plain or emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// One word of a wrapped line, carrying its emphasis through layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Splits `title` into alternating plain/emphasized segments, one emphasized
/// segment per occurrence of `emphasize`. Order and text are preserved.
pub fn split_emphasis<'a>(title: &'a str, emphasize: &str) -> Vec<Segment<'a>> {
    if emphasize.is_empty() {
        return vec![Segment { text: title, emphasized: false }];
    }
    let mut segments = Vec::new();
    let mut rest = title;
    let mut offset = 0;
    while let Some(pos) = rest.find(emphasize) {
        if pos > 0 {
            segments.push(Segment { text: &title[offset..offset + pos], emphasized: false });
        }
        segments.push(Segment {
            text: &title[offset + pos..offset + pos + emphasize.len()],
            emphasized: true,
        });
        offset += pos + emphasize.len();
        rest = &title[offset..];
    }
    if !rest.is_empty() {
        segments.push(Segment { text: rest, emphasized: false });
    }
    segments
}

/// Greedy word wrap over the segment words. `measure` maps a word to its
/// rendered width, so layout stays testable without a window.
pub fn wrap_words<'a>(
    segments: &[Segment<'a>],
    max_width: i32,
    space_width: i32,
    measure: impl Fn(&str) -> i32,
) -> Vec<Vec<Word<'a>>> {
    let mut lines: Vec<Vec<Word<'a>>> = Vec::new();
    let mut line: Vec<Word<'a>> = Vec::new();
    let mut line_width = 0;
    for segment in segments {
        for text in segment.text.split_whitespace() {
            let width = measure(text);
            let needed = if line.is_empty() { width } else { line_width + space_width + width };
            if !line.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = width;
            } else {
                line_width = needed;
            }
            line.push(Word { text, emphasized: segment.emphasized });
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Equal-width columns laid side by side across `area`, in input order.
pub fn column_layout(count: usize, area: Rectangle, gap: f32) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let width = (area.width - gap * (count as f32 - 1.0)) / count as f32;
    (0..count)
        .map(|i| Rectangle::new(area.x + i as f32 * (width + gap), area.y, width, area.height))
        .collect()
}

/// Fixed per-character advance used for the command slide.
pub fn mono_advance(font_size: i32) -> i32 {
    font_size * 3 / 5
}

pub fn mono_width(text: &str, font_size: i32) -> i32 {
    mono_advance(font_size) * text.chars().count() as i32
}

/// Draws the current slide, dispatching on its type.
pub fn draw_slide(d: &mut RaylibDrawHandle, slide: &Slide, viewport: Viewport) {
    match slide {
        Slide::Title { title, emphasize } => draw_title(d, title, emphasize, viewport),
        Slide::SingleWord { title } => draw_single_word(d, title, viewport),
        Slide::BulletList { title, content } => draw_bullet_list(d, title, content, viewport),
        Slide::Command { title } => draw_command(d, title, viewport),
    }
}

fn draw_title(d: &mut RaylibDrawHandle, title: &str, emphasize: &str, viewport: Viewport) {
    let segments = split_emphasis(title, emphasize);
    let space = d.measure_text(" ", TITLE_FONT_SIZE).max(1);
    let max_width = viewport.width - 2 * TITLE_MARGIN;
    let lines = wrap_words(&segments, max_width, space, |word| {
        d.measure_text(word, TITLE_FONT_SIZE)
    });

    let line_height = TITLE_FONT_SIZE + TITLE_LINE_SPACING;
    let block_height = lines.len() as i32 * line_height - TITLE_LINE_SPACING;
    let mut y = (viewport.height - block_height) / 2;
    for line in &lines {
        let total: i32 = line.iter().map(|word| d.measure_text(word.text, TITLE_FONT_SIZE)).sum::<i32>()
            + space * line.len().saturating_sub(1) as i32;
        let mut x = (viewport.width - total) / 2;
        for word in line {
            let color = if word.emphasized { ACCENT } else { INK };
            d.draw_text(word.text, x, y, TITLE_FONT_SIZE, color);
            x += d.measure_text(word.text, TITLE_FONT_SIZE) + space;
        }
        y += line_height;
    }
}

fn draw_single_word(d: &mut RaylibDrawHandle, word: &str, viewport: Viewport) {
    let width = d.measure_text(word, SINGLE_WORD_FONT_SIZE);
    let decorated = word == DECORATED_WORD;
    let block_height = if decorated {
        SINGLE_WORD_FONT_SIZE + MASCOT_GAP + MASCOT_HEIGHT
    } else {
        SINGLE_WORD_FONT_SIZE
    };
    let top = (viewport.height - block_height) / 2;
    d.draw_text(word, (viewport.width - width) / 2, top, SINGLE_WORD_FONT_SIZE, ACCENT);
    if decorated {
        draw_mascot(d, viewport.width / 2, top + SINGLE_WORD_FONT_SIZE + MASCOT_GAP);
    }
}

// The crewmate figure shown under the reserved single word.
fn draw_mascot(d: &mut RaylibDrawHandle, center_x: i32, top_y: i32) {
    let body = Rectangle::new(
        (center_x - MASCOT_WIDTH / 2) as f32,
        top_y as f32,
        MASCOT_WIDTH as f32,
        MASCOT_HEIGHT as f32,
    );
    d.draw_rectangle_rounded(body, 1.0, 16, ACCENT);

    let visor = Rectangle::new((center_x - 32) as f32, (top_y + 32) as f32, 64.0, 48.0);
    d.draw_rectangle_rounded(visor, 0.6, 12, Color::WHITE);

    d.draw_circle(center_x, top_y + MASCOT_HEIGHT - 32, 16.0, ACCENT);
}

fn draw_bullet_list(d: &mut RaylibDrawHandle, title: &str, groups: &[BulletGroup], viewport: Viewport) {
    let title_width = d.measure_text(title, LIST_TITLE_FONT_SIZE);
    d.draw_text(title, (viewport.width - title_width) / 2, LIST_TITLE_Y, LIST_TITLE_FONT_SIZE, INK);

    let area = Rectangle::new(
        CONTENT_MARGIN,
        COLUMNS_TOP,
        viewport.width as f32 - 2.0 * CONTENT_MARGIN,
        viewport.height as f32 - COLUMNS_TOP - COLUMNS_BOTTOM_MARGIN,
    );
    let columns = column_layout(groups.len(), area, COLUMN_GAP);
    for (group, column) in groups.iter().zip(&columns) {
        let column_x = column.x as i32;
        let column_width = column.width as i32;

        let heading_color = if group.highlight { ACCENT } else { INK };
        let heading_width = d.measure_text(&group.category, HEADING_FONT_SIZE);
        d.draw_text(
            &group.category,
            column_x + (column_width - heading_width) / 2,
            column.y as i32,
            HEADING_FONT_SIZE,
            heading_color,
        );

        let mut y = column.y as i32 + HEADING_FONT_SIZE + HEADING_GAP;
        for item in &group.items {
            let item_width = d.measure_text(item, ITEM_FONT_SIZE);
            d.draw_text(item, column_x + (column_width - item_width) / 2, y, ITEM_FONT_SIZE, INK);
            y += ITEM_FONT_SIZE + ITEM_SPACING;
        }
    }
}

// Verbatim command string on a panel, drawn one character per fixed cell so
// the block reads as monospace regardless of the active font.
fn draw_command(d: &mut RaylibDrawHandle, line: &str, viewport: Viewport) {
    let cell = mono_advance(COMMAND_FONT_SIZE);
    let text_width = mono_width(line, COMMAND_FONT_SIZE);
    let panel_width = text_width + 2 * COMMAND_PADDING;
    let panel_height = COMMAND_FONT_SIZE + 2 * COMMAND_PADDING;
    let panel_x = (viewport.width - panel_width) / 2;
    let panel_y = (viewport.height - panel_height) / 2;

    d.draw_rectangle(panel_x, panel_y, panel_width, panel_height, PANEL);
    d.draw_rectangle(panel_x, panel_y, COMMAND_BORDER, panel_height, ACCENT);

    let mut buf = [0u8; 4];
    let mut x = panel_x + COMMAND_PADDING;
    for ch in line.chars() {
        d.draw_text(ch.encode_utf8(&mut buf), x, panel_y + COMMAND_PADDING, COMMAND_FONT_SIZE, INK);
        x += cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_split_keeps_all_text_in_order() {
        let title = "Code is eating the world. Now computers can talk to us.";
        let segments = split_emphasis(title, "talk to us");

        assert_eq!(segments.len(), 3);
        assert!(!segments[0].emphasized);
        assert!(segments[1].emphasized);
        assert!(!segments[2].emphasized);
        assert_eq!(segments[1].text, "talk to us");

        let joined: String = segments.iter().map(|segment| segment.text).collect();
        assert_eq!(joined, title);
    }

    #[test]
    fn emphasis_split_marks_every_occurrence() {
        let segments = split_emphasis("go and go again", "go");
        let flags: Vec<bool> = segments.iter().map(|segment| segment.emphasized).collect();
        assert_eq!(flags, [true, false, true, false]);
    }

    #[test]
    fn title_without_a_match_stays_plain() {
        let segments = split_emphasis("plain title", "absent");
        assert_eq!(segments, [Segment { text: "plain title", emphasized: false }]);

        let segments = split_emphasis("plain title", "");
        assert_eq!(segments, [Segment { text: "plain title", emphasized: false }]);
    }

    #[test]
    fn wrapped_lines_never_exceed_the_max_width() {
        let segments = [Segment { text: "alpha beta gamma delta", emphasized: false }];
        let lines = wrap_words(&segments, 11, 1, |word| word.len() as i32);

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let width: i32 = line.iter().map(|word| word.text.len() as i32).sum::<i32>()
                + line.len().saturating_sub(1) as i32;
            assert!(width <= 11);
        }
        let words: Vec<&str> = lines.iter().flatten().map(|word| word.text).collect();
        assert_eq!(words, ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn emphasized_words_keep_their_flag_through_wrapping() {
        let segments = split_emphasis("one two three", "two");
        let lines = wrap_words(&segments, 1000, 1, |word| word.len() as i32);

        assert_eq!(lines.len(), 1);
        let flags: Vec<bool> = lines[0].iter().map(|word| word.emphasized).collect();
        assert_eq!(flags, [false, true, false]);
    }

    #[test]
    fn an_overlong_word_gets_its_own_line() {
        let segments = [Segment { text: "hi incomprehensibilities hi", emphasized: false }];
        let lines = wrap_words(&segments, 10, 1, |word| word.len() as i32);
        let words: Vec<usize> = lines.iter().map(|line| line.len()).collect();
        assert_eq!(words, [1, 1, 1]);
    }

    #[test]
    fn three_groups_make_three_columns_in_order() {
        let area = Rectangle::new(0.0, 0.0, 320.0, 100.0);
        let columns = column_layout(3, area, 10.0);

        assert_eq!(columns.len(), 3);
        assert!((columns[0].width - 100.0).abs() < 0.001);
        assert!(columns[0].x < columns[1].x && columns[1].x < columns[2].x);
        let right_edge = columns[2].x + columns[2].width;
        assert!((right_edge - 320.0).abs() < 0.001);
    }

    #[test]
    fn no_groups_make_no_columns() {
        let area = Rectangle::new(0.0, 0.0, 320.0, 100.0);
        assert!(column_layout(0, area, 10.0).is_empty());
    }

    #[test]
    fn command_width_ignores_glyph_shape() {
        assert_eq!(mono_width("iii", 36), mono_width("mmm", 36));
        assert_eq!(mono_width("abcd", 36), 4 * mono_advance(36));
    }
}
