//! Painting helpers shared by the components.
//!
//! All positions are document-space; the frame's scroll offset is applied
//! here and anything outside the viewport is clipped by the buffer.

use crate::buffer::Cell;
use crate::component::Frame;
use crate::layout::Rect;
use crate::theme::{ComputedStyle, Rgb};

/// Paint the background of `rect`.
pub fn fill_rect(frame: &mut Frame<'_>, rect: Rect, bg: Rgb) {
    let rect = frame.to_viewport(rect);
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = frame.buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

/// Paint the background of a styled box, if the style sets one.
pub fn paint_box(frame: &mut Frame<'_>, rect: Rect, style: &ComputedStyle) {
    if let Some(bg) = style.bg {
        fill_rect(frame, rect, bg);
    }
}

/// Draw `text` starting at `(x, y)` without exceeding `max_width` columns.
///
/// Wide glyphs that would straddle the limit are dropped.
pub fn draw_text(
    frame: &mut Frame<'_>,
    x: i32,
    y: i32,
    text: &str,
    max_width: u16,
    style: &ComputedStyle,
) {
    let y = y - frame.scroll_y;
    let limit = x + max_width as i32;
    let mut cursor = x;

    for ch in text.chars() {
        let width = char_width(ch) as i32;
        if width == 0 {
            continue;
        }
        if cursor + width > limit {
            break;
        }

        let bg = style
            .bg
            .or_else(|| frame.buf.get(cursor, y).map(|c| c.bg))
            .unwrap_or_default();
        frame.buf.set(
            cursor,
            y,
            Cell::new(ch)
                .with_fg(style.fg)
                .with_bg(bg)
                .with_bold(style.bold),
        );
        for offset in 1..width {
            frame.buf.set(
                cursor + offset,
                y,
                Cell {
                    wide_continuation: true,
                    ..Cell::new(' ').with_bg(bg)
                },
            );
        }
        cursor += width;
    }
}

pub fn char_width(c: char) -> usize {
    use unicode_width::UnicodeWidthChar;
    c.width().unwrap_or(0)
}

pub fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

/// Trim `s` so it fits in `max_width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 8), "short");
        assert_eq!(truncate_to_width("much too long", 8), "much to…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide glyphs are never split.
        assert_eq!(truncate_to_width("日本語です", 4), "日…");
    }
}
