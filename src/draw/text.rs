//! Fixed-pitch text layout: line splitting, word wrap and box alignment.
//!
//! Widths are estimated from the glyph cell size rather than measured from
//! rendered glyphs, so layout is deterministic regardless of which font the
//! backend ends up using.

/// Horizontal alignment inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left = -1,
    Center = 0,
    Right = 1,
}

/// Vertical alignment inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top = -1,
    Center = 0,
    Bottom = 1,
}

impl HAlign {
    /// Alignment factor in {-1, 0, 1}.
    pub fn factor(self) -> f64 {
        self as i8 as f64
    }
}

impl VAlign {
    /// Alignment factor in {-1, 0, 1}.
    pub fn factor(self) -> f64 {
        self as i8 as f64
    }
}

impl TryFrom<i32> for HAlign {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Left),
            0 => Ok(Self::Center),
            1 => Ok(Self::Right),
            other => Err(other),
        }
    }
}

impl TryFrom<i32> for VAlign {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Top),
            0 => Ok(Self::Center),
            1 => Ok(Self::Bottom),
            other => Err(other),
        }
    }
}

/// Size of one fixed-pitch glyph cell in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCell {
    pub width: f64,
    pub height: f64,
}

impl Default for GlyphCell {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 5.0,
        }
    }
}

impl GlyphCell {
    /// Vertical distance between consecutive baselines.
    pub fn line_pitch(&self) -> f64 {
        self.height + 1.0
    }

    /// Estimated rendered width of a line: one cell per character, minus the
    /// trailing one-pixel gap.
    pub fn line_width(&self, line: &str) -> f64 {
        let chars = line.chars().count();
        if chars == 0 {
            return 0.0;
        }
        chars as f64 * self.width - 1.0
    }

    /// Number of characters that fit in `width`.
    ///
    /// Never less than one, so a box narrower than a single glyph still
    /// makes progress.
    pub fn chars_per_line(&self, width: f64) -> usize {
        if self.width <= 0.0 {
            return usize::MAX;
        }
        (((width + 1.0) / self.width).floor() as usize).max(1)
    }
}

/// A line of text positioned on the surface; `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Splits upper-cased text on explicit newlines and positions each line at
/// a fixed pitch below `(x, y)`.
pub fn layout_lines(
    x: f64,
    y: f64,
    text: &str,
    cell: GlyphCell,
    font_size: f64,
) -> Vec<PlacedLine> {
    text.to_uppercase()
        .split('\n')
        .enumerate()
        .map(|(i, line)| PlacedLine {
            text: line.to_string(),
            x,
            y: y + i as f64 * cell.line_pitch() + font_size,
        })
        .collect()
}

/// Greedy word wrap at `max_chars` characters per line.
///
/// Lines break at the last whitespace before the limit. Explicit newlines
/// always start a new line, and blank lines survive. A word longer than
/// `max_chars` is the only thing ever split mid-word. Runs of whitespace,
/// including tabs and leading spaces, collapse to a single space.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max_chars).peekable();
                while let Some(chunk) = chunks.next() {
                    let piece: String = chunk.iter().collect();
                    if chunks.peek().is_some() {
                        lines.push(piece);
                    } else {
                        line_len = chunk.len();
                        line = piece;
                    }
                }
                continue;
            }

            if line_len == 0 {
                line.push_str(word);
                line_len = word_len;
            } else if line_len + 1 + word_len <= max_chars {
                line.push(' ');
                line.push_str(word);
                line_len += 1 + word_len;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
                line_len = word_len;
            }
        }

        lines.push(line);
    }

    lines
}

/// Offset that places content of extent `used` inside `space` for an
/// alignment factor in {-1, 0, 1}.
///
/// Start alignment is always zero, so an unbounded box keeps its content at
/// the origin instead of producing `0 * inf`.
fn align_offset(factor: f64, space: f64, used: f64) -> f64 {
    if factor <= -1.0 {
        0.0
    } else {
        (1.0 + factor) * (space - used) / 2.0
    }
}

/// Axis-aligned box that text is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Upper-cases, wraps and aligns text inside `bounds`.
///
/// The whole block is positioned vertically by `v_align`; each line is then
/// positioned horizontally by `h_align` using its estimated width.
pub fn layout_text_box(
    bounds: TextBox,
    text: &str,
    h_align: HAlign,
    v_align: VAlign,
    cell: GlyphCell,
    font_size: f64,
) -> Vec<PlacedLine> {
    let lines = wrap_text(&text.to_uppercase(), cell.chars_per_line(bounds.width));
    let pitch = cell.line_pitch();
    let block_height = lines.len() as f64 * pitch - 1.0;
    let top = bounds.y + align_offset(v_align.factor(), bounds.height, block_height);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let line_width = cell.line_width(&line);
            PlacedLine {
                x: bounds.x + align_offset(h_align.factor(), bounds.width, line_width),
                y: top + i as f64 * pitch + font_size,
                text: line,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: GlyphCell = GlyphCell {
        width: 4.0,
        height: 5.0,
    };

    #[test]
    fn lines_use_fixed_pitch_below_origin() {
        let lines = layout_lines(3.0, 10.0, "ab\ncd\n", CELL, 5.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], PlacedLine { text: "AB".into(), x: 3.0, y: 15.0 });
        assert_eq!(lines[1].y, 21.0);
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[2].y, 27.0);
    }

    #[test]
    fn wrap_breaks_at_last_whitespace() {
        assert_eq!(
            wrap_text("THE QUICK BROWN FOX", 10),
            vec!["THE QUICK", "BROWN FOX"]
        );
    }

    #[test]
    fn wrap_keeps_words_that_fit_whole() {
        let lines = wrap_text("AAAA BBBB CCCC", 5);
        assert_eq!(lines, vec!["AAAA", "BBBB", "CCCC"]);
        for line in &lines {
            assert!(line.chars().count() <= 5);
        }
    }

    #[test]
    fn wrap_splits_only_oversized_words() {
        assert_eq!(
            wrap_text("AB ABCDEFGHIJ C", 4),
            vec!["AB", "ABCD", "EFGH", "IJ C"]
        );
    }

    #[test]
    fn wrap_preserves_explicit_newlines() {
        assert_eq!(wrap_text("ONE\n\nTWO THREE", 20), vec!["ONE", "", "TWO THREE"]);
    }

    #[test]
    fn chars_per_line_accounts_for_trailing_gap() {
        // 5 chars take 5 * 4 - 1 = 19 units.
        assert_eq!(CELL.chars_per_line(19.0), 5);
        assert_eq!(CELL.chars_per_line(18.0), 4);
        assert_eq!(CELL.chars_per_line(1.0), 1);
        assert_eq!(CELL.line_width("ABCDE"), 19.0);
        assert_eq!(CELL.line_width(""), 0.0);
    }

    #[test]
    fn box_top_left_alignment_starts_at_origin() {
        let bounds = TextBox { x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
        let lines = layout_text_box(bounds, "hi", HAlign::Left, VAlign::Top, CELL, 5.0);
        assert_eq!(lines, vec![PlacedLine { text: "HI".into(), x: 10.0, y: 25.0 }]);
    }

    #[test]
    fn box_center_alignment_centers_block_and_lines() {
        let bounds = TextBox { x: 0.0, y: 0.0, width: 100.0, height: 50.0 };
        let lines = layout_text_box(bounds, "ab\nabcd", HAlign::Center, VAlign::Center, CELL, 5.0);
        // block height = 2 * 6 - 1 = 11, top = (50 - 11) / 2
        let top = 19.5;
        assert_eq!(lines[0].x, (100.0 - 7.0) / 2.0);
        assert_eq!(lines[0].y, top + 5.0);
        assert_eq!(lines[1].x, (100.0 - 15.0) / 2.0);
        assert_eq!(lines[1].y, top + 6.0 + 5.0);
    }

    #[test]
    fn box_bottom_right_alignment_hugs_far_edges() {
        let bounds = TextBox { x: 0.0, y: 0.0, width: 40.0, height: 30.0 };
        let lines = layout_text_box(bounds, "abc", HAlign::Right, VAlign::Bottom, CELL, 5.0);
        assert_eq!(lines[0].x, 40.0 - 11.0);
        assert_eq!(lines[0].y, 30.0 - 5.0 + 5.0);
    }

    #[test]
    fn unbounded_box_keeps_start_aligned_text_at_origin() {
        let bounds = TextBox {
            x: 7.0,
            y: 3.0,
            width: f64::INFINITY,
            height: f64::INFINITY,
        };
        let lines = layout_text_box(bounds, "hi", HAlign::Left, VAlign::Top, CELL, 5.0);
        assert_eq!(lines, vec![PlacedLine { text: "HI".into(), x: 7.0, y: 8.0 }]);
    }

    #[test]
    fn wrap_collapses_leading_and_inner_whitespace() {
        assert_eq!(wrap_text(" lead\tand   gap", 20), vec!["lead and gap"]);
    }

    #[test]
    fn alignment_converts_from_integers() {
        assert_eq!(HAlign::try_from(-1), Ok(HAlign::Left));
        assert_eq!(VAlign::try_from(1), Ok(VAlign::Bottom));
        assert_eq!(HAlign::try_from(2), Err(2));
        assert_eq!(VAlign::Center.factor(), 0.0);
    }
}
