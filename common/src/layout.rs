//! Text placement for fixed-width fonts.
//!
//! Layout decides where each unit of text goes and hands it to a draw
//! primitive; it never touches pixels itself. Units are whole words in
//! [`WrapMode::Word`], single characters in [`WrapMode::Char`] and the entire
//! string in [`WrapMode::Off`]. Positions are top-left corners of the unit's
//! first glyph cell.
//!
//! Everything here is integer arithmetic over glyph cells:
//!
//! ```text
//! cursor.x += unit_chars * glyph_width
//! on wrap:  cursor.x = origin.x, cursor.y += glyph_height
//! ```

use embedded_graphics::geometry::{Point, Size};

use crate::fonts::FontMetrics;

/// How text that reaches the right edge is handled.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WrapMode {
    /// Draw the string in one call; the driver clips whatever overflows.
    #[default]
    Off,
    /// Break between words. Words wider than a whole line are split.
    Word,
    /// Break between characters.
    Char,
}

impl From<bool> for WrapMode {
    fn from(wrap: bool) -> Self { if wrap { Self::Word } else { Self::Off } }
}

/// Outcome of laying out one string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutSummary {
    /// Lines holding at least one unit, counted from the first line.
    pub lines: u32,
    /// Cursor position after the last unit.
    pub end: Point,
}

/// Pixel width of `text`: glyph count of its widest line times glyph advance.
pub fn text_width<F>(
    text: &str,
    font: &F,
) -> u32
where
    F: FontMetrics + ?Sized,
{
    let widest = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
    widest as u32 * font.glyph_width()
}

/// Top-left position that centers one line of `text` on a screen of `screen`
/// size. Explicit coordinates override the computed ones; negative results
/// clamp to zero so the first glyph stays on screen. Text wider than the
/// screen is deliberately pinned to the left edge rather than shifted to
/// `len / 2` pixels, so wrapped lines all start at the same column.
pub fn center_origin<F>(
    text: &str,
    font: &F,
    screen: Size,
    xpos: Option<i32>,
    ypos: Option<i32>,
) -> Point
where
    F: FontMetrics + ?Sized,
{
    let x = xpos.unwrap_or_else(|| (screen.width / 2) as i32 - (text_width(text, font) / 2) as i32);
    let y = ypos.unwrap_or_else(|| (screen.height / 2) as i32 - (font.glyph_height() / 2) as i32);
    Point::new(x.max(0), y.max(0))
}

/// Lay out `text` starting at `origin`, wrapping at `right_edge` (exclusive
/// pixel column, normally the screen width), and pass every unit to `place`.
///
/// Errors from `place` abort layout and are returned unchanged.
pub fn layout_text<F, E, P>(
    text: &str,
    font: &F,
    origin: Point,
    right_edge: i32,
    wrap: WrapMode,
    mut place: P,
) -> Result<LayoutSummary, E>
where
    F: FontMetrics + ?Sized,
    P: FnMut(&str, Point) -> Result<(), E>,
{
    let mut cursor = Cursor::new(origin, font, right_edge);

    match wrap {
        WrapMode::Off => {
            if !text.is_empty() {
                place(text, origin)?;
                let line_breaks = text.matches('\n').count() as u32;
                cursor.lines = line_breaks + 1;
                cursor.position.x += text_width(text, font) as i32;
                cursor.position.y += line_breaks as i32 * cursor.line_height;
            }
        }
        WrapMode::Word => layout_words(text, &mut cursor, &mut place)?,
        WrapMode::Char => layout_chars(text, &mut cursor, &mut place)?,
    }

    Ok(cursor.summary())
}

fn layout_words<E, P>(
    text: &str,
    cursor: &mut Cursor,
    place: &mut P,
) -> Result<(), E>
where
    P: FnMut(&str, Point) -> Result<(), E>,
{
    for (line_idx, line) in text.split('\n').enumerate() {
        if line_idx > 0 {
            cursor.new_line();
        }

        for (word_idx, word) in line.split_whitespace().enumerate() {
            if word_idx > 0 {
                // Separator paints background between words on the same line
                if cursor.fits(1) {
                    cursor.place(" ", 1, place)?;
                } else {
                    cursor.position.x += cursor.advance;
                }
            }

            let glyphs = word.chars().count() as i32;
            if !cursor.at_line_start() && !cursor.fits(glyphs) {
                cursor.new_line();
            }

            if cursor.fits(glyphs) {
                cursor.place(word, glyphs, place)?;
            } else {
                place_broken_word(word, cursor, place)?;
            }
        }
    }
    Ok(())
}

/// Split a word wider than a full line into line-sized slices.
fn place_broken_word<E, P>(
    word: &str,
    cursor: &mut Cursor,
    place: &mut P,
) -> Result<(), E>
where
    P: FnMut(&str, Point) -> Result<(), E>,
{
    let per_line = cursor.glyphs_per_line();
    let mut rest = word;

    while !rest.is_empty() {
        let split = rest.char_indices().nth(per_line).map_or(rest.len(), |(idx, _)| idx);
        let (slice, tail) = rest.split_at(split);
        cursor.place(slice, slice.chars().count() as i32, place)?;
        rest = tail;
        if !rest.is_empty() {
            cursor.new_line();
        }
    }
    Ok(())
}

fn layout_chars<E, P>(
    text: &str,
    cursor: &mut Cursor,
    place: &mut P,
) -> Result<(), E>
where
    P: FnMut(&str, Point) -> Result<(), E>,
{
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            cursor.new_line();
            continue;
        }

        if !cursor.at_line_start() && !cursor.fits(1) {
            cursor.new_line();
        }

        // Whitespace never opens a line; inside a line it is one blank cell
        if ch.is_whitespace() {
            if !cursor.at_line_start() {
                cursor.place(" ", 1, place)?;
            }
            continue;
        }

        cursor.place(&text[idx..idx + ch.len_utf8()], 1, place)?;
    }
    Ok(())
}

/// Layout cursor in pixel coordinates.
struct Cursor {
    origin: Point,
    position: Point,
    advance: i32,
    line_height: i32,
    right_edge: i32,
    /// Zero-based index of the line the cursor is on.
    line: u32,
    /// Lines that have received a unit so far.
    lines: u32,
}

impl Cursor {
    fn new<F>(
        origin: Point,
        font: &F,
        right_edge: i32,
    ) -> Self
    where
        F: FontMetrics + ?Sized,
    {
        Self {
            origin,
            position: origin,
            advance: font.glyph_width() as i32,
            line_height: font.glyph_height() as i32,
            right_edge,
            line: 0,
            lines: 0,
        }
    }

    #[inline]
    fn at_line_start(&self) -> bool { self.position.x == self.origin.x }

    /// Whether `glyphs` more glyphs fit before the right edge.
    #[inline]
    fn fits(
        &self,
        glyphs: i32,
    ) -> bool {
        self.position.x + glyphs * self.advance <= self.right_edge
    }

    /// Glyphs that fit on a line starting at the origin; at least one.
    fn glyphs_per_line(&self) -> usize {
        if self.advance <= 0 {
            return usize::MAX;
        }
        ((self.right_edge - self.origin.x) / self.advance).max(1) as usize
    }

    fn new_line(&mut self) {
        self.position = Point::new(self.origin.x, self.position.y + self.line_height);
        self.line += 1;
    }

    fn place<E, P>(
        &mut self,
        unit: &str,
        glyphs: i32,
        place: &mut P,
    ) -> Result<(), E>
    where
        P: FnMut(&str, Point) -> Result<(), E>,
    {
        place(unit, self.position)?;
        self.lines = self.line + 1;
        self.position.x += glyphs * self.advance;
        Ok(())
    }

    fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            lines: self.lines,
            end: self.position,
        }
    }
}
