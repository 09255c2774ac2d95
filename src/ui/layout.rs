//! Word-wrapped layout with column-to-offset hit-testing.
//!
//! Ratatui's `Paragraph` wrapping cannot be used here because it never
//! exposes where text wrapped, and the gesture surface needs to map a mouse
//! position back to a byte offset in the source text. Instead the text is
//! wrapped up front into explicit visual lines, and the same [`TextLayout`]
//! feeds both rendering and hit-testing, so the geometry used to resolve a
//! click always matches what is on screen.
//!
//! Wrapping rules: break at word boundaries, elide the single separator
//! space when a wrap lands on it, hard-break words wider than the line, and
//! treat `\n` as a hard break. Column arithmetic uses display widths, so a
//! double-width char occupies two columns.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Wrapped layout for one block of text at a fixed display width.
#[derive(Debug, Clone)]
pub struct TextLayout {
    lines: Vec<LayoutLine>,
}

#[derive(Debug, Clone)]
struct LayoutLine {
    /// Byte range of this line's rendered content in the source text.
    /// Elided separator spaces and newline chars fall between line ranges.
    range: Range<usize>,
    /// Byte offset of the char occupying each display column.
    cells: Vec<usize>,
}

impl TextLayout {
    /// Lay `text` out at `width` columns. A `width` of zero disables
    /// wrapping entirely; only hard newlines break lines then.
    pub fn new(text: &str, width: usize) -> Self {
        let chunks = scan_chunks(text);
        let mut builder = LineBuilder::new(width);

        for (i, chunk) in chunks.iter().enumerate() {
            match chunk {
                Chunk::Word { chars, total } => {
                    if builder.wrap && *total > builder.width {
                        builder.push_long_word(chars);
                    } else {
                        builder.push_word(chars, *total);
                    }
                }
                Chunk::Spaces { chars, total } => {
                    let next_word = chunks.get(i + 1).and_then(|next| match next {
                        Chunk::Word { total, .. } => Some(*total),
                        _ => None,
                    });
                    builder.push_spaces(chars, *total, next_word);
                }
                Chunk::Newline { offset } => builder.hard_break(*offset),
            }
        }

        builder.finish()
    }

    /// Total number of visual lines. Always at least one, even for empty
    /// text.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The byte range of a visual line's content within the source text.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        self.lines.get(line).map(|l| l.range.clone())
    }

    /// Iterate over the content ranges of every visual line in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.lines.iter().map(|l| l.range.clone())
    }

    /// Resolve a display position to the byte offset of the char occupying
    /// it. `None` past the end of a line or below the text; both resolve to
    /// no action downstream.
    pub fn offset_at(&self, line: usize, col: usize) -> Option<usize> {
        self.lines.get(line)?.cells.get(col).copied()
    }

    /// Display width of a visual line.
    pub fn line_width(&self, line: usize) -> Option<usize> {
        self.lines.get(line).map(|l| l.cells.len())
    }
}

struct CharInfo {
    offset: usize,
    ch: char,
    width: usize,
}

enum Chunk {
    Word { chars: Vec<CharInfo>, total: usize },
    Spaces { chars: Vec<CharInfo>, total: usize },
    Newline { offset: usize },
}

fn scan_chunks(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((offset, ch)) = iter.next() {
        if ch == '\n' {
            chunks.push(Chunk::Newline { offset });
            continue;
        }

        let info = CharInfo {
            offset,
            ch,
            width: UnicodeWidthChar::width(ch).unwrap_or(0),
        };
        let gather_spaces = ch.is_whitespace();
        let mut chars = vec![info];

        while let Some(&(_, next)) = iter.peek() {
            if next == '\n' || next.is_whitespace() != gather_spaces {
                break;
            }
            let (next_offset, next_ch) = iter.next().expect("peeked char");
            chars.push(CharInfo {
                offset: next_offset,
                ch: next_ch,
                width: UnicodeWidthChar::width(next_ch).unwrap_or(0),
            });
        }

        let total = chars.iter().map(|c| c.width).sum();
        if gather_spaces {
            chunks.push(Chunk::Spaces { chars, total });
        } else {
            chunks.push(Chunk::Word { chars, total });
        }
    }

    chunks
}

struct LineBuilder {
    width: usize,
    wrap: bool,
    lines: Vec<LayoutLine>,
    anchor: usize,
    end: usize,
    started: bool,
    cells: Vec<usize>,
    col: usize,
}

impl LineBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            wrap: width > 0,
            lines: Vec::new(),
            anchor: 0,
            end: 0,
            started: false,
            cells: Vec::new(),
            col: 0,
        }
    }

    fn push_char(&mut self, c: &CharInfo) {
        if !self.started {
            self.started = true;
            self.anchor = c.offset;
            self.end = c.offset;
        }
        for _ in 0..c.width {
            self.cells.push(c.offset);
        }
        self.col += c.width;
        self.end = c.offset + c.ch.len_utf8();
    }

    fn push_word(&mut self, chars: &[CharInfo], total: usize) {
        if self.wrap && total > 0 && self.col > 0 && self.col + total > self.width {
            if let Some(first) = chars.first() {
                self.flush(first.offset);
            }
        }
        for c in chars {
            self.push_char(c);
        }
    }

    fn push_long_word(&mut self, chars: &[CharInfo]) {
        for c in chars {
            if c.width > 0 && self.col > 0 && self.col + c.width > self.width {
                self.flush(c.offset);
            }
            self.push_char(c);
        }
    }

    fn push_spaces(&mut self, chars: &[CharInfo], total: usize, next_word: Option<usize>) {
        if self.wrap && chars.len() == 1 && chars[0].ch == ' ' {
            if let Some(next) = next_word {
                if next > 0 && self.col > 0 && self.col + total + next > self.width {
                    // The wrap lands on the separator itself: drop the space
                    // and start the next line at the following char.
                    self.flush(chars[0].offset + 1);
                    return;
                }
            }
        }

        for c in chars {
            if self.wrap && c.width > 0 && self.col + c.width > self.width {
                self.flush(c.offset);
            }
            self.push_char(c);
        }
    }

    fn hard_break(&mut self, offset: usize) {
        self.flush(offset + 1);
    }

    fn flush(&mut self, next_anchor: usize) {
        let range = if self.started {
            self.anchor..self.end
        } else {
            self.anchor..self.anchor
        };
        self.lines.push(LayoutLine {
            range,
            cells: std::mem::take(&mut self.cells),
        });
        self.col = 0;
        self.started = false;
        self.anchor = next_anchor;
        self.end = next_anchor;
    }

    fn finish(mut self) -> TextLayout {
        let next = self.end;
        self.flush(next);
        TextLayout { lines: self.lines }
    }
}
