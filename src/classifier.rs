//! Line classification by comment family.
//!
//! Every family is handled by the same byte scanner; a family only decides
//! which tokens open a line comment or a block comment and whether quoted
//! strings are recognised. A logical line ends at `\n`, `\r` or `\r\n`.

use std::fmt;
use std::ops::AddAssign;

const C_LINE: &[u8] = b"//";
const C_BLOCK_OPEN: &[u8] = b"/*";
const C_BLOCK_CLOSE: &[u8] = b"*/";
const XML_BLOCK_OPEN: &[u8] = b"<!--";
const XML_BLOCK_CLOSE: &[u8] = b"-->";

/// Comment syntax shared by a group of languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `//` line comments, `/* */` blocks, quoted strings.
    CStyle,
    /// `#` line comments, quoted strings.
    Hash,
    /// `--` line comments, quoted strings.
    DoubleDash,
    /// `;` line comments, quoted strings.
    Semicolon,
    /// `%` line comments, quoted strings.
    Percent,
    /// `<!-- -->` blocks only.
    Xml,
    /// Blank or code, nothing else.
    NoComments,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::CStyle => "c-style",
            Family::Hash => "hash",
            Family::DoubleDash => "double-dash",
            Family::Semicolon => "semicolon",
            Family::Percent => "percent",
            Family::Xml => "xml",
            Family::NoComments => "none",
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Family::CStyle => Syntax {
                line: Some(C_LINE),
                block: Some((C_BLOCK_OPEN, C_BLOCK_CLOSE)),
                strings: true,
            },
            Family::Hash => Syntax::line_only(b"#"),
            Family::DoubleDash => Syntax::line_only(b"--"),
            Family::Semicolon => Syntax::line_only(b";"),
            Family::Percent => Syntax::line_only(b"%"),
            Family::Xml => Syntax {
                line: None,
                block: Some((XML_BLOCK_OPEN, XML_BLOCK_CLOSE)),
                strings: false,
            },
            Family::NoComments => Syntax {
                line: None,
                block: None,
                strings: false,
            },
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct Syntax {
    line: Option<&'static [u8]>,
    block: Option<(&'static [u8], &'static [u8])>,
    strings: bool,
}

impl Syntax {
    fn line_only(prefix: &'static [u8]) -> Self {
        Syntax {
            line: Some(prefix),
            block: None,
            strings: true,
        }
    }
}

/// Line counts for one buffer. Code lines are derived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub total: u64,
    pub blank: u64,
    pub comment: u64,
}

impl LineCounts {
    pub fn code(&self) -> u64 {
        self.total.saturating_sub(self.blank + self.comment)
    }

    fn finish_line(&mut self, line: &LineState, in_block: bool) {
        self.total += 1;
        if line.code {
            return;
        }
        if line.comment || in_block {
            self.comment += 1;
        } else if !line.non_blank {
            self.blank += 1;
        }
        // Non-blank bytes that were neither code nor comment fall through as code.
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.blank += other.blank;
        self.comment += other.comment;
    }
}

#[derive(Default)]
struct LineState {
    code: bool,
    comment: bool,
    non_blank: bool,
}

fn is_blank_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn skip_to_line_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
        pos += 1;
    }
    pos
}

/// Count total, blank and comment lines in `bytes` under `family`.
///
/// A line with any code is a code line even if it also holds a comment.
/// Lines inside an open block comment are comment lines, blank or not.
/// A trailing line without a terminator is counted only if it holds a
/// non-whitespace byte or sits inside an open block comment.
pub fn classify(bytes: &[u8], family: Family) -> LineCounts {
    let syntax = family.syntax();
    let mut counts = LineCounts::default();
    let mut line = LineState::default();
    let mut in_block = false;
    let mut quote: Option<u8> = None;
    let mut after_cr = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];

        if b == b'\n' || b == b'\r' {
            if b == b'\n' && after_cr {
                // Second half of a CRLF pair.
                after_cr = false;
                pos += 1;
                continue;
            }
            counts.finish_line(&line, in_block);
            line = LineState::default();
            // Strings never continue onto the next line.
            quote = None;
            after_cr = b == b'\r';
            pos += 1;
            continue;
        }
        after_cr = false;

        if !is_blank_byte(b) {
            line.non_blank = true;
        }

        if let Some(open_quote) = quote {
            line.code = true;
            pos += 1;
            if b == b'\\' {
                if let Some(&next) = bytes.get(pos) {
                    if next != b'\n' && next != b'\r' {
                        pos += 1;
                    }
                }
            } else if b == open_quote {
                quote = None;
            }
            continue;
        }

        if in_block {
            line.comment = true;
            if let Some((_, close)) = syntax.block {
                if bytes[pos..].starts_with(close) {
                    in_block = false;
                    pos += close.len();
                    continue;
                }
            }
            pos += 1;
            continue;
        }

        if is_blank_byte(b) {
            pos += 1;
            continue;
        }

        if let Some((open, _)) = syntax.block {
            if bytes[pos..].starts_with(open) {
                in_block = true;
                line.comment = true;
                pos += open.len();
                continue;
            }
        }

        if let Some(prefix) = syntax.line {
            if bytes[pos..].starts_with(prefix) {
                line.comment = true;
                pos = skip_to_line_end(bytes, pos + prefix.len());
                continue;
            }
        }

        if syntax.strings && (b == b'"' || b == b'\'') {
            quote = Some(b);
        }
        line.code = true;
        pos += 1;
    }

    if line.non_blank || line.comment || line.code {
        counts.finish_line(&line, in_block);
    }
    counts
}
