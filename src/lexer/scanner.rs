use super::Line;

/// Forward-only cursor over logical lines.
///
/// The current line can be partially consumed; whatever is left of it stays
/// visible to the next reader, which is how text after a `{` or `}` is handed
/// back to the surrounding context.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(lines: Vec<Line<'a>>) -> Self {
        let rest = lines.first().map_or("", |l| l.text);
        Cursor { lines, pos: 0, rest }
    }

    /// Unconsumed text of the current line, `None` once input is exhausted.
    pub(crate) fn peek(&self) -> Option<&'a str> {
        (self.pos < self.lines.len()).then_some(self.rest)
    }

    /// Move to the next logical line.
    pub(crate) fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
        self.rest = self.lines.get(self.pos).map_or("", |l| l.text);
    }

    /// Drop `len` bytes from the front of the current line.
    pub(crate) fn consume(&mut self, len: usize) {
        self.rest = self.rest.get(len..).unwrap_or("").trim_start();
    }

    /// Source line number of the current line (the last one once exhausted).
    pub(crate) fn line_number(&self) -> usize {
        self.lines
            .get(self.pos)
            .or_else(|| self.lines.last())
            .map_or(0, |l| l.number)
    }
}
