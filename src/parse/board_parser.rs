use crate::model::board::Board;
use crate::model::config::Grammar;
use crate::model::task::{Task, state_from_char};

/// Recognizes section headers and checkbox lines in a board document.
///
/// Parsing is total: lines that match neither pattern are dropped without
/// error, as are task lines that appear before any section header.
pub struct BoardParser {
    grammar: Grammar,
}

impl BoardParser {
    pub fn new(grammar: Grammar) -> Self {
        BoardParser { grammar }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Parse a document into a board. A single left-to-right pass; the only
    /// state carried between lines is the current section label.
    pub fn parse(&self, source: &str) -> Board {
        let mut board = Board::new();
        let mut current: Option<String> = None;

        for line in source.lines() {
            // A header line sets the section and contributes nothing else,
            // even if it would also match the task pattern.
            if let Some(label) = self.header_label(line) {
                current = Some(label.to_string());
                continue;
            }

            if let Some(label) = current.as_deref()
                && let Some((done, text)) = parse_task_line(line)
            {
                board.push_task(label, Task::new(text, done));
            }
        }

        board
    }

    fn header_label<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.grammar {
            Grammar::Date => find_date_label(line),
            Grammar::Label => bracket_label(line),
        }
    }
}

/// Parse a checkbox line: optional leading whitespace, `- [`, a state
/// character, `] `, then at least one character of text taken verbatim to
/// the end of the line. No trimming beyond the single separator space.
pub fn parse_task_line(line: &str) -> Option<(bool, &str)> {
    let content = line.trim_start();
    let rest = content.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let done = state_from_char(chars.next()?)?;
    let text = chars.as_str().strip_prefix("] ")?;
    if text.is_empty() {
        return None;
    }
    Some((done, text))
}

/// Find a `[YYYY-MM-DD]` token anywhere in the line; returns the date text.
fn find_date_label(line: &str) -> Option<&str> {
    for (open, _) in line.match_indices('[') {
        let rest = &line[open + 1..];
        if rest.as_bytes().get(10) == Some(&b']')
            && let Some(candidate) = rest.get(..10)
            && is_date_token(candidate)
        {
            return Some(candidate);
        }
    }
    None
}

/// `dddd-dd-dd` shape check. Calendar validity is not the parser's business;
/// the token is the label either way.
fn is_date_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// A standalone header: the entire trimmed line is `[<label>]`, label taken
/// verbatim. Empty brackets are not a header.
fn bracket_label(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() { None } else { Some(inner) }
}
