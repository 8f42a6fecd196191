use regex::{Captures, Regex};

use crate::model::config::Grammar;
use crate::model::task::checkbox_char;

/// Rewrite `source` so that the task identified by (section label, exact
/// text) has the given done-state, flipping only the single state character
/// inside its checkbox. Every other byte of the document is preserved.
///
/// The target line is re-located from scratch on every call: a pattern
/// anchors on the section's header token, skips any amount of intervening
/// text (the skip is not stopped by other section headers), then matches the
/// first checkbox whose closer is followed by `text`. Label and text are
/// escaped, so both are matched literally. Because the text is not anchored
/// at end of line, a task whose text is a prefix of an earlier line's text
/// can match that line instead; and when the same (label, text) pair occurs
/// more than once in the document, which occurrences change is undefined.
///
/// If nothing matches (the label or text is gone, or the text cannot occur
/// on one line) the input is returned unchanged. Applying the same toggle
/// twice yields the same output as applying it once.
pub fn toggle_task(
    source: &str,
    label: &str,
    text: &str,
    done: bool,
    grammar: Grammar,
) -> String {
    let Ok(re) = Regex::new(&toggle_pattern(label, text, grammar)) else {
        return source.to_string();
    };

    re.replace_all(source, |caps: &Captures| {
        format!("{}{}{}", &caps[1], checkbox_char(done), &caps[3])
    })
    .into_owned()
}

/// Build the toggle pattern for a (label, text) pair. Group 1 is everything
/// from the header token through the checkbox opener, group 2 the current
/// state character, group 3 the closer plus the task text.
fn toggle_pattern(label: &str, text: &str, grammar: Grammar) -> String {
    let header = match grammar {
        Grammar::Date => format!(r"\[{}\]", regex::escape(label)),
        Grammar::Label => format!(r"^[ \t]*\[{}\][ \t]*$", regex::escape(label)),
    };
    format!(
        r"(?m)({}[\s\S]*?^\s*- \[)([ x])(\] {})",
        header,
        regex::escape(text),
    )
}
