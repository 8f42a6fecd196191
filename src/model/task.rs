use serde::{Deserialize, Serialize};

/// One checkbox line: the text after the marker and its completion state.
///
/// `text` is the only durable identifier a task has; there are no line
/// numbers or stable IDs. Together with its section label it is what the
/// patch engine uses to find the line again in the raw document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Task {
            text: text.into(),
            done,
        }
    }
}

/// The character inside the checkbox brackets for a done-state.
pub fn checkbox_char(done: bool) -> char {
    if done { 'x' } else { ' ' }
}

/// Parse a checkbox state character. Only space and lowercase `x` are
/// recognized; anything else is not a task line.
pub fn state_from_char(c: char) -> Option<bool> {
    match c {
        ' ' => Some(false),
        'x' => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_char_round_trip() {
        assert_eq!(state_from_char(checkbox_char(true)), Some(true));
        assert_eq!(state_from_char(checkbox_char(false)), Some(false));
    }

    #[test]
    fn test_state_from_char_rejects_other_markers() {
        assert_eq!(state_from_char('X'), None);
        assert_eq!(state_from_char('-'), None);
        assert_eq!(state_from_char('~'), None);
    }
}
