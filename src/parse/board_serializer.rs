use crate::model::board::Board;
use crate::model::task::checkbox_char;

/// Serialize a board to canonical document text: a `[label]` header line per
/// section followed by its task lines, sections separated by a blank line.
///
/// The output parses back to an equal board under the standalone-label
/// grammar, and under the date grammar too when every label is a date.
pub fn serialize_board(board: &Board) -> String {
    let mut out = String::new();

    for (i, (label, tasks)) in board.sections().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(label);
        out.push_str("]\n");
        for task in tasks {
            out.push_str("- [");
            out.push(checkbox_char(task.done));
            out.push_str("] ");
            out.push_str(&task.text);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::board::Board;
    use crate::model::config::Grammar;
    use crate::model::task::Task;
    use crate::parse::board_parser::BoardParser;

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.push_task("2024-01-01", Task::new("buy milk", false));
        board.push_task("2024-01-01", Task::new("pay rent", true));
        board.push_task("2024-01-02", Task::new("call mom", false));
        board
    }

    #[test]
    fn test_serialize_shape() {
        let text = serialize_board(&sample_board());
        assert_eq!(
            text,
            "[2024-01-01]\n- [ ] buy milk\n- [x] pay rent\n\n[2024-01-02]\n- [ ] call mom\n"
        );
    }

    #[test]
    fn test_round_trips_under_both_grammars() {
        let board = sample_board();
        let text = serialize_board(&board);
        assert_eq!(BoardParser::new(Grammar::Date).parse(&text), board);
        assert_eq!(BoardParser::new(Grammar::Label).parse(&text), board);
    }

    #[test]
    fn test_empty_board_serializes_empty() {
        assert_eq!(serialize_board(&Board::new()), "");
    }
}
