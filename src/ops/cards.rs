use chrono::{Datelike, Duration, NaiveDate};

use crate::model::board::Board;
use crate::model::task::Task;

/// Header accent colors, cycled by card position. Renderers map a `Card`'s
/// accent index into this palette (the TUI converts to RGB, the HTML export
/// uses the hex values directly).
pub const ACCENT_PALETTE: [&str; 7] = [
    "#FFE4B5", "#FFD4B5", "#FFE5CC", "#FFF4E0", "#FFEFD5", "#FFE4C4", "#FFDAB9",
];

/// One card of the rendered board. Pure view data; holds no reference back
/// to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The section label, exactly as it appears in the document. This is
    /// what a toggle must pass back to the patch engine.
    pub label: String,
    /// Display header: short weekday + month/day for date labels, the label
    /// verbatim otherwise.
    pub title: String,
    /// Index into [`ACCENT_PALETTE`], chosen by card position.
    pub accent: usize,
    pub done: usize,
    pub total: usize,
    pub tasks: Vec<Task>,
}

impl Card {
    /// Progress badge, e.g. `1/2`.
    pub fn badge(&self) -> String {
        format!("{}/{}", self.done, self.total)
    }
}

/// How to sequence cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// Exactly `days` consecutive calendar days starting at `start`; days
    /// with no section in the board render as empty cards. Non-date labels
    /// are not shown in this mode.
    Window { start: NaiveDate, days: usize },
    /// One card per section present in the board, in first-seen order.
    AllSections,
}

/// Project a board into an ordered card list. Stateless: the same board and
/// sequence always produce the same cards.
pub fn cards(board: &Board, sequence: &Sequence) -> Vec<Card> {
    match sequence {
        Sequence::Window { start, days } => (0..*days)
            .map(|i| {
                let date = *start + Duration::days(i as i64);
                let label = date.format("%Y-%m-%d").to_string();
                let tasks = board.tasks(&label).map(|t| t.to_vec()).unwrap_or_default();
                make_card(label, tasks, i)
            })
            .collect(),
        Sequence::AllSections => board
            .sections()
            .enumerate()
            .map(|(i, (label, tasks))| make_card(label.to_string(), tasks.to_vec(), i))
            .collect(),
    }
}

/// First day of the card window: start of the week containing `today`
/// (weeks start on Sunday), shifted by `week_start` days.
pub fn window_start(today: NaiveDate, week_start: i64) -> NaiveDate {
    let into_week = today.weekday().num_days_from_sunday() as i64;
    today - Duration::days(into_week) + Duration::days(week_start)
}

fn make_card(label: String, tasks: Vec<Task>, index: usize) -> Card {
    let done = tasks.iter().filter(|t| t.done).count();
    let total = tasks.len();
    let title = card_title(&label);
    Card {
        label,
        title,
        accent: index % ACCENT_PALETTE.len(),
        done,
        total,
        tasks,
    }
}

/// Date labels display as e.g. `Mon 01/01`; anything else displays verbatim.
pub fn card_title(label: &str) -> String {
    match NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        Ok(date) => date.format("%a %m/%d").to_string(),
        Err(_) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Grammar;
    use crate::parse::board_parser::BoardParser;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_badge_counts() {
        let board = BoardParser::new(Grammar::Date)
            .parse("[2024-01-01]\n- [ ] buy milk\n- [x] pay rent\n");
        let cards = cards(
            &board,
            &Sequence::Window {
                start: date("2024-01-01"),
                days: 1,
            },
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].badge(), "1/2");
    }

    #[test]
    fn test_window_fills_missing_days_with_empty_cards() {
        let board = BoardParser::new(Grammar::Date).parse("[2024-01-02]\n- [ ] middle day\n");
        let cards = cards(
            &board,
            &Sequence::Window {
                start: date("2024-01-01"),
                days: 3,
            },
        );

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].badge(), "0/0");
        assert!(cards[0].tasks.is_empty());
        assert_eq!(cards[1].badge(), "0/1");
        assert_eq!(cards[2].badge(), "0/0");
    }

    #[test]
    fn test_window_ignores_non_date_sections() {
        let board = BoardParser::new(Grammar::Label)
            .parse("[Backlog]\n- [ ] hidden in week mode\n[2024-01-01]\n- [ ] shown\n");
        let cards = cards(
            &board,
            &Sequence::Window {
                start: date("2024-01-01"),
                days: 2,
            },
        );
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].total, 1);
        assert_eq!(cards[1].total, 0);
    }

    #[test]
    fn test_all_sections_in_first_seen_order_without_synthetic_cards() {
        let board = BoardParser::new(Grammar::Label)
            .parse("[Backlog]\n- [ ] write tests\n[Done]\n- [x] ship release\n");
        let cards = cards(&board, &Sequence::AllSections);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].label, "Backlog");
        assert_eq!(cards[0].title, "Backlog");
        assert_eq!(cards[1].label, "Done");
        assert_eq!(cards[1].badge(), "1/1");
    }

    #[test]
    fn test_counts_invariant() {
        let board = BoardParser::new(Grammar::Label)
            .parse("[A]\n- [x] one\n- [ ] two\n[B]\n- [x] three\n");
        for card in cards(&board, &Sequence::AllSections) {
            assert!(card.done <= card.total);
            assert_eq!(card.total, card.tasks.len());
        }
    }

    #[test]
    fn test_accent_cycles_through_palette() {
        let mut source = String::new();
        for i in 0..9 {
            source.push_str(&format!("[Section {}]\n- [ ] task\n", i));
        }
        let board = BoardParser::new(Grammar::Label).parse(&source);
        let cards = cards(&board, &Sequence::AllSections);

        assert_eq!(cards[0].accent, 0);
        assert_eq!(cards[6].accent, 6);
        assert_eq!(cards[7].accent, 0);
        assert_eq!(cards[8].accent, 1);
    }

    #[test]
    fn test_card_title_formats_dates() {
        // 2024-01-01 was a Monday.
        assert_eq!(card_title("2024-01-01"), "Mon 01/01");
        assert_eq!(card_title("Backlog"), "Backlog");
        // Shape-valid but impossible dates fall back to verbatim.
        assert_eq!(card_title("2024-13-99"), "2024-13-99");
    }

    #[test]
    fn test_window_start_sunday_weeks() {
        // 2024-01-03 was a Wednesday; the containing week starts Sunday
        // 2023-12-31.
        assert_eq!(window_start(date("2024-01-03"), 0), date("2023-12-31"));
        assert_eq!(window_start(date("2024-01-03"), 1), date("2024-01-01"));
        // A Sunday is its own week start.
        assert_eq!(window_start(date("2023-12-31"), 0), date("2023-12-31"));
    }
}
