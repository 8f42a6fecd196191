use serde::Serialize;

use crate::model::task::Task;
use crate::ops::cards::Card;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub text: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct CardJson {
    pub label: String,
    pub title: String,
    pub done: usize,
    pub total: usize,
    pub badge: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub file: String,
    pub cards: Vec<CardJson>,
}

#[derive(Serialize)]
pub struct SectionJson {
    pub label: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct SectionListJson {
    pub file: String,
    pub sections: Vec<SectionJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        text: task.text.clone(),
        done: task.done,
    }
}

pub fn card_to_json(card: &Card) -> CardJson {
    CardJson {
        label: card.label.clone(),
        title: card.title.clone(),
        done: card.done,
        total: card.total,
        badge: card.badge(),
        tasks: card.tasks.iter().map(task_to_json).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_skips_empty_tasks() {
        let card = Card {
            label: "2024-01-02".to_string(),
            title: "Tue 01/02".to_string(),
            accent: 1,
            done: 0,
            total: 0,
            tasks: Vec::new(),
        };
        let json = serde_json::to_string(&card_to_json(&card)).unwrap();
        assert!(json.contains("\"badge\":\"0/0\""));
        assert!(!json.contains("\"tasks\""));
    }

    #[test]
    fn test_card_json_shape() {
        let card = Card {
            label: "Backlog".to_string(),
            title: "Backlog".to_string(),
            accent: 0,
            done: 1,
            total: 2,
            tasks: vec![Task::new("a", true), Task::new("b", false)],
        };
        let json = serde_json::to_value(card_to_json(&card)).unwrap();
        assert_eq!(json["label"], "Backlog");
        assert_eq!(json["badge"], "1/2");
        assert_eq!(json["tasks"][0]["done"], true);
    }
}
