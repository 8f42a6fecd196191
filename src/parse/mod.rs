pub mod board_parser;
pub mod board_serializer;

pub use board_parser::{BoardParser, parse_task_line};
pub use board_serializer::serialize_board;
