use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::document::Document;
use crate::io::watcher::BoardWatcher;
use crate::model::board::Board;
use crate::model::config::{BoardConfig, SequenceMode};
use crate::model::task::Task;
use crate::ops::cards::{self, Card, Sequence};
use crate::ops::patch;
use crate::parse::BoardParser;

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub document: Document,
    pub config: BoardConfig,
    pub theme: Theme,
    /// Rebuilt from the document text on every reload; never edited in place.
    pub board: Board,
    pub cards: Vec<Card>,
    /// Current sequencing mode. Starts from config, switchable at runtime.
    pub sequence: SequenceMode,
    /// Cursor: which card is selected
    pub cursor_card: usize,
    /// Cursor: which task within the selected card
    pub cursor_task: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// One-line message for the status row
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(document: Document, config: BoardConfig) -> Self {
        let sequence = config.sequence;
        let mut app = App {
            document,
            config,
            theme: Theme::default(),
            board: Board::new(),
            cards: Vec::new(),
            sequence,
            cursor_card: 0,
            cursor_task: 0,
            show_help: false,
            status: None,
            should_quit: false,
        };
        app.reload();
        app
    }

    fn active_sequence(&self) -> Sequence {
        match self.sequence {
            SequenceMode::All => Sequence::AllSections,
            SequenceMode::Week => {
                let today = chrono::Local::now().date_naive();
                Sequence::Window {
                    start: cards::window_start(today, self.config.week_start),
                    days: self.config.days,
                }
            }
        }
    }

    /// Re-read the document and rebuild the board and cards from scratch.
    pub fn reload(&mut self) {
        match self.document.read() {
            Ok(source) => {
                self.board = BoardParser::new(self.config.grammar).parse(&source);
            }
            Err(e) => {
                self.board = Board::new();
                self.status = Some(e.to_string());
            }
        }
        self.rebuild_cards();
    }

    pub fn rebuild_cards(&mut self) {
        self.cards = cards::cards(&self.board, &self.active_sequence());
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.cards.is_empty() {
            self.cursor_card = 0;
            self.cursor_task = 0;
            return;
        }
        self.cursor_card = self.cursor_card.min(self.cards.len() - 1);
        let tasks = self.cards[self.cursor_card].tasks.len();
        self.cursor_task = if tasks == 0 {
            0
        } else {
            self.cursor_task.min(tasks - 1)
        };
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor_card)
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_card()?.tasks.get(self.cursor_task)
    }

    /// Flip the task under the cursor by patching the document text and
    /// re-reading it. The in-memory board is never mutated directly: the
    /// text on disk is the only state that changes, and the reload derives
    /// everything else from it.
    pub fn toggle_current(&mut self) {
        let Some(task) = self.current_task() else {
            return;
        };
        let label = self.cards[self.cursor_card].label.clone();
        let text = task.text.clone();
        let new_done = !task.done;

        let source = match self.document.read() {
            Ok(s) => s,
            Err(e) => {
                self.status = Some(e.to_string());
                return;
            }
        };

        let patched = patch::toggle_task(&source, &label, &text, new_done, self.config.grammar);
        if patched == source {
            // The line is gone or already flipped (the file may have
            // changed underneath us); resync with what is on disk.
            self.status = Some(format!("could not toggle \"{}\" under [{}]", text, label));
            self.reload();
            return;
        }

        if let Err(e) = self.document.write(&patched) {
            self.status = Some(e.to_string());
            return;
        }
        self.status = None;
        self.reload();
    }

    pub fn set_sequence(&mut self, mode: SequenceMode) {
        if self.sequence != mode {
            self.sequence = mode;
            self.cursor_card = 0;
            self.cursor_task = 0;
            self.rebuild_cards();
        }
    }

    pub fn cycle_sequence(&mut self) {
        let next = match self.sequence {
            SequenceMode::Week => SequenceMode::All,
            SequenceMode::All => SequenceMode::Week,
        };
        self.set_sequence(next);
    }

    pub fn move_card(&mut self, delta: isize) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() as isize - 1;
        let next = (self.cursor_card as isize + delta).clamp(0, last);
        if next as usize != self.cursor_card {
            self.cursor_card = next as usize;
            self.cursor_task = 0;
        }
    }

    pub fn move_task(&mut self, delta: isize) {
        let Some(card) = self.current_card() else {
            return;
        };
        if card.tasks.is_empty() {
            return;
        }
        let last = card.tasks.len() as isize - 1;
        self.cursor_task = (self.cursor_task as isize + delta).clamp(0, last) as usize;
    }

    /// Total done/total across all visible cards, for the title bar.
    pub fn totals(&self) -> (usize, usize) {
        self.cards
            .iter()
            .fold((0, 0), |(d, t), c| (d + c.done, t + c.total))
    }
}

/// Run the TUI application
pub fn run(document: Document, config: BoardConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Live reload is best-effort; the TUI still works without a watcher.
    let watcher = BoardWatcher::start(document.path()).ok();
    let mut app = App::new(document, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&BoardWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if let Some(watcher) = watcher
            && !watcher.poll().is_empty()
        {
            app.reload();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
