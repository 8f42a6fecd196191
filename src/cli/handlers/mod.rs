mod init;
pub use init::cmd_init;

use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::document::Document;
use crate::model::config::{BoardConfig, Grammar, SequenceMode};
use crate::model::task::checkbox_char;
use crate::ops::cards::{self, Sequence};
use crate::ops::{export, patch};
use crate::parse::BoardParser;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Resolved invocation context: which board file and which settings.
pub struct Context {
    pub document: Document,
    pub config: BoardConfig,
    pub config_path: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = match &cli.config {
            Some(path) => PathBuf::from(path),
            None => config_io::default_config_path()?,
        };
        let config = config_io::load_config(&config_path)?;
        let document = Document::new(cli.file.as_deref().unwrap_or("board.md"));
        Ok(Context {
            document,
            config,
            config_path,
        })
    }
}

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        None => {
            // No subcommand → TUI (handled in main.rs)
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Init(args) => cmd_init(&ctx, args),
            Commands::Show(args) => cmd_show(&ctx, args, json),
            Commands::List(args) => cmd_list(&ctx, args, json),
            Commands::Toggle(args) => cmd_toggle(&ctx, args),
            Commands::Export(args) => cmd_export(&ctx, args),
            Commands::Config(args) => cmd_config(&ctx, args, json),
        },
    }
}

/// Entry point for the default (no subcommand) invocation.
pub fn launch_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::from_cli(cli)?;
    crate::tui::run(ctx.document, ctx.config)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pick the card sequence from config and flags. `--all` wins, then an
/// explicit `--days`, then the configured default.
fn resolve_sequence(config: &BoardConfig, all: bool, days: Option<usize>) -> Sequence {
    if all || (days.is_none() && config.sequence == SequenceMode::All) {
        return Sequence::AllSections;
    }
    let today = chrono::Local::now().date_naive();
    Sequence::Window {
        start: cards::window_start(today, config.week_start),
        days: days.unwrap_or(config.days),
    }
}

fn file_label(ctx: &Context) -> String {
    ctx.document.path().display().to_string()
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(ctx: &Context, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = ctx.document.read()?;
    let board = BoardParser::new(ctx.config.grammar).parse(&source);
    let sequence = resolve_sequence(&ctx.config, args.all, args.days);
    let cards = cards::cards(&board, &sequence);

    if json {
        let out = BoardJson {
            file: file_label(ctx),
            cards: cards.iter().map(card_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}  {}", card.title, card.badge());
        if card.tasks.is_empty() {
            println!("  No tasks");
        }
        for task in &card.tasks {
            println!("  [{}] {}", checkbox_char(task.done), task.text);
        }
    }
    Ok(())
}

fn cmd_list(ctx: &Context, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = ctx.document.read()?;
    let board = BoardParser::new(ctx.config.grammar).parse(&source);

    let keep = |done: bool| (!args.open || !done) && (!args.done || done);

    let mut sections: Vec<SectionJson> = Vec::new();
    for (label, tasks) in board.sections() {
        if let Some(only) = &args.section
            && label != only
        {
            continue;
        }
        sections.push(SectionJson {
            label: label.to_string(),
            tasks: tasks
                .iter()
                .filter(|t| keep(t.done))
                .map(task_to_json)
                .collect(),
        });
    }

    if let Some(only) = &args.section
        && sections.is_empty()
    {
        return Err(format!("no section [{}] in {}", only, file_label(ctx)).into());
    }

    if json {
        let out = SectionListJson {
            file: file_label(ctx),
            sections,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("[{}]", section.label);
        for task in &section.tasks {
            println!("  [{}] {}", checkbox_char(task.done), task.text);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_toggle(ctx: &Context, args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = ctx.document.read()?;
    let new_done = !args.undone;
    let patched = patch::toggle_task(
        &source,
        &args.section,
        &args.text,
        new_done,
        ctx.config.grammar,
    );

    if patched != source {
        ctx.document.write(&patched)?;
        println!(
            "[{}] {} → [{}]",
            args.section,
            args.text,
            checkbox_char(new_done)
        );
        return Ok(());
    }

    // Nothing changed: either the task is already in that state, or there
    // is no such (section, text) pair. The document stays untouched.
    let board = BoardParser::new(ctx.config.grammar).parse(&source);
    match board.find_task(&args.section, &args.text) {
        Some(_) => {
            println!(
                "[{}] {} already [{}]",
                args.section,
                args.text,
                checkbox_char(new_done)
            );
            Ok(())
        }
        None => Err(format!(
            "no task \"{}\" under [{}] in {}",
            args.text,
            args.section,
            file_label(ctx)
        )
        .into()),
    }
}

fn cmd_export(ctx: &Context, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = ctx.document.read()?;
    let board = BoardParser::new(ctx.config.grammar).parse(&source);
    let sequence = resolve_sequence(&ctx.config, args.all, None);
    let cards = cards::cards(&board, &sequence);

    let title = ctx
        .document
        .path()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("board");
    let html = export::to_html(&cards, &ctx.config, title);

    let out_path = match args.out {
        Some(path) => PathBuf::from(path),
        None => ctx.document.path().with_extension("html"),
    };
    std::fs::write(&out_path, html)?;
    println!("exported {} cards to {}", cards.len(), out_path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config(ctx: &Context, args: ConfigArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match (args.key, args.value) {
        (None, _) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ctx.config)?);
            } else {
                print!("{}", toml::to_string(&ctx.config)?);
            }
            Ok(())
        }
        (Some(key), None) => match config_value(&ctx.config, &key) {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None => Err(config_io::ConfigError::UnknownKey(key).into()),
        },
        (Some(key), Some(value)) => {
            config_io::set_config_value(&ctx.config_path, &key, &value)?;
            println!("{} = {}", key, value);
            Ok(())
        }
    }
}

fn config_value(config: &BoardConfig, key: &str) -> Option<String> {
    match key {
        "card_width" => Some(config.card_width.to_string()),
        "card_gap" => Some(config.card_gap.to_string()),
        "days" => Some(config.days.to_string()),
        "week_start" => Some(config.week_start.to_string()),
        "grammar" => Some(
            match config.grammar {
                Grammar::Date => "date",
                Grammar::Label => "label",
            }
            .to_string(),
        ),
        "sequence" => Some(
            match config.sequence {
                SequenceMode::Week => "week",
                SequenceMode::All => "all",
            }
            .to_string(),
        ),
        _ => None,
    }
}
