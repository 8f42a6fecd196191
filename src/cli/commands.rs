use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cb", about = concat!("[#] cardboard v", env!("CARGO_PKG_VERSION"), " - your todo board is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Board file to operate on (default: ./board.md)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Use a specific config file instead of the per-user one
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter board file
    Init(InitArgs),
    /// Render the board as cards
    Show(ShowArgs),
    /// List sections and their tasks
    List(ListArgs),
    /// Toggle a task's checkbox
    Toggle(ToggleArgs),
    /// Export the board as an HTML page
    Export(ExportArgs),
    /// Show or edit settings
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing board file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// One card per section in the document, instead of the day window
    #[arg(long)]
    pub all: bool,
    /// Number of day cards in the window (default: from config)
    #[arg(long, conflicts_with = "all")]
    pub days: Option<usize>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list this section
    #[arg(long)]
    pub section: Option<String>,
    /// Only open tasks
    #[arg(long, conflicts_with = "done")]
    pub open: bool,
    /// Only done tasks
    #[arg(long)]
    pub done: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Section label the task lives under
    pub section: String,
    /// Exact task text
    pub text: String,
    /// Clear the checkbox instead of setting it
    #[arg(long)]
    pub undone: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: the board file with an .html extension)
    #[arg(short, long)]
    pub out: Option<String>,
    /// Export one card per section, instead of the day window
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Setting to read or write (omit to print all settings)
    pub key: Option<String>,
    /// New value for the setting
    pub value: Option<String>,
}
