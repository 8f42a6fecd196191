use chrono::Duration;

use crate::cli::commands::InitArgs;
use crate::model::config::Grammar;
use crate::ops::cards::window_start;

use super::Context;

const COLUMN_TEMPLATE: &str = "\
[Backlog]
- [ ] capture your first task

[Doing]

[Done]
- [x] set up the board
";

/// Write a starter board matching the configured grammar: named columns for
/// the label grammar, the current day window for the date grammar.
pub fn cmd_init(ctx: &Context, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if ctx.document.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            ctx.document.path().display()
        )
        .into());
    }

    let content = match ctx.config.grammar {
        Grammar::Label => COLUMN_TEMPLATE.to_string(),
        Grammar::Date => week_template(ctx),
    };
    ctx.document.write(&content)?;
    println!("initialized {}", ctx.document.path().display());
    Ok(())
}

fn week_template(ctx: &Context) -> String {
    let today = chrono::Local::now().date_naive();
    let start = window_start(today, ctx.config.week_start);

    let mut out = String::new();
    for i in 0..ctx.config.days.max(1) {
        let date = start + Duration::days(i as i64);
        out.push_str(&format!("[{}]\n", date.format("%Y-%m-%d")));
        if i == 0 {
            out.push_str("- [ ] capture your first task\n");
        }
        out.push('\n');
    }
    out
}
