use crate::AppContext;
use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::CheckOff;
use crate::ui::messages::{header, info, success};
use crate::utils::capitalize;
use crate::utils::formatting::emotion_bar;
use crate::utils::table::Table;

/// Report, list and delete check-offs.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let catalog = ctx.catalog();
    let ledger = ctx.ledger();
    let shown = ctx.cfg.print_number;

    match cmd {
        Commands::Check { title, emotion } => {
            let habit = catalog.resolve(&capitalize(title))?;
            let check_off = ledger.report(&habit, *emotion, ctx.today)?;

            success(format!(
                "Done! '{}' checked off on {}.",
                check_off.habit_title, check_off.created
            ));
            header(format!("Last {} check-offs of '{}'", shown, habit.title));
            print_check_offs(&ledger.history(&habit.title, Some(shown))?);
        }
        Commands::History { title, last } => {
            let habit = catalog.resolve(&capitalize(title))?;
            let n = last.unwrap_or(shown);
            let history = ledger.history(&habit.title, Some(n))?;

            if history.is_empty() {
                info(format!("'{}' has no check-offs yet.", habit.title));
                return Ok(());
            }
            header(format!("Last {} check-offs of '{}'", n, habit.title));
            print_check_offs(&history);
        }
        Commands::Uncheck { title, index, yes } => {
            let habit = catalog.resolve(&capitalize(title))?;

            let prompt = format!(
                "Delete check-off #{} of '{}' (numbering of `history -n {}`)?",
                index, habit.title, shown
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = ledger.delete(&habit, *index, Some(shown))?;
            success(format!(
                "Check-off of {} deleted. Updated check-off list:",
                removed.created
            ));
            print_check_offs(&ledger.history(&habit.title, Some(shown))?);
        }
        _ => {}
    }

    Ok(())
}

/// Numbered table of check-offs, oldest first.
pub fn print_check_offs(check_offs: &[CheckOff]) {
    let mut table = Table::new(vec!["N", "Habit", "Emotion", "Created"]);
    for (i, c) in check_offs.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            c.habit_title.clone(),
            emotion_bar(c.emotion),
            c.created.to_string(),
        ]);
    }
    print!("{}", table.render());
}
