use crate::AppContext;
use crate::cli::commands::ask_confirmation;
use crate::cli::commands::list::print_habits;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::capitalize;

/// Edit a habit description or archive a habit.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let catalog = ctx.catalog();

    match cmd {
        Commands::Edit { title, description } => {
            let habit = catalog.resolve(&capitalize(title))?;
            catalog.edit_description(&habit, &capitalize(description))?;
            success(format!("Description of '{}' updated.", habit.title));
            print_habits(&catalog.list(true)?);
        }
        Commands::Archive { title, yes } => {
            let habit = catalog.resolve(&capitalize(title))?;
            if !habit.active {
                info(format!("'{}' is already archived.", habit.title));
                return Ok(());
            }

            let prompt = format!(
                "Archive '{}'? It will leave the check-off list, its history is kept.",
                habit.title
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            catalog.archive(&habit)?;
            success(format!("'{}' archived. Active habits:", habit.title));
            print_habits(&catalog.list(true)?);
        }
        _ => {}
    }

    Ok(())
}
