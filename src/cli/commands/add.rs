use crate::AppContext;
use crate::cli::commands::list::{print_habit_card, print_habits};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::capitalize;

/// Register a new habit.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        title,
        description,
        periodicity,
    } = cmd
    {
        let catalog = ctx.catalog();
        let habit = catalog.add(&capitalize(title), &capitalize(description), *periodicity)?;

        success("Done! New habit registered:");
        print_habit_card(&habit);
        println!();
        print_habits(&catalog.list(true)?);
    }

    Ok(())
}
