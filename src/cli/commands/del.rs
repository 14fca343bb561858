use crate::AppContext;
use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::capitalize;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { title, yes } = cmd {
        let catalog = ctx.catalog();
        let habit = catalog.resolve(&capitalize(title))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete '{}'? Its check-off history will be lost. This action is irreversible.",
            habit.title
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let purged = catalog.delete(&habit, &ctx.ledger())?;
        success(format!(
            "'{}' deleted together with {} check-off(s).",
            habit.title, purged
        ));
    }

    Ok(())
}
