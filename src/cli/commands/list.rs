use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::Habit;
use crate::ui::messages::{header, info};
use crate::utils::capitalize;
use crate::utils::formatting::bold;
use crate::utils::table::Table;

const CARD_WIDTH: usize = 60;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::List { archived } => {
            let habits = ctx.catalog().list(!*archived)?;
            if habits.is_empty() {
                if *archived {
                    info("There are no archived habits.");
                } else {
                    info("There are no habits registered yet. Register your first habit with `rhabits add`.");
                }
                return Ok(());
            }

            header(if *archived {
                "Archived habits"
            } else {
                "Registered habits"
            });
            print_habits(&habits);
        }
        Commands::Show { title } => {
            let habit = ctx.catalog().resolve(&capitalize(title))?;
            print_habit_card(&habit);
        }
        _ => {}
    }
    Ok(())
}

/// Numbered table of habits.
pub fn print_habits(habits: &[Habit]) {
    let mut table = Table::new(vec![
        "N",
        "Habit",
        "Description",
        "Periodicity",
        "Created",
        "Last update",
    ]);
    for (i, h) in habits.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            h.title.clone(),
            h.description.clone(),
            h.periodicity.to_string(),
            h.created.to_string(),
            h.descr_update.to_string(),
        ]);
    }
    print!("{}", table.render());
}

/// Habit details with the description wrapped to the card width.
pub fn print_habit_card(habit: &Habit) {
    println!("{}", bold(&habit.title));
    for line in textwrap::wrap(&habit.description, CARD_WIDTH) {
        println!("  {}", line);
    }
    println!("  Periodicity:        {}", habit.periodicity);
    println!("  Created:            {}", habit.created);
    println!("  Description update: {}", habit.descr_update);
    println!(
        "  Status:             {}",
        if habit.active { "active" } else { "archived" }
    );
}
