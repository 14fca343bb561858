use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Periodicity;
use crate::ui::messages::{header, info};
use crate::utils::colors::{paint_status, paint_trend};
use crate::utils::formatting::periods;
use crate::utils::table::Table;

/// Streak statistics of active habits, or a short summary of archived ones.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Dashboard { archived } = cmd {
        let habits = ctx.catalog().list(!*archived)?;
        let ledger = ctx.ledger();
        let window = ctx.cfg.analysis_window;

        if habits.is_empty() {
            if *archived {
                info("There are no archived habits.");
            } else {
                info("There are no active habits registered. Register the first one.");
            }
            return Ok(());
        }

        if *archived {
            let mut table = Table::new(vec![
                "Habit",
                "Type",
                "Description",
                "Max streak",
                "Aver emo",
            ]);
            for habit in &habits {
                let stats = Core::analyze(habit, &ledger, window, ctx.today)?;
                table.add_row(vec![
                    habit.title.clone(),
                    habit.periodicity.to_string(),
                    habit.description.clone(),
                    stats.max_streak.to_string(),
                    stats.average_label(),
                ]);
            }
            header("Archived habits");
            print!("{}", table.render());
            return Ok(());
        }

        let mut table = Table::new(vec![
            "Habit",
            "Type",
            "Per old",
            "Status",
            "Streak",
            "Missed per",
            "Max streak",
            "Aver emo",
            "Emo trend",
        ]);
        for habit in &habits {
            let stats = Core::analyze(habit, &ledger, window, ctx.today)?;
            let daily = habit.periodicity == Periodicity::Daily;
            table.add_row(vec![
                habit.title.clone(),
                habit.periodicity.to_string(),
                periods(stats.tenure, daily),
                paint_status(stats.status),
                stats.streak.to_string(),
                stats.hiatus.to_string(),
                stats.max_streak.to_string(),
                stats.average_label(),
                paint_trend(stats.trend(), stats.trend_label()),
            ]);
        }
        header(format!("Dashboard on {}", ctx.today));
        print!("{}", table.render());
    }

    Ok(())
}
