use crate::errors::AppResult;
use crate::logging::log_file;
use crate::ui::messages::info;
use ansi_term::Colour;
use std::fs;
use std::io;
use std::path::Path;

/// Colour of a log line based on its level tag.
fn color_for_line(line: &str) -> Colour {
    if line.contains(" ERROR ") {
        Colour::Red
    } else if line.contains(" WARN ") {
        Colour::Yellow
    } else if line.contains(" INFO ") {
        Colour::Green
    } else {
        Colour::Fixed(244)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(data_dir: &Path) -> AppResult<()> {
        let path = log_file(data_dir);

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info(format!("No log file yet at {}", path.display()));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        println!("📜 Application log ({}):\n", path.display());
        for line in content.lines() {
            println!("{}", color_for_line(line).paint(line));
        }

        Ok(())
    }
}
