//! Interactive read-validate-dispatch loop.

use std::io::Write;

use anyhow::Result;
use chart_core::{ChartError, ChartService};
use console::style;
use tracing::error;

use super::handlers::handle_read;
use super::prompt::Prompter;

const OPTIONS: [&str; 4] = [
    "Generate a multiplication chart",
    "Read a multiplication chart",
    "Read a line of a multiplication chart",
    "Exit",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

/// Run until the user picks Exit. Chart errors are reported and the loop
/// continues; prompt failures (e.g. closed stdin) end it.
pub fn run_menu(svc: &ChartService, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Welcome to chart generators")?;
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        let choice = prompter.select("Select an option", &OPTIONS)?;
        state = match step(svc, choice, prompter, out) {
            Ok(next) => next,
            Err(e) => match e.downcast_ref::<ChartError>() {
                Some(chart_err) => {
                    error!("menu operation failed: {chart_err}");
                    writeln!(out, "{}", style(format!("Error: {chart_err}")).red())?;
                    MenuState::Running
                }
                None => return Err(e),
            },
        };
        writeln!(out)?;
    }
    writeln!(out, "Bye, see you soon.")?;
    Ok(())
}

fn step(
    svc: &ChartService,
    choice: usize,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<MenuState> {
    match choice {
        0 => generate(svc, prompter, out)?,
        1 => {
            let base = prompter.number("Enter base number", 1, 10)?;
            handle_read(svc, base, false, out)?;
        }
        2 => read_line(svc, prompter, out)?,
        3 => return Ok(MenuState::Exited),
        _ => writeln!(out, "Invalid option")?,
    }
    Ok(MenuState::Running)
}

fn generate(svc: &ChartService, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    let base = prompter.number("Enter base number", 1, 10)?;
    match svc.generate_chart(base) {
        Ok(true) => writeln!(out, "Chart for base {base} generated successfully.")?,
        // number() keeps base in range
        Ok(false) => {}
        Err(e) if e.is_already_exists() => {
            writeln!(out, "Error: A chart for base {base} already exists.")?;
            let overwrite = prompter
                .confirm("Do you want to delete the existing file and create a new one?")?;
            if overwrite && svc.regenerate_chart(base)? {
                writeln!(out, "Chart for base {base} regenerated successfully.")?;
            }
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn read_line(svc: &ChartService, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    let base = prompter.number("Enter base number", 1, 10)?;
    let index = prompter.number("Enter line number", 1, 10)?;
    match svc.read_chart_line(base, index)? {
        Some(line) => {
            writeln!(out, "Line found:")?;
            writeln!(out, "{line}")?;
        }
        None => writeln!(out, "Line {index} for base {base} not found.")?,
    }
    Ok(())
}
