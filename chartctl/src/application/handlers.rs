use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, bail};
use chart_core::repo_factory::{Backend, open_repo};
use chart_core::{ChartService, OpenParams};
use console::style;
use serde_json::json;

use super::prompt::Prompter;

pub fn service_from_args(dir: PathBuf) -> Result<ChartService> {
    let repo = open_repo(Backend::Fs, OpenParams { dir })?;
    Ok(ChartService::new(repo))
}

pub fn handle_generate(svc: &ChartService, base: i64, force: bool, out: &mut dyn Write) -> Result<()> {
    let generated = if force {
        svc.regenerate_chart(base)
    } else {
        svc.generate_chart(base)
    };
    match generated {
        Ok(true) => writeln!(out, "Chart for base {base} generated successfully.")?,
        Ok(false) => writeln!(out, "Base {base} is not a valid chart (1-10); nothing generated.")?,
        Err(e) if e.is_already_exists() => bail!("{e} (use --force to replace it)"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn handle_read(svc: &ChartService, base: i64, as_json: bool, out: &mut dyn Write) -> Result<()> {
    let lines = svc.read_chart(base)?;
    if as_json {
        writeln!(out, "{}", json!({ "base": base, "lines": lines }))?;
        return Ok(());
    }
    if lines.is_empty() {
        writeln!(out, "Chart for base {base} not found or empty.")?;
        return Ok(());
    }
    writeln!(out, "{}", style(format!("Multiplication chart for base {base}:")).bold())?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn handle_line(
    svc: &ChartService,
    base: i64,
    index: i64,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let line = svc.read_chart_line(base, index)?;
    if as_json {
        writeln!(out, "{}", json!({ "base": base, "index": index, "line": line }))?;
        return Ok(());
    }
    match line {
        Some(l) => writeln!(out, "{l}")?,
        None => writeln!(out, "Line {index} for base {base} not found.")?,
    }
    Ok(())
}

pub fn handle_delete(
    svc: &ChartService,
    base: i64,
    yes: bool,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    if !svc.chart_exists(base) {
        writeln!(out, "Chart for base {base} not found.")?;
        return Ok(());
    }
    if !yes && !prompter.confirm(&format!("Delete the chart file for base {base}?"))? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }
    if svc.delete_chart(base) {
        writeln!(out, "Chart for base {base} deleted.")?;
    } else {
        bail!("could not delete chart for base {base}");
    }
    Ok(())
}

pub fn handle_list(svc: &ChartService, as_json: bool, out: &mut dyn Write) -> Result<()> {
    let bases = svc.list_charts()?;
    if as_json {
        writeln!(out, "{}", serde_json::to_string(&bases)?)?;
        return Ok(());
    }
    if bases.is_empty() {
        writeln!(out, "No charts found.")?;
    }
    for b in bases {
        writeln!(out, "{:>3}  {}", b, svc.repo().path_for(b).display())?;
    }
    Ok(())
}
