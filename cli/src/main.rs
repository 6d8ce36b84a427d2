mod commands;
mod terminal;

use std::io;

use colored::*;

use commands::{CommandLine, update};
use equipr_common::config::Config;
use equipr_common::{error, info, success, warn};
use equipr_core::{loader, writer};
use terminal::{colors, logging, print};

fn main() -> anyhow::Result<()> {
    let args: CommandLine = CommandLine::parse_args();

    logging::init();

    let cfg: Config = args.into_config();
    print::banner(cfg.no_banner, cfg.quiet);

    // Any load failure is terminal; nothing is prompted for.
    let mut inventory = loader::load_inventory(&cfg.routers_file, &cfg.switches_file)?;
    if inventory.is_empty() {
        warn!("the inventory is empty; there is nothing to update");
    } else {
        info!("{} devices loaded into the inventory", inventory.len());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = update::run(&mut inventory, &mut stdin.lock(), &mut stdout.lock(), &cfg)?;

    print::header("Summary", cfg.quiet);

    print::print(&format!(
        "Number of devices updated: {}",
        report.updated_count()
    ));
    match writer::write_updates(&report, &cfg.updated_file) {
        Ok(()) => success!(
            "Updated equipment written to file '{}'",
            cfg.updated_file.display()
        ),
        Err(e) => error!("Could not write to {}: {e}", cfg.updated_file.display()),
    }

    print::print(&format!(
        "Number of invalid addresses attempted: {}",
        report.invalid_count()
    ));
    match writer::write_invalid(&report, &cfg.invalid_file) {
        Ok(()) => success!(
            "List of invalid addresses written to file '{}'",
            cfg.invalid_file.display()
        ),
        Err(e) => error!("Could not write to {}: {e}", cfg.invalid_file.display()),
    }

    if cfg.quiet == 0 {
        let updates: ColoredString = format!("{} updates", report.updated_count()).bold().green();
        let rejected: ColoredString = format!("{} rejected addresses", report.invalid_count())
            .bold()
            .yellow();
        let closing: ColoredString = format!("Session complete: {updates} applied, {rejected}")
            .color(colors::TEXT_DEFAULT);
        print::fat_separator();
        print::centerln(&closing.to_string());
    }

    Ok(())
}
