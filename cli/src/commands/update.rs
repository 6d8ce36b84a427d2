//! The interactive update session.
//!
//! The loop is generic over its input and output streams. Interactive use
//! wires up stdin/stdout; tests (and piped input) run the same code against
//! in-memory buffers, and end-of-input acts as the quit sentinel at every
//! prompt so a script can never hang the session.

use std::io::{self, BufRead, Write};

use tracing::debug;

use equipr_common::config::Config;
use equipr_common::inventory::address;
use equipr_common::inventory::device::Inventory;
use equipr_core::session::SessionReport;

use crate::terminal::format;

const DEVICE_PROMPT: &str = "\nWhich device would you like to update (enter x to quit)? ";
const ADDRESS_PROMPT: &str = "What is the new IP address (111.111.111.111) ";
const NOT_IN_INVENTORY: &str = "That device is not in the network inventory.";
const INVALID_ADDRESS: &str = "Sorry, that is not a valid IP address\n";
const QUIT: &str = "x";

/// Runs one session: inventory listing, device prompt, address prompt,
/// apply, until the operator quits. Returns everything the session
/// accumulated.
pub fn run<R, W>(
    inventory: &mut Inventory,
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> anyhow::Result<SessionReport>
where
    R: BufRead,
    W: Write,
{
    let mut report = SessionReport::new();

    loop {
        if cfg.quiet < 2 {
            print_inventory(out, inventory)?;
        }

        let Some(name) = prompt_device(input, out, inventory)? else {
            break;
        };
        let Some(address) = prompt_address(input, out, &mut report)? else {
            break;
        };

        inventory.assign(&name, &address);
        report.record_update(&name, &address);
        writeln!(out, "{name} was updated; the new IP address is {address}")?;
    }

    Ok(report)
}

fn print_inventory<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format::section_rule("Network Equipment Inventory"))?;

    let width: usize = inventory.name_width();
    for device in inventory.iter() {
        writeln!(out, "{}", format::device_row(device, width))?;
    }
    Ok(())
}

/// Prompts until the entry names a known device. Returns the device's
/// stored name, or `None` on the quit sentinel or end of input.
fn prompt_device<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    inventory: &Inventory,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "{DEVICE_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let entry: &str = line.trim();

        if entry.eq_ignore_ascii_case(QUIT) {
            return Ok(None);
        }
        if let Some(device) = inventory.find(entry) {
            return Ok(Some(device.name.clone()));
        }

        writeln!(out, "{NOT_IN_INVENTORY}")?;
    }
}

/// Prompts until the validator accepts an address, recording every
/// rejection in the report.
fn prompt_address<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    report: &mut SessionReport,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "{ADDRESS_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let attempt: &str = line.trim();

        match address::validate(attempt) {
            Ok(()) => return Ok(Some(attempt.to_string())),
            Err(reason) => {
                report.record_invalid(attempt);
                debug!("rejected {attempt:?}: {reason}");
                writeln!(out, "{INVALID_ADDRESS}")?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // End of input doubles as the quit sentinel.
        return Ok(None);
    }
    Ok(Some(line))
}
