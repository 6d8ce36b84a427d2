pub mod update;

use std::path::PathBuf;

use clap::Parser;
use equipr_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "equipr")]
#[command(about = "An interactive editor for network equipment inventories.")]
pub struct CommandLine {
    /// Router inventory file (JSON object of name -> address)
    #[arg(long, value_name = "FILE", default_value = config::EQUIP_R_FILE)]
    pub routers: PathBuf,

    /// Switch inventory file (JSON object of name -> address)
    #[arg(long, value_name = "FILE", default_value = config::EQUIP_S_FILE)]
    pub switches: PathBuf,

    /// Where to write the session's updates
    #[arg(long, value_name = "FILE", default_value = config::UPDATED_FILE)]
    pub updated: PathBuf,

    /// Where to write the rejected addresses
    #[arg(long, value_name = "FILE", default_value = config::INVALID_FILE)]
    pub invalid: PathBuf,

    /// Trim decorative output (-q banner and separators, -qq the inventory listing too)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            routers_file: self.routers,
            switches_file: self.switches,
            updated_file: self.updated,
            invalid_file: self.invalid,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
