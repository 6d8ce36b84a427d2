use std::path::PathBuf;

/// Default input file for the router mapping.
pub const EQUIP_R_FILE: &str = "equip_r.txt";
/// Default input file for the switch mapping.
pub const EQUIP_S_FILE: &str = "equip_s.txt";
/// Default output file for the session's update set.
pub const UPDATED_FILE: &str = "updated.txt";
/// Default output file for rejected addresses.
pub const INVALID_FILE: &str = "invalid.txt";

pub struct Config {
    /// JSON object mapping router names to addresses.
    pub routers_file: PathBuf,
    /// JSON object mapping switch names to addresses.
    pub switches_file: PathBuf,
    /// Where the session's update set is written.
    pub updated_file: PathBuf,
    /// Where the session's rejected addresses are written.
    pub invalid_file: PathBuf,
    /// Quietness level.
    ///
    /// 1 trims decoration (banner, separators), 2 additionally drops the
    /// per-iteration inventory listing. Prompts are always shown.
    pub quiet: u8,
    /// Skips the startup banner without touching the rest of the output.
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routers_file: PathBuf::from(EQUIP_R_FILE),
            switches_file: PathBuf::from(EQUIP_S_FILE),
            updated_file: PathBuf::from(UPDATED_FILE),
            invalid_file: PathBuf::from(INVALID_FILE),
            quiet: 0,
            no_banner: false,
        }
    }
}
