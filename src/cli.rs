use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Launch a containerized Minecraft server from saved or fresh arguments
///
/// Supplying any positional argument skips the saved store and forces fresh
/// collection; fields not covered by an argument are asked interactively.
#[derive(Debug, Parser)]
#[command(version, about, max_term_width = 100)]
pub struct Mclaunch {
    /// Minecraft version for the modpack
    pub game_version: Option<String>,

    /// Mod loader for the modpack (FORGE or FABRIC)
    pub mod_loader: Option<String>,

    /// EULA acceptance ('Y' or 'N')
    pub eula: Option<String>,

    /// Directory holding the saved launch arguments and server data
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (can be set multiple times)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Mclaunch {
    /// Whether any positional argument was supplied, which forces fresh
    /// collection regardless of the saved store.
    pub fn forces_fresh_collection(&self) -> bool {
        self.game_version.is_some() || self.mod_loader.is_some() || self.eula.is_some()
    }
}
