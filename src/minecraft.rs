use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
#[error("unsupported mod loader: {value}")]
pub struct ModLoaderParseError {
    value: String,
}

/// Server-side modding framework the container should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModLoader {
    Forge,
    Fabric,
}

impl FromStr for ModLoader {
    type Err = ModLoaderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forge" => Ok(ModLoader::Forge),
            "fabric" => Ok(ModLoader::Fabric),
            _ => Err(ModLoaderParseError {
                value: s.to_string(),
            }),
        }
    }
}

impl Display for ModLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModLoader::Forge => write!(f, "FORGE"),
            ModLoader::Fabric => write!(f, "FABRIC"),
        }
    }
}

/// Fully resolved launch parameters for one run.
///
/// Built fresh on every invocation, either from the saved store or from
/// operator input, and persisted back before the container is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub game_version: String,
    pub mod_loader: ModLoader,
    pub eula_accepted: bool,
    /// Loader version, asked on every FORGE run and never cached.
    pub loader_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_loader_case_insensitive() {
        assert_eq!("FORGE".parse::<ModLoader>().unwrap(), ModLoader::Forge);
        assert_eq!("forge".parse::<ModLoader>().unwrap(), ModLoader::Forge);
        assert_eq!("Fabric".parse::<ModLoader>().unwrap(), ModLoader::Fabric);
        assert_eq!("fABRIC".parse::<ModLoader>().unwrap(), ModLoader::Fabric);
    }

    #[test]
    fn parse_loader_rejects_unknown() {
        assert!("bogus".parse::<ModLoader>().is_err());
        assert!("".parse::<ModLoader>().is_err());
        assert!("vanilla".parse::<ModLoader>().is_err());
    }

    #[test]
    fn display_is_canonical_uppercase() {
        assert_eq!(ModLoader::Forge.to_string(), "FORGE");
        assert_eq!(ModLoader::Fabric.to_string(), "FABRIC");
    }
}
