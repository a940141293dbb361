use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use regex::RegexBuilder;

use crate::minecraft::LaunchConfig;

pub(crate) const ARGS_FILE: &str = "args.txt";

pub(crate) const KEY_GAME_VERSION: &str = "minecraftVersion";
pub(crate) const KEY_MOD_LOADER: &str = "modLoader";
pub(crate) const KEY_EULA: &str = "eulaAccepted";
pub(crate) const KEY_FORGE_VERSION: &str = "forgeVersion";

const REQUIRED_KEYS: [&str; 3] = [KEY_GAME_VERSION, KEY_MOD_LOADER, KEY_EULA];

/// Raw field values recovered from the store.
///
/// Deliberately unvalidated: a stored bogus loader or non-`Y` EULA answer
/// goes through the same checks as fresh operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredConfig {
    pub game_version: String,
    pub mod_loader: String,
    pub eula_accepted: String,
}

/// Persisted `key=value` store for the last-used launch arguments.
///
/// Reads are best-effort textual scans, not structured parses: a line counts
/// as holding a key if it merely contains the key name, and empty values are
/// still usable. Callers must tolerate extra or reordered lines.
#[derive(Debug)]
pub struct ConfigStore {
    data_dir: PathBuf,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = data_dir.join(ARGS_FILE);
        ConfigStore { data_dir, path }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read the saved arguments, or `None` if nothing usable is stored.
    ///
    /// Any read failure and any file missing one of the required keys are
    /// both treated as "no config saved yet", never as an error.
    pub fn load(&self) -> Option<StoredConfig> {
        let text = fs::read_to_string(&self.path).ok()?;
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();

        let contains_key = |key: &str| {
            let key = key.to_lowercase();
            lines.iter().any(|line| line.to_lowercase().contains(&key))
        };
        if !REQUIRED_KEYS.iter().all(|key| contains_key(key)) {
            return None;
        }

        Some(StoredConfig {
            game_version: lookup(&lines, KEY_GAME_VERSION),
            mod_loader: lookup(&lines, KEY_MOD_LOADER),
            eula_accepted: lookup(&lines, KEY_EULA),
        })
    }

    /// Overwrite the store with the resolved config.
    ///
    /// The new content is written to a sibling temp file and renamed into
    /// place, so a previous store is never left half-overwritten. Creates
    /// the data directory if needed; any failure here is fatal for the run.
    pub fn save(&self, config: &LaunchConfig) -> Result<()> {
        fs::create_dir_all(&self.data_dir).wrap_err_with(|| {
            format!("failed to create data directory {}", self.data_dir.display())
        })?;

        let eula = if config.eula_accepted { "Y" } else { "N" };
        let mut content = format!(
            "{KEY_GAME_VERSION}={}\n{KEY_MOD_LOADER}={}\n{KEY_EULA}={eula}\n",
            config.game_version, config.mod_loader,
        );
        if let Some(forge_version) = &config.loader_version {
            content.push_str(&format!("{KEY_FORGE_VERSION}={forge_version}\n"));
        }

        let tmp = self.path.with_extension("txt.tmp");
        fs::write(&tmp, content)
            .wrap_err_with(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .wrap_err_with(|| format!("failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

/// Value of the first line containing `key` (case-insensitive), with every
/// `key=` occurrence stripped; empty string when no line matches.
pub(crate) fn lookup(lines: &[String], key: &str) -> String {
    let needle = key.to_lowercase();
    let Some(line) = lines.iter().find(|line| line.to_lowercase().contains(&needle)) else {
        return String::new();
    };

    let prefix = RegexBuilder::new(&format!("{}=", regex::escape(key)))
        .case_insensitive(true)
        .build()
        .expect("escaped key is a valid pattern");
    prefix.replace_all(line, "").into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::distributions::{Alphanumeric, DistString};

    use super::*;
    use crate::minecraft::ModLoader;

    fn scratch_store() -> (PathBuf, ConfigStore) {
        let name = format!(
            "mclaunch-store-{}",
            Alphanumeric.sample_string(&mut rand::thread_rng(), 8)
        );
        let dir = std::env::temp_dir().join(name);
        (dir.clone(), ConfigStore::new(dir))
    }

    fn forge_config() -> LaunchConfig {
        LaunchConfig {
            game_version: "1.20.1".to_string(),
            mod_loader: ModLoader::Forge,
            eula_accepted: true,
            loader_version: Some("47.2.0".to_string()),
        }
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (dir, store) = scratch_store();
        scopeguard::defer! {
            let _ = std::fs::remove_dir_all(&dir);
        }

        store.save(&forge_config()).unwrap();

        let stored = store.load().expect("saved config should be usable");
        assert_eq!(stored.game_version, "1.20.1");
        assert_eq!(stored.mod_loader, "FORGE");
        assert_eq!(stored.eula_accepted, "Y");

        let lines: Vec<String> = std::fs::read_to_string(dir.join(ARGS_FILE))
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect();
        assert_eq!(lookup(&lines, KEY_FORGE_VERSION), "47.2.0");
    }

    #[test]
    fn save_overwrites_previous_store() {
        let (dir, store) = scratch_store();
        scopeguard::defer! {
            let _ = std::fs::remove_dir_all(&dir);
        }

        store.save(&forge_config()).unwrap();
        store
            .save(&LaunchConfig {
                game_version: "1.19.4".to_string(),
                mod_loader: ModLoader::Fabric,
                eula_accepted: true,
                loader_version: None,
            })
            .unwrap();

        let text = std::fs::read_to_string(dir.join(ARGS_FILE)).unwrap();
        assert!(text.contains("minecraftVersion=1.19.4"));
        assert!(text.contains("modLoader=FABRIC"));
        assert!(!text.contains("forgeVersion"));
    }

    #[test]
    fn load_missing_file_is_none() {
        let (_dir, store) = scratch_store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_missing_eula_key_is_none() {
        let (dir, store) = scratch_store();
        scopeguard::defer! {
            let _ = std::fs::remove_dir_all(&dir);
        }

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(ARGS_FILE),
            "minecraftVersion=1.20.1\nmodLoader=FABRIC\n",
        )
        .unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_empty_values_is_still_usable() {
        let (dir, store) = scratch_store();
        scopeguard::defer! {
            let _ = std::fs::remove_dir_all(&dir);
        }

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(ARGS_FILE),
            "minecraftVersion=\nmodLoader=\neulaAccepted=\n",
        )
        .unwrap();

        let stored = store.load().expect("empty values still count as usable");
        assert_eq!(stored.game_version, "");
        assert_eq!(stored.mod_loader, "");
        assert_eq!(stored.eula_accepted, "");
    }

    #[test]
    fn load_tolerates_extra_and_reordered_lines() {
        let (dir, store) = scratch_store();
        scopeguard::defer! {
            let _ = std::fs::remove_dir_all(&dir);
        }

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(ARGS_FILE),
            "# comment\neulaAccepted=y\nmodLoader=forge\nminecraftVersion=1.18.2\nunrelated=1\n",
        )
        .unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored.game_version, "1.18.2");
        assert_eq!(stored.mod_loader, "forge");
        assert_eq!(stored.eula_accepted, "y");
    }

    #[test]
    fn lookup_is_case_insensitive_and_strips_prefix() {
        let lines = vec!["MODLOADER=Fabric".to_string()];
        assert_eq!(lookup(&lines, KEY_MOD_LOADER), "Fabric");
    }

    #[test]
    fn lookup_returns_first_match() {
        let lines = vec![
            "modLoader=FORGE".to_string(),
            "modLoader=FABRIC".to_string(),
        ];
        assert_eq!(lookup(&lines, KEY_MOD_LOADER), "FORGE");
    }

    #[test]
    fn lookup_missing_key_is_empty() {
        let lines = vec!["minecraftVersion=1.20.1".to_string()];
        assert_eq!(lookup(&lines, KEY_EULA), "");
    }
}
