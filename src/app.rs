use std::process::ExitCode;

use color_eyre::eyre::Result;

use crate::cli::Mclaunch;
use crate::minecraft::{LaunchConfig, ModLoader};
use crate::prompt::Prompt;
use crate::store::ConfigStore;
use crate::{common, docker};

const ASK_GAME_VERSION: &str = "Enter the Minecraft version for your modpack";
const ASK_MOD_LOADER: &str = "Enter the Modloader for your modpack (FORGE or FABRIC)";
const ASK_EULA: &str = "Have you accepted the Minecraft EULA? (Enter 'Y' or 'N')";
const ASK_FORGE_VERSION: &str = "Enter the Forge version for your modpack";

/// How a run ends, short of an actual fault.
///
/// `Declined` and `UnsupportedLoader` are accepted outcomes of the workflow
/// and map to exit code 0; neither touches the store.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Launch(LaunchConfig),
    Declined,
    UnsupportedLoader(String),
}

pub(crate) async fn run(args: Mclaunch) -> Result<ExitCode> {
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(common::default_data_dir);
    let store = ConfigStore::new(data_dir);
    let mut prompt = crate::prompt::Terminal;

    match resolve(&args, &store, &mut prompt)? {
        Outcome::Launch(config) => {
            store.save(&config)?;
            docker::launch(&config, store.data_dir()).await?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Declined => {
            tracing::info!("you must accept the Minecraft EULA to launch the server");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::UnsupportedLoader(loader) => {
            tracing::info!("invalid Modloader {loader:?}: only 'FORGE' and 'FABRIC' are supported");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolve the launch parameters for this run.
///
/// Positional arguments always beat the store. Without them, a usable store
/// supplies the three base fields; otherwise each missing field is asked in
/// fixed order. The Forge version is asked on every FORGE run, saved or not.
pub(crate) fn resolve(
    args: &Mclaunch,
    store: &ConfigStore,
    prompt: &mut dyn Prompt,
) -> Result<Outcome> {
    let saved = if args.forces_fresh_collection() {
        None
    } else {
        store.load()
    };

    let (game_version, loader, eula_accepted) = match saved {
        Some(stored) => {
            tracing::info!("saved arguments found, using those");
            let accepted = stored.eula_accepted.eq_ignore_ascii_case("y");
            (stored.game_version, stored.mod_loader, accepted)
        }
        None => {
            let game_version = match args.game_version.clone() {
                Some(version) => version,
                None => prompt.input(ASK_GAME_VERSION)?,
            };
            let loader = match args.mod_loader.clone() {
                Some(loader) => loader,
                None => prompt.input(ASK_MOD_LOADER)?,
            };
            let mut answer = match args.eula.clone() {
                Some(answer) => answer,
                None => prompt.input(ASK_EULA)?,
            };
            while !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("n") {
                tracing::info!("invalid input, enter 'Y' or 'N'");
                answer = prompt.input(ASK_EULA)?;
            }
            (game_version, loader, answer.eq_ignore_ascii_case("y"))
        }
    };

    if !eula_accepted {
        return Ok(Outcome::Declined);
    }

    let mod_loader: ModLoader = match loader.parse() {
        Ok(mod_loader) => mod_loader,
        Err(_) => return Ok(Outcome::UnsupportedLoader(loader)),
    };

    // never cached across runs
    let loader_version = match mod_loader {
        ModLoader::Forge => Some(prompt.input(ASK_FORGE_VERSION)?),
        ModLoader::Fabric => None,
    };

    Ok(Outcome::Launch(LaunchConfig {
        game_version,
        mod_loader,
        eula_accepted,
        loader_version,
    }))
}
