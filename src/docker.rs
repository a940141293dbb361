use std::borrow::Cow;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tokio::process::Command;

use crate::minecraft::LaunchConfig;

pub(crate) const IMAGE: &str = "itzg/minecraft-server";
const CONTAINER_NAME: &str = "mc";
const DATA_MOUNT: &str = "/data";
const MEMORY_LIMIT: &str = "4G";
const SERVER_PORT: u16 = 25565;

/// Argument vector for `docker run`, encoding the resolved config as
/// environment variables for the server image.
pub(crate) fn run_args(config: &LaunchConfig, data_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--rm".to_string(),
        "-it".to_string(),
        "-v".to_string(),
        format!("{}:{DATA_MOUNT}", data_dir.display()),
        "-e".to_string(),
        format!("TYPE={}", config.mod_loader),
        "-e".to_string(),
        format!("MEMORY={MEMORY_LIMIT}"),
        "-e".to_string(),
        format!("VERSION={}", config.game_version),
    ];
    if let Some(forge_version) = &config.loader_version {
        args.push("-e".to_string());
        args.push(format!("FORGE_VERSION={forge_version}"));
    }
    args.extend([
        "-p".to_string(),
        format!("{SERVER_PORT}:{SERVER_PORT}"),
        "-e".to_string(),
        format!("EULA={}", config.eula_accepted),
        "--name".to_string(),
        CONTAINER_NAME.to_string(),
        IMAGE.to_string(),
    ]);
    args
}

/// Start the server container and wait for it to exit.
///
/// Stdio is inherited so the operator talks to the server console directly.
/// Failing to spawn or wait is fatal; the container's own exit status is
/// only logged, supervision is not this program's job.
pub(crate) async fn launch(config: &LaunchConfig, data_dir: &Path) -> Result<()> {
    let args = run_args(config, data_dir);
    tracing::info!(
        "attempting to start docker process with command: docker {}",
        render_command(&args)
    );

    let mut cmd = Command::new("docker");
    cmd.args(&args);
    cmd.kill_on_drop(true);

    let mut child = cmd.spawn().wrap_err("failed to start docker")?;
    let status = child.wait().await.wrap_err("failed to wait for docker")?;

    if !status.success() {
        tracing::warn!("docker exited with {status}");
    }

    Ok(())
}

fn render_command(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_escape::escape(Cow::from(arg.as_str())))
        .collect::<Vec<_>>()
        .join(" ")
}
