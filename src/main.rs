use crate::{
    bumper::{policy::BumpPolicy, update},
    store::{RegistryStore, yaml::YamlFileStore},
    utils::{
        logger::{LogLevel, Logger},
        path::{STABLE_BUILDS_FILE, resolve_registry_path},
        signature::get_signature,
        version::{get_version, get_version_with_signature},
    },
};
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tokio::io;

mod bumper;
mod store;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "stable-builds")]
#[command(author = "Devaloop")]
#[command(about = "Bumps the minor version of the alpha and bravo build channels")]
struct Cli {
    /// Registry file. Relative paths start from the current directory.
    #[arg(short, long, default_value = STABLE_BUILDS_FILE)]
    file: PathBuf,

    /// What to do with a stored version that is not <major>.<minor>
    #[arg(long, value_enum, default_value_t = BumpPolicy::Strict)]
    on_invalid: BumpPolicy,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", get_version_with_signature());
        return Ok(());
    }

    let matches = cmd.get_matches();
    let cli: Cli = Cli::from_arg_matches(&matches)
        .map_err(|e| io::Error::other(format!("Failed to parse cli args: {}", e)))?;

    let cwd: String = env::current_dir()
        .map_err(|e| std::io::Error::other(format!("Failed to get current dir: {}", e)))?
        .into_os_string()
        .into_string()
        .map_err(|_| std::io::Error::other("Current directory contains invalid UTF-8"))?;

    let path = resolve_registry_path(&cwd, &cli.file);
    let policy = cli.on_invalid;
    let res = tokio::task::spawn_blocking(move || bump_registry_file(path, policy))
        .await
        .map_err(|e| io::Error::other(format!("Join error: {}", e)))?;

    if let Err(e) = res {
        Logger::new().log_message(LogLevel::Error, &e);
        return Err(io::Error::other(e));
    }

    Ok(())
}

/// Runs one read-bump-write cycle on the registry file and reports the result.
fn bump_registry_file(path: PathBuf, policy: BumpPolicy) -> Result<(), String> {
    let store = YamlFileStore::new(path);
    let registry = update::run(&store, policy)?;
    Logger::new().log_message(
        LogLevel::Success,
        &format!("{} updated: {}", store.label(), registry),
    );
    Ok(())
}
