use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::providers::Serialized;
use sqlpath_config::SqlPathConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply `--manifests` on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SqlPathConfig> {
    load_dotenv()?;

    let mut figment = SqlPathConfig::figment();
    if let Some(dir) = &flags.manifests {
        figment = figment.merge(Serialized::default("manifests.dir", dir));
    }

    SqlPathConfig::from_figment(&figment).context("failed to load sqlpath configuration")
}

/// Load `.env` from the current directory or the nearest ancestor that has one.
fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(env_path) = find_dotenv(&cwd) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}
