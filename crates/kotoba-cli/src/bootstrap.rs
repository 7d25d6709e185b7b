use anyhow::Context;

use kotoba_config::KotobaConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (if present) and the layered configuration, then apply flag
/// overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KotobaConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }

    let mut config = KotobaConfig::load().context("failed to load kotoba configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut KotobaConfig, flags: &GlobalFlags) {
    if let Some(server) = &flags.server {
        config.client.base_url.clone_from(server);
    }
}
