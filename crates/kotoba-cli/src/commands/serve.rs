use anyhow::Context;

use kotoba_config::KotobaConfig;
use kotoba_db::service::KotobaService;
use kotoba_engine::{SetParser, VocabEngine};

use crate::cli::root_commands::ServeArgs;

/// Handle `kotoba serve`.
pub async fn handle(args: &ServeArgs, mut config: KotobaConfig) -> anyhow::Result<()> {
    if let Some(addr) = &args.addr {
        config.server.addr.clone_from(addr);
    }

    let service = KotobaService::from_config(&config.database)
        .await
        .context("failed to open kotoba database")?;
    let engine = VocabEngine::new(service, SetParser::from_config(&config.parser));

    kotoba_server::serve(engine, &config.server)
        .await
        .with_context(|| format!("server on {} failed", config.server.addr))
}
