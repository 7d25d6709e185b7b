use kotoba_client::{ApiClient, StudyController};
use kotoba_config::KotobaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed client command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &KotobaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.client)?;
    tracing::debug!(server = client.base_url(), "dispatching client command");

    match command {
        Commands::Progress => commands::study::handle_progress(&client, flags).await,
        Commands::Sets { action } => commands::sets::handle(&action, &client, flags).await,
        Commands::Import(args) => commands::import::handle_import(&args, &client, flags).await,
        Commands::ImportRange(args) => commands::import::handle_range(&args, &client, flags).await,
        Commands::Add(args) => commands::import::handle_add(&args, &client, flags).await,
        Commands::Random(args) => commands::study::handle_random(&args, &client, flags).await,
        Commands::SearchAdd { term } => {
            commands::study::handle_search_add(&term, &client, flags).await
        }
        Commands::Mark { word_id, answer } => {
            let mut controller = StudyController::load(client).await?;
            commands::study::handle_mark(&word_id, answer, &mut controller, flags).await
        }
        Commands::Delete { word_id } => {
            let mut controller = StudyController::load(client).await?;
            commands::study::handle_delete(&word_id, &mut controller, flags).await
        }
        Commands::Shuffle => {
            let mut controller = StudyController::load(client).await?;
            commands::study::handle_shuffle(&mut controller, flags).await
        }
        Commands::Clear => {
            let mut controller = StudyController::load(client).await?;
            commands::study::handle_clear(&mut controller, flags).await
        }
        Commands::Serve(_) => unreachable!("serve is pre-dispatched in main"),
    }
}
