use kotoba_client::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetsCommands;
use crate::commands::read_input;
use crate::output::output;

/// Handle `kotoba sets`.
pub async fn handle(
    action: &SetsCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SetsCommands::List { threshold: None } => output(&client.list_sets().await?, flags.format),
        SetsCommands::List {
            threshold: Some(threshold),
        } => output(&client.set_statistics(*threshold).await?, flags.format),
        SetsCommands::Search { term } => output(&client.search_sets(term).await?, flags.format),
        SetsCommands::Register { key, file } => {
            let content = read_input(file)?;
            output(&client.register_set(key, &content).await?, flags.format)
        }
    }
}
