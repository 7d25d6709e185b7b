use kotoba_client::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddArgs, ImportArgs, ImportRangeArgs};
use crate::commands::read_input;
use crate::output::output;

/// Handle `kotoba import`.
pub async fn handle_import(
    args: &ImportArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = client.import_set(&args.key, !args.no_dedup).await?;
    output(&response, flags.format)
}

/// Handle `kotoba import-range`.
pub async fn handle_range(
    args: &ImportRangeArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = client
        .import_range(args.start, args.end, !args.no_dedup)
        .await?;
    output(&response, flags.format)
}

/// Handle `kotoba add`.
pub async fn handle_add(
    args: &AddArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_input(&args.file)?;
    let response = client.add_words(&text, !args.no_dedup).await?;
    output(&response, flags.format)
}
