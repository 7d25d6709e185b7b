use kotoba_client::{ApiClient, StudyController};
use kotoba_core::requests::RandomSetRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{Answer, RandomArgs};
use crate::output::{output, output_progress, output_random};

/// Handle `kotoba progress`.
pub async fn handle_progress(client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_progress(&client.progress().await?, flags.format)
}

/// Handle `kotoba random`.
pub async fn handle_random(
    args: &RandomArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = RandomSetRequest {
        count: Some(args.count),
        start: args.start,
        end: args.end,
        max_attempts: args.max_attempts,
        max_accuracy: args.max_accuracy,
    };
    let response = client.random_set(&request).await?;
    tracing::info!(
        pool_size = response.pool_size,
        sampled = response.sampled,
        "{}",
        response.message
    );
    output_random(&response, flags.format)
}

/// Handle `kotoba search-add`.
pub async fn handle_search_add(
    term: &str,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&client.search_and_add(term).await?, flags.format)
}

/// Handle `kotoba mark`.
pub async fn handle_mark(
    word_id: &str,
    answer: Answer,
    controller: &mut StudyController,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = controller.mark(word_id, answer.into()).await?;
    output(&response, flags.format)
}

/// Handle `kotoba delete`.
pub async fn handle_delete(
    word_id: &str,
    controller: &mut StudyController,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&controller.delete(word_id).await?, flags.format)
}

/// Handle `kotoba shuffle`.
pub async fn handle_shuffle(
    controller: &mut StudyController,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    controller.shuffle().await?;
    output_progress(controller.state().progress(), flags.format)
}

/// Handle `kotoba clear`.
pub async fn handle_clear(
    controller: &mut StudyController,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&controller.clear().await?, flags.format)
}
