//! Concurrent requests racing against the storage backstops.

use super::helpers::{App, app};
use eyre::ensure;
use rstest::rstest;
use taskhub::{
    sharing::services::{SharingError, SharingServiceError},
    task::services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_grants_store_a_single_record(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let helper = app.register("hank@example.com").await?;
    let list = app.lists.create(owner.id(), "Shared").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Split bill"))
        .await?;

    let (first, second) = tokio::join!(
        app.sharing
            .share_with_user(task.id(), owner.id(), helper.id()),
        app.sharing
            .share_with_user(task.id(), owner.id(), helper.id()),
    );

    let outcomes = [first, second];
    let granted = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let duplicates = outcomes
        .iter()
        .filter(|outcome| {
            matches!(
                outcome,
                Err(SharingServiceError::Sharing(SharingError::AlreadyShared(_)))
            )
        })
        .count();
    ensure!(
        granted == 1 && duplicates == 1,
        "exactly one grant should win: {outcomes:?}"
    );

    let collaborators = app.sharing.collaborators(task.id(), owner.id()).await?;
    ensure!(collaborators.len() == 1, "one grant should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_list_creation_never_duplicates_titles(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;

    let (first, second) = tokio::join!(
        app.lists.create(owner.id(), "Work"),
        app.lists.create(owner.id(), "Work"),
    );

    let lists = app.lists.list_for_owner(owner.id()).await?;
    let mut keys: Vec<_> = lists
        .iter()
        .map(|list| list.title().uniqueness_key())
        .collect();
    keys.sort_unstable();
    keys.dedup();
    ensure!(keys.len() == lists.len(), "stored titles must be unique");
    ensure!(
        first.is_ok() || second.is_ok(),
        "at least one creation should succeed"
    );
    Ok(())
}
