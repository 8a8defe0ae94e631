//! End-to-end collaboration flows across every service.

use super::helpers::{App, app};
use eyre::ensure;
use rstest::rstest;
use taskhub::{
    sharing::services::AccessError,
    task::{
        domain::{TaskOrdering, TaskStatus},
        services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collaborator_works_on_shared_task(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let helper = app.register("hank@example.com").await?;
    let list = app.lists.create(owner.id(), "Move house").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Pack books"))
        .await?;

    app.sharing
        .share_with_email(task.id(), owner.id(), "hank@example.com")
        .await?;

    app.tasks
        .update_task(
            task.id(),
            helper.id(),
            UpdateTaskRequest::new().with_description("Three boxes so far"),
        )
        .await?;
    app.tasks
        .change_status(task.id(), helper.id(), "in_progress")
        .await?;
    app.comments
        .add_comment(task.id(), helper.id(), "Need more tape")
        .await?;

    let seen_by_owner = app.tasks.get_task(task.id(), owner.id()).await?;
    ensure!(
        seen_by_owner.status() == TaskStatus::InProgress,
        "owner should see the collaborator's progress"
    );
    ensure!(
        seen_by_owner.description() == Some("Three boxes so far"),
        "owner should see the new description"
    );
    let thread = app.comments.list_comments(task.id(), owner.id()).await?;
    ensure!(thread.len() == 1, "owner should see the comment");

    let shared = app
        .tasks
        .list_shared_with(helper.id(), TaskOrdering::default())
        .await?;
    ensure!(
        shared.iter().map(|found| found.id()).eq([task.id()]),
        "task should be listed as shared"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revoked_collaborator_loses_access(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let helper = app.register("hank@example.com").await?;
    let list = app.lists.create(owner.id(), "Garden").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Plant tulips"))
        .await?;
    app.sharing
        .share_with_user(task.id(), owner.id(), helper.id())
        .await?;

    app.sharing.unshare(task.id(), owner.id(), helper.id()).await?;

    let result = app.tasks.get_task(task.id(), helper.id()).await;
    ensure!(
        matches!(
            result,
            Err(TaskServiceError::Access(AccessError::AccessDenied { .. }))
        ),
        "unexpected result: {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_user_revokes_their_access(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let helper = app.register("hank@example.com").await?;
    let list = app.lists.create(owner.id(), "Garden").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Plant tulips"))
        .await?;
    app.sharing
        .share_with_user(task.id(), owner.id(), helper.id())
        .await?;

    app.users.delete(helper.id()).await?;

    let collaborators = app.sharing.collaborators(task.id(), owner.id()).await?;
    ensure!(collaborators.is_empty(), "no collaborators should remain");
    ensure!(
        !app.sharing
            .policy()
            .authority()
            .has_access(task.id(), helper.id())
            .await?,
        "deleted user must not keep access"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_list_removes_shared_tasks(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let helper = app.register("hank@example.com").await?;
    let list = app.lists.create(owner.id(), "Holiday").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Book flights"))
        .await?;
    app.sharing
        .share_with_user(task.id(), owner.id(), helper.id())
        .await?;
    app.comments
        .add_comment(task.id(), helper.id(), "Window seat please")
        .await?;

    app.lists.delete(list.id(), owner.id()).await?;

    let lookup = app.tasks.get_task(task.id(), owner.id()).await;
    ensure!(
        matches!(
            lookup,
            Err(TaskServiceError::Access(AccessError::TaskNotFound(_)))
        ),
        "task should be gone: {lookup:?}"
    );
    let shared = app
        .tasks
        .list_shared_with(helper.id(), TaskOrdering::default())
        .await?;
    ensure!(shared.is_empty(), "no dangling grants should remain");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_tag_keeps_tagged_tasks(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;
    let list = app.lists.create(owner.id(), "Office").await?;
    let task = app
        .tasks
        .create_task(owner.id(), CreateTaskRequest::new(list.id(), "Order chairs"))
        .await?;
    let tag = app.tags.create(owner.id(), "purchasing").await?;
    app.tags
        .attach_to_task(task.id(), tag.id(), owner.id())
        .await?;

    app.tags.delete(tag.id(), owner.id()).await?;

    let stored = app.tasks.get_task(task.id(), owner.id()).await?;
    ensure!(stored.tag_id().is_none(), "tag reference should be cleared");
    Ok(())
}
