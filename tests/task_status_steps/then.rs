//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use taskhub::task::{
    domain::{Task, TaskDomainError, TaskStatus},
    services::TaskServiceError,
};

fn change_result(
    world: &TaskStatusWorld,
) -> Result<&Result<Task, TaskServiceError>, eyre::Report> {
    world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task_id = world.task()?.id();
    let stored = run_async(world.service.get_task(task_id, world.owner))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the change fails because the task is completed")]
fn change_fails_for_completed_task(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    if !matches!(
        result,
        Err(TaskServiceError::Domain(
            TaskDomainError::CompletedTaskLocked { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected CompletedTaskLocked error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the change succeeds without modifying the task")]
fn change_is_a_no_op(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    let Ok(after) = result else {
        return Err(eyre::eyre!("expected success, got {result:?}"));
    };
    if after != world.task()? {
        return Err(eyre::eyre!("task changed: {after:?}"));
    }
    Ok(())
}

#[then("the change fails with an invalid status error")]
fn change_fails_with_invalid_status(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    if !matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::InvalidStatus(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}
