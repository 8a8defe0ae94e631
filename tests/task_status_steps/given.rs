//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskhub::{
    naming::Title,
    task::{domain::TaskStatus, services::CreateTaskRequest},
    task_list::{domain::TaskList, ports::TaskListRepository},
};

#[given(r#"a task in status "{status}""#)]
fn task_in_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;

    let list = TaskList::new(world.owner, Title::new("Chores")?, &DefaultClock);
    run_async(world.lists.store(&list)).wrap_err("store scenario list")?;
    let created = run_async(
        world
            .service
            .create_task(world.owner, CreateTaskRequest::new(list.id(), "Clean windows")),
    )
    .wrap_err("create scenario task")?;
    let task = run_async(
        world
            .service
            .change_status_to(created.id(), world.owner, target),
    )
    .wrap_err("move scenario task to its starting status")?;

    world.task_before_change = Some(task);
    Ok(())
}
