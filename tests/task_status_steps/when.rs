//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the status is changed to "{status}""#)]
fn change_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let result = run_async(world.service.change_status(task_id, world.owner, &status));
    world.last_change_result = Some(result);
    Ok(())
}
