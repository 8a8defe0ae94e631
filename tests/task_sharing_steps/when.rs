//! When steps for task sharing BDD scenarios.

use super::world::{SharingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the owner shares the task with "{email}""#)]
fn owner_shares_task(world: &mut SharingWorld, email: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let owner_id = world.owner()?.id();
    let result = run_async(world.service.share_with_email(task_id, owner_id, &email));
    world.last_grant = Some(result);
    Ok(())
}

#[when(r#"the owner revokes access for "{email}""#)]
fn owner_revokes_access(world: &mut SharingWorld, email: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let owner_id = world.owner()?.id();
    let user_id = world.user(&email)?.id();
    run_async(world.service.unshare(task_id, owner_id, user_id)).wrap_err("revoke access")?;
    Ok(())
}
