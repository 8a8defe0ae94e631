//! Then steps for task sharing BDD scenarios.

use super::world::{SharingWorld, run_async};
use rstest_bdd_macros::then;
use taskhub::sharing::services::SharingServiceError;

fn access_of(world: &SharingWorld, email: &str) -> Result<bool, eyre::Report> {
    let task_id = world.task()?.id();
    let user_id = world.user(email)?.id();
    Ok(run_async(
        world
            .service
            .policy()
            .authority()
            .has_access(task_id, user_id),
    )?)
}

#[then(r#""{email}" has access to the task"#)]
fn user_has_access(world: &SharingWorld, email: String) -> Result<(), eyre::Report> {
    if !access_of(world, &email)? {
        return Err(eyre::eyre!("expected {email} to have access"));
    }
    Ok(())
}

#[then(r#""{email}" has no access to the task"#)]
fn user_has_no_access(world: &SharingWorld, email: String) -> Result<(), eyre::Report> {
    if access_of(world, &email)? {
        return Err(eyre::eyre!("expected {email} to have no access"));
    }
    Ok(())
}

#[then(r#"the grant is rejected with "{message}""#)]
fn grant_rejected(world: &SharingWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_grant
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing grant result"))?;

    let Err(SharingServiceError::Sharing(err)) = result else {
        return Err(eyre::eyre!("expected a sharing error, got {result:?}"));
    };
    if err.to_string() != message {
        return Err(eyre::eyre!("expected '{message}', got '{err}'"));
    }
    Ok(())
}
