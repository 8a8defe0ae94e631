//! When steps for task list naming BDD scenarios.

use super::world::{ListNamingWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the user creates a task list titled "{title}""#)]
fn create_list(world: &mut ListNamingWorld, title: String) {
    let result = run_async(world.service.create(world.owner, &title));
    world.last_created = Some(result);
}
