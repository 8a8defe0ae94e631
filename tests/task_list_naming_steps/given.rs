//! Given steps for task list naming BDD scenarios.

use super::world::{ListNamingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the user has a task list titled "{title}""#)]
fn existing_list(world: &mut ListNamingWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(world.owner, &title))
        .wrap_err("create list in scenario setup")?;
    if created.title().as_str() != title {
        return Err(eyre::eyre!(
            "setup list was renamed to {}",
            created.title()
        ));
    }
    Ok(())
}
