//! Then steps for task list naming BDD scenarios.

use super::world::ListNamingWorld;
use rstest_bdd_macros::then;

#[then(r#"the new list is titled "{title}""#)]
fn new_list_title(world: &ListNamingWorld, title: String) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing list creation result"))?;
    let Ok(list) = result else {
        return Err(eyre::eyre!("expected list creation to succeed, got {result:?}"));
    };
    if list.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title {title}, found {}",
            list.title()
        ));
    }
    Ok(())
}
