//! Title disambiguation through the public services and free function.

use std::collections::HashSet;
use std::convert::Infallible;

use super::helpers::{App, app};
use eyre::ensure;
use rstest::rstest;
use taskhub::naming::{TitleKind, resolve_unique_title};

#[rstest]
#[case(&["Work"], "Work", "Work (1)")]
#[case(&["Work", "Work (1)"], "Work", "Work (2)")]
#[case(&["Work", "Work (2)"], "Work", "Work (1)")]
#[case(&["Work"], "Personal", "Personal")]
#[case(&[], "Work", "Work")]
#[tokio::test(flavor = "multi_thread")]
async fn resolution_is_deterministic(
    #[case] taken: &[&str],
    #[case] desired: &str,
    #[case] expected: &str,
) -> eyre::Result<()> {
    let existing: HashSet<String> = taken.iter().map(|title| (*title).to_owned()).collect();

    let resolved = resolve_unique_title(TitleKind::TaskList, desired, |candidate| {
        let exists = existing.contains(&candidate);
        async move { Ok::<_, Infallible>(exists) }
    })
    .await?;

    ensure!(resolved == expected, "expected {expected}, got {resolved}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_work_list_becomes_work_one(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;

    let first = app.lists.create(owner.id(), "Work").await?;
    let second = app.lists.create(owner.id(), "Work").await?;

    ensure!(first.title().as_str() == "Work", "got {}", first.title());
    ensure!(second.title().as_str() == "Work (1)", "got {}", second.title());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lists_and_tags_resolve_independently(app: App) -> eyre::Result<()> {
    let owner = app.register("olga@example.com").await?;

    app.lists.create(owner.id(), "Errands").await?;
    let tag = app.tags.create(owner.id(), "Errands").await?;

    ensure!(tag.name().as_str() == "Errands", "got {}", tag.name());
    Ok(())
}
