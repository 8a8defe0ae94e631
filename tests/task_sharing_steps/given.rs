//! Given steps for task sharing BDD scenarios.

use super::world::{SharingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskhub::{
    naming::Title,
    task::{
        domain::{NewTask, Task},
        ports::TaskRepository,
    },
    task_list::{domain::TaskList, ports::TaskListRepository},
    user::{
        domain::{EmailAddress, User},
        ports::UserRepository,
    },
};

fn register(world: &mut SharingWorld, email: &str) -> Result<User, eyre::Report> {
    let user = User::new(EmailAddress::new(email)?, email, &world.clock)?;
    run_async(world.users.store(&user)).wrap_err("store scenario user")?;
    world.registered.insert(email.to_owned(), user.clone());
    Ok(user)
}

#[given(r#""{email}" owns a task titled "{title}""#)]
fn owner_with_task(
    world: &mut SharingWorld,
    email: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = register(world, &email)?;
    let list = TaskList::new(owner.id(), Title::new("Inbox")?, &world.clock);
    run_async(world.lists.store(&list)).wrap_err("store scenario list")?;
    let task = Task::new(&list, NewTask::new(Title::new(title)?), &world.clock);
    run_async(world.tasks.store(&task)).wrap_err("store scenario task")?;

    world.owner = Some(owner);
    world.task = Some(task);
    Ok(())
}

#[given(r#"a registered user "{email}""#)]
fn registered_user(world: &mut SharingWorld, email: String) -> Result<(), eyre::Report> {
    register(world, &email)?;
    Ok(())
}

#[given(r#"the task is shared with "{email}""#)]
fn task_already_shared(world: &mut SharingWorld, email: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let owner_id = world.owner()?.id();
    run_async(world.service.share_with_email(task_id, owner_id, &email))
        .wrap_err("share task in scenario setup")?;
    Ok(())
}
