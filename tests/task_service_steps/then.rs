//! Then steps for task service BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use tarefas::task::domain::{TaskDomainError, TaskId};

fn last_outcome(world: &TaskWorld) -> Result<bool, eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing service outcome in scenario world"))?;
    outcome
        .as_ref()
        .copied()
        .map_err(|err| eyre::eyre!("unexpected service error: {err}"))
}

#[then("the service reports success")]
fn service_reports_success(world: &TaskWorld) -> Result<(), eyre::Report> {
    if !last_outcome(world)? {
        return Err(eyre::eyre!("expected the commit to affect at least one row"));
    }
    Ok(())
}

#[then("the service reports failure")]
fn service_reports_failure(world: &TaskWorld) -> Result<(), eyre::Report> {
    if last_outcome(world)? {
        return Err(eyre::eyre!("expected the service to report failure"));
    }
    Ok(())
}

#[then(r#"task {id:i32} has title "{title}""#)]
fn task_has_title(world: &TaskWorld, id: i32, title: String) -> Result<(), eyre::Report> {
    let task = run_async(world.service.get_task_by_id(TaskId::new(id)))?;
    if task.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            task.title()
        ));
    }
    Ok(())
}

#[then("the task is rejected as having an empty title")]
fn task_rejected_for_empty_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    match world.last_validation_error {
        Some(TaskDomainError::EmptyTitle) => Ok(()),
        ref other => Err(eyre::eyre!("expected an empty title error, got {other:?}")),
    }
}

#[then("the not-found task is returned")]
fn not_found_task_returned(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_fetched
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing fetched task in scenario world"))?;
    if !task.is_not_found() {
        return Err(eyre::eyre!("expected the not-found task, got {task:?}"));
    }
    Ok(())
}

#[then("{count:usize} tasks remain")]
fn tasks_remain(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let remaining = run_async(world.service.get_all_tasks())?.len();
    if remaining != count {
        return Err(eyre::eyre!("expected {count} tasks, found {remaining}"));
    }
    Ok(())
}

#[then("task {id:i32} is no longer found")]
fn task_no_longer_found(world: &TaskWorld, id: i32) -> Result<(), eyre::Report> {
    let task = run_async(world.service.get_task_by_id(TaskId::new(id)))?;
    if !task.is_not_found() {
        return Err(eyre::eyre!("expected task {id} to be gone"));
    }
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskWorld) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task listing in scenario world"))?;
    if !listing.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", listing.len()));
    }
    Ok(())
}
