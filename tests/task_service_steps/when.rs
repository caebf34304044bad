//! When steps for task service BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use tarefas::task::domain::{Task, TaskId};

#[when(r#"a task titled "{title}" described "{description}" is added"#)]
fn add_task(world: &mut TaskWorld, title: String, description: String) {
    match Task::new(title, description, &world.clock) {
        Ok(task) => world.last_outcome = Some(run_async(world.service.add_task(&task))),
        Err(err) => world.last_validation_error = Some(err),
    }
}

#[when("task {id:i32} is requested")]
fn request_task(world: &mut TaskWorld, id: i32) -> Result<(), eyre::Report> {
    let task = run_async(world.service.get_task_by_id(TaskId::new(id)))?;
    world.last_fetched = Some(task);
    Ok(())
}

#[when(r#"task {id:i32} is updated with title "{title}" and description "{description}""#)]
fn update_task(world: &mut TaskWorld, id: i32, title: String, description: String) {
    let task = Task::new_unchecked(TaskId::new(id), title, description, &world.clock);
    world.last_outcome = Some(run_async(world.service.update_task(&task)));
}

#[when("task {id:i32} is removed")]
fn remove_task(world: &mut TaskWorld, id: i32) {
    world.last_outcome = Some(run_async(world.service.remove_task(TaskId::new(id))));
}

#[when("all tasks are listed")]
fn list_tasks(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world.last_listing = Some(run_async(world.service.get_all_tasks())?);
    Ok(())
}
