//! End-to-end service flows over the in-memory adapter.

use super::helpers::{SEEDED_TASKS, clock_at_year, empty_provider, runtime, seeded_provider};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tarefas::task::{
    domain::{Task, TaskId},
    services::{InMemoryServiceProvider, TaskServiceProvider},
};
use tokio::runtime::Runtime;

#[rstest]
fn add_then_fetch_round_trips(
    runtime: io::Result<Runtime>,
    empty_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = empty_provider.task_service().await?;
        let task = Task::new("Comprar pão", "padaria da esquina", &DefaultClock)?;

        assert!(service.add_task(&task).await?);

        let fetched = service.get_task_by_id(TaskId::new(1)).await?;
        assert_eq!(fetched.title(), "Comprar pão");
        assert_eq!(fetched.description(), "padaria da esquina");
        assert_eq!(fetched.created_at(), task.created_at());
        Ok(())
    })
}

#[rstest]
fn keys_continue_after_seeded_rows(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;
        let task = Task::new("nova", "tarefa", &DefaultClock)?;

        assert!(service.add_task(&task).await?);

        let all = service.get_all_tasks().await?;
        let ids: Vec<i32> = all.iter().map(|t| t.id().into_inner()).collect();
        assert_eq!(ids, (1..=SEEDED_TASKS + 1).collect::<Vec<_>>());
        Ok(())
    })
}

#[rstest]
fn update_replaces_fields(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;
        let mut task = service.get_task_by_id(TaskId::new(2)).await?;
        task.update_title("revisado")?.update_description("com detalhes")?;

        assert!(service.update_task(&task).await?);

        let fetched = service.get_task_by_id(TaskId::new(2)).await?;
        assert_eq!(fetched, task);
        Ok(())
    })
}

#[rstest]
fn update_from_fresh_task_keeps_creation_time(
    runtime: io::Result<Runtime>,
    empty_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = empty_provider.task_service().await?;
        let original = Task::new("a1", "b1", &clock_at_year(2020))?;
        assert!(service.add_task(&original).await?);

        let replacement = Task::new_unchecked(TaskId::new(1), "a2", "b2", &clock_at_year(2025));
        assert!(service.update_task(&replacement).await?);

        let fetched = service.get_task_by_id(TaskId::new(1)).await?;
        assert_eq!(fetched.title(), "a2");
        assert_eq!(fetched.description(), "b2");
        assert_eq!(fetched.created_at(), original.created_at());
        Ok(())
    })
}

#[rstest]
fn update_of_missing_task_is_false(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;
        let ghost = Task::new_unchecked(TaskId::new(77), "x", "y", &DefaultClock);

        assert!(!service.update_task(&ghost).await?);
        assert_eq!(service.get_all_tasks().await?.len(), 4);
        Ok(())
    })
}

#[rstest]
fn remove_then_fetch_yields_sentinel(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;

        assert!(service.remove_task(TaskId::new(1)).await?);

        let fetched = service.get_task_by_id(TaskId::new(1)).await?;
        assert!(fetched.is_not_found());
        assert_eq!(fetched, Task::not_found());
        Ok(())
    })
}

#[rstest]
fn remove_of_missing_task_errors(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;

        let result = service.remove_task(TaskId::new(99)).await;

        assert!(result.is_err());
        Ok(())
    })
}

#[rstest]
fn empty_store_lists_nothing(
    runtime: io::Result<Runtime>,
    empty_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = empty_provider.task_service().await?;
        assert!(service.get_all_tasks().await?.is_empty());
        Ok(())
    })
}

#[rstest]
fn find_tasks_filters_on_content(
    runtime: io::Result<Runtime>,
    seeded_provider: InMemoryServiceProvider,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    rt.block_on(async {
        let service = seeded_provider.task_service().await?;

        let even = service
            .find_tasks(|task: &Task| task.id().into_inner() % 2 == 0)
            .await?;

        let titles: Vec<&str> = even.iter().map(Task::title).collect();
        assert_eq!(titles, vec!["teste-2", "teste-4"]);
        Ok(())
    })
}
