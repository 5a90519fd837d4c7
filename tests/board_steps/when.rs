//! When steps for board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use taskboard::{
    board::domain::{ColumnId, TaskId},
    drag::DragEvent,
};

#[when(r#"the task "{content}" is added to column "{column}""#)]
fn add_task(world: &mut BoardWorld, content: String, column: String) {
    world.mark_before();
    world.store.add_task(&ColumnId::new(column), &content);
}

#[when(r#"the task with id "{id}" is deleted"#)]
fn delete_task_by_id(world: &mut BoardWorld, id: String) {
    world.mark_before();
    world.store.delete_task(&TaskId::new(id));
}

#[when(r#"task "{task}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    world.mark_before();
    world.store.delete_task(&task_id);
    Ok(())
}

#[when(r#"task "{task}" is moved to column "{column}" at position {index:usize}"#)]
fn move_task(
    world: &mut BoardWorld,
    task: String,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    world.mark_before();
    world
        .store
        .move_task(&task_id, &ColumnId::new(column), index);
    Ok(())
}

#[when("the board is reopened from storage")]
fn reopen_board(world: &mut BoardWorld) {
    world.reopen();
}

#[when(r#"task "{task}" is picked up"#)]
fn pick_up(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    world.mark_before();
    let outcome = world
        .session
        .handle(DragEvent::start(task_id), &mut world.store);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{task}" is dragged over column "{column}""#)]
fn drag_over(world: &mut BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let outcome = world
        .session
        .handle(DragEvent::over(task_id, column), &mut world.store);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{task}" is dropped on column "{column}""#)]
fn drop_on_column(
    world: &mut BoardWorld,
    task: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let outcome = world
        .session
        .handle(DragEvent::drop_on(task_id, column, None), &mut world.store);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{task}" is dropped on task "{sibling}" in column "{column}""#)]
fn drop_on_sibling(
    world: &mut BoardWorld,
    task: String,
    sibling: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let sibling_id = world.task_id(&sibling)?;
    let outcome = world.session.handle(
        DragEvent::drop_on(task_id, column, Some(sibling_id)),
        &mut world.store,
    );
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{task}" is released outside any column"#)]
fn release_outside(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let outcome = world
        .session
        .handle(DragEvent::drop_outside(task_id), &mut world.store);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut BoardWorld) {
    let outcome = world.session.handle(DragEvent::Cancel, &mut world.store);
    world.last_outcome = Some(outcome);
}
