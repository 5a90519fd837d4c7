//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, split_list};
use rstest_bdd_macros::then;
use taskboard::{board::domain::ColumnId, drag::DragOutcome};

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let actual = world.contents_in(&column)?;
    let expected = split_list(&tasks);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column '{column}' to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = world.contents_in(&column)?;
    eyre::ensure!(actual.is_empty(), "expected '{column}' to be empty, found {actual:?}");
    Ok(())
}

#[then(r#"task "{task}" belongs to column "{column}""#)]
fn task_belongs_to(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let board = world.store.snapshot();
    let found = board
        .find_task(&task_id)
        .ok_or_else(|| eyre::eyre!("task '{task}' disappeared"))?;
    let expected = ColumnId::new(column.as_str());
    eyre::ensure!(
        found.column_id() == &expected,
        "task '{task}' points at {} instead of {column}",
        found.column_id()
    );
    let position = board
        .locate_task(&task_id)
        .ok_or_else(|| eyre::eyre!("task '{task}' is in no column"))?;
    eyre::ensure!(
        position.column_id == expected,
        "task '{task}' sits in {} instead of {column}",
        position.column_id
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no snapshot recorded before the action"))?;
    eyre::ensure!(
        **before == *world.store.snapshot(),
        "board changed unexpectedly"
    );
    Ok(())
}

#[then("nothing further is saved")]
fn nothing_saved(world: &BoardWorld) -> Result<(), eyre::Report> {
    let saves = world.storage.save_count();
    eyre::ensure!(
        saves == world.saves_before,
        "expected no writes, found {} new",
        saves.saturating_sub(world.saves_before)
    );
    Ok(())
}

#[then("the board was saved once more")]
fn saved_once(world: &BoardWorld) -> Result<(), eyre::Report> {
    let saves = world.storage.save_count();
    eyre::ensure!(
        saves == world.saves_before + 1,
        "expected exactly one write, found {}",
        saves.saturating_sub(world.saves_before)
    );
    Ok(())
}

#[then("the drag is committed")]
fn drag_committed(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(DragOutcome::Committed(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a committed drag, found {other:?}")),
    }
}

#[then("no drag is in progress")]
fn no_drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.session.is_active(), "drag session is still active");
    Ok(())
}

#[then(r#"task "{task}" is being dragged"#)]
fn task_being_dragged(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    eyre::ensure!(
        world.session.active_task() == Some(&task_id),
        "expected '{task}' to be the dragged task"
    );
    Ok(())
}
