//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, split_list};
use rstest_bdd_macros::given;
use taskboard::board::domain::ColumnId;

#[given("a fresh board")]
fn fresh_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = world.store.snapshot();
    eyre::ensure!(board.task_count() == 0, "expected an empty board");
    eyre::ensure!(board.columns().len() == 3, "expected three default columns");
    Ok(())
}

#[given(r#"column "{column}" holds tasks "{tasks}""#)]
fn column_holds_tasks(
    world: &mut BoardWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column.as_str());
    for content in split_list(&tasks) {
        let before = world.store.snapshot().task_count();
        let after = world.store.add_task(&column_id, &content);
        eyre::ensure!(
            after.task_count() == before + 1,
            "failed to add '{content}' to '{column}'"
        );
    }
    Ok(())
}
