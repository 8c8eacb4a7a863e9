//! Chain resolution and scoring tests

use puyo::core::chain::{erasable_groups, find_groups};
use puyo::core::scoring::calculate_score;
use puyo::core::{Field, Grid};
use puyo::types::Cell;

fn field_from(rows: &[&str]) -> Field {
    let mut field = Field::new(14, 6);
    *field.grid_mut() = Grid::from_rows(14, 6, rows);
    field
}

#[test]
fn test_simple_four_erase_scores_forty() {
    let mut field = Field::new(14, 6);
    for (x, y) in [(0, 5), (1, 5), (0, 6), (1, 6)] {
        field.grid_mut().set(x, y, Cell::Red).unwrap();
    }

    let info = field.resolve_chain_step();
    assert!(info.erased);
    assert_eq!(info.chain_step, 1);
    assert_eq!(info.total_erased, 4);
    assert_eq!(info.group_count(), 1);
    assert_eq!(info.distinct_colors(), 1);
    for (x, y) in [(0, 5), (1, 5), (0, 6), (1, 6)] {
        assert_eq!(field.grid().get(x, y), Ok(Cell::Empty));
    }
    assert_eq!(field.chain_step(), 1);
    assert_eq!(field.score(), 40);
}

#[test]
fn test_group_of_three_never_erases() {
    let mut field = field_from(&["RR....", "RGGG.."]);
    let info = field.resolve_chain_step();
    assert!(!info.erased);
    assert_eq!(field.score(), 0);
    assert_eq!(field.grid().occupied_count(), 6);
}

#[test]
fn test_two_step_chain() {
    let mut field = field_from(&[
        "B.....", //
        "R.....", //
        "RB....", //
        "RRBB..", //
    ]);

    let first = field.resolve_chain_step();
    assert!(first.erased);
    assert_eq!(first.chain_step, 1);
    assert_eq!(first.colors.as_slice(), &[Cell::Red]);
    assert_eq!(first.score_delta(), 40);
    assert_eq!(field.grid().to_rows()[13], "BBBB..");

    let second = field.resolve_chain_step();
    assert!(second.erased);
    assert_eq!(second.chain_step, 2);
    assert_eq!(second.score.chain_power, 8);
    assert_eq!(second.score_delta(), 4 * 10 * 8);

    let third = field.resolve_chain_step();
    assert!(!third.erased);
    assert_eq!(field.chain_step(), 2);
    assert_eq!(field.score(), 40 + 320);
    assert_eq!(field.grid().occupied_count(), 0);
}

#[test]
fn test_resolve_chain_summarizes_every_step() {
    let mut field = field_from(&[
        "B.....", //
        "R.....", //
        "RB....", //
        "RRBB..", //
    ]);
    let summary = field.resolve_chain();
    assert_eq!(summary.chain_length, 2);
    assert_eq!(summary.erased_total, 8);
    assert_eq!(summary.score_gained, 360);
    assert_eq!(field.score(), 360);
}

#[test]
fn test_simultaneous_groups_are_one_step() {
    let mut field = field_from(&["RRGG..", "RRGGY."]);
    let info = field.resolve_chain_step();
    assert!(info.erased);
    assert_eq!(info.chain_step, 1);
    assert_eq!(info.group_count(), 2);
    assert_eq!(info.distinct_colors(), 2);
    // 8 cells, color bonus 3 for two colors
    assert_eq!(info.score_delta(), 8 * 10 * 3);
    assert_eq!(field.grid().to_rows()[13], "....Y.");
}

#[test]
fn test_large_group_earns_group_bonus() {
    let mut field = field_from(&["YYYYYY"]);
    let info = field.resolve_chain_step();
    assert_eq!(info.group_sizes, vec![6]);
    assert_eq!(info.score.group_bonus, 3);
    assert_eq!(info.score_delta(), 6 * 10 * 3);
}

#[test]
fn test_garbage_is_collateral_only() {
    let mut field = field_from(&[
        "OO....", //
        "GGGGO.", //
        "OOOO.O", //
    ]);
    let info = field.resolve_chain_step();
    assert!(info.erased);
    assert_eq!(info.total_erased, 4);
    // Two above, four below and one to the right of the greens.
    assert_eq!(info.garbage_cleared.len(), 7);
    assert_eq!(field.grid().to_rows()[13], ".....O");
    assert_eq!(field.score(), 40);
}

#[test]
fn test_garbage_never_groups() {
    let grid = Grid::from_rows(14, 6, &["OOOOOO", "OOOOOO"]);
    assert!(find_groups(&grid).is_empty());
    assert!(erasable_groups(&grid).is_empty());
}

#[test]
fn test_quiet_step_is_idempotent() {
    let mut field = field_from(&["RGBY..", "YRGB.."]);
    let grid_before = field.grid().clone();

    for _ in 0..3 {
        let info = field.resolve_chain_step();
        assert!(!info.erased);
        assert_eq!(field.grid(), &grid_before);
        assert_eq!(field.score(), 0);
    }
}

#[test]
fn test_lock_resets_chain_step_for_next_turn() {
    let mut field = field_from(&["RRRR.."]);
    field.resolve_chain();
    assert_eq!(field.chain_step(), 1);

    field.start();
    field.lock();
    assert_eq!(field.chain_step(), 0);
}

#[test]
fn test_score_formula_floor_is_one() {
    assert_eq!(calculate_score(4, 1, 1, &[4]).multiplier, 1);
    assert_eq!(calculate_score(4, 1, 1, &[4]).total, 40);
}

#[test]
fn test_death_cell_after_resolution() {
    let mut field = Field::new(14, 6);
    field.start();
    let (dx, dy) = field.grid().death_cell();
    field.grid_mut().set(dx, dy, Cell::Garbage).unwrap();

    // Lock somewhere else.
    while field.move_left() {}
    field.lock_and_resolve();
    assert!(field.is_game_over());
    assert!(field.snapshot().game_over);
}
