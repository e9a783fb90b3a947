//! Connectivity clearing: threshold, idempotence, scoring, and the gradual
//! cascade that follows a clear.

use tui_drops::core::{clear_groups, Drop, DropId, Game, Well};
use tui_drops::types::{DropKind, SCORE_PER_DROP, SUB_ROWS};

fn settled(well: &mut Well, id: u32, x: i8, row: i8, kind: DropKind) {
    well.settle(Drop {
        id: DropId(id),
        x,
        y: i32::from(row) * SUB_ROWS,
        kind,
    });
}

#[test]
fn l_shape_of_four_clears() {
    let mut well = Well::new();
    // Connected only orthogonally: (0,0)-(1,0)-(1,1)-(2,1).
    settled(&mut well, 0, 0, 0, DropKind::Red);
    settled(&mut well, 1, 1, 0, DropKind::Red);
    settled(&mut well, 2, 1, 1, DropKind::Red);
    settled(&mut well, 3, 2, 1, DropKind::Red);

    assert_eq!(clear_groups(&mut well), 4);
    assert!(well.is_empty());
}

#[test]
fn three_same_kind_with_a_different_neighbor_does_not_clear() {
    let mut well = Well::new();
    settled(&mut well, 0, 0, 11, DropKind::Red);
    settled(&mut well, 1, 1, 11, DropKind::Red);
    settled(&mut well, 2, 2, 11, DropKind::Red);
    settled(&mut well, 3, 3, 11, DropKind::Blue);

    assert_eq!(clear_groups(&mut well), 0);
    assert_eq!(well.len(), 4);
}

#[test]
fn clearing_is_idempotent() {
    let mut well = Well::new();
    // A plus of five.
    settled(&mut well, 0, 2, 5, DropKind::Green);
    settled(&mut well, 1, 2, 4, DropKind::Green);
    settled(&mut well, 2, 2, 6, DropKind::Green);
    settled(&mut well, 3, 1, 5, DropKind::Green);
    settled(&mut well, 4, 3, 5, DropKind::Green);

    assert_eq!(clear_groups(&mut well), 5);
    assert_eq!(clear_groups(&mut well), 0);
    assert!(well.is_empty());
}

#[test]
fn two_disjoint_groups_clear_in_one_pass() {
    let mut well = Well::new();
    for x in 0..4 {
        settled(&mut well, x as u32, x, 11, DropKind::Red);
    }
    for row in 8..12 {
        settled(&mut well, 10 + row as u32, 5, row, DropKind::Blue);
    }

    assert_eq!(clear_groups(&mut well), 8);
    assert!(well.is_empty());
}

#[test]
fn score_counts_cleared_drops() {
    let mut well = Well::new();
    for x in 0..4 {
        settled(&mut well, x as u32, x, 11, DropKind::Red);
    }

    let mut game = Game::with_well(1, well);
    game.tick();

    assert_eq!(game.score(), 4 * SCORE_PER_DROP);
    assert!(game.well().is_empty());
    // The board was stable after the clear, so a new pair spawned.
    assert!(game.pair().is_some());
}

#[test]
fn cascade_after_a_clear_is_gradual() {
    let mut well = Well::new();
    for x in 0..4 {
        settled(&mut well, x as u32, x, 11, DropKind::Red);
    }
    // A survivor resting on the group.
    settled(&mut well, 9, 0, 10, DropKind::Blue);

    let mut game = Game::with_well(1, well);
    game.tick();

    // The group cleared, the survivor lost its support, and the spawn is
    // deferred until the cascade finishes.
    assert_eq!(game.score(), 4 * SCORE_PER_DROP);
    assert_eq!(game.well().len(), 1);
    assert!(game.pair().is_none());

    // One tick later the survivor has fallen a single sub-row, not a row.
    game.tick();
    assert_eq!(game.well().drops()[0].y, 10 * SUB_ROWS + 1);
    assert!(game.pair().is_none());

    // The cascade runs to the floor, then the next pair spawns.
    for _ in 0..15 {
        game.tick();
    }
    assert_eq!(game.well().drops()[0].y, 11 * SUB_ROWS);
    assert!(game.pair().is_some());
}
