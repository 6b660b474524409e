//! Board tests - collision, movement, landing, line clears, game over

use blocks::core::{Board, DrawLog, Piece, SequenceSource};
use blocks::types::{Angle, BlockType, FrameInput, BOARD_HEIGHT, BOARD_WIDTH, MAX_LANDING_COUNT};

/// Board handing out pieces in the given order, cycling.
fn scripted(kinds: &[BlockType]) -> Board<SequenceSource> {
    Board::new(SequenceSource::new(
        kinds
            .iter()
            .map(|k| k.sprite_index() as u32)
            .collect::<Vec<_>>(),
    ))
}

fn started(kinds: &[BlockType]) -> Board<SequenceSource> {
    let mut board = scripted(kinds);
    board.update(&FrameInput::idle());
    board
}

fn fill_row(board: &mut Board<SequenceSource>, y: i32, gap: Option<i32>) {
    for x in 0..BOARD_WIDTH as i32 {
        if Some(x) != gap {
            board.set(x, y, Some(BlockType::L));
        }
    }
}

fn snapshot(board: &Board<SequenceSource>) -> Vec<Vec<Option<BlockType>>> {
    board.rows().iter().map(|r| r.to_vec()).collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::with_seed(1);
    assert!(board.active_piece().is_none());
    assert!(board.next_piece().is_none());
    assert!(!board.is_game_over());
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.cell(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_cell_out_of_bounds() {
    let mut board = Board::with_seed(1);
    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, BOARD_HEIGHT as i32), None);
    assert!(!board.set(BOARD_WIDTH as i32, 0, Some(BlockType::T)));
}

#[test]
fn test_o_piece_walks_to_right_wall() {
    let mut board = started(&[BlockType::O]);
    assert_eq!(board.piece_position(), (4, 0));

    assert!(board.move_right());
    assert_eq!(board.piece_position(), (5, 0));

    while board.move_right() {}
    assert_eq!(board.piece_position(), (8, 0));
    assert!(board.is_blocked(10, 0));
    assert!(!board.move_right());
    assert_eq!(board.piece_position(), (8, 0));
}

#[test]
fn test_left_wall() {
    let mut board = started(&[BlockType::T]);
    while board.move_left() {}
    assert_eq!(board.piece_position(), (0, 0));
}

#[test]
fn test_piece_in_open_space_never_collides() {
    let board = started(&[BlockType::T]);
    for angle in Angle::ALL {
        for y in -2..15 {
            for x in 1..7 {
                assert!(!board.collides(x, y, angle), "({x}, {y}) {angle:?}");
            }
        }
    }
}

#[test]
fn test_collides_iff_a_cell_is_blocked() {
    let mut board = started(&[BlockType::T]);
    board.set(4, 10, Some(BlockType::Z));

    // T at Deg0 fills (1,0), (0,1), (1,1), (2,1) relative to the anchor.
    assert!(board.collides(3, 10, Angle::Deg0));
    assert!(board.collides(4, 9, Angle::Deg0));
    // The bounding square covers (4, 10) only through its empty corner.
    assert!(!board.collides(4, 10, Angle::Deg0));
}

#[test]
fn test_blocked_moves_leave_state_untouched() {
    let mut board = started(&[BlockType::O]);
    board.set(6, 0, Some(BlockType::S));
    board.set(4, 2, Some(BlockType::S));

    assert!(!board.move_right());
    assert!(!board.drop_piece());
    assert!(!board.can_drop());
    assert_eq!(board.piece_position(), (4, 0));
}

#[test]
fn test_can_drop_is_pure() {
    let board = started(&[BlockType::I]);
    let before = board.piece_position();
    assert!(board.can_drop());
    assert_eq!(board.piece_position(), before);
}

#[test]
fn test_flush_single_row() {
    let mut board = scripted(&[BlockType::O]);
    board.set(3, 0, Some(BlockType::T));
    board.set(7, 11, Some(BlockType::J));
    fill_row(&mut board, 12, None);
    board.set(2, 13, Some(BlockType::Z));
    board.set(8, 19, Some(BlockType::S));
    let before = snapshot(&board);

    let cleared = board.flush();
    assert_eq!(cleared.as_slice(), &[12]);

    let after = snapshot(&board);
    assert!(after[0].iter().all(|c| c.is_none()));
    for y in 1..=12 {
        assert_eq!(after[y], before[y - 1], "row {y}");
    }
    for y in 13..BOARD_HEIGHT {
        assert_eq!(after[y], before[y], "row {y}");
    }
}

#[test]
fn test_flush_non_adjacent_rows() {
    let mut board = scripted(&[BlockType::O]);
    fill_row(&mut board, 15, None);
    fill_row(&mut board, 17, None);
    board.set(0, 16, Some(BlockType::I));
    board.set(0, 14, Some(BlockType::T));

    let cleared = board.flush();

    assert_eq!(cleared.as_slice(), &[15, 17]);
    assert_eq!(board.cell(0, 17), Some(Some(BlockType::I)));
    assert_eq!(board.cell(0, 16), Some(Some(BlockType::T)));
    assert_eq!(board.cell(0, 15), Some(None));
}

#[test]
fn test_flush_ignores_rows_with_gaps() {
    let mut board = scripted(&[BlockType::O]);
    fill_row(&mut board, 19, Some(3));
    let before = snapshot(&board);
    assert!(board.flush().is_empty());
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_landing_locks_after_max_landing_count() {
    let mut board = started(&[BlockType::O, BlockType::T, BlockType::S]);
    while board.drop_piece() {}
    let next = board.next_piece().unwrap();

    for frame in 1..MAX_LANDING_COUNT {
        board.update(&FrameInput::idle());
        assert_eq!(board.landing_count(), frame);
        assert_eq!(board.active_kind(), Some(BlockType::O));
    }

    board.update(&FrameInput::idle());
    assert!(std::ptr::eq(board.active_piece().unwrap(), next));
    assert_eq!(board.landing_count(), 0);
    assert_eq!(board.piece_angle(), Angle::Deg0);
    assert_eq!(board.piece_position(), Piece::of(BlockType::T).initial_position());
    assert_eq!(board.next_piece().map(Piece::block_type), Some(BlockType::S));

    let stamped = board.rows().iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(stamped, 4);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(board.cell(x, y), Some(Some(BlockType::O)));
    }
}

#[test]
fn test_lock_fills_gap_and_clears_bottom_row() {
    // I stood up in column 9 drops into a one-cell gap at the right end of row 19.
    let mut board = started(&[BlockType::I, BlockType::O]);
    fill_row(&mut board, 19, Some(9));
    board.set(0, 18, Some(BlockType::Z));
    board.set(5, 10, Some(BlockType::T));

    assert!(board.rotate());
    while board.move_right() {}
    // Vertical I occupies column anchor+2.
    assert_eq!(board.piece_position().0, 7);
    while board.drop_piece() {}
    assert_eq!(board.piece_position().1, 16);

    for _ in 0..MAX_LANDING_COUNT {
        board.update(&FrameInput::idle());
    }

    // Row 19 cleared; everything above moved down one.
    assert_eq!(board.cell(0, 19), Some(Some(BlockType::Z)));
    assert_eq!(board.cell(9, 19), Some(Some(BlockType::I)));
    assert_eq!(board.cell(9, 18), Some(Some(BlockType::I)));
    assert_eq!(board.cell(9, 17), Some(Some(BlockType::I)));
    assert_eq!(board.cell(9, 16), Some(None));
    assert_eq!(board.cell(5, 11), Some(Some(BlockType::T)));
    assert_eq!(board.cell(5, 10), Some(None));
    assert!((0..BOARD_WIDTH as i32).all(|x| board.cell(x, 0) == Some(None)));
    assert_eq!(board.active_kind(), Some(BlockType::O));
}

#[test]
fn test_landing_count_survives_sliding_off_a_ledge() {
    // O rests on a one-cell ledge, slides right off it and keeps falling
    // without its landing count being cleared.
    let mut board = started(&[BlockType::O]);
    board.set(4, 10, Some(BlockType::J));
    while board.drop_piece() {}
    assert_eq!(board.piece_position(), (4, 8));

    for _ in 0..20 {
        board.update(&FrameInput::idle());
    }
    assert_eq!(board.landing_count(), 20);

    board.update(&FrameInput {
        right_held: 1,
        ..FrameInput::idle()
    });
    board.update(&FrameInput {
        right_held: 2,
        ..FrameInput::idle()
    });
    assert_eq!(board.piece_position().0, 5);
    assert!(board.can_drop());
    assert_eq!(board.landing_count(), 20);

    while board.drop_piece() {}
    board.update(&FrameInput::idle());
    assert_eq!(board.landing_count(), 21);
}

#[test]
fn test_spawn_collision_ends_game_and_freezes_board() {
    let mut board = started(&[BlockType::O]);
    // Fill everything below row 1 except one column so nothing clears.
    for y in 2..BOARD_HEIGHT as i32 {
        fill_row(&mut board, y, Some(0));
    }
    for _ in 0..MAX_LANDING_COUNT {
        board.update(&FrameInput::idle());
    }
    assert!(board.is_game_over());

    let frozen = snapshot(&board);
    let position = board.piece_position();
    let tick = board.tick_counter();
    let landing = board.landing_count();
    let held = FrameInput {
        right_held: 1,
        left_held: 1,
        down_held: 1,
        rotate_pressed: true,
    };
    for _ in 0..200 {
        board.update(&held);
    }

    assert_eq!(snapshot(&board), frozen);
    assert_eq!(board.piece_position(), position);
    assert_eq!(board.tick_counter(), tick);
    assert_eq!(board.landing_count(), landing);
}

#[test]
fn test_draw_after_game_over_still_renders() {
    let mut board = started(&[BlockType::O]);
    for y in 2..BOARD_HEIGHT as i32 {
        fill_row(&mut board, y, Some(0));
    }
    for _ in 0..MAX_LANDING_COUNT {
        board.update(&FrameInput::idle());
    }
    assert!(board.is_game_over());

    let mut log = DrawLog::new();
    board.draw(&mut log);
    assert_eq!(log.frames, 1);
    // Active O, stamped O, 18 rows of 9 blocks, preview O.
    assert_eq!(log.blocks.len(), 4 + 4 + 18 * 9 + 4);
}
