//! Tests for the engine's state-transition contract.

use tictac_engine::rules::LINES;
use tictac_engine::{
    GameEngine, GameSnapshot, MoveError, Player, Position, Square, Winner,
};

fn play(engine: &GameEngine, moves: &[i64]) -> GameSnapshot {
    let mut last = engine.current_state();
    for &index in moves {
        last = engine
            .submit_move(index)
            .unwrap_or_else(|e| panic!("move {} rejected: {}", index, e));
    }
    last
}

fn symbols(snapshot: &GameSnapshot) -> Vec<&'static str> {
    snapshot.board.squares().iter().map(|s| s.symbol()).collect()
}

fn assert_fresh(snapshot: &GameSnapshot) {
    assert!(snapshot.board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(snapshot.current_player, Player::X);
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.winner, None);
}

#[test]
fn test_new_game_and_reset_are_fresh() {
    let engine = GameEngine::new();
    assert_fresh(&engine.current_state());
    assert_fresh(&engine.new_game());

    play(&engine, &[4, 0, 8]);
    assert_fresh(&engine.reset());
    assert_fresh(&engine.current_state());

    play(&engine, &[0, 3, 1, 4, 2]);
    assert_fresh(&engine.new_game());
}

#[test]
fn test_top_row_win() {
    let engine = GameEngine::new();
    let snapshot = play(&engine, &[0, 3, 1, 4, 2]);

    assert_eq!(symbols(&snapshot), ["X", "X", "X", "O", "O", "", "", "", ""]);
    assert_eq!(snapshot.winner, Some(Winner::X));
    assert!(snapshot.game_over);
}

#[test]
fn test_full_board_draw() {
    let engine = GameEngine::new();
    let snapshot = play(&engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(symbols(&snapshot), ["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
    assert_eq!(snapshot.winner, Some(Winner::Draw));
    assert!(snapshot.game_over);
}

#[test]
fn test_o_wins_diagonal() {
    let engine = GameEngine::new();
    let snapshot = play(&engine, &[0, 2, 1, 4, 3, 6]);

    assert_eq!(snapshot.winner, Some(Winner::O));
    assert_eq!(snapshot.current_player, Player::O);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let engine = GameEngine::new();
    // X fills the last empty cell and completes column 0
    let snapshot = play(&engine, &[0, 1, 3, 4, 5, 2, 7, 8, 6]);
    assert!(snapshot.board.is_full());
    assert_eq!(snapshot.winner, Some(Winner::X));
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let engine = GameEngine::new();
    play(&engine, &[2]);
    let before = engine.current_state();

    assert_eq!(
        engine.submit_move(2),
        Err(MoveError::CellOccupied(Position::TopRight))
    );
    assert_eq!(engine.current_state(), before);

    play(&engine, &[4]);
    let before = engine.current_state();
    assert_eq!(
        engine.submit_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(engine.current_state(), before);
}

#[test]
fn test_out_of_range_rejected_without_change() {
    let engine = GameEngine::new();
    play(&engine, &[4]);
    let before = engine.current_state();

    for index in [-1, 9, 100, i64::MIN, i64::MAX] {
        assert_eq!(engine.submit_move(index), Err(MoveError::InvalidInput(index)));
        assert_eq!(engine.current_state(), before);
    }
}

#[test]
fn test_move_after_game_over_rejected_without_change() {
    let engine = GameEngine::new();
    let finished = play(&engine, &[0, 3, 1, 4, 2]);

    for index in [5, 0, 8] {
        assert_eq!(engine.submit_move(index), Err(MoveError::GameAlreadyOver));
        assert_eq!(engine.current_state(), finished);
    }
    // Range is checked before game over
    assert_eq!(engine.submit_move(-3), Err(MoveError::InvalidInput(-3)));
}

#[test]
fn test_retry_after_rejection() {
    let engine = GameEngine::new();
    play(&engine, &[0]);
    assert!(engine.submit_move(0).is_err());

    let snapshot = engine.submit_move(1).unwrap();
    assert_eq!(snapshot.board.get(Position::TopCenter), Square::Occupied(Player::O));
    assert_eq!(snapshot.current_player, Player::X);
}

#[test]
fn test_snapshot_is_detached_from_engine() {
    let engine = GameEngine::new();
    let early = play(&engine, &[4]);
    play(&engine, &[0, 8]);

    assert_eq!(symbols(&early), ["", "", "", "", "X", "", "", "", ""]);
    assert_eq!(early.current_player, Player::O);
}

/// Walks every legal game from the empty board.
fn explore(path: &mut Vec<i64>, visit: &mut dyn FnMut(&[i64], &GameSnapshot)) {
    let engine = GameEngine::new();
    let snapshot = play(&engine, path);
    visit(path, &snapshot);
    if snapshot.game_over {
        return;
    }
    for pos in Position::valid_moves(&snapshot.board) {
        path.push(pos.index() as i64);
        explore(path, visit);
        path.pop();
    }
}

#[test]
fn test_every_reachable_state_obeys_the_rules() {
    let mut finished = 0usize;
    let mut draws = 0usize;

    explore(&mut Vec::new(), &mut |path, snapshot| {
        let x = snapshot.board.count(Player::X);
        let o = snapshot.board.count(Player::O);
        assert!(x == o || x == o + 1, "unbalanced board after {:?}", path);
        assert_eq!(snapshot.game_over, snapshot.winner.is_some());

        let mover = if path.len() % 2 == 1 { Player::X } else { Player::O };
        if snapshot.game_over {
            finished += 1;
            assert_eq!(snapshot.current_player, mover, "winner advanced after {:?}", path);
        } else {
            assert_eq!(snapshot.current_player, mover.opponent(), "turn not alternated after {:?}", path);
        }

        for line in LINES {
            let first = snapshot.board.get(line[0]);
            if let Square::Occupied(player) = first {
                if line.iter().all(|p| snapshot.board.get(*p) == first) {
                    let expected = match player {
                        Player::X => Winner::X,
                        Player::O => Winner::O,
                    };
                    assert_eq!(snapshot.winner, Some(expected), "missed line after {:?}", path);
                }
            }
        }

        if snapshot.winner == Some(Winner::Draw) {
            draws += 1;
            assert!(snapshot.board.is_full());
        }
    });

    // Known totals for 3x3 tic-tac-toe
    assert_eq!(finished, 255_168);
    assert_eq!(draws, 46_080);
}
