//! Tests for move generation and the connect operations.

use strictly_pen::{
    Board, BoardSettings, Connectivity, Cursor, Direction, GameStatus, PlayerId, PlayerSpec, Point,
    RandomPolicy, Rgb,
};

fn open_board(width: usize, height: usize, anchor: Point) -> Board {
    BoardSettings::new(width, height)
        .with_anchor(anchor)
        .with_wall_density(0.0)
        .build()
        .expect("valid settings")
}

fn move_to(board: &Board, cursor: Cursor, end: Point) -> Connectivity {
    board
        .moves_from(cursor)
        .into_iter()
        .find(|m| m.end() == end)
        .unwrap_or_else(|| panic!("{end} should be reachable from the {cursor}"))
}

#[test]
fn test_can_connect_postconditions_hold_everywhere() {
    let mut board = BoardSettings::new(7, 7)
        .with_wall_density(0.15)
        .with_seed(99)
        .build()
        .unwrap();
    let mut policy = RandomPolicy::seeded(4);
    for _ in 0..6 {
        let moves = board.available_moves();
        let Some(mv) = strictly_pen::MovePolicy::choose(&mut policy, &board, &moves) else {
            break;
        };
        board.connect_move(&mv).unwrap();
    }

    for a in board.nodes() {
        for b in board.nodes() {
            if a.can_connect(Some(b)).is_possible() {
                assert!((a.x() - b.x()).abs() <= 1 && (a.y() - b.y()).abs() <= 1);
                assert_ne!(a.position(), b.position());
                assert!(a.is_connected());
                assert!(!b.is_connected());
                assert!(!b.is_wall());
            }
        }
    }
}

#[test]
fn test_connect_head_moves_cursor_and_turn() {
    let mut board = open_board(4, 4, Point::new(1, 1));
    let old_head = board.head();
    let player = board.current_player();
    let mv = move_to(&board, Cursor::Head, Point::new(2, 1));

    let connection = board.connect_head(&mv).expect("legal move");

    assert_eq!(board.head(), Point::new(2, 1));
    assert!(!board.node_at(old_head).unwrap().is_head());
    assert!(board.node_at(Point::new(2, 1)).unwrap().is_head());
    assert_eq!(board.connections().len(), 1);
    assert_eq!(connection.owner(), player);
    assert_eq!(connection.direction(), Direction::Right);
    assert_eq!(board.current_player(), PlayerId(1));
    // The tail stays on the anchor.
    assert_eq!(board.tail(), old_head);
    assert!(board.node_at(old_head).unwrap().is_tail());
}

#[test]
fn test_connect_tail_is_symmetric() {
    let mut board = open_board(4, 4, Point::new(1, 1));
    let mv = move_to(&board, Cursor::Tail, Point::new(0, 0));

    let connection = board.connect_tail(&mv).expect("legal move");

    assert_eq!(connection.direction(), Direction::TopLeft);
    assert_eq!(board.tail(), Point::new(0, 0));
    assert_eq!(board.head(), Point::new(1, 1));
    assert!(board.node_at(Point::new(0, 0)).unwrap().is_tail());
    assert!(!board.node_at(Point::new(1, 1)).unwrap().is_tail());
    assert!(board.node_at(Point::new(1, 1)).unwrap().is_head());
}

#[test]
fn test_consumed_move_fails_without_state_change() {
    let mut board = open_board(4, 4, Point::new(0, 0));
    let mv = move_to(&board, Cursor::Head, Point::new(1, 0));
    board.connect_head(&mv).unwrap();

    let connections = board.connections().to_vec();
    let head = board.head();
    let player = board.current_player();

    assert!(board.connect_head(&mv).is_none());
    assert_eq!(board.connections(), connections.as_slice());
    assert_eq!(board.head(), head);
    assert_eq!(board.current_player(), player);
}

#[test]
fn test_out_of_bounds_move_fails_closed() {
    let mut board = open_board(2, 2, Point::new(1, 1));
    let beyond = Connectivity::possible(Point::new(1, 1), Point::new(2, 2), Direction::BottomRight);
    let negative = Connectivity::possible(Point::new(1, 1), Point::new(-1, 1), Direction::Left);

    assert!(board.connect_head(&beyond).is_none());
    assert!(board.connect_tail(&negative).is_none());
    assert!(board.connections().is_empty());
    assert_eq!(board.current_player(), PlayerId(0));
}

#[test]
fn test_available_moves_concatenates_head_then_tail() {
    let board = open_board(3, 3, Point::new(0, 0));
    let moves = board.available_moves();

    assert_eq!(moves.len(), 6);
    assert!(moves[..3].iter().all(|m| m.from_head()));
    assert!(moves[3..].iter().all(|m| m.from_tail()));
    // Same destinations from both cursors: duplicates are kept.
    assert_eq!(moves[..3], moves[3..]);
}

#[test]
fn test_connect_move_uses_offering_cursor() {
    let mut board = open_board(5, 1, Point::new(2, 0));
    let mv = board.tail_moves()[0];
    board.connect_move(&mv).unwrap();
    assert_eq!(board.tail(), mv.end());
    assert_eq!(board.head(), Point::new(2, 0));
}

#[test]
fn test_untagged_move_follows_its_start() {
    let mut board = open_board(3, 3, Point::new(1, 1));
    let step = board.head_moves().into_iter().find(|m| m.end() == Point::new(2, 1)).unwrap();
    board.connect_head(&step).unwrap();

    let from_tail = board
        .possible_connections(board.tail())
        .into_iter()
        .find(|m| m.end() == Point::new(2, 2))
        .unwrap();
    assert_eq!(from_tail.cursor(), None);

    let connection = board.connect_move(&from_tail).unwrap();
    assert_eq!(connection.start(), Point::new(1, 1));
    assert_eq!(board.tail(), Point::new(2, 2));
    assert_eq!(board.head(), Point::new(2, 1));
}

#[test]
fn test_untagged_move_away_from_cursors_is_refused() {
    let mut board = open_board(3, 3, Point::new(0, 0));
    board.connect_head(&move_to(&board, Cursor::Head, Point::new(1, 0))).unwrap();
    board.connect_head(&move_to(&board, Cursor::Head, Point::new(2, 0))).unwrap();

    // (1, 0) is on the path but carries neither cursor.
    let stray = board.possible_connections(Point::new(1, 0));
    assert!(!stray.is_empty());
    assert!(board.connect_move(&stray[0]).is_none());
    assert_eq!(board.connections().len(), 2);
    assert_eq!(board.head(), Point::new(2, 0));
    assert_eq!(board.tail(), Point::new(0, 0));
}

#[test]
fn test_rotation_over_three_players() {
    let mut board = BoardSettings::new(6, 1)
        .with_anchor(Point::new(0, 0))
        .with_wall_density(0.0)
        .with_players(vec![
            PlayerSpec::new("Shuri", Rgb(0, 100, 0)),
            PlayerSpec::new("Steve", Rgb(255, 165, 0)),
            PlayerSpec::new("Chen", Rgb(128, 0, 32)),
        ])
        .build()
        .unwrap();

    let mut owners = Vec::new();
    while let Some(mv) = board.head_moves().first().copied() {
        owners.push(board.connect_head(&mv).unwrap().owner());
    }

    assert_eq!(
        owners,
        vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(0), PlayerId(1)]
    );
    assert_eq!(board.current_player_spec().name, "Chen");
    assert_eq!(board.status(), GameStatus::Lost(PlayerId(2)));
}

#[test]
fn test_single_cell_board_has_no_moves() {
    let board = BoardSettings::new(1, 1).build().unwrap();
    assert!(board.head_moves().is_empty());
    assert!(board.possible_connections(board.head()).is_empty());
    assert!(board.available_moves().is_empty());
    assert!(board.is_blocked(Cursor::Head));
    assert!(board.status().is_over());
}

#[test]
fn test_each_success_connects_exactly_one_new_node() {
    let mut board = BoardSettings::new(9, 9)
        .with_wall_density(0.1)
        .with_seed(2024)
        .build()
        .unwrap();
    board.play_out(&mut RandomPolicy::seeded(2024));

    let connected = board.nodes().iter().filter(|n| n.is_connected()).count();
    assert_eq!(connected, board.connections().len() + 1);
    for connection in board.connections() {
        assert!(board.in_bounds(connection.start()));
        assert!(board.in_bounds(connection.end()));
    }
}
