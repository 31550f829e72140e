use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::solver::solve_game;

#[test]
fn test_solve_2_case1() {
    let board = Board::from_string(
        "XXXXXXXXXXXXXXXXXXOOXOXXXXXXOXXXXXXOXOXXXXOXOXOXXOOOOOOX--OOOOOX",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 46);
}

#[test]
fn test_solve_2_case2() {
    let board = Board::from_string(
        "X-XXXXOXOOOOOOOXOOXXOXOOOOXXXXOOOOOXXOXOOOOOXXXOOOOOOX-OOOOOOOOO",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, -32);
}

#[test]
fn test_solve_2_case3() {
    let board = Board::from_string(
        "-OXOOOX-XXXXOOXXXOXOXXXXXOXXXOOXXOOXXOOXXOXOXXOXXXOOOXXXXXXXXXXX",
        Disc::White,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, -20);
}

#[test]
fn test_solve_3_case1() {
    let board = Board::from_string(
        "XXXXXXXXXXXXXXXXXXOOXOXXXXXXOXXXXXXOXOXXXXOXOXOX-OOOOOOX--OOOOOX",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 44);
}

#[test]
fn test_solve_3_case2() {
    let board = Board::from_string(
        "X-XXXXOXOOOOOOOXOOXXOXOOOOXXXXOOOOOXXOXOOOOOXXXOOOOOOX-OOOOOOO-O",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, -38);
}

#[test]
fn test_solve_3_case3() {
    let board = Board::from_string(
        "-OXOOO--XXXXOOXXXOXOXXXXXOXXXOOXXOOXXOOXXOXOXXOXXXOOOXXXXXXXXXXX",
        Disc::White,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, -28);
}

#[test]
fn test_solve_4_case1() {
    let board = Board::from_string(
        "XOOOOOO-XXOOOOOOXXXOXOOOXXOOOOOOXXXOOOOOXXOOXOOOXO-OOOOOOOO-XXX-",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 32);
}

#[test]
fn test_solve_4_case2() {
    let board = Board::from_string(
        "XXXXXX-OXXXXXXOOXXXOXOOOXXXXOOOOXXXXOOOOXXXOOOOOXXXXOO-XOOOOOO--",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 20);
}

#[test]
fn test_solve_4_case3() {
    let board = Board::from_string(
        "XXXXXXXXXXOXOOXXXXXXXXOXXXXXXXXOXXXXXXX-XXXXXXX-XXXXXX-XXXXXXOO-",
        Disc::White,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, -52);
}

#[test]
fn test_solve_5_case1() {
    let board = Board::from_string(
        "-OOOOOO-XXXXXXX---XOXXXOXXXOXXOOXXXXXOXOXXXOOOXOXOOOOXXOXOOOOOOO",
        Disc::White,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 32);
}

#[test]
fn test_solve_5_case2() {
    let board = Board::from_string(
        "--O--O----OOOOO-XOOOOOOOXXOOXOOOXXXXXOXXXOXXOOXXXXXXOXOXXOOOOOOX",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 28);
}

#[test]
fn test_solve_9() {
    let board = Board::from_string(
        "XXXXXXXXXXXXXXXXOOOXXXOXXOXXXXOX-OOXXOOX--OOOXXX--OOXXXX----XXXX",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 50);
}

#[test]
fn test_solve_15() {
    let board = Board::from_string(
        "--OXXO--XOXXXX--XOOOOXXXXOOOXXXXX-OOOXXX--OOOOXX--XXOOO----XXOO-",
        Disc::Black,
    )
    .unwrap();
    let result = solve_game(board.player, board.opponent);
    assert_eq!(result.score, 8);
}
