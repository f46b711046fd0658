//! Session flow tests: screen transitions, matching and the countdown.

use tui_match::core::{
    Board, GameConfig, MatchEngine, RejectReason, SelectOutcome, Session,
};
use tui_match::types::{
    BoardLayout, Coord, Difficulty, InputEvent, Key, Point, Screen, TileKind,
};

const SEED: u32 = 2024;

fn playing(difficulty: Difficulty, now_ms: u64) -> Session {
    let mut session = Session::new(GameConfig::default(), SEED, 0).unwrap();
    session.open_difficulty_select();
    session.choose_difficulty(difficulty, now_ms).unwrap();
    session
}

fn center_of(session: &Session, at: Coord) -> Point {
    session.layout().tile_rect(session.board(), at).center()
}

fn click(p: Point) -> InputEvent {
    InputEvent::Click(p)
}

/// Two distinct cells holding the same kind.
fn find_pair(board: &Board) -> Option<(Coord, Coord)> {
    let tiles: Vec<_> = board.tiles().collect();
    for (i, &(a, ka)) in tiles.iter().enumerate() {
        if let Some(&(b, _)) = tiles[i + 1..].iter().find(|(_, kb)| *kb == ka) {
            return Some((a, b));
        }
    }
    None
}

/// Two cells holding different kinds.
fn find_mismatch(board: &Board) -> Option<(Coord, Coord)> {
    let mut tiles = board.tiles();
    let (a, ka) = tiles.next()?;
    tiles.find(|(_, kb)| *kb != ka).map(|(b, _)| (a, b))
}

#[test]
fn menu_clicks_lead_to_difficulty_select() {
    for p in [Point::new(300, 300), Point::new(300, 400)] {
        let mut session = Session::new(GameConfig::default(), SEED, 0).unwrap();
        session.handle_event(click(p), 0).unwrap();
        assert_eq!(session.screen(), Screen::DifficultySelect);
    }
}

#[test]
fn clicks_outside_menu_regions_do_nothing() {
    let mut session = Session::new(GameConfig::default(), SEED, 0).unwrap();
    for p in [Point::new(10, 10), Point::new(200, 300), Point::new(300, 350)] {
        session.handle_event(click(p), 0).unwrap();
    }
    assert_eq!(session.screen(), Screen::Menu);
    session.handle_event(InputEvent::Key(Key::Restart), 0).unwrap();
    assert_eq!(session.screen(), Screen::Menu);
}

#[test]
fn difficulty_sets_budget_and_layout() {
    let cases = [
        (Point::new(300, 200), Difficulty::Easy, 40, BoardLayout::Paired),
        (Point::new(300, 300), Difficulty::Normal, 30, BoardLayout::Paired),
        (Point::new(300, 400), Difficulty::Hard, 20, BoardLayout::Flood),
    ];
    for (p, difficulty, budget, layout) in cases {
        let mut session = Session::new(GameConfig::default(), SEED, 0).unwrap();
        session.handle_event(click(Point::new(300, 300)), 0).unwrap();
        session.handle_event(click(p), 500).unwrap();

        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.difficulty(), difficulty);
        assert_eq!(session.budget_secs(), budget);
        assert_eq!(session.board_layout(), layout);
        assert_eq!(session.score(), 0);
        assert!(session.selection().is_empty());
        assert_eq!(session.remaining_ms(500), u64::from(budget) * 1000);
    }
}

#[test]
fn matching_pair_clears_both_and_scores() {
    let board = Board::from_cells(
        2,
        2,
        [
            Some(TileKind::Cat),
            Some(TileKind::Cat),
            Some(TileKind::Fish),
            Some(TileKind::Fish),
        ],
    );
    let mut engine = MatchEngine::new(board, 10);

    assert_eq!(engine.select_cell(Coord::new(0, 0)), SelectOutcome::Selected(Coord::new(0, 0)));
    assert_eq!(
        engine.select_cell(Coord::new(0, 1)),
        SelectOutcome::Matched {
            first: Coord::new(0, 0),
            second: Coord::new(0, 1),
            kind: TileKind::Cat,
        }
    );
    assert_eq!(engine.board().get(Coord::new(0, 0)), Some(None));
    assert_eq!(engine.board().get(Coord::new(0, 1)), Some(None));
    assert_eq!(engine.score(), 10);
    assert!(engine.selection().is_empty());
}

#[test]
fn session_match_through_clicks() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, b) = find_pair(session.board()).unwrap();
    let kind = session.board().kind_at(a);

    let pa = center_of(&session, a);
    let pb = center_of(&session, b);
    session.handle_event(click(pa), 100).unwrap();
    assert_eq!(session.selection(), &[a]);
    session.handle_event(click(pb), 200).unwrap();

    assert!(kind.is_some());
    assert!(!session.board().is_occupied(a));
    assert!(!session.board().is_occupied(b));
    assert_eq!(session.score(), 10);
    assert!(session.selection().is_empty());
}

#[test]
fn mismatch_keeps_tiles_and_clears_selection() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, b) = find_mismatch(session.board()).unwrap();

    session.select_cell(a, 10);
    let outcome = session.select_cell(b, 20);

    assert_eq!(outcome, SelectOutcome::Mismatched { first: a, second: b });
    assert!(session.board().is_occupied(a));
    assert!(session.board().is_occupied(b));
    assert_eq!(session.score(), 0);
    assert!(session.selection().is_empty());
}

#[test]
fn invalid_selections_are_no_ops() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, b) = find_pair(session.board()).unwrap();
    session.select_cell(a, 0);
    session.select_cell(b, 0);

    assert_eq!(
        session.select_cell(a, 0),
        SelectOutcome::Rejected(RejectReason::EmptyCell)
    );
    assert_eq!(
        session.select_cell(Coord::new(9, 9), 0),
        SelectOutcome::Rejected(RejectReason::OutOfBounds)
    );

    let (c, _) = find_pair(session.board()).unwrap();
    session.select_cell(c, 0);
    assert_eq!(
        session.select_cell(c, 0),
        SelectOutcome::Rejected(RejectReason::AlreadySelected)
    );
    assert_eq!(session.selection(), &[c]);
    assert_eq!(session.score(), 10);
}

#[test]
fn countdown_expiry_is_game_over() {
    let mut session = playing(Difficulty::Normal, 0);
    session.update(29_999);
    assert_eq!(session.screen(), Screen::Playing);

    session.update(31_000);
    assert_eq!(session.screen(), Screen::GameOver);
    assert_eq!(session.remaining_ms(31_000), 0);
    assert_eq!(session.remaining_ms(90_000), 0);
}

#[test]
fn no_selection_lands_after_expiry() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, _) = find_pair(session.board()).unwrap();
    let p = center_of(&session, a);

    session.handle_event(click(p), 30_000).unwrap();
    assert_eq!(session.screen(), Screen::GameOver);
    assert!(session.selection().is_empty());
    assert_eq!(
        session.select_cell(a, 30_000),
        SelectOutcome::Rejected(RejectReason::NotPlaying)
    );
}

#[test]
fn direct_selection_after_deadline_is_refused() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, b) = find_pair(session.board()).unwrap();

    assert_eq!(
        session.select_cell(a, 40_000),
        SelectOutcome::Rejected(RejectReason::NotPlaying)
    );
    assert_eq!(session.screen(), Screen::GameOver);
    session.select_cell(b, 40_000);
    assert_eq!(session.score(), 0);
    assert!(session.board().is_occupied(a));
    assert!(session.board().is_occupied(b));
}

#[test]
fn clearing_after_deadline_is_not_victory() {
    let mut session = playing(Difficulty::Easy, 0);
    while let Some((a, b)) = find_pair(session.board()) {
        let outcome = session.select_cell(a, 100_000);
        if outcome == SelectOutcome::Rejected(RejectReason::NotPlaying) {
            break;
        }
        session.select_cell(b, 100_000);
    }

    assert_eq!(session.screen(), Screen::GameOver);
    assert_eq!(session.score(), 0);
    assert_eq!(session.board().occupied_count(), 36);
}

#[test]
fn clearing_the_board_is_victory() {
    let mut session = playing(Difficulty::Easy, 0);
    while let Some((a, b)) = find_pair(session.board()) {
        session.select_cell(a, 1_000);
        session.select_cell(b, 1_000);
    }

    assert_eq!(session.screen(), Screen::Victory);
    assert_eq!(session.score(), 18 * 10);
    assert_eq!(session.remaining_ms(1_000), 39_000);
    // Frozen on the end screen.
    assert_eq!(session.remaining_ms(60_000), 39_000);
    session.update(60_000);
    assert_eq!(session.screen(), Screen::Victory);
}

#[test]
fn restart_after_hard_uses_paired_board_and_same_budget() {
    let mut session = playing(Difficulty::Hard, 0);
    assert_eq!(session.board_layout(), BoardLayout::Flood);
    session.update(20_000);
    assert_eq!(session.screen(), Screen::GameOver);

    let episode = session.episode_id();
    session.handle_event(InputEvent::Key(Key::Restart), 25_000).unwrap();

    assert_eq!(session.screen(), Screen::Playing);
    assert_eq!(session.board_layout(), BoardLayout::Paired);
    assert_eq!(session.budget_secs(), 20);
    assert_eq!(session.score(), 0);
    assert_eq!(session.remaining_ms(25_000), 20_000);
    assert_eq!(session.episode_id(), episode + 1);
}

#[test]
fn restart_is_ignored_while_playing() {
    let mut session = playing(Difficulty::Normal, 0);
    let episode = session.episode_id();
    session.handle_event(InputEvent::Key(Key::Restart), 1_000).unwrap();
    assert_eq!(session.episode_id(), episode);
}

#[test]
fn quit_and_close_stop_the_session_from_any_screen() {
    let mut session = Session::new(GameConfig::default(), SEED, 0).unwrap();
    session.handle_event(InputEvent::Key(Key::Quit), 0).unwrap();
    assert!(!session.running());

    let mut session = playing(Difficulty::Normal, 0);
    session.handle_event(InputEvent::Close, 5).unwrap();
    assert!(!session.running());

    // Nothing is accepted afterwards.
    let (a, _) = find_pair(session.board()).unwrap();
    session.handle_event(click(center_of(&session, a)), 6).unwrap();
    assert!(session.selection().is_empty());
}

#[test]
fn snapshot_reflects_session() {
    let mut session = playing(Difficulty::Normal, 0);
    let (a, _) = find_pair(session.board()).unwrap();
    session.select_cell(a, 100);

    let snap = session.snapshot(2_500);
    assert_eq!(snap.screen, Screen::Playing);
    assert_eq!((snap.rows, snap.cols), (6, 6));
    assert_eq!(snap.board.len(), 36);
    assert!(snap.is_selected(a));
    assert_eq!(snap.remaining_ms, 27_500);
    assert_eq!(snap.budget_secs, 30);
    assert!(snap.playable());
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        base_countdown_secs: 10,
        difficulty_step_secs: 10,
        ..GameConfig::default()
    };
    assert!(Session::new(config, SEED, 0).is_err());
}
