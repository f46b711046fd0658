//! Property tests for the match engine, generators and countdown.
//!
//! Invariants covered:
//! - Paired boards hold an even count of every kind and never overflow the grid.
//! - After any click sequence the selection holds at most one cell, and the
//!   score is always `award * (cleared tiles / 2)`.
//! - Remaining time never increases as wall time advances and floors at zero.
use proptest::prelude::*;
use tui_match::core::{generate_paired, GameClock, GameConfig, Session, SimpleRng};
use tui_match::types::{Coord, Difficulty, Screen, TileKind};

proptest! {
    #[test]
    fn paired_boards_are_even_per_kind(
        seed in any::<u32>(),
        rows in 1u16..12,
        cols in 1u16..12,
        kinds in 1usize..=6,
    ) {
        let catalog = &TileKind::ALL[..kinds];
        let board = generate_paired(rows, cols, catalog, &mut SimpleRng::new(seed)).unwrap();

        prop_assert_eq!(board.len(), usize::from(rows) * usize::from(cols));
        for &kind in catalog {
            prop_assert_eq!(board.count(kind) % 2, 0);
        }
        // Every empty cell sits after every occupied cell.
        let first_empty = board.cells().iter().position(|c| c.is_none());
        if let Some(i) = first_empty {
            prop_assert!(board.cells()[i..].iter().all(|c| c.is_none()));
        }
    }

    #[test]
    fn selection_and_score_stay_consistent(
        seed in any::<u32>(),
        clicks in proptest::collection::vec((0u16..7, 0u16..7), 0..120),
        hard in any::<bool>(),
    ) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Normal };
        let mut session = Session::new(GameConfig::default(), seed, 0).unwrap();
        session.open_difficulty_select();
        session.choose_difficulty(difficulty, 0).unwrap();
        let total = session.board().occupied_count();

        for (row, col) in clicks {
            session.select_cell(Coord::new(row, col), 1_000);
            prop_assert!(session.selection().len() <= 1);
            let cleared = total - session.board().occupied_count();
            prop_assert_eq!(cleared % 2, 0);
            prop_assert_eq!(session.score() as usize, cleared / 2 * 10);
        }
        if session.board().is_cleared() {
            prop_assert_eq!(session.screen(), Screen::Victory);
        }
    }

    #[test]
    fn clock_is_monotonic_and_floored(
        budget in 1u32..120,
        start in 0u64..1_000_000,
        times in proptest::collection::vec(0u64..400_000, 1..40),
    ) {
        let clock = GameClock::new(budget, start);
        let mut times = times;
        times.sort_unstable();

        let mut last = u64::from(budget) * 1000;
        for dt in times {
            let remaining = clock.remaining_ms(start + dt);
            prop_assert!(remaining <= last);
            prop_assert_eq!(remaining, (u64::from(budget) * 1000).saturating_sub(dt));
            last = remaining;
        }
    }
}
