//! Structural invariants hold after any sequence of steps.

use proptest::prelude::*;

use super::common::{apply, card_count, check_invariants, comment_count, step, Step};
use tackboard::seed::initial_board;
use tackboard::Board;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ids stay unique, orders stay contiguous and back-references
    /// stay correct, whatever the user does.
    #[test]
    fn property_invariants_hold_after_every_step(
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut board = initial_board();
        prop_assert!(check_invariants(&board).is_ok());

        for s in &steps {
            board = apply(&board, s);
            if let Err(violation) = check_invariants(&board) {
                prop_assert!(false, "after {:?}: {}", s, violation);
            }
        }
    }

    /// PROPERTY: moving and reordering never create or lose cards or comments.
    #[test]
    fn property_rearranging_conserves_cards_and_comments(
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut board = initial_board();
        for s in &steps {
            let next = apply(&board, s);
            let rearranges = matches!(
                s,
                Step::MoveCard(..)
                    | Step::ReorderCards(..)
                    | Step::ReorderLists(..)
                    | Step::DragList(..)
                    | Step::DragCardOnCard(..)
                    | Step::DragCardToList(..)
            );
            if rearranges {
                prop_assert_eq!(card_count(&next), card_count(&board));
                prop_assert_eq!(comment_count(&next), comment_count(&board));
                prop_assert_eq!(next.lists.len(), board.lists.len());
            }
            board = next;
        }
    }

    /// PROPERTY: any reachable board survives the persisted JSON form.
    #[test]
    fn property_reachable_boards_round_trip(
        steps in proptest::collection::vec(step(), 0..25),
    ) {
        let mut board = initial_board();
        for s in &steps {
            board = apply(&board, s);
        }
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, board);
    }
}
