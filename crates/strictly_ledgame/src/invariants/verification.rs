//! Bounded model checking of the cursor rules with Kani.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Cell, Player, Position};

    /// The cursor search lands on an empty tile whenever one exists.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_next_empty_lands_on_empty() {
        let mut board = Board::new();
        for pos in Position::ALL {
            let occupied: bool = kani::any();
            if occupied {
                board.set(pos, Cell::Owned(Player::One));
            }
        }
        let index: usize = kani::any();
        kani::assume(index < 9);
        let from = Position::ALL[index];

        match board.next_empty_after(from) {
            Some(pos) => assert!(board.is_empty(pos)),
            None => assert_eq!(board.occupied_count(), 9),
        }
    }
}
