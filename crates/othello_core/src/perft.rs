use crate::{
    board::Board,
    movegen::{find_available_into, has_available},
    types::{Move, Side},
};

/// Pure perft node count from `side`'s turn down to `depth` plies.
///
/// A forced pass counts as one ply; a position where neither side can move
/// is a leaf regardless of the remaining depth.
pub fn perft(board: &mut Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, side: Side, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        find_available_into(board, side, buf);
        if buf.is_empty() {
            if !has_available(board, side.opponent()) {
                return 1;
            }
            return inner(board, side.opponent(), depth - 1, rest);
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let mut scoped = board.scoped(mv, side);
            nodes += inner(&mut scoped, side.opponent(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
