//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p othello_core -- [depth] [diagram-file] [side]
//!
//! Examples:
//!   # Default: depth 8 from the opening, black to move
//!   cargo flamegraph --example perft_bench -p othello_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p othello_core -- 9
//!
//!   # Custom position read from a file of eight `.`/`B`/`W` rows
//!   cargo flamegraph --example perft_bench -p othello_core -- 7 midgame.txt white

use othello_core::{perft, Board, Side};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    let board = match args.get(2) {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| panic!("{path}: {e}"));
            Board::from_diagram(&text).unwrap_or_else(|e| panic!("{path}: {e}"))
        }
        None => Board::new(),
    };
    let side = match args.get(3).map(|s| s.as_str()) {
        Some("white") | Some("w") => Side::White,
        _ => Side::Black,
    };

    run(board, side, depth);
}

fn run(mut board: Board, side: Side, depth: u8) {
    println!("{board}");
    println!("Side to move: {side}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut board, side, depth.saturating_sub(2));
    }

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&mut board, side, d);
        let elapsed = start.elapsed();

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!("depth {d:>2}: {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }
}
