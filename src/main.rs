//! Blocky goal scorer.
//!
//! Reads commands from stdin and writes responses to stdout. A session sets
//! a board with `position`, adds goals with `goal` or `randomgoals`, then asks
//! for `score` or `describe`.

use std::io::{self, BufRead, Write};

use blocky::engine::Engine;
use blocky::protocol::parser::parse_command;

fn main() -> io::Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    let mut engine = Engine::new();

    let commands = io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| parse_command(&line));

    for cmd in commands {
        if !engine.execute(cmd, &mut out)? {
            break;
        }
    }

    out.flush()
}
