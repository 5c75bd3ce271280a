//! Custodian -- a draft slice evaluation engine for 4X galaxy maps.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one line per request, so a surrounding service can drive it over pipes.

use std::io::{self, BufRead};

use custodian::engine::Engine;
use custodian::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::Catalog { path } => {
                if let Err(e) = engine.load_catalog(&path) {
                    eprintln!("{}", e);
                }
            }
            Command::Analyze { payload } => {
                engine.handle_analyze(&payload, &mut out);
            }
            Command::Suggest { player_count } => {
                engine.handle_suggest(player_count, &mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
