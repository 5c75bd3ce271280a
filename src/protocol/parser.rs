//! Command parser for the engine's line protocol.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

/// A parsed server-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load (or replace) the tile catalog from a JSON file.
    Catalog { path: String },

    /// Analyze and rank a JSON batch of slices.
    Analyze { payload: String },

    /// Draw a random tile selection for a player count.
    Suggest { player_count: u8 },

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "catalog" => parse_catalog(rest),
        "analyze" => parse_analyze(rest),
        "suggest" => parse_suggest(rest),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `catalog <path>` -- the path is everything after the keyword.
fn parse_catalog(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        eprintln!("malformed catalog: expected 'catalog <path>'");
        return None;
    }
    Some(Command::Catalog {
        path: rest.to_string(),
    })
}

/// Parses `analyze <slices-json>` -- the payload is everything after the
/// keyword; it is decoded by the engine, not here.
fn parse_analyze(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        eprintln!("malformed analyze: expected 'analyze <slices-json>'");
        return None;
    }
    Some(Command::Analyze {
        payload: rest.to_string(),
    })
}

/// Parses `suggest <player-count>`.
fn parse_suggest(rest: &str) -> Option<Command> {
    match rest.parse::<u8>() {
        Ok(player_count) => Some(Command::Suggest { player_count }),
        Err(_) => {
            eprintln!("malformed suggest: expected 'suggest <player-count>'");
            None
        }
    }
}
