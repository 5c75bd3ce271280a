//! Engine state management.
//!
//! Holds the loaded tile catalog and dispatches protocol commands,
//! writing one response line per request. Analysis errors go back to
//! the caller as `error <message>` lines; the process never dies on a
//! bad request.

use std::io::Write;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::eval::rank::rank_slices;
use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::slice::Slice;
use crate::setup::suggest_map;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub catalog: Option<TileCatalog>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no catalog loaded.
    pub fn new() -> Self {
        Engine {
            catalog: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Loads (or replaces) the tile catalog from a JSON file.
    /// Returns an error message on failure; the old catalog is kept.
    pub fn load_catalog(&mut self, path: &str) -> Result<(), String> {
        match TileCatalog::from_path(Path::new(path)) {
            Ok(catalog) => {
                self.catalog = Some(catalog);
                Ok(())
            }
            Err(e) => Err(format!("failed to load catalog: {}", e)),
        }
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `analyze` command: decodes the slice batch, ranks it,
    /// and writes the full result as one JSON line.
    pub fn handle_analyze<W: Write>(&self, payload: &str, out: &mut W) {
        let catalog = match &self.catalog {
            Some(c) => c,
            None => {
                writeln!(out, "error no catalog loaded").unwrap();
                out.flush().unwrap();
                return;
            }
        };

        let result = parse_slices(payload)
            .and_then(|slices| rank_slices(&slices, catalog).map_err(|e| e.to_string()));
        match result {
            Ok(analysis) => match serde_json::to_string(&analysis) {
                Ok(json) => writeln!(out, "{}", json).unwrap(),
                Err(e) => writeln!(out, "error {}", e).unwrap(),
            },
            Err(msg) => writeln!(out, "error {}", msg).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles the `suggest` command: draws a random tile selection and
    /// writes it as one JSON line.
    pub fn handle_suggest<W: Write>(&mut self, player_count: u8, out: &mut W) {
        let Engine { catalog, rng } = self;
        let catalog = match catalog {
            Some(c) => c,
            None => {
                writeln!(out, "error no catalog loaded").unwrap();
                out.flush().unwrap();
                return;
            }
        };

        match suggest_map(catalog, player_count, rng) {
            Ok(suggestion) => match serde_json::to_string(&suggestion) {
                Ok(json) => writeln!(out, "{}", json).unwrap(),
                Err(e) => writeln!(out, "error {}", e).unwrap(),
            },
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes an `analyze` payload: an array of slices, each an array of
/// tile identifiers given as JSON numbers or strings.
fn parse_slices(payload: &str) -> Result<Vec<Slice>, String> {
    let raw: Vec<Vec<serde_json::Value>> =
        serde_json::from_str(payload).map_err(|e| format!("invalid slices JSON: {}", e))?;

    let mut slices = Vec::with_capacity(raw.len());
    for (i, ids) in raw.into_iter().enumerate() {
        let mut tile_ids = Vec::with_capacity(ids.len());
        for id in ids {
            match id {
                serde_json::Value::Number(n) => tile_ids.push(n.to_string()),
                serde_json::Value::String(s) => tile_ids.push(s),
                other => {
                    return Err(format!("invalid tile id in slice {}: {}", i + 1, other));
                }
            }
        }
        slices.push(Slice::from_ids(i + 1, tile_ids).map_err(|e| e.to_string())?);
    }
    Ok(slices)
}
