//! Colony-map text loader.
//!
//! # Map format
//!
//! One item per line, in this order:
//!
//! ```text
//! 3                ← ant count (first line, positive integer)
//! ##start          ← the next room line is the start room
//! hall 0 0
//! nest 1 1
//! ##end
//! food 2 0
//! hall-nest        ← tunnel between two previously declared rooms
//! nest-food
//! ```
//!
//! | Line                 | Meaning                                       |
//! |----------------------|-----------------------------------------------|
//! | `name x y`           | Room at integer coordinates `(x, y)`          |
//! | `a-b`                | Undirected tunnel between rooms `a` and `b`   |
//! | `##start` / `##end`  | Marks the room declared on the following line |
//! | `# …`                | Comment, ignored                              |
//!
//! Tunnels may only reference rooms already declared.  Everything the
//! routing core assumes about its input — positive ant count, resolvable
//! room names, marked and distinct start/end — is rejected here with the
//! offending line number, so a loaded [`Colony`] is always safe to route.

use std::io::BufRead;
use std::path::Path;

use ant_core::MapPoint;

use crate::network::{TunnelNetwork, TunnelNetworkBuilder};
use crate::MapError;

/// A fully validated colony: how many ants to route, and the network to
/// route them across.
#[derive(Debug)]
pub struct Colony {
    pub ant_count: usize,
    pub network:   TunnelNetwork,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a colony map from a file.
pub fn load_colony_path(path: &Path) -> Result<Colony, MapError> {
    let file = std::fs::File::open(path)?;
    load_colony_reader(std::io::BufReader::new(file))
}

/// Like [`load_colony_path`] but accepts any buffered reader.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded maps.
pub fn load_colony_reader<R: BufRead>(reader: R) -> Result<Colony, MapError> {
    let mut lines = reader.lines().enumerate();

    // ── Ant count (first line) ────────────────────────────────────────────
    let ant_count = match lines.next() {
        None => return Err(MapError::InvalidAntCount { line: 1 }),
        Some((_, line)) => parse_ant_count(&line?)?,
    };

    // ── Rooms, tunnels, directives ────────────────────────────────────────
    let mut builder = TunnelNetworkBuilder::new();
    // Directive seen on the previous line, waiting for its room line.
    let mut pending: Option<&'static str> = None;
    let mut last_line = 1;

    for (idx, line) in lines {
        let line = line?;
        let lineno = idx + 1;
        last_line = lineno;
        let trimmed = line.trim();

        if let Some(directive) = parse_directive(trimmed) {
            if let Some(dangling) = pending {
                return Err(MapError::DanglingDirective { directive: dangling, line: lineno });
            }
            pending = Some(directive);
            continue;
        }

        if trimmed.is_empty() || trimmed.starts_with('#') {
            if let Some(directive) = pending {
                return Err(MapError::DanglingDirective { directive, line: lineno });
            }
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        match fields.as_slice() {
            // Room: `name x y`.  Names may contain `-`; the field count
            // disambiguates rooms from tunnels.
            [name, x, y] => {
                let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
                    return Err(MapError::MalformedRoom { line: lineno });
                };
                let room = builder.add_room(*name, MapPoint::new(x, y));
                match pending.take() {
                    Some("##start") => builder.mark_start(room),
                    Some("##end") => builder.mark_end(room),
                    _ => {}
                }
            }

            // Tunnel: `a-b`.
            [link] if link.contains('-') => {
                if let Some(directive) = pending {
                    return Err(MapError::DanglingDirective { directive, line: lineno });
                }
                add_tunnel_line(&mut builder, link, lineno)?;
            }

            _ => return Err(MapError::UnrecognizedLine { line: lineno }),
        }
    }

    if let Some(directive) = pending {
        return Err(MapError::DanglingDirective { directive, line: last_line });
    }

    let network = builder.build()?;
    Ok(Colony { ant_count, network })
}

// ── Line parsers ──────────────────────────────────────────────────────────────

fn parse_ant_count(line: &str) -> Result<usize, MapError> {
    match line.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(MapError::InvalidAntCount { line: 1 }),
    }
}

fn parse_directive(line: &str) -> Option<&'static str> {
    match line {
        "##start" => Some("##start"),
        "##end" => Some("##end"),
        _ => None,
    }
}

fn add_tunnel_line(
    builder: &mut TunnelNetworkBuilder,
    link: &str,
    lineno: usize,
) -> Result<(), MapError> {
    let parts: Vec<&str> = link.split('-').collect();
    let &[a, b] = parts.as_slice() else {
        return Err(MapError::MalformedTunnel { line: lineno });
    };
    if a.is_empty() || b.is_empty() {
        return Err(MapError::MalformedTunnel { line: lineno });
    }

    let resolve = |name: &str| {
        builder.find_room(name).ok_or_else(|| MapError::UnknownRoom {
            name: name.to_owned(),
            line: lineno,
        })
    };
    let (a, b) = (resolve(a)?, resolve(b)?);
    builder.add_tunnel(a, b);
    Ok(())
}
