//! Plain-text touch scripts.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! down <id> <x> <y>
//! move <id> <x> <y>
//! up   <id> [<x> <y>]
//! wait <milliseconds>
//! ```

use crate::ScriptError;
use padtouch_touch_grid::FingerId;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    Down { id: FingerId, x: i32, y: i32 },
    Move { id: FingerId, x: i32, y: i32 },
    /// Lift a finger. Any coordinates given in the script are dropped; the
    /// finger releases the cell it owns.
    Up { id: FingerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLine {
    Touch(TouchEvent),
    Wait(Duration),
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
        if content.is_empty() {
            continue;
        }
        let parsed = parse_line(content).map_err(|reason| ScriptError { line, reason })?;
        out.push(parsed);
    }
    Ok(out)
}

fn parse_line(content: &str) -> Result<ScriptLine, String> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    match (command.as_str(), args.as_slice()) {
        ("down", [id, x, y]) => Ok(ScriptLine::Touch(TouchEvent::Down {
            id: number(id, "finger id")?,
            x: number(x, "x")?,
            y: number(y, "y")?,
        })),
        ("move", [id, x, y]) => Ok(ScriptLine::Touch(TouchEvent::Move {
            id: number(id, "finger id")?,
            x: number(x, "x")?,
            y: number(y, "y")?,
        })),
        ("up", [id]) | ("up", [id, _, _]) => Ok(ScriptLine::Touch(TouchEvent::Up {
            id: number(id, "finger id")?,
        })),
        ("wait", [ms]) => Ok(ScriptLine::Wait(Duration::from_millis(number(
            ms,
            "milliseconds",
        )?))),
        ("down" | "move" | "up" | "wait", _) => Err(format!(
            "wrong number of arguments for '{command}' ({} given)",
            args.len()
        )),
        _ => Err(format!("unknown command '{command}'")),
    }
}

fn number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    text.parse()
        .map_err(|e| format!("invalid {what} '{text}': {e}"))
}
