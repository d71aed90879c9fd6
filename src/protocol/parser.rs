//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that the
//! scorer main loop can dispatch on.

use crate::board::Color;
use crate::goal::GoalKind;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the scorer replies `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Set the board from grid notation.
    Position { grid: String },

    /// Add a goal: `goal <kind> <colour>`.
    Goal { kind: GoalKind, target: Color },

    /// Replace all goals with `count` generated ones.
    RandomGoals { count: usize, seed: Option<u64> },

    /// Remove all goals.
    ClearGoals,

    /// Score every goal against the current board.
    Score,

    /// Print each goal's description.
    Describe,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "cleargoals" => Some(Command::ClearGoals),
        "score" => Some(Command::Score),
        "describe" => Some(Command::Describe),

        "setoption" => parse_setoption(&tokens[1..]),
        "position" => parse_position(&tokens),
        "goal" => parse_goal(&tokens),
        "randomgoals" => parse_randomgoals(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses the arguments of `setoption`: `name <id> [value <x>]`. The id
/// runs up to the `value` keyword; everything after it is the value.
fn parse_setoption(args: &[&str]) -> Option<Command> {
    let Some((&"name", rest)) = args.split_first() else {
        eprintln!("setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    };

    let mut words = rest.iter().copied();
    let name: Vec<&str> = words.by_ref().take_while(|&w| w != "value").collect();
    let value: Vec<&str> = words.collect();

    if name.is_empty() {
        eprintln!("setoption: missing option name");
        return None;
    }

    Some(Command::SetOption {
        name: name.join(" "),
        value: (!value.is_empty()).then(|| value.join(" ")),
    })
}

/// Parses `position <grid>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed position: expected 'position <grid>'");
        return None;
    }
    Some(Command::Position {
        grid: tokens[1].to_string(),
    })
}

/// Parses `goal <kind> <colour>`.
fn parse_goal(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed goal: expected 'goal <blob|perimeter> <colour>'");
        return None;
    }
    let kind = match tokens[1].parse::<GoalKind>() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("goal: {}", e);
            return None;
        }
    };
    let target = match tokens[2].parse::<Color>() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("goal: {}", e);
            return None;
        }
    };
    Some(Command::Goal { kind, target })
}

/// Parses `randomgoals <count> [seed]`.
fn parse_randomgoals(tokens: &[&str]) -> Option<Command> {
    if !(2..=3).contains(&tokens.len()) {
        eprintln!("malformed randomgoals: expected 'randomgoals <count> [seed]'");
        return None;
    }
    let count = match tokens[1].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("randomgoals: invalid count '{}'", tokens[1]);
            return None;
        }
    };
    let seed = match tokens.get(2) {
        Some(s) => match s.parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => {
                eprintln!("randomgoals: invalid seed '{}'", s);
                return None;
            }
        },
        None => None,
    };
    Some(Command::RandomGoals { count, seed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{DAFFY_DUCK_YELLOW, REAL_RED};

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("  quit  "), Some(Command::Quit));
        assert_eq!(parse_command("cleargoals"), Some(Command::ClearGoals));
        assert_eq!(parse_command("score"), Some(Command::Score));
        assert_eq!(parse_command("describe"), Some(Command::Describe));
    }

    #[test]
    fn empty_and_unknown_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("smash 0 0"), None);
    }

    #[test]
    fn setoption_with_and_without_value() {
        assert_eq!(
            parse_command("setoption name Output value json"),
            Some(Command::SetOption {
                name: "Output".into(),
                value: Some("json".into())
            })
        );
        assert_eq!(
            parse_command("setoption name Verbose"),
            Some(Command::SetOption {
                name: "Verbose".into(),
                value: None
            })
        );
        assert_eq!(parse_command("setoption name value 3"), None);
        assert_eq!(parse_command("setoption Output json"), None);
        assert_eq!(parse_command("setoption"), None);
    }

    #[test]
    fn setoption_joins_multi_word_parts() {
        assert_eq!(
            parse_command("setoption name Score Format value json lines"),
            Some(Command::SetOption {
                name: "Score Format".into(),
                value: Some("json lines".into())
            })
        );
        assert_eq!(
            parse_command("setoption name Output value"),
            Some(Command::SetOption {
                name: "Output".into(),
                value: None
            })
        );
    }

    #[test]
    fn position_takes_one_token() {
        assert_eq!(
            parse_command("position by/yb"),
            Some(Command::Position {
                grid: "by/yb".into()
            })
        );
        assert_eq!(parse_command("position"), None);
        assert_eq!(parse_command("position by yb"), None);
    }

    #[test]
    fn goal_parses_kind_and_colour() {
        assert_eq!(
            parse_command("goal blob y"),
            Some(Command::Goal {
                kind: GoalKind::Blob,
                target: DAFFY_DUCK_YELLOW
            })
        );
        assert_eq!(
            parse_command("goal perimeter 199,44,58"),
            Some(Command::Goal {
                kind: GoalKind::Perimeter,
                target: REAL_RED
            })
        );
        assert_eq!(parse_command("goal corner y"), None);
        assert_eq!(parse_command("goal blob purple"), None);
        assert_eq!(parse_command("goal blob"), None);
    }

    #[test]
    fn randomgoals_with_optional_seed() {
        assert_eq!(
            parse_command("randomgoals 3"),
            Some(Command::RandomGoals {
                count: 3,
                seed: None
            })
        );
        assert_eq!(
            parse_command("randomgoals 2 99"),
            Some(Command::RandomGoals {
                count: 2,
                seed: Some(99)
            })
        );
        assert_eq!(parse_command("randomgoals"), None);
        assert_eq!(parse_command("randomgoals many"), None);
        assert_eq!(parse_command("randomgoals 2 x"), None);
    }
}
