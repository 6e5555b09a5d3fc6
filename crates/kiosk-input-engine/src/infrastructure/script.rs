//! Line-oriented command scripts for the replay console.
//!
//! ```text
//! # comments and blank lines are ignored
//! key 20                 # DPAD_DOWN
//! key 29 shift           # Shift+A
//! text hello\nworld      # \n, \t and \\ are unescaped
//! action back            # back | home | recents | media
//! remote select          # up, down, left, right, select, back, home, menu, playpause
//! ```

use kiosk_input_core::command::remote::UnknownButton;
use kiosk_input_core::{ActionKind, Command, KeyCode, Modifiers, RemoteButton};
use thiserror::Error;

/// Error type for script lines that do not describe a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command '{0}' (expected key, text, action or remote)")]
    UnknownVerb(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid key code '{0}'")]
    InvalidKeyCode(String),
    #[error("unknown modifier '{0}' (expected shift, ctrl or alt)")]
    UnknownModifier(String),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error(transparent)]
    UnknownButton(#[from] UnknownButton),
}

/// Parses one script line.  Blank lines and comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandParseError> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match verb {
        "key" => parse_key(strip_comment(rest))?,
        // Text keeps everything after the first space, `#` included.
        "text" => {
            if rest.is_empty() {
                return Err(CommandParseError::MissingArgument("text"));
            }
            Command::text(unescape(rest.trim_end_matches(['\r', '\n'])))
        }
        "action" => {
            let name = single_word(strip_comment(rest), "action")?;
            let kind = ActionKind::from_name(name)
                .ok_or_else(|| CommandParseError::UnknownAction(name.to_string()))?;
            Command::action(kind)
        }
        "remote" => {
            let name = single_word(strip_comment(rest), "remote")?;
            name.parse::<RemoteButton>()?.to_command()
        }
        other => return Err(CommandParseError::UnknownVerb(other.to_string())),
    };
    Ok(Some(command))
}

fn strip_comment(s: &str) -> &str {
    s.split_once('#').map_or(s, |(before, _)| before).trim()
}

fn single_word<'a>(s: &'a str, verb: &'static str) -> Result<&'a str, CommandParseError> {
    s.split_whitespace()
        .next()
        .ok_or(CommandParseError::MissingArgument(verb))
}

fn parse_key(rest: &str) -> Result<Command, CommandParseError> {
    let mut words = rest.split_whitespace();
    let code = words.next().ok_or(CommandParseError::MissingArgument("key"))?;
    let code: i32 = code
        .parse()
        .map_err(|_| CommandParseError::InvalidKeyCode(code.to_string()))?;

    let mut modifiers = Modifiers::NONE;
    for word in words {
        let bits = match word.to_ascii_lowercase().as_str() {
            "shift" => Modifiers::SHIFT,
            "ctrl" | "control" => Modifiers::CTRL,
            "alt" => Modifiers::ALT,
            _ => return Err(CommandParseError::UnknownModifier(word.to_string())),
        };
        modifiers = modifiers.with(bits);
    }
    Ok(Command::key_with(KeyCode(code), modifiers))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
