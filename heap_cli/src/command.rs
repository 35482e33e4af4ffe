use indexed_heap::Entry;
use thiserror::Error;

pub type ScriptEntry = Entry<String, String, f64>;

#[derive(Debug, PartialEq)]
pub enum Command {
    Put {
        key: String,
        value: String,
        priority: f64,
    },
    Remove(String),
    Get(String),
    Next,
    Pop,
    All,
    Len,
    Init(Vec<ScriptEntry>),
    Clear,
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` takes {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid priority `{0}`")]
    Priority(String),
    #[error("malformed entry `{0}`, expected key:value:priority")]
    Entry(String),
}

fn parse_priority(token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(priority) if !priority.is_nan() => Ok(priority),
        _ => Err(ParseError::Priority(token.to_string())),
    }
}

fn parse_entry(token: &str) -> Result<ScriptEntry, ParseError> {
    // the priority is split off the right so values may contain ':'
    let malformed = || ParseError::Entry(token.to_string());
    let (rest, priority) = token.rsplit_once(':').ok_or_else(malformed)?;
    let (key, value) = rest.split_once(':').ok_or_else(malformed)?;
    if key.is_empty() {
        return Err(malformed());
    }
    Ok(Entry::new(
        key.to_string(),
        value.to_string(),
        parse_priority(priority)?,
    ))
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::Arity {
            command,
            expected,
            got: args.len(),
        })
    }
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = match line.split_once('#') {
        Some((code, _comment)) => code,
        None => line,
    };
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "put" => {
            expect_args("put", &args, 3)?;
            Command::Put {
                key: args[0].to_string(),
                value: args[1].to_string(),
                priority: parse_priority(args[2])?,
            }
        }
        "remove" => {
            expect_args("remove", &args, 1)?;
            Command::Remove(args[0].to_string())
        }
        "get" => {
            expect_args("get", &args, 1)?;
            Command::Get(args[0].to_string())
        }
        "next" => {
            expect_args("next", &args, 0)?;
            Command::Next
        }
        "pop" => {
            expect_args("pop", &args, 0)?;
            Command::Pop
        }
        "all" => {
            expect_args("all", &args, 0)?;
            Command::All
        }
        "len" => {
            expect_args("len", &args, 0)?;
            Command::Len
        }
        "clear" => {
            expect_args("clear", &args, 0)?;
            Command::Clear
        }
        "init" => Command::Init(
            args.iter()
                .map(|token| parse_entry(token))
                .collect::<Result<_, _>>()?,
        ),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
