use crate::command::{parse_line, Command};
use indexed_heap::{Entry, IndexedMinHeap};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub executed: usize,
    pub rejected: usize,
    pub remaining: usize,
}

fn format_entry<K: Display, V: Display, P: Display>(entry: &Entry<K, V, P>) -> String {
    format!("{} {} {}", entry.key, entry.value, entry.priority)
}

fn format_maybe<K: Display, V: Display, P: Display>(entry: Option<&Entry<K, V, P>>) -> String {
    entry.map_or_else(|| "none".to_string(), format_entry)
}

#[derive(Default)]
pub struct Session {
    heap: IndexedMinHeap<String, String, f64>,
}

impl Session {
    /// Applies one command and returns the lines it prints.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Put {
                key,
                value,
                priority,
            } => {
                self.heap.put(key, value, priority);
                vec!["ok".to_string()]
            }
            Command::Remove(key) => {
                self.heap.remove(&key);
                vec!["ok".to_string()]
            }
            Command::Get(key) => vec![format_maybe(self.heap.get(&key))],
            Command::Next => vec![format_maybe(self.heap.get_next())],
            Command::Pop => vec![format_maybe(self.heap.pop().as_ref())],
            Command::All => self.heap.iter().map(format_entry).collect(),
            Command::Len => vec![self.heap.len().to_string()],
            Command::Init(entries) => match self.heap.initialize(entries) {
                Ok(()) => vec!["ok".to_string()],
                Err(err) => vec![format!("error: {err}")],
            },
            Command::Clear => {
                self.heap.clear();
                vec!["ok".to_string()]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Runs every line of `reader` against a fresh heap, printing results to
/// `out`. Lines that fail to parse are logged and skipped.
pub fn run<R: BufRead, W: Write>(reader: R, mut out: W) -> io::Result<Summary> {
    let mut session = Session::default();
    let mut summary = Summary::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(command)) => {
                log::debug!("line {}: {:?}", index + 1, command);
                for output in session.execute(command) {
                    writeln!(out, "{output}")?;
                }
                summary.executed += 1;
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("line {}: {err}", index + 1);
                summary.rejected += 1;
            }
        }
    }
    out.flush()?;
    summary.remaining = session.len();
    Ok(summary)
}
