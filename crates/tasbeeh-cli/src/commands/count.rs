//! Count command: an interactive tasbeeh session on the terminal.
//!
//! Reads one command per line:
//! - empty line or `t`: tap
//! - `r <n>`: remove the n-th queued dhikr (1-based)
//! - `q`: abandon the session
//!
//! The session ends when every dhikr reached its target, on `q`, or at end of input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Args;

use tasbeeh_core::{
    Category, Clock, DailyAggregate, DhikrId, KeyValueStore, SessionEngine, TapOutcome, catalog,
    settings,
};

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Pick from morning or evening azkar instead of the presets.
    #[arg(long)]
    pub category: Option<Category>,
    /// IDs of the dhikr to count, as listed by `tasbeeh presets`.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Tap,
    Remove(usize),
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "" | "t" => Input::Tap,
        "q" => Input::Quit,
        other => other
            .strip_prefix("r ")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map_or_else(|| Input::Unknown(other.to_string()), Input::Remove),
    }
}

pub fn run<R, W, S, C>(reader: R, writer: &mut W, store: S, clock: C, args: &CountArgs) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: KeyValueStore,
    C: Clock,
{
    let ids = args
        .ids
        .iter()
        .map(|id| DhikrId::new(id.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let entries = match args.category {
        Some(category) => catalog::load_azkar(&store, category),
        None => catalog::presets(),
    };
    let selection = catalog::find(&entries, &ids);
    if selection.is_empty() {
        bail!("no dhikr matches ids: {}", args.ids.join(", "));
    }

    let default_target = settings::load_default_target(&store);
    let mut engine = SessionEngine::new(DailyAggregate::new(store, clock), default_target);
    engine.start_session(selection);
    write_current(writer, &engine)?;

    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        match parse_input(&line) {
            Input::Tap => match engine.tap() {
                TapOutcome::Counted { remaining, .. } => writeln!(writer, "{remaining} left")?,
                TapOutcome::Advanced { .. } => write_current(writer, &engine)?,
                TapOutcome::Ignored | TapOutcome::Completed => {}
            },
            Input::Remove(n) => match engine.remove_from_queue(n - 1) {
                Some(item) => {
                    writeln!(writer, "Removed: {}", item.text)?;
                    write_current(writer, &engine)?;
                }
                None => writeln!(writer, "No dhikr #{n} in the queue")?,
            },
            Input::Quit => break,
            Input::Unknown(other) => writeln!(
                writer,
                "Unknown command: {other} (Enter/t = tap, r <n> = remove, q = quit)"
            )?,
        }
        if engine.is_session_complete() || engine.queue().is_empty() {
            break;
        }
    }

    if engine.is_session_complete() {
        writeln!(
            writer,
            "Session complete: {} taps. May Allah accept from us and from you.",
            engine.session_tap_count()
        )?;
    } else {
        writeln!(
            writer,
            "Session ended. Taps this session: {}",
            engine.session_tap_count()
        )?;
    }
    writeln!(writer, "Today: {}", engine.daily().total())?;
    engine.reset_session();

    Ok(())
}

fn write_current<W, S, C>(writer: &mut W, engine: &SessionEngine<S, C>) -> Result<()>
where
    W: Write,
    S: KeyValueStore,
    C: Clock,
{
    if let Some(item) = engine.current_item() {
        writeln!(
            writer,
            "[{}/{}] {} ({}/{})",
            engine.current_index() + 1,
            engine.queue().len(),
            item.text,
            item.completed,
            item.target
        )?;
    }
    Ok(())
}
