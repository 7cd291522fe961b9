use std::io::Write;
use std::str::FromStr;

use anyhow::Context;
use carousel_core::{CarouselEngine, CarouselOptions};
use thiserror::Error;
use tracing::debug;

use crate::headless::{HeadlessDocument, tile_strip};

/// One step of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    Reset,
    Goto(i64),
    /// A click routed by control class name (`prevFrame` / `nextFrame`).
    Click(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action `{0}` (expected next, prev, reset, goto:<index> or click:<class>)")]
pub struct ParseActionError(String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw {
            "next" => return Ok(Action::Next),
            "prev" => return Ok(Action::Prev),
            "reset" => return Ok(Action::Reset),
            _ => {}
        }

        if let Some(index) = raw.strip_prefix("goto:") {
            return index
                .trim()
                .parse()
                .map(Action::Goto)
                .map_err(|_| ParseActionError(s.to_string()));
        }
        if let Some(class) = raw.strip_prefix("click:")
            && !class.is_empty()
        {
            return Ok(Action::Click(class.to_string()));
        }

        Err(ParseActionError(s.to_string()))
    }
}

/// Size of the generated tile strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSpec {
    pub tiles: usize,
    pub tile_width: f32,
    pub tile_height: f32,
}

/// Build a headless carousel, run `actions` against it and write one JSON
/// snapshot per line: the initial state, then one after each action.
pub fn run<W: Write>(
    strip: StripSpec,
    options: CarouselOptions,
    actions: &[Action],
    out: &mut W,
) -> anyhow::Result<CarouselEngine<HeadlessDocument>> {
    let (doc, holder, tiles) = tile_strip(strip.tiles, strip.tile_width, strip.tile_height);
    let mut engine = CarouselEngine::new(doc, holder);
    engine
        .init(tiles, options)
        .context("failed to initialize carousel")?;
    write_snapshot(&engine, out)?;

    for action in actions {
        debug!(?action, "applying action");
        match action {
            Action::Next => {
                engine.next()?;
            }
            Action::Prev => {
                engine.prev()?;
            }
            Action::Reset => {
                engine.reset()?;
            }
            Action::Goto(index) => {
                engine.advance(*index, true)?;
            }
            Action::Click(class) => {
                engine.dispatch_control(class)?;
            }
        }
        write_snapshot(&engine, out)?;
    }

    Ok(engine)
}

fn write_snapshot<W: Write>(
    engine: &CarouselEngine<HeadlessDocument>,
    out: &mut W,
) -> anyhow::Result<()> {
    let snapshot = engine.snapshot()?;
    serde_json::to_writer(&mut *out, &snapshot).context("failed to encode snapshot")?;
    writeln!(out)?;
    Ok(())
}
