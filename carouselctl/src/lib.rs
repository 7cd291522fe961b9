//! Headless driver for the carousel engine.
//!
//! [`headless::HeadlessDocument`] implements every collaborator trait over
//! an in-memory node arena, [`simulate`] runs scripted navigation against it
//! and [`report`] renders loaded options for inspection.

#![allow(missing_docs)]

pub mod headless;
pub mod report;
pub mod simulate;

pub use headless::{HeadlessDocument, insert_after, insert_before, tile_strip};
pub use simulate::{Action, StripSpec, run};
