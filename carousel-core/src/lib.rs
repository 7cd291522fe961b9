//! # Carousel Core
//!
//! State engine for a horizontally paging tile carousel. Tiles are grouped
//! into frames of `increment` tiles; the engine clamps navigation requests,
//! tracks which tiles are screen-reader visible, schedules deferred media
//! and decides which navigation controls are enabled.
//!
//! ## Architecture
//!
//! - [`partition`]: frame partitioning of the tile sequence
//! - [`state`]: index resolution and the committed carousel state
//! - [`lazy_load`]: once-per-tile media scheduling
//! - [`accessibility`]: hidden/visible and tab order toggling
//! - [`navigation`]: previous/next control enablement
//! - [`layout`]: pixel metrics for the wrapped container
//! - [`options`]: option coercion and defaults
//! - [`engine`]: [`CarouselEngine`], which drives all of the above against a
//!   [`CarouselHost`](carousel_contracts::host::CarouselHost)
//!
//! ## Example
//!
//! ```no_run
//! use carousel_contracts::prelude::*;
//! use carousel_core::{CarouselEngine, CarouselOptions};
//!
//! fn page<H: CarouselHost>(host: H, holder: NodeHandle, tiles: Vec<TileSpec>) -> carousel_core::Result<()> {
//!     let mut engine = CarouselEngine::new(host, holder);
//!     engine.init(tiles, CarouselOptions::new().with_increment(3))?;
//!     engine.next()?;
//!     let snapshot = engine.snapshot()?;
//!     assert_eq!(snapshot.index, 3);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]

pub mod accessibility;
pub mod engine;
pub mod error;
pub mod layout;
pub mod lazy_load;
pub mod navigation;
pub mod options;
pub mod partition;
pub mod state;

pub use accessibility::{AccessibilityStateToggler, AriaOp};
pub use engine::{CarouselEngine, TransitionPhase};
pub use error::{CarouselError, ConfigurationError, HookPhase, Result};
pub use lazy_load::LazyLoadScheduler;
pub use navigation::NavigationButtonState;
pub use options::{
    CarouselConfig, CarouselOptions, Coercible, FrameHook, FrameHooks,
    parse_int, parse_int_prefix,
};
pub use partition::{FramePartition, partition};
pub use state::{CarouselState, TileRecord, resolve_target};

pub use carousel_contracts;
pub use carousel_model;
