//! Configuration loading for the carousel engine.
//!
//! Options come from a TOML or JSON file, inline JSON in the environment or
//! a default file next to the working directory, with a few scalar
//! environment overrides applied last. The result is an unnormalized
//! [`CarouselOptions`](carousel_core::CarouselOptions); coercion and
//! validation still happen in `CarouselOptions::normalize`.

#![allow(missing_docs)]

pub mod loader;
pub mod util;

pub use loader::{
    CarouselOptionsSource, ConfigLoadError, apply_env_overrides,
    find_default_file, load_from_env, load_from_file, load_with, parse_from_str,
    parse_json,
};
