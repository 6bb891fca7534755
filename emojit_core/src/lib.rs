//! `emojit_core`: pure pipeline logic, no I/O.
//!
//! Goals:
//! - **Reusable core**: CLI or any server front end share the same `Engine`
//! - **Clear stages**: segmenter -> punctuation -> tagger -> inflector -> filter -> translator
//!   -> reconstruct
//! - **Pluggable resources**: dictionary, tagger and inflector are traits; loading them is
//!   someone else's job
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod filter;
pub mod inflector;
pub mod model;
pub mod punctuation;
pub mod segmenter;
pub mod tagger;
pub mod translator;
