//! Conjugation and deconjugation of French and Italian verbs.
//!
//! [`Engine`] is the entry point: it locates the data files for a language,
//! merges the user's own verb list, and answers lookups from any number of
//! threads. The building blocks live in `conj_core` and are re-exported.

pub mod engine;
pub mod trace_init;

pub use conj_core::{conjugate, dict, document, grammar, settings, template, unicode};
pub use engine::{user_verbs_path, DataPaths, Engine};
