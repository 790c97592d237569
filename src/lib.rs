//! Cognitive compiler: asks a language model for "Hello, World!" snippets in a
//! handful of programming languages, translates every snippet into a handful of
//! spoken languages and writes everything to disk.

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod error;
pub mod generator;
pub mod openai;
pub mod report;
pub mod retry;
pub mod translation;
