//! User-facing adapters: interactive prompts in, rendered report out.

pub mod cli;
