//! CLI-only concerns: table rendering, sample collections, and the action
//! sink that gives tag/email/export their terminal-world side effects.

pub mod print;
pub mod seed;
pub mod sink;
