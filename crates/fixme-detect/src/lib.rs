//! # fixme-detect
//!
//! Decides whether clipboard text is source code or prose, using cheap
//! lexical signals: brackets, semicolons, `=`, programming keywords,
//! multi-character operators, and repeated indentation. A markdown code
//! fence always means code. No parser, no I/O, linear in the input.

pub mod engine;
pub mod signals;
pub mod vocabulary;

pub use engine::{classify, CodeDetector};
