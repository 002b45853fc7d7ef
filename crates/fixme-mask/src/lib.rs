//! # fixme-mask
//!
//! Shields URLs from a text rewrite. `mask` swaps every detected URL for an
//! opaque `⟦URL_<n>⟧` token and records the mapping; `unmask` puts the
//! originals back into whatever text comes out of the rewrite.
//! A detector that fails to compile degrades to "no URLs found".

pub mod degradation;
pub mod engine;
pub mod patterns;

pub use engine::{mask, unmask, UrlMasker};
