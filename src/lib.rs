//! Vietnamese Telex and VNI transliteration, one word at a time.
//!
//! ```
//! use viet_telex::{TelexConfig, TelexEngine, TelexState};
//!
//! let mut engine = TelexEngine::new(TelexConfig::default());
//! for c in "ddoongf".chars() {
//!     engine.push_char(c);
//! }
//! assert_eq!(engine.peek(), "đồng");
//! assert_eq!(engine.commit(), TelexState::Committed);
//! assert_eq!(engine.retrieve(), "đồng");
//! ```

mod buffers;
mod case;
mod config;
mod engine;
mod modes;
mod tables;
mod tone;
mod word;

pub use case::{fold_case, to_lower, to_upper};
pub use config::{InputMethod, OptimizeMultilang, TelexConfig};
pub use engine::TelexEngine;
pub use modes::{CharTypes, classify, tone_of};
pub use tone::Tone;
pub use word::TelexState;

#[cfg(test)]
mod tests;
