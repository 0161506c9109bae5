use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMethod {
    #[default]
    Telex,
    Vni,
}

/// How hard the engine tries to let English words through untouched. Variants
/// are ordered from least to most strict.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeMultilang {
    Off,
    #[default]
    On,
    Aggressive,
    Strict,
}

/// Per-engine settings. Safe to change between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TelexConfig {
    pub input_method: InputMethod,
    /// Mark open `oa`, `oe`, `uy` on the first vowel (`hòa`) instead of the second (`hoà`).
    pub oa_uy_tone1: bool,
    /// Let the stroke key turn `d` into `đ` after the nucleus was typed (`dad` → `đa`).
    pub accept_separate_dd: bool,
    /// Keep a word invalid after backspacing out of an invalid state.
    pub backspace_keeps_invalid: bool,
    pub optimize_multilang: OptimizeMultilang,
}

impl Default for TelexConfig {
    fn default() -> Self {
        Self {
            input_method: InputMethod::Telex,
            oa_uy_tone1: false,
            accept_separate_dd: true,
            backspace_keeps_invalid: true,
            optimize_multilang: OptimizeMultilang::On,
        }
    }
}

impl TelexConfig {
    pub fn with_input_method(mut self, input_method: InputMethod) -> Self {
        self.input_method = input_method;
        self
    }
}
