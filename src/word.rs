use crate::buffers::{KeyBuffer, List, Segment, char_len, new_key_buffer, new_list, new_segment};
use crate::case::{to_lower, to_upper};
use crate::tone::Tone;

/// Outcome of every engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelexState {
    Valid,
    Invalid,
    Committed,
    CommittedInvalid,
    BackconvertFailed,
    /// Returned for a call the current state does not allow. Nothing was changed.
    TxError,
}

impl TelexState {
    #[inline]
    pub fn is_committed(self) -> bool {
        matches!(
            self,
            TelexState::Committed | TelexState::CommittedInvalid | TelexState::BackconvertFailed
        )
    }
}

/// What one raw key is responsible for in the rendered word. The payload is a
/// slot index into `c1 ++ v ++ c2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Respos {
    Slot(usize),
    TransitionC1(usize),
    TransitionV(usize),
    TransitionW(usize),
    Tone(usize),
    DoubleUndo(usize),
    Invalidated(usize),
    Expunged(usize),
}

impl Respos {
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Respos::Slot(s)
            | Respos::TransitionC1(s)
            | Respos::TransitionV(s)
            | Respos::TransitionW(s)
            | Respos::Tone(s)
            | Respos::DoubleUndo(s)
            | Respos::Invalidated(s)
            | Respos::Expunged(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordState {
    pub keys: KeyBuffer,
    pub c1: Segment,
    pub v: Segment,
    pub c2: Segment,
    pub tone: Tone,
    pub toned: bool,
    pub cases: List<bool>,
    pub respos: List<Respos>,
    pub next_slot: usize,
    pub backconverted: bool,
    pub state: TelexState,
}

impl WordState {
    pub fn new() -> Self {
        Self {
            keys: new_key_buffer(),
            c1: new_segment(),
            v: new_segment(),
            c2: new_segment(),
            tone: Tone::Level,
            toned: false,
            cases: new_list(),
            respos: new_list(),
            next_slot: 0,
            backconverted: false,
            state: TelexState::Valid,
        }
    }

    pub fn reset(&mut self) {
        self.keys.clear();
        self.c1.clear();
        self.v.clear();
        self.c2.clear();
        self.tone = Tone::Level;
        self.toned = false;
        self.cases.clear();
        self.respos.clear();
        self.next_slot = 0;
        self.backconverted = false;
        self.state = TelexState::Valid;
    }

    #[inline]
    pub fn key_count(&self) -> usize {
        char_len(&self.keys)
    }

    /// Number of rendered characters across the three segments.
    #[inline]
    pub fn len(&self) -> usize {
        char_len(&self.c1) + char_len(&self.v) + char_len(&self.c2)
    }

    /// The key typed before the one being processed, lowercased.
    pub fn prev_key(&self) -> Option<char> {
        self.keys.chars().rev().nth(1).map(to_lower)
    }

    pub fn last_respos(&self) -> Option<Respos> {
        self.respos.last().copied()
    }

    /// Takes a fresh slot index.
    #[inline]
    pub fn take_slot(&mut self) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    /// Applies the case flags to `chars` and collects them.
    pub fn apply_cases(&self, chars: impl Iterator<Item = char>) -> String {
        chars
            .zip(self.cases.iter().copied().chain(core::iter::repeat(false)))
            .map(|(c, upper)| if upper { to_upper(c) } else { c })
            .collect()
    }

    pub fn check_invariants(&self) -> bool {
        if self.state == TelexState::TxError {
            return false;
        }
        if self.keys.is_empty() {
            return matches!(
                self.state,
                TelexState::Valid | TelexState::Committed | TelexState::CommittedInvalid
            ) && self.c1.is_empty()
                && self.v.is_empty()
                && self.c2.is_empty()
                && self.cases.is_empty()
                && self.respos.is_empty()
                && self.next_slot == 0
                && !self.backconverted;
        }
        if self.state != TelexState::BackconvertFailed
            && (self.len() > self.key_count() || self.respos.len() != self.key_count())
        {
            return false;
        }
        if matches!(self.state, TelexState::Valid | TelexState::Committed)
            && self.cases.len() != self.len()
        {
            return false;
        }
        true
    }
}

impl Default for WordState {
    fn default() -> Self {
        Self::new()
    }
}
