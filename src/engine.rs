use std::fmt;

use log::{debug, trace};
use phf::Map;

use crate::buffers::{KEY_CAPACITY, Segment, assign, char_len, new_segment, push, push_char};
use crate::case::{fold_case, to_lower, to_upper};
use crate::config::{OptimizeMultilang, TelexConfig};
use crate::modes::{CharTypes, Mode, mode_for};
use crate::tables::{
    C2Mode, RESPOS, TRANSITIONS_V_C2, TRANSITIONS_V_C2_Q, VALID_C1, VALID_C2, VALID_V,
    VALID_V_GI, VALID_V_OA_UY, VALID_V_Q, VowelInfo, WLIST_EN, WLIST_EN_2,
};
use crate::tone::{Tone, map_vowel_with_tone};
use crate::word::{Respos, TelexState, WordState};

/// Longest word, in keys, that can still be valid.
const MAX_WORD_KEYS: usize = 9;

#[derive(Clone, Copy)]
enum Part {
    C1,
    C2,
}

/// Transliterates one word at a time. Feed keys with [`push_char`], render
/// with [`peek`], finish with [`commit`] and call [`reset`] before the next word.
///
/// [`push_char`]: TelexEngine::push_char
/// [`peek`]: TelexEngine::peek
/// [`commit`]: TelexEngine::commit
/// [`reset`]: TelexEngine::reset
#[derive(Clone)]
pub struct TelexEngine {
    config: TelexConfig,
    mode: &'static Mode,
    word: WordState,
}

impl TelexEngine {
    pub fn new(config: TelexConfig) -> Self {
        Self {
            config,
            mode: mode_for(config.input_method),
            word: WordState::new(),
        }
    }

    pub fn get_config(&self) -> TelexConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TelexConfig) {
        self.config = config;
        self.mode = mode_for(config.input_method);
    }

    pub fn reset(&mut self) {
        self.word.reset();
    }

    pub fn get_state(&self) -> TelexState {
        self.word.state
    }

    pub fn get_tone(&self) -> Tone {
        self.word.tone
    }

    /// Raw keys held, including elided duplicates.
    pub fn count(&self) -> usize {
        self.word.key_count()
    }

    /// Whether `c` is a key the engine consumes rather than a separator.
    pub fn accepts_char(&self, c: char) -> bool {
        self.mode.classify(to_lower(c)).is(CharTypes::WORD)
    }

    pub fn push_char(&mut self, corig: char) -> TelexState {
        if !matches!(self.word.state, TelexState::Valid | TelexState::Invalid) {
            return TelexState::TxError;
        }
        if self.word.key_count() >= KEY_CAPACITY {
            self.word.state = TelexState::Invalid;
            return self.word.state;
        }

        push_char(&mut self.word.keys, corig);
        let (c, upper) = fold_case(corig);
        let cat = self.mode.classify(c);

        if self.word.state == TelexState::Invalid
            || self.word.key_count() > MAX_WORD_KEYS
            || cat.is_empty()
        {
            self.invalidate();
        } else {
            self.dispatch(c, upper, cat);
        }

        debug_assert!(self.word.check_invariants());
        self.word.state
    }

    fn dispatch(&mut self, c: char, upper: bool, cat: CharTypes) {
        let c1 = self.word.c1.as_str();
        let (c1_empty, c1_g, c1_gi, c1_d, c1_stroked) =
            (c1.is_empty(), c1 == "g", c1 == "gi", c1 == "d", c1 == "đ");
        let v_empty = self.word.v.is_empty();
        let c2_empty = self.word.c2.is_empty();
        let stroke = self.mode.stroke;

        if c1_empty && v_empty && cat.is(CharTypes::CONSO_C1) {
            self.append(Part::C1, c, upper);
        } else if v_empty && c1_g && c == 'i' {
            self.append(Part::C1, c, upper);
        } else if c1_d
            && c == stroke
            && (self.config.accept_separate_dd || (v_empty && c2_empty))
        {
            assign(&mut self.word.c1, "đ");
            push(&mut self.word.respos, Respos::TransitionC1(0));
        } else if c1_stroked && c == stroke {
            self.invalidate_and_pop_back(c);
        } else if v_empty && c2_empty && !c1_gi && cat.is(CharTypes::CONSO_CONTINUE) {
            self.append(Part::C1, c, upper);
        } else if cat.is(CharTypes::VOWEL) {
            self.push_vowel(c, upper);
        } else if !v_empty && cat.is(CharTypes::VOWEL_W) {
            self.push_modifier(c);
        } else if (c1_gi || !v_empty) && cat.is(CharTypes::TONE) {
            self.push_tone(c);
        } else if ((c1_gi && v_empty) || !v_empty) && c2_empty && cat.is(CharTypes::CONSO_C2) {
            self.push_coda(c, upper);
        } else if !c2_empty && cat.is(CharTypes::CONSO_CONTINUE) {
            self.append(Part::C2, c, upper);
        } else {
            trace!("no rule for {c:?} after {:?}", self.word.keys);
            self.invalidate();
        }
    }

    fn push_vowel(&mut self, c: char, upper: bool) {
        let repeated = self.word.key_count() > 1
            && matches!(self.word.last_respos(), Some(Respos::TransitionV(_)))
            && self.word.prev_key() == Some(c);
        push_char(&mut self.word.v, c);
        let before = char_len(&self.word.v);

        if self.rewrite_v(self.mode.transitions, false) {
            if self.config.optimize_multilang >= OptimizeMultilang::Strict && self.word.toned {
                self.invalidate();
            } else if repeated {
                push(&mut self.word.cases, upper);
                let slot = self.word.take_slot();
                push(&mut self.word.respos, Respos::DoubleUndo(slot));
            } else if char_len(&self.word.v) < before {
                let slot = self.rewritten_slot(&RESPOS);
                push(&mut self.word.respos, Respos::TransitionV(slot));
            } else {
                push(&mut self.word.cases, upper);
                let slot = self.word.take_slot();
                push(&mut self.word.respos, Respos::TransitionV(slot));
            }
        } else {
            push(&mut self.word.cases, upper);
            let slot = self.word.take_slot();
            if repeated {
                push(&mut self.word.respos, Respos::DoubleUndo(slot));
                self.word.state = TelexState::Invalid;
            } else {
                push(&mut self.word.respos, Respos::Slot(slot));
            }
            if !self.word.c2.is_empty() {
                self.word.state = TelexState::Invalid;
            }
        }
    }

    fn push_modifier(&mut self, c: char) {
        let after_q = self.word.c1.as_str() == "q";
        let Some(modifier) = (self.mode.modifier)(c, after_q) else {
            self.invalidate_and_pop_back(c);
            return;
        };
        if !self.rewrite_v(modifier.rewrites, true) {
            self.invalidate_and_pop_back(c);
            return;
        }
        if !self.word.c2.is_empty() {
            self.rewrite_v(coda_fixups(after_q), false);
        }
        let slot = self.rewritten_slot(modifier.positions);
        push(&mut self.word.respos, Respos::TransitionW(slot));
    }

    fn push_tone(&mut self, c: char) {
        if self.config.optimize_multilang >= OptimizeMultilang::Strict && self.word.toned {
            self.invalidate();
            return;
        }
        let tone = (self.mode.tone)(c);
        if tone != self.word.tone {
            self.word.tone = tone;
            self.word.toned = true;
            let slot = self.tone_slot();
            push(&mut self.word.respos, Respos::Tone(slot));
        } else {
            self.invalidate_and_pop_back(c);
        }
    }

    fn push_coda(&mut self, c: char, upper: bool) {
        // stop codas only take sharp or heavy, except after đ
        let mut buf = [0u8; 4];
        let key: &str = c.encode_utf8(&mut buf);
        if self.word.c1.as_str() != "đ"
            && !matches!(self.word.tone, Tone::Level | Tone::Sharp | Tone::Heavy)
            && VALID_C2.get(key) == Some(&true)
        {
            self.invalidate();
            return;
        }
        let after_q = self.word.c1.as_str() == "q";
        self.rewrite_v(coda_fixups(after_q), false);
        self.append(Part::C2, c, upper);
    }

    fn append(&mut self, part: Part, c: char, upper: bool) {
        let segment = match part {
            Part::C1 => &mut self.word.c1,
            Part::C2 => &mut self.word.c2,
        };
        push_char(segment, c);
        push(&mut self.word.cases, upper);
        let slot = self.word.take_slot();
        push(&mut self.word.respos, Respos::Slot(slot));
    }

    fn invalidate(&mut self) {
        let slot = self.word.take_slot();
        push(&mut self.word.respos, Respos::Invalidated(slot));
        self.word.state = TelexState::Invalid;
    }

    /// Invalidates, marking the key as a duplicate of the previous one when it is.
    fn invalidate_and_pop_back(&mut self, c: char) {
        let slot = self.word.take_slot();
        let entry = if self.word.prev_key() == Some(c) {
            Respos::DoubleUndo(slot)
        } else {
            Respos::Invalidated(slot)
        };
        push(&mut self.word.respos, entry);
        self.word.state = TelexState::Invalid;
    }

    fn rewrite_v(&mut self, table: &Map<&'static str, &'static str>, w_mode: bool) -> bool {
        let Some(&to) = table.get(self.word.v.as_str()) else {
            return false;
        };
        if w_mode {
            // an identity rewrite only counts once, and only before the coda
            let changes = self.word.v.as_str() != to || self.word.c2.is_empty();
            let after_w = matches!(self.word.last_respos(), Some(Respos::TransitionW(_)));
            if !changes || after_w {
                return false;
            }
        }
        assign(&mut self.word.v, to);
        true
    }

    /// Slot of the character a rewrite acted on.
    fn rewritten_slot(&self, positions: &Map<&'static str, usize>) -> usize {
        let v = self.word.v.as_str();
        let pos = match positions.get(v) {
            Some(pos) => *pos,
            None => char_len(v).saturating_sub(1),
        };
        char_len(&self.word.c1) + pos
    }

    fn lookup_vowel(&self) -> Option<VowelInfo> {
        let v = self.word.v.as_str();
        match self.word.c1.as_str() {
            "q" => VALID_V_Q.get(v).copied(),
            "gi" => VALID_V_GI.get(v).copied(),
            _ if self.word.c2.is_empty() && self.config.oa_uy_tone1 => {
                VALID_V_OA_UY.get(v).or_else(|| VALID_V.get(v)).copied()
            }
            _ => VALID_V.get(v).copied(),
        }
    }

    fn predict_tone_pos(&self) -> Option<usize> {
        if self.word.c1.as_str() == "q" {
            return None;
        }
        match char_len(&self.word.v) {
            1 => Some(0),
            2 | 3 => Some(1),
            _ => None,
        }
    }

    /// Slot the tone mark renders at right now.
    fn tone_slot(&self) -> usize {
        let c1 = char_len(&self.word.c1);
        match self.lookup_vowel() {
            Some(VowelInfo {
                tone_pos: Some(pos),
                ..
            }) => c1 + pos,
            Some(_) => c1.saturating_sub(1),
            None => (c1 + char_len(&self.word.v)).saturating_sub(1),
        }
    }

    fn is_english(&self) -> bool {
        let level = self.config.optimize_multilang;
        if level < OptimizeMultilang::On {
            return false;
        }
        let lowered: String = self.word.keys.chars().map(to_lower).collect();
        WLIST_EN.contains(lowered.as_str())
            || (level >= OptimizeMultilang::Aggressive && WLIST_EN_2.contains(lowered.as_str()))
    }

    /// Resolves the tone position for a commit, moving the `i` of a bare `gi`
    /// into the nucleus.
    fn settle_tone_pos(&mut self, info: VowelInfo) -> Option<usize> {
        match info.tone_pos {
            Some(pos) => Some(pos),
            None if self.word.c1.as_str() == "gi" && self.word.v.is_empty() => {
                let _ = self.word.c1.pop();
                push_char(&mut self.word.v, 'i');
                Some(0)
            }
            None => None,
        }
    }

    fn apply_tone_at(&mut self, pos: usize) {
        let mut toned: Segment = new_segment();
        for (i, ch) in self.word.v.chars().enumerate() {
            let ch = if i == pos { map_vowel_with_tone(ch, self.word.tone) } else { ch };
            push_char(&mut toned, ch);
        }
        self.word.v = toned;
    }

    fn reject(&mut self) -> TelexState {
        self.word.state = TelexState::CommittedInvalid;
        self.word.state
    }

    /// Validates the word and freezes it.
    pub fn commit(&mut self) -> TelexState {
        match self.word.state {
            TelexState::Valid => {}
            TelexState::Invalid => {
                self.word.state = TelexState::CommittedInvalid;
                return self.word.state;
            }
            state => return state,
        }
        if self.word.keys.is_empty() {
            self.word.state = TelexState::Committed;
            return self.word.state;
        }
        if self.is_english() {
            debug!("commit rejected: english word {:?}", self.word.keys);
            return self.reject();
        }
        if !VALID_C1.contains(self.word.c1.as_str()) {
            debug!("commit rejected: onset {:?}", self.word.c1);
            return self.reject();
        }
        match VALID_C2.get(self.word.c2.as_str()) {
            None => {
                debug!("commit rejected: coda {:?}", self.word.c2);
                return self.reject();
            }
            Some(true) if !matches!(self.word.tone, Tone::Sharp | Tone::Heavy) => {
                debug!("commit rejected: {:?} on stop coda {:?}", self.word.tone, self.word.c2);
                return self.reject();
            }
            Some(_) => {}
        }
        let Some(info) = self.lookup_vowel() else {
            debug!("commit rejected: nucleus {:?}", self.word.v);
            return self.reject();
        };
        let pos = match info.tone_pos {
            Some(pos) => {
                let has_c2 = !self.word.c2.is_empty();
                match (info.c2, has_c2) {
                    (C2Mode::MustC2, false) | (C2Mode::NoC2, true) => {
                        debug!("commit rejected: {:?} with coda {:?}", self.word.v, self.word.c2);
                        return self.reject();
                    }
                    _ => pos,
                }
            }
            None => match self.settle_tone_pos(info) {
                Some(pos) => pos,
                None => return self.reject(),
            },
        };
        self.apply_tone_at(pos);
        self.word.state = TelexState::Committed;
        debug_assert!(self.word.check_invariants());
        self.word.state
    }

    /// Freezes the word, only requiring a known nucleus to place the tone on.
    pub fn force_commit(&mut self) -> TelexState {
        match self.word.state {
            TelexState::Valid => {}
            TelexState::Invalid => {
                self.word.state = TelexState::CommittedInvalid;
                return self.word.state;
            }
            state => return state,
        }
        if self.word.keys.is_empty() {
            self.word.state = TelexState::Committed;
            return self.word.state;
        }
        let Some(pos) = self.lookup_vowel().and_then(|info| self.settle_tone_pos(info)) else {
            debug!("force commit rejected: nucleus {:?}", self.word.v);
            return self.reject();
        };
        self.apply_tone_at(pos);
        self.word.state = TelexState::Committed;
        debug_assert!(self.word.check_invariants());
        self.word.state
    }

    /// Gives up on transliterating the word.
    pub fn cancel(&mut self) -> TelexState {
        if self.word.state.is_committed() {
            return self.word.state;
        }
        if self.word.backconverted && self.word.len() != self.word.key_count() {
            // keys no longer spell the word, keep what is on screen
            let shown = self.peek();
            assign(&mut self.word.keys, &shown);
            self.word.state = TelexState::BackconvertFailed;
        } else {
            self.word.state = TelexState::CommittedInvalid;
        }
        self.word.state
    }

    pub fn backspace(&mut self) -> TelexState {
        match self.word.state {
            TelexState::Valid => self.backspace_valid(),
            TelexState::Invalid => self.backspace_invalid(),
            TelexState::BackconvertFailed => self.backspace_backconverted(),
            _ => TelexState::TxError,
        }
    }

    fn snapshot(&self) -> Vec<(char, Respos)> {
        self.word.keys.chars().zip(self.word.respos.iter().copied()).collect()
    }

    fn backspace_valid(&mut self) -> TelexState {
        let history = self.snapshot();

        if self.lookup_vowel().is_none() && self.word.tone != Tone::Level {
            self.word.reset();
            for (c, _) in &history[..history.len().saturating_sub(1)] {
                self.push_char(*c);
            }
            return self.word.state;
        }

        let Some(keep_slots) = self.word.len().checked_sub(1) else {
            self.word.reset();
            return self.word.state;
        };
        let tone_slot = self.tone_slot();
        let backconverted = self.word.backconverted;

        let mut trace: Vec<Respos> = history.iter().map(|(_, r)| *r).collect();
        let mut last_tone = None;
        for (i, r) in trace.iter_mut().enumerate() {
            if let Respos::Tone(slot) = *r {
                *r = Respos::Expunged(slot);
                last_tone = Some(i);
            }
        }
        // a tone cleared back to level is not replayed
        if let Some(i) = last_tone.filter(|_| self.word.tone != Tone::Level) {
            trace[i] = Respos::Tone(tone_slot);
        }
        for i in 1..trace.len() {
            if let Respos::DoubleUndo(slot) = trace[i] {
                if slot >= keep_slots {
                    trace[i - 1] = Respos::Expunged(trace[i - 1].slot());
                }
            }
        }

        self.word.reset();
        let mut replayed = 0;
        for ((c, _), r) in history.iter().zip(&trace) {
            if !matches!(r, Respos::Expunged(_)) && r.slot() < keep_slots {
                self.push_char(*c);
                replayed += 1;
            }
        }
        trace!("backspace replayed {replayed} of {} keys", history.len());
        if !self.word.keys.is_empty() {
            self.word.backconverted = backconverted;
        }
        debug_assert_eq!(self.word.state, TelexState::Valid);
        self.word.state
    }

    fn backspace_invalid(&mut self) -> TelexState {
        let history = self.snapshot();
        // drop the last shown key along with duplicates elided after it
        let keep = history
            .iter()
            .rposition(|(_, r)| !matches!(r, Respos::DoubleUndo(_)))
            .unwrap_or(0);

        self.word.reset();
        if keep > 0 && self.config.backspace_keeps_invalid {
            self.word.state = TelexState::Invalid;
        }
        for (c, r) in &history[..keep] {
            if !matches!(r, Respos::DoubleUndo(_)) {
                self.push_char(*c);
            }
        }
        self.word.state
    }

    fn backspace_backconverted(&mut self) -> TelexState {
        let mut text = self.word.keys.clone();
        let _ = text.pop();
        let mut retry = TelexEngine::new(self.config);
        if retry.backconvert(&text) == TelexState::Valid {
            *self = retry;
        } else {
            self.word.keys = text;
        }
        self.word.state
    }

    /// Rebuilds the word from already transliterated text so it can be edited further.
    pub fn backconvert(&mut self, s: &str) -> TelexState {
        if self.word.state != TelexState::Valid || !self.word.keys.is_empty() {
            return TelexState::TxError;
        }

        let mut converted = false;
        for ch in s.chars() {
            // a second e/o would collapse into a circumflex, so type it twice
            let doubling = self.mode.doubles_vowels
                && self.word.c2.is_empty()
                && matches!(self.word.v.as_str(), "e" | "o");
            let first_v = self.word.v.chars().next();

            if ch.is_ascii_alphabetic() {
                if doubling && first_v == Some(to_lower(ch)) {
                    self.push_char(ch);
                }
                self.push_char(ch);
                continue;
            }

            converted = true;
            let (lower, upper) = fold_case(ch);
            let Some(keys) = self.mode.backconversions.get(&lower).copied() else {
                debug!("no key sequence for {ch:?} in {s:?}");
                self.push_char(ch);
                continue;
            };
            let cased = |k: char| if upper { to_upper(k) } else { k };
            if let Some(first) = keys.chars().next() {
                if doubling && first_v == Some(first) {
                    self.push_char(cased(first));
                }
            }
            for k in keys.chars() {
                self.push_char(cased(k));
            }
        }

        if self.word.len() != char_len(s) {
            if converted {
                debug!("backconversion of {s:?} did not line up");
                assign(&mut self.word.keys, s);
                self.word.state = TelexState::BackconvertFailed;
            } else {
                self.word.state = TelexState::Invalid;
            }
        }
        if !self.word.keys.is_empty() {
            self.word.backconverted = true;
        }
        debug_assert!(self.word.check_invariants());
        self.word.state
    }

    /// The word without a pending tone, or the raw keys if it is invalid.
    pub fn retrieve(&self) -> String {
        match self.word.state {
            TelexState::Valid | TelexState::Committed => self.render(None),
            _ => self.retrieve_raw(),
        }
    }

    /// Keys as typed, minus elided duplicates.
    pub fn retrieve_raw(&self) -> String {
        if self.word.state == TelexState::BackconvertFailed {
            return self.word.keys.chars().collect();
        }
        self.word
            .keys
            .chars()
            .zip(self.word.respos.iter())
            .filter(|(_, r)| !matches!(r, Respos::DoubleUndo(_)))
            .map(|(c, _)| c)
            .collect()
    }

    /// Renders the word as it should look now, tone included.
    pub fn peek(&self) -> String {
        match self.word.state {
            TelexState::Valid => {}
            TelexState::Committed => return self.retrieve(),
            _ => return self.retrieve_raw(),
        }
        let c1 = char_len(&self.word.c1);
        let target = match self.lookup_vowel() {
            Some(VowelInfo {
                tone_pos: Some(pos),
                ..
            }) => Some(c1 + pos),
            Some(_) if self.word.c1.as_str() == "gi" && self.word.v.is_empty() => c1.checked_sub(1),
            Some(_) => None,
            None if self.word.tone == Tone::Level => None,
            None => self.predict_tone_pos().map(|pos| c1 + pos),
        };
        self.render(target)
    }

    fn render(&self, tone_at: Option<usize>) -> String {
        let tone = self.word.tone;
        let chars = self
            .word
            .c1
            .chars()
            .chain(self.word.v.chars())
            .chain(self.word.c2.chars())
            .enumerate()
            .map(|(i, ch)| {
                if tone_at == Some(i) {
                    map_vowel_with_tone(ch, tone)
                } else {
                    ch
                }
            });
        self.word.apply_cases(chars)
    }
}

fn coda_fixups(after_q: bool) -> &'static Map<&'static str, &'static str> {
    if after_q { &TRANSITIONS_V_C2_Q } else { &TRANSITIONS_V_C2 }
}

impl Default for TelexEngine {
    fn default() -> Self {
        Self::new(TelexConfig::default())
    }
}

impl fmt::Debug for TelexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelexEngine")
            .field("config", &self.config)
            .field("word", &self.word)
            .finish_non_exhaustive()
    }
}
