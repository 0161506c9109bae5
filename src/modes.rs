use bitflags::bitflags;
use phf::Map;

use crate::case::to_lower;
use crate::config::InputMethod;
use crate::tables::{
    BACKCONVERSIONS, BACKCONVERSIONS_VNI, BREVE_VNI, CIRCUMFLEX_VNI, HORN_VNI, HORN_VNI_Q, RESPOS,
    RESPOS_W, TRANSITIONS, TRANSITIONS_VNI, TRANSITIONS_W, TRANSITIONS_W_Q,
};
use crate::tone::Tone;

bitflags! {
    /// Phonetic roles of a key. The consonant roles share the `CONSO` bit, so
    /// testing any one of them with `intersects` matches every consonant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharTypes: u32 {
        const COMMIT = 1 << 0;
        const FORCE_COMMIT = 1 << 1;
        const BACKSPACE = 1 << 2;
        const VOWEL = 1 << 3;
        const VOWEL_W = 1 << 4;
        const CONSO = 1 << 5;
        const CONSO_C1 = 1 << 5 | 1 << 6;
        const CONSO_C2 = 1 << 5 | 1 << 7;
        const CONSO_CONTINUE = 1 << 5 | 1 << 8;
        const TONE = 1 << 9;
        const SHORTHAND = 1 << 10;
        const STROKE = 1 << 11;
    }
}

impl CharTypes {
    /// Roles consumed by `push_char`.
    pub const WORD: CharTypes = CharTypes::VOWEL
        .union(CharTypes::VOWEL_W)
        .union(CharTypes::CONSO)
        .union(CharTypes::TONE)
        .union(CharTypes::STROKE);

    #[inline(always)]
    pub fn is(self, role: CharTypes) -> bool {
        self.intersects(role)
    }
}

type ToneFn = fn(char) -> Tone;
type ModifierFn = fn(char, bool) -> Option<Modifier>;

/// A modifier key's rewrite table and where its effect lands in the nucleus.
#[derive(Clone, Copy)]
pub struct Modifier {
    pub rewrites: &'static Map<&'static str, &'static str>,
    pub positions: &'static Map<&'static str, usize>,
}

pub struct Mode {
    pub classify: &'static [CharTypes; 128],
    pub tone: ToneFn,
    pub modifier: ModifierFn,
    /// Key that turns `d` into `đ`.
    pub stroke: char,
    /// Rewrites tried after each vowel key.
    pub transitions: &'static Map<&'static str, &'static str>,
    pub backconversions: &'static Map<char, &'static str>,
    /// Whether a repeated vowel key collapses into a circumflex.
    pub doubles_vowels: bool,
}

impl Mode {
    #[inline]
    pub fn classify(&self, c: char) -> CharTypes {
        match self.classify.get(c as usize) {
            Some(types) => *types,
            None => CharTypes::empty(),
        }
    }
}

pub fn mode_for(method: InputMethod) -> &'static Mode {
    match method {
        InputMethod::Telex => &TELEX_MODE,
        InputMethod::Vni => &VNI_MODE,
    }
}

/// Roles of a lowercase key under `method`.
pub fn classify(c: char, method: InputMethod) -> CharTypes {
    mode_for(method).classify(c)
}

/// Tone a key selects under `method`. Keys without a tone select `Tone::Level`.
pub fn tone_of(c: char, method: InputMethod) -> Tone {
    (mode_for(method).tone)(to_lower(c))
}

static TELEX_MODE: Mode = Mode {
    classify: &CLASSIFY_TELEX,
    tone: tone_telex,
    modifier: modifier_telex,
    stroke: 'd',
    transitions: &TRANSITIONS,
    backconversions: &BACKCONVERSIONS,
    doubles_vowels: true,
};

static VNI_MODE: Mode = Mode {
    classify: &CLASSIFY_VNI,
    tone: tone_vni,
    modifier: modifier_vni,
    stroke: '9',
    transitions: &TRANSITIONS_VNI,
    backconversions: &BACKCONVERSIONS_VNI,
    doubles_vowels: false,
};

const C1: CharTypes = CharTypes::CONSO_C1;
const C1_C2: CharTypes = CharTypes::CONSO_C1.union(CharTypes::CONSO_C2);
const C1_CONTINUE: CharTypes = CharTypes::CONSO_C1.union(CharTypes::CONSO_CONTINUE);

const fn set(t: &mut [CharTypes; 128], keys: &[u8], types: CharTypes) {
    let mut i = 0;
    while i < keys.len() {
        t[keys[i] as usize] = types;
        i += 1;
    }
}

const fn separators() -> [CharTypes; 128] {
    let mut t = [CharTypes::empty(); 128];
    let mut c = 32;
    while c <= 64 {
        t[c] = CharTypes::COMMIT;
        c += 1;
    }
    let mut c = 91;
    while c <= 96 {
        t[c] = CharTypes::COMMIT;
        c += 1;
    }
    set(&mut t, b"\t\n\r|~", CharTypes::COMMIT);
    set(&mut t, b"[]{}", CharTypes::SHORTHAND);
    t[0] = CharTypes::FORCE_COMMIT;
    t[8] = CharTypes::BACKSPACE;
    set(&mut t, b"aeiouy", CharTypes::VOWEL);
    set(&mut t, b"bklqv", C1);
    set(&mut t, b"cmnpt", C1_C2);
    set(&mut t, b"gh", C1_CONTINUE);
    t
}

const CLASSIFY_TELEX: [CharTypes; 128] = {
    let mut t = separators();
    t[b'd' as usize] = C1_CONTINUE.union(CharTypes::STROKE);
    set(&mut t, b"fjz", CharTypes::TONE);
    set(&mut t, b"rs", CharTypes::TONE.union(C1_CONTINUE));
    t[b'x' as usize] = CharTypes::TONE.union(C1);
    t[b'w' as usize] = CharTypes::VOWEL_W;
    t
};

const CLASSIFY_VNI: [CharTypes; 128] = {
    let mut t = separators();
    set(&mut t, b"drs", C1_CONTINUE);
    set(&mut t, b"fjwxz", C1);
    set(&mut t, b"012345", CharTypes::TONE);
    set(&mut t, b"678", CharTypes::VOWEL_W);
    t[b'9' as usize] = CharTypes::STROKE;
    t
};

fn tone_telex(c: char) -> Tone {
    match c {
        'f' => Tone::Falling,
        'j' => Tone::Heavy,
        'r' => Tone::Asking,
        's' => Tone::Sharp,
        'x' => Tone::Tumbling,
        _ => Tone::Level,
    }
}

fn tone_vni(c: char) -> Tone {
    match c {
        '1' => Tone::Sharp,
        '2' => Tone::Falling,
        '3' => Tone::Asking,
        '4' => Tone::Tumbling,
        '5' => Tone::Heavy,
        _ => Tone::Level,
    }
}

fn modifier_telex(c: char, after_q: bool) -> Option<Modifier> {
    match c {
        'w' => Some(Modifier {
            rewrites: if after_q { &TRANSITIONS_W_Q } else { &TRANSITIONS_W },
            positions: &RESPOS_W,
        }),
        _ => None,
    }
}

fn modifier_vni(c: char, after_q: bool) -> Option<Modifier> {
    match c {
        '6' => Some(Modifier {
            rewrites: &CIRCUMFLEX_VNI,
            positions: &RESPOS,
        }),
        '7' => Some(Modifier {
            rewrites: if after_q { &HORN_VNI_Q } else { &HORN_VNI },
            positions: &RESPOS_W,
        }),
        '8' => Some(Modifier {
            rewrites: &BREVE_VNI,
            positions: &RESPOS_W,
        }),
        _ => None,
    }
}
