//! Static rule tables. Keys are lowercase; case is tracked per slot by the engine.

use phf::{phf_map, phf_set};

use self::C2Mode::{Either, MustC2, NoC2};

/// Whether a nucleus needs a final consonant to form a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum C2Mode {
    Either,
    MustC2,
    NoC2,
}

/// Where the tone mark goes inside a nucleus, and what coda the nucleus accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelInfo {
    /// `None` only for the empty nucleus after `gi`, which marks the `i` of the onset.
    pub tone_pos: Option<usize>,
    pub c2: C2Mode,
}

const fn at(pos: usize, c2: C2Mode) -> VowelInfo {
    VowelInfo {
        tone_pos: Some(pos),
        c2,
    }
}

/// Vowel rewrites applied after each vowel key in Telex. Never lengthens the nucleus.
pub(crate) static TRANSITIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "aa" => "â",
    "aua" => "âu",
    "aya" => "ây",
    "ee" => "ê",
    "eue" => "êu",
    "iee" => "iê",
    "ieue" => "iêu",
    "oio" => "ôi",
    "oo" => "ô",
    "uaa" => "uâ",
    "uaya" => "uây",
    "uee" => "uê",
    "uoio" => "uôi",
    "uoo" => "uô",
    "uyee" => "uyê",
    "uơi" => "ươi",
    "uơu" => "ươu",
    "yee" => "yê",
    "yeue" => "yêu",
    "ôo" => "oo",
    "ưo" => "ươ",
};

/// Position of the rewritten character inside a nucleus produced by a shrinking rewrite.
pub(crate) static RESPOS: phf::Map<&'static str, usize> = phf_map! {
    "iê" => 1,
    "iêu" => 1,
    "uyê" => 2,
    "uâ" => 1,
    "uây" => 1,
    "uê" => 1,
    "uô" => 1,
    "uôi" => 1,
    "yê" => 1,
    "yêu" => 1,
    "â" => 0,
    "âu" => 0,
    "ây" => 0,
    "ê" => 0,
    "êu" => 0,
    "ô" => 0,
    "đ" => 0,
    "ươ" => 0,
    "ươi" => 0,
    "ươu" => 0,
    "ôi" => 0,
};

/// Telex `w` rewrites. Same-length by construction.
pub(crate) static TRANSITIONS_W: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "ă",
    "o" => "ơ",
    "oa" => "oă",
    "oi" => "ơi",
    "u" => "ư",
    "ua" => "ưa",
    "ui" => "ưi",
    "uo" => "uơ",
    "uoi" => "ươi",
    "uou" => "ươu",
    "uu" => "ưu",
    "ưo" => "ươ",
    "ươ" => "ươ",
};

/// Telex `w` rewrites while the onset is `q`.
pub(crate) static TRANSITIONS_W_Q: phf::Map<&'static str, &'static str> = phf_map! {
    "u" => "ư",
    "ua" => "uă",
    "uo" => "uơ",
    "uoi" => "uơi",
    "ươ" => "ươ",
};

/// Position of the character a modifier key acted on.
pub(crate) static RESPOS_W: phf::Map<&'static str, usize> = phf_map! {
    "oă" => 1,
    "uă" => 1,
    "uơ" => 1,
    "ă" => 0,
    "ơ" => 0,
    "ơi" => 0,
    "ư" => 0,
    "ưi" => 0,
    "ươ" => 1,
    "ươi" => 1,
    "ưa" => 0,
    "ưu" => 0,
    "ươu" => 1,
    "uơi" => 1,
};

/// Nucleus fixups applied when a final consonant arrives.
pub(crate) static TRANSITIONS_V_C2: phf::Map<&'static str, &'static str> = phf_map! {
    "uơ" => "ươ",
    "ưa" => "uă",
    "ưo" => "ươ",
};

pub(crate) static TRANSITIONS_V_C2_Q: phf::Map<&'static str, &'static str> = phf_map! {
    "ưo" => "ươ",
};

/// Relaxed vowel rewrites kept in VNI, where vowels never double into a circumflex.
pub(crate) static TRANSITIONS_VNI: phf::Map<&'static str, &'static str> = phf_map! {
    "uơi" => "ươi",
    "uơu" => "ươu",
    "ưo" => "ươ",
};

/// VNI `6`.
pub(crate) static CIRCUMFLEX_VNI: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "â",
    "au" => "âu",
    "ay" => "ây",
    "e" => "ê",
    "eu" => "êu",
    "ie" => "iê",
    "ieu" => "iêu",
    "o" => "ô",
    "oi" => "ôi",
    "ua" => "uâ",
    "uay" => "uây",
    "ue" => "uê",
    "uo" => "uô",
    "uoi" => "uôi",
    "uye" => "uyê",
    "ye" => "yê",
    "yeu" => "yêu",
};

/// VNI `7`.
pub(crate) static HORN_VNI: phf::Map<&'static str, &'static str> = phf_map! {
    "o" => "ơ",
    "oi" => "ơi",
    "u" => "ư",
    "ua" => "ưa",
    "ui" => "ưi",
    "uo" => "uơ",
    "uoi" => "ươi",
    "uou" => "ươu",
    "uu" => "ưu",
    "ưo" => "ươ",
    "ươ" => "ươ",
};

pub(crate) static HORN_VNI_Q: phf::Map<&'static str, &'static str> = phf_map! {
    "u" => "ư",
    "uo" => "uơ",
    "uoi" => "uơi",
    "ươ" => "ươ",
};

/// VNI `8`.
pub(crate) static BREVE_VNI: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "ă",
    "oa" => "oă",
    "ua" => "uă",
};

/// Toned forms of every base vowel, indexed by [`Tone`] discriminant.
pub(crate) static TONES: phf::Map<char, [char; 6]> = phf_map! {
    'a' => ['a', 'à', 'ạ', 'ả', 'á', 'ã'],
    'e' => ['e', 'è', 'ẹ', 'ẻ', 'é', 'ẽ'],
    'i' => ['i', 'ì', 'ị', 'ỉ', 'í', 'ĩ'],
    'o' => ['o', 'ò', 'ọ', 'ỏ', 'ó', 'õ'],
    'u' => ['u', 'ù', 'ụ', 'ủ', 'ú', 'ũ'],
    'y' => ['y', 'ỳ', 'ỵ', 'ỷ', 'ý', 'ỹ'],
    'â' => ['â', 'ầ', 'ậ', 'ẩ', 'ấ', 'ẫ'],
    'ê' => ['ê', 'ề', 'ệ', 'ể', 'ế', 'ễ'],
    'ô' => ['ô', 'ồ', 'ộ', 'ổ', 'ố', 'ỗ'],
    'ă' => ['ă', 'ằ', 'ặ', 'ẳ', 'ắ', 'ẵ'],
    'ơ' => ['ơ', 'ờ', 'ợ', 'ở', 'ớ', 'ỡ'],
    'ư' => ['ư', 'ừ', 'ự', 'ử', 'ứ', 'ữ'],
};

/// Onsets a committed word may start with.
pub static VALID_C1: phf::Set<&'static str> = phf_set! {
    "", "b", "c", "ch", "d", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n", "ng", "ngh", "nh", "p", "ph", "q", "r", "s", "t", "th", "tr", "v", "x", "đ",
};

/// Codas a committed word may end with. `true` marks stop codas that only take the sharp or heavy tone.
pub static VALID_C2: phf::Map<&'static str, bool> = phf_map! {
    "" => false,
    "c" => true,
    "ch" => true,
    "k" => true,
    "m" => false,
    "n" => false,
    "ng" => false,
    "nh" => false,
    "p" => true,
    "t" => true,
};

/// Nuclei accepted after any onset except `q` and `gi`.
pub static VALID_V: phf::Map<&'static str, VowelInfo> = phf_map! {
    "a" => at(0, Either),
    "ai" => at(0, NoC2),
    "ao" => at(0, NoC2),
    "au" => at(0, NoC2),
    "ay" => at(0, NoC2),
    "e" => at(0, Either),
    "eo" => at(0, NoC2),
    "i" => at(0, Either),
    "ia" => at(0, NoC2),
    "iu" => at(0, NoC2),
    "iê" => at(1, MustC2),
    "iêu" => at(1, NoC2),
    "o" => at(0, Either),
    "oa" => at(1, Either),
    "oai" => at(1, NoC2),
    "oao" => at(1, NoC2),
    "oay" => at(1, NoC2),
    "oe" => at(1, Either),
    "oeo" => at(1, NoC2),
    "oi" => at(0, NoC2),
    "oo" => at(1, MustC2),
    "oă" => at(1, MustC2),
    "u" => at(0, Either),
    "ua" => at(0, NoC2),
    "uao" => at(1, NoC2),
    "uay" => at(1, NoC2),
    "ui" => at(0, NoC2),
    "uy" => at(1, Either),
    "uyu" => at(1, NoC2),
    "uyê" => at(2, MustC2),
    "uâ" => at(1, MustC2),
    "uây" => at(1, NoC2),
    "uê" => at(1, Either),
    "uô" => at(1, MustC2),
    "uôi" => at(1, NoC2),
    "uă" => at(1, MustC2),
    "uơ" => at(1, NoC2),
    "y" => at(0, NoC2),
    "yê" => at(1, MustC2),
    "yêu" => at(1, NoC2),
    "â" => at(0, MustC2),
    "âu" => at(0, NoC2),
    "ây" => at(0, NoC2),
    "ê" => at(0, Either),
    "êu" => at(0, NoC2),
    "ô" => at(0, Either),
    "ôi" => at(0, NoC2),
    "ă" => at(0, MustC2),
    "ơ" => at(0, Either),
    "ơi" => at(0, NoC2),
    "ư" => at(0, Either),
    "ưa" => at(0, NoC2),
    "ưi" => at(0, NoC2),
    "ưu" => at(0, NoC2),
    "ươ" => at(1, MustC2),
    "ươi" => at(1, NoC2),
    "ươu" => at(1, NoC2),
};

/// Nuclei accepted after `q`. The `u` belongs to the nucleus.
pub static VALID_V_Q: phf::Map<&'static str, VowelInfo> = phf_map! {
    "ua" => at(1, Either),
    "uai" => at(1, NoC2),
    "uao" => at(1, NoC2),
    "uau" => at(1, NoC2),
    "uay" => at(1, NoC2),
    "ue" => at(1, Either),
    "ueo" => at(1, NoC2),
    "ui" => at(1, Either),
    "uo" => at(1, NoC2),
    "uy" => at(1, Either),
    "uyê" => at(2, MustC2),
    "uâ" => at(1, MustC2),
    "uây" => at(1, NoC2),
    "uê" => at(1, Either),
    "uêu" => at(1, NoC2),
    "uô" => at(1, Either),
    "uă" => at(1, MustC2),
    "uơ" => at(1, Either),
    "uơi" => at(1, NoC2),
    "ươ" => at(1, MustC2),
};

/// Nuclei accepted after `gi`. The empty nucleus borrows the `i` of the onset.
pub static VALID_V_GI: phf::Map<&'static str, VowelInfo> = phf_map! {
    "" => VowelInfo { tone_pos: None, c2: Either },
    "a" => at(0, Either),
    "ai" => at(0, NoC2),
    "ao" => at(0, NoC2),
    "au" => at(0, NoC2),
    "ay" => at(0, NoC2),
    "e" => at(0, Either),
    "eo" => at(0, NoC2),
    "o" => at(0, Either),
    "oi" => at(0, NoC2),
    "oă" => at(1, MustC2),
    "u" => at(0, Either),
    "ua" => at(0, NoC2),
    "ui" => at(0, NoC2),
    "uô" => at(1, Either),
    "â" => at(0, MustC2),
    "âu" => at(0, NoC2),
    "ây" => at(0, NoC2),
    "ê" => at(0, Either),
    "êu" => at(0, NoC2),
    "ô" => at(0, Either),
    "ôi" => at(0, NoC2),
    "ă" => at(0, MustC2),
    "ơ" => at(0, Either),
    "ơi" => at(0, NoC2),
    "ư" => at(0, Either),
    "ưa" => at(0, NoC2),
    "ươ" => at(1, MustC2),
};

/// Old-style placement for open `oa`, `oe`, `uy`.
pub static VALID_V_OA_UY: phf::Map<&'static str, VowelInfo> = phf_map! {
    "oa" => at(0, Either),
    "oe" => at(0, Either),
    "uy" => at(0, Either),
};

/// Telex key sequences that reproduce each precomposed character.
pub(crate) static BACKCONVERSIONS: phf::Map<char, &'static str> = phf_map! {
    'à' => "af",
    'á' => "as",
    'â' => "aa",
    'ã' => "ax",
    'è' => "ef",
    'é' => "es",
    'ê' => "ee",
    'ì' => "if",
    'í' => "is",
    'ò' => "of",
    'ó' => "os",
    'ô' => "oo",
    'õ' => "ox",
    'ù' => "uf",
    'ú' => "us",
    'ý' => "ys",
    'ă' => "aw",
    'đ' => "dd",
    'ĩ' => "ix",
    'ũ' => "ux",
    'ơ' => "ow",
    'ư' => "uw",
    'ạ' => "aj",
    'ả' => "ar",
    'ấ' => "aas",
    'ầ' => "aaf",
    'ẩ' => "aar",
    'ẫ' => "aax",
    'ậ' => "aaj",
    'ắ' => "aws",
    'ằ' => "awf",
    'ẳ' => "awr",
    'ẵ' => "awx",
    'ặ' => "awj",
    'ẹ' => "ej",
    'ẻ' => "er",
    'ẽ' => "ex",
    'ế' => "ees",
    'ề' => "eef",
    'ể' => "eer",
    'ễ' => "eex",
    'ệ' => "eej",
    'ỉ' => "ir",
    'ị' => "ij",
    'ọ' => "oj",
    'ỏ' => "or",
    'ố' => "oos",
    'ồ' => "oof",
    'ổ' => "oor",
    'ỗ' => "oox",
    'ộ' => "ooj",
    'ớ' => "ows",
    'ờ' => "owf",
    'ở' => "owr",
    'ỡ' => "owx",
    'ợ' => "owj",
    'ụ' => "uj",
    'ủ' => "ur",
    'ứ' => "uws",
    'ừ' => "uwf",
    'ử' => "uwr",
    'ữ' => "uwx",
    'ự' => "uwj",
    'ỳ' => "yf",
    'ỵ' => "yj",
    'ỷ' => "yr",
    'ỹ' => "yx",
};

/// VNI key sequences that reproduce each precomposed character.
pub(crate) static BACKCONVERSIONS_VNI: phf::Map<char, &'static str> = phf_map! {
    'à' => "a2",
    'á' => "a1",
    'â' => "a6",
    'ã' => "a4",
    'è' => "e2",
    'é' => "e1",
    'ê' => "e6",
    'ì' => "i2",
    'í' => "i1",
    'ò' => "o2",
    'ó' => "o1",
    'ô' => "o6",
    'õ' => "o4",
    'ù' => "u2",
    'ú' => "u1",
    'ý' => "y1",
    'ă' => "a8",
    'đ' => "d9",
    'ĩ' => "i4",
    'ũ' => "u4",
    'ơ' => "o7",
    'ư' => "u7",
    'ạ' => "a5",
    'ả' => "a3",
    'ấ' => "a61",
    'ầ' => "a62",
    'ẩ' => "a63",
    'ẫ' => "a64",
    'ậ' => "a65",
    'ắ' => "a81",
    'ằ' => "a82",
    'ẳ' => "a83",
    'ẵ' => "a84",
    'ặ' => "a85",
    'ẹ' => "e5",
    'ẻ' => "e3",
    'ẽ' => "e4",
    'ế' => "e61",
    'ề' => "e62",
    'ể' => "e63",
    'ễ' => "e64",
    'ệ' => "e65",
    'ỉ' => "i3",
    'ị' => "i5",
    'ọ' => "o5",
    'ỏ' => "o3",
    'ố' => "o61",
    'ồ' => "o62",
    'ổ' => "o63",
    'ỗ' => "o64",
    'ộ' => "o65",
    'ớ' => "o71",
    'ờ' => "o72",
    'ở' => "o73",
    'ỡ' => "o74",
    'ợ' => "o75",
    'ụ' => "u5",
    'ủ' => "u3",
    'ứ' => "u71",
    'ừ' => "u72",
    'ử' => "u73",
    'ữ' => "u74",
    'ự' => "u75",
    'ỳ' => "y2",
    'ỵ' => "y5",
    'ỷ' => "y3",
    'ỹ' => "y4",
};

/// English words that also parse as valid Telex with a tone. Rejected from `OptimizeMultilang::On` up.
pub(crate) static WLIST_EN: phf::Set<&'static str> = phf_set! {
    "airs", "arms", "auras", "axis", "barns", "bars", "beefs", "beers", "boars", "boors", "bores",
    "boxer", "boxers", "boxes", "burns", "bursar", "burst", "cars", "chairs", "charms", "chars",
    "cheers", "chefs", "chiefest", "choirs", "chores", "churns", "cores", "corns", "corset",
    "curst", "darns", "deers", "defends", "defer", "defers", "denser", "deters", "doers", "donors",
    "doors", "genres", "germs", "goofs", "gores", "hairs", "hangars", "harms", "heros", "hers",
    "honors", "hoofs", "horns", "horse", "ifs", "irs", "korans", "lairs", "leers", "lepers",
    "liars", "loafs", "loser", "losers", "major", "majors", "mars", "meres", "merest", "meters",
    "metres", "moors", "morns", "morons", "motors", "norms", "oafs", "oars", "ores", "pairs",
    "pars", "peers", "perjure", "perjures", "peruse", "pesters", "peters", "pores", "purees",
    "queers", "reefs", "refer", "refers", "refuse", "roars", "roofs", "rosary", "rotors", "saris",
    "sexes", "sirs", "soars", "sofas", "sores", "sorest", "surf", "surfs", "tars", "taxis",
    "tenser", "terms", "terse", "terser", "testers", "thirst", "thorns", "torsi", "torso",
    "tureens", "turf", "turfs", "turns", "urns", "veers", "verse", "vexes", "virus",
};

/// Further English collisions, rejected from `OptimizeMultilang::Aggressive` up.
pub(crate) static WLIST_EN_2: phf::Set<&'static str> = phf_set! {
    "ask", "bask", "bays", "bias", "bins", "boar", "boas", "boast", "boats", "books", "booms",
    "bore", "born", "bosom", "bums", "bury", "busy", "buys", "cask", "chaps", "charm", "chasm",
    "cheeks", "cheeps", "cheer", "choir", "chore", "chosen", "coast", "coats", "coax", "cons",
    "cooks", "core", "cox", "darn", "dawns", "deem", "deems", "deeps", "dens", "dense", "desk",
    "dins", "disc", "disk", "doer", "does", "donor", "doom", "dooms", "door", "dose", "dosed",
    "down", "downs", "dusk", "ekes", "gangs", "gawks", "gee", "gees", "gems", "gene", "genes",
    "genre", "germ", "gets", "ghost", "gins", "gist", "goats", "goes", "gongs", "goons", "gore",
    "gown", "gowns", "gums", "guns", "guys", "hawks", "hems", "hens", "her", "hims", "hoax", "hoes",
    "hooks", "hoops", "hose", "hums", "husk", "keen", "keens", "kings", "koran", "lawns", "leeks",
    "liar", "lix", "loans", "looks", "loon", "lore", "mamas", "maps", "mask", "meets", "mere",
    "metes", "moans", "moats", "moons", "more", "morn", "moron", "musk", "naps", "nieces", "noes",
    "nooks", "norm", "nose", "nuns", "oaf", "oaks", "oar", "oks", "or", "ox", "oxen", "pair",
    "pangs", "pans", "papas", "par", "pas", "past", "pasta", "pats", "pawn", "pawns", "pays",
    "peeks", "peeps", "peer", "penes", "pens", "peps", "per", "pest", "pets", "photos", "pieces",
    "pins", "pis", "pits", "poems", "poets", "poops", "poor", "pops", "pore", "pose", "post",
    "pots", "puns", "pups", "puree", "pus", "puts", "quays", "queens", "queer", "quips", "reeks",
    "reuse", "rims", "rings", "rips", "risk", "roams", "roar", "roast", "roes", "rooks", "rooms",
    "rose", "says", "seeks", "seem", "seems", "sees", "sics", "sings", "sins", "sips", "soaks",
    "soaps", "soar", "soon", "sops", "sore", "sos", "sox", "sums", "task", "teems", "teens", "tens",
    "tense", "themes", "things", "thongs", "thorn", "those", "tings", "tongs", "tons", "tore",
    "torn", "town", "trays", "trees", "treks", "trims", "trips", "troops", "tureen", "tusk", "veer",
    "vips", "xix",
};
