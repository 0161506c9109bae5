use crate::tables::TONES;

/// The six Vietnamese tones. Discriminants index the rows of the tone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// ngang, no mark
    #[default]
    Level,
    /// huyền `\`
    Falling,
    /// nặng `.`
    Heavy,
    /// hỏi `?`
    Asking,
    /// sắc `'`
    Sharp,
    /// ngã `~`
    Tumbling,
}

/// Returns `c` carrying `tone`, or `c` unchanged if it is not a base vowel.
#[inline]
pub fn map_vowel_with_tone(c: char, tone: Tone) -> char {
    match TONES.get(&c) {
        Some(row) => row[tone as usize],
        None => c,
    }
}
