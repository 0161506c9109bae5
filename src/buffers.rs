/// Raw keys held per word. Keys past this are dropped and the word goes invalid.
pub const KEY_CAPACITY: usize = 64;

#[cfg(feature = "heapless")]
pub type Segment = heapless::String<32>;

#[cfg(feature = "heapless")]
pub type KeyBuffer = heapless::String<{ KEY_CAPACITY * 4 }>;

#[cfg(feature = "heapless")]
pub type List<T> = heapless::Vec<T, KEY_CAPACITY>;

#[cfg(not(feature = "heapless"))]
pub type Segment = String;

#[cfg(not(feature = "heapless"))]
pub type KeyBuffer = String;

#[cfg(not(feature = "heapless"))]
pub type List<T> = Vec<T>;

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_segment() -> Segment {
    Segment::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_key_buffer() -> KeyBuffer {
    KeyBuffer::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_list<T>() -> List<T> {
    List::new()
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_segment() -> Segment {
    String::with_capacity(16)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_key_buffer() -> KeyBuffer {
    String::with_capacity(KEY_CAPACITY)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_list<T>() -> List<T> {
    Vec::with_capacity(16)
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push_char<const N: usize>(s: &mut heapless::String<N>, c: char) {
    let _ = s.push(c);
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push_char(s: &mut String, c: char) {
    s.push(c);
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push<T>(l: &mut List<T>, value: T) {
    let _ = l.push(value);
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push<T>(l: &mut List<T>, value: T) {
    l.push(value);
}

/// Replaces the contents of `s`, truncating at capacity.
#[cfg(feature = "heapless")]
pub fn assign<const N: usize>(s: &mut heapless::String<N>, text: &str) {
    s.clear();
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
}

#[cfg(not(feature = "heapless"))]
pub fn assign(s: &mut String, text: &str) {
    s.clear();
    s.push_str(text);
}

#[inline(always)]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
