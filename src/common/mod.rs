mod words;
pub mod config;

pub use words::{make_header, split_header, WordReader, WordWriter, MAX_OPCODE, MAX_WORD_COUNT};

pub type Word = u32;
pub type Opcode = u32;
pub type Id = u32;

pub type List<T> = smallvec::SmallVec<[T; 4]>;

/// `OpDecorate <target> <decoration> <literals...>`
pub const OP_DECORATE: Opcode = 71;

/// `MemoryAccess` -> `memory_access`, `IAdd` -> `i_add`.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let chars: Vec<char> = name.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_ascii_uppercase() && next.map_or(false, |n| n.is_ascii_lowercase()),
            };
            if boundary {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
