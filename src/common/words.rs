use crate::common::{Opcode, Word};

#[derive(Copy, Clone, Debug)]
pub struct WordReader<'a> {
    words: &'a [Word],
    offset: usize,
}

impl<'a> WordReader<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self { words, offset: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<Word> {
        self.words.get(self.offset).copied()
    }

    #[inline]
    pub fn take(&mut self) -> Option<Word> {
        let ret = self.peek()?;
        self.offset += 1;
        Some(ret)
    }

    /// Consumes every word up to the end of the region.
    pub fn take_rest(&mut self) -> &'a [Word] {
        let rest = self.words.get(self.offset..).unwrap_or(&[]);
        self.offset = self.words.len();
        rest
    }

    pub fn take_n(&mut self, n: usize) -> Option<&'a [Word]> {
        let slice = self.words.get(self.offset..self.offset.checked_add(n)?)?;
        self.offset += n;
        Some(slice)
    }

    /// Splits off one SPIR-V instruction: `(opcode, operand words)`.
    ///
    /// Returns `None` when the header is missing, announces a zero length,
    /// or runs past the end of the stream.
    pub fn take_instruction(&mut self) -> Option<(Opcode, &'a [Word])> {
        let header = self.peek()?;
        let (count, opcode) = split_header(header);
        if count == 0 {
            return None;
        }
        let words = self.at_checkpoint(|this| this.take_n(count))?;
        self.offset += count;
        Some((opcode, &words[1..]))
    }

    pub fn at_checkpoint<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let prev = self.offset;
        let ret = f(self);
        self.offset = prev;
        ret
    }
}

/// Largest opcode an instruction header can carry.
pub const MAX_OPCODE: Opcode = 0xffff;

/// Largest instruction, header included, in words.
pub const MAX_WORD_COUNT: usize = 0xffff;

/// `None` if either field does not fit in its 16 bits.
#[must_use]
pub fn make_header(word_count: usize, opcode: Opcode) -> Option<Word> {
    if word_count > MAX_WORD_COUNT || opcode > MAX_OPCODE {
        return None;
    }
    let count = Word::try_from(word_count).ok()?;
    Some((count << 16) | opcode)
}

#[must_use]
pub fn split_header(header: Word) -> (usize, Opcode) {
    ((header >> 16) as usize, header & 0xffff)
}

#[derive(Default, Debug, Clone)]
pub struct WordWriter {
    buf: Vec<Word>,
}

impl WordWriter {
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn reader(&self) -> WordReader<'_> {
        WordReader::new(&self.buf)
    }

    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.buf
    }

    pub fn push(&mut self, word: Word) {
        self.buf.push(word);
    }

    pub fn extend(&mut self, words: &[Word]) {
        self.buf.extend_from_slice(words);
    }

    pub fn write_at(&mut self, index: usize, word: Word) {
        if index >= self.buf.len() {
            self.buf.resize(index + 1, 0);
        }
        self.buf[index] = word;
    }

    /// Appends a header word followed by `operands`, patching the word count
    /// once the operands are in place. Nothing is written if the header
    /// cannot hold the opcode or the word count.
    pub fn push_instruction(&mut self, opcode: Opcode, operands: &[Word]) -> Option<()> {
        let header = make_header(operands.len() + 1, opcode)?;
        let start = self.buf.len();
        self.push(0);
        self.extend(operands);
        self.write_at(start, header);
        Some(())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Word> {
        self.buf
    }
}
