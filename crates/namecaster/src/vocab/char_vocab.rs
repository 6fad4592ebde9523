//! # Character/Index Vocabulary

use crate::types::{CharToken, NCHashMap};

/// Reserved index of the padding token.
pub const PAD_TOKEN: CharToken = 0;

/// Reserved index of the unknown-character token.
pub const UNK_TOKEN: CharToken = 1;

/// Textual form of the padding token.
pub const PAD_TEXT: &str = "<pad>";

/// Textual form of the unknown-character token.
pub const UNK_TEXT: &str = "<unk>";

/// First index available to real characters.
const RESERVED: CharToken = 2;

/// Build-phase character vocabulary.
///
/// Created with the two reserved tokens pre-populated; new characters
/// receive strictly increasing indices starting at 2, in first-encounter
/// order. The builder only grows, never shrinks.
///
/// Finish the corpus scan, then call [`build`](Self::build) to freeze the
/// mapping; encoding runs only against the frozen [`CharVocab`], which
/// keeps index assignment reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct CharVocabBuilder {
    /// Map from character to assigned index.
    char_index: NCHashMap<char, CharToken>,

    /// Inverse table for indices `>= RESERVED`, in assignment order.
    ///
    /// Position `i` holds the character for token `i + RESERVED`.
    index_chars: Vec<char>,
}

impl CharVocabBuilder {
    /// Create an empty builder (reserved tokens only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character, assigning the next available index.
    ///
    /// Idempotent: re-adding a known character returns its existing index.
    ///
    /// ## Arguments
    /// * `c` - The character to add.
    ///
    /// ## Returns
    /// The index assigned to `c`.
    pub fn add_character(
        &mut self,
        c: char,
    ) -> CharToken {
        if let Some(&token) = self.char_index.get(&c) {
            return token;
        }
        let token = RESERVED + self.index_chars.len() as CharToken;
        self.char_index.insert(c, token);
        self.index_chars.push(c);
        token
    }

    /// Add every character of `text`, in order.
    pub fn observe(
        &mut self,
        text: &str,
    ) {
        for c in text.chars() {
            self.add_character(c);
        }
    }

    /// Number of entries, including the two reserved tokens.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        RESERVED as usize + self.index_chars.len()
    }

    /// Freeze the mapping into a read-only [`CharVocab`].
    pub fn build(self) -> CharVocab {
        log::debug!("freezing character vocabulary: {} entries", self.len());
        CharVocab {
            char_index: self.char_index,
            index_chars: self.index_chars,
        }
    }
}

/// Frozen, read-only character vocabulary.
///
/// Indices 0 and 1 are permanently reserved for the pad and unknown
/// tokens; all lookups are total (unknown characters and indices degrade
/// to the unknown token rather than erroring).
#[derive(Debug, Clone)]
pub struct CharVocab {
    char_index: NCHashMap<char, CharToken>,
    index_chars: Vec<char>,
}

impl CharVocab {
    /// Build a vocabulary from a full pass over a surname corpus.
    ///
    /// ## Arguments
    /// * `surnames` - The corpus, scanned to completion before the
    ///   vocabulary is frozen.
    ///
    /// ## Returns
    /// A frozen `CharVocab`.
    pub fn from_surnames<I, S>(surnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CharVocabBuilder::new();
        for surname in surnames {
            builder.observe(surname.as_ref());
        }
        builder.build()
    }

    /// Look up the index for a character.
    ///
    /// ## Returns
    /// The character's index, or [`UNK_TOKEN`] if it is not known.
    pub fn lookup_index(
        &self,
        c: char,
    ) -> CharToken {
        self.char_index.get(&c).copied().unwrap_or(UNK_TOKEN)
    }

    /// Look up the textual form for an index.
    ///
    /// ## Returns
    /// The character for a known index, the reserved texts for 0 and 1,
    /// or [`UNK_TEXT`] for any index never assigned.
    pub fn lookup_char(
        &self,
        token: CharToken,
    ) -> String {
        match token {
            PAD_TOKEN => PAD_TEXT.into(),
            UNK_TOKEN => UNK_TEXT.into(),
            t => self
                .index_chars
                .get((t - RESERVED) as usize)
                .map(|c| c.to_string())
                .unwrap_or_else(|| UNK_TEXT.into()),
        }
    }

    /// Number of entries, including the two reserved tokens.
    ///
    /// This is the row count a classifier's embedding table must have to
    /// accept every index this vocabulary can produce.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        RESERVED as usize + self.index_chars.len()
    }
}
