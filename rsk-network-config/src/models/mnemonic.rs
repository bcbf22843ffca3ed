/// Number of words in a BIP-39 phrase accepted by the toolchain
pub const MNEMONIC_WORD_COUNT: usize = 12;

/// Seed phrase read from the mnemonic secret file
///
/// The phrase is kept exactly as trimmed from the file. Words are split on
/// single spaces, so a doubled space produces an empty word and the phrase
/// fails validation.
#[derive(Clone, PartialEq, Eq)]
pub struct MnemonicPhrase {
    phrase: String,
    words: Vec<String>,
}

impl MnemonicPhrase {
    /// Build a phrase from raw file contents
    pub fn parse(raw: &str) -> Self {
        let phrase = raw.trim().to_string();
        let words = if phrase.is_empty() {
            Vec::new()
        } else {
            phrase.split(' ').map(str::to_string).collect()
        };
        Self { phrase, words }
    }

    /// The trimmed phrase
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the phrase has exactly twelve words
    pub fn is_valid(&self) -> bool {
        self.words.len() == MNEMONIC_WORD_COUNT
    }
}

// Never print the secret itself.
impl std::fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
