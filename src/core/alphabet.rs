use crate::core::scheme::Scheme;
use crate::encoders::errors::AlphabetError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Standard hex digits, in nibble-value order.
pub const NIBBLE_DIGITS: &str = "0123456789abcdef";

/// Standard base-64 character set, in index order.
pub const BASE64_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base-64 padding character.
pub const BASE64_PAD: char = '=';

/// 16 emoji, one per nibble value. All single codepoints.
pub const NIBBLE_SYMBOLS: [&str; 16] = [
    "😀", "😁", "😂", "😃", "😄", "😅", "😆", "😉", //
    "😊", "🙂", "🙃", "😋", "😎", "😍", "😘", "😗",
];

/// 64 emoji, one per base-64 index.
///
/// The first 16 entries coincide with [`NIBBLE_SYMBOLS`]. Index 49 is
/// U+2639 followed by VARIATION SELECTOR-16.
pub const BASE64_SYMBOLS: [&str; 64] = [
    "😀", "😁", "😂", "😃", "😄", "😅", "😆", "😉", //
    "😊", "🙂", "🙃", "😋", "😎", "😍", "😘", "😗", //
    "😙", "😚", "🥰", "🤩", "🤗", "🤔", "🤨", "😐", //
    "😑", "😶", "🙄", "😏", "😣", "😥", "😮", "🤐", //
    "😪", "😫", "🥱", "😴", "😌", "😛", "😜", "🤪", //
    "😝", "🤓", "🤭", "🤫", "🤥", "😬", "😔", "😕", //
    "🙁", "\u{2639}\u{FE0F}", "😟", "😤", "😢", "😭", "😱", "😨", //
    "😰", "😯", "😲", "🤯", "😳", "😇", "😈", "👻",
];

/// Stand-in for the base-64 `=` character.
pub const PADDING_SYMBOL: &str = "🟦";

/// Longest symbol, in codepoints. The tokenizer's match window.
pub const MAX_SYMBOL_CODEPOINTS: usize = 2;

static NIBBLE: LazyLock<Alphabet> = LazyLock::new(|| {
    Alphabet::new(Scheme::Nibble, &NIBBLE_SYMBOLS, None)
        .unwrap_or_else(|e| panic!("built-in nibble alphabet is invalid: {}", e))
});

static BASE64: LazyLock<Alphabet> = LazyLock::new(|| {
    Alphabet::new(Scheme::Base64, &BASE64_SYMBOLS, Some(PADDING_SYMBOL))
        .unwrap_or_else(|e| panic!("built-in base64 alphabet is invalid: {}", e))
});

/// A recognized unit of a symbol stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A value-bearing symbol (0..16 or 0..64)
    Value(u8),
    /// The base-64 padding symbol
    Padding,
}

/// A fixed symbol alphabet for one [`Scheme`].
///
/// Maps in both directions between symbol values and their emoji, and
/// between values and the standard textual digit (hex or base-64) each
/// value stands for.
#[derive(Debug, Clone)]
pub struct Alphabet {
    scheme: Scheme,
    symbols: Vec<&'static str>,
    padding: Option<&'static str>,
    digits: Vec<char>,
    symbol_to_token: HashMap<&'static str, Token>,
    digit_to_value: HashMap<char, u8>,
}

impl Alphabet {
    /// Builds an alphabet for `scheme`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the symbol count is not 16 (nibble) or 64 (base64)
    /// - padding is missing for base64 or given for nibble
    /// - a symbol is empty, longer than two codepoints, or contains whitespace
    /// - two symbols (padding included) are identical
    pub fn new(
        scheme: Scheme,
        symbols: &[&'static str],
        padding: Option<&'static str>,
    ) -> Result<Self, AlphabetError> {
        let digits = match scheme {
            Scheme::Nibble => NIBBLE_DIGITS,
            Scheme::Base64 => BASE64_DIGITS,
        };
        let expected = digits.len();

        if symbols.len() != expected {
            return Err(AlphabetError::WrongCardinality {
                scheme,
                expected,
                actual: symbols.len(),
            });
        }

        match (scheme, padding) {
            (Scheme::Base64, None) => return Err(AlphabetError::MissingPadding),
            (Scheme::Nibble, Some(_)) => return Err(AlphabetError::UnexpectedPadding { scheme }),
            _ => {}
        }

        let mut symbol_to_token = HashMap::with_capacity(expected + 1);
        for (index, &symbol) in symbols.iter().enumerate() {
            validate_symbol(symbol, index)?;
            if let Some(Token::Value(first)) = symbol_to_token.insert(symbol, Token::Value(index as u8)) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: symbol.to_string(),
                    first: first as usize,
                    second: index,
                });
            }
        }

        if let Some(pad) = padding {
            validate_symbol(pad, expected)?;
            if let Some(Token::Value(first)) = symbol_to_token.insert(pad, Token::Padding) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: pad.to_string(),
                    first: first as usize,
                    second: expected,
                });
            }
        }

        let digits: Vec<char> = digits.chars().collect();
        let digit_to_value = digits
            .iter()
            .enumerate()
            .map(|(value, &c)| (c, value as u8))
            .collect();

        Ok(Alphabet {
            scheme,
            symbols: symbols.to_vec(),
            padding,
            digits,
            symbol_to_token,
            digit_to_value,
        })
    }

    /// Returns the built-in alphabet for `scheme`.
    ///
    /// # Panics
    ///
    /// On first use, if the built-in table violates the construction rules.
    pub fn for_scheme(scheme: Scheme) -> &'static Alphabet {
        match scheme {
            Scheme::Nibble => &*NIBBLE,
            Scheme::Base64 => &*BASE64,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Number of value-bearing symbols (padding excluded).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Value-bearing symbols in value order.
    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    pub fn padding(&self) -> Option<&'static str> {
        self.padding
    }

    /// Symbol for a value, or `None` if out of range.
    pub fn symbol(&self, value: u8) -> Option<&'static str> {
        self.symbols.get(value as usize).copied()
    }

    /// Looks up an exact codepoint sequence.
    pub fn lookup(&self, symbol: &str) -> Option<Token> {
        self.symbol_to_token.get(symbol).copied()
    }

    /// Standard digit a value stands for (`'a'` for nibble 10, `'K'` for base-64 index 10).
    pub fn digit(&self, value: u8) -> Option<char> {
        self.digits.get(value as usize).copied()
    }

    /// Symbol standing in for a standard digit; `=` maps to the padding symbol.
    pub fn symbol_for_digit(&self, digit: char) -> Option<&'static str> {
        if digit == BASE64_PAD {
            return self.padding;
        }
        self.digit_to_value
            .get(&digit)
            .and_then(|&value| self.symbol(value))
    }

    /// Standard digit for a token; padding maps to `=`.
    pub fn digit_for_token(&self, token: Token) -> Option<char> {
        match token {
            Token::Value(value) => self.digit(value),
            Token::Padding => self.padding.map(|_| BASE64_PAD),
        }
    }
}

fn validate_symbol(symbol: &str, index: usize) -> Result<(), AlphabetError> {
    let count = symbol.chars().count();
    if count == 0 || count > MAX_SYMBOL_CODEPOINTS || symbol.chars().any(char::is_whitespace) {
        return Err(AlphabetError::InvalidSymbol {
            symbol: symbol.to_string(),
            index,
        });
    }
    Ok(())
}
