//! Single-byte encoding for PDF text.
//!
//! The PDF base fonts only understand a single-byte encoding, so story text
//! goes through an ordered [`EncoderChain`]. Each [`CharsetEncoder`] either
//! replaces characters it cannot represent or rejects the text outright; the
//! first encoder that succeeds wins.

use std::fmt;

use storyweaver_core::{application::ApplicationError, error::WeaverResult};
use tracing::debug;

/// Target byte charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Printable ASCII plus U+00A0..=U+00FF. Each code point maps to the
    /// byte of the same value, which WinAnsiEncoding renders identically.
    Latin1,
    /// Printable ASCII only.
    Ascii,
}

impl Charset {
    fn byte_for(self, c: char) -> Option<u8> {
        let code = c as u32;
        let printable_ascii = (0x20..=0x7E).contains(&code);
        match self {
            Self::Latin1 if printable_ascii || (0xA0..=0xFF).contains(&code) => Some(code as u8),
            Self::Ascii if printable_ascii => Some(code as u8),
            _ => None,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latin1 => f.write_str("latin-1"),
            Self::Ascii => f.write_str("ascii"),
        }
    }
}

/// What to do with a character the charset cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// Substitute this byte.
    Replace(u8),
    /// Fail the whole encode.
    Strict,
}

/// Bytes produced by one encoder, with the number of substitutions made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub replaced: usize,
}

/// One unrepresentable character under a strict policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unencodable {
    pub charset: Charset,
    pub character: char,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetEncoder {
    pub charset: Charset,
    pub policy: ReplacementPolicy,
}

impl CharsetEncoder {
    pub const fn new(charset: Charset, policy: ReplacementPolicy) -> Self {
        Self { charset, policy }
    }

    pub const fn replacing(charset: Charset) -> Self {
        Self::new(charset, ReplacementPolicy::Replace(b'?'))
    }

    pub const fn strict(charset: Charset) -> Self {
        Self::new(charset, ReplacementPolicy::Strict)
    }

    pub fn encode(&self, text: &str) -> Result<Encoded, Unencodable> {
        let mut bytes = Vec::with_capacity(text.len());
        let mut replaced = 0;

        for (position, character) in text.chars().enumerate() {
            match (self.charset.byte_for(character), self.policy) {
                (Some(byte), _) => bytes.push(byte),
                (None, ReplacementPolicy::Replace(substitute)) => {
                    bytes.push(substitute);
                    replaced += 1;
                }
                (None, ReplacementPolicy::Strict) => {
                    return Err(Unencodable {
                        charset: self.charset,
                        character,
                        position,
                    });
                }
            }
        }

        Ok(Encoded { bytes, replaced })
    }
}

impl fmt::Display for CharsetEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.policy {
            ReplacementPolicy::Replace(byte) => {
                write!(f, "{} (replace with {:?})", self.charset, byte as char)
            }
            ReplacementPolicy::Strict => write!(f, "{} (strict)", self.charset),
        }
    }
}

/// Ordered fallback list of encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderChain {
    encoders: Vec<CharsetEncoder>,
}

impl EncoderChain {
    pub fn new(encoders: Vec<CharsetEncoder>) -> Self {
        Self { encoders }
    }

    /// Latin-1 then ASCII, both rejecting nothing.
    pub fn lenient() -> Self {
        Self::new(vec![
            CharsetEncoder::replacing(Charset::Latin1),
            CharsetEncoder::replacing(Charset::Ascii),
        ])
    }

    /// Latin-1 then ASCII, both failing on the first unrepresentable character.
    pub fn strict() -> Self {
        Self::new(vec![
            CharsetEncoder::strict(Charset::Latin1),
            CharsetEncoder::strict(Charset::Ascii),
        ])
    }

    pub fn encoders(&self) -> &[CharsetEncoder] {
        &self.encoders
    }

    /// Encode with the first encoder that accepts `text`.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::CatastrophicEncoding`] listing every encoder tried
    /// when none succeeds (including when the chain is empty).
    pub fn encode(&self, text: &str) -> WeaverResult<Vec<u8>> {
        let mut attempts = Vec::with_capacity(self.encoders.len());

        for encoder in &self.encoders {
            match encoder.encode(text) {
                Ok(encoded) => {
                    if encoded.replaced > 0 {
                        debug!(
                            encoder = %encoder,
                            replaced = encoded.replaced,
                            "characters replaced during export"
                        );
                    }
                    return Ok(encoded.bytes);
                }
                Err(failure) => {
                    debug!(
                        encoder = %encoder,
                        character = %failure.character,
                        position = failure.position,
                        "encoder rejected text"
                    );
                    attempts.push(encoder.to_string());
                }
            }
        }

        Err(ApplicationError::CatastrophicEncoding { attempts }.into())
    }
}

impl Default for EncoderChain {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyweaver_core::error::WeaverError;

    #[test]
    fn latin1_keeps_accented_letters() {
        let encoded = CharsetEncoder::replacing(Charset::Latin1)
            .encode("Café ñ")
            .unwrap();
        assert_eq!(encoded.bytes, b"Caf\xE9 \xF1");
        assert_eq!(encoded.replaced, 0);
    }

    #[test]
    fn latin1_replaces_emoji_and_cjk() {
        let encoded = CharsetEncoder::replacing(Charset::Latin1)
            .encode("\u{1f680} 龍")
            .unwrap();
        assert_eq!(encoded.bytes, b"? ?");
        assert_eq!(encoded.replaced, 2);
    }

    #[test]
    fn control_characters_are_not_latin1() {
        let encoded = CharsetEncoder::replacing(Charset::Latin1)
            .encode("a\u{7}b\u{85}c")
            .unwrap();
        assert_eq!(encoded.bytes, b"a?b?c");
    }

    #[test]
    fn ascii_rejects_accents_under_strict() {
        let err = CharsetEncoder::strict(Charset::Ascii)
            .encode("naïve")
            .unwrap_err();
        assert_eq!(err.character, 'ï');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn chain_falls_through_to_next_encoder() {
        let chain = EncoderChain::new(vec![
            CharsetEncoder::strict(Charset::Ascii),
            CharsetEncoder::replacing(Charset::Latin1),
        ]);
        assert_eq!(chain.encode("Ümlaut").unwrap(), b"\xDCmlaut");
    }

    #[test]
    fn default_chain_never_fails() {
        let chain = EncoderChain::default();
        for text in ["", "plain", "\u{1f304} **Quest**", "日本語のテキスト", "\u{0}\u{ffff}"] {
            assert!(chain.encode(text).is_ok(), "failed on {text:?}");
        }
    }

    #[test]
    fn strict_chain_reports_every_attempt() {
        let err = EncoderChain::strict().encode("\u{1f680}").unwrap_err();
        match err {
            WeaverError::Application(ApplicationError::CatastrophicEncoding { attempts }) => {
                assert_eq!(attempts, ["latin-1 (strict)", "ascii (strict)"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_chain_is_catastrophic() {
        assert!(EncoderChain::new(Vec::new()).encode("x").is_err());
    }
}
