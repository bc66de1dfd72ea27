//! # Encrypted
//!
//! An opaque ciphertext tagged with the plaintext type it encodes. The
//! cipher itself is a caller-supplied [`Cipher`] seam; this type only
//! carries the bytes. Canonical text is standard base64, so `Encrypted<T>`
//! serializes like every other value object.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// The encryption seam. Implementations own keys and algorithm choice.
pub trait Cipher {
    /// Encrypts plaintext bytes.
    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8>;

    /// Decrypts ciphertext bytes.
    ///
    /// # Errors
    ///
    /// Implementation-defined; tampered or mismatched ciphertext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Raised by [`Encrypted::decrypt`].
#[derive(Error, Debug)]
pub enum DecryptError {
    /// The value holds no ciphertext (`Empty` or `Unknown`).
    #[error("nothing to decrypt")]
    NoCiphertext,

    /// The cipher rejected the ciphertext.
    #[error("cipher failed: {0}")]
    Cipher(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The decrypted bytes were not valid UTF-8.
    #[error("plaintext is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The plaintext did not parse as the target type.
    #[error("plaintext does not parse: {0}")]
    Parse(String),
}

/// Ciphertext for a value of type `T`.
pub struct Encrypted<T> {
    state: ValueState<Vec<u8>>,
    _plaintext: PhantomData<T>,
}

impl<T> Encrypted<T> {
    fn from_state(state: ValueState<Vec<u8>>) -> Self {
        Self {
            state,
            _plaintext: PhantomData,
        }
    }

    /// Wraps already-encrypted bytes.
    pub fn from_ciphertext(bytes: Vec<u8>) -> Self {
        Self::from_state(ValueState::Valid(bytes))
    }

    /// The raw ciphertext, if any.
    pub fn ciphertext(&self) -> Option<&[u8]> {
        self.state.as_valid().map(Vec::as_slice)
    }
}

impl<T> Encrypted<T>
where
    T: fmt::Display + FromStr,
    T::Err: fmt::Display,
{
    /// Encrypts a value through its canonical text form.
    pub fn encrypt(value: &T, cipher: &dyn Cipher) -> Self {
        Self::from_ciphertext(cipher.encrypt(value.to_string().as_bytes()))
    }

    /// Decrypts back into the value.
    ///
    /// # Errors
    ///
    /// [`DecryptError`] on sentinel values, cipher failure, or when the
    /// recovered plaintext does not parse as `T`.
    pub fn decrypt(&self, cipher: &dyn Cipher) -> Result<T, DecryptError> {
        let bytes = self.ciphertext().ok_or(DecryptError::NoCiphertext)?;
        let plaintext = String::from_utf8(cipher.decrypt(bytes).map_err(DecryptError::Cipher)?)?;
        plaintext
            .parse()
            .map_err(|e: T::Err| DecryptError::Parse(e.to_string()))
    }
}

impl<T> ValueObject for Encrypted<T> {
    fn empty() -> Self {
        Self::from_state(ValueState::Empty)
    }

    fn unknown() -> Self {
        Self::from_state(ValueState::Unknown)
    }

    fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn is_unknown(&self) -> bool {
        self.state.is_unknown()
    }

    fn parse(s: &str) -> Result<Self, FormatError> {
        if let Some(v) = parse_sentinels::<Self>(s) {
            return Ok(v);
        }
        STANDARD
            .decode(s)
            .map(Self::from_ciphertext)
            .map_err(|_| FormatError::new("encrypted value", s))
    }
}

impl<T> fmt::Display for Encrypted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(bytes) => f.write_str(&STANDARD.encode(bytes)),
        }
    }
}

// Manual impls: derives would put unwanted bounds on `T`.

impl<T> fmt::Debug for Encrypted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encrypted")
            .field("state", &self.state)
            .finish()
    }
}

impl<T> Clone for Encrypted<T> {
    fn clone(&self) -> Self {
        Self::from_state(self.state.clone())
    }
}

impl<T> PartialEq for Encrypted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T> Eq for Encrypted<T> {}

impl<T> std::hash::Hash for Encrypted<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<T> Default for Encrypted<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromStr for Encrypted<T> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> serde::Serialize for Encrypted<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, T> serde::Deserialize<'de> for Encrypted<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&s))
    }
}
