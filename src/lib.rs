//! AES-256 envelope encryption, with the key always in the caller's hands.
//!
//! If you want to encrypt something so that only someone with the same key can decrypt it, and
//! get back a single self-contained blob (or base64 string) that carries everything except the
//! key, then this crate is for you.
//!
//! Every encryption uses a fresh random initialization vector (IV), which is placed at the front of
//! the output.  The combination of IV and ciphertext is called an [`Envelope`].  Decryption reads
//! the IV back off the front of the envelope, so the only thing you need to keep track of is the
//! key.
//!
//! The crate never holds on to a key.  You create one (with [`Key::generate`], or by loading it
//! from wherever your secrets live) and pass it to every [`SymmetricCipher::encrypt`] and
//! [`SymmetricCipher::decrypt`] call.  Rotating keys, and storing them, is up to you.
//!
//! # Envelope layouts
//!
//! * [`Aes256Cbc`] produces `IV || ciphertext`, using AES-256-CBC with PKCS#7 padding.  This is
//!   the classic layout that lots of other systems produce and consume, but it offers
//!   confidentiality only.
//! * [`Aes256CbcHmac`] produces `IV || ciphertext || tag`, adding an HMAC-SHA256 tag over the IV
//!   and ciphertext.  Any modification of the envelope is detected before decryption is attempted.
//!   Use this one unless you have a compatibility reason not to.
//!
//! ```rust
//! use aes_envelope::{Aes256CbcHmac, Error, Key, SymmetricCipher};
//! # fn main() -> Result<(), Error> {
//!
//! let key = Key::generate()?;
//!
//! let envelope = Aes256CbcHmac.encrypt_text("I am Ziggy Rafiq from United Kingdom", key.expose_secret())?;
//! let plaintext = Aes256CbcHmac.decrypt_text(&envelope, key.expose_secret())?;
//!
//! assert_eq!("I am Ziggy Rafiq from United Kingdom", plaintext);
//! # Ok(())
//! # }
//! ```
mod aes_cbc;
mod aes_cbc_hmac;
mod envelope;
mod error;
mod iv;
mod symmetric_cipher;

pub use aes_cbc::Aes256Cbc;
pub use aes_cbc_hmac::{Aes256CbcHmac, TAG_LEN};
pub use envelope::Envelope;
pub use error::Error;
pub use iv::{IV_LEN, Iv};
pub use symmetric_cipher::SymmetricCipher;

mod kdf;
mod key;
mod key_id;
mod rng;

pub use key::{KEY_LEN, Key, MAX_KEY_BITS, generate_key};
pub use key_id::KeyId;
use key_id::key_id;

#[cfg(test)]
mod test_helpers;
