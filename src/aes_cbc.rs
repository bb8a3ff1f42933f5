use aes::Aes256;
use cbc::cipher::{BlockDecryptMut as _, BlockEncryptMut as _, KeyIvInit as _, block_padding::Pkcs7};
use zeroize::Zeroizing;

use super::{Envelope, Error, Iv, KEY_LEN, SymmetricCipher, key::check_key, key_id};

type Encryptor = cbc::Encryptor<Aes256>;
type Decryptor = cbc::Decryptor<Aes256>;

/// AES block size, in bytes.
pub(crate) const BLOCK_LEN: usize = 16;

/// AES-256 in CBC mode with PKCS#7 padding; the envelope is `IV || ciphertext`.
///
/// This gives you confidentiality, but **no** integrity protection.  Tampering is usually, but not
/// always, noticed by way of a [`Error::PaddingValidation`] failure, and an attacker who can
/// submit envelopes for decryption and observe whether padding fails can use that as an oracle.
/// Unless you need to interoperate with something that already speaks this format, reach for
/// [`Aes256CbcHmac`](super::Aes256CbcHmac) instead.
///
/// # Example
///
/// ```rust
/// use aes_envelope::{Aes256Cbc, Error, Key, SymmetricCipher};
/// # fn main() -> Result<(), Error> {
/// let key = Key::generate()?;
///
/// let envelope = Aes256Cbc.encrypt_text("I am Ziggy Rafiq from United Kingdom", key.expose_secret())?;
///
/// assert_eq!(
///     "I am Ziggy Rafiq from United Kingdom",
///     Aes256Cbc.decrypt_text(&envelope, key.expose_secret())?
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes256Cbc;

impl SymmetricCipher for Aes256Cbc {
	#[tracing::instrument(level = "debug", skip_all)]
	fn encrypt_with_iv(
		&self,
		plaintext: impl AsRef<[u8]>,
		key: impl AsRef<[u8]>,
		iv: &Iv,
	) -> Result<Vec<u8>, Error> {
		let key = check_key(key.as_ref())?;

		let ciphertext = cbc_encrypt(key, iv, plaintext.as_ref());
		tracing::debug!(key_id = %key_id(key)?, len = ciphertext.len(), "Encrypted");

		Ok(Envelope::new(*iv, ciphertext).to_bytes())
	}

	#[tracing::instrument(level = "debug", skip_all)]
	fn decrypt(&self, envelope: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
		let key = check_key(key.as_ref())?;
		let (iv, ciphertext) = Envelope::split(envelope.as_ref())?;

		tracing::debug!(key_id = %key_id(key)?, len = ciphertext.len(), "Decrypting");
		cbc_decrypt(key, &iv, ciphertext)
	}
}

pub(crate) fn cbc_encrypt(key: &[u8; KEY_LEN], iv: &Iv, plaintext: &[u8]) -> Vec<u8> {
	Encryptor::new(key.into(), iv.as_bytes().into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

pub(crate) fn cbc_decrypt(
	key: &[u8; KEY_LEN],
	iv: &Iv,
	ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
	// Padding always adds at least one byte, so there's always at least one block
	if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
		tracing::debug!(len = ciphertext.len(), "Ciphertext not a whole number of blocks");
		return Err(Error::PaddingValidation);
	}

	let mut buf = Zeroizing::new(ciphertext.to_vec());

	let plaintext = Decryptor::new(key.into(), iv.as_bytes().into())
		.decrypt_padded_mut::<Pkcs7>(&mut buf)
		.map_err(|_| Error::PaddingValidation)?;

	Ok(plaintext.to_vec())
}
