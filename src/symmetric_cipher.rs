use zeroize::Zeroize as _;

use super::{
	Error, Iv,
	envelope::{decode_text, encode_text},
	key::check_key,
};

/// Core trait that each envelope layout implements to provide encryption / decryption.
///
/// Keys are always passed in by the caller, and must be exactly
/// [`KEY_LEN`](super::KEY_LEN) bytes; a [`Key`](super::Key) can be passed as
/// `key.expose_secret()`.  Implementations hold no state, so a single value can be shared freely
/// between threads.
pub trait SymmetricCipher {
	/// Encrypt `plaintext` under `key`, with a freshly generated IV.
	///
	/// # Errors
	///
	/// * [`Error::InvalidKeyLength`] if `key` isn't 32 bytes long.
	/// * [`Error::RandomSourceUnavailable`] if an IV couldn't be generated.
	fn encrypt(&self, plaintext: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
		check_key(key.as_ref())?;

		self.encrypt_with_iv(plaintext, key, &Iv::generate()?)
	}

	/// Encrypt `plaintext` under `key`, using the provided IV.
	///
	/// **Never** encrypt two different plaintexts with the same key and IV.  This exists so that
	/// known-answer tests can be reproduced; everything else should use
	/// [`encrypt`](SymmetricCipher::encrypt).
	///
	/// # Errors
	///
	/// Will return [`Error::InvalidKeyLength`] if `key` isn't 32 bytes long.
	fn encrypt_with_iv(
		&self,
		plaintext: impl AsRef<[u8]>,
		key: impl AsRef<[u8]>,
		iv: &Iv,
	) -> Result<Vec<u8>, Error>;

	/// Decrypt an envelope produced by [`encrypt`](SymmetricCipher::encrypt) with the same key.
	///
	/// # Errors
	///
	/// Will return one of the following:
	/// * [`Error::InvalidKeyLength`] if `key` isn't 32 bytes long.
	/// * [`Error::EnvelopeTooShort`] if the envelope can't even hold the IV (plus whatever else
	///   the layout requires).
	/// * [`Error::PaddingValidation`] if the decrypted data isn't correctly padded.  This is what
	///   you'll see if the key is wrong or the envelope was corrupted or tampered with, and no
	///   attempt is made to tell those apart.
	/// * [`Error::Authentication`], for layouts that carry an authentication tag, if the tag
	///   doesn't match.
	fn decrypt(&self, envelope: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<Vec<u8>, Error>;

	/// Encrypt a UTF-8 string, returning the envelope as standard base64.
	///
	/// # Errors
	///
	/// As for [`encrypt`](SymmetricCipher::encrypt).
	fn encrypt_text(&self, plaintext: &str, key: impl AsRef<[u8]>) -> Result<String, Error> {
		Ok(encode_text(self.encrypt(plaintext.as_bytes(), key)?))
	}

	/// Decrypt a base64 envelope produced by [`encrypt_text`](SymmetricCipher::encrypt_text).
	///
	/// # Errors
	///
	/// As for [`decrypt`](SymmetricCipher::decrypt), as well as:
	/// * [`Error::InvalidEncoding`] if `envelope` isn't valid base64.
	/// * [`Error::InvalidPlaintext`] if the decrypted bytes aren't valid UTF-8.
	fn decrypt_text(&self, envelope: &str, key: impl AsRef<[u8]>) -> Result<String, Error> {
		String::from_utf8(self.decrypt(decode_text(envelope)?, key)?).map_err(|e| {
			e.into_bytes().zeroize();
			Error::InvalidPlaintext
		})
	}
}
