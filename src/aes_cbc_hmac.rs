use hmac::{Hmac, Mac as _};
use sha2::Sha256;

use super::{
	Envelope, Error, IV_LEN, Iv, KEY_LEN, SymmetricCipher,
	aes_cbc::{BLOCK_LEN, cbc_decrypt, cbc_encrypt},
	kdf,
	key::check_key,
	key_id,
};

type HmacSha256 = Hmac<Sha256>;

/// Length, in bytes, of the authentication tag on the end of an [`Aes256CbcHmac`] envelope.
pub const TAG_LEN: usize = 32;

const MIN_ENVELOPE_LEN: usize = IV_LEN + BLOCK_LEN + TAG_LEN;

/// AES-256-CBC with PKCS#7 padding, authenticated with HMAC-SHA256 (encrypt-then-MAC).
///
/// The envelope is `IV || ciphertext || tag`, where the tag covers the IV and the ciphertext.
/// Separate encryption and MAC keys are derived from the one key you pass in, so you still only
/// have a single 256-bit key to look after.
///
/// On decryption the tag is checked, in constant time, before anything is decrypted, so a
/// modified envelope is always rejected with [`Error::Authentication`] and the padding of
/// attacker-supplied data is never examined.
///
/// # Example
///
/// ```rust
/// use aes_envelope::{Aes256CbcHmac, Error, Key, SymmetricCipher};
/// # fn main() -> Result<(), Error> {
/// let key = Key::generate()?;
///
/// let mut envelope = Aes256CbcHmac.encrypt(b"attack at dawn", key.expose_secret())?;
///
/// assert_eq!(
///     b"attack at dawn".to_vec(),
///     Aes256CbcHmac.decrypt(&envelope, key.expose_secret())?
/// );
///
/// // Any change at all is caught
/// envelope[20] ^= 0x01;
/// let result = Aes256CbcHmac.decrypt(&envelope, key.expose_secret());
/// assert!(matches!(result, Err(Error::Authentication)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes256CbcHmac;

impl SymmetricCipher for Aes256CbcHmac {
	#[tracing::instrument(level = "debug", skip_all)]
	fn encrypt_with_iv(
		&self,
		plaintext: impl AsRef<[u8]>,
		key: impl AsRef<[u8]>,
		iv: &Iv,
	) -> Result<Vec<u8>, Error> {
		let key = check_key(key.as_ref())?;
		let enc_key = kdf::derive_key(key, b"aes-envelope::enc")?;
		let mac_key = kdf::derive_key(key, b"aes-envelope::mac")?;

		let mut v = Envelope::new(*iv, cbc_encrypt(&enc_key, iv, plaintext.as_ref())).to_bytes();
		let tag = tag(&mac_key, &v)?;
		v.extend_from_slice(&tag);

		tracing::debug!(key_id = %key_id(key)?, len = v.len(), "Encrypted");
		Ok(v)
	}

	#[tracing::instrument(level = "debug", skip_all)]
	fn decrypt(&self, envelope: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
		let key = check_key(key.as_ref())?;
		let envelope = envelope.as_ref();

		if envelope.len() < MIN_ENVELOPE_LEN {
			return Err(Error::envelope_too_short(MIN_ENVELOPE_LEN, envelope.len()));
		}

		let (authenticated, received_tag) = envelope.split_at(envelope.len() - TAG_LEN);
		let mac_key = kdf::derive_key(key, b"aes-envelope::mac")?;
		let expected_tag = tag(&mac_key, authenticated)?;

		if !constant_time_eq::constant_time_eq(&expected_tag, received_tag) {
			tracing::debug!(key_id = %key_id(key)?, "Tag mismatch");
			return Err(Error::Authentication);
		}

		let (iv, ciphertext) = Envelope::split(authenticated)?;
		let enc_key = kdf::derive_key(key, b"aes-envelope::enc")?;

		tracing::debug!(key_id = %key_id(key)?, len = ciphertext.len(), "Decrypting");
		cbc_decrypt(&enc_key, &iv, ciphertext)
	}
}

fn tag(mac_key: &[u8; KEY_LEN], data: &[u8]) -> Result<[u8; TAG_LEN], Error> {
	let mut mac = HmacSha256::new_from_slice(mac_key)
		.map_err(|_| Error::insanity("HMAC rejected key"))?;
	mac.update(data);

	Ok(mac.finalize().into_bytes().into())
}
