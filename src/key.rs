use secrecy::{ExposeSecret as _, ExposeSecretMut as _, SecretBox, SecretSlice};

use super::{Error, KeyId, key_id, rng};

/// Length, in bytes, of every key this crate encrypts with.
pub const KEY_LEN: usize = 32;

/// Largest key, in bits, that [`generate_key`] will produce.
pub const MAX_KEY_BITS: usize = 8192;

/// A 256-bit key for a [`SymmetricCipher`](super::SymmetricCipher).
///
/// The key material is wiped from memory when the `Key` is dropped, and it never shows up in
/// `Debug` output.  Keys are always supplied by the caller; where they are stored, and how often
/// they are rotated, is up to whatever secret store the caller uses.
#[derive(Debug)]
pub struct Key(SecretBox<[u8; KEY_LEN]>);

impl Key {
	/// Create a fresh random key from the operating system's CSPRNG.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomSourceUnavailable`] if the OS random source can't be read.
	#[tracing::instrument(level = "debug")]
	pub fn generate() -> Result<Self, Error> {
		let mut k = SecretBox::new(Box::new([0u8; KEY_LEN]));

		rng::fill_secure(k.expose_secret_mut())?;

		Ok(Self(k))
	}

	pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
		self.0.expose_secret()
	}

	/// A fingerprint of this key, for correlating log entries.
	pub fn id(&self) -> Result<KeyId, Error> {
		key_id(self.expose_secret())
	}
}

impl Clone for Key {
	fn clone(&self) -> Self {
		Self(Box::new(*self.expose_secret()).into())
	}
}

impl From<Box<[u8; KEY_LEN]>> for Key {
	fn from(k: Box<[u8; KEY_LEN]>) -> Self {
		Key(k.into())
	}
}

impl From<[u8; KEY_LEN]> for Key {
	fn from(k: [u8; KEY_LEN]) -> Self {
		Box::new(k).into()
	}
}

impl TryFrom<&[u8]> for Key {
	type Error = Error;

	fn try_from(k: &[u8]) -> Result<Self, Error> {
		let k: &[u8; KEY_LEN] = k
			.try_into()
			.map_err(|_| Error::invalid_key_length(KEY_LEN, k.len()))?;

		Ok(Box::new(*k).into())
	}
}

/// Create `bits / 8` bytes of secure random key material.
///
/// The ciphers in this crate only take 256-bit keys (see [`Key::generate`]), but other sizes are
/// handy when key material is needed for something else entirely.
///
/// # Errors
///
/// * [`Error::InvalidKeySize`] if `bits` is zero, more than [`MAX_KEY_BITS`], or not a whole
///   number of bytes.
/// * [`Error::RandomSourceUnavailable`] if the OS random source can't be read.
#[tracing::instrument(level = "debug")]
pub fn generate_key(bits: usize) -> Result<SecretSlice<u8>, Error> {
	if bits == 0 || bits > MAX_KEY_BITS || bits % 8 != 0 {
		return Err(Error::invalid_key_size(bits));
	}

	let mut k: SecretSlice<u8> = vec![0u8; bits / 8].into();

	rng::fill_secure(k.expose_secret_mut())?;

	Ok(k)
}

/// Check that `key` is exactly [`KEY_LEN`] bytes long.
pub(crate) fn check_key(key: &[u8]) -> Result<&[u8; KEY_LEN], Error> {
	key.try_into()
		.map_err(|_| Error::invalid_key_length(KEY_LEN, key.len()))
}
