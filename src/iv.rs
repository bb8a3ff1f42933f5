use super::{Error, rng};

/// Length, in bytes, of an initialization vector (one AES block).
pub const IV_LEN: usize = 16;

/// A 128-bit initialization vector.
///
/// A new one is generated for every encryption, and it travels at the front of the envelope so
/// that decryption can find it again.  Reusing an IV with the same key leaks information about the
/// plaintexts, so outside of known-answer tests you want [`Iv::generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
	/// Generate a fresh IV from the operating system's CSPRNG.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomSourceUnavailable`] if the OS random source can't be read.
	pub fn generate() -> Result<Self, Error> {
		let mut iv = [0u8; IV_LEN];
		rng::fill_secure(&mut iv)?;

		Ok(Self(iv))
	}

	pub fn as_bytes(&self) -> &[u8; IV_LEN] {
		&self.0
	}
}

impl From<[u8; IV_LEN]> for Iv {
	fn from(iv: [u8; IV_LEN]) -> Self {
		Self(iv)
	}
}
