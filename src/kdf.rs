use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{Error, KEY_LEN};

/// Expand a 256-bit key into a purpose-specific 256-bit subkey.
///
/// The input key is already uniformly random, so it's used directly as the HKDF PRK and the
/// extract step is skipped.
pub(crate) fn derive_key(
	key: &[u8; KEY_LEN],
	context: &[u8],
) -> Result<Zeroizing<[u8; KEY_LEN]>, Error> {
	let hk = Hkdf::<Sha256>::from_prk(key).map_err(|_| Error::insanity("PRK too short"))?;

	let mut output = Zeroizing::new([0u8; KEY_LEN]);

	hk.expand(context, &mut output[..])
		.map_err(|_| Error::insanity("HKDF output too long"))?;

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_context_same_key() {
		let key = [7u8; KEY_LEN];
		assert_eq!(
			*derive_key(&key, b"one").unwrap(),
			*derive_key(&key, b"one").unwrap()
		);
	}

	#[test]
	fn context_separates_keys() {
		let key = [7u8; KEY_LEN];
		let a = derive_key(&key, b"one").unwrap();
		let b = derive_key(&key, b"two").unwrap();
		assert_ne!(*a, *b);
		assert_ne!(*a, key);
	}
}
