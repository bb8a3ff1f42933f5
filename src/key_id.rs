use super::{Error, KEY_LEN, kdf};

type Kid = [u8; 16];

/// A fingerprint of a key, safe to write to logs in place of the key itself.
#[allow(clippy::derived_hash_with_manual_eq)] // k1 == k2 => hash(k1) == hash(k2) will hold
#[derive(Clone, Copy, Debug, Hash)]
#[repr(transparent)]
pub struct KeyId(Kid);

impl KeyId {
	pub fn as_bytes(&self) -> &Kid {
		&self.0
	}
}

impl PartialEq for KeyId {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq::constant_time_eq_n(&self.0, &other.0)
	}
}

impl Eq for KeyId {}

impl std::fmt::Display for KeyId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for b in &self.0 {
			f.write_fmt(format_args!("{b:02x}"))?;
		}

		Ok(())
	}
}

/// Get a reasonably-unique ID for a key
#[tracing::instrument(level = "trace", skip(key))]
pub(crate) fn key_id(key: &[u8; KEY_LEN]) -> Result<KeyId, Error> {
	let derived = kdf::derive_key(key, b"key_id")?;
	let mut kid: Kid = Default::default();
	let n = kid.len();
	kid.copy_from_slice(&derived[..n]);

	Ok(KeyId(kid))
}
