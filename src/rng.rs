use rand::{TryRngCore as _, rngs::OsRng};

use super::Error;

/// Fill `buf` straight from the operating system's CSPRNG.
pub(crate) fn fill_secure(buf: &mut [u8]) -> Result<(), Error> {
	OsRng
		.try_fill_bytes(buf)
		.map_err(|e| Error::random_source_unavailable(e.to_string()))
}
