use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::{fmt, str::FromStr};

use super::{Error, IV_LEN, Iv};

/// The output of an encryption: the IV that was used, followed by the ciphertext.
///
/// On the wire an envelope is just `IV || ciphertext`, with no header or version byte.  Its text
/// form (via [`Display`](fmt::Display) and [`FromStr`]) is standard, padded base64 of those bytes,
/// which is safe to store in a text column or send in a JSON document as an opaque string.
///
/// This models the [`Aes256Cbc`](super::Aes256Cbc) layout only.  An
/// [`Aes256CbcHmac`](super::Aes256CbcHmac) envelope will still parse, but its trailing tag ends
/// up as part of [`ciphertext`](Envelope::ciphertext); hand those straight to
/// [`SymmetricCipher::decrypt`](super::SymmetricCipher::decrypt) instead.
///
/// ```rust
/// use aes_envelope::{Envelope, Error};
/// # fn main() -> Result<(), Error> {
/// let envelope: Envelope = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=".parse()?;
///
/// assert_eq!(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15], envelope.iv().as_bytes());
/// assert_eq!(16, envelope.ciphertext().len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
	iv: Iv,
	ciphertext: Vec<u8>,
}

impl Envelope {
	pub fn new(iv: Iv, ciphertext: Vec<u8>) -> Self {
		Self { iv, ciphertext }
	}

	pub fn iv(&self) -> &Iv {
		&self.iv
	}

	/// Everything after the IV.
	pub fn ciphertext(&self) -> &[u8] {
		&self.ciphertext
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut v = Vec::with_capacity(IV_LEN + self.ciphertext.len());

		v.extend_from_slice(self.iv.as_bytes());
		v.extend_from_slice(&self.ciphertext);

		v
	}

	/// Split raw envelope bytes into IV and ciphertext without copying.
	pub(crate) fn split(b: &[u8]) -> Result<(Iv, &[u8]), Error> {
		let Some((iv, ciphertext)) = b.split_first_chunk::<IV_LEN>() else {
			return Err(Error::envelope_too_short(IV_LEN, b.len()));
		};

		Ok(((*iv).into(), ciphertext))
	}
}

impl TryFrom<&[u8]> for Envelope {
	type Error = Error;

	fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
		let (iv, ciphertext) = Self::split(b)?;

		Ok(Self::new(iv, ciphertext.to_vec()))
	}
}

impl fmt::Display for Envelope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&encode_text(self.to_bytes()))
	}
}

impl FromStr for Envelope {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(&decode_text(s)?[..])
	}
}

/// Text form of raw envelope bytes, whatever the layout.
pub(crate) fn encode_text(envelope: impl AsRef<[u8]>) -> String {
	STANDARD.encode(envelope)
}

/// Raw envelope bytes from their text form, ignoring surrounding whitespace.
pub(crate) fn decode_text(s: &str) -> Result<Vec<u8>, Error> {
	STANDARD.decode(s.trim()).map_err(|_| Error::InvalidEncoding)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn iv_comes_first() {
		let mut raw = vec![0xeeu8; IV_LEN];
		raw.extend_from_slice(b"some ciphertext");

		let envelope = Envelope::try_from(&raw[..]).unwrap();
		assert_eq!(&[0xeeu8; IV_LEN], envelope.iv().as_bytes());
		assert_eq!(b"some ciphertext", envelope.ciphertext());
		assert_eq!(raw, envelope.to_bytes());
	}

	#[test]
	fn bare_iv_is_a_valid_envelope() {
		let envelope = Envelope::try_from(&[1u8; IV_LEN][..]).unwrap();
		assert!(envelope.ciphertext().is_empty());
	}

	#[test]
	fn too_short() {
		for len in 0..IV_LEN {
			let raw = vec![0u8; len];
			assert!(matches!(
				Envelope::try_from(&raw[..]),
				Err(Error::EnvelopeTooShort { minimum: 16, actual }) if actual == len
			));
		}
	}

	#[test]
	fn text_form() {
		let envelope = Envelope::new([0u8; IV_LEN].into(), vec![0xff; 4]);
		let s = envelope.to_string();

		assert_eq!("AAAAAAAAAAAAAAAAAAAAAP////8=", s);
		assert_eq!(envelope, s.parse().unwrap());
	}

	#[test]
	fn text_form_ignores_surrounding_whitespace() {
		assert_eq!(vec![0xffu8; 4], decode_text("  /////w==\n").unwrap());

		let envelope: Envelope = "\tAAAAAAAAAAAAAAAAAAAAAP////8=\r\n".parse().unwrap();
		assert_eq!(&[0xffu8; 4], envelope.ciphertext());
	}

	#[test]
	fn tagged_layout_keeps_the_tag_in_the_ciphertext() {
		let raw = [[1u8; IV_LEN], [2u8; 16], [3u8; 16], [4u8; 16]].concat();
		let envelope: Envelope = encode_text(&raw).parse().unwrap();

		assert_eq!(&raw[IV_LEN..], envelope.ciphertext());
		assert_eq!(raw, envelope.to_bytes());
	}

	#[test]
	fn bad_base64() {
		assert!(matches!(
			"not base64!".parse::<Envelope>(),
			Err(Error::InvalidEncoding)
		));
	}

	#[test]
	fn short_base64() {
		// Eight bytes, decodes fine but can't hold an IV
		assert!(matches!(
			"AAAAAAAAAAA=".parse::<Envelope>(),
			Err(Error::EnvelopeTooShort {
				minimum: 16,
				actual: 8
			})
		));
	}
}
