#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("invalid key length: expected {expected} bytes, got {actual}")]
	InvalidKeyLength { expected: usize, actual: usize },

	#[error("cannot generate a key of {bits} bits")]
	InvalidKeySize { bits: usize },

	#[error("envelope too short: need at least {minimum} bytes, got {actual}")]
	EnvelopeTooShort { minimum: usize, actual: usize },

	#[error("data cannot be decrypted")]
	PaddingValidation,

	#[error("envelope failed authentication")]
	Authentication,

	#[error("secure random source unavailable: {0}")]
	RandomSourceUnavailable(String),

	#[error("envelope is not valid base64")]
	InvalidEncoding,

	#[error("decrypted data is not valid UTF-8")]
	InvalidPlaintext,

	#[error("CAN'T HAPPEN: {0}")]
	Insanity(String),
}
