use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::{layer::SubscriberExt as _, registry::Registry};

static INIT: Once = Once::new();

pub(crate) fn init() {
	INIT.call_once(|| {
		let layer = tracing_tree::HierarchicalLayer::default()
			.with_writer(tracing_subscriber::fmt::TestWriter::new())
			.with_indent_lines(true)
			.with_indent_amount(2)
			.with_targets(true);

		let sub = Registry::default().with(layer);
		tracing::subscriber::set_global_default(sub).unwrap();
	});
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

/// Run `f` with a debug-level subscriber for this thread, and return everything it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
	let buf = LogBuffer::default();
	let writer = buf.clone();

	let sub = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(sub, f);

	let logs = buf.0.lock().unwrap().clone();
	String::from_utf8(logs).unwrap()
}

/// `KeyId` of [`fixed_key`]
pub(crate) const FIXED_KEY_ID: &str = "f6f9d304e5becd99917a58875ce8de04";

pub(crate) const ZIGGY: &str = "I am Ziggy Rafiq from United Kingdom";

/// 0x00, 0x01, ..., 0x1f
pub(crate) fn fixed_key() -> [u8; 32] {
	std::array::from_fn(|i| i as u8)
}

/// 0x0f, 0x0e, ..., 0x00
pub(crate) fn fixed_iv() -> crate::Iv {
	let iv: [u8; 16] = std::array::from_fn(|i| (15 - i) as u8);
	iv.into()
}

pub(crate) fn unhex(s: &str) -> Vec<u8> {
	(0..s.len())
		.step_by(2)
		.map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
		.collect()
}
