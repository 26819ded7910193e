use super::types::VertexId;

/// Strategy turning the model's vertex counter into a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelScheme {
	/// `A`..`Z`, then `AA`..`ZZ`, `AAA`.., like spreadsheet columns.
	#[default]
	Alphabetic,
	/// `1`, `2`, `3`, ..
	Numeric,
}

impl LabelScheme {
	/// Label for the `n`-th vertex ever created (zero based).
	pub fn label(self, n: usize) -> VertexId {
		match self {
			Self::Alphabetic => VertexId::new(alphabetic(n)),
			Self::Numeric => VertexId::new((n + 1).to_string()),
		}
	}
}

fn alphabetic(mut n: usize) -> String {
	let mut letters = Vec::new();
	loop {
		letters.push(char::from(b'A' + (n % 26) as u8));
		if n < 26 {
			break;
		}
		n = n / 26 - 1;
	}
	letters.iter().rev().collect()
}
