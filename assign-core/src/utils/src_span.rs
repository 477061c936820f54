use std::{fmt::Display, ops::Range};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SrcSpan {
    pub start: u32,
    pub end: u32,
}

impl SrcSpan {
	pub fn from(start: u32, end: u32) -> Self {
		Self { start, end }
	}

	pub fn at(position: u32) -> Self {
		Self { start: position, end: position }
	}

	pub fn to_range(&self) -> Range<usize> {
		(self.start as usize)..(self.end as usize)
	}
}

impl Display for SrcSpan {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}
