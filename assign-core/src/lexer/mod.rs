pub mod error;
pub mod token;
pub mod lexer;
pub mod interner;

pub mod prelude {
	pub use super::{
		error::*,
		token::*,
		lexer::*,
		interner::*
	};
}

#[cfg(test)]
mod tests;
