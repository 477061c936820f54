pub mod src_span;
pub mod error;
pub mod source;

pub mod prelude {
    pub use super::{
        src_span::*,
        error::*,
        source::*
    };
}
