//! Core value types.

mod date;
mod tenor;

pub use date::Date;
pub use tenor::{Tenor, TenorUnit};
