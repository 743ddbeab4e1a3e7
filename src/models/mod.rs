pub mod issue;
pub mod quote;

pub use issue::*;
pub use quote::*;
