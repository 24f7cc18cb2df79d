pub mod economics;
pub mod field;
pub mod recommendation;
pub mod reference;

pub use economics::*;
pub use field::*;
pub use recommendation::*;
pub use reference::*;
