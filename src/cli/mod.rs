pub mod archive;
pub mod extract;
pub mod hash;

pub use archive::*;
pub use extract::*;
pub use hash::*;
