pub mod contact;
pub mod institution;
pub mod interop;
pub mod markup;

pub use contact::*;
pub use institution::*;
pub use interop::*;
pub use markup::*;
