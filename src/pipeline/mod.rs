//! Encoding runs `sanitize → substitute → transpose → group`; decoding runs
//! `sanitize → detranspose → unsubstitute`.

pub mod allocate;
pub mod group;
pub mod sanitize;
pub mod substitute;
pub mod transpose;

pub use allocate::*;
pub use group::*;
pub use sanitize::*;
pub use substitute::*;
pub use transpose::*;
