pub mod catalog;
pub mod constants;
pub mod engine;
pub mod error;
pub mod field;
pub mod flash;
pub mod lattice;
pub mod paint;
pub mod pointer;
pub mod profile;
pub mod scheduler;
pub mod viewport;

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use flash::*;
pub use lattice::*;
pub use paint::*;
pub use pointer::*;
pub use profile::*;
pub use scheduler::*;
pub use viewport::*;
