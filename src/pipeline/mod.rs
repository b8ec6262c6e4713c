pub mod engine;
pub mod partition;
pub mod reassemble;

pub use engine::*;
pub use partition::*;
pub use reassemble::*;
