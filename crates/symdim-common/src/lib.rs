pub mod error;
pub mod min_bound;
pub mod node;
mod proptests;
pub mod scalar;
pub mod shape;

pub use error::*;
pub use min_bound::*;
pub use node::*;
pub use scalar::*;
