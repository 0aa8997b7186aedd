pub mod factory;
pub mod id;
pub mod model;

pub use factory::*;
pub use id::*;
pub use model::*;
