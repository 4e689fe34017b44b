pub mod core;
pub mod domain;
pub mod utils;

pub use domain::model::{Parameter, Request};
pub use utils::error::{ParamError, Result};
