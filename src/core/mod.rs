pub mod accessor;

pub use crate::domain::model::{Parameter, Request};
pub use crate::utils::error::Result;
