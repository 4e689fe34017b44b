use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("The parameter {name} was not provided")]
    MissingParameter { name: String },

    #[error("The parameter {name} could not be converted to {target}: {reason}")]
    InvalidCast {
        name: String,
        target: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ParamError>;
