use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Factorial is undefined for negative numbers, got {0}")]
    NegativeFactorial(i32),
}

pub type Result<T> = std::result::Result<T, EngineError>;
