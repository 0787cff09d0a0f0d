use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellbankError {
    /// Invalid difficulty band construction.
    #[error("band error: {0}")]
    Band(String),

    /// Invalid fill policy construction.
    #[error("fill policy error: {0}")]
    Policy(String),
}
