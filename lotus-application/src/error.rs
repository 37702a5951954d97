use lotus_core::error::CoreError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("core: {0}")]
    Core(#[from] CoreError),

    #[error("config: {reason}")]
    Config { reason: String },
}
