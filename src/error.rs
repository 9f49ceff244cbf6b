use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
    #[error("terminal is {actual:?} but the board needs at least {needed:?} (columns, rows)")]
    TooSmall { needed: (u16, u16), actual: (u16, u16) },
}

pub type TermResult<T> = Result<T, TermError>;
