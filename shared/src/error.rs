use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Missing field {0}")]
    MissingField(&'static str),
    #[error("Negative entity number in {field}: {value}")]
    NegativeEntityNumber { field: &'static str, value: i64 },
    #[error("Balance of {0} tinybars does not fit in an hbar amount")]
    BalanceOutOfRange(u64),
    #[error("Invalid token id {0:?}")]
    InvalidTokenId(String),
    #[error("Malformed protobuf message: {0}")]
    Protobuf(#[from] prost::DecodeError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MainError {
    #[error("Can't read input")]
    Io,
    #[error("Can't decode account balance")]
    Decode,
    #[error("Can't render account balance")]
    Render,
}

pub trait AsIoError<T> {
    fn into_io_error(self) -> Result<T, MainError>;
}

impl<T> AsIoError<T> for anyhow::Result<T> {
    #[inline]
    fn into_io_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "I/O error");
            MainError::Io
        })
    }
}

pub trait AsDecodeError<T> {
    fn into_decode_error(self) -> Result<T, MainError>;
}

impl<T> AsDecodeError<T> for anyhow::Result<T> {
    #[inline]
    fn into_decode_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "Decode error");
            MainError::Decode
        })
    }
}

pub trait AsRenderError<T> {
    fn into_render_error(self) -> Result<T, MainError>;
}

impl<T> AsRenderError<T> for anyhow::Result<T> {
    #[inline]
    fn into_render_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "{}", MainError::Render);
            MainError::Render
        })
    }
}
