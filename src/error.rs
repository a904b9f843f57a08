//! 错误类型定义

use crate::types::VertexKey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(VertexKey),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexKey),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
