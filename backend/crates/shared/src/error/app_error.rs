//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct rendered as the `{code, message}` envelope.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// HTTP レスポンスでは `{ "code": <理由フレーズ>, "message": <メッセージ> }` になります。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Token not found.");
/// assert_eq!(err.status_code(), 404);
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// ステータスコードからエラーを作成
    ///
    /// ステータスが無い、または未知のコードの場合は 500 になります。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// assert_eq!(AppError::from_status(Some(404), "missing").status_code(), 404);
    /// assert_eq!(AppError::from_status(None, "boom").status_code(), 500);
    /// ```
    pub fn from_status(status: Option<u16>, message: impl Into<Cow<'static, str>>) -> Self {
        let kind = status
            .and_then(ErrorKind::from_status_code)
            .unwrap_or(ErrorKind::InternalServerError);
        Self::new(kind, message)
    }

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// レスポンスの `code` フィールド（理由フレーズ）
    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Token not found.");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.code(), "Not Found");
        assert_eq!(err.message(), "Token not found.");
    }

    #[test]
    fn test_from_status_defaults_to_internal() {
        assert_eq!(AppError::from_status(None, "x").status_code(), 500);
        assert_eq!(AppError::from_status(Some(799), "x").status_code(), 500);
        assert_eq!(AppError::from_status(Some(400), "x").code(), "Bad Request");
        assert_eq!(AppError::from_status(Some(409), "x").kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_display() {
        let err = AppError::from_status(Some(404), "Token not found.");
        assert_eq!(err.to_string(), "[Not Found] Token not found.");
    }
}
