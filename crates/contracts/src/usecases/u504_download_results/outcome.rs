//! Interpreting the `GET /api/download-results/` response.
//!
//! The endpoint answers with a zip attachment on success and with JSON
//! `{"error": ...}` otherwise, sometimes with a 2xx status. The content type
//! tells the two apart.

use crate::shared::api::{error_field, is_success_status, server_error_message};
use serde_json::Value;

/// What to do with a response before reading its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadDisposition {
    /// Save the body as a file.
    Attachment,
    /// 2xx with a JSON body: the body describes an error.
    JsonError,
    /// Non-2xx: the body may or may not be JSON.
    HttpError,
}

impl DownloadDisposition {
    pub fn classify(status: u16, content_type: Option<&str>) -> Self {
        if !is_success_status(status) {
            return DownloadDisposition::HttpError;
        }
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);
        if is_json {
            DownloadDisposition::JsonError
        } else {
            DownloadDisposition::Attachment
        }
    }

    /// Alert text for the two error dispositions.
    pub fn failure_message(self, status: u16, body: &str) -> String {
        let parsed = serde_json::from_str::<Value>(body).ok();
        match self {
            DownloadDisposition::JsonError => {
                let error = parsed
                    .as_ref()
                    .and_then(error_field)
                    .unwrap_or_else(|| "未知错误".to_string());
                format!("下载失败: {}", error)
            }
            DownloadDisposition::HttpError => match parsed {
                Some(value) => error_field(&value).unwrap_or_else(|| "下载失败".to_string()),
                None => server_error_message(status),
            },
            DownloadDisposition::Attachment => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved,
    Failed(String),
}

impl DownloadOutcome {
    /// Resolve a complete response. `save` runs exactly once for an
    /// attachment and never otherwise.
    pub fn resolve<S>(status: u16, content_type: Option<&str>, body: &[u8], save: S) -> Self
    where
        S: FnOnce(&[u8]) -> Result<(), String>,
    {
        match DownloadDisposition::classify(status, content_type) {
            DownloadDisposition::Attachment => match save(body) {
                Ok(()) => DownloadOutcome::Saved,
                Err(e) => DownloadOutcome::Failed(e),
            },
            disposition => {
                let text = String::from_utf8_lossy(body);
                DownloadOutcome::Failed(disposition.failure_message(status, &text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn resolve_counting(
        status: u16,
        content_type: Option<&str>,
        body: &[u8],
    ) -> (DownloadOutcome, usize) {
        let saves = Cell::new(0);
        let outcome = DownloadOutcome::resolve(status, content_type, body, |_| {
            saves.set(saves.get() + 1);
            Ok(())
        });
        (outcome, saves.get())
    }

    #[test]
    fn test_json_content_type_never_saves() {
        let (outcome, saves) = resolve_counting(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"error": "没有可下载的分析结果"}"#.as_bytes(),
        );
        assert_eq!(saves, 0);
        assert_eq!(
            outcome,
            DownloadOutcome::Failed("下载失败: 没有可下载的分析结果".to_string())
        );
    }

    #[test]
    fn test_other_content_types_save_once() {
        for ct in [Some("application/zip"), Some("application/octet-stream"), None] {
            let (outcome, saves) = resolve_counting(200, ct, b"PK\x03\x04");
            assert_eq!(saves, 1);
            assert_eq!(outcome, DownloadOutcome::Saved);
        }
    }

    #[test]
    fn test_http_error_with_json_body() {
        let (outcome, saves) =
            resolve_counting(500, Some("application/json"), br#"{"error":"no results"}"#);
        assert_eq!(saves, 0);
        assert_eq!(outcome, DownloadOutcome::Failed("no results".to_string()));
    }

    #[test]
    fn test_http_error_with_unparseable_body() {
        let (outcome, saves) = resolve_counting(500, Some("text/html"), b"<h1>Server Error</h1>");
        assert_eq!(saves, 0);
        assert_eq!(outcome, DownloadOutcome::Failed("服务器错误 (500)".to_string()));
    }

    #[test]
    fn test_http_error_json_without_error_field() {
        let (outcome, _) = resolve_counting(404, Some("application/json"), b"{}");
        assert_eq!(outcome, DownloadOutcome::Failed("下载失败".to_string()));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let outcome = DownloadOutcome::resolve(200, Some("application/zip"), b"PK", |_| {
            Err("No body element".to_string())
        });
        assert_eq!(outcome, DownloadOutcome::Failed("No body element".to_string()));
    }
}
