use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing anchor in analytics report: {0}")]
    MissingAnchor(&'static str),

    #[error("Invalid count value: {0}")]
    InvalidCount(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Chart rendering failed: {0}")]
    ChartRender(String),

    #[error("Empty data series: {0}")]
    EmptySeries(&'static str),
}

pub type Result<T> = std::result::Result<T, ReportError>;
