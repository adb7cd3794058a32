//! Source download: the program's own source files, embedded at build time and served verbatim.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Entry point served by `GET /source`.
pub const DEFAULT_SOURCE: &str = "main.rs";

/// Every source file of the program, keyed by its path under `src/`.
pub const SOURCE_FILES: &[(&str, &str)] = &[
    ("main.rs", include_str!("../main.rs")),
    ("config.rs", include_str!("../config.rs")),
    ("errors.rs", include_str!("../errors.rs")),
    ("state.rs", include_str!("../state.rs")),
    ("routes/mod.rs", include_str!("../routes/mod.rs")),
    ("routes/health.rs", include_str!("../routes/health.rs")),
    ("llm_client/mod.rs", include_str!("../llm_client/mod.rs")),
    ("llm_client/prompts.rs", include_str!("../llm_client/prompts.rs")),
    ("llm_client/testing.rs", include_str!("../llm_client/testing.rs")),
    ("excuse/mod.rs", include_str!("../excuse/mod.rs")),
    ("excuse/models.rs", include_str!("../excuse/models.rs")),
    ("excuse/tone.rs", include_str!("../excuse/tone.rs")),
    ("excuse/prompts.rs", include_str!("../excuse/prompts.rs")),
    ("excuse/composer.rs", include_str!("../excuse/composer.rs")),
    ("excuse/generator.rs", include_str!("../excuse/generator.rs")),
    ("excuse/handlers.rs", include_str!("../excuse/handlers.rs")),
    ("ui/mod.rs", include_str!("mod.rs")),
    ("ui/page.rs", include_str!("page.rs")),
    ("ui/handlers.rs", include_str!("handlers.rs")),
    ("ui/source.rs", include_str!("source.rs")),
];

pub fn find_source(path: &str) -> Option<&'static str> {
    SOURCE_FILES
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, text)| *text)
}

/// GET /source
pub async fn handle_download_default() -> Result<Response, AppError> {
    download(DEFAULT_SOURCE)
}

/// GET /source/*path
pub async fn handle_download(Path(path): Path<String>) -> Result<Response, AppError> {
    download(&path)
}

fn download(path: &str) -> Result<Response, AppError> {
    let text = find_source(path)
        .ok_or_else(|| AppError::NotFound(format!("No source file named '{path}'")))?;
    let file_name = path.rsplit('/').next().unwrap_or(path);

    Ok((
        [
            (header::CONTENT_TYPE, "text/x-rust; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        text,
    )
        .into_response())
}
