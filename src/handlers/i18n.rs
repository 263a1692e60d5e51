use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::{Lang, LocalizationBundle};

// GET /api/languages
#[derive(Serialize)]
pub struct LanguageResponse {
    code: &'static str,
    flag: &'static str,
}

pub async fn list_languages() -> Json<Vec<LanguageResponse>> {
    let languages = Lang::ALL
        .into_iter()
        .map(|lang| LanguageResponse {
            code: lang.code(),
            flag: lang.bundle().flag,
        })
        .collect();
    Json(languages)
}

// GET /api/i18n/:lang
pub async fn get_bundle(
    Path(code): Path<String>,
) -> Result<Json<&'static LocalizationBundle>, AppError> {
    let lang: Lang = code.parse()?;
    Ok(Json(lang.bundle()))
}
