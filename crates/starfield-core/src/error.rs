use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index} has an empty code")]
    MissingCode { index: usize },
}
