//! Leaf disease handler

use std::path::{Path, PathBuf};

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use uuid::Uuid;

use super::run_predictor;
use crate::logic::advisory::disease_info;
use crate::logic::model::{image, inference::argmax};
use crate::models::{LeafDiseaseResponse, MOCK_LEAF_NOTE};
use crate::{AppError, AppResult, AppState};

/// Multipart part carrying the leaf photo
const IMAGE_FIELD: &str = "image";

struct ImageUpload {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// An upload written to the upload directory; the file is removed on drop
struct StoredUpload {
    path: PathBuf,
}

impl StoredUpload {
    async fn save(dir: &Path, file_name: Option<&str>, bytes: &[u8]) -> AppResult<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.{}", Uuid::new_v4(), upload_extension(file_name)));
        tokio::fs::write(&path, bytes).await?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoredUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove upload {}: {}", self.path.display(), e);
        }
    }
}

/// Extension from the client file name, reduced to a short alphanumeric token.
/// Client names never reach the filesystem.
fn upload_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "upload".to_string())
}

fn no_image() -> AppError {
    AppError::ValidationError("No image provided".to_string())
}

async fn read_image_field(multipart: &mut Multipart) -> AppResult<Option<ImageUpload>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?.to_vec();
        return Ok(Some(ImageUpload { file_name, bytes }));
    }
    Ok(None)
}

/// Predict plant disease from leaf image
pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<LeafDiseaseResponse>> {
    let mut multipart = multipart.map_err(|_| no_image())?;
    let upload = read_image_field(&mut multipart).await?.ok_or_else(no_image)?;

    let models = &state.models;
    if !models.runtime_available {
        return Err(AppError::ModelUnavailable("Inference runtime is not available".to_string()));
    }

    let model = models.leaf_disease.clone().ok_or_else(|| {
        tracing::warn!(
            "Leaf disease model is not loaded (model dir: {})",
            state.config.model_dir.display()
        );
        AppError::ModelUnavailable("Model not loaded. Please check server logs for details.".to_string())
    })?;

    let stored = StoredUpload::save(&state.config.upload_dir, upload.file_name.as_deref(), &upload.bytes).await?;
    let bytes = tokio::fs::read(stored.path()).await?;

    let input = tokio::task::spawn_blocking(move || image::preprocess_leaf(&bytes))
        .await?
        .map_err(|e| {
            tracing::debug!("Image decode failed: {}", e);
            AppError::ValidationError("Failed to read image".to_string())
        })?;

    let scores = run_predictor(model.predictor.clone(), input).await?;
    let (class_idx, confidence) = argmax(&scores)
        .ok_or_else(|| AppError::PredictionFailed("Model returned no class scores".to_string()))?;
    let disease = model.classes.get(class_idx).cloned().ok_or_else(|| {
        AppError::PredictionFailed(format!("Predicted class index {} out of range", class_idx))
    })?;

    let information = disease_info(&disease);
    tracing::info!("Leaf prediction: {} ({:.3})", disease, confidence);

    Ok(Json(LeafDiseaseResponse {
        recommendations: information.treatment.clone(),
        disease,
        confidence,
        information,
        note: model.is_mock().then(|| MOCK_LEAF_NOTE.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_extension() {
        assert_eq!(upload_extension(Some("leaf.JPG")), "jpg");
        assert_eq!(upload_extension(Some("../../etc/passwd")), "upload");
        assert_eq!(upload_extension(Some("leaf.tar.gz")), "gz");
        assert_eq!(upload_extension(Some("leaf.ex e")), "upload");
        assert_eq!(upload_extension(None), "upload");
    }
}
