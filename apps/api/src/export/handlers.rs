use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::{layout_resume_in, Document, FontFamily, PageGeometry};
use crate::profile::{normalize, parse_metric, MetricDisplay, ProfileSnapshot};
use crate::render::{render_pdf, resume_file_name, RenderOptions};
use crate::state::AppState;

/// Optional per-request overrides of the configured page size and font.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub page_size: Option<String>,
    pub font: Option<String>,
}

impl ExportQuery {
    fn resolve(&self, state: &AppState) -> Result<(PageGeometry, FontFamily), AppError> {
        let geometry = match self.page_size.as_deref() {
            Some(raw) => PageGeometry::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unsupported page size '{raw}'")))?,
            None => state.page_geometry(),
        };
        let family = match self.font.as_deref() {
            Some(raw) => FontFamily::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unsupported font '{raw}'")))?,
            None => state.font_family(),
        };
        Ok((geometry, family))
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreviewResponse {
    pub file_name: String,
    pub page_count: usize,
    pub document: Document,
}

#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub metrics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ParsedMetric {
    pub input: String,
    pub text: String,
    /// Whether the client should count up to `text`.
    pub animated: bool,
    pub display: MetricDisplay,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<ParsedMetric>,
}

/// POST /api/v1/resume/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    Json(profile): Json<ProfileSnapshot>,
) -> Result<impl IntoResponse, AppError> {
    let (geometry, family) = query.resolve(&state)?;
    let profile = normalize(profile)?;
    let file_name = resume_file_name(&profile.name);

    let (pages, bytes) = run_blocking(move || {
        let document = layout_resume_in(&profile, &geometry, family);
        let bytes = render_pdf(&document, &RenderOptions::for_resume(&profile.name))?;
        Ok((document.page_count(), bytes))
    })
    .await?;

    info!(file_name = %file_name, pages, bytes = bytes.len(), "Exported resume PDF");

    let disposition = HeaderValue::from_str(&attachment_disposition(&file_name))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Content-Disposition: {e}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// POST /api/v1/resume/layout
pub async fn handle_layout_preview(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    Json(profile): Json<ProfileSnapshot>,
) -> Result<Json<LayoutPreviewResponse>, AppError> {
    let (geometry, family) = query.resolve(&state)?;
    let profile = normalize(profile)?;
    let file_name = resume_file_name(&profile.name);

    let document = run_blocking(move || Ok(layout_resume_in(&profile, &geometry, family))).await?;

    Ok(Json(LayoutPreviewResponse {
        file_name,
        page_count: document.page_count(),
        document,
    }))
}

/// POST /api/v1/achievements/metrics
pub async fn handle_parse_metrics(
    Json(req): Json<MetricsRequest>,
) -> Result<Json<MetricsResponse>, AppError> {
    let metrics = req
        .metrics
        .into_iter()
        .map(|input| {
            let display = parse_metric(&input);
            ParsedMetric {
                text: display.text(),
                animated: display.is_counter(),
                input,
                display,
            }
        })
        .collect();
    Ok(Json(MetricsResponse { metrics }))
}

/// Runs CPU-bound layout work off the async executor.
async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Layout task panicked: {e}")))?
}

/// Header values must be visible ASCII, so other characters become `_`.
fn attachment_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();
    format!("attachment; filename=\"{ascii}\"")
}
