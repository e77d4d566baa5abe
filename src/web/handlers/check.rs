// POST / — run a compliance check on two uploaded documents.
//
// Expects multipart form data with file fields `company_pdf` and `rfp_pdf`.
// Both files are saved to the upload directory, converted to text, and run
// through extraction and comparison.
//
// Returns 200 {"report": "..."} on success.
// Returns 400 if either file is missing or the form can't be read.
// Returns 422 if a document's text can't be extracted.
// Returns 500 if an upload can't be saved.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, warn};

use crate::compare::check_compliance;
use crate::documents::extract_text;
use crate::web::uploads::{sanitize_file_name, save_upload, Upload};
use crate::web::{api_error, AppState};

pub const COMPANY_FIELD: &str = "company_pdf";
pub const RFP_FIELD: &str = "rfp_pdf";
pub const MISSING_FILES: &str = "Both 'company_pdf' and 'rfp_pdf' files are required.";

/// POST / — compare the uploaded company profile against the uploaded RFP.
pub async fn check_documents(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return api_error(StatusCode::BAD_REQUEST, MISSING_FILES);
    };

    let mut company: Option<Upload> = None;
    let mut rfp: Option<Upload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Malformed multipart upload");
                return api_error(StatusCode::BAD_REQUEST, &format!("Malformed upload: {e}"));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        if name != COMPANY_FIELD && name != RFP_FIELD {
            continue;
        }

        let fallback = format!("{name}.pdf");
        let file_name = sanitize_file_name(field.file_name().unwrap_or_default(), &fallback);
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                warn!(field = %name, error = %e, "Failed to read upload");
                return api_error(StatusCode::BAD_REQUEST, &format!("Malformed upload: {e}"));
            }
        };

        let upload = Upload { file_name, bytes };
        if name == COMPANY_FIELD {
            company = Some(upload);
        } else {
            rfp = Some(upload);
        }
    }

    let (Some(company), Some(rfp)) = (company, rfp) else {
        return api_error(StatusCode::BAD_REQUEST, MISSING_FILES);
    };

    info!(
        company = %company.file_name,
        rfp = %rfp.file_name,
        "Running compliance check"
    );

    for upload in [&company, &rfp] {
        if let Err(e) = save_upload(&state.config.upload_dir, upload).await {
            error!(error = %e, "Failed to save upload");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save upload");
        }
    }

    let company_text = match document_text(company).await {
        Ok(text) => text,
        Err(response) => return response,
    };
    let rfp_text = match document_text(rfp).await {
        Ok(text) => text,
        Err(response) => return response,
    };

    let report = check_compliance(&company_text, &rfp_text);
    info!(
        matches = report.matches(),
        mismatches = report.mismatches(),
        "Compliance check complete"
    );

    Json(serde_json::json!({ "report": report.to_string() })).into_response()
}

/// Extract text off the async runtime, mapping failures to a 422.
async fn document_text(upload: Upload) -> Result<String, Response> {
    let file_name = upload.file_name.clone();
    let result =
        tokio::task::spawn_blocking(move || extract_text(&upload.file_name, &upload.bytes)).await;

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!(file = %file_name, error = %e, "Text extraction failed");
            Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()))
        }
        Err(e) => {
            error!(file = %file_name, error = %e, "Text extraction task panicked");
            Err(api_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                &format!("Could not read {file_name}"),
            ))
        }
    }
}
