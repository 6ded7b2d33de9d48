use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::error::{Field, SubmitError};
use super::form::{Attachment, Submission};
use crate::config;

/// Success body of `POST /api/register-agent`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationReceipt {
    pub message: String,
    pub registration_id: String,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub cv_saved: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

/// Posts one registration as multipart form data.
///
/// The whole exchange, body included, is bounded by
/// [`config::SUBMIT_TIMEOUT_MS`]. A 2xx status is a success even when the
/// body is not a receipt.
pub async fn register_agent(
    submission: Submission<File>,
) -> Result<Option<RegistrationReceipt>, SubmitError> {
    let url = config::register_agent_url();
    let body = multipart_body(&submission)?;

    info!(
        "Submitting agent registration (sector: {}, language: {})",
        submission.main_sector.key(),
        submission.language
    );

    let exchange = async move {
        let response = Request::post(&url)
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read registration response body: {}", e);
                String::new()
            }
        };
        interpret_response(status, &text)
    };

    with_timeout(
        exchange,
        TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS),
        config::SUBMIT_TIMEOUT_MS,
    )
    .await
}

/// Resolves to the exchange's outcome, or to [`SubmitError::Timeout`] when
/// `timer` finishes first. The losing future is dropped.
pub(crate) async fn with_timeout<F, T, O>(
    exchange: F,
    timer: T,
    timeout_ms: u32,
) -> Result<O, SubmitError>
where
    F: Future<Output = Result<O, SubmitError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(exchange), Box::pin(timer)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(SubmitError::Timeout(timeout_ms)),
    }
}

/// Where multipart parts are written; `FormData` in the browser.
pub(crate) trait MultipartSink<A> {
    fn append_text(&mut self, name: &str, value: &str) -> Result<(), SubmitError>;
    fn append_file(&mut self, name: &str, file: &A, file_name: &str) -> Result<(), SubmitError>;
}

impl MultipartSink<File> for FormData {
    fn append_text(&mut self, name: &str, value: &str) -> Result<(), SubmitError> {
        self.append_with_str(name, value).map_err(payload_error)
    }

    fn append_file(&mut self, name: &str, file: &File, file_name: &str) -> Result<(), SubmitError> {
        self.append_with_blob_and_filename(name, file, file_name)
            .map_err(payload_error)
    }
}

/// Writes the text fields in send order, then the CV under its own file name.
pub(crate) fn write_multipart<A, S>(submission: &Submission<A>, sink: &mut S) -> Result<(), SubmitError>
where
    A: Attachment,
    S: MultipartSink<A>,
{
    for (name, value) in submission.text_fields() {
        sink.append_text(name, value)?;
    }
    sink.append_file(
        Field::Cv.wire_name(),
        &submission.cv,
        &submission.cv.file_name(),
    )
}

fn multipart_body(submission: &Submission<File>) -> Result<FormData, SubmitError> {
    let mut form = FormData::new().map_err(payload_error)?;
    write_multipart(submission, &mut form)?;
    Ok(form)
}

fn payload_error(value: JsValue) -> SubmitError {
    SubmitError::Payload(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub(crate) fn interpret_response(
    status: u16,
    body: &str,
) -> Result<Option<RegistrationReceipt>, SubmitError> {
    if (200..300).contains(&status) {
        Ok(serde_json::from_str(body).ok())
    } else {
        Err(SubmitError::Rejected {
            status,
            detail: error_detail(body),
        })
    }
}

/// Extracts a string `detail` from an error body. Structured details,
/// such as per-field validation lists, are not shown to the user.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorResponse>(body).ok()?.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}
