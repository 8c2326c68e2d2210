//! Contact and dataset-share form handlers

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analytics::instrument;
use crate::models::{ContactForm, DatasetForm};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Handle a contact form submission
pub async fn contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<FormResponse>> {
    let form = form.sanitized();
    form.validate()?;
    let event = form.into_event();

    instrument::observe_contact(&state.analytics, || {
        state.notifier.contact_submitted(&event).map_err(|err| {
            tracing::error!("Contact notification failed: {:#}", err);
            AppError::ExternalService(
                "Failed to send message. Please try again later.".to_string(),
            )
        })?;

        Ok((
            Json(FormResponse {
                success: true,
                message: "Your request has been sent successfully. We will contact you shortly.",
            }),
            event.clone(),
        ))
    })
}

/// Handle a dataset sharing submission
pub async fn share_dataset(
    State(state): State<AppState>,
    Json(form): Json<DatasetForm>,
) -> AppResult<Json<FormResponse>> {
    let form = form.sanitized();
    form.validate()?;
    let event = form.into_event();

    instrument::observe_dataset(&state.analytics, || {
        state.notifier.dataset_submitted(&event).map_err(|err| {
            tracing::error!("Dataset notification failed: {:#}", err);
            AppError::ExternalService(
                "Failed to send dataset sharing request. Please try again later.".to_string(),
            )
        })?;

        Ok((
            Json(FormResponse {
                success: true,
                message: "Your dataset sharing request has been sent successfully. \
                          We will review and contact you shortly.",
            }),
            event.clone(),
        ))
    })
}
