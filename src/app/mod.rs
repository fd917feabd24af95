//! Application module - the two submission flows of the landing page
//!
//! `submit_quiz` and `submit_enrollment` are written once against the
//! `SubmitApi` and `PageView` seams; the platform-specific wiring lives in
//! the WASM and no-WASM submodules.

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

use serde_json::from_value;

use crate::error::{ErrorKind, Result};
use crate::interface::{PageView, SubmitApi};
use crate::model::structs::{EnrollmentOutcome, QuizOutcome, Severity, ValidationReply};
use crate::page::{busy, errors, flash, render};

/// Original label of the quiz submit button, used when no capture exists
pub const QUIZ_LABEL: &str = "ENVIAR";

pub const VALIDATION_MSG: &str = "El formulario contiene errores.";
pub const ENROLL_FAILED_MSG: &str = "Error al procesar la inscripción.";
pub const CONNECTION_MSG: &str = "Ocurrió un error de conexión. Por favor, inténtalo de nuevo.";
pub const ENROLL_CONNECTION_MSG: &str =
    "Ocurrió un error de conexión al inscribir. Por favor, inténtalo de nuevo.";

/// Primary quiz flow: post the form, then render results or surface errors.
/// Every path re-enables the submit control before returning.
pub async fn submit_quiz<C, P>(client: &C, page: &P) -> Result<()>
where
    C: SubmitApi,
    P: PageView,
{
    let params = page
        .quiz_form_data()
        .ok_or_else(|| ErrorKind::DomError("quiz form not present".to_string()))?;

    let control = page.quiz_submit();
    if let Some(control) = &control {
        busy::set_busy(control, true, QUIZ_LABEL);
    }

    page.clear_all_field_errors();
    page.clear_flash();

    match client.post_form(&params).await {
        Ok(reply) if reply.ok => match from_value::<QuizOutcome>(reply.body) {
            Ok(outcome) => {
                // success outcomes render silently; the banner is reserved
                // for degraded results
                let severity = outcome.severity();
                if severity != Severity::Success {
                    flash::show_flash(page, &outcome.user_message, severity);
                }
                render::render_results(page, &outcome);
            }
            Err(error) => {
                log::error!("quiz response did not parse: {error}");
                flash::show_flash(page, CONNECTION_MSG, Severity::Danger);
            }
        },
        Ok(reply) => {
            let rejection: ValidationReply = from_value(reply.body).unwrap_or_default();
            let message = rejection
                .user_message
                .as_deref()
                .unwrap_or(VALIDATION_MSG);
            flash::show_flash(page, message, Severity::Danger);
            errors::render_field_errors(page, &rejection.errors);
        }
        Err(error) => {
            log::error!("quiz submission failed: {error}");
            flash::show_flash(page, CONNECTION_MSG, Severity::Danger);
        }
    }

    if let Some(control) = &control {
        busy::set_busy(control, false, QUIZ_LABEL);
    }

    Ok(())
}

/// Enrollment flow for the generated form: redirect on success, banner on
/// anything else. Only the redirect path leaves the control disabled, since
/// the navigation replaces the page.
pub async fn submit_enrollment<C, P>(client: &C, page: &P) -> Result<()>
where
    C: SubmitApi,
    P: PageView,
{
    let params = page
        .enrollment_form_data()
        .ok_or_else(|| ErrorKind::DomError("enrollment form not present".to_string()))?;

    let control = page.enrollment_submit();
    if let Some(control) = &control {
        busy::set_busy(control, true, render::ENROLL_LABEL);
    }

    match client.post_form(&params).await {
        Ok(reply) => match from_value::<EnrollmentOutcome>(reply.body) {
            Ok(outcome) => {
                if reply.ok && outcome.success {
                    if let Some(url) = outcome.redirect_url.as_deref() {
                        page.navigate(url);
                        return Ok(());
                    }
                    log::warn!("enrollment accepted without a redirect target");
                }

                let message = outcome
                    .user_message
                    .as_deref()
                    .unwrap_or(ENROLL_FAILED_MSG);
                flash::show_flash(page, message, Severity::Danger);
            }
            Err(error) => {
                log::error!("enrollment response did not parse: {error}");
                flash::show_flash(page, ENROLL_CONNECTION_MSG, Severity::Danger);
            }
        },
        Err(error) => {
            log::error!("enrollment submission failed: {error}");
            flash::show_flash(page, ENROLL_CONNECTION_MSG, Severity::Danger);
        }
    }

    if let Some(control) = &control {
        busy::set_busy(control, false, render::ENROLL_LABEL);
    }

    Ok(())
}
