//! No-WASM application wiring
//!
//! Drives the same server contract as the in-page script, but from native
//! code: fetch the landing page to prime the CSRF cookie and scrape the
//! token, post the quiz, then optionally enroll in some of the recommended
//! courses. Used by the CLI binary.

use crate::client::NativeClient;
use crate::error::{ErrorKind, Result};
use crate::interface::SubmitApi;
use crate::model::dtos::{QuizAnswers, SubmitParams, CSRF_FIELD};
use crate::model::structs::{EnrollmentOutcome, QuizOutcome, ValidationReply};
use crate::page::render;

/// Typed split of the two server answers to a quiz post
#[derive(Debug, Clone)]
pub enum QuizSubmitResult {
    Accepted(QuizOutcome),
    Rejected(ValidationReply),
}

pub async fn fetch_csrf_token(client: &NativeClient, url: &str) -> Result<String> {
    let html = client.get_page(url).await?;
    extract_csrf_token(&html)
}

/// Extract the value of the hidden `csrfmiddlewaretoken` input from a
/// rendered page
pub fn extract_csrf_token(html: &str) -> Result<String> {
    html.find(CSRF_FIELD)
        .and_then(|start| {
            let rest = &html[start..];
            rest.find("value=\"").and_then(|value_start| {
                let value = &rest[value_start + "value=\"".len()..];
                value.find('"').map(|end| value[..end].to_string())
            })
        })
        .ok_or_else(|| {
            ErrorKind::ParseError("csrfmiddlewaretoken not found in page".to_string()).into()
        })
}

pub async fn run_quiz(
    client: &NativeClient,
    url: &str,
    answers: &QuizAnswers,
) -> Result<QuizSubmitResult> {
    let token = fetch_csrf_token(client, url).await?;

    let mut fields = vec![(CSRF_FIELD.to_string(), token)];
    fields.extend(answers.to_fields());

    let reply = client
        .post_form(&SubmitParams::new(url.to_string(), fields))
        .await?;

    if reply.ok {
        Ok(QuizSubmitResult::Accepted(serde_json::from_value(
            reply.body,
        )?))
    } else {
        Ok(QuizSubmitResult::Rejected(
            serde_json::from_value(reply.body).unwrap_or_default(),
        ))
    }
}

pub async fn enroll(
    client: &NativeClient,
    base_url: &str,
    outcome: &QuizOutcome,
    selected: &[String],
) -> Result<EnrollmentOutcome> {
    let action = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        render::ENROLL_ACTION
    );

    let mut fields = vec![
        (CSRF_FIELD.to_string(), outcome.csrf_token.clone()),
        ("nombre".to_string(), outcome.nombre.clone()),
        ("correo".to_string(), outcome.correo.clone()),
    ];
    for curso in selected {
        fields.push(("cursos".to_string(), curso.clone()));
    }

    let reply = client
        .post_form(&SubmitParams::new(action, fields))
        .await?;

    Ok(serde_json::from_value(reply.body)?)
}

pub fn print_outcome(outcome: &QuizOutcome) {
    println!("==================Perfil==================");
    match outcome.perfil.as_deref() {
        Some(perfil) => {
            println!("Perfil: {}", perfil.to_uppercase());
            if let Some(descripcion) = outcome.descripcion.as_deref() {
                println!("{descripcion}");
            }
            if let Some(traduccion) = outcome.traduccion_descripcion.as_deref() {
                println!("Traducción (EN): {traduccion}");
            }
        }
        None => println!("(sin perfil)"),
    }

    println!("=============Cursos recomendados=============");
    if outcome.cursos.is_empty() {
        println!("No se encontraron recomendaciones de cursos.");
    }
    for curso in &outcome.cursos {
        match curso.traduccion.as_deref() {
            Some(traduccion) => println!("- {} ({traduccion})", curso.nombre),
            None => println!("- {}", curso.nombre),
        }
    }
    println!("=============================================");
}

pub fn print_validation(reply: &ValidationReply) {
    println!(
        "{}",
        reply
            .user_message
            .as_deref()
            .unwrap_or(super::VALIDATION_MSG)
    );
    for (campo, errores) in &reply.errors {
        for error in errores {
            println!("  {campo}: {error}");
        }
    }
}
