use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::json;

use vocari_landing_core::app::{
    submit_enrollment, submit_quiz, CONNECTION_MSG, ENROLL_CONNECTION_MSG,
};
use vocari_landing_core::error::{ErrorKind, Result};
use vocari_landing_core::interface::{ControlView, SubmitApi};
use vocari_landing_core::model::dtos::{FormReply, SubmitParams, CSRF_FIELD};
use vocari_landing_core::page::busy::BUSY_LABEL;
use vocari_landing_core::page::{HeadlessControl, HeadlessPage};

struct StubClient {
    replies: RefCell<VecDeque<Result<FormReply>>>,
    seen: RefCell<Vec<SubmitParams>>,
}

impl StubClient {
    fn replying(ok: bool, status: u16, body: serde_json::Value) -> StubClient {
        let mut replies = VecDeque::new();
        replies.push_back(Ok(FormReply { ok, status, body }));
        StubClient {
            replies: RefCell::new(replies),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> StubClient {
        let mut replies = VecDeque::new();
        replies.push_back(Err(
            ErrorKind::ParseError("connection refused".to_string()).into()
        ));
        StubClient {
            replies: RefCell::new(replies),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn last_params(&self) -> SubmitParams {
        self.seen.borrow().last().cloned().expect("nothing posted")
    }
}

impl SubmitApi for StubClient {
    async fn post_form(&self, params: &SubmitParams) -> Result<FormReply> {
        self.seen.borrow_mut().push(params.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("no scripted reply left")
    }
}

fn quiz_page() -> (HeadlessPage, HeadlessControl) {
    let page = HeadlessPage::new();
    let control = page.install_quiz_form(
        Some("http://localhost/"),
        vec![
            (CSRF_FIELD.to_string(), "tok123".to_string()),
            ("nombre".to_string(), "Ana".to_string()),
            ("correo".to_string(), "ana@example.com".to_string()),
            ("q1".to_string(), "Tecnológico".to_string()),
        ],
        "ENVIAR",
    );
    (page, control)
}

fn enrollment_page() -> (HeadlessPage, HeadlessControl) {
    let page = HeadlessPage::new();
    let control = page.install_enrollment_form(
        "http://localhost/inscribir/",
        vec![
            (CSRF_FIELD.to_string(), "tok123".to_string()),
            ("nombre".to_string(), "Ana".to_string()),
            ("correo".to_string(), "ana@example.com".to_string()),
            ("cursos".to_string(), "Data".to_string()),
        ],
        "INSCRIBIRME",
    );
    (page, control)
}

#[tokio::test]
async fn accepted_quiz_renders_results_without_flash() {
    let (page, control) = quiz_page();
    let client = StubClient::replying(
        true,
        200,
        json!({
            "status_class": "success",
            "user_message": "¡Test completado!",
            "perfil": "Tecnológico",
            "descripcion": "Te interesa la tecnología.",
            "cursos": [{"nombre": "Data", "traduccion": "Datos"}],
            "csrf_token": "tok123",
            "nombre": "Ana",
            "correo": "ana@example.com"
        }),
    );

    submit_quiz(&client, &page).await.unwrap();

    assert!(page.flash_html().is_none());
    assert!(page.profile_html().unwrap().contains("TECNOLÓGICO"));

    let courses = page.courses_html().unwrap();
    assert!(courses.contains(r#"<input type="checkbox" name="cursos" value="Data">"#));
    assert!(courses.contains("(Datos)"));
    assert!(page.enrollment_bound());

    assert!(control.is_enabled());
    assert_eq!(control.label(), "ENVIAR");
    assert_eq!(client.last_params().csrf_token, "tok123");
}

#[tokio::test]
async fn degraded_quiz_outcome_still_renders_but_flashes() {
    let (page, _control) = quiz_page();
    let client = StubClient::replying(
        true,
        200,
        json!({
            "status_class": "warning",
            "user_message": "Test completado pero no pudimos enviar el correo.",
            "perfil": "Tecnológico",
            "descripcion": "Te interesa la tecnología.",
            "cursos": []
        }),
    );

    submit_quiz(&client, &page).await.unwrap();

    let flash = page.flash_html().unwrap();
    assert!(flash.contains("Atención:"));
    assert!(flash.contains("no pudimos enviar el correo"));
    assert!(flash.contains("alert-warning"));
    assert!(page.profile_html().is_some());
}

#[tokio::test]
async fn empty_courses_render_placeholder_and_bind_nothing() {
    let (page, _control) = quiz_page();
    let client = StubClient::replying(
        true,
        200,
        json!({
            "status_class": "success",
            "user_message": "¡Test completado!",
            "perfil": "Social/Humanístico",
            "descripcion": "Tenés interés en ayudar a otros.",
            "cursos": []
        }),
    );

    submit_quiz(&client, &page).await.unwrap();

    assert!(page
        .courses_html()
        .unwrap()
        .contains("No se encontraron recomendaciones de cursos."));
    assert!(!page.enrollment_bound());
}

#[tokio::test]
async fn validation_failure_annotates_fields_and_flashes() {
    let (page, control) = quiz_page();
    let client = StubClient::replying(
        false,
        400,
        json!({
            "success": false,
            "user_message": "Por favor, revisa los errores en el formulario.",
            "errors": {"correo": ["Invalid email"]}
        }),
    );

    submit_quiz(&client, &page).await.unwrap();

    assert_eq!(page.field_errors("correo"), vec!["Invalid email"]);
    let flash = page.flash_html().unwrap();
    assert!(flash.contains("Error:"));
    assert!(flash.contains("revisa los errores"));

    assert!(control.is_enabled());
    assert_eq!(control.label(), "ENVIAR");
}

#[tokio::test]
async fn stale_annotations_are_replaced_on_resubmit() {
    let (page, _control) = quiz_page();

    let first = StubClient::replying(
        false,
        400,
        json!({"errors": {"correo": ["Primer error", "Segundo error"]}}),
    );
    submit_quiz(&first, &page).await.unwrap();
    assert_eq!(page.field_errors("correo").len(), 2);

    let second = StubClient::replying(
        false,
        400,
        json!({"errors": {"correo": ["Invalid email"]}}),
    );
    submit_quiz(&second, &page).await.unwrap();
    assert_eq!(page.field_errors("correo"), vec!["Invalid email"]);
}

#[tokio::test]
async fn quiz_network_failure_flashes_and_restores_control() {
    let (page, control) = quiz_page();
    let client = StubClient::failing();

    submit_quiz(&client, &page).await.unwrap();

    assert!(page.flash_html().unwrap().contains(CONNECTION_MSG));
    assert!(control.is_enabled());
    assert_eq!(control.label(), "ENVIAR");
}

#[tokio::test]
async fn quiz_without_form_is_a_dom_error() {
    let page = HeadlessPage::new();
    let client = StubClient::failing();

    assert!(submit_quiz(&client, &page).await.is_err());
}

#[tokio::test]
async fn enrollment_success_navigates_without_restoring() {
    let (page, control) = enrollment_page();
    let client = StubClient::replying(
        true,
        200,
        json!({
            "success": true,
            "user_message": "¡Inscripción recibida con éxito! Serás redirigido.",
            "redirect_url": "/gracias/"
        }),
    );

    submit_enrollment(&client, &page).await.unwrap();

    assert_eq!(page.navigated_to().as_deref(), Some("/gracias/"));
    // navigation supersedes the restore; the control stays busy
    assert!(!control.is_enabled());
    assert_eq!(control.label(), BUSY_LABEL);
}

#[tokio::test]
async fn enrollment_rejection_flashes_and_restores_label() {
    let (page, control) = enrollment_page();
    let client = StubClient::replying(
        false,
        400,
        json!({"success": false, "user_message": "Ya inscrito"}),
    );

    submit_enrollment(&client, &page).await.unwrap();

    let flash = page.flash_html().unwrap();
    assert!(flash.contains("Ya inscrito"));
    assert!(flash.contains("alert-danger"));
    assert!(page.navigated_to().is_none());

    assert!(control.is_enabled());
    assert_eq!(control.label(), "INSCRIBIRME");
}

#[tokio::test]
async fn enrollment_network_failure_flashes_and_restores() {
    let (page, control) = enrollment_page();
    let client = StubClient::failing();

    submit_enrollment(&client, &page).await.unwrap();

    assert!(page.flash_html().unwrap().contains(ENROLL_CONNECTION_MSG));
    assert!(control.is_enabled());
    assert_eq!(control.label(), "INSCRIBIRME");
}

#[tokio::test]
async fn enrollment_success_without_redirect_is_treated_as_failure() {
    let (page, control) = enrollment_page();
    let client = StubClient::replying(true, 200, json!({"success": true}));

    submit_enrollment(&client, &page).await.unwrap();

    assert!(page.navigated_to().is_none());
    assert!(page.flash_html().is_some());
    assert!(control.is_enabled());
}
