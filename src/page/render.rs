use maud::html;

use crate::interface::PageView;
use crate::model::structs::QuizOutcome;

/// Action of the generated enrollment form
pub const ENROLL_ACTION: &str = "/inscribir/";
/// Original label of the generated enrollment submit button
pub const ENROLL_LABEL: &str = "INSCRIBIRME";

const PROFILE_PLACEHOLDER: &str =
    "Acá se mostrará el perfil obtenido y una breve descripción del mismo.";
const COURSES_PLACEHOLDER: &str = "No se encontraron recomendaciones de cursos.";

/// Populate the profile and courses regions from a quiz outcome, wire the
/// freshly generated enrollment form and bring the results into view.
///
/// Replacing the courses markup drops any previous enrollment form together
/// with its listener, so the fresh form ends up with exactly one handler.
pub fn render_results<P: PageView>(page: &P, outcome: &QuizOutcome) {
    page.set_profile_html(&profile_html(outcome));
    page.set_courses_html(&courses_html(outcome));

    if !outcome.cursos.is_empty() && !page.bind_enrollment_form() {
        log::warn!("enrollment form not found after rendering courses");
    }

    page.scroll_results_into_view();
}

pub fn profile_html(outcome: &QuizOutcome) -> String {
    let Some(perfil) = outcome.perfil.as_deref() else {
        return html! { p { (PROFILE_PLACEHOLDER) } }.into_string();
    };

    html! {
        p { strong { "Tu perfil profesional es: " (perfil.to_uppercase()) } }
        p { (outcome.descripcion.as_deref().unwrap_or_default()) }
        @if let Some(traduccion) = outcome.traduccion_descripcion.as_deref() {
            p class="text-muted fst-italic" { "Traducción (EN): " (traduccion) }
        }
    }
    .into_string()
}

pub fn courses_html(outcome: &QuizOutcome) -> String {
    if outcome.cursos.is_empty() {
        return html! { p { (COURSES_PLACEHOLDER) } }.into_string();
    }

    html! {
        h3 { "Los cursos que te recomendamos son:" }
        form action=(ENROLL_ACTION) method="post" id="form-inscribir" {
            input type="hidden" name="csrfmiddlewaretoken" value=(outcome.csrf_token);
            input type="hidden" name="nombre" value=(outcome.nombre);
            input type="hidden" name="correo" value=(outcome.correo);
            div class="lista-cursos" {
                @for curso in &outcome.cursos {
                    label class="curso-item" {
                        input type="checkbox" name="cursos" value=(curso.nombre);
                        " " (curso.nombre) " "
                        @if let Some(traduccion) = curso.traduccion.as_deref() {
                            span class="text-muted fst-italic" { "(" (traduccion) ")" }
                        }
                    }
                    br;
                }
            }
            button type="submit" class="btn-inscribir" data-original-text=(ENROLL_LABEL) {
                (ENROLL_LABEL)
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::CourseOffer;
    use crate::page::headless::HeadlessPage;

    fn outcome_with_courses(cursos: Vec<CourseOffer>) -> QuizOutcome {
        QuizOutcome {
            status_class: "success".to_string(),
            perfil: Some("Tecnológico".to_string()),
            descripcion: Some("Te interesa la tecnología.".to_string()),
            csrf_token: "tok789".to_string(),
            nombre: "Ana".to_string(),
            correo: "ana@example.com".to_string(),
            cursos,
            ..QuizOutcome::default()
        }
    }

    #[test]
    fn profile_is_uppercased_with_description() {
        let html = profile_html(&outcome_with_courses(vec![]));
        assert!(html.contains("Tu perfil profesional es: TECNOLÓGICO"));
        assert!(html.contains("Te interesa la tecnología."));
        assert!(!html.contains("Traducción (EN):"));
    }

    #[test]
    fn translated_description_renders_muted_italic() {
        let mut outcome = outcome_with_courses(vec![]);
        outcome.traduccion_descripcion = Some("You like technology.".to_string());

        let html = profile_html(&outcome);
        assert!(html.contains("Traducción (EN): You like technology."));
        assert!(html.contains("text-muted fst-italic"));
    }

    #[test]
    fn absent_profile_renders_placeholder() {
        let mut outcome = outcome_with_courses(vec![]);
        outcome.perfil = None;
        assert!(profile_html(&outcome).contains("Acá se mostrará el perfil obtenido"));
    }

    #[test]
    fn empty_courses_render_placeholder_without_form() {
        let html = courses_html(&outcome_with_courses(vec![]));
        assert!(html.contains("No se encontraron recomendaciones de cursos."));
        assert!(!html.contains("form-inscribir"));
    }

    #[test]
    fn course_checkbox_carries_name_and_translation() {
        let html = courses_html(&outcome_with_courses(vec![CourseOffer {
            nombre: "Data".to_string(),
            traduccion: Some("Datos".to_string()),
        }]));

        assert!(html.contains(r#"<input type="checkbox" name="cursos" value="Data">"#));
        assert!(html.contains("(Datos)"));
        assert!(html.contains(r#"value="tok789""#));
        assert!(html.contains(r#"name="nombre" value="Ana""#));
        assert!(html.contains(r#"name="correo" value="ana@example.com""#));
        assert!(html.contains(r#"data-original-text="INSCRIBIRME""#));
    }

    #[test]
    fn course_without_translation_has_no_parenthetical() {
        let html = courses_html(&outcome_with_courses(vec![CourseOffer {
            nombre: "Oratoria".to_string(),
            traduccion: None,
        }]));
        assert!(!html.contains("fst-italic\">("));
    }

    #[test]
    fn render_results_binds_fresh_enrollment_form() {
        let page = HeadlessPage::new();
        let outcome = outcome_with_courses(vec![CourseOffer {
            nombre: "Data".to_string(),
            traduccion: None,
        }]);

        render_results(&page, &outcome);

        assert!(page.enrollment_bound());
        assert_eq!(page.results_scrolls(), 1);
        assert!(page.courses_html().unwrap().contains("form-inscribir"));
    }

    #[test]
    fn render_results_without_courses_skips_binding() {
        let page = HeadlessPage::new();
        render_results(&page, &outcome_with_courses(vec![]));

        assert!(!page.enrollment_bound());
        assert_eq!(page.results_scrolls(), 1);
    }
}
