//! WASM page implementation
//!
//! Talks to the real landing page through web-sys. The selector strings
//! below are the fixed contract with the server-rendered markup; everything
//! above this module goes through the typed `PageView` accessors instead.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::app::{submit_enrollment, submit_quiz};
use crate::client::WasmClient;
use crate::error::{ErrorKind, Result};
use crate::interface::{ControlView, PageView};
use crate::model::dtos::SubmitParams;

const FLASH_CONTAINER: &str = "#alert-container";
const QUIZ_FORM: &str = "#formulario-principal";
const QUIZ_SUBMIT: &str = "#formulario-principal .btn-enviar";
const PROFILE_REGION: &str = ".resultado-item:first-child .resultado-contenido";
const COURSES_REGION: &str = ".resultado-item:last-child .resultado-contenido";
const RESULTS_ANCHOR: &str = "#resultado";
const ENROLL_FORM: &str = "#form-inscribir";
const ENROLL_SUBMIT: &str = "#form-inscribir .btn-inscribir";

const FIELD_ERRORS: &str = "p.error";
const FIELD_WRAPPER: &str = ".campo";
const QUESTION_WRAPPER: &str = ".pregunta";

const LOADING_CLASS: &str = "loading-state";
const SAVED_LABEL_ATTR: &str = "data-original-text";

#[derive(Debug, Clone, Copy)]
enum SubmitFlow {
    Quiz,
    Enrollment,
}

/// Landing page backed by the live document
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<DomPage> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ErrorKind::DomError("document is not available".to_string()))?;

        Ok(DomPage { document })
    }

    /// Wire the primary quiz form; false when the page has no such form
    pub fn bind_quiz_form(&self) -> bool {
        match self.form(QUIZ_FORM) {
            Some(form) => self.attach_submit(&form, SubmitFlow::Quiz),
            None => false,
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn form(&self, selector: &str) -> Option<HtmlFormElement> {
        self.query(selector)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    }

    fn control(&self, selector: &str) -> Option<DomControl> {
        self.query(selector)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| DomControl { element })
    }

    fn attach_submit(&self, form: &HtmlFormElement, flow: SubmitFlow) -> bool {
        let page = self.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let page = page.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = WasmClient;
                let result = match flow {
                    SubmitFlow::Quiz => submit_quiz(&client, &page).await,
                    SubmitFlow::Enrollment => submit_enrollment(&client, &page).await,
                };
                if let Err(error) = result {
                    log::error!("submit handler failed: {error}");
                }
            });
        });

        let attached = form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .is_ok();

        // The listener must live as long as the form node. When the courses
        // region is re-rendered the node is discarded wholesale, taking the
        // handler out of the event path with it.
        closure.forget();
        attached
    }

    fn serialize_form(&self, form: &HtmlFormElement) -> SubmitParams {
        let mut fields = Vec::new();

        if let Ok(data) = FormData::new_with_form(form) {
            if let Ok(Some(entries)) = js_sys::try_iter(&data) {
                for entry in entries.flatten() {
                    let pair = js_sys::Array::from(&entry);
                    let Some(name) = pair.get(0).as_string() else {
                        continue;
                    };
                    // file entries have no string form and cannot occur here
                    let Some(value) = pair.get(1).as_string() else {
                        continue;
                    };
                    fields.push((name, value));
                }
            }
        }

        let mut action = form.action();
        if action.is_empty() {
            action = self.current_url();
        }

        SubmitParams::new(action, fields)
    }

    fn current_url(&self) -> String {
        web_sys::window()
            .map(|window| window.location())
            .and_then(|location| location.href().ok())
            .unwrap_or_default()
    }

    fn smooth_scroll(&self, selector: &str) {
        let Some(element) = self.query(selector) else {
            log::debug!("scroll target {selector} not found");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn set_region_html(&self, selector: &str, html: &str) {
        match self.query(selector) {
            Some(region) => region.set_inner_html(html),
            None => log::warn!("region {selector} not found, skipping render"),
        }
    }

    fn field_wrapper(&self, input: &Element) -> Option<Element> {
        input
            .closest(FIELD_WRAPPER)
            .ok()
            .flatten()
            .or_else(|| input.closest(QUESTION_WRAPPER).ok().flatten())
    }

    fn remove_matches(scope: &Element, selector: &str) {
        if let Ok(list) = scope.query_selector_all(selector) {
            for index in 0..list.length() {
                if let Some(node) = list.item(index) {
                    if let Some(element) = node.dyn_ref::<Element>() {
                        element.remove();
                    }
                }
            }
        }
    }
}

impl PageView for DomPage {
    type Control = DomControl;

    fn flash_available(&self) -> bool {
        self.query(FLASH_CONTAINER).is_some()
    }

    fn set_flash_html(&self, html: &str) {
        if let Some(container) = self.query(FLASH_CONTAINER) {
            container.set_inner_html(html);
        }
    }

    fn clear_flash(&self) {
        if let Some(container) = self.query(FLASH_CONTAINER) {
            container.set_inner_html("");
        }
    }

    fn scroll_flash_into_view(&self) {
        self.smooth_scroll(FLASH_CONTAINER);
    }

    fn quiz_form_data(&self) -> Option<SubmitParams> {
        self.form(QUIZ_FORM)
            .map(|form| self.serialize_form(&form))
    }

    fn quiz_submit(&self) -> Option<DomControl> {
        self.control(QUIZ_SUBMIT)
    }

    fn set_profile_html(&self, html: &str) {
        self.set_region_html(PROFILE_REGION, html);
    }

    fn set_courses_html(&self, html: &str) {
        self.set_region_html(COURSES_REGION, html);
    }

    fn bind_enrollment_form(&self) -> bool {
        match self.form(ENROLL_FORM) {
            Some(form) => self.attach_submit(&form, SubmitFlow::Enrollment),
            None => false,
        }
    }

    fn scroll_results_into_view(&self) {
        self.smooth_scroll(RESULTS_ANCHOR);
    }

    fn enrollment_form_data(&self) -> Option<SubmitParams> {
        self.form(ENROLL_FORM)
            .map(|form| self.serialize_form(&form))
    }

    fn enrollment_submit(&self) -> Option<DomControl> {
        self.control(ENROLL_SUBMIT)
    }

    fn clear_all_field_errors(&self) {
        if let Some(root) = self.document.document_element() {
            Self::remove_matches(&root, FIELD_ERRORS);
        }
    }

    fn clear_field_errors(&self, field: &str) {
        let selector = format!("[name=\"{field}\"]");
        if let Ok(inputs) = self.document.query_selector_all(&selector) {
            for index in 0..inputs.length() {
                let Some(input) = inputs
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                if let Some(wrapper) = self.field_wrapper(&input) {
                    Self::remove_matches(&wrapper, FIELD_ERRORS);
                }
            }
        }
    }

    fn append_field_error(&self, field: &str, message: &str) {
        let selector = format!("[name=\"{field}\"]");
        let Some(input) = self.query(&selector) else {
            return;
        };
        let Some(wrapper) = self.field_wrapper(&input) else {
            return;
        };

        if let Ok(annotation) = self.document.create_element("p") {
            annotation.set_class_name("error");
            annotation.set_text_content(Some(message));
            let _ = wrapper.append_child(&annotation);
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("navigation to {url} failed");
            }
        }
    }
}

/// Submit button backed by a live element; the captured label is kept in a
/// data attribute so repeated busy transitions see the same original
#[derive(Debug, Clone)]
pub struct DomControl {
    element: HtmlElement,
}

impl ControlView for DomControl {
    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_label(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_enabled(&self, enabled: bool) {
        if enabled {
            let _ = self.element.remove_attribute("disabled");
            let _ = self.element.class_list().remove_1(LOADING_CLASS);
        } else {
            let _ = self.element.set_attribute("disabled", "disabled");
            let _ = self.element.class_list().add_1(LOADING_CLASS);
        }
    }

    fn saved_label(&self) -> Option<String> {
        self.element.get_attribute(SAVED_LABEL_ATTR)
    }

    fn save_label(&self, text: &str) {
        let _ = self.element.set_attribute(SAVED_LABEL_ATTR, text);
    }

    fn clear_saved_label(&self) {
        let _ = self.element.remove_attribute(SAVED_LABEL_ATTR);
    }
}
