//! No-WASM page implementation
//!
//! An in-memory stand-in for the landing page DOM with the same semantics
//! as the browser implementation: interior mutability mirrors the way DOM
//! nodes mutate behind shared handles, single-threaded like the UI event
//! loop. The CLI and the test suite drive the flows against this page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interface::{ControlView, PageView};
use crate::model::dtos::SubmitParams;

#[derive(Debug, Default)]
struct ControlState {
    label: String,
    enabled: bool,
    saved_label: Option<String>,
}

/// Submit control handle backed by shared page state
#[derive(Debug, Clone)]
pub struct HeadlessControl {
    state: Rc<RefCell<ControlState>>,
}

impl HeadlessControl {
    pub fn new(label: &str) -> HeadlessControl {
        HeadlessControl {
            state: Rc::new(RefCell::new(ControlState {
                label: label.to_string(),
                enabled: true,
                saved_label: None,
            })),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }
}

impl ControlView for HeadlessControl {
    fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    fn set_label(&self, text: &str) {
        self.state.borrow_mut().label = text.to_string();
    }

    fn set_enabled(&self, enabled: bool) {
        self.state.borrow_mut().enabled = enabled;
    }

    fn saved_label(&self) -> Option<String> {
        self.state.borrow().saved_label.clone()
    }

    fn save_label(&self, text: &str) {
        self.state.borrow_mut().saved_label = Some(text.to_string());
    }

    fn clear_saved_label(&self) {
        self.state.borrow_mut().saved_label = None;
    }
}

#[derive(Debug)]
struct FormState {
    action: Option<String>,
    fields: Vec<(String, String)>,
    submit: HeadlessControl,
}

#[derive(Debug)]
struct PageState {
    current_url: String,
    flash_present: bool,
    flash_html: Option<String>,
    flash_scrolls: u32,
    quiz_form: Option<FormState>,
    enrollment_form: Option<FormState>,
    profile_html: Option<String>,
    courses_html: Option<String>,
    enrollment_bound: bool,
    results_scrolls: u32,
    field_errors: HashMap<String, Vec<String>>,
    navigated_to: Option<String>,
}

impl Default for PageState {
    fn default() -> PageState {
        PageState {
            current_url: "http://localhost/".to_string(),
            flash_present: true,
            flash_html: None,
            flash_scrolls: 0,
            quiz_form: None,
            enrollment_form: None,
            profile_html: None,
            courses_html: None,
            enrollment_bound: false,
            results_scrolls: 0,
            field_errors: HashMap::new(),
            navigated_to: None,
        }
    }
}

/// In-memory landing page
#[derive(Debug, Default)]
pub struct HeadlessPage {
    state: RefCell<PageState>,
}

impl HeadlessPage {
    pub fn new() -> HeadlessPage {
        HeadlessPage::default()
    }

    /// Install the primary quiz form; `action = None` exercises the
    /// fall-back to the current page URL.
    pub fn install_quiz_form(
        &self,
        action: Option<&str>,
        fields: Vec<(String, String)>,
        submit_label: &str,
    ) -> HeadlessControl {
        let submit = HeadlessControl::new(submit_label);
        for (name, _) in &fields {
            self.register_field(name);
        }
        self.state.borrow_mut().quiz_form = Some(FormState {
            action: action.map(str::to_string),
            fields,
            submit: submit.clone(),
        });
        submit
    }

    /// Install the generated enrollment form the way the browser build sees
    /// it after rendering: submit label pre-seeded as the saved original.
    pub fn install_enrollment_form(
        &self,
        action: &str,
        fields: Vec<(String, String)>,
        submit_label: &str,
    ) -> HeadlessControl {
        let submit = HeadlessControl::new(submit_label);
        submit.save_label(submit_label);
        self.state.borrow_mut().enrollment_form = Some(FormState {
            action: Some(action.to_string()),
            fields,
            submit: submit.clone(),
        });
        submit
    }

    /// Declare that an input with this name exists on the page
    pub fn register_field(&self, name: &str) {
        self.state
            .borrow_mut()
            .field_errors
            .entry(name.to_string())
            .or_default();
    }

    pub fn remove_flash_container(&self) {
        self.state.borrow_mut().flash_present = false;
    }

    // inspection accessors

    pub fn flash_html(&self) -> Option<String> {
        self.state.borrow().flash_html.clone()
    }

    pub fn flash_scrolls(&self) -> u32 {
        self.state.borrow().flash_scrolls
    }

    pub fn profile_html(&self) -> Option<String> {
        self.state.borrow().profile_html.clone()
    }

    pub fn courses_html(&self) -> Option<String> {
        self.state.borrow().courses_html.clone()
    }

    pub fn enrollment_bound(&self) -> bool {
        self.state.borrow().enrollment_bound
    }

    pub fn results_scrolls(&self) -> u32 {
        self.state.borrow().results_scrolls
    }

    pub fn field_errors(&self, field: &str) -> Vec<String> {
        self.state
            .borrow()
            .field_errors
            .get(field)
            .cloned()
            .unwrap_or_default()
    }

    pub fn navigated_to(&self) -> Option<String> {
        self.state.borrow().navigated_to.clone()
    }
}

impl PageView for HeadlessPage {
    type Control = HeadlessControl;

    fn flash_available(&self) -> bool {
        self.state.borrow().flash_present
    }

    fn set_flash_html(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        if state.flash_present {
            state.flash_html = Some(html.to_string());
        }
    }

    fn clear_flash(&self) {
        self.state.borrow_mut().flash_html = None;
    }

    fn scroll_flash_into_view(&self) {
        self.state.borrow_mut().flash_scrolls += 1;
    }

    fn quiz_form_data(&self) -> Option<SubmitParams> {
        let state = self.state.borrow();
        let form = state.quiz_form.as_ref()?;
        let action = form
            .action
            .clone()
            .unwrap_or_else(|| state.current_url.clone());
        Some(SubmitParams::new(action, form.fields.clone()))
    }

    fn quiz_submit(&self) -> Option<HeadlessControl> {
        self.state
            .borrow()
            .quiz_form
            .as_ref()
            .map(|form| form.submit.clone())
    }

    fn set_profile_html(&self, html: &str) {
        self.state.borrow_mut().profile_html = Some(html.to_string());
    }

    fn set_courses_html(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        state.courses_html = Some(html.to_string());
        // replacing the region markup drops the old form and its listener
        state.enrollment_form = None;
        state.enrollment_bound = false;
    }

    fn bind_enrollment_form(&self) -> bool {
        let mut state = self.state.borrow_mut();
        let present = state
            .courses_html
            .as_deref()
            .is_some_and(|html| html.contains("id=\"form-inscribir\""));
        if present {
            state.enrollment_bound = true;
        }
        present
    }

    fn scroll_results_into_view(&self) {
        self.state.borrow_mut().results_scrolls += 1;
    }

    fn enrollment_form_data(&self) -> Option<SubmitParams> {
        let state = self.state.borrow();
        let form = state.enrollment_form.as_ref()?;
        let action = form
            .action
            .clone()
            .unwrap_or_else(|| state.current_url.clone());
        Some(SubmitParams::new(action, form.fields.clone()))
    }

    fn enrollment_submit(&self) -> Option<HeadlessControl> {
        self.state
            .borrow()
            .enrollment_form
            .as_ref()
            .map(|form| form.submit.clone())
    }

    fn clear_all_field_errors(&self) {
        for errors in self.state.borrow_mut().field_errors.values_mut() {
            errors.clear();
        }
    }

    fn clear_field_errors(&self, field: &str) {
        if let Some(errors) = self.state.borrow_mut().field_errors.get_mut(field) {
            errors.clear();
        }
    }

    fn append_field_error(&self, field: &str, message: &str) {
        if let Some(errors) = self.state.borrow_mut().field_errors.get_mut(field) {
            errors.push(message.to_string());
        }
    }

    fn navigate(&self, url: &str) {
        self.state.borrow_mut().navigated_to = Some(url.to_string());
    }
}
