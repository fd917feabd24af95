use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome severity reported by the server in `status_class` and echoed in
/// the banner's CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// The server contract names exactly success|warning|danger; anything
    /// else degrades to danger
    pub fn from_class(class: &str) -> Severity {
        match class {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Severity::Success => "¡Éxito!",
            Severity::Warning => "Atención:",
            Severity::Danger => "Error:",
        }
    }
}

/// Quiz submission accepted by the server (HTTP OK)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizOutcome {
    #[serde(default)]
    pub status_class: String,
    #[serde(default)]
    pub user_message: String,
    pub perfil: Option<String>,
    pub descripcion: Option<String>,
    pub traduccion_descripcion: Option<String>,
    #[serde(default)]
    pub cursos: Vec<CourseOffer>,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
}

impl QuizOutcome {
    pub fn severity(&self) -> Severity {
        Severity::from_class(&self.status_class)
    }
}

/// One recommended course, with its optional English translation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseOffer {
    pub nombre: String,
    pub traduccion: Option<String>,
}

/// Quiz submission rejected by the server (HTTP non-OK): per-field error
/// messages keep their server-side order
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationReply {
    pub user_message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Enrollment response; `redirect_url` is only meaningful when `success`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnrollmentOutcome {
    #[serde(default)]
    pub success: bool,
    pub redirect_url: Option<String>,
    pub user_message: Option<String>,
}
