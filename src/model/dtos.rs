use serde_json::Value;

/// Form field carrying the Django CSRF token
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Serialized form ready to be posted
#[derive(Debug, Clone)]
pub struct SubmitParams {
    pub action: String,
    pub fields: Vec<(String, String)>,
    pub csrf_token: String,
}

impl SubmitParams {
    pub fn new(action: String, fields: Vec<(String, String)>) -> SubmitParams {
        let csrf_token = fields
            .iter()
            .find(|(name, _)| name == CSRF_FIELD)
            .map(|(_, value)| value.clone())
            .unwrap_or_default();

        SubmitParams {
            action,
            fields,
            csrf_token,
        }
    }
}

/// Quiz answers collected outside the browser (CLI driver)
#[derive(Debug, Clone)]
pub struct QuizAnswers {
    pub nombre: String,
    pub correo: String,
    pub edad: String,
    pub nivel: String,
    pub respuestas: [String; 5],
}

impl QuizAnswers {
    /// Field order mirrors the rendered quiz form
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("nombre".to_string(), self.nombre.clone()),
            ("correo".to_string(), self.correo.clone()),
            ("edad".to_string(), self.edad.clone()),
            ("nivel".to_string(), self.nivel.clone()),
        ];
        for (index, respuesta) in self.respuestas.iter().enumerate() {
            fields.push((format!("q{}", index + 1), respuesta.clone()));
        }
        fields
    }
}

/// Raw transport result; flows decide between the OK and validation paths
#[derive(Debug, Clone)]
pub struct FormReply {
    pub ok: bool,
    pub status: u16,
    pub body: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_params_extracts_csrf_token_from_fields() {
        let params = SubmitParams::new(
            "/".to_string(),
            vec![
                ("nombre".to_string(), "Ana".to_string()),
                (CSRF_FIELD.to_string(), "tok456".to_string()),
            ],
        );
        assert_eq!(params.csrf_token, "tok456");
    }

    #[test]
    fn submit_params_tolerates_missing_csrf_field() {
        let params = SubmitParams::new("/".to_string(), vec![]);
        assert_eq!(params.csrf_token, "");
    }
}
