use vocari_landing_core::app::request::{
    enroll, print_outcome, print_validation, run_quiz, QuizSubmitResult,
};
use vocari_landing_core::error::Result;
use vocari_landing_core::interface::HttpClient;
use vocari_landing_core::client::NativeClient;
use vocari_landing_core::model::dtos::QuizAnswers;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 11 {
        println!(
            "uso: {} URL NOMBRE CORREO EDAD NIVEL Q1 Q2 Q3 Q4 Q5 [CURSO...]",
            args[0]
        );
        return Ok(());
    }

    let url = args[1].clone();
    let answers = QuizAnswers {
        nombre: args[2].clone(),
        correo: args[3].clone(),
        edad: args[4].clone(),
        nivel: args[5].clone(),
        respuestas: std::array::from_fn(|i| args[6 + i].clone()),
    };
    let seleccionados: Vec<String> = args[11..].to_vec();

    let client = NativeClient::new().await?;

    let outcome = match run_quiz(&client, &url, &answers).await? {
        QuizSubmitResult::Accepted(outcome) => outcome,
        QuizSubmitResult::Rejected(reply) => {
            print_validation(&reply);
            return Ok(());
        }
    };

    println!("{}", outcome.user_message);
    print_outcome(&outcome);

    if seleccionados.is_empty() {
        return Ok(());
    }

    let enrollment = enroll(&client, &url, &outcome, &seleccionados).await?;
    match enrollment.redirect_url.as_deref() {
        Some(redirect) if enrollment.success => {
            println!("Inscripción aceptada, continúa en: {redirect}");
        }
        _ => {
            println!(
                "{}",
                enrollment
                    .user_message
                    .as_deref()
                    .unwrap_or("Error al procesar la inscripción.")
            );
        }
    }

    Ok(())
}
