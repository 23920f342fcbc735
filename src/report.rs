//! Console blocks for the smoke-run report. Pure string building; the
//! runner decides when to print them.

use colored::Colorize;

const BANNER_WIDTH: usize = 60;
const OPENING_TITLE: &str = "PRUEBAS DE PREGUNTAS SOBRE ALOE VERA";
const CLOSING_TITLE: &str = "FIN DE PRUEBAS";

const BODY_PREVIEW_CHARS: usize = 200;

pub fn opening_banner() -> String {
    banner(OPENING_TITLE)
}

pub fn closing_banner() -> String {
    banner(CLOSING_TITLE)
}

fn banner(title: &str) -> String {
    let line = "=".repeat(BANNER_WIDTH);
    format!("\n{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
}

pub fn question_header(index: usize, question: &str) -> String {
    format!(
        "\n{}\n{}",
        format!("Pregunta {}: {}", index, question).bold(),
        "-".repeat(BANNER_WIDTH)
    )
}

/// Character count goes by Unicode scalar values, not encoded bytes.
pub fn answered(answer: &str) -> String {
    format!(
        "{}\n\n{}\n",
        format!("✅ Respuesta recibida ({} caracteres):", answer.chars().count()).green(),
        answer
    )
}

pub fn rejected(reason: &str) -> String {
    format!("❌ Error: {}", reason).red().to_string()
}

pub fn http_failure(status: u16, body: &str) -> String {
    format!(
        "❌ Error HTTP {}: {}",
        status,
        truncate_chars(body, BODY_PREVIEW_CHARS)
    )
    .red()
    .to_string()
}

pub fn unreachable() -> String {
    format!(
        "{}\n{}",
        "❌ Error: No se puede conectar al backend".red(),
        "   Asegúrate de que el backend esté corriendo (python main.py)".yellow()
    )
}

pub fn timed_out(timeout_secs: u64) -> String {
    format!(
        "⏱️  Error: Timeout - la respuesta tardó más de {} segundos",
        timeout_secs
    )
    .yellow()
    .to_string()
}

pub fn unexpected(description: &str) -> String {
    format!("❌ Error inesperado: {}", description).red().to_string()
}

/// Truncates to at most `max` characters, never splitting a UTF-8
/// sequence the way a byte slice would.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
