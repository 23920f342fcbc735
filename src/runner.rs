use crate::api::ChatBackend;
use crate::{Error, report};
use tracing::{info, warn};

/// The three canonical aloe-vera questions sent on every smoke run.
pub const ALOE_VERA_QUESTIONS: [&str; 3] = [
    "¿Cómo cuido el aloe vera?",
    "¿Cuándo debo regar mi aloe vera?",
    "¿Qué hago si mi aloe vera tiene hojas amarillas?",
];

/// Classified result of one question's round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionOutcome {
    Answered { chars: usize },
    Rejected { reason: String },
    HttpFailure { status: u16 },
    TimedOut,
    Unreachable,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub outcomes: Vec<QuestionOutcome>,
    pub aborted: bool,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn answered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, QuestionOutcome::Answered { .. }))
            .count()
    }
}

pub struct SmokeRunner {
    backend: Box<dyn ChatBackend>,
    questions: Vec<String>,
}

impl SmokeRunner {
    pub fn new(backend: Box<dyn ChatBackend>, questions: Vec<String>) -> Self {
        Self { backend, questions }
    }

    /// Sends every question in order, printing one block per outcome.
    /// An unreachable backend aborts the remaining questions; every
    /// other failure moves on to the next one.
    pub async fn run(&self) -> RunSummary {
        info!("Starting smoke run with {} questions", self.questions.len());

        println!("{}", report::opening_banner());

        let mut outcomes = Vec::new();
        let mut aborted = false;

        for (i, question) in self.questions.iter().enumerate() {
            println!("{}", report::question_header(i + 1, question));

            match self.backend.send_chat(question, &[]).await {
                Ok(answer) => {
                    println!("{}", report::answered(&answer));
                    outcomes.push(QuestionOutcome::Answered {
                        chars: answer.chars().count(),
                    });
                }
                Err(Error::Backend(reason)) => {
                    println!("{}", report::rejected(&reason));
                    outcomes.push(QuestionOutcome::Rejected { reason });
                }
                Err(Error::Http { status, body }) => {
                    println!("{}", report::http_failure(status, &body));
                    outcomes.push(QuestionOutcome::HttpFailure { status });
                }
                Err(Error::Timeout { timeout_secs }) => {
                    println!("{}", report::timed_out(timeout_secs));
                    outcomes.push(QuestionOutcome::TimedOut);
                }
                Err(Error::BackendUnreachable { url }) => {
                    warn!("Backend unreachable at {}, aborting run", url);
                    println!("{}", report::unreachable());
                    outcomes.push(QuestionOutcome::Unreachable);
                    aborted = true;
                    break;
                }
                Err(e) => {
                    println!("{}", report::unexpected(&e.to_string()));
                    outcomes.push(QuestionOutcome::Failed {
                        reason: e.to_string(),
                    });
                }
            }
        }

        println!("{}", report::closing_banner());

        let summary = RunSummary { outcomes, aborted };
        info!(
            "Smoke run finished: {}/{} questions answered",
            summary.answered(),
            summary.attempted()
        );

        summary
    }
}
