use quiz_core::model::{QuestionRound, RoundOutcome};
use services::QuizController;

use super::html::sanitize_html;

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Remaining seconds at or below which the timer turns amber.
const WARNING_SECONDS: u32 = 6;
/// Remaining seconds at or below which the timer turns red.
const CRITICAL_SECONDS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Wrong,
    Muted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: char,
    /// Raw option text, sent back to the controller on click.
    pub value: String,
    pub label_html: String,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTone {
    Calm,
    Warning,
    Critical,
    /// The round is over; the number no longer counts down.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub remaining: u32,
    pub duration: u32,
    pub tone: TimerTone,
}

impl TimerVm {
    fn from_round(round: &QuestionRound) -> Self {
        let remaining = round.remaining();
        let tone = if round.is_locked() {
            TimerTone::Settled
        } else if remaining <= CRITICAL_SECONDS {
            TimerTone::Critical
        } else if remaining <= WARNING_SECONDS {
            TimerTone::Warning
        } else {
            TimerTone::Calm
        };
        Self {
            remaining,
            duration: round.duration(),
            tone,
        }
    }

    #[must_use]
    pub fn percent_left(&self) -> u32 {
        if self.duration == 0 {
            return 0;
        }
        self.remaining * 100 / self.duration
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub progress_percent: usize,
    pub text_html: String,
    pub options: Vec<OptionVm>,
    pub timer: TimerVm,
    pub locked: bool,
    pub timed_out: bool,
    pub explanation_html: Option<String>,
    pub next_label: Option<&'static str>,
}

fn option_state(outcome: Option<&RoundOutcome>, option: &str, correct_answer: &str) -> OptionState {
    let Some(outcome) = outcome else {
        return OptionState::Idle;
    };
    if option == correct_answer {
        OptionState::Correct
    } else if outcome.choice() == Some(option) {
        OptionState::Wrong
    } else {
        OptionState::Muted
    }
}

/// `None` unless a question is on screen.
#[must_use]
pub fn map_question(quiz: &QuizController) -> Option<QuestionVm> {
    let session = quiz.session();
    let question = session.current_question()?;
    let round = quiz.round()?;
    let outcome = round.outcome();
    let locked = outcome.is_some();

    let options = question
        .options()
        .iter()
        .zip(OPTION_LETTERS)
        .map(|(option, letter)| OptionVm {
            letter,
            value: option.clone(),
            label_html: sanitize_html(option),
            state: option_state(outcome, option, question.correct_answer()),
            disabled: locked,
        })
        .collect();

    let total = session.questions().len();
    let number = session.current_index() + 1;
    let next_label = locked.then(|| {
        if session.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    });

    Some(QuestionVm {
        number,
        total,
        progress_percent: number * 100 / total.max(1),
        text_html: sanitize_html(question.text()),
        options,
        timer: TimerVm::from_round(round),
        locked,
        timed_out: matches!(outcome, Some(RoundOutcome::TimedOut)),
        explanation_html: locked.then(|| sanitize_html(question.explanation())),
        next_label,
    })
}
