use quiz_core::model::QuizResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score_label: String,
    pub percentage: u32,
    pub message: &'static str,
    pub emoji: &'static str,
}

#[must_use]
pub fn map_result(result: QuizResult) -> ResultVm {
    let band = result.band();
    ResultVm {
        score_label: format!("{} / {}", result.score(), result.total()),
        percentage: result.percentage(),
        message: band.message(),
        emoji: band.emoji(),
    }
}
