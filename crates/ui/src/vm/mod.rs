mod difficulty_vm;
mod html;
mod instructions_vm;
mod question_vm;
mod result_vm;
mod screen_vm;
mod start_vm;

pub use difficulty_vm::{DifficultyChoiceVm, DifficultyVm, map_difficulty};
pub use html::sanitize_html;
pub use instructions_vm::{InstructionsVm, map_instructions};
pub use question_vm::{OptionState, OptionVm, QuestionVm, TimerTone, TimerVm, map_question};
pub use result_vm::{ResultVm, map_result};
pub use screen_vm::{ScreenVm, map_screen};
pub use start_vm::{StartVm, TopicChipVm, map_start};
