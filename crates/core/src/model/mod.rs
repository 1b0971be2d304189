mod ids;
mod media;
mod mode;
mod permutation;
mod question;
mod score;
mod settings;
mod subject;

pub use ids::{ParseIdError, SubjectId};
pub use media::{MediaUri, MediaValidationError};
pub use mode::{ParseModeError, TestMode, TestModeKind};
pub use permutation::{Permutation, PermutationError};
pub use question::{Question, QuestionDraft, QuestionError};
pub use score::{ScoreError, ScoreSummary, ScoreTier};
pub use settings::{QuizSettings, QuizSettingsDraft, QuizSettingsError};
pub use subject::{DEFAULT_SUBJECT_ICON, Subject, SubjectError};
