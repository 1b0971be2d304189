use quiz_core::model::{Subject, SubjectId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardVm {
    pub id: SubjectId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub question_count: usize,
}

impl SubjectCardVm {
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.question_count {
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        }
    }
}

#[must_use]
pub fn map_subject_card(subject: &Subject) -> SubjectCardVm {
    SubjectCardVm {
        id: subject.id().clone(),
        name: subject.name().to_string(),
        description: subject.description().to_string(),
        icon: subject.icon().to_string(),
        question_count: subject.question_count(),
    }
}

#[must_use]
pub fn map_subject_cards(subjects: &[Subject]) -> Vec<SubjectCardVm> {
    subjects.iter().map(map_subject_card).collect()
}
