mod config_vm;
mod run_vm;
mod subject_vm;

pub use config_vm::{ConfigForm, RandomChoice};
pub use run_vm::{ResultsVm, TestScreenVm, map_results, map_test_screen};
pub use subject_vm::{SubjectCardVm, map_subject_card, map_subject_cards};
