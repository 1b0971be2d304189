mod config;
mod results;
mod run;
mod state;
mod subjects;
mod test_type;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use config::ConfigView;
pub use results::ResultsView;
pub use run::{TestIntent, TestView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use subjects::SubjectsView;
pub use test_type::TestTypeView;
