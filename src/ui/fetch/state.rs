use crate::github::GithubUser;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState {
    pub users: Vec<GithubUser>,
    pub loading: bool,
    /// Generation of the most recent `Started`. Zero before the first mount.
    pub generation: u64,
}

impl UiState for FetchState {}
