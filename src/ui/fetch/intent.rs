use crate::github::GithubUser;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// A fetch was spawned for `generation`.
    Started { generation: u64 },
    /// The fetch for `generation` returned users.
    Loaded {
        generation: u64,
        users: Vec<GithubUser>,
    },
    /// The fetch for `generation` failed. The error was already logged.
    Failed { generation: u64 },
}

impl Intent for FetchIntent {}

impl FetchIntent {
    pub fn generation(&self) -> u64 {
        match self {
            FetchIntent::Started { generation }
            | FetchIntent::Loaded { generation, .. }
            | FetchIntent::Failed { generation } => *generation,
        }
    }
}
