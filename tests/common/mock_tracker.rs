//! Mock issue tracker for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_seeder::error::{Error, Result};
use issue_seeder::platform::IssueTracker;
use issue_seeder::reconcile::{Pacer, ProgressCallback, Step};
use issue_seeder::types::{
    Board, CandidateIssue, CreatedIssue, ExistingIssue, ItemOutcome, RepositoryInfo,
    TargetRepository, WorkItem,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Call record for `create_issue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueCall {
    pub repo: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Call record for `add_to_board`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToBoardCall {
    pub board_id: String,
    pub node_id: String,
}

/// Simple mock issue tracker
///
/// Repositories that were never registered answer "not found". Issue numbers
/// auto-increment from 1 across all repositories.
pub struct MockTracker {
    next_issue_number: AtomicU64,
    repositories: Mutex<HashMap<String, RepositoryInfo>>,
    open_issues: Mutex<HashMap<String, Vec<ExistingIssue>>>,
    readmes: Mutex<HashMap<String, String>>,
    board: Mutex<Option<Board>>,
    // Call tracking
    get_repository_calls: Mutex<Vec<String>>,
    list_issues_calls: Mutex<Vec<String>>,
    create_issue_calls: Mutex<Vec<CreateIssueCall>>,
    add_to_board_calls: Mutex<Vec<AddToBoardCall>>,
    find_board_calls: Mutex<Vec<(String, u64)>>,
    // Error injection
    error_on_get_repository: Mutex<Option<String>>,
    error_on_list_issues: Mutex<Option<String>>,
    error_on_create_issue: Mutex<Option<String>>,
    error_on_add_to_board: Mutex<Option<String>>,
    error_on_find_board: Mutex<Option<String>>,
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTracker {
    pub fn new() -> Self {
        Self {
            next_issue_number: AtomicU64::new(1),
            repositories: Mutex::new(HashMap::new()),
            open_issues: Mutex::new(HashMap::new()),
            readmes: Mutex::new(HashMap::new()),
            board: Mutex::new(None),
            get_repository_calls: Mutex::new(Vec::new()),
            list_issues_calls: Mutex::new(Vec::new()),
            create_issue_calls: Mutex::new(Vec::new()),
            add_to_board_calls: Mutex::new(Vec::new()),
            find_board_calls: Mutex::new(Vec::new()),
            error_on_get_repository: Mutex::new(None),
            error_on_list_issues: Mutex::new(None),
            error_on_create_issue: Mutex::new(None),
            error_on_add_to_board: Mutex::new(None),
            error_on_find_board: Mutex::new(None),
        }
    }

    // === Canned responses ===

    /// Register a repository with the given metadata
    pub fn add_repository(&self, repo: &str, info: RepositoryInfo) {
        self.repositories
            .lock()
            .unwrap()
            .insert(repo.to_string(), info);
    }

    /// Set the open issues listed for a repository
    pub fn set_open_issues(&self, repo: &str, issues: Vec<ExistingIssue>) {
        self.open_issues
            .lock()
            .unwrap()
            .insert(repo.to_string(), issues);
    }

    /// Set the README served for a repository
    pub fn set_readme(&self, repo: &str, content: &str) {
        self.readmes
            .lock()
            .unwrap()
            .insert(repo.to_string(), content.to_string());
    }

    /// Set the board returned by `find_board`
    pub fn set_board(&self, board: Board) {
        *self.board.lock().unwrap() = Some(board);
    }

    // === Error injection methods ===

    pub fn fail_get_repository(&self, msg: &str) {
        *self.error_on_get_repository.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_list_issues(&self, msg: &str) {
        *self.error_on_list_issues.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_create_issue(&self, msg: &str) {
        *self.error_on_create_issue.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_add_to_board(&self, msg: &str) {
        *self.error_on_add_to_board.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_find_board(&self, msg: &str) {
        *self.error_on_find_board.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    pub fn get_repository_calls(&self) -> Vec<String> {
        self.get_repository_calls.lock().unwrap().clone()
    }

    pub fn list_issues_calls(&self) -> Vec<String> {
        self.list_issues_calls.lock().unwrap().clone()
    }

    pub fn create_issue_calls(&self) -> Vec<CreateIssueCall> {
        self.create_issue_calls.lock().unwrap().clone()
    }

    pub fn add_to_board_calls(&self) -> Vec<AddToBoardCall> {
        self.add_to_board_calls.lock().unwrap().clone()
    }

    pub fn find_board_calls(&self) -> Vec<(String, u64)> {
        self.find_board_calls.lock().unwrap().clone()
    }

    /// Number of remote calls of any kind
    pub fn total_calls(&self) -> usize {
        self.get_repository_calls.lock().unwrap().len()
            + self.list_issues_calls.lock().unwrap().len()
            + self.create_issue_calls.lock().unwrap().len()
            + self.add_to_board_calls.lock().unwrap().len()
            + self.find_board_calls.lock().unwrap().len()
    }

    /// Assert that nothing was ever created
    pub fn assert_nothing_created(&self) {
        let calls = self.create_issue_calls();
        assert!(calls.is_empty(), "Expected no create_issue calls but got: {calls:?}");
    }
}

fn injected(slot: &Mutex<Option<String>>) -> Result<()> {
    match slot.lock().unwrap().as_ref() {
        Some(msg) => Err(Error::GitHubApi(msg.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn get_repository(&self, repo: &TargetRepository) -> Result<Option<RepositoryInfo>> {
        self.get_repository_calls
            .lock()
            .unwrap()
            .push(repo.to_string());
        injected(&self.error_on_get_repository)?;

        Ok(self
            .repositories
            .lock()
            .unwrap()
            .get(&repo.to_string())
            .copied())
    }

    async fn list_open_issues(&self, repo: &TargetRepository) -> Result<Vec<ExistingIssue>> {
        self.list_issues_calls.lock().unwrap().push(repo.to_string());
        injected(&self.error_on_list_issues)?;

        Ok(self
            .open_issues
            .lock()
            .unwrap()
            .get(&repo.to_string())
            .cloned()
            .unwrap_or_default())
    }

    async fn create_issue(
        &self,
        repo: &TargetRepository,
        issue: &CandidateIssue,
    ) -> Result<CreatedIssue> {
        self.create_issue_calls.lock().unwrap().push(CreateIssueCall {
            repo: repo.to_string(),
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: issue.labels.clone(),
        });
        injected(&self.error_on_create_issue)?;

        let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            number,
            html_url: format!("https://github.com/{repo}/issues/{number}"),
            node_id: format!("I_node{number}"),
        })
    }

    async fn fetch_readme(&self, repo: &TargetRepository) -> Result<String> {
        self.readmes
            .lock()
            .unwrap()
            .get(&repo.to_string())
            .cloned()
            .ok_or_else(|| Error::GitHubApi("Not Found".to_string()))
    }

    async fn find_board(&self, org: &str, number: u64) -> Result<Option<Board>> {
        self.find_board_calls
            .lock()
            .unwrap()
            .push((org.to_string(), number));
        injected(&self.error_on_find_board)?;

        Ok(self
            .board
            .lock()
            .unwrap()
            .clone()
            .filter(|board| board.number == number))
    }

    async fn add_to_board(&self, board: &Board, issue: &CreatedIssue) -> Result<()> {
        self.add_to_board_calls.lock().unwrap().push(AddToBoardCall {
            board_id: board.id.clone(),
            node_id: issue.node_id.clone(),
        });
        injected(&self.error_on_add_to_board)
    }
}

/// Pacer that records requested pauses instead of sleeping
#[derive(Default)]
pub struct CountingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl CountingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}

/// Progress callback that records what it was told
#[derive(Default)]
pub struct RecordingProgress {
    pub steps: Mutex<Vec<Step>>,
    pub errors: Mutex<Vec<String>>,
    pub linked: Mutex<Vec<String>>,
    pub positions: Mutex<Vec<(usize, usize)>>,
}

impl RecordingProgress {
    pub fn steps(&self) -> Vec<Step> {
        self.steps.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn linked(&self) -> Vec<String> {
        self.linked.lock().unwrap().clone()
    }

    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.positions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_item_start(&self, position: usize, total: usize, _item: &WorkItem) {
        self.positions.lock().unwrap().push((position, total));
    }

    async fn on_step(&self, step: Step) {
        self.steps.lock().unwrap().push(step);
    }

    async fn on_outcome(&self, _outcome: &ItemOutcome) {}

    async fn on_board_linked(&self, board: &Board) {
        self.linked.lock().unwrap().push(board.title.clone());
    }

    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}
