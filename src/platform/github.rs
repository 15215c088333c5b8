//! GitHub issue tracker implementation

use crate::error::{Error, Result};
use crate::platform::IssueTracker;
use crate::types::{
    Board, CandidateIssue, CreatedIssue, ExistingIssue, RepositoryInfo, TargetRepository,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use octocrab::Octocrab;
use reqwest::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Open issues fetched per duplicate check (GitHub's maximum page size)
pub const OPEN_ISSUES_PAGE_SIZE: u8 = 100;

/// GraphQL request timeout in seconds
const GRAPHQL_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("issue-seeder/", env!("CARGO_PKG_VERSION"));

const FIND_BOARD_QUERY: &str = "query($login: String!, $number: Int!) {
  organization(login: $login) {
    projectV2(number: $number) { id title }
  }
}";

const ADD_TO_BOARD_MUTATION: &str = "mutation($project: ID!, $content: ID!) {
  addProjectV2ItemById(input: { projectId: $project, contentId: $content }) {
    item { id }
  }
}";

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> GraphQlResponse<T> {
    fn error_message(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Deserialize)]
struct BoardQueryData {
    organization: Option<OrganizationNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationNode {
    project_v2: Option<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    id: String,
    title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItemData {
    add_project_v2_item_by_id: Option<AddItemPayload>,
}

#[derive(Deserialize)]
struct AddItemPayload {
    item: Option<IgnoredAny>,
}

/// GitHub service: REST through octocrab, project boards through GraphQL
pub struct GitHubService {
    client: Octocrab,
    http: Client,
    token: String,
    graphql_url: String,
}

impl GitHubService {
    /// Create a new GitHub service against a REST API base URL
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_url)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(GRAPHQL_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            http,
            token: token.to_string(),
            graphql_url: graphql_url(api_url),
        })
    }

    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<GraphQlResponse<T>> {
        let response = self
            .http
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}

/// GraphQL endpoint for a REST API base
///
/// `https://api.github.com` serves `/graphql`; Enterprise bases ending in
/// `/api/v3` serve `/api/graphql`.
fn graphql_url(api_url: &str) -> String {
    let base = api_url.trim_end_matches('/');
    base.strip_suffix("/v3").map_or_else(
        || format!("{base}/graphql"),
        |api| format!("{api}/graphql"),
    )
}

#[async_trait]
impl IssueTracker for GitHubService {
    async fn get_repository(&self, repo: &TargetRepository) -> Result<Option<RepositoryInfo>> {
        tracing::debug!(%repo, "fetching repository metadata");

        match self.client.repos(&repo.owner, &repo.name).get().await {
            Ok(found) => Ok(Some(RepositoryInfo {
                archived: found.archived.unwrap_or(false),
                has_issues: found.has_issues.unwrap_or(false),
            })),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_open_issues(&self, repo: &TargetRepository) -> Result<Vec<ExistingIssue>> {
        tracing::debug!(%repo, "listing open issues");

        let page = self
            .client
            .issues(&repo.owner, &repo.name)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(OPEN_ISSUES_PAGE_SIZE)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|issue| ExistingIssue {
                number: issue.number,
                title: issue.title,
                html_url: issue.html_url.to_string(),
            })
            .collect())
    }

    async fn create_issue(
        &self,
        repo: &TargetRepository,
        issue: &CandidateIssue,
    ) -> Result<CreatedIssue> {
        tracing::debug!(%repo, title = %issue.title, "creating issue");

        let handler = self.client.issues(&repo.owner, &repo.name);
        let mut builder = handler.create(&issue.title).body(&issue.body);
        if !issue.labels.is_empty() {
            builder = builder.labels(issue.labels.clone());
        }
        let created = builder.send().await?;

        Ok(CreatedIssue {
            number: created.number,
            html_url: created.html_url.to_string(),
            node_id: created.node_id,
        })
    }

    async fn fetch_readme(&self, repo: &TargetRepository) -> Result<String> {
        tracing::debug!(%repo, "fetching README");

        let handler = self.client.repos(&repo.owner, &repo.name);
        let readme = handler.get_readme().send().await?;

        let encoded = readme
            .content
            .ok_or_else(|| Error::Platform(format!("README of {repo} has no content")))?;
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64
            .decode(compact)
            .map_err(|e| Error::Parse(format!("README of {repo} is not valid base64: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::Parse(format!("README of {repo} is not UTF-8: {e}")))
    }

    async fn find_board(&self, org: &str, number: u64) -> Result<Option<Board>> {
        tracing::debug!(org, number, "resolving project board");

        let response: GraphQlResponse<BoardQueryData> = self
            .graphql(FIND_BOARD_QUERY, json!({ "login": org, "number": number }))
            .await?;

        let project = response
            .data
            .as_ref()
            .and_then(|d| d.organization.as_ref())
            .and_then(|o| o.project_v2.as_ref());

        match (project, response.error_message()) {
            (Some(project), _) => Ok(Some(Board {
                id: project.id.clone(),
                title: project.title.clone(),
                number,
            })),
            (None, Some(message)) => Err(Error::Platform(message)),
            (None, None) => Ok(None),
        }
    }

    async fn add_to_board(&self, board: &Board, issue: &CreatedIssue) -> Result<()> {
        tracing::debug!(board = %board.title, issue = %issue.html_url, "adding issue to board");

        let response: GraphQlResponse<AddItemData> = self
            .graphql(
                ADD_TO_BOARD_MUTATION,
                json!({ "project": board.id, "content": issue.node_id }),
            )
            .await?;

        let added = response
            .data
            .as_ref()
            .and_then(|d| d.add_project_v2_item_by_id.as_ref())
            .and_then(|p| p.item.as_ref())
            .is_some();

        if added {
            Ok(())
        } else {
            Err(Error::Platform(response.error_message().unwrap_or_else(|| {
                "board did not return the added item".to_string()
            })))
        }
    }
}
