//! In-memory forge and log capture shared by the unit tests
use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
    sync::{Mutex, Once},
};

use log::{LevelFilter, Log, Metadata, Record};

use reqwest::StatusCode;
use url::Url;

use crate::{
    config::Settings,
    errors::GiteaMigrateError,
    gitea::{
        org::{OrganizationRequest, OrganizationResponse},
        repo::{MigrateRequest, RepoResponse},
    },
    platform::{Forge, ForgeFuture},
};

/// One call received by the fake forge
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    /// Repository lookup of `owner/name`
    GetRepo(String, String),

    /// Organization lookup
    GetOrg(String),

    /// Organization creation
    CreateOrg(OrganizationRequest),

    /// Migration request
    Migrate(MigrateRequest),
}

/// Content of the fake forge
#[derive(Default)]
struct State {
    /// Organization IDs by name
    orgs: HashMap<String, i64>,

    /// Known `(owner, name)` repositories
    repos: HashSet<(String, String)>,

    /// Calls received so far
    calls: Vec<Call>,

    /// ID given to the next created organization
    next_id: i64,
}

/// Forge keeping organizations and repositories in memory
#[derive(Default)]
pub(crate) struct FakeForge {
    /// Forge content
    state: Mutex<State>,

    /// Answer every repository lookup with an error
    fail_repo_lookup: bool,
}

impl FakeForge {
    /// Empty forge, created organizations get IDs from 42
    pub(crate) fn new() -> Self {
        let forge = Self::default();
        forge.state.lock().unwrap().next_id = 42;
        forge
    }

    /// Add an existing organization
    pub(crate) fn with_org(self, name: &str, id: i64) -> Self {
        self.state.lock().unwrap().orgs.insert(name.to_string(), id);
        self
    }

    /// Add an existing repository
    pub(crate) fn with_repo(self, owner: &str, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .repos
            .insert((owner.to_string(), name.to_string()));
        self
    }

    /// Every repository lookup answers `500 Internal Server Error`
    pub(crate) fn failing_repo_lookup(mut self) -> Self {
        self.fail_repo_lookup = true;
        self
    }

    /// Calls received so far, in order
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Whether the forge knows `owner/name`
    pub(crate) fn has_repo(&self, owner: &str, name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .repos
            .contains(&(owner.to_string(), name.to_string()))
    }

    /// Organization payload
    fn org_response(name: &str, id: i64) -> OrganizationResponse {
        OrganizationResponse {
            id,
            username: name.to_string(),
            ..Default::default()
        }
    }
}

impl Forge for FakeForge {
    fn get_repo(&self, owner: &str, name: &str) -> ForgeFuture<'_, Option<RepoResponse>> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::GetRepo(owner.to_string(), name.to_string()));
        let result = if self.fail_repo_lookup {
            Err(GiteaMigrateError::from_status(
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        } else if state.repos.contains(&(owner.to_string(), name.to_string())) {
            Ok(Some(RepoResponse {
                id: 1,
                name: name.to_string(),
                full_name: format!("{owner}/{name}"),
                ..Default::default()
            }))
        } else {
            Ok(None)
        };
        Box::pin(async move { result })
    }

    fn get_org(&self, name: &str) -> ForgeFuture<'_, Option<OrganizationResponse>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetOrg(name.to_string()));
        let org = state
            .orgs
            .get(name)
            .map(|id| Self::org_response(name, *id));
        Box::pin(async move { Ok(org) })
    }

    fn create_org(&self, request: OrganizationRequest) -> ForgeFuture<'_, OrganizationResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateOrg(request.clone()));
        let id = state.next_id;
        state.next_id += 1;
        state.orgs.insert(request.username.clone(), id);
        let org = Self::org_response(&request.username, id);
        Box::pin(async move { Ok(org) })
    }

    fn migrate_repo(&self, request: MigrateRequest) -> ForgeFuture<'_, RepoResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Migrate(request.clone()));
        let owner = state
            .orgs
            .iter()
            .find(|(_, id)| **id == request.uid)
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        state.repos.insert((owner, request.repo_name.clone()));
        let repo = RepoResponse {
            id: 100,
            name: request.repo_name,
            ..Default::default()
        };
        Box::pin(async move { Ok(repo) })
    }

    fn get_remote_url(&self) -> &str {
        "memory"
    }
}

/// Settings pointing at `base_url`
pub(crate) fn settings_for(base_url: &str, source_path: PathBuf) -> Settings {
    Settings {
        source_path,
        base_url: Url::parse(base_url).unwrap(),
        username: "admin".into(),
        password: "secret".into(),
        debug: true,
        dry_run: false,
    }
}

/// Logger keeping every message in memory
struct CapturingLogger {
    /// Captured messages
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Process-wide capturing logger
static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

/// Install the capturing logger at info level, once per test binary
pub(crate) fn capture_logs() {
    /// Guard of the logger installation
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Info);
    });
}

/// Every message captured so far, by all tests
pub(crate) fn captured_logs() -> Vec<String> {
    LOGGER.lines.lock().unwrap().clone()
}
