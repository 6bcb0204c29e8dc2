//! Page controller: the explicit state record behind the inbox page.
//!
//! State only changes through [`InboxController::begin_submit`] /
//! [`InboxController::finish_submit`] (or [`InboxController::submit`], which
//! drives both), [`InboxController::select`] and
//! [`InboxController::find_code`].

use async_trait::async_trait;
use serde_json::Value;

use crate::{extract_code, InboxListing, MailboxQuery, Message, MessageId};

/// Page requested by a search from the page.
pub const SEARCH_PAGE: u32 = 1;

/// Page size requested by a search from the page.
pub const SEARCH_LIMIT: u32 = 20;

/// Shown when the form is submitted without an address.
pub const MSG_ENTER_EMAIL: &str = "Bitte eine E-Mail-Adresse eingeben.";
/// Shown when a failed response carries no `error` text.
pub const MSG_LOAD_FAILED: &str = "Fehler beim Laden.";
/// Shown when the mailbox is empty.
pub const MSG_NO_MESSAGES: &str = "Keine E-Mails gefunden.";
/// Shown when the selected message contains no code.
pub const MSG_NO_CODE: &str = "Kein Code (4–8 Ziffern) gefunden.";

/// A non-success answer from the listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    /// HTTP status code of the answer.
    pub status: u16,
    /// JSON error body, usually `{"error": ...}`.
    pub body: Value,
}

impl FetchFailure {
    /// The user-facing text for this failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(MSG_LOAD_FAILED)
    }
}

/// Where the controller gets mailbox listings from.
#[async_trait]
pub trait InboxSource: Send + Sync {
    /// Fetch one page of the mailbox described by `query`.
    ///
    /// # Errors
    /// Returns the endpoint's status and error body when it does not answer 200.
    async fn fetch(&self, query: &MailboxQuery) -> Result<Value, FetchFailure>;
}

/// Where the last search left the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// A search is in flight; further submissions are refused.
    Loading,
    /// The search returned at least one message.
    Loaded(Vec<Message>),
    /// The search succeeded but the mailbox is empty.
    Empty,
    /// The search failed, with a user-facing message.
    Failed(String),
}

/// Outcome of the last code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLookup {
    Found(String),
    NotFound,
}

impl CodeLookup {
    /// Text shown in the code result slot.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Found(code) => code,
            Self::NotFound => MSG_NO_CODE,
        }
    }
}

/// State of one inbox page session.
#[derive(Debug, Clone, Default)]
pub struct InboxController {
    email: String,
    phase: Phase,
    selected: Option<MessageId>,
    code: Option<CodeLookup>,
}

impl InboxController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the last submission, as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Messages of the current listing; empty unless [`Phase::Loaded`].
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        match &self.phase {
            Phase::Loaded(messages) => messages.as_slice(),
            _ => &[],
        }
    }

    /// Banner text for failed or empty searches.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(msg) => Some(msg),
            Phase::Empty => Some(MSG_NO_MESSAGES),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Message> {
        let id = self.selected.as_ref()?;
        self.messages().iter().find(|m| &m.id == id)
    }

    #[must_use]
    pub fn code(&self) -> Option<&CodeLookup> {
        self.code.as_ref()
    }

    /// Start a search for `email`.
    ///
    /// Clears the selection and any code result. Returns the query to fetch,
    /// or `None` when a search is already running or the address was
    /// rejected locally (the phase then holds the reason).
    pub fn begin_submit(&mut self, email: &str) -> Option<MailboxQuery> {
        if self.is_loading() {
            return None;
        }
        self.email = email.to_owned();
        self.selected = None;
        self.code = None;

        let email = email.trim();
        if email.is_empty() {
            self.phase = Phase::Failed(MSG_ENTER_EMAIL.to_owned());
            return None;
        }
        match MailboxQuery::new(email, SEARCH_PAGE, SEARCH_LIMIT) {
            Ok(query) => {
                self.phase = Phase::Loading;
                Some(query)
            }
            Err(e) => {
                self.phase = Phase::Failed(e.to_string());
                None
            }
        }
    }

    /// Apply the outcome of the fetch started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<Value, FetchFailure>) {
        self.phase = match outcome {
            Err(failure) => Phase::Failed(failure.message().to_owned()),
            Ok(body) => match InboxListing::from_json(body) {
                Ok(listing) if listing.emails.is_empty() => Phase::Empty,
                Ok(listing) => Phase::Loaded(listing.emails),
                Err(_) => Phase::Failed(MSG_LOAD_FAILED.to_owned()),
            },
        };
    }

    /// Run a whole search against `source`.
    pub async fn submit<S: InboxSource + ?Sized>(&mut self, source: &S, email: &str) {
        if let Some(query) = self.begin_submit(email) {
            let outcome = source.fetch(&query).await;
            self.finish_submit(outcome);
        }
    }

    /// Show `id` in the detail pane and clear the previous code result.
    ///
    /// Returns `false`, leaving state untouched, if `id` is not listed.
    pub fn select(&mut self, id: &MessageId) -> bool {
        if !self.messages().iter().any(|m| &m.id == id) {
            return false;
        }
        self.selected = Some(id.clone());
        self.code = None;
        true
    }

    /// [`Self::select`] by the ID's rendered form, as echoed back in a link.
    pub fn select_raw(&mut self, raw: &str) -> bool {
        let id = self.messages().iter().find(|m| m.id.matches(raw)).map(|m| m.id.clone());
        id.is_some_and(|id| self.select(&id))
    }

    /// Search the selected message for a code. No-op without a selection.
    pub fn find_code(&mut self) -> Option<&CodeLookup> {
        let text = self.selected()?.searchable_text();
        self.code = Some(match extract_code(&text) {
            Some(code) => CodeLookup::Found(code.to_owned()),
            None => CodeLookup::NotFound,
        });
        self.code.as_ref()
    }
}
