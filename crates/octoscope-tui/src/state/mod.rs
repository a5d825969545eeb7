//! Application state and the search controller.
//!
//! Input handlers never talk to the network. They turn user actions into
//! [`Message`]s; [`AppState::dispatch`] applies them and returns an [`Effect`]
//! when something has to happen off the UI thread.

use crate::ui::theme::ThemeContext;
use octoscope_core::{PreferenceStore, ThemePreference};
use octoscope_github::{LookupError, Profile, ProfileCard};
use unicode_width::UnicodeWidthStr;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main search mode
    Search,
    /// Help overlay
    Help,
}

/// User intents and asynchronous results consumed by the controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search form was submitted with this raw input.
    SubmitQuery(String),
    /// A lookup started by `Effect::Lookup { token, .. }` completed.
    LookupFinished {
        token: u64,
        outcome: Result<Profile, LookupError>,
    },
    /// The theme toggle was activated.
    ToggleTheme,
}

/// Work the controller asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Lookup { token: u64, username: String },
}

/// What the profile region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    /// Nothing searched yet.
    Empty,
    Profile(Box<ProfileCard>),
    Error(LookupError),
}

/// The profile region and its indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRegion {
    pub view: ProfileView,
    /// A lookup for the latest submission is in flight.
    pub loading: bool,
    /// The "no results" indicator next to the search input.
    pub no_results: bool,
}

impl ProfileRegion {
    pub fn new() -> Self {
        Self {
            view: ProfileView::Empty,
            loading: false,
            no_results: false,
        }
    }

    fn show_error(&mut self, err: LookupError) {
        self.view = ProfileView::Error(err);
        self.no_results = true;
    }

    fn show_profile(&mut self, profile: &Profile) {
        self.view = ProfileView::Profile(Box::new(ProfileCard::from(profile)));
        self.no_results = false;
    }
}

impl Default for ProfileRegion {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Search input state
    pub search: SearchState,
    /// Profile region
    pub profile: ProfileRegion,
    /// Transient status-bar message
    pub status: Option<String>,
    /// Whether to quit
    pub should_quit: bool,
    theme: ThemePreference,
    theme_ctx: ThemeContext,
    prefs: Box<dyn PreferenceStore>,
    next_token: u64,
    latest_token: Option<u64>,
}

impl AppState {
    /// Create a new application state around an initialized theme.
    pub fn new(theme: ThemePreference, prefs: Box<dyn PreferenceStore>) -> Self {
        let theme_ctx = ThemeContext::new(theme.current());
        Self {
            mode: AppMode::Search,
            search: SearchState::new(),
            profile: ProfileRegion::new(),
            status: None,
            should_quit: false,
            theme,
            theme_ctx,
            prefs,
            next_token: 1,
            latest_token: None,
        }
    }

    /// Apply a message. Returns the work to start, if any.
    pub fn dispatch(&mut self, msg: Message) -> Option<Effect> {
        match msg {
            Message::SubmitQuery(raw) => self.submit(&raw),
            Message::LookupFinished { token, outcome } => {
                self.finish(token, outcome);
                None
            }
            Message::ToggleTheme => {
                self.toggle_theme();
                None
            }
        }
    }

    fn submit(&mut self, raw: &str) -> Option<Effect> {
        let username = raw.trim();
        if username.is_empty() {
            return None;
        }

        let token = self.next_token;
        self.next_token += 1;
        self.latest_token = Some(token);
        self.profile.loading = true;
        self.status = None;

        tracing::debug!(token, user = username, "Search submitted");
        Some(Effect::Lookup {
            token,
            username: username.to_string(),
        })
    }

    fn finish(&mut self, token: u64, outcome: Result<Profile, LookupError>) {
        if self.latest_token != Some(token) {
            tracing::debug!(token, latest = ?self.latest_token, "Discarding stale lookup result");
            return;
        }

        self.profile.loading = false;
        match outcome {
            Ok(profile) => self.profile.show_profile(&profile),
            Err(err) => self.profile.show_error(err),
        }
    }

    fn toggle_theme(&mut self) {
        let result = self.theme.toggle(self.prefs.as_mut());
        self.theme_ctx = ThemeContext::new(self.theme.current());

        if let Err(e) = result {
            tracing::warn!("Theme preference not saved: {}", e);
            self.status = Some(format!("Theme not saved: {e}"));
        }
    }

    /// The theme every render function draws with.
    pub fn theme(&self) -> &ThemeContext {
        &self.theme_ctx
    }

    /// Whether a lookup for the latest submission is still pending.
    pub fn is_loading(&self) -> bool {
        self.profile.loading
    }

    /// Page URL of the profile on screen, if any.
    pub fn current_profile_url(&self) -> Option<&str> {
        match &self.profile.view {
            ProfileView::Profile(card) => Some(&card.page_url),
            _ => None,
        }
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Search,
            AppMode::Search => AppMode::Help,
        };
    }
}

/// Search input state. The cursor is a char index into `query`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current query
    pub query: String,
    /// Cursor position in query input
    pub cursor_position: usize,
}

impl SearchState {
    /// Create a new search state
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Clear query
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor_position = 0;
    }

    /// Add character at cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.query.insert(at, c);
        self.cursor_position += 1;
    }

    /// Remove character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let at = self.byte_index(self.cursor_position - 1);
            self.query.remove(at);
            self.cursor_position -= 1;
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_len();
    }

    /// Terminal columns between the start of the query and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.query[..self.byte_index(self.cursor_position)].width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octoscope_core::{MemoryPreferenceStore, SystemHint, ThemeChoice};

    fn octocat() -> Profile {
        Profile {
            login: "octocat".to_string(),
            avatar_url: "u".to_string(),
            name: None,
            created_at: Some("2011-01-25T18:44:36Z".to_string()),
            bio: None,
            public_repos: 2,
            followers: 3,
            following: 1,
            location: None,
            twitter_username: None,
            blog: None,
            company: None,
            html_url: None,
        }
    }

    fn app_with(store: MemoryPreferenceStore) -> AppState {
        let theme = ThemePreference::initialize(&store, SystemHint::Unknown);
        AppState::new(theme, Box::new(store))
    }

    fn app() -> AppState {
        app_with(MemoryPreferenceStore::new())
    }

    fn lookup_token(effect: Option<Effect>) -> u64 {
        match effect {
            Some(Effect::Lookup { token, .. }) => token,
            None => panic!("expected a lookup effect"),
        }
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let mut app = app();
        let before = app.profile.clone();

        assert_eq!(app.dispatch(Message::SubmitQuery("   \t ".to_string())), None);
        assert_eq!(app.dispatch(Message::SubmitQuery(String::new())), None);
        assert_eq!(app.profile, before);
        assert!(!app.is_loading());
    }

    #[test]
    fn submit_trims_and_marks_loading() {
        let mut app = app();
        let effect = app.dispatch(Message::SubmitQuery("  octocat ".to_string()));

        assert_eq!(
            effect,
            Some(Effect::Lookup {
                token: 1,
                username: "octocat".to_string()
            })
        );
        assert!(app.is_loading());
        assert_eq!(app.profile.view, ProfileView::Empty);
    }

    #[test]
    fn profile_result_renders_card_and_hides_indicator() {
        let mut app = app();
        let token = lookup_token(app.dispatch(Message::SubmitQuery("nobody".to_string())));
        app.dispatch(Message::LookupFinished {
            token,
            outcome: Err(LookupError::NotFound),
        });
        assert!(app.profile.no_results);

        let token = lookup_token(app.dispatch(Message::SubmitQuery("octocat".to_string())));
        app.dispatch(Message::LookupFinished {
            token,
            outcome: Ok(octocat()),
        });

        assert!(!app.is_loading());
        assert!(!app.profile.no_results);
        match &app.profile.view {
            ProfileView::Profile(card) => {
                assert_eq!(card.display_name, "octocat");
                assert_eq!(card.joined, "Joined 25 Jan 2011");
            }
            other => panic!("expected profile, got {other:?}"),
        }
        assert_eq!(
            app.current_profile_url(),
            Some("https://github.com/octocat")
        );
    }

    #[test]
    fn error_result_renders_error_and_shows_indicator() {
        let mut app = app();
        let token = lookup_token(app.dispatch(Message::SubmitQuery("x".to_string())));
        app.dispatch(Message::LookupFinished {
            token,
            outcome: Err(LookupError::RateLimited),
        });

        assert!(!app.is_loading());
        assert!(app.profile.no_results);
        assert_eq!(app.profile.view, ProfileView::Error(LookupError::RateLimited));
        assert_eq!(app.current_profile_url(), None);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut app = app();
        let first = lookup_token(app.dispatch(Message::SubmitQuery("first".to_string())));
        let second = lookup_token(app.dispatch(Message::SubmitQuery("second".to_string())));
        assert!(second > first);

        // The older request resolves last-but-one; it must not touch the region.
        app.dispatch(Message::LookupFinished {
            token: first,
            outcome: Err(LookupError::ServerError),
        });
        assert!(app.is_loading());
        assert_eq!(app.profile.view, ProfileView::Empty);

        app.dispatch(Message::LookupFinished {
            token: second,
            outcome: Ok(octocat()),
        });
        assert!(!app.is_loading());
        assert!(matches!(app.profile.view, ProfileView::Profile(_)));

        // And a very late one after that is ignored too.
        app.dispatch(Message::LookupFinished {
            token: first,
            outcome: Err(LookupError::ConnectionError),
        });
        assert!(matches!(app.profile.view, ProfileView::Profile(_)));
    }

    #[test]
    fn toggle_theme_updates_context() {
        let mut app = app_with(MemoryPreferenceStore::new().with_value("theme", "dark"));
        assert_eq!(app.theme().choice, ThemeChoice::Dark);

        app.dispatch(Message::ToggleTheme);
        assert_eq!(app.theme().choice, ThemeChoice::Light);
        assert_eq!(app.theme().toggle_label(), "DARK");
        assert_eq!(app.status, None);

        app.dispatch(Message::ToggleTheme);
        assert_eq!(app.theme().choice, ThemeChoice::Dark);
    }

    #[test]
    fn toggle_theme_reports_unsaved_preference() {
        let mut app = app_with(MemoryPreferenceStore::new().read_only());
        app.dispatch(Message::ToggleTheme);

        assert_eq!(app.theme().choice, ThemeChoice::Dark);
        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Theme not saved")));
    }

    #[test]
    fn search_input_edits_by_char() {
        let mut search = SearchState::new();
        for c in "añb".chars() {
            search.insert_char(c);
        }
        search.move_cursor_left();
        search.delete_char();
        assert_eq!(search.query, "ab");
        assert_eq!(search.cursor_position, 1);
        assert_eq!(search.cursor_column(), 1);

        search.move_cursor_end();
        search.insert_char('c');
        assert_eq!(search.query, "abc");

        search.move_cursor_home();
        search.move_cursor_left();
        assert_eq!(search.cursor_position, 0);

        search.clear_query();
        assert!(search.query.is_empty());
    }
}
