//! The navigation flow
//!
//! [`Flow`] is the single context object a driver talks to. It owns the
//! session, the language setting, the current screen and carried payload,
//! and the one pending operation allowed at a time.
//!
//! Suspending commands come in two shapes. `login` / `submit_image` run to
//! completion in place. `begin_*` / `complete_*` split the same work so the
//! suspending part can run elsewhere; the [`PendingTicket`] returned by
//! `begin_*` is checked on completion, and a ticket retired in the meantime
//! (screen change, `try_again`, new image, logout, cancel) has its outcome
//! discarded.

use crate::dashboard::{DashboardTab, DashboardView, QuickAction};
use crate::{
    Completion, FlowError, NavigationState, Notice, PendingKind, PendingTicket, Result, Screen,
    Transition,
};
use pashu_auth::{
    AuthGuard, Credential, CredentialVerifier, Guard, MockVerifier, SessionService, SessionState,
    UserSession,
};
use pashu_config::AppConfig;
use pashu_i18n::{I18n, Language};
use pashu_log::{Level, debug, event, info, warn};
use pashu_recognition::{
    BreedClassifier, ImageInput, MockClassifier, RecognitionCatalog, RecognitionResult,
    RecognitionStage, Selection,
};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

const TARGET: &str = "pashu::flow";

/// State local to the recognition screen. Reset on every screen entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionScreen {
    selected: Option<ImageInput>,
    result: Option<RecognitionResult>,
}

impl RecognitionScreen {
    pub fn selected_image(&self) -> Option<&ImageInput> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&RecognitionResult> {
        self.result.as_ref()
    }
}

/// Everything a renderer needs to draw the current screen.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub session: &'a SessionState,
    pub language: Language,
    pub payload: Option<&'a RecognitionResult>,
    pub recognition: &'a RecognitionScreen,
    pub tab: DashboardTab,
    pub pending: Option<PendingKind>,
}

/// Builder for [`Flow`].
///
/// Anything not supplied falls back to the mocks, timed from [`AppConfig`].
#[derive(Default)]
pub struct FlowBuilder {
    config: AppConfig,
    i18n: Option<I18n>,
    verifier: Option<Arc<dyn CredentialVerifier>>,
    classifier: Option<Arc<dyn BreedClassifier>>,
    catalog: Option<RecognitionCatalog>,
    selection: Option<Selection>,
    guard: Option<Arc<dyn Guard>>,
}

impl FlowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a config, loading locale overrides from `locales_dir`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut i18n = I18n::builtin();
        if let Some(dir) = &config.locales_dir {
            i18n = i18n.load_from_dir(dir)?;
        }
        Ok(Self::new().with_config(config.clone()).with_i18n(i18n))
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_i18n(mut self, i18n: I18n) -> Self {
        self.i18n = Some(i18n);
        self
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn BreedClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Catalog for the mock classifier. Ignored with a custom classifier.
    pub fn with_catalog(mut self, catalog: RecognitionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Selection for the mock classifier; overrides the configured seed.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_guard(mut self, guard: Arc<dyn Guard>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn build(self) -> Flow {
        let config = self.config;

        let verifier = self.verifier.unwrap_or_else(|| {
            Arc::new(MockVerifier::new(Duration::from_millis(config.login_latency_ms)))
        });

        let classifier = self.classifier.unwrap_or_else(|| {
            let selection = self.selection.unwrap_or(match config.seed {
                Some(seed) => Selection::Seeded(seed),
                None => Selection::Random,
            });
            Arc::new(
                MockClassifier::new(self.catalog.unwrap_or_default())
                    .with_delay(Duration::from_millis(config.recognition_latency_ms))
                    .with_selection(selection),
            )
        });

        Flow {
            i18n: self.i18n.unwrap_or_else(I18n::builtin),
            language: config.default_language,
            session: SessionService::new(verifier),
            stage: RecognitionStage::new(classifier),
            guard: self.guard.unwrap_or_else(|| Arc::new(AuthGuard)),
            nav: NavigationState::default(),
            recognition: RecognitionScreen::default(),
            tab: DashboardTab::default(),
            pending: None,
            epoch: 0,
            next_ticket: 0,
            notices: VecDeque::new(),
        }
    }
}

/// Session-gated screen flow.
pub struct Flow {
    i18n: I18n,
    language: Language,
    session: SessionService,
    stage: RecognitionStage,
    guard: Arc<dyn Guard>,
    nav: NavigationState,
    recognition: RecognitionScreen,
    tab: DashboardTab,
    pending: Option<PendingTicket>,
    epoch: u64,
    next_ticket: u64,
    notices: VecDeque<Notice>,
}

impl std::fmt::Debug for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flow")
            .field("language", &self.language)
            .field("session", self.session.state())
            .field("nav", &self.nav)
            .field("tab", &self.tab)
            .field("pending", &self.pending)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Default for Flow {
    fn default() -> Self {
        FlowBuilder::default().build()
    }
}

impl Flow {
    pub fn builder() -> FlowBuilder {
        FlowBuilder::new()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.nav.screen
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn payload(&self) -> Option<&RecognitionResult> {
        self.nav.payload.as_ref()
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn recognition(&self) -> &RecognitionScreen {
        &self.recognition
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn pending(&self) -> Option<PendingKind> {
        self.pending.map(|ticket| ticket.kind)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Resolve a key under the current language.
    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key, self.language)
    }

    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.t_args(key, self.language, args)
    }

    pub fn view(&self) -> ViewContext<'_> {
        ViewContext {
            screen: self.nav.screen,
            session: self.session.state(),
            language: self.language,
            payload: self.nav.payload.as_ref(),
            recognition: &self.recognition,
            tab: self.tab,
            pending: self.pending(),
        }
    }

    /// Dashboard view model, when the dashboard is showing.
    pub fn dashboard(&self) -> Option<DashboardView> {
        (self.nav.screen == Screen::Dashboard).then(|| {
            DashboardView::build(&self.i18n, self.language, self.nav.payload.as_ref(), self.tab)
        })
    }

    /// Take every notice raised since the last drain, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    // ------------------------------------------------------------------
    // Landing and language
    // ------------------------------------------------------------------

    pub fn get_started(&mut self) -> Result<Transition> {
        self.require(Screen::Landing, "get_started")?;
        Ok(self.enter(Screen::Login, None))
    }

    pub fn choose_language(&mut self) -> Result<Transition> {
        self.require(Screen::Landing, "choose_language")?;
        Ok(self.enter(Screen::LanguageSelection, None))
    }

    /// Change language by code. Touches nothing but the language.
    pub fn select_language(&mut self, code: &str) -> Result<Language> {
        let language = Language::parse(code)?;
        self.set_language(language);
        Ok(language)
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            info!(target: TARGET, "Language {} -> {}", self.language, language);
        }
        self.language = language;
    }

    pub fn continue_to_login(&mut self) -> Result<Transition> {
        self.require(Screen::LanguageSelection, "continue_to_login")?;
        Ok(self.enter(Screen::Login, None))
    }

    // ------------------------------------------------------------------
    // Login
    // ------------------------------------------------------------------

    /// Log in and, on success, move on to recognition.
    pub async fn login(&mut self, credential: Credential) -> Result<Completion> {
        let ticket = self.begin_login(&credential)?;
        let verifier = self.session.verifier();
        let outcome = verifier.verify(&credential).await;
        Ok(self.complete_login(ticket, outcome))
    }

    /// Validate locally and reserve the pending slot.
    ///
    /// A malformed credential is refused here, before any suspension.
    pub fn begin_login(&mut self, credential: &Credential) -> Result<PendingTicket> {
        self.require(Screen::Login, "login")?;
        self.ensure_idle()?;

        if let Err(e) = credential.validate() {
            debug!(target: TARGET, "Rejected {:?}: {}", credential, e);
            self.notify_error(e.message_key.as_deref().unwrap_or("loginError"));
            return Err(e.into());
        }

        Ok(self.issue(PendingKind::Login))
    }

    pub fn complete_login(
        &mut self,
        ticket: PendingTicket,
        outcome: pashu_auth::Result<UserSession>,
    ) -> Completion {
        if !self.settle(ticket) {
            return Completion::Discarded;
        }

        match outcome {
            Ok(user) => {
                self.session.establish(user);
                self.notices.push_back(Notice::success("loginSuccess"));
                self.enter(Screen::Recognition, None);
                Completion::Applied
            }
            Err(e) => {
                warn!(target: TARGET, "Login failed: {}", e);
                self.notify_error(e.message_key());
                Completion::Rejected
            }
        }
    }

    /// Clear the session and go back to the landing screen.
    pub fn logout(&mut self) -> Transition {
        self.session.logout();
        self.enter(Screen::Landing, None)
    }

    // ------------------------------------------------------------------
    // Recognition
    // ------------------------------------------------------------------

    /// Pick an image; any previous result and in-flight analysis are dropped.
    pub fn select_image(&mut self, image: ImageInput) -> Result<()> {
        self.require(Screen::Recognition, "select_image")?;
        self.retire();
        debug!(target: TARGET, "Selected {:?}", image);
        self.recognition.selected = Some(image);
        self.recognition.result = None;
        Ok(())
    }

    pub async fn submit_image(&mut self) -> Result<Completion> {
        let (ticket, image) = self.begin_submit()?;
        let stage = self.stage.clone();
        let outcome = stage.submit(Some(&image)).await;
        Ok(self.complete_submit(ticket, outcome))
    }

    /// Check there is an image and reserve the pending slot.
    ///
    /// Without an image this fails at once and changes nothing.
    pub fn begin_submit(&mut self) -> Result<(PendingTicket, ImageInput)> {
        self.require(Screen::Recognition, "submit_image")?;
        self.ensure_idle()?;

        let image = match RecognitionStage::check_input(self.recognition.selected.as_ref()) {
            Ok(image) => image.clone(),
            Err(e) => {
                self.notify_error(e.message_key());
                return Err(FlowError::NoImage);
            }
        };

        Ok((self.issue(PendingKind::Recognition), image))
    }

    pub fn complete_submit(
        &mut self,
        ticket: PendingTicket,
        outcome: pashu_recognition::Result<RecognitionResult>,
    ) -> Completion {
        if !self.settle(ticket) {
            return Completion::Discarded;
        }

        match outcome {
            Ok(result) => {
                event!(Level::Info, target: TARGET, "recognition complete",
                    breed = result.breed,
                    confidence = result.confidence);
                self.recognition.result = Some(result);
                self.notices.push_back(Notice::success("analysisComplete"));
                Completion::Applied
            }
            Err(e) => {
                warn!(target: TARGET, "Recognition failed: {}", e);
                self.notify_error(e.message_key());
                Completion::Rejected
            }
        }
    }

    /// Carry the current result to the dashboard.
    pub fn view_details(&mut self) -> Result<Transition> {
        self.require(Screen::Recognition, "view_details")?;
        let result = self
            .recognition
            .result
            .clone()
            .ok_or(FlowError::InvalidTransition {
                command: "view_details",
                screen: Screen::Recognition,
            })?;
        Ok(self.enter(Screen::Dashboard, Some(result)))
    }

    /// Clear the selected image and result.
    pub fn try_again(&mut self) -> Result<()> {
        self.require(Screen::Recognition, "try_again")?;
        self.retire();
        self.recognition = RecognitionScreen::default();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub fn scan_new_breed(&mut self) -> Result<Transition> {
        self.require(Screen::Dashboard, "scan_new_breed")?;
        Ok(self.enter(Screen::Recognition, None))
    }

    pub fn select_tab(&mut self, tab: DashboardTab) -> Result<()> {
        self.require(Screen::Dashboard, "select_tab")?;
        self.tab = tab;
        Ok(())
    }

    /// Scheme and vet shortcuts are only offered next to an identified
    /// breed; without a payload they are `InvalidTransition`.
    pub fn quick_action(&mut self, action: QuickAction) -> Result<Transition> {
        let tab = match action {
            QuickAction::ScanNewBreed => return self.scan_new_breed(),
            QuickAction::ViewSchemes => DashboardTab::Schemes,
            QuickAction::FindVet => DashboardTab::Vet,
        };
        self.require(Screen::Dashboard, "quick_action")?;
        if self.nav.payload.is_none() {
            return Err(FlowError::InvalidTransition {
                command: "quick_action",
                screen: Screen::Dashboard,
            });
        }
        self.tab = tab;
        Ok(Transition::Stayed(Screen::Dashboard))
    }

    // ------------------------------------------------------------------
    // Generic navigation
    // ------------------------------------------------------------------

    /// Enter a screen directly, as if by URL. Never carries a payload.
    pub fn open(&mut self, screen: Screen) -> Transition {
        self.enter(screen, None)
    }

    /// Re-run the guard on the current screen without resetting it.
    pub fn refresh(&mut self) -> Transition {
        let screen = self.nav.screen;
        if self.admits(screen) {
            Transition::Stayed(screen)
        } else {
            self.enter(screen, None)
        }
    }

    pub fn navigate_back(&mut self) -> Transition {
        match self.nav.screen.back() {
            Some(previous) => self.enter(previous, None),
            None => Transition::Stayed(self.nav.screen),
        }
    }

    /// Abandon the pending operation, if any. Its outcome will be discarded.
    pub fn cancel_pending(&mut self) -> Option<PendingKind> {
        let kind = self.pending();
        self.retire();
        kind
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn admits(&self, screen: Screen) -> bool {
        !screen.is_protected() || self.guard.can_activate(self.session.state())
    }

    fn enter(&mut self, requested: Screen, payload: Option<RecognitionResult>) -> Transition {
        let from = self.nav.screen;
        self.retire();
        self.recognition = RecognitionScreen::default();
        self.tab = DashboardTab::Home;

        if !self.admits(requested) {
            self.nav = NavigationState::at(Screen::Login);
            info!(target: TARGET, "Guard redirected {} -> {}", requested, Screen::Login);
            return Transition::Redirected {
                requested,
                to: Screen::Login,
            };
        }

        debug!(target: TARGET, "{} -> {} (payload: {})", from, requested, payload.is_some());
        self.nav = NavigationState {
            screen: requested,
            payload,
        };
        Transition::Entered(requested)
    }

    fn require(&self, screen: Screen, command: &'static str) -> Result<()> {
        if self.nav.screen == screen {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                command,
                screen: self.nav.screen,
            })
        }
    }

    fn ensure_idle(&mut self) -> Result<()> {
        match self.pending {
            Some(ticket) => {
                self.notify_error("operationPending");
                Err(FlowError::Busy(ticket.kind))
            }
            None => Ok(()),
        }
    }

    fn issue(&mut self, kind: PendingKind) -> PendingTicket {
        self.next_ticket += 1;
        let ticket = PendingTicket {
            id: self.next_ticket,
            kind,
            epoch: self.epoch,
        };
        debug!(target: TARGET, "Pending {} #{} at epoch {}", kind, ticket.id, ticket.epoch);
        self.pending = Some(ticket);
        ticket
    }

    /// Retire the current ticket and advance the epoch.
    fn retire(&mut self) {
        if let Some(ticket) = self.pending.take() {
            debug!(target: TARGET, "Abandoned pending {} #{}", ticket.kind, ticket.id);
        }
        self.epoch += 1;
    }

    /// Release the pending slot if `ticket` still holds it.
    fn settle(&mut self, ticket: PendingTicket) -> bool {
        if self.pending == Some(ticket) && ticket.epoch == self.epoch {
            self.pending = None;
            true
        } else {
            debug!(target: TARGET, "Discarded stale {} #{}", ticket.kind, ticket.id);
            false
        }
    }

    fn notify_error(&mut self, key: &str) {
        self.notices.push_back(Notice::error(key));
    }
}
