//! Application state and core logic

use crate::api::{HttpClient, RemoteMutationClient};
use crate::config::AdminConfig;
use crate::error::RemoteFailure;
use crate::platform::SUBMIT_MODIFIER;
use crate::screens::system_status::{fetch_snapshot, StatusSnapshot};
use crate::screens::{admin_store, profile, FormScreen, Screen, SystemStatusScreen};
use crate::state::{
    AppState, FormController, PendingCall, SessionContext, StaticSession, Submission, Ticket, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Outcome of a remote call, delivered back to the event loop
#[derive(Debug)]
pub enum RemoteEvent {
    /// A form submit or toggle call finished
    Resolved {
        mount: u64,
        ticket: Ticket,
        result: Result<Value, RemoteFailure>,
    },
    /// The system status snapshot finished loading
    StatusLoaded {
        mount: u64,
        result: Result<StatusSnapshot, RemoteFailure>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Platform API client shared with spawned calls
    client: Arc<dyn RemoteMutationClient>,
    session: Arc<StaticSession>,
    min_password_length: usize,
    /// Username sent by the in-flight profile update, keyed by its ticket
    submitted_username: Option<(Ticket, String)>,
    events_tx: mpsc::UnboundedSender<RemoteEvent>,
    events_rx: mpsc::UnboundedReceiver<RemoteEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured API
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let session = Arc::new(StaticSession::new(
            config.user.clone(),
            config.auth_token.clone(),
        ));
        let client = HttpClient::new(
            config.api_base_url(),
            config.request_timeout(),
            session.clone(),
        )?;
        tracing::info!("Using platform API at {}", client.base_url());

        Ok(Self::with_client(
            Arc::new(client),
            session,
            config.min_password_length(),
        ))
    }

    pub fn with_client(
        client: Arc<dyn RemoteMutationClient>,
        session: Arc<StaticSession>,
        min_password_length: usize,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let initial = View::default();
        let screen = Self::build_screen(initial, &session, min_password_length);

        Self {
            state: AppState::new(initial, screen),
            client,
            session,
            min_password_length,
            submitted_username: None,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn session(&self) -> &StaticSession {
        &self.session
    }

    fn build_screen(view: View, session: &StaticSession, min_password_length: usize) -> Screen {
        match view {
            View::AdminStore => Screen::AdminStore(FormScreen::new(FormController::new(
                admin_store::definition(min_password_length),
            ))),
            View::SystemStatus => Screen::SystemStatus(SystemStatusScreen::new()),
            View::Profile => Screen::Profile(FormScreen::new(FormController::new(
                profile::definition(session.current_user().as_ref()),
            ))),
        }
    }

    /// Replace the current screen with a fresh instance of `view`.
    ///
    /// Results of calls issued by the previous screen are dropped on arrival.
    pub fn mount(&mut self, view: View) {
        self.state.mount += 1;
        self.state.current_view = view;
        self.state.screen = Self::build_screen(view, &self.session, self.min_password_length);
        self.submitted_username = None;
        tracing::debug!("Mounted {:?} (mount {})", view, self.state.mount);

        if view == View::SystemStatus {
            self.load_status();
        }
    }

    fn load_status(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let mount = self.state.mount;
        tokio::spawn(async move {
            let result = fetch_snapshot(client.as_ref()).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(RemoteEvent::StatusLoaded { mount, result });
        });
    }

    fn dispatch(&self, call: PendingCall) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let mount = self.state.mount;
        tokio::spawn(async move {
            let result = client.request(call.method, call.path, call.body).await;
            let _ = tx.send(RemoteEvent::Resolved {
                mount,
                ticket: call.ticket,
                result,
            });
        });
    }

    /// Apply every remote result that has arrived since the last frame
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_remote_event(event);
        }
    }

    /// Housekeeping run once per frame
    pub fn tick(&mut self) {
        self.state.toasts.prune(Instant::now());
    }

    pub fn handle_remote_event(&mut self, event: RemoteEvent) {
        match event {
            RemoteEvent::Resolved {
                mount,
                ticket,
                result,
            } => {
                if mount != self.state.mount {
                    tracing::debug!("Dropping result for unmounted screen (mount {mount})");
                    return;
                }

                let notification = match &mut self.state.screen {
                    Screen::AdminStore(form) => form.controller.complete(ticket, result),
                    Screen::Profile(form) => {
                        let awaiting = form.controller.is_awaiting(ticket);
                        let succeeded = result.is_ok();
                        let notification = form.controller.complete(ticket, result);
                        if awaiting {
                            // Only the value actually sent may reach the session
                            match self.submitted_username.take() {
                                Some((sent, username)) if succeeded && sent == ticket => {
                                    if let Some(mut user) = self.session.current_user() {
                                        user.username = username;
                                        self.session.replace_user(user);
                                    }
                                }
                                _ => {}
                            }
                        }
                        notification
                    }
                    Screen::SystemStatus(status) => status.maintenance.complete(ticket, result),
                };

                if let Some(notification) = notification {
                    notification.deliver(&mut self.state.toasts);
                }
            }
            RemoteEvent::StatusLoaded { mount, result } => {
                if mount != self.state.mount {
                    return;
                }
                if let Screen::SystemStatus(status) = &mut self.state.screen {
                    match result {
                        Ok(snapshot) => status.apply_snapshot(snapshot),
                        Err(failure) => {
                            status.load_failed(&failure).deliver(&mut self.state.toasts)
                        }
                    }
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::F(n @ 1..=3) => {
                self.mount(View::ALL[usize::from(n) - 1]);
                return;
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mount(self.state.current_view.next());
                return;
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mount(self.state.current_view.prev());
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.toasts.dismiss();
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::AdminStore | View::Profile => self.handle_form_key(key),
            View::SystemStatus => self.handle_status_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let shortcut = key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER);
        if key.code == KeyCode::Enter || shortcut {
            self.submit_form();
            return;
        }

        let Some(form) = self.state.screen.form_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.type_char(c),
            _ => {}
        }
    }

    fn handle_status_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => self.toggle_maintenance(),
            KeyCode::Char('r') => {
                if self.state.screen.is_busy() {
                    tracing::debug!("Ignoring refresh while system status is busy");
                } else {
                    self.mount(View::SystemStatus);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.state.screen.form_mut() else {
            return;
        };
        match form.controller.begin_submit() {
            Submission::Started(call) => {
                if matches!(self.state.screen, Screen::Profile(_)) {
                    self.submitted_username = call
                        .body
                        .as_ref()
                        .and_then(|body| body.get("username"))
                        .and_then(Value::as_str)
                        .map(|username| (call.ticket, username.to_string()));
                }
                self.dispatch(call);
            }
            Submission::Rejected(notification) => notification.deliver(&mut self.state.toasts),
            Submission::Ignored => {}
        }
    }

    fn toggle_maintenance(&mut self) {
        let Screen::SystemStatus(status) = &mut self.state.screen else {
            return;
        };
        if status.loading {
            tracing::debug!("Ignoring maintenance toggle before status has loaded");
            return;
        }
        match status.maintenance.begin_toggle(&*self.session) {
            Submission::Started(call) => self.dispatch(call),
            Submission::Rejected(notification) => notification.deliver(&mut self.state.toasts),
            Submission::Ignored => {}
        }
    }
}
