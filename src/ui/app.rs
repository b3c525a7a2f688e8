use tokio::sync::mpsc;

use crate::api::worker::ApiCommand;
use crate::session::Session;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::ApiEvent;
use crate::ui::form::{parse_draft, FormIntent, FormMode, FormReducer, FormState};

/// The application orchestrator.
///
/// Owns the reducer states and the worker command sender. All side
/// effects are triggered here; the reducers stay pure. The consistency
/// contract lives in [`App::on_api_event`]: successful mutations never
/// patch the inventory locally, they invalidate it with a fresh fetch.
pub struct App {
    should_quit: bool,
    session: Session,
    dashboard: DashboardState,
    form: FormState,
    api_tx: Option<mpsc::Sender<ApiCommand>>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            should_quit: false,
            session,
            dashboard: DashboardState::default(),
            form: FormState::default(),
            api_tx: None,
        }
    }

    pub fn set_api_sender(&mut self, sender: mpsc::Sender<ApiCommand>) {
        self.api_tx = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    // ========================================================================
    // Fetch orchestration
    // ========================================================================

    /// Dispatch a full inventory reload. The loading flag is raised
    /// only if the command actually reached the worker; it is cleared
    /// by whichever reply settles the fetch.
    pub fn refresh_inventory(&mut self) {
        if self.send_command(ApiCommand::FetchInventory) {
            self.dispatch(DashboardIntent::FetchStarted);
        }
    }

    pub fn request_profile(&mut self) {
        self.send_command(ApiCommand::FetchProfile);
    }

    /// Apply a worker reply.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::InventoryLoaded { medicines } => {
                self.dispatch(DashboardIntent::InventoryLoaded { medicines });
            }
            ApiEvent::FetchFailed { message } => {
                self.dispatch(DashboardIntent::FetchFailed { message });
            }
            ApiEvent::ProfileLoaded { username } => {
                self.session.set_username(username);
            }
            ApiEvent::CreateSucceeded | ApiEvent::UpdateSucceeded => {
                self.dispatch_form(FormIntent::Close);
                self.refresh_inventory();
            }
            ApiEvent::DeleteSucceeded => {
                self.refresh_inventory();
            }
            ApiEvent::CreateFailed { message }
            | ApiEvent::UpdateFailed { message }
            | ApiEvent::DeleteFailed { message } => {
                // The form (if any) stays open so the input isn't lost.
                self.dispatch(DashboardIntent::MutationFailed { message });
            }
        }
    }

    // ========================================================================
    // Form
    // ========================================================================

    pub fn open_add_form(&mut self) {
        self.dispatch_form(FormIntent::OpenAdd);
    }

    /// Open the edit form for the current selection, if any.
    pub fn open_edit_form(&mut self) {
        if let Some(medicine) = self.dashboard.selected_medicine().cloned() {
            self.dispatch_form(FormIntent::OpenEdit { medicine });
        }
    }

    pub fn cancel_form(&mut self) {
        self.dispatch_form(FormIntent::Close);
    }

    /// Parse the visible form and dispatch the matching mutation.
    /// Parse failures stay inside the form; they never reach the
    /// error banner.
    pub fn submit_form(&mut self) {
        let (mode, parsed) = match &self.form {
            FormState::Visible { mode, fields, .. } => (*mode, parse_draft(fields)),
            FormState::Hidden => return,
        };

        match parsed {
            Ok(draft) => {
                let command = match mode {
                    FormMode::Add => ApiCommand::CreateMedicine { draft },
                    FormMode::Edit { id } => ApiCommand::UpdateMedicine { id, draft },
                };
                self.send_command(command);
            }
            Err(message) => self.dispatch_form(FormIntent::SetError { message }),
        }
    }

    pub fn form_input(&mut self, ch: char) {
        self.dispatch_form(FormIntent::Input { ch });
    }

    pub fn form_backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn focus_next_field(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn focus_prev_field(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    // ========================================================================
    // Delete confirmation
    // ========================================================================

    /// Ask for confirmation before deleting the current selection.
    /// No call is made until the user confirms.
    pub fn request_delete(&mut self) {
        if let Some(id) = self.dashboard.selected_medicine().map(|m| m.id) {
            self.dispatch(DashboardIntent::RequestDelete { id });
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.dashboard.pending_delete else {
            return;
        };
        self.dispatch(DashboardIntent::ConfirmDelete);
        self.send_command(ApiCommand::DeleteMedicine { id });
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch(DashboardIntent::CancelDelete);
    }

    // ========================================================================
    // Error banner / selection
    // ========================================================================

    pub fn dismiss_error(&mut self) {
        self.dispatch(DashboardIntent::DismissError);
    }

    pub fn move_selection(&mut self, delta: i32) {
        self.dispatch(DashboardIntent::MoveSelection { delta });
    }

    fn dispatch(&mut self, intent: DashboardIntent) {
        self.dashboard = DashboardReducer::reduce(std::mem::take(&mut self.dashboard), intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        self.form = FormReducer::reduce(std::mem::take(&mut self.form), intent);
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api_tx else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(%err, "failed to reach API worker");
                self.dispatch(DashboardIntent::MutationFailed {
                    message: format!("API worker unavailable: {}", err),
                });
                false
            }
        }
    }
}
