//! Component list controller: one in-memory collection bound to the
//! component endpoint.
//!
//! The collection is a cache of server state. It is replaced wholesale by
//! `load()` and never patched locally, so every successful mutation is
//! followed by exactly one reload.

use std::sync::Arc;

use partstock_core::entity::find_by_id;
use partstock_core::{ComponentId, DomainError};
use partstock_inventory::{
    Component, ComponentDraft, ComponentFilter, ComponentForm, ComponentRow, categories,
    render_rows,
};

use crate::confirm::Confirm;
use crate::error::{ApiError, ControllerError};
use crate::http::{Api, Method, get_as};
use crate::notify::{Notification, Notifier};

/// Lifecycle of the list. Filtering is synchronous and has no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    LoadError,
    Mutating,
}

/// What the front-end should display after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Rows(Vec<ComponentRow>),
    /// Placeholder shown instead of the table when loading failed.
    LoadError(String),
}

impl ListView {
    /// The rendered rows, or `ControllerError::LoadFailed` for the placeholder.
    pub fn into_rows(self) -> Result<Vec<ComponentRow>, ControllerError> {
        match self {
            ListView::Rows(rows) => Ok(rows),
            ListView::LoadError(_) => Err(ControllerError::LoadFailed),
        }
    }
}

pub struct ComponentController {
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notifier>,
    url: String,
    items: Vec<Component>,
    state: ListState,
    editing: Option<ComponentId>,
    busy: bool,
}

impl ComponentController {
    pub fn new(api: Arc<dyn Api>, notifier: Arc<dyn Notifier>, url: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            url: url.into(),
            items: Vec::new(),
            state: ListState::Idle,
            editing: None,
            busy: false,
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn items(&self) -> &[Component] {
        &self.items
    }

    /// Whether an action is in flight (submit buttons disabled).
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Component currently open in the edit form, if any.
    pub fn editing(&self) -> Option<&Component> {
        self.editing
            .as_ref()
            .and_then(|id| find_by_id(&self.items, id))
    }

    /// Open the edit form for `id`, prefilled. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: &ComponentId) -> Option<ComponentForm> {
        let component = find_by_id(&self.items, id)?;
        self.editing = Some(id.clone());
        Some(ComponentForm::from(component))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Distinct categories of the loaded collection.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.items)
    }

    fn item_url(&self, id: &ComponentId) -> String {
        format!("{}/{}", self.url, id)
    }

    /// Fetch the full collection and replace the local copy.
    pub async fn load(&mut self) -> ListView {
        self.state = ListState::Loading;

        match get_as::<Vec<Component>>(self.api.as_ref(), &self.url).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "components loaded");
                self.items = items;
                self.state = ListState::Loaded;
                ListView::Rows(render_rows(&self.items, &ComponentFilter::default()))
            }
            Err(err) => {
                self.state = ListState::LoadError;
                self.notifier
                    .notify(Notification::error(format!("Failed to load components: {err}")));
                ListView::LoadError("Failed to load components.".to_string())
            }
        }
    }

    /// Rows matching `query` (case-insensitive, text fields) and `category`
    /// (exact). The collection itself is left untouched.
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<ComponentRow> {
        let filter = ComponentFilter::new(query, category.map(str::to_string));
        render_rows(&self.items, &filter)
    }

    /// Validate and create a component, then reload.
    pub async fn create(&mut self, form: &ComponentForm) -> Result<ListView, ControllerError> {
        let draft = self.validated(form)?;
        let body = serde_json::to_value(&draft).map_err(|e| DomainError::validation(e.to_string()))?;
        let api = self.api.clone();
        let url = self.url.clone();
        let call = async move { api.mutate(&url, body, Method::Post).await.map(|_| ()) };

        self.mutate("Component created.", call).await
    }

    /// Validate and replace component `id`, then reload.
    ///
    /// `Ok(None)` when `id` is not in the local collection; no request is made.
    pub async fn update(
        &mut self,
        id: &ComponentId,
        form: &ComponentForm,
    ) -> Result<Option<ListView>, ControllerError> {
        if find_by_id(&self.items, id).is_none() {
            tracing::debug!(%id, "update of unknown component ignored");
            return Ok(None);
        }

        let draft = self.validated(form)?;
        let body = serde_json::to_value(&draft).map_err(|e| DomainError::validation(e.to_string()))?;
        let api = self.api.clone();
        let url = self.item_url(id);
        let call = async move { api.mutate(&url, body, Method::Put).await.map(|_| ()) };

        self.mutate("Component updated.", call).await.map(Some)
    }

    /// Delete component `id` after `confirm` approves, then reload.
    ///
    /// `Ok(None)` when `id` is unknown or the user declined.
    pub async fn delete(
        &mut self,
        id: &ComponentId,
        confirm: &dyn Confirm,
    ) -> Result<Option<ListView>, ControllerError> {
        let Some(component) = find_by_id(&self.items, id) else {
            tracing::debug!(%id, "delete of unknown component ignored");
            return Ok(None);
        };

        if !confirm.confirm(&format!("Delete component \"{}\"?", component.name)) {
            return Ok(None);
        }

        let api = self.api.clone();
        let url = self.item_url(id);
        let call = async move { api.delete(&url).await };

        self.mutate("Component deleted.", call).await.map(Some)
    }

    fn validated(&self, form: &ComponentForm) -> Result<ComponentDraft, ControllerError> {
        form.validate().map_err(|err| {
            for field in err.field_errors() {
                self.notifier.notify(Notification::error(field.to_string()));
            }
            ControllerError::Domain(err)
        })
    }

    /// Run one mutation: on success close the edit form and reload; on
    /// failure notify and restore the previous state. `busy` is reset on
    /// every path, including when the returned future is dropped.
    async fn mutate<F>(&mut self, success: &str, call: F) -> Result<ListView, ControllerError>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        let mut guard = InFlight::begin(self);

        match call.await {
            Ok(()) => {
                let controller = &mut *guard.controller;
                controller.editing = None;
                controller.notifier.notify(Notification::info(success));
                Ok(controller.load().await)
            }
            Err(err) => {
                guard
                    .controller
                    .notifier
                    .notify(Notification::error(format!("Request failed: {err}")));
                Err(ControllerError::Api(err))
            }
        }
    }
}

/// Marks the controller busy for the lifetime of one mutation.
///
/// On drop `busy` is cleared, and a state still at `Mutating` (the call failed
/// or never finished) goes back to what it was before.
struct InFlight<'a> {
    controller: &'a mut ComponentController,
    previous: ListState,
}

impl<'a> InFlight<'a> {
    fn begin(controller: &'a mut ComponentController) -> Self {
        let previous = controller.state;
        controller.state = ListState::Mutating;
        controller.busy = true;
        Self {
            controller,
            previous,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.controller.busy = false;
        if self.controller.state == ListState::Mutating {
            self.controller.state = self.previous;
        }
    }
}
