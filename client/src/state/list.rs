//! Fetch/display/mutate state for one entity list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted list page owns one `ListState` and drives it through the
//! async flows below. The state is never shared across views, so a list only
//! changes in response to its own fetches and mutations.
//!
//! INVARIANTS
//! ==========
//! - A fetch result is applied only if it belongs to the latest fetch issued
//!   by this view (`LoadTicket` generation check).
//! - At most one create/update and one delete are in flight per view.
//! - Load and mutation failures share one error slot; the latest wins.
//! - A failed create/update keeps the overlay open and skips the re-fetch.
//! - A successful create/update closes the overlay, then re-fetches. If that
//!   re-fetch fails, the previous items stay on screen with the load error.
//! - Once the owning view is gone (`ListSink::apply` returns `None`), no
//!   further writes happen.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::*;

use crate::net::api::{EntityBackend, RequestError};
use crate::state::entity::{DraftOf, Entity};

/// Create/edit overlay shown over the list.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay<E> {
    Closed,
    Create,
    Edit(E),
}

/// Coarse list status for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Empty,
    Populated,
}

/// Mutation started by `begin_submit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitIntent {
    Create,
    Update(u64),
}

/// User-visible action a failure is reported against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    Load,
    Create,
    Update,
    Delete,
}

/// Generation marker handed out by `begin_load`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Generic failure text for `action` on entity `E`. Request details are
/// logged, not shown.
pub fn failure_message<E: Entity>(action: ListAction) -> String {
    match action {
        ListAction::Load => format!("Failed to load {}", E::PLURAL),
        ListAction::Create => format!("Failed to create {}", E::SINGULAR),
        ListAction::Update => format!("Failed to update {}", E::SINGULAR),
        ListAction::Delete => format!("Failed to delete {}", E::SINGULAR),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub overlay: Overlay<E>,
    pub submitting: bool,
    /// Record awaiting delete confirmation.
    pub confirm_delete: Option<u64>,
    pub deleting: bool,
    generation: u64,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            overlay: Overlay::Closed,
            submitting: false,
            confirm_delete: None,
            deleting: false,
            generation: 0,
        }
    }
}

impl<E: Entity> ListState<E> {
    pub fn status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if self.items.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Populated
        }
    }

    /// Start a fetch. Any earlier outstanding fetch becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Apply a fetch result. Returns `false` if the ticket is stale.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<Vec<E>, RequestError>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("dropping stale {} response", E::PLURAL);
            return false;
        }
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.fail(ListAction::Load, &e),
        }
        self.loading = false;
        true
    }

    pub fn open_create(&mut self) {
        self.overlay = Overlay::Create;
    }

    pub fn open_edit(&mut self, record: E) {
        self.overlay = Overlay::Edit(record);
    }

    /// Form seed for the open overlay: the record's fields when editing,
    /// `None` when creating or closed.
    pub fn form_seed(&self) -> Option<E::Form> {
        match &self.overlay {
            Overlay::Edit(record) => Some(record.form()),
            Overlay::Create | Overlay::Closed => None,
        }
    }

    /// Cancel the overlay. Nothing is sent and the list is untouched.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::Closed;
    }

    /// Claim the single submission slot for the open overlay.
    pub fn begin_submit(&mut self) -> Option<SubmitIntent> {
        if self.submitting {
            return None;
        }
        let intent = match &self.overlay {
            Overlay::Closed => return None,
            Overlay::Create => SubmitIntent::Create,
            Overlay::Edit(record) => SubmitIntent::Update(record.id()),
        };
        self.submitting = true;
        Some(intent)
    }

    /// Record a create/update outcome. Returns whether it succeeded.
    pub fn finish_submit(&mut self, intent: SubmitIntent, result: Result<(), RequestError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.overlay = Overlay::Closed;
                true
            }
            Err(e) => {
                let action = match intent {
                    SubmitIntent::Create => ListAction::Create,
                    SubmitIntent::Update(_) => ListAction::Update,
                };
                self.fail(action, &e);
                false
            }
        }
    }

    pub fn request_delete(&mut self, id: u64) {
        self.confirm_delete = Some(id);
    }

    /// User declined the confirmation. No error is recorded.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Take the confirmed record id, claiming the delete slot.
    pub fn begin_delete(&mut self) -> Option<u64> {
        if self.deleting {
            return None;
        }
        let id = self.confirm_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    /// Record a delete outcome. On failure the displayed items are kept.
    pub fn finish_delete(&mut self, result: Result<(), RequestError>) -> bool {
        self.deleting = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                self.fail(ListAction::Delete, &e);
                false
            }
        }
    }

    /// Clear the visible error. Does not retry anything.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, action: ListAction, error: &RequestError) {
        log::warn!("{action:?} {} failed: {error}", E::PLURAL);
        self.error = Some(failure_message::<E>(action));
    }
}

/// Write access to a view's `ListState`.
pub trait ListSink<E> {
    /// Run `f` against the state, or return `None` if the view is gone.
    fn apply<R>(&self, f: impl FnOnce(&mut ListState<E>) -> R) -> Option<R>;
}

impl<E: Entity> ListSink<E> for RwSignal<ListState<E>> {
    fn apply<R>(&self, f: impl FnOnce(&mut ListState<E>) -> R) -> Option<R> {
        // Disposed with the owning page, after which `try_update` is a no-op.
        self.try_update(f)
    }
}

/// Fetch the collection into the view.
pub async fn load<E, B, S>(backend: &B, sink: &S)
where
    E: Entity,
    B: EntityBackend<E>,
    S: ListSink<E>,
{
    let Some(ticket) = sink.apply(ListState::begin_load) else {
        return;
    };
    let result = backend.list().await;
    sink.apply(|s| s.apply_load(ticket, result));
}

/// Submit the open overlay as a create or update, then re-fetch on success.
pub async fn submit<E, B, S>(backend: &B, sink: &S, draft: DraftOf<E>)
where
    E: Entity,
    B: EntityBackend<E>,
    S: ListSink<E>,
{
    let Some(intent) = sink.apply(ListState::begin_submit).flatten() else {
        return;
    };
    let result = match intent {
        SubmitIntent::Create => backend.create(&draft).await.map(drop),
        SubmitIntent::Update(id) => backend.update(id, &draft).await.map(drop),
    };
    if sink.apply(|s| s.finish_submit(intent, result)) == Some(true) {
        load(backend, sink).await;
    }
}

/// Delete the record awaiting confirmation, then re-fetch on success.
pub async fn delete_confirmed<E, B, S>(backend: &B, sink: &S)
where
    E: Entity,
    B: EntityBackend<E>,
    S: ListSink<E>,
{
    let Some(id) = sink.apply(ListState::begin_delete).flatten() else {
        return;
    };
    let result = backend.delete(id).await;
    if sink.apply(|s| s.finish_delete(result)) == Some(true) {
        load(backend, sink).await;
    }
}
