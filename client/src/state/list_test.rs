use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::types::{Product, ProductDraft};
use crate::state::form::FormModel;

// =============================================================
// Helpers
// =============================================================

/// View state slot; `None` models a view that has been unmounted.
struct TestView(RefCell<Option<ListState<Product>>>);

impl TestView {
    fn mounted() -> Self {
        Self(RefCell::new(Some(ListState::default())))
    }

    fn unmount(&self) {
        self.0.borrow_mut().take();
    }

    fn state(&self) -> ListState<Product> {
        self.0.borrow().clone().expect("view mounted")
    }
}

impl ListSink<Product> for TestView {
    fn apply<R>(&self, f: impl FnOnce(&mut ListState<Product>) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }
}

#[derive(Default)]
struct FakeBackend {
    rows: RefCell<Vec<Product>>,
    next_id: Cell<u64>,
    list_calls: Cell<usize>,
    fail_list: Cell<bool>,
    fail_mutations: Cell<bool>,
}

impl FakeBackend {
    fn with_rows(names: &[&str]) -> Self {
        let backend = Self::default();
        for name in names {
            let draft = draft(name, 1.0);
            block_on(EntityBackend::<Product>::create(&backend, &draft)).unwrap();
        }
        backend
    }

    fn failure() -> RequestError {
        RequestError::Status { status: 500, message: None }
    }
}

impl EntityBackend<Product> for FakeBackend {
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list.get() {
            return Err(Self::failure());
        }
        Ok(self.rows.borrow().clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RequestError> {
        if self.fail_mutations.get() {
            return Err(Self::failure());
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let product = Product {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            stock: draft.stock,
            created_at: None,
            updated_at: None,
        };
        self.rows.borrow_mut().push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: u64, draft: &ProductDraft) -> Result<Product, RequestError> {
        if self.fail_mutations.get() {
            return Err(Self::failure());
        }
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RequestError::Status { status: 404, message: None })?;
        row.name.clone_from(&draft.name);
        row.price = draft.price;
        row.stock = draft.stock;
        Ok(row.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), RequestError> {
        if self.fail_mutations.get() {
            return Err(Self::failure());
        }
        self.rows.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

fn draft(name: &str, price: f64) -> ProductDraft {
    ProductDraft { name: name.to_owned(), description: String::new(), price, stock: 1 }
}

fn loaded_view(backend: &FakeBackend) -> TestView {
    let view = TestView::mounted();
    block_on(load::<Product, _, _>(backend, &view));
    view
}

// =============================================================
// Loading
// =============================================================

#[test]
fn new_state_starts_loading() {
    let state = ListState::<Product>::default();
    assert_eq!(state.status(), ListStatus::Loading);
}

#[test]
fn load_populates_items() {
    let backend = FakeBackend::with_rows(&["Saffron", "Clove"]);
    let view = loaded_view(&backend);
    let state = view.state();
    assert_eq!(state.status(), ListStatus::Populated);
    assert_eq!(state.items.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn load_of_empty_collection_is_empty_status() {
    let backend = FakeBackend::default();
    assert_eq!(loaded_view(&backend).state().status(), ListStatus::Empty);
}

#[test]
fn load_failure_sets_error_and_leaves_loading() {
    let backend = FakeBackend::default();
    backend.fail_list.set(true);
    let state = loaded_view(&backend).state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load products"));
}

#[test]
fn stale_load_result_is_ignored() {
    let mut state = ListState::<Product>::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(!state.apply_load(first, Err(FakeBackend::failure())));
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.apply_load(second, Ok(Vec::new())));
    assert_eq!(state.status(), ListStatus::Empty);
}

#[test]
fn load_into_unmounted_view_writes_nothing() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = TestView::mounted();
    view.unmount();
    block_on(load::<Product, _, _>(&backend, &view));
    assert!(view.0.borrow().is_none());
    assert_eq!(backend.list_calls.get(), 0);
}

// =============================================================
// Create / update
// =============================================================

#[test]
fn successful_create_adds_one_row_and_closes_overlay() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    let before = view.state().items.len();

    view.apply(ListState::open_create);
    block_on(submit::<Product, _, _>(&backend, &view, draft("Clove", 2.0)));

    let state = view.state();
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(state.overlay, Overlay::Closed);
    assert!(!state.submitting);
}

#[test]
fn failed_create_keeps_overlay_and_skips_refetch() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    let calls = backend.list_calls.get();
    backend.fail_mutations.set(true);

    view.apply(ListState::open_create);
    block_on(submit::<Product, _, _>(&backend, &view, draft("Clove", 2.0)));

    let state = view.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.overlay, Overlay::Create);
    assert_eq!(state.error.as_deref(), Some("Failed to create product"));
    assert_eq!(backend.list_calls.get(), calls);
}

#[test]
fn refresh_failure_after_create_keeps_previous_items_with_error() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    view.apply(ListState::open_create);
    backend.fail_list.set(true);

    block_on(submit::<Product, _, _>(&backend, &view, draft("Clove", 2.0)));

    let state = view.state();
    assert_eq!(state.overlay, Overlay::Closed);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to load products"));

    backend.fail_list.set(false);
    block_on(load::<Product, _, _>(&backend, &view));
    assert_eq!(view.state().items.len(), 2);
}

#[test]
fn update_targets_edited_record() {
    let backend = FakeBackend::with_rows(&["Saffron", "Clove"]);
    let view = loaded_view(&backend);
    let target = view.state().items[1].clone();

    view.apply(|s| s.open_edit(target.clone()));
    block_on(submit::<Product, _, _>(&backend, &view, draft("Cloves", 3.0)));

    let state = view.state();
    assert_eq!(state.overlay, Overlay::Closed);
    assert_eq!(state.items[1].name, "Cloves");
    assert_eq!(state.items[0].name, "Saffron");
}

#[test]
fn failed_update_reports_update_error() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    let target = view.state().items[0].clone();
    backend.fail_mutations.set(true);

    view.apply(|s| s.open_edit(target.clone()));
    block_on(submit::<Product, _, _>(&backend, &view, draft("Other", 3.0)));

    let state = view.state();
    assert_eq!(state.overlay, Overlay::Edit(target));
    assert_eq!(state.error.as_deref(), Some("Failed to update product"));
}

#[test]
fn edit_then_cancel_leaves_backend_and_list_unchanged() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    let before_rows = backend.rows.borrow().clone();
    let before_items = view.state().items;

    let target = before_items[0].clone();
    view.apply(|s| s.open_edit(target));
    view.apply(ListState::close_overlay);

    assert_eq!(*backend.rows.borrow(), before_rows);
    assert_eq!(view.state().items, before_items);
    assert_eq!(view.state().overlay, Overlay::Closed);
}

#[test]
fn submit_without_open_overlay_does_nothing() {
    let backend = FakeBackend::default();
    let view = loaded_view(&backend);
    block_on(submit::<Product, _, _>(&backend, &view, draft("Clove", 2.0)));
    assert!(backend.rows.borrow().is_empty());
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut state = ListState::<Product>::default();
    state.open_create();
    assert_eq!(state.begin_submit(), Some(SubmitIntent::Create));
    assert_eq!(state.begin_submit(), None);
    state.finish_submit(SubmitIntent::Create, Ok(()));
    assert!(!state.submitting);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn confirmed_delete_removes_record_from_next_fetch() {
    let backend = FakeBackend::with_rows(&["Saffron", "Clove"]);
    let view = loaded_view(&backend);
    let id = view.state().items[0].id;

    view.apply(|s| s.request_delete(id));
    block_on(delete_confirmed::<Product, _, _>(&backend, &view));

    let state = view.state();
    assert!(state.items.iter().all(|p| p.id != id));
    assert_eq!(state.items.len(), 1);
    assert!(state.confirm_delete.is_none());
}

#[test]
fn delete_without_confirmation_sends_nothing() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    block_on(delete_confirmed::<Product, _, _>(&backend, &view));
    assert_eq!(backend.rows.borrow().len(), 1);
}

#[test]
fn cancelled_delete_records_no_error() {
    let mut state = ListState::<Product>::default();
    state.request_delete(4);
    state.cancel_delete();
    assert_eq!(state.begin_delete(), None);
    assert!(state.error.is_none());
}

#[test]
fn failed_delete_keeps_displayed_list() {
    let backend = FakeBackend::with_rows(&["Saffron", "Clove"]);
    let view = loaded_view(&backend);
    let before = view.state().items;
    backend.fail_mutations.set(true);

    view.apply(|s| s.request_delete(before[0].id));
    block_on(delete_confirmed::<Product, _, _>(&backend, &view));

    let state = view.state();
    assert_eq!(state.items, before);
    assert_eq!(state.error.as_deref(), Some("Failed to delete product"));
    assert!(!state.deleting);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn latest_error_overwrites_earlier_one() {
    let mut state = ListState::<Product>::default();
    let ticket = state.begin_load();
    state.apply_load(ticket, Err(FakeBackend::failure()));
    state.request_delete(1);
    state.begin_delete();
    state.finish_delete(Err(FakeBackend::failure()));
    assert_eq!(state.error.as_deref(), Some("Failed to delete product"));
}

#[test]
fn dismiss_error_clears_only_the_error() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    view.apply(|s| s.error = Some("Failed to load products".to_owned()));
    let calls = backend.list_calls.get();

    view.apply(ListState::dismiss_error);

    let state = view.state();
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
    assert_eq!(backend.list_calls.get(), calls);
}

#[test]
fn failure_messages_use_entity_labels() {
    use crate::net::types::SpiceCategory;
    assert_eq!(failure_message::<SpiceCategory>(ListAction::Load), "Failed to load spice categories");
    assert_eq!(failure_message::<SpiceCategory>(ListAction::Update), "Failed to update spice category");
}

// =============================================================
// Form seeding
// =============================================================

#[test]
fn switching_edited_record_changes_form_seed() {
    let backend = FakeBackend::with_rows(&["Saffron", "Clove"]);
    let mut state = loaded_view(&backend).state();
    let (saffron, clove) = (state.items[0].clone(), state.items[1].clone());

    state.open_edit(saffron.clone());
    assert_eq!(state.form_seed(), Some(saffron.form()));

    state.open_edit(clove.clone());
    let seed = state.form_seed().unwrap();
    assert_eq!(seed, clove.form());
    assert_eq!(seed.value("name"), "Clove");
}

#[test]
fn failed_create_leaves_form_seed_unchanged() {
    let backend = FakeBackend::default();
    backend.fail_mutations.set(true);
    let view = loaded_view(&backend);
    view.apply(ListState::open_create);
    let before = view.state().form_seed();

    block_on(submit::<Product, _, _>(&backend, &view, draft("Typed", 2.0)));

    let state = view.state();
    assert_eq!(state.overlay, Overlay::Create);
    assert_eq!(state.form_seed(), before);
    assert_eq!(before, None);
}

#[test]
fn failed_update_leaves_form_seed_unchanged() {
    let backend = FakeBackend::with_rows(&["Saffron"]);
    let view = loaded_view(&backend);
    let record = view.state().items[0].clone();
    view.apply(|s| s.open_edit(record.clone()));
    backend.fail_mutations.set(true);

    block_on(submit::<Product, _, _>(&backend, &view, draft("Renamed", 3.0)));

    assert_eq!(view.state().form_seed(), Some(record.form()));
}

#[test]
fn closed_overlay_has_no_form_seed() {
    let state = ListState::<Product>::default();
    assert_eq!(state.form_seed(), None);
}
