//! Generic list page: fetch, table, create/edit overlay, delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! One instantiation per entity type. The page owns its `ListState` signal,
//! so leaving the route disposes it and any response that arrives later is
//! dropped by `ListSink`. All requests carry the session's current token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::entity_form::entity_form;
use crate::components::error_banner::ErrorBanner;
use crate::net::api::ApiClient;
use crate::state::entity::{DraftOf, Entity};
use crate::state::list::{ListState, ListStatus, Overlay, delete_confirmed, load, submit};
use crate::state::session::SessionHandle;
use crate::util::auth::install_unauth_redirect;

fn api_client(session: SessionHandle) -> ApiClient {
    ApiClient::new(session.token_untracked())
}

fn spawn_load<E: Entity>(session: SessionHandle, list: RwSignal<ListState<E>>) {
    spawn_local(async move {
        let api = api_client(session);
        load::<E, _, _>(&api, &list).await;
    });
}

/// Heading for the overlay in its current mode.
pub fn overlay_title<E: Entity>(overlay: &Overlay<E>) -> String {
    match overlay {
        Overlay::Edit(_) => format!("Edit {}", E::LABEL),
        Overlay::Create | Overlay::Closed => format!("New {}", E::LABEL),
    }
}

/// Render the list view for `E`. Redirects to `/login` when signed out.
pub fn entity_list<E: Entity>() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let list = RwSignal::new(ListState::<E>::default());
    install_unauth_redirect(session, use_navigate());

    // Fetch once the persisted session is known to be present.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !session.is_restored() || !session.is_authenticated() {
            return;
        }
        requested.set(true);
        spawn_load(session, list);
    });

    let status = Memo::new(move |_| list.with(ListState::status));
    let items = Memo::new(move |_| list.with(|s| s.items.clone()));
    let error = Signal::derive(move || list.with(|s| s.error.clone()));
    let overlay_open = move || list.with(|s| !matches!(s.overlay, Overlay::Closed));
    let form_title = Signal::derive(move || list.with(|s| overlay_title(&s.overlay)));
    // Memoized so toggling `submitting` does not re-seed the form fields.
    let form_initial = Memo::new(move |_| list.with(ListState::form_seed));
    let submitting = Signal::derive(move || list.with(|s| s.submitting));
    let deleting = Signal::derive(move || list.with(|s| s.deleting));

    let on_new = move |_: leptos::ev::MouseEvent| list.update(ListState::open_create);
    let on_reload = move |_: leptos::ev::MouseEvent| spawn_load(session, list);
    let on_dismiss = Callback::new(move |()| list.update(ListState::dismiss_error));
    let on_cancel = Callback::new(move |()| list.update(ListState::close_overlay));
    let on_submit = Callback::new(move |draft: DraftOf<E>| {
        spawn_local(async move {
            let api = api_client(session);
            submit::<E, _, _>(&api, &list, draft).await;
        });
    });
    let on_delete_cancel = Callback::new(move |()| list.update(ListState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        spawn_local(async move {
            let api = api_client(session);
            delete_confirmed::<E, _, _>(&api, &list).await;
        });
    });

    let body = move || match status.get() {
        ListStatus::Loading => view! { <p class="list-page__empty">"Loading…"</p> }.into_any(),
        ListStatus::Empty => view! {
            <div class="list-page__empty-card">
                <p>{format!("No {} yet.", E::PLURAL)}</p>
                <button class="btn btn--primary" on:click=on_new>
                    {format!("Add your first {}", E::SINGULAR)}
                </button>
            </div>
        }
        .into_any(),
        ListStatus::Populated => view! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            {E::COLUMNS
                                .iter()
                                .map(|column| view! { <th class="table__head">{*column}</th> })
                                .collect::<Vec<_>>()}
                            <th class="table__head">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|item| row(item, list)).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="list-page__header">
            <h1 class="list-page__title">{E::TITLE}</h1>
            <div class="list-page__actions">
                <button class="btn" on:click=on_reload title="Fetch the list again">
                    "Reload"
                </button>
                <button class="btn btn--primary" on:click=on_new>
                    {format!("+ New {}", E::LABEL)}
                </button>
            </div>
        </div>
        <ErrorBanner message=error on_dismiss=on_dismiss/>
        {body}
        <Show when=overlay_open>
            {entity_form::<E::Form>(form_title, form_initial.into(), submitting, on_submit, on_cancel)}
        </Show>
        <Show when=move || list.with(|s| s.confirm_delete.is_some())>
            <ConfirmDialog
                title=format!("Delete {}", E::LABEL)
                message=format!("Delete this {}? This cannot be undone.", E::SINGULAR)
                confirm_label="Delete"
                busy=deleting
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}

fn row<E: Entity>(item: E, list: RwSignal<ListState<E>>) -> impl IntoView {
    let id = item.id();
    let cells = item
        .cells()
        .into_iter()
        .map(|text| view! { <td class="table__cell">{text}</td> })
        .collect::<Vec<_>>();

    view! {
        <tr class="table__row">
            {cells}
            <td class="table__cell table__cell--actions">
                <button class="btn btn--small" on:click=move |_| list.update(|s| s.open_edit(item.clone()))>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| list.update(|s| s.request_delete(id))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
