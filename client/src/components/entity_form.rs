//! Modal create/edit form, generic over any `FormModel`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The owning list page decides what to do with the validated draft; this
//! form only collects input. The same instance stays mounted while the user
//! switches between records, so fields are re-seeded from `initial` whenever
//! it changes.

#[cfg(test)]
#[path = "entity_form_test.rs"]
mod entity_form_test;

use leptos::prelude::*;

use crate::state::form::{FieldKind, FieldSpec, FormModel};

/// Field values for a newly supplied `initial`: the record's fields in edit
/// mode, blank defaults in create mode.
pub fn reseed<M: FormModel>(initial: Option<M>) -> M {
    initial.unwrap_or_default()
}

/// Render a modal form for `M`.
///
/// `initial` is `Some` in edit mode and `None` in create mode. `on_submit`
/// runs only with a draft that passed validation.
pub fn entity_form<M: FormModel>(
    title: Signal<String>,
    initial: Signal<Option<M>>,
    submitting: Signal<bool>,
    on_submit: Callback<M::Draft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let fields = RwSignal::new(reseed(initial.get_untracked()));
    let invalid = RwSignal::new(None::<String>);

    // `initial` only notifies when its value changes, so typed values survive
    // a failed submit.
    Effect::new(move || {
        fields.set(reseed(initial.get()));
        invalid.set(None);
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        match fields.with_untracked(|f| f.validate()) {
            Ok(draft) => {
                invalid.set(None);
                on_submit.run(draft);
            }
            Err(e) => invalid.set(Some(e.to_string())),
        }
    };

    let inputs = M::FIELDS.iter().map(|spec| field_input(spec, fields)).collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--form">
                <h2>{move || title.get()}</h2>
                <form class="entity-form" on:submit=on_form_submit>
                    {inputs}
                    <Show when=move || invalid.get().is_some()>
                        <p class="entity-form__invalid">{move || invalid.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving…" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input<M: FormModel>(spec: &'static FieldSpec, fields: RwSignal<M>) -> AnyView {
    let key = spec.key;
    let label = if spec.required { format!("{} *", spec.label) } else { spec.label.to_owned() };
    let value = move || fields.with(|f| f.value(key));
    let on_input = move |ev: leptos::ev::Event| fields.update(|f| f.set(key, event_target_value(&ev)));

    let control = match spec.kind {
        FieldKind::Text => view! {
            <input
                class="entity-form__input"
                name=key
                type="text"
                required=spec.required
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="entity-form__input entity-form__textarea"
                name=key
                rows="3"
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldKind::Number { min, step } => view! {
            <input
                class="entity-form__input"
                name=key
                type="number"
                min=min
                step=step
                required=spec.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <label class="entity-form__label">
            <span>{label}</span>
            {control}
        </label>
    }
    .into_any()
}
