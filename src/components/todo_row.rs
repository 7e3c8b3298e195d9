//! Todo Row Component
//!
//! One todo: status checkbox, title (double-click to edit), delete button and
//! a loader overlay while a request for it is pending.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use todo_engine::Item;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let title = StoredValue::new(item.title.clone());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(item.title);
    let (saving, set_saving) = signal(false);
    let edit_ref = NodeRef::<html::Input>::new();
    let status_ref = NodeRef::<html::Input>::new();

    let row_class = if completed { "todo completed" } else { "todo" };
    let loader_class = move || {
        if store.in_flight().get().contains(&id) {
            "modal overlay is-active"
        } else {
            "modal overlay"
        }
    };

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Enter and blur both land here; only one rename runs at a time.
    // The row stays in edit mode when the rename fails.
    let commit = move || {
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let text = draft.get_untracked();
        ctx.run(move |engine| async move {
            let renamed = engine.rename(id, &text).await.is_ok();
            let _ = set_saving.try_set(false);
            if renamed {
                let _ = set_editing.try_set(false);
            }
        });
    };

    let cancel = move || {
        set_draft.set(title.get_value());
        set_editing.set(false);
    };

    view! {
        <div data-cy="Todo" class=row_class>
            <label class="todo__status-label">
                <input
                    node_ref=status_ref
                    type="checkbox"
                    class="todo__status"
                    data-cy="TodoStatus"
                    prop:checked=completed
                    on:change=move |_| ctx.run(move |engine| async move {
                        // A failed toggle leaves the item as it was, so the row
                        // is not rebuilt; put the browser-flipped box back.
                        if engine.toggle(id).await.is_err() {
                            if let Some(input) = status_ref.get_untracked() {
                                input.set_checked(completed);
                            }
                        }
                    })
                />
                <span class="custom-checkbox" />
            </label>

            {move || if editing.get() {
                view! {
                    <form on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        commit();
                    }>
                        <input
                            node_ref=edit_ref
                            type="text"
                            class="todo__title-field"
                            data-cy="TodoTitleField"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur=move |_| commit()
                            on:keyup=move |ev: KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    cancel();
                                }
                            }
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span
                        class="todo__title"
                        data-cy="TodoTitle"
                        on:dblclick=move |_| set_editing.set(true)
                    >
                        {title.get_value()}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        on:click=move |_| ctx.run(move |engine| async move {
                            let _ = engine.delete(id).await;
                        })
                    >
                        "×"
                    </button>
                }.into_any()
            }}

            <div data-cy="TodoLoader" class=loader_class>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
