//! Header Component
//!
//! Toggle-all button and the new todo form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let entry_ref = ctx.entry_ref;

    // Refocus whenever the field is re-enabled after an add
    Effect::new(move |_| {
        if store.entry().get().enabled {
            ctx.focus_entry();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.run(|engine| async move {
            let _ = engine.submit().await;
        });
    };

    let toggle_class = move || {
        if store.summary().get().all_completed {
            "todoapp__toggle-all active"
        } else {
            "todoapp__toggle-all"
        }
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || (store.summary().get().total > 0)>
                <button
                    type="button"
                    class=toggle_class
                    data-cy="ToggleAllButton"
                    on:click=move |_| ctx.run(|engine| async move {
                        engine.toggle_all().await;
                    })
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=entry_ref
                    type="text"
                    class="todoapp__new-todo"
                    data-cy="NewTodoField"
                    placeholder="What needs to be done?"
                    prop:disabled=move || !store.entry().get().enabled
                    prop:value=move || store.entry().get().draft
                    on:input=move |ev| ctx.engine().set_draft(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
