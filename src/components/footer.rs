//! Footer Component
//!
//! Items-left counter, filter links and "Clear completed".

use leptos::prelude::*;
use todo_engine::{items_left_label, FilterMode};

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || items_left_label(store.summary().get().active_count)}
            </span>

            <nav class="filter" data-cy="Filter">
                {FilterMode::ALL.into_iter().map(|mode| {
                    let link_class = move || {
                        if store.filter().get() == mode { "filter__link selected" } else { "filter__link" }
                    };
                    view! {
                        <a
                            href="#/"
                            class=link_class
                            data-cy=format!("FilterLink{}", mode.label())
                            on:click=move |_| ctx.engine().set_filter(mode)
                        >
                            {mode.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                prop:disabled=move || !store.summary().get().has_completed
                on:click=move |_| ctx.run(|engine| async move {
                    engine.clear_completed().await;
                })
            >
                "Clear completed"
            </button>
        </footer>
    }
}
