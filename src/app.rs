//! Todo Sync Frontend App
//!
//! Builds the engine, mirrors it into the store and lays out the page.

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use todo_engine::{Change, HttpTodoClient, Item, TodoEngine};

use crate::components::{ErrorNotification, Footer, Header, TodoRow};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::scheduler::BrowserScheduler;
use crate::store::{store_sync, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let remote = Rc::new(HttpTodoClient::new(&config.api_url, config.engine.owner_id));
    let engine = TodoEngine::new(remote, Rc::new(BrowserScheduler), config.engine);

    let store = Store::new(AppState::from_engine(&engine));
    let ctx = AppContext::new(engine.clone(), NodeRef::<html::Input>::new());
    provide_context(store);
    provide_context(ctx);

    // Engine -> store. The listener reaches the engine through the context
    // handle so the engine does not end up owning itself.
    engine
        .subscribe(move |change| {
            if change == Change::FocusEntry {
                // Let pending DOM updates (re-enabling the input) land first
                request_animation_frame(move || ctx.focus_entry());
                return;
            }
            if let Some(engine) = ctx.try_engine() {
                store_sync(&store, &engine, change);
            }
        })
        .detach();

    // Initial load
    Effect::new(move |_| {
        ctx.run(|engine| async move {
            if let Err(err) = engine.load().await {
                tracing::warn!(error = %err, "initial load failed");
            }
        });
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <section class="todoapp__main" data-cy="TodoList">
                    <For
                        each=move || store.visible_items().get()
                        // Every displayed field is part of the key so edits re-render the row
                        key=|item| (item.id, item.title.clone(), item.completed)
                        children=move |item: Item| view! { <TodoRow item=item /> }
                    />
                </section>

                <Show when=move || (store.summary().get().total > 0)>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
