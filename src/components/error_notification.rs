//! Error Notification Component
//!
//! Banner showing the engine's current notice; hidden when there is none.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let banner_class = move || {
        if store.notice().get().is_some() {
            "notification is-danger is-light has-text-weight-normal"
        } else {
            "notification is-danger is-light has-text-weight-normal hidden"
        }
    };

    view! {
        <div data-cy="ErrorNotification" class=banner_class>
            <button
                type="button"
                class="delete"
                data-cy="HideErrorButton"
                on:click=move |_| ctx.engine().dismiss_notice()
            />
            {move || store.notice().get().map(|kind| kind.message())}
        </div>
    }
}
