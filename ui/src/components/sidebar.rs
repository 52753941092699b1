use yew::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;

/// Fixed navigation rail with a single "back to dashboard" action.
#[function_component]
pub fn Sidebar() -> Html {
    let push_route = use_push_route();

    let on_back = Callback::from(move |_| {
        push_route.emit(Route::Dashboard);
    });

    html! {
        <aside
            class="hidden md:flex flex-col items-center justify-between
                   w-16 py-6 bg-neutral-900 dark:bg-neutral-800
                   text-neutral-100 shrink-0"
        >
            <span class="text-2xl" title="Happy">{"🏠"}</span>
            <button
                type="button"
                onclick={on_back}
                aria-label="Back to dashboard"
                class="w-10 h-10 rounded-lg bg-neutral-700
                       hover:bg-neutral-600 transition-colors"
            >
                {"←"}
            </button>
        </aside>
    }
}
