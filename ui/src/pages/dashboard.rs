use payloads::responses::Orphanage;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_orphanages;

/// Lists every orphanage with an edit action. The full record travels to
/// the edit page through history state, so the edit page never refetches.
#[function_component]
pub fn DashboardPage() -> Html {
    let orphanages_hook = use_orphanages();

    let content = if orphanages_hook.is_loading
        && orphanages_hook.data.is_none()
    {
        html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading orphanages..."}
                </p>
            </div>
        }
    } else if let Some(error) = &orphanages_hook.error {
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border
                        border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading orphanages: {error}")}
                </p>
            </div>
        }
    } else {
        match orphanages_hook.data.as_deref() {
            None | Some([]) => html! {
                <div class="text-center py-12 text-neutral-500
                            dark:text-neutral-400">
                    <p>{"No orphanages registered yet."}</p>
                </div>
            },
            Some(orphanages) => html! {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3
                            gap-4">
                    {orphanages.iter().map(|orphanage| html! {
                        <OrphanageCard
                            key={orphanage.id.0.to_string()}
                            orphanage={orphanage.clone()}
                        />
                    }).collect::<Html>()}
                </div>
            },
        }
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-neutral-900
                       dark:text-neutral-100 mb-6">
                {"Registered orphanages"}
            </h1>
            {content}
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    orphanage: Orphanage,
}

#[function_component]
fn OrphanageCard(props: &CardProps) -> Html {
    let navigator = use_navigator().unwrap();

    let on_edit = {
        let navigator = navigator.clone();
        let orphanage = props.orphanage.clone();
        Callback::from(move |_| {
            navigator.push_with_state(
                &Route::EditOrphanage {
                    id: orphanage.id.0,
                },
                orphanage.clone(),
            );
        })
    };

    let cover = props
        .orphanage
        .images
        .first()
        .map(|image| {
            html! {
                <img
                    src={image.url.clone()}
                    alt={props.orphanage.name.clone()}
                    class="w-full h-36 object-cover"
                />
            }
        })
        .unwrap_or_else(|| {
            html! {
                <div class="w-full h-36 bg-neutral-100 dark:bg-neutral-700
                            flex items-center justify-center text-3xl">
                    {"🏠"}
                </div>
            }
        });

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow border
                    border-neutral-200 dark:border-neutral-700
                    overflow-hidden">
            {cover}
            <div class="p-4">
                <h2 class="font-semibold text-neutral-900
                           dark:text-neutral-100 truncate">
                    {&props.orphanage.name}
                </h2>
                <p class="text-sm text-neutral-600 dark:text-neutral-400
                          line-clamp-2 mt-1">
                    {&props.orphanage.about}
                </p>
                <div class="mt-3 flex justify-end">
                    <button
                        type="button"
                        onclick={on_edit}
                        class="text-sm px-3 py-2 rounded font-medium
                               text-neutral-900 dark:text-neutral-100
                               hover:bg-neutral-100
                               dark:hover:bg-neutral-700"
                    >
                        {"Edit"}
                    </button>
                </div>
            </div>
        </div>
    }
}
