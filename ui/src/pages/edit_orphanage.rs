use payloads::{ABOUT_MAX_LEN, OrphanageId, responses::Orphanage};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ImageGallery, MapPicker, Sidebar};
use crate::form::{GeoPosition, OrphanageForm, PendingImage};
use crate::hooks::{use_geolocation_ready, use_push_route};
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: OrphanageId,
}

/// Edit form for an existing orphanage.
///
/// The record arrives through history state from the dashboard; it is not
/// fetched here. Opening the URL directly therefore has no record to edit
/// and renders an error panel instead of the form.
#[function_component]
pub fn EditOrphanagePage(props: &Props) -> Html {
    let location = use_location().unwrap();
    let record = location.state::<Orphanage>();

    let Some(record) = record else {
        return html! {
            <main class="max-w-2xl mx-auto px-4 py-12">
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {"No orphanage data to edit. Open this page from the \
                          dashboard."}
                    </p>
                </div>
            </main>
        };
    };

    if record.id != props.id {
        tracing::warn!(
            "route id {} does not match record id {}",
            props.id,
            record.id
        );
    }

    html! {
        <EditOrphanageContent record={(*record).clone()} />
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    record: Orphanage,
}

/// Returns a callback that copies an input's value into the form.
fn input_setter(
    form: &UseStateHandle<OrphanageForm>,
    apply: fn(&mut OrphanageForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut updated = (*form).clone();
        apply(&mut updated, input.value());
        form.set(updated);
    })
}

/// Same as [`input_setter`], for textareas.
fn textarea_setter(
    form: &UseStateHandle<OrphanageForm>,
    apply: fn(&mut OrphanageForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        let mut updated = (*form).clone();
        apply(&mut updated, textarea.value());
        form.set(updated);
    })
}

#[function_component]
fn EditOrphanageContent(props: &ContentProps) -> Html {
    let push_route = use_push_route();
    let map_ready = use_geolocation_ready();

    // One-time setup from the record; never re-initialized.
    let form = {
        let record = props.record.clone();
        use_state(move || OrphanageForm::from_record(&record))
    };
    let is_submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    let map_center = GeoPosition {
        latitude: props.record.latitude,
        longitude: props.record.longitude,
    };

    let on_name_input = input_setter(&form, |f, v| f.name = v);
    let on_whatsapp_input = input_setter(&form, |f, v| f.whatsapp = v);
    let on_opening_hours_input =
        input_setter(&form, |f, v| f.opening_hours = v);
    let on_about_input = textarea_setter(&form, |f, v| f.about = v);
    let on_instructions_input =
        textarea_setter(&form, |f, v| f.instructions = v);

    let on_map_click = {
        let form = form.clone();
        Callback::from(move |position: GeoPosition| {
            let mut updated = (*form).clone();
            updated.set_position(position.latitude, position.longitude);
            form.set(updated);
        })
    };

    let on_select_images = {
        let form = form.clone();
        Callback::from(move |images: Vec<PendingImage>| {
            let mut updated = (*form).clone();
            updated.add_images(images);
            form.set(updated);
        })
    };

    let on_delete_image = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            let mut updated = (*form).clone();
            updated.remove_image(index);
            form.set(updated);
        })
    };

    let set_open_on_weekends = |value: bool| {
        let form = form.clone();
        Callback::from(move |_| {
            let mut updated = (*form).clone();
            updated.open_on_weekends = value;
            form.set(updated);
        })
    };
    let on_weekends_yes = set_open_on_weekends(true);
    let on_weekends_no = set_open_on_weekends(false);

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let submit_error = submit_error.clone();
        let push_route = push_route.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // In-flight guard: the button is disabled too, but a queued
            // submit event must not start a second request.
            if *is_submitting {
                return;
            }

            let submission = form.to_submission();
            let is_submitting = is_submitting.clone();
            let submit_error = submit_error.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                submit_error.set(None);

                let api_client = get_api_client();
                match api_client.submit_orphanage(submission).await {
                    Ok(()) => {
                        push_route.emit(Route::Dashboard);
                    }
                    Err(e) => {
                        submit_error.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let weekends_button_class = |active: bool| {
        classes!(
            "flex-1",
            "py-2",
            "px-4",
            "rounded-md",
            "border",
            "text-sm",
            "font-medium",
            "transition-colors",
            if active {
                "bg-green-50 dark:bg-green-900/20 border-green-300 \
                 dark:border-green-700 text-green-800 dark:text-green-300"
            } else {
                "bg-white dark:bg-neutral-700 border-neutral-300 \
                 dark:border-neutral-600 text-neutral-700 \
                 dark:text-neutral-300"
            }
        )
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300
                       dark:border-neutral-600 rounded-md shadow-sm bg-white
                       dark:bg-neutral-700 text-neutral-900
                       dark:text-neutral-100 focus:outline-none focus:ring-2
                       focus:ring-neutral-500 focus:border-neutral-500";

    html! {
        <div class="flex min-h-screen">
            <Sidebar />

            <main class="flex-1 px-4 sm:px-6 lg:px-8 py-8">
                <form
                    onsubmit={on_submit}
                    class="max-w-2xl mx-auto bg-white dark:bg-neutral-800 p-8
                           rounded-lg shadow-md space-y-8"
                >
                    <fieldset class="space-y-6">
                        <legend class="text-2xl font-bold text-neutral-900
                                       dark:text-neutral-100 pb-2 border-b
                                       border-neutral-200
                                       dark:border-neutral-700 w-full">
                            {"Details"}
                        </legend>

                        {if map_ready {
                            html! {
                                <MapPicker
                                    center={map_center}
                                    marker={form.position}
                                    on_click={on_map_click}
                                />
                            }
                        } else {
                            html! {
                                <div class="w-full h-[280px] rounded-lg
                                            bg-neutral-100 dark:bg-neutral-700
                                            flex items-center justify-center">
                                    <p class="text-sm text-neutral-500
                                              dark:text-neutral-400">
                                        {"Waiting for location access..."}
                                    </p>
                                </div>
                            }
                        }}

                        <div>
                            <label
                                for="name"
                                class="block text-sm font-medium
                                       text-neutral-700 dark:text-neutral-300
                                       mb-2"
                            >
                                {"Name"}
                            </label>
                            <input
                                id="name"
                                type="text"
                                value={form.name.clone()}
                                oninput={on_name_input}
                                class={input_class}
                            />
                        </div>

                        <div>
                            <label
                                for="about"
                                class="block text-sm font-medium
                                       text-neutral-700 dark:text-neutral-300
                                       mb-2"
                            >
                                {"About"}
                                <span class="ml-2 text-xs text-neutral-500">
                                    {format!("Max {ABOUT_MAX_LEN} characters")}
                                </span>
                            </label>
                            <textarea
                                id="about"
                                rows="4"
                                maxlength={ABOUT_MAX_LEN.to_string()}
                                value={form.about.clone()}
                                oninput={on_about_input}
                                class={input_class}
                            />
                        </div>

                        <div>
                            <label
                                for="whatsapp"
                                class="block text-sm font-medium
                                       text-neutral-700 dark:text-neutral-300
                                       mb-2"
                            >
                                {"Whatsapp number"}
                            </label>
                            <input
                                id="whatsapp"
                                type="text"
                                value={form.whatsapp.clone()}
                                oninput={on_whatsapp_input}
                                class={input_class}
                            />
                        </div>

                        <div>
                            <span class="block text-sm font-medium
                                         text-neutral-700
                                         dark:text-neutral-300 mb-2">
                                {"Photos"}
                            </span>
                            <ImageGallery
                                images={form.gallery.clone()}
                                on_select={on_select_images}
                                on_delete={on_delete_image}
                                disabled={*is_submitting}
                            />
                        </div>
                    </fieldset>

                    <fieldset class="space-y-6">
                        <legend class="text-2xl font-bold text-neutral-900
                                       dark:text-neutral-100 pb-2 border-b
                                       border-neutral-200
                                       dark:border-neutral-700 w-full">
                            {"Visiting"}
                        </legend>

                        <div>
                            <label
                                for="instructions"
                                class="block text-sm font-medium
                                       text-neutral-700 dark:text-neutral-300
                                       mb-2"
                            >
                                {"Instructions"}
                            </label>
                            <textarea
                                id="instructions"
                                rows="4"
                                value={form.instructions.clone()}
                                oninput={on_instructions_input}
                                class={input_class}
                            />
                        </div>

                        <div>
                            <label
                                for="opening_hours"
                                class="block text-sm font-medium
                                       text-neutral-700 dark:text-neutral-300
                                       mb-2"
                            >
                                {"Opening hours"}
                            </label>
                            <input
                                id="opening_hours"
                                type="text"
                                value={form.opening_hours.clone()}
                                oninput={on_opening_hours_input}
                                class={input_class}
                            />
                        </div>

                        <div>
                            <span class="block text-sm font-medium
                                         text-neutral-700
                                         dark:text-neutral-300 mb-2">
                                {"Open on weekends"}
                            </span>
                            <div class="flex gap-3">
                                <button
                                    type="button"
                                    onclick={on_weekends_yes}
                                    class={weekends_button_class(
                                        form.open_on_weekends
                                    )}
                                >
                                    {"Yes"}
                                </button>
                                <button
                                    type="button"
                                    onclick={on_weekends_no}
                                    class={weekends_button_class(
                                        !form.open_on_weekends
                                    )}
                                >
                                    {"No"}
                                </button>
                            </div>
                        </div>
                    </fieldset>

                    {if let Some(error) = &*submit_error {
                        html! {
                            <div class="p-4 rounded-md bg-red-50
                                        dark:bg-red-900/20 border
                                        border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700
                                          dark:text-red-400">
                                    {error}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full py-3 px-4 rounded-md shadow-sm text-sm
                               font-semibold text-white bg-green-600
                               hover:bg-green-700 focus:outline-none
                               focus:ring-2 focus:ring-offset-2
                               focus:ring-green-500 disabled:opacity-50
                               disabled:cursor-not-allowed
                               transition-colors"
                    >
                        {if *is_submitting { "Saving..." } else { "Confirm" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
