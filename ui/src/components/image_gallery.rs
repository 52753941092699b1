//! Gallery of existing and newly selected images with per-item deletion.
//!
//! File bytes are read at selection time so the page's form model holds
//! plain data. Files are read sequentially to keep the appended entries in
//! selection order.

use base64::{Engine as _, engine::general_purpose};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use crate::form::{GalleryImage, PendingImage};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<GalleryImage>,
    /// Newly selected files, bytes read, in selection order.
    pub on_select: Callback<Vec<PendingImage>>,
    /// Index into `images` to delete.
    pub on_delete: Callback<usize>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn ImageGallery(props: &Props) -> Html {
    let file_input_ref = use_node_ref();

    let on_file_select = {
        let on_select = props.on_select.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file_list) = input.files() else {
                return;
            };
            // Selecting nothing (e.g. cancelling the dialog) is a no-op.
            if file_list.length() == 0 {
                return;
            }

            let files: Vec<web_sys::File> = (0..file_list.length())
                .filter_map(|i| file_list.get(i))
                .collect();
            // Allow re-selecting the same files later.
            input.set_value("");

            let on_select = on_select.clone();
            yew::platform::spawn_local(async move {
                let mut selected = Vec::with_capacity(files.len());

                for file in files {
                    let buffer = match JsFuture::from(file.array_buffer()).await
                    {
                        Ok(buffer) => buffer,
                        Err(_) => {
                            tracing::warn!(
                                "failed to read selected file {}",
                                file.name()
                            );
                            continue;
                        }
                    };
                    let data = js_sys::Uint8Array::new(&buffer).to_vec();

                    let mime = file.type_();
                    let mime = if mime.is_empty() {
                        "image/jpeg".to_string()
                    } else {
                        mime
                    };
                    let preview_url = format!(
                        "data:{mime};base64,{}",
                        general_purpose::STANDARD.encode(&data)
                    );

                    selected.push(PendingImage {
                        file_name: file.name(),
                        data,
                        preview_url,
                    });
                }

                if !selected.is_empty() {
                    on_select.emit(selected);
                }
            });
        })
    };

    let on_add_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3">
            // Hidden file input
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                multiple={true}
                onchange={on_file_select}
                class="hidden"
                disabled={props.disabled}
            />

            {props.images.iter().enumerate().map(|(index, image)| {
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    Callback::from(move |_| on_delete.emit(index))
                };
                html! {
                    <div
                        key={format!("{index}-{}", image.preview_url())}
                        class="relative aspect-video rounded-lg overflow-hidden
                               bg-neutral-100 dark:bg-neutral-700"
                    >
                        <img
                            src={image.preview_url().to_string()}
                            alt=""
                            class="w-full h-full object-cover"
                        />
                        <button
                            type="button"
                            onclick={on_delete}
                            disabled={props.disabled}
                            aria-label="Remove image"
                            class="absolute top-1 right-1 w-7 h-7 rounded-full
                                   bg-white/90 dark:bg-neutral-900/90
                                   text-red-600 dark:text-red-400 font-bold
                                   hover:bg-white dark:hover:bg-neutral-900
                                   disabled:opacity-50"
                        >
                            {"✕"}
                        </button>
                    </div>
                }
            }).collect::<Html>()}

            // Add-images tile
            <button
                type="button"
                onclick={on_add_click}
                disabled={props.disabled}
                class="aspect-video rounded-lg border-2 border-dashed
                       border-neutral-300 dark:border-neutral-600
                       hover:border-neutral-400 dark:hover:border-neutral-500
                       transition-colors flex items-center justify-center
                       disabled:opacity-50 disabled:cursor-not-allowed"
            >
                <span class="text-2xl text-neutral-400 dark:text-neutral-500">
                    {"+"}
                </span>
            </button>
        </div>
    }
}
