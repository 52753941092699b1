use payloads::responses::Orphanage;
use yew::prelude::*;

use crate::get_api_client;

/// Fetch state for the orphanage list shown on the dashboard.
pub struct OrphanagesHook {
    pub data: Option<Vec<Orphanage>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Fetches the orphanage list once on mount and exposes a refetch
/// callback.
#[hook]
pub fn use_orphanages() -> OrphanagesHook {
    let data = use_state(|| None::<Vec<Orphanage>>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        use_callback((), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let api_client = get_api_client();
                match api_client.list_orphanages().await {
                    Ok(orphanages) => {
                        data.set(Some(orphanages));
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
        });
    }

    OrphanagesHook {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
