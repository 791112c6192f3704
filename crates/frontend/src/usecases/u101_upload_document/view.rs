use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::api;
use super::poller::{poll_lease, PollOutcome, POLL_PERIOD_MS};
use crate::layout::global_context::use_app_context;
use crate::shared::i18n;

fn notify_processing_failed() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("File processing failed.");
    }
}

/// Виджет загрузки документов. Файлы из выборки уходят последовательно;
/// каждый успешный ответ регистрирует lease_id в реестре опроса и сразу
/// перечитывает список (строка "processing" появляется немедленно).
/// Ошибка одного файла логируется и не прерывает пакет.
#[component]
pub fn UploadWidget(on_refresh: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let lang = ctx.lang;
    let registry = ctx.poller;

    let (is_loading, set_is_loading) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file_list) = input.files() else {
            return;
        };

        let files: Vec<web_sys::File> = (0..file_list.length())
            .filter_map(|i| file_list.get(i))
            .collect();
        if files.is_empty() {
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            for file in files {
                let file_name = file.name();
                match api::upload_file(file).await {
                    Ok(resp) => {
                        // Новая строка должна появиться сразу, ещё в статусе processing
                        on_refresh.run(());

                        poll_lease(
                            registry,
                            resp.lease_id,
                            POLL_PERIOD_MS,
                            move |lease_id, outcome| match outcome {
                                PollOutcome::Completed => {
                                    log::info!("Lease {} processing completed", lease_id);
                                    on_refresh.run(());
                                }
                                PollOutcome::Failed => {
                                    log::warn!("Lease {} processing failed", lease_id);
                                    notify_processing_failed();
                                }
                            },
                        );
                    }
                    Err(e) => {
                        log::error!("Upload of {} failed: {}", file_name, e);
                    }
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2 class="section-title">{move || i18n::text(lang.get()).upload}</h2>
            <p class="card__subtitle">{move || i18n::text(lang.get()).upload_subtitle}</p>
            <Flex align=FlexAlign::Center>
                <input
                    class="form__input"
                    type="file"
                    multiple
                    on:change=handle_file_select
                    prop:disabled=move || is_loading.get()
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {move || {
                        let text = i18n::text(lang.get());
                        if is_loading.get() { text.uploading } else { text.upload_button }
                    }}
                </Button>
            </Flex>
        </div>
    }
}
