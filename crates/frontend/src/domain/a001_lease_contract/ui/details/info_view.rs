use contracts::domain::a001_lease_contract::info::{humanize_key, InfoValue};
use leptos::prelude::*;

/// Рекурсивный рендер additional_info: исчерпывающий match по варианту,
/// без инспекции типов в рантайме
pub fn render_info_value(value: &InfoValue) -> AnyView {
    match value {
        InfoValue::List(items) => view! {
            <ul class="info-list">
                {items
                    .iter()
                    .map(|item| view! { <li>{render_info_value(item)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        InfoValue::Map(map) => view! {
            <ul class="info-list">
                {map.iter()
                    .map(|(key, nested)| {
                        view! {
                            <li>
                                <strong class="info-list__key">{humanize_key(key)}": "</strong>
                                {render_info_value(nested)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        scalar => scalar.as_scalar_text().unwrap_or_default().into_any(),
    }
}

/// Модальное окно с произвольными извлечёнными полями документа
#[component]
pub fn AdditionalInfoModal(info: InfoValue, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal modal--narrow">
                <button class="modal__close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <h3 class="modal__title">"Additional Information"</h3>
                <div class="modal__body">{render_info_value(&info)}</div>
            </div>
        </div>
    }
}
