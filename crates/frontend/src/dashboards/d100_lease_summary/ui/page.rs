use contracts::domain::a001_lease_contract::{Contract, InfoValue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cards::SummaryCards;
use crate::domain::a001_lease_contract::ui::details::{AdditionalInfoModal, LocationModal};
use crate::domain::a001_lease_contract::ui::list::{self, ContractTable};
use crate::layout::header::Header;
use crate::usecases::u101_upload_document::UploadWidget;

/// Единственная страница приложения: шапка, сводные карточки, загрузка
/// документов, таблица договоров и два модальных окна деталей
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = list::create_state();

    let (selected_contract, set_selected_contract) = signal(None::<Contract>);
    let (info_modal, set_info_modal) = signal(None::<InfoValue>);

    let refresh = Callback::new(move |_: ()| {
        spawn_local(list::state::reload(state));
    });

    // Первичная загрузка при монтировании
    Effect::new(move || {
        refresh.run(());
    });

    let on_open_details = Callback::new(move |contract: Contract| {
        set_selected_contract.set(Some(contract));
    });
    let on_close_details = Callback::new(move |_: ()| set_selected_contract.set(None));
    let on_open_info = Callback::new(move |info: InfoValue| set_info_modal.set(Some(info)));
    let on_close_info = Callback::new(move |_: ()| set_info_modal.set(None));

    view! {
        <div class="page">
            <Header />
            <SummaryCards state=state />
            <UploadWidget on_refresh=refresh />
            <ContractTable state=state on_open_details=on_open_details />

            {move || {
                selected_contract
                    .get()
                    .map(|contract| {
                        view! {
                            <LocationModal
                                contract=contract
                                on_close=on_close_details
                                on_open_info=on_open_info
                            />
                        }
                    })
            }}

            {move || {
                info_modal
                    .get()
                    .map(|info| {
                        view! { <AdditionalInfoModal info=info on_close=on_close_info /> }
                    })
            }}
        </div>
    }
}
