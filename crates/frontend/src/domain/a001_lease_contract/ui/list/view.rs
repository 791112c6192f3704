use contracts::dashboards::d100_lease_summary::{lease_state, LeaseState};
use contracts::domain::a001_lease_contract::Contract;
use leptos::prelude::*;

use super::state::ContractListState;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_date_cell;
use crate::shared::i18n;

/// Таблица договоров. Строка с отслеживаемой задачей извлечения (или со
/// статусом-сентинелом "processing") рендерится как плейсхолдер обработки.
#[component]
pub fn ContractTable(
    state: RwSignal<ContractListState>,
    on_open_details: Callback<Contract>,
) -> impl IntoView {
    let ctx = use_app_context();
    let lang = ctx.lang;
    let poller = ctx.poller;

    view! {
        <div class="card">
            <h2 class="section-title">{move || i18n::text(lang.get()).contract_overview}</h2>
            <div class="table-scroll">
                <table class="contract-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Location"</th>
                            <th>"Status"</th>
                            <th>"Payment Period"</th>
                            <th>"Scheme"</th>
                            <th>"Monthly Cost"</th>
                            <th>"Lease Due Date"</th>
                            <th>"Detail"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let st = state.get();
                            // До первого успешного fetch пустой список значит
                            // "ещё грузимся", а не "договоров нет"
                            if !st.is_loaded {
                                return view! {
                                    <tr>
                                        <td colspan="8" class="contract-table__empty">
                                            {i18n::text(lang.get()).loading_contracts}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            if st.contracts.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="8" class="contract-table__empty">
                                            {i18n::text(lang.get()).no_contracts}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }

                            let today = chrono::Local::now().date_naive();
                            st.contracts
                                .into_iter()
                                .map(|contract| {
                                    if poller.is_active(contract.id) || contract.is_processing() {
                                        return view! {
                                            <tr>
                                                <td colspan="8" class="contract-table__empty">
                                                    "Processing " {contract.location_name.clone()}
                                                    <span class="loader"></span>
                                                </td>
                                            </tr>
                                        }
                                        .into_any();
                                    }

                                    let (label, class) =
                                        match lease_state(contract.start(), contract.end(), today) {
                                            LeaseState::Active => ("Active", "status status--active"),
                                            LeaseState::DueSoon => ("Due Soon", "status status--due-soon"),
                                            LeaseState::Inactive => ("Inactive", "status status--inactive"),
                                        };
                                    let end_cell = format_date_cell(contract.end_date.as_deref());
                                    let contract_for_details = contract.clone();

                                    view! {
                                        <tr class="contract-table__row">
                                            <td>{contract.id}</td>
                                            <td>{contract.location_name.clone()}</td>
                                            <td>
                                                <span class=class>{label}</span>
                                            </td>
                                            <td>{contract.payment_terms.clone().unwrap_or_default()}</td>
                                            <td>{contract.cooperation_type.clone().unwrap_or_default()}</td>
                                            <td>{contract.monthly_cost_amount.clone().unwrap_or_default()}</td>
                                            <td>{end_cell}</td>
                                            <td class="cell--center">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| on_open_details.run(contract_for_details.clone())
                                                >
                                                    "View Details"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
