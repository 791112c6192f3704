use leptos::prelude::*;

use crate::domain::a001_lease_contract::ui::list::ContractListState;
use crate::layout::global_context::use_app_context;
use crate::shared::i18n;
use crate::shared::number_format::format_idr;

fn warning_list(warnings: Vec<String>, empty_text: &'static str, modifier: &'static str) -> AnyView {
    if warnings.is_empty() {
        return view! { <p class="muted">"✅ " {empty_text}</p> }.into_any();
    }
    view! {
        <ul class="warning-list">
            {warnings
                .into_iter()
                .map(|warning| {
                    view! { <li class=format!("warning-box {}", modifier)>{warning}</li> }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

/// Две сводные карточки: счета активных договоров и статусы аренды
#[component]
pub fn SummaryCards(state: RwSignal<ContractListState>) -> impl IntoView {
    let ctx = use_app_context();
    let lang = ctx.lang;

    view! {
        <div class="cards-grid">
            <div class="card card--centered">
                <h2 class="section-title section-title--alert">
                    "⚠️ " {move || i18n::text(lang.get()).total_overdue}
                </h2>
                <p class="metric metric--large">
                    {move || format!("IDR {}", format_idr(state.get().metrics.total_invoice_amount))}
                </p>
                <p>
                    "📅 "
                    <strong>{move || i18n::text(lang.get()).latest_payment_deadline}": "</strong>
                    <span class="metric--due">
                        {move || {
                            state
                                .get()
                                .metrics
                                .closest_invoice_due
                                .map(|due| due.to_string())
                                .unwrap_or_else(|| {
                                    i18n::text(lang.get()).no_upcoming_invoices.to_string()
                                })
                        }}
                    </span>
                </p>
                {move || warning_list(
                    state.get().metrics.invoice_warnings,
                    i18n::text(lang.get()).no_invoice_alerts,
                    "warning-box--soon",
                )}
            </div>

            <div class="card">
                <h2 class="section-title">"📜 Lease Status Summary"</h2>
                <div class="status-grid">
                    <div class="status-chip status-chip--active">
                        "🟢 " <strong>"Active: "</strong>
                        {move || state.get().metrics.active_leases}
                    </div>
                    <div class="status-chip status-chip--due-soon">
                        "🟡 " <strong>"Due Soon: "</strong>
                        {move || state.get().metrics.due_soon_leases}
                    </div>
                    <div class="status-chip status-chip--overdue">
                        "🔴 " <strong>"Overdue: "</strong>
                        {move || state.get().metrics.overdue_leases}
                    </div>
                </div>
                <h3 class="section-title section-title--spaced">"⚠️ Upcoming & Overdue Leases"</h3>
                {move || warning_list(
                    state.get().metrics.lease_warnings,
                    i18n::text(lang.get()).no_lease_alerts,
                    "warning-box--error",
                )}
            </div>
        </div>
    }
}
