use contracts::domain::a001_lease_contract::{Contract, ContractFile, InfoValue};
use leptos::prelude::*;

use crate::shared::date_utils::format_date_cell;

fn sorted_desc_by_upload(files: Vec<ContractFile>) -> Vec<ContractFile> {
    let mut files = files;
    // Свежие документы сверху; файлы без даты загрузки — в конце
    files.sort_by(|a, b| b.uploaded_at_datetime().cmp(&a.uploaded_at_datetime()));
    files
}

fn file_link(file_url: Option<String>) -> AnyView {
    match file_url {
        Some(url) => view! {
            <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                "Open File"
            </a>
        }
        .into_any(),
        None => view! { <span>"-"</span> }.into_any(),
    }
}

/// Карточка локации: реквизиты договора и два списка документов
/// (соглашения и счета), каждый отсортирован по дате загрузки по убыванию
#[component]
pub fn LocationModal(
    contract: Contract,
    on_close: Callback<()>,
    on_open_info: Callback<InfoValue>,
) -> impl IntoView {
    let (invoices, agreements): (Vec<_>, Vec<_>) = contract
        .contract_files
        .iter()
        .cloned()
        .partition(|f| f.is_invoice());
    let agreements = sorted_desc_by_upload(agreements);
    let invoices = sorted_desc_by_upload(invoices);

    let info_button = move |info: Option<InfoValue>| {
        view! {
            <button
                class="btn btn--primary"
                on:click=move |_| on_open_info.run(info.clone().unwrap_or_default())
            >
                "Open Info"
            </button>
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--wide">
                <button class="modal__close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <h3 class="modal__title">{contract.location_name.clone()}</h3>

                <div class="modal__summary">
                    <p>
                        <strong>"Address: "</strong>
                        {contract.location_address.clone().unwrap_or_default()}
                    </p>
                    <p>
                        <strong>"Scheme: "</strong>
                        {contract.cooperation_type.clone().unwrap_or_default()}
                    </p>
                    <p>
                        <strong>"Payment Period: "</strong>
                        {contract.payment_terms.clone().unwrap_or_default()}
                    </p>
                </div>

                <div class="modal__body">
                    <h4 class="section-title">"Agreements"</h4>
                    <table class="contract-table">
                        <thead>
                            <tr>
                                <th>"Document Date"</th>
                                <th>"Lease Start"</th>
                                <th>"Lease End"</th>
                                <th>"Monthly Cost"</th>
                                <th>"Security Deposit"</th>
                                <th>"More Info"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {agreements
                                .into_iter()
                                .map(|file| {
                                    view! {
                                        <tr>
                                            <td>{format_date_cell(file.uploaded_at.as_deref())}</td>
                                            <td>{format_date_cell(file.start_date.as_deref())}</td>
                                            <td>{format_date_cell(file.end_date.as_deref())}</td>
                                            <td>{file.monthly_cost_amount.clone().unwrap_or_default()}</td>
                                            <td>{file.security_deposit_amount.clone().unwrap_or_default()}</td>
                                            <td class="cell--center">{info_button(file.additional_info.clone())}</td>
                                            <td class="cell--center">{file_link(file.file_url.clone())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>

                    <h4 class="section-title">"Invoices"</h4>
                    <table class="contract-table">
                        <thead>
                            <tr>
                                <th>"Invoice Date"</th>
                                <th>"Payment Due"</th>
                                <th>"Amount"</th>
                                <th>"More Info"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {invoices
                                .into_iter()
                                .map(|file| {
                                    view! {
                                        <tr>
                                            <td>{format_date_cell(file.uploaded_at.as_deref())}</td>
                                            <td>{format_date_cell(file.last_invoice_due.as_deref())}</td>
                                            <td>{file.last_invoice_amount.clone().unwrap_or_default()}</td>
                                            <td class="cell--center">{info_button(file.additional_info.clone())}</td>
                                            <td class="cell--center">{file_link(file.file_url.clone())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(uploaded_at: Option<&str>) -> ContractFile {
        let mut f: ContractFile =
            serde_json::from_str(r#"{ "document_type": "agreement" }"#).unwrap();
        f.uploaded_at = uploaded_at.map(str::to_string);
        f
    }

    #[test]
    fn test_sorted_desc_with_missing_dates_last() {
        let files = vec![
            file(Some("2024-01-10T08:00:00")),
            file(None),
            file(Some("2024-06-01T08:00:00")),
        ];
        let sorted = sorted_desc_by_upload(files);
        assert_eq!(sorted[0].uploaded_at.as_deref(), Some("2024-06-01T08:00:00"));
        assert_eq!(sorted[1].uploaded_at.as_deref(), Some("2024-01-10T08:00:00"));
        assert_eq!(sorted[2].uploaded_at, None);
    }
}
