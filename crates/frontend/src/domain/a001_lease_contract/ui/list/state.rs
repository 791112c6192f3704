use contracts::dashboards::d100_lease_summary::LeaseMetrics;
use contracts::domain::a001_lease_contract::Contract;
use leptos::prelude::*;

use crate::domain::a001_lease_contract::api;

/// Хранилище списка договоров и производных метрик.
///
/// Обновляется только целиком: каждый fetch заменяет список и пересчитывает
/// метрики по одному консистентному снимку ответа.
#[derive(Clone, Debug, Default)]
pub struct ContractListState {
    pub contracts: Vec<Contract>,
    pub metrics: LeaseMetrics,

    // Был ли хотя бы один успешный fetch
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<ContractListState> {
    RwSignal::new(ContractListState::default())
}

/// Перечитать список с бэкенда и пересчитать метрики.
/// Ошибка транспорта/разбора логируется, прежнее состояние сохраняется.
/// `is_loaded` взводится только успешным fetch-ем: таблица по нему
/// отличает "ещё грузимся" от "договоров нет".
pub async fn reload(state: RwSignal<ContractListState>) {
    match api::get_contracts().await {
        Ok(contracts) => {
            let today = chrono::Local::now().date_naive();
            let metrics = LeaseMetrics::compute(&contracts, today);
            state.set(ContractListState {
                contracts,
                metrics,
                is_loaded: true,
            });
        }
        Err(e) => {
            log::error!("Failed to load contracts: {}", e);
        }
    }
}
