//! Опрос статуса задач извлечения
//!
//! На каждую отслеживаемую задачу — ровно один цикл опроса. Реестр и есть
//! множество "в полёте": цикл жив, пока его id состоит в реестре, поэтому
//! инвариант 1:1 (нет осиротевших таймеров, нет id без таймера) держится
//! конструкцией, а не дисциплиной вызовов.

use std::collections::BTreeSet;

use contracts::usecases::u101_upload_document::LeaseJobStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Период опроса статуса задачи
pub const POLL_PERIOD_MS: u32 = 5_000;

/// Терминальный исход опроса одной задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Completed,
    Failed,
}

/// Явный реестр отслеживаемых задач. Множество живёт в сигнале: реестр
/// можно раздавать через context и читать из view (строка "processing"
/// реагирует на регистрацию/снятие без отдельной подписки).
#[derive(Clone, Copy)]
pub struct PollRegistry {
    inner: RwSignal<BTreeSet<i64>>,
}

impl PollRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(BTreeSet::new()),
        }
    }

    /// Взять задачу на отслеживание. Повторная регистрация того же id —
    /// no-op, возвращает false.
    pub fn register(&self, lease_id: i64) -> bool {
        self.inner
            .try_update(|ids| ids.insert(lease_id))
            .unwrap_or(false)
    }

    /// Снять задачу с отслеживания; её цикл опроса завершится на
    /// ближайшем тике
    pub fn cancel(&self, lease_id: i64) -> bool {
        self.inner
            .try_update(|ids| ids.remove(&lease_id))
            .unwrap_or(false)
    }

    pub fn is_active(&self, lease_id: i64) -> bool {
        self.inner.with(|ids| ids.contains(&lease_id))
    }

    pub fn active_ids(&self) -> Vec<i64> {
        self.inner.with(|ids| ids.iter().copied().collect())
    }
}

impl Default for PollRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Запустить цикл опроса для задачи. Идемпотентно: если id уже
/// отслеживается, второй цикл не создаётся.
///
/// Цикл крутится без бэкоффа и лимита попыток до терминального статуса;
/// ошибка транспорта на тике логируется и не останавливает опрос.
pub fn poll_lease(
    registry: PollRegistry,
    lease_id: i64,
    period_ms: u32,
    on_outcome: impl Fn(i64, PollOutcome) + 'static,
) {
    if !registry.register(lease_id) {
        return;
    }

    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(period_ms).await;

            // Снят извне между тиками — выходим молча
            if !registry.is_active(lease_id) {
                break;
            }

            match api::get_lease_status(lease_id).await {
                Ok(resp) => match resp.status {
                    LeaseJobStatus::Completed => {
                        registry.cancel(lease_id);
                        on_outcome(lease_id, PollOutcome::Completed);
                        break;
                    }
                    LeaseJobStatus::Failed => {
                        registry.cancel(lease_id);
                        on_outcome(lease_id, PollOutcome::Failed);
                        break;
                    }
                    // pending и незнакомые статусы — ждём следующий тик
                    LeaseJobStatus::Pending | LeaseJobStatus::Unknown => {}
                },
                Err(e) => {
                    log::error!("Error checking lease {} status: {}", lease_id, e);
                }
            }
        }
    });
}
