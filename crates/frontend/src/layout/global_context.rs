use leptos::prelude::*;

use crate::shared::i18n::Lang;
use crate::usecases::u101_upload_document::poller::PollRegistry;

/// Глобальное состояние приложения: язык интерфейса и реестр
/// отслеживаемых задач извлечения. Раздаётся через context из `App`.
#[derive(Clone)]
pub struct AppGlobalContext {
    pub lang: RwSignal<Lang>,
    pub poller: PollRegistry,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            lang: RwSignal::new(Lang::En),
            poller: PollRegistry::new(),
        }
    }

    pub fn toggle_lang(&self) {
        self.lang.update(|lang| *lang = lang.toggled());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
