use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::i18n;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let lang = ctx.lang;

    let on_toggle = move |_| ctx.toggle_lang();

    view! {
        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
            <div>
                <h1 class="header__title">{move || i18n::text(lang.get()).title}</h1>
                <p class="header__tagline">{move || i18n::text(lang.get()).tagline}</p>
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=on_toggle>
                "🌐 "
                {move || i18n::text(lang.get()).translate}
            </Button>
        </Flex>
    }
}
