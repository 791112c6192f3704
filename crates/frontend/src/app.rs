use crate::dashboards::d100_lease_summary::ui::DashboardPage;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext (language + poll registry) to the whole app.
    provide_context(AppGlobalContext::new());

    view! {
        <DashboardPage />
    }
}
