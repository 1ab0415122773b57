use crate::components::feedback_summary::FeedbackSummaryCard;
use crate::session::SessionContext;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");

    let greeting = session
        .state
        .employee
        .as_ref()
        .map(|employee| format!("Welcome back, {}", employee.name))
        .unwrap_or_else(|| "Welcome back".to_string());

    let on_sign_out = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_| sign_out.emit(()))
    };

    html! {
        <div class="dashboard-page container mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12">
            <div class="flex items-center justify-between mb-6 sm:mb-8">
                <h1 class="text-2xl sm:text-3xl font-bold text-gray-900">
                    {greeting}
                </h1>
                <button
                    onclick={on_sign_out}
                    class="text-sm font-semibold text-gray-500 hover:text-gray-700 transition-colors duration-200"
                >
                    {"Sign out"}
                </button>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 sm:gap-8">
                <FeedbackSummaryCard />
            </div>
        </div>
    }
}
