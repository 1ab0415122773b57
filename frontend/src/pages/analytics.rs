use yew::prelude::*;

/// Placeholder analytics destination reached from the dashboard summary
/// card.
#[function_component(Analytics)]
pub fn analytics() -> Html {
    html! {
        <div class="analytics-page container mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12">
            <h1 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-4">{"Feedback Analytics"}</h1>
            <p class="text-gray-600">{"Analytics for your feedback requests will appear here."}</p>
        </div>
    }
}
