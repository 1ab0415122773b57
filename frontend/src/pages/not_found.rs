use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page container mx-auto px-4 py-8 text-center">
            <h1 class="text-2xl font-bold text-gray-900 mb-2">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600">{"The page you're looking for doesn't exist."}</p>
        </div>
    }
}
