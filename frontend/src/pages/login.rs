use yew::prelude::*;

/// Placeholder login destination; the credential flow lives behind the
/// backend and is wired up separately.
#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div class="login-page min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 via-white to-indigo-50">
            <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 sm:p-8 text-center max-w-md">
                <h1 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-4">{"Sign in"}</h1>
                <p class="text-gray-600">{"Sign in to see your feedback dashboard."}</p>
            </div>
        </div>
    }
}
