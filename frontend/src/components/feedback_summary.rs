use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Dashboard card summarizing feedback activity, with a jump to the
/// analytics page. Purely presentational; data lands here in a later
/// iteration.
#[function_component(FeedbackSummaryCard)]
pub fn feedback_summary_card() -> Html {
    let navigator = use_navigator().unwrap();

    let on_view_analytics = Callback::from(move |_| {
        navigator.push(&Route::Analytics);
    });

    html! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 sm:p-8">
            <div class="flex items-center justify-between mb-4 sm:mb-6">
                <h2 class="text-xl sm:text-2xl font-semibold text-gray-900">{"Feedback Summary"}</h2>
                <button
                    onclick={on_view_analytics}
                    class="inline-flex items-center justify-center px-4 py-2 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow hover:shadow-lg transition-all duration-200 active:scale-95"
                >
                    <span class="mr-2">{"📊"}</span>
                    {"View Analytics"}
                </button>
            </div>
            <p class="text-gray-600">{"Feedback insights will appear here."}</p>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::testing::{next_tick, TestMount};
    use wasm_bindgen_test::*;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::Router;

    #[derive(Properties, Clone, PartialEq)]
    struct CardHarnessProps {
        history: AnyHistory,
    }

    #[function_component(CardHarness)]
    fn card_harness(props: &CardHarnessProps) -> Html {
        html! {
            <Router history={props.history.clone()}>
                <FeedbackSummaryCard />
            </Router>
        }
    }

    #[wasm_bindgen_test]
    async fn card_shows_title_and_button() {
        let history = AnyHistory::from(MemoryHistory::new());
        let mount = TestMount::<CardHarness>::mount(CardHarnessProps { history });
        next_tick().await;

        assert!(mount.text().contains("Feedback Summary"));
        assert!(mount.text().contains("View Analytics"));
    }

    #[wasm_bindgen_test]
    async fn button_navigates_to_analytics_once() {
        let history = AnyHistory::from(MemoryHistory::new());
        let mount = TestMount::<CardHarness>::mount(CardHarnessProps {
            history: history.clone(),
        });
        next_tick().await;
        assert_eq!(history.location().path(), "/");

        mount.click("button");
        next_tick().await;

        assert_eq!(history.location().path(), "/analytics");
        // Initial entry plus exactly one push.
        assert_eq!(history.len(), 2);
    }
}
