//! Browser test support: per-test mounting with guaranteed teardown and a
//! few DOM assertion helpers. Tests run in a real headless browser via
//! `wasm-bindgen-test`, so browser observer APIs need no stubbing here.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew::AppHandle;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// A component tree mounted into a fresh container under `<body>`.
///
/// Dropping the mount destroys the tree and removes the container, so every
/// test cleans up after itself regardless of pass or fail.
pub struct TestMount<C: BaseComponent> {
    root: Element,
    handle: Option<AppHandle<C>>,
}

impl<C: BaseComponent> TestMount<C> {
    pub fn mount(props: C::Properties) -> Self {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let handle = yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();

        Self {
            root,
            handle: Some(handle),
        }
    }

    /// Visible text of the mounted tree.
    pub fn text(&self) -> String {
        self.root.unchecked_ref::<HtmlElement>().inner_text()
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.root.query_selector(selector).unwrap()
    }

    /// Simulate a user click on the first element matching `selector`.
    pub fn click(&self, selector: &str) {
        let element = self
            .query(selector)
            .unwrap_or_else(|| panic!("no element matches selector {selector:?}"));
        element.unchecked_ref::<HtmlElement>().click();
    }
}

impl<C: BaseComponent> Drop for TestMount<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
        self.root.remove();
    }
}

/// Let Yew's scheduler commit pending renders and effects.
pub async fn next_tick() {
    TimeoutFuture::new(0).await;
}
