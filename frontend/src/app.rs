//! Root component: reads the page context embedded by the hosting
//! application and mounts the support form with it.
//!
//! The host page embeds the serialized `PageContext` in a
//! `<script type="application/json" id="support-context">` block. If the
//! block is missing or malformed the form cannot work at all, so nothing is
//! rendered and a diagnostic goes to the console.

use gloo_console::error;
use yew::{html, Component, Context, Html};

use common::model::context::PageContext;

use crate::components::support::form::SupportForm;

pub struct App {
    context: Option<PageContext>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            context: read_page_context(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.context {
            Some(context) => html! {
                <div>
                    <SupportForm context={context.clone()} />
                </div>
            },
            None => html! {},
        }
    }
}

/// Reads and parses the `PageContext` JSON block from the host page.
fn read_page_context() -> Option<PageContext> {
    let document = web_sys::window()?.document()?;
    let node = document.get_element_by_id("support-context")?;
    let raw = node.text_content()?;

    match serde_json::from_str(&raw) {
        Ok(context) => Some(context),
        Err(err) => {
            error!(format!("support context is malformed: {}", err));
            None
        }
    }
}
