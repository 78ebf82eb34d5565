//! Support contact form controller: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and validation helpers.
//!
//! The controller owns all form state (uploaded files, the single in-flight
//! upload, the error list, controlled input values) and is the only place
//! that mutates it. Child components receive slices of that state as props
//! and report back through callbacks, so data flows one way.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SupportFormProps;
pub use state::SupportForm;

impl Component for SupportForm {
    type Message = Msg;
    type Properties = SupportFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SupportForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
