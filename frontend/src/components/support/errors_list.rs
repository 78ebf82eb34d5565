//! Validation error list.
//!
//! Renders nothing while the list is empty. When errors first appear the
//! viewport is scrolled to the top so they are visible even if the user was
//! further down the form.

use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorsListProps {
    pub error_list: Vec<String>,
}

pub struct ErrorsList {
    /// Whether the previous render showed errors. Used to scroll only when
    /// a fresh batch appears, not on every re-render.
    shown: bool,
}

impl Component for ErrorsList {
    type Message = ();
    type Properties = ErrorsListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { shown: false }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let errors = &ctx.props().error_list;
        if errors.is_empty() {
            return html! {};
        }

        html! {
            <div class="col-sm-12">
                <div class="alert alert-danger" role="alert">
                    <strong>{"Please fix the following errors:"}</strong>
                    <ul>
                        { for errors.iter().map(|error| html! { <li>{ error }</li> }) }
                    </ul>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let has_errors = !ctx.props().error_list.is_empty();
        if has_errors && !self.shown {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        self.shown = has_errors;
    }
}
