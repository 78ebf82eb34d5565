//! In-progress upload indicator. Purely presentational: shows the file name
//! and a bar whose fill tracks the transferred-byte percentage reported by
//! the form controller.

use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct UploadProgressProps {
    pub file_name: String,
    /// Completion in percent, 0.0 to 100.0.
    pub percent: f64,
}

pub struct UploadProgress;

impl Component for UploadProgress {
    type Message = ();
    type Properties = UploadProgressProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadProgress
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let width = format!("width: {:.0}%;", props.percent.clamp(0.0, 100.0));

        html! {
            <div class="row">
                <div class="col-sm-12">
                    <span class="file-name">{ &props.file_name }</span>
                    <div class="progress">
                        <div
                            class="progress-bar progress-bar-striped"
                            role="progressbar"
                            style={width}
                        />
                    </div>
                </div>
            </div>
        }
    }
}
