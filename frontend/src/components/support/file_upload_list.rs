//! Uploaded attachment rows.
//!
//! One row per uploaded file with a remove control. Removing issues a
//! DELETE against the helpdesk; only a confirmed 204 removes the entry,
//! reported back to the form controller through `on_removed` so the single
//! owner of the file list drops it. Failed deletions are logged and
//! otherwise ignored.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html, Properties};

use common::model::attachment::UploadedFile;
use common::model::context::SupportConfig;
use common::requests::delete_endpoint;

#[derive(Properties, PartialEq, Clone)]
pub struct FileUploadListProps {
    pub file_list: Vec<UploadedFile>,
    pub config: SupportConfig,
    /// Emitted with the file token once the helpdesk confirmed deletion.
    pub on_removed: Callback<String>,
}

pub enum Msg {
    Remove(String),
}

pub struct FileUploadList;

impl Component for FileUploadList {
    type Message = Msg;
    type Properties = FileUploadListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FileUploadList
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Remove(token) => {
                let config = ctx.props().config.clone();
                let on_removed = ctx.props().on_removed.clone();
                spawn_local(async move {
                    let url = delete_endpoint(&config, &token);
                    let mut request = Request::delete(&url)
                        .header("Content-Type", "application/json;charset=UTF-8");
                    if let Some(access_token) = &config.access_token {
                        request =
                            request.header("Authorization", &format!("Bearer {}", access_token));
                    }

                    match request.send().await {
                        Ok(response) if response.status() == 204 => on_removed.emit(token),
                        Ok(response) => {
                            error!(format!(
                                "attachment delete rejected with status {}",
                                response.status()
                            ));
                        }
                        Err(err) => {
                            error!(format!("attachment delete failed: {}", err));
                        }
                    }
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                {
                    for ctx.props().file_list.iter().map(|file| {
                        let token = file.file_token.clone();
                        html! {
                            <div key={file.file_token.clone()} class="row">
                                <div class="col-sm-12">
                                    <span class="file-name">{ &file.file_name }</span>
                                    <span class="file-action remove-upload">
                                        <button onclick={link.callback(move |_| Msg::Remove(token.clone()))}>
                                            {"Remove file"}
                                        </button>
                                    </span>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        }
    }
}
