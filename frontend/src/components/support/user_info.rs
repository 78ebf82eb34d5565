//! Requester identity panels: one variant for a signed-in user, one with a
//! login link for anonymous visitors. Display only, no logic.

use yew::{html, Component, Context, Html, Properties};

use common::model::context::UserInfo;

#[derive(Properties, PartialEq, Clone)]
pub struct LoggedInUserProps {
    pub user: UserInfo,
}

pub struct LoggedInUser;

impl Component for LoggedInUser {
    type Message = ();
    type Properties = LoggedInUserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoggedInUser
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &ctx.props().user;
        html! {
            <div class="row">
                <div class="col-sm-12">
                    <div class="form-group user-info">
                        <label>{"Requester"}</label>
                        <p>
                            {
                                match &user.username {
                                    Some(username) => format!("{} ({})", username, user.email),
                                    None => user.email.clone(),
                                }
                            }
                        </p>
                    </div>
                </div>
            </div>
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoggedOutUserProps {
    pub login_url: String,
}

pub struct LoggedOutUser;

impl Component for LoggedOutUser {
    type Message = ();
    type Properties = LoggedOutUserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoggedOutUser
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="row">
                <div class="col-sm-12">
                    <p>
                        <a href={ctx.props().login_url.clone()}>
                            {"Sign in to your account for faster help."}
                        </a>
                    </p>
                </div>
            </div>
        }
    }
}
