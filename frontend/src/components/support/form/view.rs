//! View rendering for the support form.
//!
//! Layout follows the hosted page: heading, error list, help-center hint,
//! requester panel, subject and message fields, the optional attachment
//! block (picker, in-progress bar, uploaded rows), course control, and the
//! submit button. Inputs are controlled; their values live in the component
//! state and reach the submission handler as one structured value.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::context::PageContext;

use crate::components::support::errors_list::ErrorsList;
use crate::components::support::file_upload_list::FileUploadList;
use crate::components::support::upload_progress::UploadProgress;
use crate::components::support::user_info::{LoggedInUser, LoggedOutUser};

use super::helpers::Field;
use super::messages::Msg;
use super::state::SupportForm;

/// Main view function for the support form.
pub fn view(component: &SupportForm, ctx: &Context<SupportForm>) -> Html {
    let link = ctx.link();
    let context = &ctx.props().context;

    html! {
        <div class="contact-us-wrapper">
            <div class="row">
                <div class="col-sm-12">
                    <h2>{"Contact Us"}</h2>
                </div>
            </div>

            <div class="row form-errors">
                <ErrorsList error_list={component.error_list.clone()} />
            </div>

            { build_help_row(context) }
            { build_user_panel(context) }
            { build_subject_group(component, link) }
            { build_message_group(component, link) }
            { build_email_group(component, link, context) }
            { build_course_group(component, link, context) }
            { build_file_container(component, link, context) }

            <div class="row">
                <div class="col-sm-12">
                    <button
                        class="btn btn-primary btn-submit"
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        {"Submit"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_help_row(context: &PageContext) -> Html {
    html! {
        <>
            <div class="row">
                <div class="col-sm-12">
                    <p>{"Your question may have already been answered."}</p>
                </div>
            </div>
            <div class="row">
                <div class="col-sm-12">
                    <a
                        href={context.marketing_url.clone()}
                        class="btn btn-secondary help-button"
                    >
                        {"Visit the Help Center"}
                    </a>
                </div>
            </div>
        </>
    }
}

fn build_user_panel(context: &PageContext) -> Html {
    match &context.user {
        Some(user) => html! { <LoggedInUser user={user.clone()} /> },
        None => html! { <LoggedOutUser login_url={context.login_url.clone()} /> },
    }
}

fn build_subject_group(component: &SupportForm, link: &Scope<SupportForm>) -> Html {
    html! {
        <div class="row">
            <div class="col-sm-12">
                <div class={group_class(component, Field::Subject)}>
                    <label for="subject">{"Subject"}</label>
                    <input
                        type="text"
                        class="form-control"
                        id="subject"
                        value={component.subject.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateSubject(input.value())
                        })}
                    />
                </div>
            </div>
        </div>
    }
}

fn build_message_group(component: &SupportForm, link: &Scope<SupportForm>) -> Html {
    html! {
        <div class="row">
            <div class="col-sm-12">
                <div class={group_class(component, Field::Message)}>
                    <label for="message">{"Message"}</label>
                    <p class="message-desc" id="message-desc">
                        {"The more you tell us, the more quickly and helpfully we can respond!"}
                    </p>
                    <textarea
                        aria-describedby="message-desc"
                        class="form-control"
                        rows="7"
                        id="message"
                        value={component.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateMessage(input.value())
                        })}
                    />
                </div>
            </div>
        </div>
    }
}

/// Free-text e-mail field, shown only to anonymous visitors; a signed-in
/// user's address comes from the page context.
fn build_email_group(
    component: &SupportForm,
    link: &Scope<SupportForm>,
    context: &PageContext,
) -> Html {
    if context.user.is_some() {
        return html! {};
    }

    html! {
        <div class="row">
            <div class="col-sm-12">
                <div class={group_class(component, Field::Email)}>
                    <label for="email">{"Email Address"}</label>
                    <input
                        type="email"
                        class="form-control"
                        id="email"
                        value={component.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateEmail(input.value())
                        })}
                    />
                </div>
            </div>
        </div>
    }
}

/// Course identifier: a selection control when the signed-in user has
/// enrolled courses, a free-text field otherwise.
fn build_course_group(
    component: &SupportForm,
    link: &Scope<SupportForm>,
    context: &PageContext,
) -> Html {
    let courses = context
        .user
        .as_ref()
        .map(|user| user.courses.clone())
        .unwrap_or_default();

    let control = if courses.is_empty() {
        html! {
            <input
                type="text"
                class="form-control"
                id="course"
                value={component.course.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateCourse(input.value())
                })}
            />
        }
    } else {
        html! {
            <select
                class="form-control"
                id="course"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::UpdateCourse(select.value())
                })}
            >
                <option value="" selected={component.course.is_empty()}>
                    {"Select a course"}
                </option>
                {
                    for courses.iter().map(|course| html! {
                        <option
                            value={course.clone()}
                            selected={component.course == *course}
                        >
                            { course }
                        </option>
                    })
                }
            </select>
        }
    };

    html! {
        <div class="row">
            <div class="col-sm-12">
                <div class="form-group">
                    <label for="course">{"Course"}</label>
                    { control }
                </div>
            </div>
        </div>
    }
}

fn build_file_container(
    component: &SupportForm,
    link: &Scope<SupportForm>,
    context: &PageContext,
) -> Html {
    html! {
        <div class="file-container">
            <div class="row">
                <div class="col-sm-12">
                    <div class="form-group">
                        <label for="attachment">
                            {"Add Attachment"}
                            <span>{" (Optional)"}</span>
                        </label>
                        <input
                            id="attachment"
                            class="file"
                            type="file"
                            accept=".pdf, .jpeg, .png, .jpg, .gif"
                            onchange={link.batch_callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let file = input.files().and_then(|files| files.get(0));
                                // Reset the input so the same file can be
                                // selected again after a removal.
                                input.set_value("");
                                file.map(Msg::FileSelected)
                            })}
                        />
                    </div>
                </div>
            </div>
            <div class="progress-container">
                {
                    match &component.file_in_progress {
                        Some(file_name) => html! {
                            <UploadProgress
                                file_name={file_name.clone()}
                                percent={component.upload_progress}
                            />
                        },
                        None => html! {},
                    }
                }
            </div>
            <div class="uploaded-files">
                {
                    if component.file_list.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <FileUploadList
                                file_list={component.file_list.clone()}
                                config={context.config.clone()}
                                on_removed={link.callback(Msg::FileRemoved)}
                            />
                        }
                    }
                }
            </div>
        </div>
    }
}

fn group_class(component: &SupportForm, field: Field) -> Classes {
    classes!(
        "form-group",
        component
            .invalid_fields
            .contains(&field)
            .then_some("has-error")
    )
}
