//! Update function for the support form controller.
//!
//! Single Elm-style `update`: receives the current state, the context, and
//! a `Msg`, mutates the state, and returns whether the view should
//! re-render. All HTTP work happens in futures or XHR callbacks that
//! re-enter through messages, so this is the only place state changes.
//!
//! The attachment upload uses a raw `XmlHttpRequest` because only XHR
//! exposes upload byte-progress events; the ticket POST and attachment
//! DELETE go through `gloo_net`. Upload callbacks carry the file name of
//! the request they were attached to, and terminal handlers only clear the
//! in-progress marker when it still refers to that request.

use gloo_console::error;
use gloo_file::{futures::read_as_bytes, Blob};
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ProgressEvent, XmlHttpRequest};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::attachment::UploadedFile;
use common::model::context::SupportConfig;
use common::requests::{ticket_endpoint, upload_endpoint, TicketRequest, UploadResponse};

use super::helpers::{validate_attachment, validate_submission, SubmissionInput};
use super::messages::Msg;
use super::state::SupportForm;

/// Central update function for the controller.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render, `false` when only side effects occur.
pub fn update(component: &mut SupportForm, ctx: &Context<SupportForm>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateSubject(value) => {
            component.subject = value;
            true
        }
        Msg::UpdateMessage(value) => {
            component.message = value;
            true
        }
        Msg::UpdateEmail(value) => {
            component.email = value;
            true
        }
        Msg::UpdateCourse(value) => {
            component.course = value;
            true
        }
        Msg::FileSelected(file) => {
            component.error_list.clear();

            let file_name = file.name();
            if let Err(message) = validate_attachment(&file_name, file.size()) {
                component.error_list.push(message);
                return true;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_bytes(&Blob::from(file)).await {
                    Ok(bytes) => link.send_message(Msg::FileRead { file_name, bytes }),
                    Err(err) => error!(format!("could not read {}: {}", file_name, err)),
                }
            });
            true
        }
        Msg::FileRead { file_name, mut bytes } => {
            // A newly selected file supersedes any transfer still in flight.
            if let Some(previous) = component.current_request.take() {
                previous.abort().ok();
            }

            let config = ctx.props().context.config.clone();
            let request = match build_upload_request(ctx.link(), &config, &file_name) {
                Ok(request) => request,
                Err(err) => {
                    error!(format!("could not start upload: {:?}", err));
                    return false;
                }
            };

            // In-progress state is set after the bytes are in memory and
            // before the request goes out.
            component.file_in_progress = Some(file_name);
            component.upload_progress = 0.0;
            component.current_request = Some(request.clone());

            if let Err(err) = request.send_with_opt_u8_array(Some(bytes.as_mut_slice())) {
                error!(format!("upload send failed: {:?}", err));
                component.file_in_progress = None;
                component.current_request = None;
            }
            true
        }
        Msg::UploadProgress { loaded, total } => {
            component.upload_progress = if total > 0.0 {
                loaded / total * 100.0
            } else {
                0.0
            };
            true
        }
        Msg::UploadFinished { file_name, token } => {
            if component.file_in_progress.as_deref() == Some(file_name.as_str()) {
                component.file_in_progress = None;
                component.current_request = None;
                component.upload_progress = 0.0;
            }
            component.file_list.push(UploadedFile {
                file_name,
                file_token: token,
            });
            true
        }
        Msg::UploadFailed { file_name, status } => {
            error!(format!("upload of {} rejected with status {}", file_name, status));
            if component.file_in_progress.as_deref() == Some(file_name.as_str()) {
                component.file_in_progress = None;
                component.current_request = None;
            }
            true
        }
        Msg::UploadAborted { file_name } => {
            if component.file_in_progress.as_deref() == Some(file_name.as_str()) {
                component.file_in_progress = None;
                component.current_request = None;
            }
            true
        }
        Msg::FileRemoved(token) => {
            component.file_list.retain(|file| file.file_token != token);
            true
        }
        Msg::Submit => {
            component.error_list.clear();
            component.invalid_fields.clear();

            let context = &ctx.props().context;
            let requester = match &context.user {
                Some(user) => user.email.clone(),
                None => component.email.clone(),
            };
            let input = SubmissionInput {
                subject: component.subject.clone(),
                body: component.message.clone(),
                requester,
                course: component.course.clone(),
            };

            let failures = validate_submission(&input);
            if !failures.is_empty() {
                for (field, message) in failures {
                    component.invalid_fields.insert(field);
                    component.error_list.push(message);
                }
                return true;
            }

            let payload = TicketRequest::assemble(
                input.subject,
                input.body,
                input.requester,
                input.course,
                &component.file_list,
                &context.config,
            );
            let config = context.config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut request = Request::post(&ticket_endpoint(&config))
                    .header("Content-Type", "application/json;charset=UTF-8");
                if let Some(token) = &config.access_token {
                    request = request.header("Authorization", &format!("Bearer {}", token));
                }
                let request = match request.json(&payload) {
                    Ok(request) => request,
                    Err(err) => {
                        error!(format!("ticket payload did not serialize: {}", err));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.status() == 201 => {
                        link.send_message(Msg::TicketSubmitted);
                    }
                    Ok(response) => {
                        error!(format!(
                            "ticket creation rejected with status {}",
                            response.status()
                        ));
                    }
                    Err(err) => {
                        error!(format!("ticket creation failed: {}", err));
                    }
                }
            });
            true
        }
        Msg::TicketSubmitted => {
            // TODO: replace the alert once a dedicated success view exists.
            if let Some(window) = web_sys::window() {
                window
                    .alert_with_message("Your request was submitted successfully.")
                    .ok();
            }
            false
        }
    }
}

/// Builds the attachment upload request: opens the XHR, attaches the bearer
/// header when one is configured, and wires the progress, completion, error,
/// and abort callbacks back into the component as messages. The caller sets
/// the in-progress state and then sends the body.
fn build_upload_request(
    link: &Scope<SupportForm>,
    config: &SupportConfig,
    file_name: &str,
) -> Result<XmlHttpRequest, JsValue> {
    let request = XmlHttpRequest::new()?;
    request.open_with_async("POST", &upload_endpoint(config, file_name), true)?;
    if let Some(token) = &config.access_token {
        request.set_request_header("Authorization", &format!("Bearer {}", token))?;
    }
    request.set_request_header("Content-Type", "application/octet-stream")?;

    let progress_link = link.clone();
    let onprogress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() {
            progress_link.send_message(Msg::UploadProgress {
                loaded: event.loaded(),
                total: event.total(),
            });
        }
    });
    request
        .upload()?
        .set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
    onprogress.forget();

    let done_link = link.clone();
    let done_request = request.clone();
    let done_file_name = file_name.to_string();
    let onreadystatechange = Closure::<dyn FnMut()>::new(move || {
        if done_request.ready_state() != XmlHttpRequest::DONE {
            return;
        }
        let status = done_request.status().unwrap_or(0);
        // Status 0 means the transfer never completed; onerror and onabort
        // cover those.
        if status == 0 {
            return;
        }
        if status == 201 {
            let body = done_request
                .response_text()
                .ok()
                .flatten()
                .unwrap_or_default();
            match serde_json::from_str::<UploadResponse>(&body) {
                Ok(response) => done_link.send_message(Msg::UploadFinished {
                    file_name: done_file_name.clone(),
                    token: response.upload.token,
                }),
                Err(err) => {
                    error!(format!("upload response unreadable: {}", err));
                    done_link.send_message(Msg::UploadFailed {
                        file_name: done_file_name.clone(),
                        status,
                    });
                }
            }
        } else {
            done_link.send_message(Msg::UploadFailed {
                file_name: done_file_name.clone(),
                status,
            });
        }
    });
    request.set_onreadystatechange(Some(onreadystatechange.as_ref().unchecked_ref()));
    onreadystatechange.forget();

    let error_link = link.clone();
    let error_file_name = file_name.to_string();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        error_link.send_message(Msg::UploadFailed {
            file_name: error_file_name.clone(),
            status: 0,
        });
    });
    request.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let abort_link = link.clone();
    let abort_file_name = file_name.to_string();
    let onabort = Closure::<dyn FnMut()>::new(move || {
        abort_link.send_message(Msg::UploadAborted {
            file_name: abort_file_name.clone(),
        });
    });
    request.set_onabort(Some(onabort.as_ref().unchecked_ref()));
    onabort.forget();

    Ok(request)
}
