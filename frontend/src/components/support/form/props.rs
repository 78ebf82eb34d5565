//! Properties for the support form: the contract object supplied by the
//! hosting page (signed-in user, login redirect, help-center URL, helpdesk
//! configuration).

use yew::prelude::*;

use common::model::context::PageContext;

#[derive(Properties, PartialEq, Clone)]
pub struct SupportFormProps {
    pub context: PageContext,
}
