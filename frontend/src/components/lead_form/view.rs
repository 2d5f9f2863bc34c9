//! View rendering for the lead form component.

use lead_common::form::{FormControl, TERMS_CONTROL_ID};
use lead_common::model::field::{FieldDescriptor, InputKind, TEXTAREA_ROWS};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadFormComponent;
use super::styles;

pub fn view(component: &LeadFormComponent, ctx: &Context<LeadFormComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <form id="web-to-lead-form" ref={component.form_ref.clone()} {onsubmit}>
                { for component.layout.controls().iter().map(|control| build_control(component, link, control)) }
            </form>
            <p id="error-message" class={styles::ERROR_MESSAGE}>{ component.error_message.clone() }</p>
        </div>
    }
}

fn build_control(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    control: &FormControl,
) -> Html {
    match control {
        FormControl::Field(field) => build_field(component, link, field),
        FormControl::Terms { href } => html! {
            <div class={styles::FIELD_GROUP}>
                <label class={styles::TERMS_LABEL}>
                    <input type="checkbox" id={TERMS_CONTROL_ID} class="mr-2" required={true} />
                    <span>
                        { "I agree to the " }
                        <a href={href.clone()} target="_blank" class={styles::TERMS_LINK}>
                            { "Terms and Conditions" }
                        </a>
                    </span>
                </label>
            </div>
        },
        FormControl::Submit => html! {
            <button
                type="submit"
                id="submit-button"
                class={styles::SUBMIT_BUTTON}
                disabled={component.phase.is_busy()}
            >
                { component.phase.button_label() }
            </button>
        },
    }
}

/// Labeled input for one descriptor; the textarea for `message`, an email
/// or text input otherwise.
fn build_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    field: &FieldDescriptor,
) -> Html {
    let name = field.name.clone();
    let value = component.form.value(&field.name).to_string();
    let class = classes!(
        styles::FIELD_INPUT,
        component.form.is_invalid(&field.name).then_some(styles::FIELD_INVALID)
    );

    let input = match field.input_kind() {
        InputKind::TextArea => {
            let oninput = link.callback(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::UpdateField {
                    name: name.clone(),
                    value: textarea.value(),
                }
            });
            html! {
                <textarea
                    {class}
                    id={field.name.clone()}
                    name={field.name.clone()}
                    required={field.required}
                    rows={TEXTAREA_ROWS.to_string()}
                    {value}
                    {oninput}
                />
            }
        }
        kind => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateField {
                    name: name.clone(),
                    value: input.value(),
                }
            });
            html! {
                <input
                    type={kind.html_type().unwrap_or("text")}
                    {class}
                    id={field.name.clone()}
                    name={field.name.clone()}
                    required={field.required}
                    {value}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class={styles::FIELD_GROUP}>
            <label for={field.name.clone()} class={styles::FIELD_LABEL}>{ field.label.clone() }</label>
            { input }
        </div>
    }
}
