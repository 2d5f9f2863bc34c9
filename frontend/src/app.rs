//! Root component: resolves the record identifier, fetches the record once
//! and renders the four page regions from it.
//!
//! Any failure before the record is available (missing or undecodable
//! `expose`, transport error, malformed envelope or payload) is logged to the
//! console and answered with a redirect to the error page.

use gloo_console::{error, log};
use gloo_net::http::Request;
use lead_common::config::LeadConfig;
use lead_common::error::LeadError;
use lead_common::model::record::RecordPayload;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::{current_record_id, navigate_to};
use crate::components::lead_form::LeadFormComponent;
use crate::components::listing::{ListingGallery, ListingHeader, PropertyDetails};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// API host and navigation targets.
    #[prop_or_default]
    pub config: LeadConfig,
}

pub enum Msg {
    RecordLoaded(RecordPayload),
    LoadFailed(LeadError),
}

pub struct App {
    record: Option<RecordPayload>,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            record: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RecordLoaded(record) => {
                self.record = Some(record);
                true
            }
            Msg::LoadFailed(err) => {
                error!(err.to_string());
                navigate_to(&ctx.props().config.error_page);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(record) = &self.record else {
            return html! {
                <div class="container mx-auto px-4 py-8 text-gray-500">{"Loading..."}</div>
            };
        };

        html! {
            <div class="container mx-auto px-4 py-8">
                <ListingHeader
                    image={record.header_image.clone()}
                    company_name={record.company_name.clone()}
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-8">
                    <div>
                        <ListingGallery images={record.gallery.clone()} />
                        <PropertyDetails rows={record.detail_rows()} />
                    </div>
                    <LeadFormComponent
                        fields={record.fields.clone()}
                        config={ctx.props().config.clone()}
                    />
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let record_id = match current_record_id() {
                Ok(id) => id,
                Err(err) => {
                    link.send_message(Msg::LoadFailed(err));
                    return;
                }
            };

            let url = ctx.props().config.record_url(&record_id);
            spawn_local(async move {
                match fetch_record(&url).await {
                    Ok(record) => link.send_message(Msg::RecordLoaded(record)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}

/// Single `GET` of the record endpoint followed by both decoding steps.
/// The status code is not checked; an error body fails envelope decoding.
async fn fetch_record(url: &str) -> Result<RecordPayload, LeadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LeadError::Fetch(e.to_string()))?;
    log!(format!("record endpoint answered {}", response.status()));

    let body = response
        .text()
        .await
        .map_err(|e| LeadError::Fetch(e.to_string()))?;
    RecordPayload::from_envelope_json(&body)
}
