use lead_common::model::record::PropertyDetail;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PropertyDetailsProps {
    /// Display rows, labels already humanized.
    pub rows: Vec<PropertyDetail>,
}

pub struct PropertyDetails;

impl Component for PropertyDetails {
    type Message = ();
    type Properties = PropertyDetailsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PropertyDetails
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div id="property-details" class="bg-white rounded-lg shadow-md p-6">
                { for ctx.props().rows.iter().map(|row| html! {
                    <p class="mb-2">
                        <strong class="capitalize">{ format!("{}:", row.label) }</strong>
                        { " " }
                        { row.value.clone() }
                    </p>
                }) }
            </div>
        }
    }
}
