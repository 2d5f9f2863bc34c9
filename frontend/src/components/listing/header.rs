use lead_common::model::image::Image;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ListingHeaderProps {
    pub image: Image,
    pub company_name: String,
}

/// Banner image and company name.
pub struct ListingHeader;

impl Component for ListingHeader {
    type Message = ();
    type Properties = ListingHeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ListingHeader
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <header class="relative">
                <img
                    id="header-image"
                    class="w-full h-64 object-cover rounded-lg shadow-md"
                    src={props.image.url.clone()}
                    alt={props.image.alt.clone()}
                />
                <h1 id="company-name" class="text-3xl font-bold mt-4 text-gray-800">
                    { props.company_name.clone() }
                </h1>
            </header>
        }
    }
}
