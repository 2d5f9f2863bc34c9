use lead_common::model::image::Image;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ListingGalleryProps {
    pub images: Vec<Image>,
}

/// One image per gallery entry, in payload order.
pub struct ListingGallery;

impl Component for ListingGallery {
    type Message = ();
    type Properties = ListingGalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ListingGallery
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="gallery grid grid-cols-2 gap-4 mb-8">
                { for ctx.props().images.iter().map(|image| html! {
                    <img
                        class="w-full h-48 object-cover rounded-lg shadow-md"
                        src={image.url.clone()}
                        alt={image.alt.clone()}
                    />
                }) }
            </div>
        }
    }
}
