//! Lead-capture form generated from the record's field descriptors.
//!
//! Follows the same split as the other stateful components: `state` holds
//! the runtime data, `update` reacts to `Msg`, `view` renders. Validation,
//! payload assembly and the submit phase machine live in `lead_common::form`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormComponent;

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        LeadFormComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
