use crate::hooks::use_access_url;
use crate::store::PermissionStore;
use crate::utils::request_button_label;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccessDeniedPageProps {
    /// Identifier of the blocked action, taken from the route
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(AccessDeniedPage)]
pub fn access_denied_page(props: &AccessDeniedPageProps) -> Html {
    let store = use_context::<PermissionStore>().unwrap_or_default();
    let access = use_access_url(props.id.clone(), store.snapshot.clone());

    let onclick = {
        let open = access.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    let button_class = classes!(
        "request-access-button",
        access.state.loading.then_some("loading")
    );

    html! {
        <div class="banned-container">
            <div class="banned-content">
                <div class="banned-icon">{ "🔒" }</div>
                <h1>{ "Permission Denied" }</h1>
                <p class="banned-message">
                    { "You do not have permission to use this feature yet. Use \"Request access\" below to apply for it." }
                </p>
                <div class="banned-reason">
                    <h3>{ "About this permission" }</h3>
                    <p>{ "This feature is maintained by the platform's resource administrators and is granted to administrators only." }</p>
                    <p>{ "Business users do not need this permission; use the business menu directly instead." }</p>
                </div>
                <div class="banned-reason">
                    <h3>{ "About this feature" }</h3>
                    <p>{ "Resource management hides the differences between cloud vendors behind one management model." }</p>
                    <p>{ "It manages resources across several clouds and accounts, covering their whole lifecycle from creation to recycling and destruction." }</p>
                </div>
                if let Some(failure) = &access.state.failure {
                    <p class="banned-contact">
                        { "The access request link could not be loaded: " }{ failure.clone() }
                    </p>
                }
                <button
                    class={button_class}
                    disabled={!access.state.can_open()}
                    {onclick}
                >
                    { request_button_label(access.state.loading) }
                </button>
            </div>
        </div>
    }
}
