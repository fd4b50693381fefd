//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, nav_menu::NavMenu};
use crate::config::ApiConfig;
use crate::net::api::PetClinicApi;
use crate::pages::{
    owner_details::OwnerDetailsPage, owner_form::OwnerFormPage, owner_list::OwnerListPage, pet_form::PetFormPage,
    vet_list::VetListPage, visits::VisitsPage, welcome::WelcomePage,
};

/// REST client shared with every page through context.
pub type SharedApi = Arc<PetClinicApi>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = ApiConfig::from_env();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared REST client and sets up client-side routing.
#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_meta_context();

    let api: SharedApi = Arc::new(PetClinicApi::browser(config));
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/petclinic-ui.css"/>
        <Title text="PetClinic"/>

        <Router>
            <NavMenu/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WelcomePage/>
                    <Route path=StaticSegment("owners") view=OwnerListPage/>
                    <Route path=(StaticSegment("owners"), StaticSegment("new")) view=OwnerFormPage/>
                    <Route
                        path=(StaticSegment("owners"), StaticSegment("details"), ParamSegment("ownerId"))
                        view=OwnerDetailsPage
                    />
                    <Route
                        path=(StaticSegment("owners"), ParamSegment("ownerId"), StaticSegment("edit"))
                        view=OwnerFormPage
                    />
                    <Route
                        path=(StaticSegment("owners"), ParamSegment("ownerId"), StaticSegment("new-pet"))
                        view=PetFormPage
                    />
                    <Route
                        path=(StaticSegment("owners"), ParamSegment("ownerId"), StaticSegment("pets"), ParamSegment("petId"))
                        view=PetFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("owners"),
                            ParamSegment("ownerId"),
                            StaticSegment("pets"),
                            ParamSegment("petId"),
                            StaticSegment("visits"),
                        )
                        view=VisitsPage
                    />
                    <Route path=StaticSegment("vets") view=VetListPage/>
                </Routes>
            </main>
            <ChatWidget/>
        </Router>
    }
}
