//! Top navigation bar.

use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn NavMenu() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar-brand" href=Route::Welcome.path()>"PetClinic"</a>
            <ul class="nav navbar-nav">
                <li><a href=Route::Welcome.path()>"Home"</a></li>
                <li><a href=Route::Owners.path()>"Owners"</a></li>
                <li><a href=Route::NewOwner.path()>"Register"</a></li>
                <li><a href=Route::Vets.path()>"Veterinarians"</a></li>
            </ul>
        </nav>
    }
}
