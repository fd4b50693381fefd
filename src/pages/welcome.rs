use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <section class="welcome">
            <h2>"Welcome"</h2>
            <p>"Manage owners, their pets, and visits, or ask the assistant below."</p>
        </section>
    }
}
