//! Spice category page.

use leptos::prelude::*;

use super::entity_list::entity_list;
use crate::components::nav_bar::NavBar;
use crate::net::types::SpiceCategory;

#[component]
pub fn SpicesPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <NavBar/>
            <main class="list-page__main">{entity_list::<SpiceCategory>()}</main>
        </div>
    }
}
