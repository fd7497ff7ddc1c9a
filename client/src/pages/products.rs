//! Product catalog page.

use leptos::prelude::*;

use super::entity_list::entity_list;
use crate::components::nav_bar::NavBar;
use crate::net::types::Product;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <NavBar/>
            <main class="list-page__main">{entity_list::<Product>()}</main>
        </div>
    }
}
