use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{strings, Language};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let copy = strings(Language::default());
    html! {
        <div class="not-found">
            <h1 class="display-md">{copy.not_found}</h1>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {copy.back_home}
            </Link<Route>>
        </div>
    }
}
