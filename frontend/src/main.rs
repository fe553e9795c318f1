use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::donation_confirmation::DonationConfirmation;
use components::donation_form::{ConfirmedDonation, DonationForm};
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let confirmed = use_state(|| Option::<ConfirmedDonation>::None);

    use_effect_with((), {
        let api_client = api_client.clone();
        move |_| {
            spawn_local(async move {
                match api_client.health().await {
                    Ok(health) => gloo::console::log!("Intake service reachable:", health.status),
                    Err(e) => gloo::console::warn!("Intake service unreachable:", e),
                }
            });
            || ()
        }
    });

    let on_confirmed = {
        let confirmed = confirmed.clone();
        Callback::from(move |donation: ConfirmedDonation| {
            Logger::debug_with_component("App", &format!("Showing confirmation for {}", donation.donation_id));
            confirmed.set(Some(donation));
            scroll_to_top();
        })
    };

    let on_back_to_donate = {
        let confirmed = confirmed.clone();
        Callback::from(move |_: ()| {
            confirmed.set(None);
            scroll_to_top();
        })
    };

    html! {
        <main class="app">
            {
                match (*confirmed).clone() {
                    Some(confirmed) => html! {
                        <DonationConfirmation {confirmed} {on_back_to_donate} />
                    },
                    None => html! {
                        <DonationForm api_client={(*api_client).clone()} {on_confirmed} />
                    },
                }
            }
            <footer class="app-footer">
                <p>{"Merci de votre soutien ! Ensemble, nous luttons contre la précarité et le gaspillage."}</p>
            </footer>
        </main>
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
