use shared::{DonationSubmission, SubmitDonationResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct DonationSubmitState {
    pub is_loading: bool,
    /// Message for the form banner after a failed submission
    pub error: Option<String>,
}

pub struct UseDonationResult {
    pub state: DonationSubmitState,
    pub actions: UseDonationActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDonationActions {
    pub submit_donation: Callback<DonationSubmission>,
    pub reset: Callback<()>,
}

/// Submission lifecycle for the donation form. `on_success` fires only after
/// the service accepted the donation; failures stay in `state.error`.
#[hook]
pub fn use_donation(api_client: &ApiClient, on_success: Callback<SubmitDonationResponse>) -> UseDonationResult {
    let submit_state = use_state(DonationSubmitState::default);

    let submit_donation = {
        let api_client = api_client.clone();
        let submit_state = submit_state.clone();

        use_callback(on_success, move |submission: DonationSubmission, on_success| {
            let api_client = api_client.clone();
            let submit_state = submit_state.clone();
            let on_success = on_success.clone();

            submit_state.set(DonationSubmitState {
                is_loading: true,
                error: None,
            });

            spawn_local(async move {
                match api_client.submit_donation(&submission).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            "use_donation",
                            &format!("Donation accepted: {}", response.donation_id),
                        );
                        submit_state.set(DonationSubmitState::default());
                        on_success.emit(response);
                    }
                    Err(message) => {
                        gloo::console::error!("Donation submission failed:", message.clone());
                        Logger::error_with_component("use_donation", &format!("Donation rejected: {}", message));
                        submit_state.set(DonationSubmitState {
                            is_loading: false,
                            error: Some(message),
                        });
                    }
                }
            });
        })
    };

    let reset = {
        let submit_state = submit_state.clone();
        use_callback((), move |_: (), _| submit_state.set(DonationSubmitState::default()))
    };

    UseDonationResult {
        state: (*submit_state).clone(),
        actions: UseDonationActions { submit_donation, reset },
    }
}
