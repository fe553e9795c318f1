use shared::{
    format_euros, Cause, DonationField, DonationType, PaymentMethod, SubmitDonationResponse, Title,
    ValidatedDonation, HOW_DID_YOU_KNOW_OPTIONS, PRESET_AMOUNTS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::text_input::TextInput;
use crate::hooks::use_donation::use_donation;
use crate::hooks::use_donation_form::{use_donation_form, FormAction, TextField};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "DonationForm";

/// What the confirmation view needs: the data the donor entered and the id the service issued
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedDonation {
    pub donation: ValidatedDonation,
    pub donation_id: String,
}

#[derive(Properties, PartialEq)]
pub struct DonationFormProps {
    pub api_client: ApiClient,
    pub on_confirmed: Callback<ConfirmedDonation>,
}

#[function_component(DonationForm)]
pub fn donation_form(props: &DonationFormProps) -> Html {
    let form = use_donation_form();
    let pending = use_mut_ref(|| Option::<ValidatedDonation>::None);

    let on_success = {
        let pending = pending.clone();
        let on_confirmed = props.on_confirmed.clone();
        Callback::from(move |response: SubmitDonationResponse| {
            if let Some(donation) = pending.borrow_mut().take() {
                on_confirmed.emit(ConfirmedDonation {
                    donation,
                    donation_id: response.donation_id,
                });
            }
        })
    };
    let donation = use_donation(&props.api_client, on_success);
    let is_loading = donation.state.is_loading;

    let values = &form.values;
    let validation = form.validation();
    let error_for = |field: DonationField| -> Option<String> {
        if form.show_errors {
            validation.error_for(field).map(ToString::to_string)
        } else {
            None
        }
    };

    let on_submit = {
        let form = form.clone();
        let pending = pending.clone();
        let submit_donation = donation.actions.submit_donation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::RevealErrors);

            let submission = form.values.to_submission();
            match submission.clone().into_validated() {
                Ok(validated) => {
                    *pending.borrow_mut() = Some(validated);
                    submit_donation.emit(submission);
                }
                Err(validation) => {
                    Logger::warn_with_component(
                        COMPONENT,
                        &format!("Submit blocked by {} field error(s)", validation.errors.len()),
                    );
                }
            }
        })
    };

    let on_dismiss_error = {
        let reset = donation.actions.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let on_text = |field: TextField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::SetText(field, value)))
    };

    let on_select = |to_action: fn(String) -> FormAction| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(to_action(select.value()));
        })
    };

    let on_checkbox = |to_action: fn(bool) -> FormAction| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(to_action(input.checked()));
        })
    };

    let on_custom_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EnterCustomAmount(input.value()));
        })
    };

    html! {
        <section class="donation-page">
            <header class="donation-header">
                <h1>{"Faites un don"}</h1>
                <p>{"Rejoignez la chaîne de solidarité et aidez les personnes en précarité"}</p>
            </header>

            <form class="donation-form" onsubmit={on_submit} novalidate={true}>
                <fieldset class="form-section">
                    <legend>{"Mon don"}</legend>

                    <div class="form-group">
                        <span class="group-label">{"Type de don"}</span>
                        <div class="radio-row">
                            { for DonationType::ALL.into_iter().map(|donation_type| {
                                let form = form.clone();
                                let id = donation_type.as_str();
                                html! {
                                    <label for={id} class="radio-option">
                                        <input
                                            type="radio"
                                            id={id}
                                            name="donationType"
                                            checked={values.donation_type == donation_type}
                                            onchange={Callback::from(move |_: Event| form.dispatch(FormAction::SetDonationType(donation_type)))}
                                            disabled={is_loading}
                                        />
                                        { donation_type_choice(donation_type) }
                                    </label>
                                }
                            })}
                        </div>
                    </div>

                    <div class="form-group">
                        <span class="group-label">{"Montant du don"}</span>
                        <div class="amount-presets">
                            { for PRESET_AMOUNTS.into_iter().map(|amount| {
                                let form = form.clone();
                                let selected = values.amount.selected_preset() == Some(amount);
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("amount-preset", selected.then_some("selected"))}
                                        onclick={Callback::from(move |_: MouseEvent| form.dispatch(FormAction::SelectPresetAmount(amount)))}
                                        disabled={is_loading}
                                    >
                                        { format!("{} €", amount) }
                                    </button>
                                }
                            })}
                        </div>
                        <div class="custom-amount">
                            <input
                                type="text"
                                inputmode="decimal"
                                id="customAmount"
                                placeholder="Montant libre"
                                value={values.amount.custom_input().to_string()}
                                oninput={on_custom_amount}
                                disabled={is_loading}
                            />
                            <span>{"€"}</span>
                        </div>
                        { field_error(error_for(DonationField::Amount)) }
                    </div>

                    <div class="form-group">
                        <label for="cause">{"Je souhaite soutenir"}</label>
                        <select id="cause" onchange={on_select(|value| FormAction::SetCause(Cause::parse(&value)))} disabled={is_loading}>
                            { for Cause::ALL.into_iter().map(|cause| html! {
                                <option value={cause.as_str()} selected={values.cause == Some(cause)}>{cause.label()}</option>
                            })}
                        </select>
                        { field_error(error_for(DonationField::Cause)) }
                    </div>

                    if let Some(benefit) = values.tax_benefit() {
                        <div class="tax-preview">
                            {"Votre don de "}<strong>{format_euros(benefit.gross)}</strong>
                            {", ne vous coûte que "}<strong>{format!("{} €", benefit.net)}</strong>
                            {" après réduction d'impôts de 66%, dans la limite de 20% de votre revenu imposable. Le surplus étant reportable 5 ans."}
                        </div>
                    }
                </fieldset>

                <fieldset class="form-section">
                    <legend>{"Mes coordonnées"}</legend>

                    <label for="organization" class="checkbox-option">
                        <input
                            type="checkbox"
                            id="organization"
                            checked={values.organization}
                            onchange={on_checkbox(FormAction::SetOrganization)}
                            disabled={is_loading}
                        />
                        {"Je représente une organisation ou une société"}
                    </label>

                    <div class="form-group">
                        <label for="title">{"Civilité"}<span class="required">{" *"}</span></label>
                        <select id="title" onchange={on_select(|value| FormAction::SetTitle(Title::parse(&value)))} disabled={is_loading}>
                            { for Title::ALL.into_iter().map(|title| html! {
                                <option value={title.as_str()} selected={values.title == Some(title)}>{title.label()}</option>
                            })}
                        </select>
                        { field_error(error_for(DonationField::Title)) }
                    </div>

                    <div class="form-row">
                        <TextInput id="lastName" label="Nom" placeholder="Votre nom" value={values.last_name.clone()} on_input={on_text(TextField::LastName)} error={error_for(DonationField::LastName)} required=true disabled={is_loading} />
                        <TextInput id="firstName" label="Prénom" placeholder="Votre prénom" value={values.first_name.clone()} on_input={on_text(TextField::FirstName)} error={error_for(DonationField::FirstName)} required=true disabled={is_loading} />
                    </div>
                    <TextInput id="email" label="E-mail" placeholder="votre.email@example.com" input_type="email" value={values.email.clone()} on_input={on_text(TextField::Email)} error={error_for(DonationField::Email)} required=true disabled={is_loading} />
                    <TextInput id="address" label="Adresse" placeholder="Votre adresse" value={values.address.clone()} on_input={on_text(TextField::Address)} error={error_for(DonationField::Address)} required=true disabled={is_loading} />
                    <TextInput id="addressComplement" label="Complément d'adresse" placeholder="Appartement, bâtiment, etc." value={values.address_complement.clone()} on_input={on_text(TextField::AddressComplement)} disabled={is_loading} />
                    <div class="form-row">
                        <TextInput id="zipCode" label="Code postal" placeholder="75001" value={values.zip_code.clone()} on_input={on_text(TextField::ZipCode)} error={error_for(DonationField::ZipCode)} required=true disabled={is_loading} />
                        <TextInput id="city" label="Ville" placeholder="Paris" value={values.city.clone()} on_input={on_text(TextField::City)} error={error_for(DonationField::City)} required=true disabled={is_loading} />
                    </div>
                    <TextInput id="phone" label="Téléphone" placeholder="+33 1 23 45 67 89" input_type="tel" value={values.phone.clone()} on_input={on_text(TextField::Phone)} disabled={is_loading} />

                    <div class="form-group">
                        <label for="howDidYouKnow">{"Comment avez-vous connu Dons Solidaires ?"}</label>
                        <select
                            id="howDidYouKnow"
                            onchange={on_select(|value| FormAction::SetText(TextField::HowDidYouKnow, value))}
                            disabled={is_loading}
                        >
                            <option value="" selected={values.how_did_you_know.is_empty()}>{"Sélectionner..."}</option>
                            { for HOW_DID_YOU_KNOW_OPTIONS.into_iter().map(|option| html! {
                                <option value={option} selected={values.how_did_you_know == option}>{option}</option>
                            })}
                        </select>
                    </div>
                </fieldset>

                <fieldset class="form-section">
                    <legend>{"Mon règlement"}</legend>

                    <div class="cover-fees">
                        <label for="coverFees" class="checkbox-option">
                            <input
                                type="checkbox"
                                id="coverFees"
                                checked={values.cover_fees}
                                onchange={on_checkbox(FormAction::SetCoverFees)}
                                disabled={is_loading}
                            />
                            {"Je souhaite couvrir les frais bancaires."}
                        </label>
                        <p>{"Mon soutien est de "}<strong>{format_euros(values.current_amount().unwrap_or(0.0))}</strong></p>
                    </div>

                    <div class="form-group">
                        <span class="group-label">{"Méthode de paiement"}</span>
                        { for PaymentMethod::ALL.into_iter().map(|method| {
                            let form = form.clone();
                            let id = method.as_str();
                            html! {
                                <label for={id} class="radio-option payment-option">
                                    <input
                                        type="radio"
                                        id={id}
                                        name="paymentMethod"
                                        checked={values.payment_method == Some(method)}
                                        onchange={Callback::from(move |_: Event| form.dispatch(FormAction::SetPaymentMethod(method)))}
                                        disabled={is_loading}
                                    />
                                    { method.form_label() }
                                </label>
                            }
                        })}
                        { field_error(error_for(DonationField::PaymentMethod)) }
                    </div>

                    <p class="consent">
                        {"En soumettant ce formulaire, j'accepte que les informations saisies soient exploitées dans le cadre du traitement de mon don et des communications diffusées par l'organisation."}
                    </p>
                </fieldset>

                if let Some(error) = donation.state.error.as_ref() {
                    <div class="form-message error" role="alert">
                        <strong>{"Erreur"}</strong>
                        <p>{error.clone()}</p>
                        <button type="button" class="btn-link" onclick={on_dismiss_error}>{"Fermer"}</button>
                    </div>
                }

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={is_loading}>
                        { if is_loading { "Traitement en cours..." } else { "Confirmer mon don" } }
                    </button>
                </div>
            </form>
        </section>
    }
}

fn donation_type_choice(donation_type: DonationType) -> &'static str {
    match donation_type {
        DonationType::Ponctuel => "Je fais un don ponctuel",
        DonationType::Regulier => "Je donne régulièrement",
    }
}

fn field_error(message: Option<String>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}
