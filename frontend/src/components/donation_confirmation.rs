use shared::{estimated_gifts, format_euros, TaxBenefit, ValidatedDonation};
use yew::prelude::*;

use super::donation_form::ConfirmedDonation;

const NOT_PROVIDED: &str = "Non fourni";

#[derive(Properties, PartialEq)]
pub struct DonationConfirmationProps {
    pub confirmed: ConfirmedDonation,
    pub on_back_to_donate: Callback<()>,
}

#[function_component(DonationConfirmation)]
pub fn donation_confirmation(props: &DonationConfirmationProps) -> Html {
    let donation = &props.confirmed.donation;
    let benefit = TaxBenefit::for_amount(donation.amount);
    let on_back = {
        let on_back_to_donate = props.on_back_to_donate.clone();
        Callback::from(move |_: MouseEvent| on_back_to_donate.emit(()))
    };

    html! {
        <section class="confirmation-page">
            <header class="confirmation-header">
                <h1>{"Merci pour votre générosité !"}</h1>
                <p>{"Votre don a été enregistré avec succès"}</p>
                <p class="donation-reference">{"Référence : "}<code>{props.confirmed.donation_id.clone()}</code></p>
            </header>

            <div class="confirmation-card">
                <h2>{"Récapitulatif de votre don"}</h2>

                <div class="summary-grid">
                    <div class="summary-amount">
                        <p class="muted">{"Montant du don"}</p>
                        <p class="big">{format_euros(donation.amount)}</p>
                        <p class="muted">{donation.donation_type.label()}</p>
                    </div>
                    <div class="summary-cause">
                        <p class="muted">{"Cause soutenue"}</p>
                        <p class="big">{donation.cause.label()}</p>
                    </div>
                </div>

                <div class="tax-benefit">
                    <h3>{"Avantage fiscal"}</h3>
                    <dl>
                        <dt>{"Montant du don :"}</dt>
                        <dd>{format_euros(benefit.gross)}</dd>
                        <dt>{"Réduction d'impôt (66%) :"}</dt>
                        <dd>{format!("-{} €", benefit.reduction)}</dd>
                        <dt class="total">{"Coût net pour vous :"}</dt>
                        <dd class="total">{format!("{} €", benefit.net)}</dd>
                    </dl>
                </div>

                <div class="donor-info">
                    <h3>{"Vos informations"}</h3>
                    <dl>
                        <dt>{"Civilité"}</dt><dd>{donation.title.label()}</dd>
                        <dt>{"Nom"}</dt><dd>{donation.last_name.clone()}</dd>
                        <dt>{"Prénom"}</dt><dd>{donation.first_name.clone()}</dd>
                        <dt>{"E-mail"}</dt><dd>{donation.email.clone()}</dd>
                        <dt>{"Téléphone"}</dt><dd>{phone_display(donation)}</dd>
                        <dt>{"Adresse"}</dt>
                        <dd>
                            <p>{address_line(donation)}</p>
                            <p>{format!("{} {}", donation.zip_code, donation.city)}</p>
                        </dd>
                    </dl>
                </div>

                <div class="payment-info">
                    <h3>{"Méthode de paiement"}</h3>
                    <p class="muted">{"Paiement par"}</p>
                    <p>{donation.payment_method.label()}</p>
                </div>
            </div>

            <div class="impact">
                <h3>{"Votre impact"}</h3>
                <p>
                    {"Grâce à votre don de "}<strong>{format_euros(donation.amount)}</strong>
                    {", vous permettez à "}<strong>{estimated_gifts(donation.amount).to_string()}</strong>
                    {" cadeaux d'être distribués aux personnes en précarité."}
                </p>
                <p class="muted">{"1 € donné = 3 cadeaux distribués"}</p>
            </div>

            <div class="confirmation-card">
                <h3>{"Prochaines étapes"}</h3>
                <ol>
                    <li>{"Un e-mail de confirmation a été envoyé à "}<strong>{donation.email.clone()}</strong></li>
                    <li>{"Vous recevrez un reçu fiscal pour déclarer votre don aux impôts"}</li>
                    <li>{"Vous serez informé de l'impact de votre don via nos newsletters"}</li>
                </ol>
            </div>

            <div class="form-actions">
                <button type="button" class="btn btn-secondary" onclick={on_back}>
                    {"Faire un autre don"}
                </button>
            </div>
        </section>
    }
}

fn phone_display(donation: &ValidatedDonation) -> String {
    donation
        .phone
        .clone()
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// Street address with the complement appended when there is one
fn address_line(donation: &ValidatedDonation) -> String {
    match &donation.address_complement {
        Some(complement) => format!("{}, {}", donation.address, complement),
        None => donation.address.clone(),
    }
}
