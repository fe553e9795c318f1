use std::rc::Rc;

use shared::{Cause, DonationFormState, DonationFormValidation, DonationType, PaymentMethod, Title};
use yew::prelude::*;

/// Free-text inputs of the donation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    LastName,
    FirstName,
    Email,
    Phone,
    Address,
    AddressComplement,
    ZipCode,
    City,
    HowDidYouKnow,
}

pub enum FormAction {
    SetDonationType(DonationType),
    SelectPresetAmount(u32),
    EnterCustomAmount(String),
    SetCause(Option<Cause>),
    SetTitle(Option<Title>),
    SetText(TextField, String),
    SetOrganization(bool),
    SetCoverFees(bool),
    SetPaymentMethod(PaymentMethod),
    /// Submit was attempted: inline errors stay visible from now on
    RevealErrors,
}

/// Form values plus whether inline errors are shown yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationFormModel {
    pub values: DonationFormState,
    pub show_errors: bool,
}

impl DonationFormModel {
    pub fn validation(&self) -> DonationFormValidation {
        self.values.validate()
    }
}

impl Reducible for DonationFormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let values = &mut next.values;

        match action {
            FormAction::RevealErrors => next.show_errors = true,
            FormAction::SetDonationType(donation_type) => values.donation_type = donation_type,
            FormAction::SelectPresetAmount(amount) => values.select_preset_amount(amount),
            FormAction::EnterCustomAmount(raw) => values.enter_custom_amount(raw),
            FormAction::SetCause(cause) => values.cause = cause,
            FormAction::SetTitle(title) => values.title = title,
            FormAction::SetText(field, value) => {
                let target = match field {
                    TextField::LastName => &mut values.last_name,
                    TextField::FirstName => &mut values.first_name,
                    TextField::Email => &mut values.email,
                    TextField::Phone => &mut values.phone,
                    TextField::Address => &mut values.address,
                    TextField::AddressComplement => &mut values.address_complement,
                    TextField::ZipCode => &mut values.zip_code,
                    TextField::City => &mut values.city,
                    TextField::HowDidYouKnow => &mut values.how_did_you_know,
                };
                *target = value;
            }
            FormAction::SetOrganization(organization) => values.organization = organization,
            FormAction::SetCoverFees(cover_fees) => values.cover_fees = cover_fees,
            FormAction::SetPaymentMethod(method) => values.payment_method = Some(method),
        }

        Rc::new(next)
    }
}

#[hook]
pub fn use_donation_form() -> UseReducerHandle<DonationFormModel> {
    use_reducer(DonationFormModel::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AmountSelection, DonationField};

    fn apply(model: DonationFormModel, actions: Vec<FormAction>) -> DonationFormModel {
        let model = actions
            .into_iter()
            .fold(Rc::new(model), |model, action| model.reduce(action));
        (*model).clone()
    }

    #[test]
    fn test_defaults() {
        let model = DonationFormModel::default();
        assert!(!model.show_errors);
        assert_eq!(model.values.cause, Some(Cause::LuttePrecarite));
        assert_eq!(model.values.payment_method, Some(PaymentMethod::Card));
        assert_eq!(model.values.amount, AmountSelection::Unset);
    }

    #[test]
    fn test_last_amount_interaction_wins() {
        let model = apply(
            DonationFormModel::default(),
            vec![FormAction::SelectPresetAmount(50), FormAction::EnterCustomAmount("35".to_string())],
        );
        assert_eq!(model.values.current_amount(), Some(35.0));
        assert_eq!(model.values.amount.selected_preset(), None);

        let model = apply(model, vec![FormAction::SelectPresetAmount(200)]);
        assert_eq!(model.values.current_amount(), Some(200.0));
        assert_eq!(model.values.amount.custom_input(), "");
    }

    #[test]
    fn test_text_fields_update_their_own_value() {
        let model = apply(
            DonationFormModel::default(),
            vec![
                FormAction::SetText(TextField::ZipCode, "13001".to_string()),
                FormAction::SetText(TextField::City, "Marseille".to_string()),
                FormAction::SetText(TextField::HowDidYouKnow, "Presse".to_string()),
            ],
        );
        assert_eq!(model.values.zip_code, "13001");
        assert_eq!(model.values.city, "Marseille");
        assert_eq!(model.values.how_did_you_know, "Presse");
        assert!(model.values.address.is_empty());
    }

    #[test]
    fn test_reveal_errors_keeps_values() {
        let model = apply(
            DonationFormModel::default(),
            vec![FormAction::SetText(TextField::Email, "a@b.fr".to_string()), FormAction::RevealErrors],
        );
        assert!(model.show_errors);
        assert_eq!(model.values.email, "a@b.fr");
        assert!(model.validation().error_for(DonationField::Amount).is_some());
    }
}
