pub mod donation_confirmation;
pub mod donation_form;
pub mod text_input;
