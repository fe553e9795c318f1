pub mod use_donation;
pub mod use_donation_form;
