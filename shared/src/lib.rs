use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Preset amounts offered by the donation form (euros)
pub const PRESET_AMOUNTS: [u32; 4] = [20, 50, 100, 200];

/// Smallest amount accepted by both the form and the intake service
pub const MIN_AMOUNT: f64 = 1.0;

/// Share of a donation that comes back as an income tax reduction
pub const TAX_REDUCTION_RATE: f64 = 0.66;

/// Number of gifts distributed per euro donated
pub const GIFTS_PER_EURO: f64 = 3.0;

pub const DEFAULT_COUNTRY: &str = "France";

/// Banner text used when the service gives no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue est survenue";

pub const HOW_DID_YOU_KNOW_OPTIONS: [&str; 5] = [
    "Réseaux sociaux",
    "Bouche à oreille",
    "Moteur de recherche",
    "Presse",
    "Autre",
];

/// One-off or recurring donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    #[default]
    Ponctuel,
    Regulier,
}

impl DonationType {
    pub const ALL: [DonationType; 2] = [DonationType::Ponctuel, DonationType::Regulier];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationType::Ponctuel => "ponctuel",
            DonationType::Regulier => "regulier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationType::Ponctuel => "Don ponctuel",
            DonationType::Regulier => "Don régulier",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// Cause categories a donor can support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cause {
    AideHivernale,
    FemmesEnFete,
    KitScolaire,
    PrecariteMenstruelle,
    NoelPourTous,
    LuttePrecarite,
}

impl Cause {
    pub const ALL: [Cause; 6] = [
        Cause::AideHivernale,
        Cause::FemmesEnFete,
        Cause::KitScolaire,
        Cause::PrecariteMenstruelle,
        Cause::NoelPourTous,
        Cause::LuttePrecarite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cause::AideHivernale => "aide-hivernale",
            Cause::FemmesEnFete => "femmes-en-fete",
            Cause::KitScolaire => "kit-scolaire",
            Cause::PrecariteMenstruelle => "precarite-menstruelle",
            Cause::NoelPourTous => "noel-pour-tous",
            Cause::LuttePrecarite => "lutte-precarite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cause::AideHivernale => "Aide Hivernale",
            Cause::FemmesEnFete => "Femmes en Fête",
            Cause::KitScolaire => "Kit Scolaire",
            Cause::PrecariteMenstruelle => "Lutte contre la Précarité Menstruelle",
            Cause::NoelPourTous => "Noël Pour Tous",
            Cause::LuttePrecarite => "Lutte contre la précarité",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// Donor civility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    #[serde(rename = "mr-mme")]
    MrMme,
    #[serde(rename = "mme")]
    Mme,
    #[serde(rename = "mlle")]
    Mlle,
    #[serde(rename = "mr")]
    Mr,
}

impl Title {
    pub const ALL: [Title; 4] = [Title::MrMme, Title::Mme, Title::Mlle, Title::Mr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Title::MrMme => "mr-mme",
            Title::Mme => "mme",
            Title::Mlle => "mlle",
            Title::Mr => "mr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Title::MrMme => "Monsieur et Madame",
            Title::Mme => "Madame",
            Title::Mlle => "Mademoiselle",
            Title::Mr => "Monsieur",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Sepa,
    Cheque,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Sepa, PaymentMethod::Cheque];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Sepa => "sepa",
            PaymentMethod::Cheque => "cheque",
        }
    }

    /// Label shown on the confirmation view
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Carte bancaire",
            PaymentMethod::Sepa => "Prélèvement SEPA",
            PaymentMethod::Cheque => "Chèque",
        }
    }

    /// Label shown next to the radio button on the form
    pub fn form_label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Je donne par carte",
            PaymentMethod::Sepa => "Prélèvement SEPA",
            PaymentMethod::Cheque => "Je règle par chèque",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// Processing status of a stored donation. Records are always created as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Confirmed,
    Failed,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Flat payload posted by the donation form to `POST /api/donations`.
///
/// Required fields that the donor may leave blank are modelled as `Option` or
/// empty strings so that both sides can run the same validation and report
/// every violation instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DonationSubmission {
    #[serde(default)]
    pub donation_type: DonationType,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub cause: Option<Cause>,
    #[serde(default)]
    pub title: Option<Title>,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_complement: Option<String>,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub organization: bool,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub cover_fees: bool,
    #[serde(default)]
    pub how_did_you_know: Option<String>,
}

/// Form fields that carry a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonationField {
    Amount,
    Cause,
    Title,
    LastName,
    FirstName,
    Email,
    Address,
    ZipCode,
    City,
    PaymentMethod,
}

impl DonationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationField::Amount => "amount",
            DonationField::Cause => "cause",
            DonationField::Title => "title",
            DonationField::LastName => "lastName",
            DonationField::FirstName => "firstName",
            DonationField::Email => "email",
            DonationField::Address => "address",
            DonationField::ZipCode => "zipCode",
            DonationField::City => "city",
            DonationField::PaymentMethod => "paymentMethod",
        }
    }
}

/// A single rule violation found while validating a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DonationValidationError {
    AmountMissing,
    AmountTooSmall(f64),
    CauseMissing,
    TitleMissing,
    LastNameTooShort,
    FirstNameTooShort,
    InvalidEmail,
    AddressTooShort,
    InvalidZipCode,
    CityTooShort,
    PaymentMethodMissing,
}

impl DonationValidationError {
    pub fn field(&self) -> DonationField {
        match self {
            DonationValidationError::AmountMissing | DonationValidationError::AmountTooSmall(_) => DonationField::Amount,
            DonationValidationError::CauseMissing => DonationField::Cause,
            DonationValidationError::TitleMissing => DonationField::Title,
            DonationValidationError::LastNameTooShort => DonationField::LastName,
            DonationValidationError::FirstNameTooShort => DonationField::FirstName,
            DonationValidationError::InvalidEmail => DonationField::Email,
            DonationValidationError::AddressTooShort => DonationField::Address,
            DonationValidationError::InvalidZipCode => DonationField::ZipCode,
            DonationValidationError::CityTooShort => DonationField::City,
            DonationValidationError::PaymentMethodMissing => DonationField::PaymentMethod,
        }
    }
}

impl fmt::Display for DonationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonationValidationError::AmountMissing | DonationValidationError::AmountTooSmall(_) => {
                write!(f, "Le montant doit être supérieur à 0")
            }
            DonationValidationError::CauseMissing => write!(f, "Veuillez sélectionner une cause"),
            DonationValidationError::TitleMissing => write!(f, "Veuillez sélectionner une civilité"),
            DonationValidationError::LastNameTooShort => write!(f, "Le nom doit contenir au moins 2 caractères"),
            DonationValidationError::FirstNameTooShort => write!(f, "Le prénom doit contenir au moins 2 caractères"),
            DonationValidationError::InvalidEmail => write!(f, "Email invalide"),
            DonationValidationError::AddressTooShort => write!(f, "Veuillez entrer une adresse valide"),
            DonationValidationError::InvalidZipCode => write!(f, "Code postal invalide"),
            DonationValidationError::CityTooShort => write!(f, "Veuillez entrer une ville"),
            DonationValidationError::PaymentMethodMissing => write!(f, "Veuillez sélectionner un moyen de paiement"),
        }
    }
}

/// Wire form of a validation error, used in `ErrorResponse::details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&DonationValidationError> for FieldError {
    fn from(error: &DonationValidationError) -> Self {
        Self {
            field: error.field().as_str().to_string(),
            message: error.to_string(),
        }
    }
}

/// Outcome of running the donation schema over a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationFormValidation {
    pub is_valid: bool,
    pub errors: Vec<DonationValidationError>,
}

impl DonationFormValidation {
    /// First error reported for a field, if any
    pub fn error_for(&self, field: DonationField) -> Option<&DonationValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.errors.iter().map(FieldError::from).collect()
    }
}

/// A submission that passed the schema, with every required choice resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDonation {
    pub donation_type: DonationType,
    pub amount: f64,
    pub cause: Cause,
    pub title: Title,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub address_complement: Option<String>,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub organization: bool,
    pub payment_method: PaymentMethod,
    pub cover_fees: bool,
    pub how_did_you_know: Option<String>,
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// French postal code: exactly five ASCII digits
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    zip_code.len() == 5 && zip_code.bytes().all(|b| b.is_ascii_digit())
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(trimmed).filter(|v| !v.is_empty())
}

impl DonationSubmission {
    /// Run every field rule and collect all violations, in form order
    pub fn validate(&self) -> DonationFormValidation {
        let mut errors = Vec::new();

        match self.amount {
            None => errors.push(DonationValidationError::AmountMissing),
            Some(amount) if !amount.is_finite() || amount < MIN_AMOUNT => {
                errors.push(DonationValidationError::AmountTooSmall(amount))
            }
            Some(_) => {}
        }
        if self.cause.is_none() {
            errors.push(DonationValidationError::CauseMissing);
        }
        if self.title.is_none() {
            errors.push(DonationValidationError::TitleMissing);
        }
        if !has_min_chars(&self.last_name, 2) {
            errors.push(DonationValidationError::LastNameTooShort);
        }
        if !has_min_chars(&self.first_name, 2) {
            errors.push(DonationValidationError::FirstNameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(DonationValidationError::InvalidEmail);
        }
        if !has_min_chars(&self.address, 5) {
            errors.push(DonationValidationError::AddressTooShort);
        }
        if !is_valid_zip_code(&self.zip_code) {
            errors.push(DonationValidationError::InvalidZipCode);
        }
        if !has_min_chars(&self.city, 2) {
            errors.push(DonationValidationError::CityTooShort);
        }
        if self.payment_method.is_none() {
            errors.push(DonationValidationError::PaymentMethodMissing);
        }

        DonationFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Validate and resolve the submission. Text is stored trimmed, the way it
    /// was checked, and blank optional text becomes `None`.
    pub fn into_validated(self) -> Result<ValidatedDonation, DonationFormValidation> {
        let validation = self.validate();
        let (Some(amount), Some(cause), Some(title), Some(payment_method), true) =
            (self.amount, self.cause, self.title, self.payment_method, validation.is_valid)
        else {
            return Err(validation);
        };

        let country = if self.country.trim().is_empty() {
            default_country()
        } else {
            trimmed(self.country)
        };

        Ok(ValidatedDonation {
            donation_type: self.donation_type,
            amount,
            cause,
            title,
            last_name: trimmed(self.last_name),
            first_name: trimmed(self.first_name),
            email: trimmed(self.email),
            phone: non_blank(self.phone),
            address: trimmed(self.address),
            address_complement: non_blank(self.address_complement),
            zip_code: trimmed(self.zip_code),
            city: trimmed(self.city),
            country,
            organization: self.organization,
            payment_method,
            cover_fees: self.cover_fees,
            how_did_you_know: non_blank(self.how_did_you_know),
        })
    }
}

/// Tax benefit preview shown next to the amount. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBenefit {
    pub gross: f64,
    pub reduction: i64,
    pub net: i64,
}

impl TaxBenefit {
    pub fn for_amount(amount: f64) -> Self {
        let reduction = amount * TAX_REDUCTION_RATE;
        Self {
            gross: amount,
            reduction: reduction.round() as i64,
            net: (amount - reduction).round() as i64,
        }
    }
}

/// Number of gifts a donation pays for
pub fn estimated_gifts(amount: f64) -> i64 {
    (amount * GIFTS_PER_EURO).round() as i64
}

/// Format an amount the way the site prints euros ("20 €", "12.5 €")
pub fn format_euros(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} €", amount as i64)
    } else {
        format!("{:.2} €", amount)
    }
}

/// Amount input: a preset button or a free amount, never both
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AmountSelection {
    #[default]
    Unset,
    Preset(u32),
    Custom(String),
}

impl AmountSelection {
    pub fn amount(&self) -> Option<f64> {
        match self {
            AmountSelection::Unset => None,
            AmountSelection::Preset(value) => Some(f64::from(*value)),
            AmountSelection::Custom(raw) => parse_amount_input(raw),
        }
    }

    pub fn selected_preset(&self) -> Option<u32> {
        match self {
            AmountSelection::Preset(value) => Some(*value),
            _ => None,
        }
    }

    /// Text to show in the free amount input
    pub fn custom_input(&self) -> &str {
        match self {
            AmountSelection::Custom(raw) => raw,
            _ => "",
        }
    }
}

/// Parse a typed amount, accepting "12,50", "12.50" and a trailing euro sign
pub fn parse_amount_input(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Editable state of the donation form
#[derive(Debug, Clone, PartialEq)]
pub struct DonationFormState {
    pub donation_type: DonationType,
    pub amount: AmountSelection,
    pub cause: Option<Cause>,
    pub title: Option<Title>,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub address_complement: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub organization: bool,
    pub payment_method: Option<PaymentMethod>,
    pub cover_fees: bool,
    pub how_did_you_know: String,
}

impl Default for DonationFormState {
    fn default() -> Self {
        Self {
            donation_type: DonationType::Ponctuel,
            amount: AmountSelection::Unset,
            cause: Some(Cause::LuttePrecarite),
            title: Some(Title::MrMme),
            last_name: String::new(),
            first_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            address_complement: String::new(),
            zip_code: String::new(),
            city: String::new(),
            country: default_country(),
            organization: false,
            payment_method: Some(PaymentMethod::Card),
            cover_fees: false,
            how_did_you_know: String::new(),
        }
    }
}

impl DonationFormState {
    /// Pick a preset amount, discarding any free amount
    pub fn select_preset_amount(&mut self, value: u32) {
        self.amount = AmountSelection::Preset(value);
    }

    /// Type a free amount, discarding any preset selection
    pub fn enter_custom_amount(&mut self, raw: String) {
        self.amount = AmountSelection::Custom(raw);
    }

    pub fn current_amount(&self) -> Option<f64> {
        self.amount.amount()
    }

    /// Live preview, recomputed from the current amount
    pub fn tax_benefit(&self) -> Option<TaxBenefit> {
        self.current_amount()
            .filter(|amount| *amount > 0.0)
            .map(TaxBenefit::for_amount)
    }

    pub fn to_submission(&self) -> DonationSubmission {
        let optional = |value: &str| {
            if value.trim().is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        DonationSubmission {
            donation_type: self.donation_type,
            amount: self.current_amount(),
            cause: self.cause,
            title: self.title,
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            phone: optional(&self.phone),
            address: self.address.clone(),
            address_complement: optional(&self.address_complement),
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            organization: self.organization,
            payment_method: self.payment_method,
            cover_fees: self.cover_fees,
            how_did_you_know: optional(&self.how_did_you_know),
        }
    }

    pub fn validate(&self) -> DonationFormValidation {
        self.to_submission().validate()
    }
}

/// Donor block of a stored donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub title: Title,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub address: String,
    pub address_complement: Option<String>,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
    pub organization: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub cover_fees: bool,
}

/// Donation as accepted and stored by the intake service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    /// Format: "DON-<epoch_millis>-<32 hex chars>"
    pub id: String,
    pub donation_type: DonationType,
    pub amount: f64,
    pub cause: Cause,
    pub donor: Donor,
    pub payment: PaymentDetails,
    pub how_did_you_know: Option<String>,
    /// RFC 3339 timestamp, UTC, millisecond precision
    pub created_at: String,
    pub status: DonationStatus,
}

/// Response after a successful `POST /api/donations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDonationResponse {
    pub success: bool,
    pub message: String,
    pub donation_id: String,
    pub donation: DonationRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DonationTypeCounts {
    pub ponctuel: usize,
    pub regulier: usize,
}

/// Aggregate returned by `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub total_donations: usize,
    pub total_amount: f64,
    pub average_donation: f64,
    pub by_type: DonationTypeCounts,
    pub by_cause: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// JSON body of every error response from the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }

    /// Message to show for a failed response body: the service's `error`
    /// when present, otherwise the generic fallback
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

/// Log line relayed by the frontend to `POST /api/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> DonationSubmission {
        DonationSubmission {
            donation_type: DonationType::Ponctuel,
            amount: Some(20.0),
            cause: Some(Cause::LuttePrecarite),
            title: Some(Title::Mr),
            last_name: "Dupont".to_string(),
            first_name: "Jean".to_string(),
            email: "j@x.fr".to_string(),
            phone: None,
            address: "1 Rue A".to_string(),
            address_complement: None,
            zip_code: "75001".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            organization: false,
            payment_method: Some(PaymentMethod::Card),
            cover_fees: false,
            how_did_you_know: None,
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let validation = valid_submission().validate();
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_amount_rules() {
        let mut submission = valid_submission();
        submission.amount = None;
        assert_eq!(submission.validate().errors, vec![DonationValidationError::AmountMissing]);

        submission.amount = Some(0.5);
        assert_eq!(submission.validate().errors, vec![DonationValidationError::AmountTooSmall(0.5)]);

        submission.amount = Some(-10.0);
        assert!(!submission.validate().is_valid);

        submission.amount = Some(1.0);
        assert!(submission.validate().is_valid);
    }

    #[test]
    fn test_zip_code_must_be_five_digits() {
        assert!(is_valid_zip_code("75001"));
        assert!(!is_valid_zip_code("7500"));
        assert!(!is_valid_zip_code("750011"));
        assert!(!is_valid_zip_code("75O01"));
        assert!(!is_valid_zip_code("７５００１"));
        assert!(!is_valid_zip_code(""));
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("j@x.fr"));
        assert!(is_valid_email("jean.dupont+noel@example.org"));
        assert!(!is_valid_email("jean.dupont"));
        assert!(!is_valid_email("jean@"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("jean@example"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_min_lengths_count_characters_not_bytes() {
        let mut submission = valid_submission();
        submission.last_name = "É".to_string();
        submission.first_name = "Lé".to_string();
        submission.address = "  12 ".to_string();
        submission.city = "P".to_string();

        let validation = submission.validate();
        assert_eq!(
            validation.errors,
            vec![
                DonationValidationError::LastNameTooShort,
                DonationValidationError::AddressTooShort,
                DonationValidationError::CityTooShort,
            ]
        );
    }

    #[test]
    fn test_missing_choices_are_errors() {
        let mut submission = valid_submission();
        submission.title = None;
        submission.cause = None;
        submission.payment_method = None;

        let validation = submission.validate();
        assert!(validation.error_for(DonationField::Title).is_some());
        assert!(validation.error_for(DonationField::Cause).is_some());
        assert!(validation.error_for(DonationField::PaymentMethod).is_some());
        assert!(validation.error_for(DonationField::Email).is_none());
    }

    #[test]
    fn test_field_errors_carry_wire_names_and_messages() {
        let mut submission = valid_submission();
        submission.zip_code = "abc".to_string();

        let details = submission.validate().field_errors();
        assert_eq!(
            details,
            vec![FieldError {
                field: "zipCode".to_string(),
                message: "Code postal invalide".to_string(),
            }]
        );
    }

    #[test]
    fn test_into_validated_normalizes_blank_optionals() {
        let mut submission = valid_submission();
        submission.phone = Some("   ".to_string());
        submission.address_complement = Some("Bâtiment B".to_string());
        submission.country = String::new();

        let validated = submission.into_validated().unwrap();
        assert_eq!(validated.phone, None);
        assert_eq!(validated.address_complement.as_deref(), Some("Bâtiment B"));
        assert_eq!(validated.country, "France");
        assert_eq!(validated.cause, Cause::LuttePrecarite);
    }

    #[test]
    fn test_into_validated_stores_trimmed_text() {
        let mut submission = valid_submission();
        submission.email = "  jean.dupont@example.fr ".to_string();
        submission.last_name = " Dupont".to_string();
        submission.first_name = "Jean  ".to_string();
        submission.address = "\t12 Rue de Rivoli ".to_string();
        submission.city = " Paris ".to_string();
        submission.phone = Some(" 06 12 34 56 78 ".to_string());

        let validated = submission.into_validated().unwrap();
        assert_eq!(validated.email, "jean.dupont@example.fr");
        assert!(is_valid_email(&validated.email));
        assert_eq!(validated.last_name, "Dupont");
        assert_eq!(validated.first_name, "Jean");
        assert_eq!(validated.address, "12 Rue de Rivoli");
        assert_eq!(validated.city, "Paris");
        assert_eq!(validated.phone.as_deref(), Some("06 12 34 56 78"));
    }

    #[test]
    fn test_into_validated_rejects_invalid() {
        let mut submission = valid_submission();
        submission.email = "not-an-email".to_string();

        let validation = submission.into_validated().unwrap_err();
        assert_eq!(validation.errors, vec![DonationValidationError::InvalidEmail]);
    }

    #[test]
    fn test_tax_benefit_preview() {
        assert_eq!(TaxBenefit::for_amount(100.0), TaxBenefit { gross: 100.0, reduction: 66, net: 34 });
        assert_eq!(TaxBenefit::for_amount(50.0), TaxBenefit { gross: 50.0, reduction: 33, net: 17 });
        assert_eq!(TaxBenefit::for_amount(20.0), TaxBenefit { gross: 20.0, reduction: 13, net: 7 });
    }

    #[test]
    fn test_estimated_gifts() {
        assert_eq!(estimated_gifts(20.0), 60);
        assert_eq!(estimated_gifts(12.5), 38);
    }

    #[test]
    fn test_format_euros() {
        assert_eq!(format_euros(20.0), "20 €");
        assert_eq!(format_euros(12.5), "12.50 €");
    }

    #[test]
    fn test_amount_selection_last_interaction_wins() {
        let mut form = DonationFormState::default();
        assert_eq!(form.current_amount(), None);

        form.select_preset_amount(50);
        assert_eq!(form.current_amount(), Some(50.0));
        assert_eq!(form.amount.custom_input(), "");

        form.enter_custom_amount("35".to_string());
        assert_eq!(form.amount.selected_preset(), None);
        assert_eq!(form.current_amount(), Some(35.0));

        form.select_preset_amount(200);
        assert_eq!(form.amount.custom_input(), "");
        assert_eq!(form.current_amount(), Some(200.0));
    }

    #[test]
    fn test_cleared_custom_amount_leaves_amount_unset() {
        let mut form = DonationFormState::default();
        form.select_preset_amount(20);
        form.enter_custom_amount(String::new());
        assert_eq!(form.current_amount(), None);
        assert_eq!(form.tax_benefit(), None);
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("12,50"), Some(12.5));
        assert_eq!(parse_amount_input(" 40 € "), Some(40.0));
        assert_eq!(parse_amount_input("abc"), None);
        assert_eq!(parse_amount_input(""), None);
        assert_eq!(parse_amount_input("inf"), None);
    }

    #[test]
    fn test_form_defaults() {
        let form = DonationFormState::default();
        assert_eq!(form.donation_type, DonationType::Ponctuel);
        assert_eq!(form.cause, Some(Cause::LuttePrecarite));
        assert_eq!(form.title, Some(Title::MrMme));
        assert_eq!(form.payment_method, Some(PaymentMethod::Card));
        assert_eq!(form.country, "France");
        assert!(!form.cover_fees);
        assert!(!form.organization);
    }

    #[test]
    fn test_form_to_submission_drops_blank_optionals() {
        let mut form = DonationFormState::default();
        form.select_preset_amount(100);
        form.last_name = "Dupont".to_string();
        form.first_name = "Jean".to_string();
        form.email = "j@x.fr".to_string();
        form.address = "1 Rue A".to_string();
        form.zip_code = "75001".to_string();
        form.city = "Paris".to_string();
        form.phone = " ".to_string();

        let submission = form.to_submission();
        assert_eq!(submission.amount, Some(100.0));
        assert_eq!(submission.phone, None);
        assert_eq!(submission.how_did_you_know, None);
        assert!(form.validate().is_valid);
        assert_eq!(form.tax_benefit().map(|t| t.net), Some(34));
    }

    #[test]
    fn test_submission_wire_format() {
        let json = serde_json::json!({
            "amount": 20,
            "donationType": "regulier",
            "cause": "noel-pour-tous",
            "title": "mr-mme",
            "lastName": "Dupont",
            "firstName": "Jean",
            "email": "j@x.fr",
            "address": "1 Rue A",
            "zipCode": "75001",
            "city": "Paris",
            "paymentMethod": "sepa",
            "organization": true,
            "coverFees": false
        });

        let submission: DonationSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.donation_type, DonationType::Regulier);
        assert_eq!(submission.cause, Some(Cause::NoelPourTous));
        assert_eq!(submission.title, Some(Title::MrMme));
        assert_eq!(submission.payment_method, Some(PaymentMethod::Sepa));
        assert_eq!(submission.country, "France");
        assert!(submission.organization);
    }

    #[test]
    fn test_submission_rejects_unknown_fields_and_values() {
        let unknown_field = serde_json::json!({ "amount": 20, "isAdmin": true });
        assert!(serde_json::from_value::<DonationSubmission>(unknown_field).is_err());

        let unknown_cause = serde_json::json!({ "amount": 20, "cause": "unknown" });
        assert!(serde_json::from_value::<DonationSubmission>(unknown_cause).is_err());
    }

    #[test]
    fn test_enum_parse_matches_wire_names() {
        for cause in Cause::ALL {
            assert_eq!(Cause::parse(cause.as_str()), Some(cause));
            assert_eq!(serde_json::to_value(cause).unwrap(), cause.as_str());
        }
        for title in Title::ALL {
            assert_eq!(Title::parse(title.as_str()), Some(title));
            assert_eq!(serde_json::to_value(title).unwrap(), title.as_str());
        }
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::parse(method.as_str()), Some(method));
        }
        assert_eq!(DonationType::parse("regulier"), Some(DonationType::Regulier));
        assert_eq!(DonationType::parse("mensuel"), None);
    }

    #[test]
    fn test_error_response_message_from_body() {
        assert_eq!(ErrorResponse::message_from_body(r#"{"error":"Invalid amount"}"#), "Invalid amount");
        assert_eq!(ErrorResponse::message_from_body(r#"{"error":""}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(ErrorResponse::message_from_body("<html>Bad Gateway</html>"), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse::new("Donation not found")).unwrap();
        assert_eq!(json, r#"{"error":"Donation not found"}"#);
    }

    #[test]
    fn test_stats_wire_format() {
        let mut by_cause = BTreeMap::new();
        by_cause.insert("kit-scolaire".to_string(), 2);
        let stats = DonationStats {
            total_donations: 2,
            total_amount: 70.0,
            average_donation: 35.0,
            by_type: DonationTypeCounts { ponctuel: 1, regulier: 1 },
            by_cause,
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalDonations"], 2);
        assert_eq!(value["averageDonation"], 35.0);
        assert_eq!(value["byType"]["regulier"], 1);
        assert_eq!(value["byCause"]["kit-scolaire"], 2);
    }
}
