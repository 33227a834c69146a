use url::form_urlencoded;

use crate::core::{CheckRequest, EvatrError};

/// Query parameter names understood by the eVatR endpoint.
pub mod keys {
    pub const OWN_VAT_NUMBER: &str = "UstId_1";
    pub const VALIDATE_VAT_NUMBER: &str = "UstId_2";
    pub const COMPANY_NAME: &str = "Firmenname";
    pub const CITY: &str = "Ort";
    pub const ZIP: &str = "PLZ";
    pub const STREET: &str = "Strasse";
    pub const PRINT: &str = "Druck";
}

/// Build the URL query string for `request`.
///
/// Company details are included when the request is qualified. Details that
/// are `None` are left out entirely.
///
/// # Errors
///
/// Returns `EvatrError::InvalidArgument` if a VAT number is missing.
pub fn build_query(request: &CheckRequest) -> Result<String, EvatrError> {
    request.validate()?;

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair(keys::OWN_VAT_NUMBER, &request.own_vat_number)
        .append_pair(keys::VALIDATE_VAT_NUMBER, &request.validate_vat_number);

    if let Some(details) = &request.qualified {
        let optional = [
            (keys::COMPANY_NAME, &details.company_name),
            (keys::CITY, &details.city),
            (keys::ZIP, &details.zip),
            (keys::STREET, &details.street),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                query.append_pair(key, value);
            }
        }
        if details.print {
            query.append_pair(keys::PRINT, "ja");
        }
    }

    Ok(query.finish())
}

/// Build the query string for a simple check, ignoring any company details.
pub fn build_simple_query(request: &CheckRequest) -> Result<String, EvatrError> {
    request.validate()?;
    Ok(form_urlencoded::Serializer::new(String::new())
        .append_pair(keys::OWN_VAT_NUMBER, &request.own_vat_number)
        .append_pair(keys::VALIDATE_VAT_NUMBER, &request.validate_vat_number)
        .finish())
}
