use super::error::EvatrError;
use super::types::*;

/// Builder for confirmation requests.
///
/// Setting any company detail turns the request into a qualified check.
///
/// ```
/// use evatr::core::*;
///
/// let request = CheckRequestBuilder::new("DE115235681", "CZ00177041")
///     .company_name("ŠKODA AUTO a.s.")
///     .city("Mlada Boleslav")
///     .zip("293 01")
///     .build()
///     .unwrap();
///
/// assert!(request.is_qualified());
/// ```
pub struct CheckRequestBuilder {
    own_vat_number: String,
    validate_vat_number: String,
    include_raw_xml: bool,
    qualified: Option<QualifiedRequest>,
}

impl CheckRequestBuilder {
    pub fn new(own_vat_number: impl Into<String>, validate_vat_number: impl Into<String>) -> Self {
        Self {
            own_vat_number: own_vat_number.into(),
            validate_vat_number: validate_vat_number.into(),
            include_raw_xml: false,
            qualified: None,
        }
    }

    /// Keep the raw XML payload on the result.
    pub fn include_raw_xml(mut self, include: bool) -> Self {
        self.include_raw_xml = include;
        self
    }

    /// Company name including legal form (qualified check).
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.details().company_name = Some(name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.details().city = Some(city.into());
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.details().zip = Some(zip.into());
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.details().street = Some(street.into());
        self
    }

    /// Request an official confirmation letter by mail (qualified check).
    pub fn print(mut self, print: bool) -> Self {
        self.details().print = print;
        self
    }

    /// Validate and build the request.
    pub fn build(self) -> Result<CheckRequest, EvatrError> {
        let request = CheckRequest {
            own_vat_number: self.own_vat_number.trim().to_string(),
            validate_vat_number: self.validate_vat_number.trim().to_string(),
            include_raw_xml: self.include_raw_xml,
            qualified: self.qualified,
        };
        request.validate()?;
        Ok(request)
    }

    fn details(&mut self) -> &mut QualifiedRequest {
        self.qualified.get_or_insert_with(QualifiedRequest::default)
    }
}
