use std::collections::HashMap;

use crate::core::{
    CheckResult, EvatrError, QualifiedResult, ResultType, VALID_CODE, error_description,
};

use super::payload::read_pairs;

/// Response field names used by the eVatR endpoint.
pub mod fields {
    pub const DATE: &str = "Datum";
    pub const TIME: &str = "Uhrzeit";
    pub const ERROR_CODE: &str = "ErrorCode";
    pub const OWN_VAT_NUMBER: &str = "UstId_1";
    pub const VALIDATED_VAT_NUMBER: &str = "UstId_2";
    pub const VALID_FROM: &str = "Gueltig_ab";
    pub const VALID_UNTIL: &str = "Gueltig_bis";
    pub const COMPANY_NAME: &str = "Firmenname";
    pub const CITY: &str = "Ort";
    pub const ZIP: &str = "PLZ";
    pub const STREET: &str = "Strasse";
    pub const PRINT: &str = "Druck";
    pub const RESULT_NAME: &str = "Erg_Name";
    pub const RESULT_CITY: &str = "Erg_Ort";
    pub const RESULT_ZIP: &str = "Erg_PLZ";
    pub const RESULT_STREET: &str = "Erg_Str";
}

/// The key/value pairs of an eVatR response, indexed by key.
///
/// The service sends an empty string and an omitted field interchangeably,
/// so both read as `None`.
#[derive(Debug, Clone)]
pub struct ResponseFields {
    pairs: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ResponseFields {
    /// Parse the raw payload into its key/value pairs.
    pub fn parse(xml: &str) -> Result<Self, EvatrError> {
        Ok(Self::from_pairs(read_pairs(xml)?))
    }

    /// Index already extracted pairs. The first occurrence of a key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut index = HashMap::with_capacity(pairs.len());
        for (i, (key, _)) in pairs.iter().enumerate() {
            index.entry(key.clone()).or_insert(i);
        }
        Self { pairs, index }
    }

    /// Value of `key`, or `None` if it is missing or empty.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.pairs[i].1.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Value of `key`, failing with `EvatrError::MissingField` if absent.
    pub fn required_value(&self, key: &str) -> Result<&str, EvatrError> {
        self.value(key)
            .ok_or_else(|| EvatrError::MissingField(key.to_string()))
    }

    /// All pairs in document order, including empty ones.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.value(key).map(str::to_string)
    }

    fn result_type(&self, key: &str) -> Result<Option<ResultType>, EvatrError> {
        self.value(key).map(ResultType::from_code).transpose()
    }
}

/// Parse a raw eVatR payload into a [`CheckResult`].
///
/// `qualified` selects whether company details and comparison results are
/// read. The raw payload is kept on the result only if `include_raw_xml` is
/// set.
///
/// # Errors
///
/// - `EvatrError::Xml` / `EvatrError::MalformedResponse` if the payload
///   cannot be read or `ErrorCode` is not an integer
/// - `EvatrError::MissingField` if `Datum`, `Uhrzeit`, `ErrorCode`,
///   `UstId_1` or `UstId_2` is absent
/// - `EvatrError::UnexpectedResultType` if an `Erg_*` field holds a value
///   other than `A`, `B`, `C` or `D`
pub fn parse_response(
    xml: &str,
    qualified: bool,
    include_raw_xml: bool,
) -> Result<CheckResult, EvatrError> {
    let fields = ResponseFields::parse(xml)?;

    let date = fields.required_value(fields::DATE)?.to_string();
    let time = fields.required_value(fields::TIME)?.to_string();
    let raw_code = fields.required_value(fields::ERROR_CODE)?;
    let error_code: i32 = raw_code.trim().parse().map_err(|_| {
        EvatrError::MalformedResponse(format!("ErrorCode '{raw_code}' is not an integer"))
    })?;
    let own_vat_number = fields.required_value(fields::OWN_VAT_NUMBER)?.to_string();
    let validated_vat_number = fields
        .required_value(fields::VALIDATED_VAT_NUMBER)?
        .to_string();

    let qualified = if qualified {
        Some(parse_qualified(&fields)?)
    } else {
        None
    };

    Ok(CheckResult {
        date,
        time,
        error_code,
        error_description: error_description(error_code).map(str::to_string),
        own_vat_number,
        validated_vat_number,
        valid_from: fields.owned(fields::VALID_FROM),
        valid_until: fields.owned(fields::VALID_UNTIL),
        valid: error_code == VALID_CODE,
        raw_xml: include_raw_xml.then(|| xml.to_string()),
        qualified,
    })
}

fn parse_qualified(fields: &ResponseFields) -> Result<QualifiedResult, EvatrError> {
    let result_name = fields.result_type(fields::RESULT_NAME)?;
    let result_city = fields.result_type(fields::RESULT_CITY)?;
    let result_zip = fields.result_type(fields::RESULT_ZIP)?;
    let result_street = fields.result_type(fields::RESULT_STREET)?;
    let describe = |rt: Option<ResultType>| rt.map(|rt| rt.description().to_string());

    Ok(QualifiedResult {
        company_name: fields.owned(fields::COMPANY_NAME),
        city: fields.owned(fields::CITY),
        zip: fields.owned(fields::ZIP),
        street: fields.owned(fields::STREET),
        result_name,
        result_city,
        result_zip,
        result_street,
        result_name_description: describe(result_name),
        result_city_description: describe(result_city),
        result_zip_description: describe(result_zip),
        result_street_description: describe(result_street),
        print: fields.value(fields::PRINT) == Some("ja"),
    })
}
