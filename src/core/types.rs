use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::EvatrError;

/// Date format used by the eVatR service (`Datum`, `Gueltig_ab`, `Gueltig_bis`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Time format used by the eVatR service (`Uhrzeit`).
pub const TIME_FORMAT: &str = "%H:%M:%S";

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Outcome of comparing one company detail in a qualified check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultType {
    /// `A`: the submitted value matches the registry.
    #[serde(rename = "A")]
    Match,
    /// `B`: the submitted value does not match the registry.
    #[serde(rename = "B")]
    NoMatch,
    /// `C`: the value was not part of the request.
    #[serde(rename = "C")]
    NotQueried,
    /// `D`: the member state did not return a value to compare against.
    #[serde(rename = "D")]
    NotReturned,
}

impl ResultType {
    /// Decode the one-letter code used by the eVatR service.
    pub fn from_code(code: &str) -> Result<Self, EvatrError> {
        match code {
            "A" => Ok(Self::Match),
            "B" => Ok(Self::NoMatch),
            "C" => Ok(Self::NotQueried),
            "D" => Ok(Self::NotReturned),
            other => Err(EvatrError::UnexpectedResultType(other.to_string())),
        }
    }

    /// The one-letter code used by the eVatR service.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Match => "A",
            Self::NoMatch => "B",
            Self::NotQueried => "C",
            Self::NotReturned => "D",
        }
    }

    /// German description as shown on the official confirmation.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Match => "stimmt überein",
            Self::NoMatch => "stimmt nicht überein",
            Self::NotQueried => "nicht angefragt",
            Self::NotReturned => "vom EU-Mitgliedsstaat nicht mitgeteilt",
        }
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A confirmation request for a foreign VAT ID.
///
/// Build via [`CheckRequestBuilder`](super::CheckRequestBuilder) or construct
/// directly; either way the VAT numbers are checked before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckRequest {
    /// Requester's own German VAT ID, e.g. `DE115235681`.
    pub own_vat_number: String,
    /// Foreign VAT ID to confirm, e.g. `CZ00177041`.
    pub validate_vat_number: String,
    /// Keep the raw XML payload on the result.
    pub include_raw_xml: bool,
    /// Company details for a qualified check. `None` means a simple check.
    pub qualified: Option<QualifiedRequest>,
}

/// Company details compared by a qualified check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedRequest {
    /// Company name including legal form.
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub street: Option<String>,
    /// Request an official confirmation letter by mail.
    pub print: bool,
}

impl CheckRequest {
    /// A simple check of `validate_vat_number` on behalf of `own_vat_number`.
    pub fn simple(own_vat_number: impl Into<String>, validate_vat_number: impl Into<String>) -> Self {
        Self {
            own_vat_number: own_vat_number.into(),
            validate_vat_number: validate_vat_number.into(),
            include_raw_xml: false,
            qualified: None,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified.is_some()
    }

    /// Check the invariants every request must satisfy before it is sent.
    pub fn validate(&self) -> Result<(), EvatrError> {
        if self.own_vat_number.trim().is_empty() {
            return Err(EvatrError::InvalidArgument(
                "own VAT number is required".into(),
            ));
        }
        if self.validate_vat_number.trim().is_empty() {
            return Err(EvatrError::InvalidArgument(
                "VAT number to validate is required".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Parsed answer of the eVatR service.
///
/// Absent values are omitted when serialized, so `raw_xml` only appears in
/// JSON output when it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// `Datum`, date of the check (`DD.MM.YYYY`).
    pub date: String,
    /// `Uhrzeit`, time of the check (`HH:MM:SS`).
    pub time: String,
    pub error_code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    pub own_vat_number: String,
    pub validated_vat_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    /// `true` iff `error_code` is 200.
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_xml: Option<String>,
    /// Comparison results; present only for qualified checks.
    ///
    /// Deserializes to `None` unless the flattened keys include `print`,
    /// which a qualified result always writes.
    #[serde(flatten)]
    pub qualified: Option<QualifiedResult>,
}

/// Company details and comparison results of a qualified check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_name: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_city: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_zip: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_street: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_name_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_city_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_zip_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_street_description: Option<String>,
    /// Whether a confirmation letter was requested. Always serialized; it
    /// marks the flattened details as present.
    pub print: bool,
}

impl CheckResult {
    /// Timestamp of the check as reported by the service (German local time).
    pub fn checked_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = chrono::NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }

    pub fn valid_from_date(&self) -> Option<NaiveDate> {
        parse_date(self.valid_from.as_deref())
    }

    pub fn valid_until_date(&self) -> Option<NaiveDate> {
        parse_date(self.valid_until.as_deref())
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_codes() {
        for rt in [
            ResultType::Match,
            ResultType::NoMatch,
            ResultType::NotQueried,
            ResultType::NotReturned,
        ] {
            assert_eq!(ResultType::from_code(rt.code()).unwrap(), rt);
        }
    }

    #[test]
    fn result_type_rejects_unknown() {
        let err = ResultType::from_code("E").unwrap_err();
        assert!(matches!(err, EvatrError::UnexpectedResultType(ref v) if v == "E"));
        assert!(ResultType::from_code("a").is_err());
    }

    #[test]
    fn result_type_descriptions() {
        assert_eq!(ResultType::Match.description(), "stimmt überein");
        assert_eq!(ResultType::NoMatch.description(), "stimmt nicht überein");
        assert_eq!(ResultType::NotQueried.description(), "nicht angefragt");
        assert_eq!(
            ResultType::NotReturned.description(),
            "vom EU-Mitgliedsstaat nicht mitgeteilt"
        );
    }

    #[test]
    fn request_requires_both_numbers() {
        assert!(CheckRequest::simple("DE115235681", "CZ00177041").validate().is_ok());
        assert!(CheckRequest::simple("", "CZ00177041").validate().is_err());
        assert!(CheckRequest::simple("DE115235681", "  ").validate().is_err());
        assert!(CheckRequest::default().validate().is_err());
    }

    #[test]
    fn checked_at_parses_service_timestamp() {
        let result = CheckResult {
            date: "06.02.2023".into(),
            time: "19:16:24".into(),
            error_code: 200,
            error_description: None,
            own_vat_number: "DE115235681".into(),
            validated_vat_number: "CZ00177041".into(),
            valid_from: Some("01.01.2020".into()),
            valid_until: Some("garbage".into()),
            valid: true,
            raw_xml: None,
            qualified: None,
        };
        let ts = result.checked_at().unwrap();
        assert_eq!(ts.to_string(), "2023-02-06 19:16:24");
        assert_eq!(
            result.valid_from_date(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(result.valid_until_date(), None);
    }
}
