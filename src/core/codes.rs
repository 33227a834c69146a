//! eVatR error/result code descriptions.
//!
//! The BZSt publishes the list of codes returned in the `ErrorCode` field at
//! <https://evatr.bff-online.de/eVatR/xmlrpc/codes>. The table below mirrors
//! that page; codes the service adds later simply have no description.

/// The only code that confirms a VAT ID as valid.
pub const VALID_CODE: i32 = 200;

/// Look up the German description of an eVatR `ErrorCode`.
///
/// Returns `None` for codes that are not in the table.
pub fn error_description(code: i32) -> Option<&'static str> {
    ERROR_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|idx| ERROR_CODES[idx].1)
}

/// Check whether `code` is a documented eVatR code.
pub fn is_known_error_code(code: i32) -> bool {
    error_description(code).is_some()
}

/// BZSt eVatR codes (sorted for binary search).
static ERROR_CODES: &[(i32, &str)] = &[
    (200, "Die angefragte USt-IdNr. ist gültig."),
    (201, "Die angefragte USt-IdNr. ist ungültig."),
    (
        202,
        "Die angefragte USt-IdNr. ist ungültig. Sie ist nicht in der Unternehmerdatei des \
         betreffenden EU-Mitgliedstaates registriert. Hinweis: Ihr Geschäftspartner kann seine \
         gültige USt-IdNr. bei der für ihn zuständigen Finanzbehörde in Erfahrung bringen. \
         Möglicherweise muss er einen Antrag stellen, damit seine USt-IdNr. in die Datenbank \
         aufgenommen wird.",
    ),
    (
        203,
        "Die angefragte USt-IdNr. ist ungültig. Sie ist erst ab dem ... gültig (siehe Feld \
         'Gueltig_ab').",
    ),
    (
        204,
        "Die angefragte USt-IdNr. ist ungültig. Sie war im Zeitraum von ... bis ... gültig \
         (siehe Feld 'Gueltig_ab' und 'Gueltig_bis').",
    ),
    (
        205,
        "Ihre Anfrage kann derzeit durch den angefragten EU-Mitgliedstaat oder aus anderen \
         Gründen nicht beantwortet werden. Bitte versuchen Sie es später noch einmal. Bei \
         wiederholten Problemen wenden Sie sich bitte an das Bundeszentralamt für Steuern - \
         Dienstsitz Saarlouis.",
    ),
    (
        206,
        "Ihre deutsche USt-IdNr. ist ungültig. Eine Bestätigungsanfrage ist daher nicht \
         möglich. Den Grund hierfür können Sie beim Bundeszentralamt für Steuern - Dienstsitz \
         Saarlouis - erfragen.",
    ),
    (
        207,
        "Ihnen wurde die deutsche USt-IdNr. ausschliesslich zu Zwecken der Besteuerung des \
         innergemeinschaftlichen Erwerbs erteilt. Sie sind somit nicht berechtigt, \
         Bestätigungsanfragen zu stellen.",
    ),
    (
        208,
        "Für die von Ihnen angefragte USt-IdNr. läuft gerade eine Anfrage von einem anderen \
         Nutzer. Eine Bearbeitung ist daher nicht möglich. Bitte versuchen Sie es später noch \
         einmal.",
    ),
    (
        209,
        "Die angefragte USt-IdNr. ist ungültig. Sie entspricht nicht dem Aufbau der für diesen \
         EU-Mitgliedstaat gilt.",
    ),
    (
        210,
        "Die angefragte USt-IdNr. ist ungültig. Sie entspricht nicht den Prüfziffernregeln die \
         für diesen EU-Mitgliedstaat gelten.",
    ),
    (
        211,
        "Die angefragte USt-IdNr. ist ungültig. Sie enthält unzulässige Zeichen (wie z.B. \
         Leerzeichen oder Punkt oder Bindestrich usw.).",
    ),
    (
        212,
        "Die angefragte USt-IdNr. ist ungültig. Sie enthält ein unzulässiges Länderkennzeichen.",
    ),
    (213, "Sie sind nicht zur Abfrage einer deutschen USt-IdNr. berechtigt."),
    (
        214,
        "Ihre deutsche USt-IdNr. ist fehlerhaft. Sie beginnt mit 'DE' gefolgt von 9 Ziffern.",
    ),
    (
        215,
        "Ihre Anfrage enthält nicht alle notwendigen Angaben für eine einfache \
         Bestätigungsanfrage (Ihre deutsche USt-IdNr. und die ausl. USt-IdNr.). Ihre Anfrage \
         kann deshalb nicht bearbeitet werden.",
    ),
    (
        216,
        "Ihre Anfrage enthält nicht alle notwendigen Angaben für eine qualifizierte \
         Bestätigungsanfrage (Ihre deutsche USt-IdNr., die ausl. USt-IdNr., Firmenname \
         einschl. Rechtsform und Ort). Es wurde eine einfache Bestätigungsanfrage durchgeführt \
         mit folgenden Ergebnis: Die angefragte USt-IdNr. ist gültig.",
    ),
    (
        217,
        "Bei der Verarbeitung der Daten aus dem angefragten EU-Mitgliedstaat ist ein Fehler \
         aufgetreten. Ihre Anfrage kann deshalb nicht bearbeitet werden.",
    ),
    (
        218,
        "Eine qualifizierte Bestätigung ist zur Zeit nicht möglich. Es wurde eine einfache \
         Bestätigungsanfrage mit folgendem Ergebnis durchgeführt: Die angefragte USt-IdNr. ist \
         gültig.",
    ),
    (
        219,
        "Bei der Durchführung der qualifizierten Bestätigungsanfrage ist ein Fehler \
         aufgetreten. Es wurde eine einfache Bestätigungsanfrage mit folgendem Ergebnis \
         durchgeführt: Die angefragte USt-IdNr. ist gültig.",
    ),
    (
        220,
        "Bei der Anforderung der amtlichen Bestätigungsmitteilung ist ein Fehler aufgetreten. \
         Sie werden kein Schreiben erhalten.",
    ),
    (
        221,
        "Die Anfragedaten enthalten nicht alle notwendigen Parameter oder einen ungültigen \
         Datentyp. Weitere Informationen erhalten Sie bei den Hinweisen zum Schnittstelle - \
         Aufruf.",
    ),
    (
        223,
        "Die angefragte USt-IdNr. ist gültig. Die Druckfunktion steht nicht mehr zur \
         Verfügung, da der Nachweis gem. UStAE zu § 18e.1 zu führen ist.",
    ),
    (
        999,
        "Eine Bearbeitung Ihrer Anfrage ist zurzeit nicht möglich. Bitte versuchen Sie es \
         später noch einmal.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(
            error_description(200),
            Some("Die angefragte USt-IdNr. ist gültig.")
        );
        assert!(is_known_error_code(210));
        assert!(is_known_error_code(999));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(error_description(0), None);
        assert_eq!(error_description(-1), None);
        assert_eq!(error_description(222), None);
        assert!(!is_known_error_code(1000));
    }

    #[test]
    fn checksum_description_is_exact() {
        assert_eq!(
            error_description(210),
            Some(
                "Die angefragte USt-IdNr. ist ungültig. Sie entspricht nicht den \
                 Prüfziffernregeln die für diesen EU-Mitgliedstaat gelten."
            )
        );
    }

    #[test]
    fn code_list_is_sorted() {
        for window in ERROR_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "error codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn descriptions_are_single_spaced() {
        for (code, text) in ERROR_CODES {
            assert!(!text.contains("  "), "double space in description of {code}");
            assert_eq!(text.trim(), *text);
        }
    }
}
