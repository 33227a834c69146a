//! Reader for the eVatR XML-RPC-like payload.
//!
//! ```xml
//! <params>
//!   <param>
//!     <value><array><data>
//!       <value><string>ErrorCode</string></value>
//!       <value><string>200</string></value>
//!     </data></array></value>
//!   </param>
//! </params>
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::EvatrError;

/// Extract the `(key, value)` pairs of every `<param>` in document order.
///
/// Each `<param>` must hold an array of exactly two values. Values can be
/// wrapped in `<string>` or given as bare `<value>` text. Text is kept
/// verbatim, including surrounding whitespace; only the layout whitespace
/// between elements is dropped.
pub(crate) fn read_pairs(xml: &str) -> Result<Vec<(String, String)>, EvatrError> {
    let mut reader = Reader::from_str(xml);

    let mut path: Vec<String> = Vec::new();
    let mut seen_params = false;
    let mut pairs = Vec::new();
    let mut values: Option<Vec<String>> = None;
    let mut text: Option<ItemText> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match name.as_str() {
                    "params" => seen_params = true,
                    "param" if in_element(&path, "params") => values = Some(Vec::new()),
                    "value" if is_array_item(&path, &values) => text = Some(ItemText::default()),
                    "string" if in_element(&path, "value") => {
                        if let Some(item) = text.as_mut() {
                            item.string.get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                }
                path.push(name);
            }
            Event::Empty(ref e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"params" => seen_params = true,
                    b"param" if in_element(&path, "params") => {
                        return Err(EvatrError::MalformedResponse(format!(
                            "param #{} is empty",
                            pairs.len() + 1
                        )));
                    }
                    b"value" if is_array_item(&path, &values) => {
                        if let Some(values) = values.as_mut() {
                            values.push(String::new());
                        }
                    }
                    b"string" if in_element(&path, "value") => {
                        if let Some(item) = text.as_mut() {
                            item.string.get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if let Some(buf) = text.as_mut().and_then(|item| item.buffer(&path)) {
                    buf.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(buf) = text.as_mut().and_then(|item| item.buffer(&path)) {
                    buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let ended = path.pop().unwrap_or_default();
                if ended == "value" && is_array_item(&path, &values) {
                    if let (Some(values), Some(item)) = (values.as_mut(), text.take()) {
                        values.push(item.into_value());
                    }
                } else if ended == "param" {
                    if let Some(values) = values.take() {
                        pairs.push(into_pair(values, pairs.len() + 1)?);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_params {
        return Err(EvatrError::MalformedResponse(
            "no <params> element in response".into(),
        ));
    }
    Ok(pairs)
}

fn in_element(path: &[String], name: &str) -> bool {
    path.last().is_some_and(|last| last == name)
}

/// A `<value>` directly inside `<data>` of the current param's array.
fn is_array_item(path: &[String], values: &Option<Vec<String>>) -> bool {
    values.is_some() && in_element(path, "data")
}

/// Text collected for one array item.
#[derive(Default)]
struct ItemText {
    /// Content of a `<string>` child, once one has been opened.
    string: Option<String>,
    /// Text directly inside `<value>`.
    bare: String,
}

impl ItemText {
    /// Buffer for text at the current position, if it belongs to the value.
    fn buffer(&mut self, path: &[String]) -> Option<&mut String> {
        match path.last().map(String::as_str) {
            Some("string") => self.string.as_mut(),
            Some("value") => Some(&mut self.bare),
            _ => None,
        }
    }

    /// A `<string>` child wins; the whitespace around it is layout.
    fn into_value(self) -> String {
        self.string.unwrap_or(self.bare)
    }
}

fn into_pair(values: Vec<String>, index: usize) -> Result<(String, String), EvatrError> {
    let count = values.len();
    let mut iter = values.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(key), Some(value), None) => Ok((key, value)),
        _ => Err(EvatrError::MalformedResponse(format!(
            "param #{index} holds {count} values, expected key and value"
        ))),
    }
}
