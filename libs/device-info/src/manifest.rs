//! Application manifest parsing.

use crate::error::ManifestError;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Well-known manifest file name at the application package root.
pub const MANIFEST_FILE_NAME: &str = "WMAppManifest.xml";

const APP_ELEMENT: &[u8] = b"App";
const VERSION_ATTRIBUTE: &[u8] = b"Version";

/// Extract the `Version` attribute of the first `App` element.
///
/// The element may sit anywhere in the document, including the root.
/// Returns `Ok(None)` when there is no `App` element or it carries no
/// `Version`. Malformed XML before the element is reached is an error.
pub fn parse_app_version(xml: &[u8]) -> Result<Option<String>, ManifestError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) | Event::Empty(element)
                if element.name().as_ref() == APP_ELEMENT =>
            {
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    if attribute.key.as_ref() == VERSION_ATTRIBUTE {
                        let value = attribute.unescape_value()?;
                        return Ok(Some(value.into_owned()));
                    }
                }
                return Ok(None);
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}
