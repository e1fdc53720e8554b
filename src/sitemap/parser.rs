//! Sitemap XML parser for extracting `<loc>` values
//!
//! Every element whose local name is `loc` contributes its text, wherever it
//! sits in the document. The `<urlset>`/`<sitemapindex>` wrapper is not
//! enforced, so both page sitemaps and sitemap indexes yield their locations.

use quick_xml::events::Event;
use quick_xml::Reader;

const LOC: &[u8] = b"loc";

/// Extracts the text of every `<loc>` element in document order
///
/// Namespace prefixes are ignored (`<sm:loc>` counts). Text is trimmed;
/// entity references are unescaped and CDATA sections are taken verbatim.
/// A `<loc>` nested inside another yields its own entry, and the outer
/// entry also carries the inner text.
///
/// # Errors
///
/// Returns a message describing the problem when the body is not
/// well-formed XML: mismatched or unclosed tags, bad entities, text outside
/// the root element, more than one root element, or no root element at all.
///
/// # Example
///
/// ```
/// use sumi_sitemap::sitemap::extract_locations;
///
/// let xml = r#"<urlset><url><loc>https://x/1</loc></url></urlset>"#;
/// assert_eq!(extract_locations(xml).unwrap(), vec!["https://x/1"]);
/// ```
pub fn extract_locations(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locations: Vec<String> = Vec::new();
    // Indexes into `locations` of the `<loc>` elements currently open
    let mut open_locs: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.buffer_position(), e))?;

        match event {
            Event::Start(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err(format!("at byte {}: more than one root element", position));
                    }
                    root_seen = true;
                }
                depth += 1;
                if e.local_name().as_ref() == LOC {
                    open_locs.push(locations.len());
                    locations.push(String::new());
                }
            }
            Event::Empty(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err(format!("at byte {}: more than one root element", position));
                    }
                    root_seen = true;
                }
                if e.local_name().as_ref() == LOC {
                    locations.push(String::new());
                }
            }
            Event::Text(ref e) => {
                if depth == 0 {
                    return Err(format!("at byte {}: text outside the root element", position));
                }
                if !open_locs.is_empty() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| format!("at byte {}: {}", reader.buffer_position(), e))?;
                    for &slot in &open_locs {
                        locations[slot].push_str(&unescaped);
                    }
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(format!("at byte {}: CDATA outside the root element", position));
                }
                if !open_locs.is_empty() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    for &slot in &open_locs {
                        locations[slot].push_str(&text);
                    }
                }
            }
            Event::End(ref e) => {
                depth = depth.saturating_sub(1);
                if e.local_name().as_ref() == LOC {
                    if let Some(slot) = open_locs.pop() {
                        let trimmed = locations[slot].trim().to_string();
                        locations[slot] = trimmed;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err("document has no root element".to_string());
    }

    if depth != 0 {
        return Err(format!("document ended with {} unclosed element(s)", depth));
    }

    Ok(locations)
}
