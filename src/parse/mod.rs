//! Geo service response decoding.

use std::net::Ipv4Addr;

use roxmltree::{Document, Node};

use crate::error::LookupError;
use crate::record::{GeoField, GeoRecord};

/// Tag of the element describing one queried address.
const ADDRESS_TAG: &str = "ip";

/// Decodes a transcoded service payload into a [`GeoRecord`].
///
/// The payload root carries one [`ADDRESS_TAG`] element for the queried
/// address, whose sub-elements hold the geo attributes. A record counts as
/// found only when all four field sub-elements are present; a present but
/// empty element decodes to an empty string. Extra sub-elements the service
/// returns (`inetnum`, `lat`, `lng`) are read past and not retained.
///
/// # Errors
///
/// [`LookupError::MalformedResponse`] when the payload is not valid XML,
/// [`LookupError::AddressNotFound`] when the address element or any of the
/// four field sub-elements is missing.
pub(crate) fn decode_record(payload: &str, address: Ipv4Addr) -> Result<GeoRecord, LookupError> {
    let doc = Document::parse(payload)?;
    let root = doc.root_element();
    let ip_node = root
        .children()
        .find(|node| node.has_tag_name(ADDRESS_TAG))
        .ok_or(LookupError::AddressNotFound(address))?;

    Ok(GeoRecord {
        country: field_text(&ip_node, GeoField::Country, address)?,
        city: field_text(&ip_node, GeoField::City, address)?,
        region: field_text(&ip_node, GeoField::Region, address)?,
        district: field_text(&ip_node, GeoField::District, address)?,
    })
}

fn field_text(
    node: &Node<'_, '_>,
    field: GeoField,
    address: Ipv4Addr,
) -> Result<String, LookupError> {
    node.children()
        .find(|child| child.has_tag_name(field.as_str()))
        .map(|child| child.text().unwrap_or_default().to_string())
        .ok_or(LookupError::AddressNotFound(address))
}
