//! Rider to report-row transformation
//!
//! A rider without metadata is skipped. Every other missing field becomes an
//! empty string, and the mailing address is composed from unit and street:
//! `"{unit}-{address}"` when a unit is present, otherwise the bare address.

use crate::domain::{Rider, RiderRow};

/// Result of transforming a batch of riders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformReport {
    /// Rows in input order
    pub rows: Vec<RiderRow>,

    /// Riders dropped for lack of metadata
    pub skipped: usize,

    /// Rows emitted with an empty mailing address
    pub missing_address: usize,
}

/// Transform one rider, or `None` if it has no metadata
pub fn transform_rider(rider: &Rider) -> Option<RiderRow> {
    tracing::info!("Processing rider: {}", rider.display_id());

    let metadata = match rider.metadata.as_ref() {
        Some(metadata) if !metadata.is_empty() => metadata,
        _ => {
            tracing::warn!("No metadata found for rider: {rider:?}");
            return None;
        }
    };

    tracing::debug!("Rider metadata: {metadata:?}");

    let mailing_address = compose_mailing_address(
        metadata.mailing_address_unit.as_deref(),
        metadata.mailing_address.as_deref(),
    );
    if mailing_address.is_empty() {
        tracing::warn!("Incomplete address information for rider: {rider:?}");
    }

    Some(RiderRow {
        registration_number: text(&rider.external_numeric_id),
        first_name: text(&rider.first_name),
        last_name: text(&rider.last_name),
        telephone: text(&rider.phone_number),
        telephone_ext: String::new(),
        email: text(&rider.email),
        mailing_address,
        city: text(&metadata.mailing_city),
        province_state: text(&metadata.mailing_province_state),
        postal_zip_code: text(&metadata.mailing_postal_zip_code),
    })
}

/// Transform riders in order, counting skips and address gaps
pub fn transform_riders(riders: &[Rider]) -> TransformReport {
    let mut report = TransformReport::default();

    for rider in riders {
        match transform_rider(rider) {
            Some(row) => {
                if row.mailing_address.is_empty() {
                    report.missing_address += 1;
                }
                report.rows.push(row);
            }
            None => report.skipped += 1,
        }
    }

    report
}

/// Join unit and street address
pub fn compose_mailing_address(unit: Option<&str>, address: Option<&str>) -> String {
    let address = address.unwrap_or_default();
    match unit {
        Some(unit) if !unit.is_empty() => format!("{unit}-{address}"),
        _ => address.to_string(),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
