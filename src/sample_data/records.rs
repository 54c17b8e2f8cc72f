//! Canonical row records for the eleven sample entities.
//!
//! Field names are snake_case; the serde rename attributes map them to the
//! PascalCase headers used by the reference CSV files. Date-valued fields
//! are parsed into `chrono::NaiveDateTime` at read time, so a malformed
//! date fails the load before anything touches the database.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

/// Storage format for date-time values, e.g. `2009-01-08 00:00:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a source date value, accepting a bare date as midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
}

fn de_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRow {
    #[serde(rename = "ArtistId")]
    pub artist_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRow {
    #[serde(rename = "AlbumId")]
    pub album_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ArtistId")]
    pub artist_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreRow {
    #[serde(rename = "GenreId")]
    pub genre_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaTypeRow {
    #[serde(rename = "MediaTypeId")]
    pub media_type_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRow {
    #[serde(rename = "TrackId")]
    pub track_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    /// Not a foreign key; 0 in the source data for tracks without an album.
    #[serde(rename = "AlbumId")]
    pub album_id: i64,
    #[serde(rename = "MediaTypeId")]
    pub media_type_id: i64,
    #[serde(rename = "GenreId")]
    pub genre_id: i64,
    #[serde(rename = "Composer")]
    pub composer: Option<String>,
    #[serde(rename = "Milliseconds")]
    pub milliseconds: i64,
    #[serde(rename = "Bytes")]
    pub total_bytes: i64,
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRow {
    #[serde(rename = "PlaylistId")]
    pub playlist_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackRow {
    #[serde(rename = "PlaylistId")]
    pub playlist_id: i64,
    #[serde(rename = "TrackId")]
    pub track_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRow {
    #[serde(rename = "EmployeeId")]
    pub employee_id: i64,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// None for the top of the reporting chain.
    #[serde(rename = "ReportsTo")]
    pub reports_to: Option<i64>,
    #[serde(rename = "BirthDate", deserialize_with = "de_datetime")]
    pub birth_date: NaiveDateTime,
    #[serde(rename = "HireDate", deserialize_with = "de_datetime")]
    pub hire_date: NaiveDateTime,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Fax")]
    pub fax: String,
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRow {
    #[serde(rename = "CustomerId")]
    pub customer_id: i64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Fax")]
    pub fax: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    /// None for customers without an assigned support representative.
    #[serde(rename = "SupportRepId")]
    pub support_rep_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceRow {
    #[serde(rename = "InvoiceId")]
    pub invoice_id: i64,
    #[serde(rename = "CustomerId")]
    pub customer_id: i64,
    #[serde(rename = "InvoiceDate", deserialize_with = "de_datetime")]
    pub invoice_date: NaiveDateTime,
    #[serde(rename = "BillingAddress")]
    pub billing_address: Option<String>,
    #[serde(rename = "BillingCity")]
    pub billing_city: Option<String>,
    #[serde(rename = "BillingState")]
    pub billing_state: Option<String>,
    #[serde(rename = "BillingCountry")]
    pub billing_country: Option<String>,
    #[serde(rename = "BillingPostalCode")]
    pub billing_postal_code: Option<String>,
    #[serde(rename = "Total")]
    pub total: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceItemRow {
    #[serde(rename = "InvoiceLineId")]
    pub invoice_line_id: i64,
    #[serde(rename = "InvoiceId")]
    pub invoice_id: i64,
    #[serde(rename = "TrackId")]
    pub track_id: i64,
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
}
