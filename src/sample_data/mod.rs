//! Sample data source: reads the bundled reference CSV files into canonical
//! row records, one file per entity.
//!
//! A missing file, a malformed row or an unparsable date is a fatal
//! `DataSource` error carrying the entity name and row number; there is no
//! partial load.

mod records;

pub use records::{
    parse_datetime, AlbumRow, ArtistRow, CustomerRow, EmployeeRow, GenreRow, InvoiceItemRow,
    InvoiceRow, MediaTypeRow, PlaylistRow, PlaylistTrackRow, TrackRow, DATETIME_FORMAT,
};

use crate::error::BootstrapError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

fn read_rows<T: DeserializeOwned>(
    samples_dir: &Path,
    entity: &'static str,
    file_name: &str,
) -> Result<Vec<T>, BootstrapError> {
    let path = samples_dir.join(file_name);
    let mut reader = csv::Reader::from_path(&path).map_err(|e| BootstrapError::DataSource {
        entity,
        message: format!("{}: {}", path.display(), e),
    })?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        // index 0 is the first data row; line 1 of the file is the header
        let row = result.map_err(|e| BootstrapError::DataSource {
            entity,
            message: format!("line {}: {}", index + 2, e),
        })?;
        rows.push(row);
    }
    debug!("Read {} {} rows from {}", rows.len(), entity, path.display());
    Ok(rows)
}

/// All eleven entities' rows, loaded up front.
pub struct SampleSet {
    pub artists: Vec<ArtistRow>,
    pub albums: Vec<AlbumRow>,
    pub genres: Vec<GenreRow>,
    pub media_types: Vec<MediaTypeRow>,
    pub tracks: Vec<TrackRow>,
    pub playlists: Vec<PlaylistRow>,
    pub playlist_tracks: Vec<PlaylistTrackRow>,
    pub employees: Vec<EmployeeRow>,
    pub customers: Vec<CustomerRow>,
    pub invoices: Vec<InvoiceRow>,
    pub invoice_items: Vec<InvoiceItemRow>,
}

impl SampleSet {
    pub fn load(samples_dir: &Path) -> Result<Self, BootstrapError> {
        Ok(SampleSet {
            artists: read_rows(samples_dir, "artists", "artists.csv")?,
            albums: read_rows(samples_dir, "albums", "albums.csv")?,
            genres: read_rows(samples_dir, "genres", "genres.csv")?,
            media_types: read_rows(samples_dir, "media_types", "media_types.csv")?,
            tracks: read_rows(samples_dir, "tracks", "tracks.csv")?,
            playlists: read_rows(samples_dir, "playlists", "playlists.csv")?,
            playlist_tracks: read_rows(samples_dir, "playlist_track", "playlist_track.csv")?,
            employees: read_rows(samples_dir, "employees", "employees.csv")?,
            customers: read_rows(samples_dir, "customers", "customers.csv")?,
            invoices: read_rows(samples_dir, "invoices", "invoices.csv")?,
            invoice_items: read_rows(samples_dir, "invoice_items", "invoice_items.csv")?,
        })
    }

    /// Row count per entity table, in load order.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("media_types", self.media_types.len()),
            ("genres", self.genres.len()),
            ("playlists", self.playlists.len()),
            ("artists", self.artists.len()),
            ("employees", self.employees.len()),
            ("customers", self.customers.len()),
            ("invoices", self.invoices.len()),
            ("albums", self.albums.len()),
            ("tracks", self.tracks.len()),
            ("playlist_track", self.playlist_tracks.len()),
            ("invoice_items", self.invoice_items.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_read_rows_renames_source_headers() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "artists.csv", "ArtistId,Name\n1,AC/DC\n2,Accept\n");

        let artists: Vec<ArtistRow> = read_rows(dir.path(), "artists", "artists.csv").unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].artist_id, 1);
        assert_eq!(artists[0].name, "AC/DC");
    }

    #[test]
    fn test_read_rows_missing_file_is_data_source_error() {
        let dir = TempDir::new().unwrap();
        let result: Result<Vec<ArtistRow>, _> = read_rows(dir.path(), "artists", "artists.csv");
        match result {
            Err(BootstrapError::DataSource { entity, .. }) => assert_eq!(entity, "artists"),
            other => panic!("expected DataSource error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "customers.csv",
            "CustomerId,FirstName,LastName,Company,Address,City,State,Country,PostalCode,Phone,Fax,Email,SupportRepId\n\
             1,Helena,Holý,,Rilská 3174/6,Prague,,Czech Republic,14300,+420 2 4177 0449,,hholy@gmail.com,\n",
        );

        let customers: Vec<CustomerRow> =
            read_rows(dir.path(), "customers", "customers.csv").unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].company, None);
        assert_eq!(customers[0].state, None);
        assert_eq!(customers[0].fax, None);
        assert_eq!(customers[0].support_rep_id, None);
        assert_eq!(customers[0].city.as_deref(), Some("Prague"));
    }

    #[test]
    fn test_quoted_composer_with_commas() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "tracks.csv",
            "TrackId,Name,AlbumId,MediaTypeId,GenreId,Composer,Milliseconds,Bytes,UnitPrice\n\
             1,For Those About To Rock (We Salute You),1,1,1,\"Angus Young, Malcolm Young, Brian Johnson\",343719,11170334,0.99\n\
             2,Balls to the Wall,2,2,1,,342562,5510424,0.99\n",
        );

        let tracks: Vec<TrackRow> = read_rows(dir.path(), "tracks", "tracks.csv").unwrap();
        assert_eq!(
            tracks[0].composer.as_deref(),
            Some("Angus Young, Malcolm Young, Brian Johnson")
        );
        assert_eq!(tracks[1].composer, None);
    }

    #[test]
    fn test_unparsable_date_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "invoices.csv",
            "InvoiceId,CustomerId,InvoiceDate,BillingAddress,BillingCity,BillingState,BillingCountry,BillingPostalCode,Total\n\
             1,2,not-a-date,Theodor-Heuss-Straße 34,Stuttgart,,Germany,70174,1.98\n",
        );

        let result: Result<Vec<InvoiceRow>, _> = read_rows(dir.path(), "invoices", "invoices.csv");
        match result {
            Err(BootstrapError::DataSource { entity, message }) => {
                assert_eq!(entity, "invoices");
                assert!(message.contains("line 2"));
            }
            _ => panic!("expected DataSource error"),
        }
    }
}
