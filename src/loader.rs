//! Bulk loader: inserts all sample rows in dependency order within a single
//! transaction.
//!
//! The insert order is a fixed list, not computed from the schema: referenced
//! tables come before referencing ones, and employees arrive
//! manager-before-subordinate straight from the reference data. Any
//! constraint or length violation aborts the transaction, so a store is
//! either fully populated or untouched.

use crate::error::BootstrapError;
use crate::sample_data::{
    AlbumRow, ArtistRow, CustomerRow, EmployeeRow, GenreRow, InvoiceItemRow, InvoiceRow,
    MediaTypeRow, PlaylistRow, PlaylistTrackRow, SampleSet, TrackRow, DATETIME_FORMAT,
};
use crate::sqlite_persistence::Table;
use crate::store::schema;
use rusqlite::{params, Connection, Statement, Transaction};
use tracing::debug;

/// One row of a sample entity, bound to its table and insert statement.
pub trait SampleRecord {
    /// Schema table this record belongs to; also the source of length bounds.
    const TABLE: &'static Table;
    const INSERT_SQL: &'static str;

    /// Execute the prepared insert with this record's values.
    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize>;

    /// Identifier used in error messages, usually the primary key.
    fn row_key(&self) -> String;

    /// Text values subject to a declared length bound, by column name.
    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        Vec::new()
    }
}

/// SQLite stores VARCHAR(n) as unbounded TEXT, so the documented length
/// limits are checked here, at the load boundary.
fn check_lengths<R: SampleRecord>(record: &R) -> Result<(), BootstrapError> {
    for (column, value) in record.text_fields() {
        let max_len = match R::TABLE.max_len_of(column) {
            Some(max_len) => max_len,
            None => continue,
        };
        if let Some(value) = value {
            if value.chars().count() > max_len {
                return Err(BootstrapError::ConstraintViolation {
                    entity: R::TABLE.name,
                    row: record.row_key(),
                    message: format!("{} exceeds {} characters", column, max_len),
                });
            }
        }
    }
    Ok(())
}

fn insert_batch<R: SampleRecord>(tx: &Transaction<'_>, rows: &[R]) -> Result<(), BootstrapError> {
    let mut stmt = tx
        .prepare_cached(R::INSERT_SQL)
        .map_err(|e| BootstrapError::Schema(format!("{}: {}", R::TABLE.name, e)))?;
    for row in rows {
        check_lengths(row)?;
        row.bind(&mut stmt)
            .map_err(|e| BootstrapError::from_sqlite(R::TABLE.name, row.row_key(), e))?;
    }
    debug!("Inserted {} rows into {}", rows.len(), R::TABLE.name);
    Ok(())
}

/// Insert every sample row in dependency order and commit once.
///
/// If anything fails the transaction is dropped and rolls back; the store
/// keeps whatever state it had before the call.
pub fn load_samples(conn: &Connection, samples: &SampleSet) -> Result<(), BootstrapError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| BootstrapError::Schema(e.to_string()))?;

    insert_batch(&tx, &samples.media_types)?;
    insert_batch(&tx, &samples.genres)?;
    insert_batch(&tx, &samples.playlists)?;
    insert_batch(&tx, &samples.artists)?;
    insert_batch(&tx, &samples.employees)?;
    insert_batch(&tx, &samples.customers)?;
    insert_batch(&tx, &samples.invoices)?;
    insert_batch(&tx, &samples.albums)?;
    insert_batch(&tx, &samples.tracks)?;
    insert_batch(&tx, &samples.playlist_tracks)?;
    insert_batch(&tx, &samples.invoice_items)?;

    tx.commit()
        .map_err(|e| BootstrapError::Schema(e.to_string()))
}

impl SampleRecord for MediaTypeRow {
    const TABLE: &'static Table = schema::MEDIA_TYPES;
    const INSERT_SQL: &'static str =
        "INSERT INTO media_types (media_type_id, name) VALUES (?1, ?2)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.media_type_id, self.name])
    }

    fn row_key(&self) -> String {
        self.media_type_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("name", Some(&self.name))]
    }
}

impl SampleRecord for GenreRow {
    const TABLE: &'static Table = schema::GENRES;
    const INSERT_SQL: &'static str = "INSERT INTO genres (genre_id, name) VALUES (?1, ?2)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.genre_id, self.name])
    }

    fn row_key(&self) -> String {
        self.genre_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("name", Some(&self.name))]
    }
}

impl SampleRecord for PlaylistRow {
    const TABLE: &'static Table = schema::PLAYLISTS;
    const INSERT_SQL: &'static str = "INSERT INTO playlists (playlist_id, name) VALUES (?1, ?2)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.playlist_id, self.name])
    }

    fn row_key(&self) -> String {
        self.playlist_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("name", Some(&self.name))]
    }
}

impl SampleRecord for ArtistRow {
    const TABLE: &'static Table = schema::ARTISTS;
    const INSERT_SQL: &'static str = "INSERT INTO artists (artist_id, name) VALUES (?1, ?2)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.artist_id, self.name])
    }

    fn row_key(&self) -> String {
        self.artist_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("name", Some(&self.name))]
    }
}

impl SampleRecord for EmployeeRow {
    const TABLE: &'static Table = schema::EMPLOYEES;
    const INSERT_SQL: &'static str = "INSERT INTO employees \
         (employee_id, last_name, first_name, title, reports_to, birth_date, hire_date, \
          address, city, state, country, postal_code, phone, fax, email) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.employee_id,
            self.last_name,
            self.first_name,
            self.title,
            self.reports_to,
            self.birth_date.format(DATETIME_FORMAT).to_string(),
            self.hire_date.format(DATETIME_FORMAT).to_string(),
            self.address,
            self.city,
            self.state,
            self.country,
            self.postal_code,
            self.phone,
            self.fax,
            self.email,
        ])
    }

    fn row_key(&self) -> String {
        self.employee_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("last_name", Some(&self.last_name)),
            ("first_name", Some(&self.first_name)),
            ("title", Some(&self.title)),
            ("address", Some(&self.address)),
            ("city", Some(&self.city)),
            ("state", Some(&self.state)),
            ("country", Some(&self.country)),
            ("postal_code", Some(&self.postal_code)),
            ("phone", Some(&self.phone)),
            ("fax", Some(&self.fax)),
            ("email", Some(&self.email)),
        ]
    }
}

impl SampleRecord for CustomerRow {
    const TABLE: &'static Table = schema::CUSTOMERS;
    const INSERT_SQL: &'static str = "INSERT INTO customers \
         (customer_id, first_name, last_name, company, address, city, state, country, \
          postal_code, phone, fax, email, support_rep_id) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.customer_id,
            self.first_name,
            self.last_name,
            self.company,
            self.address,
            self.city,
            self.state,
            self.country,
            self.postal_code,
            self.phone,
            self.fax,
            self.email,
            self.support_rep_id,
        ])
    }

    fn row_key(&self) -> String {
        self.customer_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("first_name", Some(&self.first_name)),
            ("last_name", Some(&self.last_name)),
            ("company", self.company.as_deref()),
            ("address", self.address.as_deref()),
            ("city", self.city.as_deref()),
            ("state", self.state.as_deref()),
            ("country", self.country.as_deref()),
            ("postal_code", self.postal_code.as_deref()),
            ("phone", self.phone.as_deref()),
            ("fax", self.fax.as_deref()),
            ("email", self.email.as_deref()),
        ]
    }
}

impl SampleRecord for InvoiceRow {
    const TABLE: &'static Table = schema::INVOICES;
    const INSERT_SQL: &'static str = "INSERT INTO invoices \
         (invoice_id, customer_id, invoice_date, billing_address, billing_city, \
          billing_state, billing_country, billing_postal_code, total) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.invoice_id,
            self.customer_id,
            self.invoice_date.format(DATETIME_FORMAT).to_string(),
            self.billing_address,
            self.billing_city,
            self.billing_state,
            self.billing_country,
            self.billing_postal_code,
            self.total,
        ])
    }

    fn row_key(&self) -> String {
        self.invoice_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("billing_address", self.billing_address.as_deref()),
            ("billing_city", self.billing_city.as_deref()),
            ("billing_state", self.billing_state.as_deref()),
            ("billing_country", self.billing_country.as_deref()),
            ("billing_postal_code", self.billing_postal_code.as_deref()),
        ]
    }
}

impl SampleRecord for AlbumRow {
    const TABLE: &'static Table = schema::ALBUMS;
    const INSERT_SQL: &'static str =
        "INSERT INTO albums (album_id, title, artist_id) VALUES (?1, ?2, ?3)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.album_id, self.title, self.artist_id])
    }

    fn row_key(&self) -> String {
        self.album_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("title", Some(&self.title))]
    }
}

impl SampleRecord for TrackRow {
    const TABLE: &'static Table = schema::TRACKS;
    const INSERT_SQL: &'static str = "INSERT INTO tracks \
         (track_id, name, album_id, media_type_id, genre_id, composer, milliseconds, \
          total_bytes, unit_price) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.track_id,
            self.name,
            self.album_id,
            self.media_type_id,
            self.genre_id,
            self.composer,
            self.milliseconds,
            self.total_bytes,
            self.unit_price,
        ])
    }

    fn row_key(&self) -> String {
        self.track_id.to_string()
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("name", Some(&self.name)),
            ("composer", self.composer.as_deref()),
        ]
    }
}

impl SampleRecord for PlaylistTrackRow {
    const TABLE: &'static Table = schema::PLAYLIST_TRACK;
    const INSERT_SQL: &'static str =
        "INSERT INTO playlist_track (playlist_id, track_id) VALUES (?1, ?2)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.playlist_id, self.track_id])
    }

    fn row_key(&self) -> String {
        format!("{}/{}", self.playlist_id, self.track_id)
    }
}

impl SampleRecord for InvoiceItemRow {
    const TABLE: &'static Table = schema::INVOICE_ITEMS;
    const INSERT_SQL: &'static str = "INSERT INTO invoice_items \
         (invoice_line_id, invoice_id, track_id, unit_price, quantity) \
         VALUES (?1, ?2, ?3, ?4, ?5)";

    fn bind(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.invoice_line_id,
            self.invoice_id,
            self.track_id,
            self.unit_price,
            self.quantity,
        ])
    }

    fn row_key(&self) -> String {
        self.invoice_line_id.to_string()
    }
}
