//! SQLite schema definitions for the Chinook music-store database.
//!
//! Eleven tables: four root entities (artists, genres, media types,
//! playlists), the album/track catalog, the employee/customer/invoice chain
//! and two relation tables. Primary keys are integer ids carried by the
//! sample data. Text length bounds mirror the documented field limits and
//! are enforced by the loader, since SQLite ignores VARCHAR(n).

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

const ARTIST_FK: ForeignKey = ForeignKey {
    foreign_table: "artists",
    foreign_column: "artist_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const GENRE_FK: ForeignKey = ForeignKey {
    foreign_table: "genres",
    foreign_column: "genre_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const MEDIA_TYPE_FK: ForeignKey = ForeignKey {
    foreign_table: "media_types",
    foreign_column: "media_type_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const PLAYLIST_FK: ForeignKey = ForeignKey {
    foreign_table: "playlists",
    foreign_column: "playlist_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const TRACK_FK: ForeignKey = ForeignKey {
    foreign_table: "tracks",
    foreign_column: "track_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const EMPLOYEE_FK: ForeignKey = ForeignKey {
    foreign_table: "employees",
    foreign_column: "employee_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const CUSTOMER_FK: ForeignKey = ForeignKey {
    foreign_table: "customers",
    foreign_column: "customer_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const INVOICE_FK: ForeignKey = ForeignKey {
    foreign_table: "invoices",
    foreign_column: "invoice_id",
    on_delete: ForeignKeyOnChange::NoAction,
};

// =============================================================================
// Root Entities
// =============================================================================

/// Artists table - bands and solo musicians
const ARTISTS_TABLE: Table = Table {
    name: "artists",
    columns: &[
        sqlite_column!("artist_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, max_len = Some(120)),
    ],
    indices: &[],
};

/// Genres table - track genres such as Rock or Jazz
const GENRES_TABLE: Table = Table {
    name: "genres",
    columns: &[
        sqlite_column!("genre_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, max_len = Some(120)),
    ],
    indices: &[],
};

/// Media types table - audio/video container formats
const MEDIA_TYPES_TABLE: Table = Table {
    name: "media_types",
    columns: &[
        sqlite_column!("media_type_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, max_len = Some(120)),
    ],
    indices: &[],
};

/// Playlists table
const PLAYLISTS_TABLE: Table = Table {
    name: "playlists",
    columns: &[
        sqlite_column!("playlist_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, max_len = Some(120)),
    ],
    indices: &[],
};

// =============================================================================
// Catalog
// =============================================================================

/// Albums table - one artist, many albums
const ALBUMS_TABLE: Table = Table {
    name: "albums",
    columns: &[
        sqlite_column!("album_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("title", &SqlType::Text, non_null = true, max_len = Some(160)),
        sqlite_column!(
            "artist_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ARTIST_FK)
        ),
    ],
    indices: &[("idx_albums_artist", "artist_id")],
};

/// Tracks table - individual audio tracks.
///
/// `album_id` deliberately carries no REFERENCES clause: the source data
/// uses 0 for tracks without an album, so the column is indexed but not
/// enforced. Media type and genre are real foreign keys.
const TRACKS_TABLE: Table = Table {
    name: "tracks",
    columns: &[
        sqlite_column!("track_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, max_len = Some(200)),
        sqlite_column!("album_id", &SqlType::Integer, non_null = true),
        sqlite_column!(
            "media_type_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&MEDIA_TYPE_FK)
        ),
        sqlite_column!(
            "genre_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&GENRE_FK)
        ),
        sqlite_column!("composer", &SqlType::Text, max_len = Some(220)),
        sqlite_column!("milliseconds", &SqlType::Integer, non_null = true),
        sqlite_column!("total_bytes", &SqlType::Integer, non_null = true),
        sqlite_column!("unit_price", &SqlType::Real, non_null = true),
    ],
    indices: &[
        ("idx_tracks_album", "album_id"),
        ("idx_tracks_media_type", "media_type_id"),
        ("idx_tracks_genre", "genre_id"),
    ],
};

/// Playlist <-> Track relation, composite primary key
const PLAYLIST_TRACK_TABLE: Table = Table {
    name: "playlist_track",
    columns: &[
        sqlite_column!(
            "playlist_id",
            &SqlType::Integer,
            is_primary_key = true,
            foreign_key = Some(&PLAYLIST_FK)
        ),
        sqlite_column!(
            "track_id",
            &SqlType::Integer,
            is_primary_key = true,
            foreign_key = Some(&TRACK_FK)
        ),
    ],
    indices: &[("idx_playlist_track_track", "track_id")],
};

// =============================================================================
// Sales
// =============================================================================

/// Employees table - staff with a self-referencing manager chain.
///
/// `reports_to` is nullable: the general manager reports to nobody. The
/// sample data lists managers before their reports so the self-FK resolves
/// during a single ordered pass.
const EMPLOYEES_TABLE: Table = Table {
    name: "employees",
    columns: &[
        sqlite_column!("employee_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("last_name", &SqlType::Text, non_null = true, max_len = Some(20)),
        sqlite_column!("first_name", &SqlType::Text, non_null = true, max_len = Some(20)),
        sqlite_column!("title", &SqlType::Text, non_null = true, max_len = Some(30)),
        sqlite_column!(
            "reports_to",
            &SqlType::Integer,
            foreign_key = Some(&EMPLOYEE_FK)
        ),
        sqlite_column!("birth_date", &SqlType::Text, non_null = true),
        sqlite_column!("hire_date", &SqlType::Text, non_null = true),
        sqlite_column!("address", &SqlType::Text, non_null = true, max_len = Some(70)),
        sqlite_column!("city", &SqlType::Text, non_null = true, max_len = Some(40)),
        sqlite_column!("state", &SqlType::Text, non_null = true, max_len = Some(40)),
        sqlite_column!("country", &SqlType::Text, non_null = true, max_len = Some(40)),
        sqlite_column!("postal_code", &SqlType::Text, non_null = true, max_len = Some(10)),
        sqlite_column!("phone", &SqlType::Text, non_null = true, max_len = Some(24)),
        sqlite_column!("fax", &SqlType::Text, non_null = true, max_len = Some(24)),
        sqlite_column!("email", &SqlType::Text, non_null = true, max_len = Some(60)),
    ],
    indices: &[("idx_employees_reports_to", "reports_to")],
};

/// Customers table - may be assigned to a support representative
const CUSTOMERS_TABLE: Table = Table {
    name: "customers",
    columns: &[
        sqlite_column!("customer_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("first_name", &SqlType::Text, non_null = true, max_len = Some(40)),
        sqlite_column!("last_name", &SqlType::Text, non_null = true, max_len = Some(20)),
        sqlite_column!("company", &SqlType::Text, max_len = Some(80)),
        sqlite_column!("address", &SqlType::Text, max_len = Some(70)),
        sqlite_column!("city", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("state", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("country", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("postal_code", &SqlType::Text, max_len = Some(10)),
        sqlite_column!("phone", &SqlType::Text, max_len = Some(24)),
        sqlite_column!("fax", &SqlType::Text, max_len = Some(24)),
        sqlite_column!("email", &SqlType::Text, max_len = Some(60)),
        sqlite_column!(
            "support_rep_id",
            &SqlType::Integer,
            foreign_key = Some(&EMPLOYEE_FK)
        ),
    ],
    indices: &[("idx_customers_support_rep", "support_rep_id")],
};

/// Invoices table - one purchase per row, billing address denormalized
const INVOICES_TABLE: Table = Table {
    name: "invoices",
    columns: &[
        sqlite_column!("invoice_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "customer_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&CUSTOMER_FK)
        ),
        sqlite_column!("invoice_date", &SqlType::Text, non_null = true),
        sqlite_column!("billing_address", &SqlType::Text, max_len = Some(70)),
        sqlite_column!("billing_city", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("billing_state", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("billing_country", &SqlType::Text, max_len = Some(40)),
        sqlite_column!("billing_postal_code", &SqlType::Text, max_len = Some(10)),
        sqlite_column!("total", &SqlType::Real, non_null = true),
    ],
    indices: &[("idx_invoices_customer", "customer_id")],
};

/// Invoice line items - one track purchase per row, own surrogate key
const INVOICE_ITEMS_TABLE: Table = Table {
    name: "invoice_items",
    columns: &[
        sqlite_column!("invoice_line_id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "invoice_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&INVOICE_FK)
        ),
        sqlite_column!(
            "track_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&TRACK_FK)
        ),
        sqlite_column!("unit_price", &SqlType::Real, non_null = true),
        sqlite_column!("quantity", &SqlType::Integer, non_null = true),
    ],
    indices: &[
        ("idx_invoice_items_invoice", "invoice_id"),
        ("idx_invoice_items_track", "track_id"),
    ],
};

// =============================================================================
// Versioned Schema Definition
// =============================================================================

/// The Chinook schema, referenced tables listed before referencing ones.
pub const CHINOOK_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[
        ARTISTS_TABLE,
        GENRES_TABLE,
        MEDIA_TYPES_TABLE,
        PLAYLISTS_TABLE,
        ALBUMS_TABLE,
        TRACKS_TABLE,
        PLAYLIST_TRACK_TABLE,
        EMPLOYEES_TABLE,
        CUSTOMERS_TABLE,
        INVOICES_TABLE,
        INVOICE_ITEMS_TABLE,
    ],
}];

pub const ARTISTS: &Table = &ARTISTS_TABLE;
pub const GENRES: &Table = &GENRES_TABLE;
pub const MEDIA_TYPES: &Table = &MEDIA_TYPES_TABLE;
pub const PLAYLISTS: &Table = &PLAYLISTS_TABLE;
pub const ALBUMS: &Table = &ALBUMS_TABLE;
pub const TRACKS: &Table = &TRACKS_TABLE;
pub const PLAYLIST_TRACK: &Table = &PLAYLIST_TRACK_TABLE;
pub const EMPLOYEES: &Table = &EMPLOYEES_TABLE;
pub const CUSTOMERS: &Table = &CUSTOMERS_TABLE;
pub const INVOICES: &Table = &INVOICES_TABLE;
pub const INVOICE_ITEMS: &Table = &INVOICE_ITEMS_TABLE;
