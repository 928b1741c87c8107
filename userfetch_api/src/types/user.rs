//! User records returned by the `/users` endpoint.

use serde::{Deserialize, Serialize};

/// A single user record as served by the API. Plain transport data; no
/// validation or lifecycle beyond deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Full display name.
    pub name: String,

    pub username: String,

    pub email: String,

    pub address: Address,

    pub phone: String,

    pub website: String,

    pub company: Company,
}

/// Postal address nested inside a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,

    pub suite: String,

    pub city: String,

    pub zipcode: String,

    pub geo: Geo,
}

/// Coordinates, encoded as strings by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,

    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,

    pub catch_phrase: String,

    pub bs: String,
}
