//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity — one row in the `cafe` table
///
/// Field order here is the wire order: serde serializes struct fields in
/// declaration order, so JSON key order is stable across responses.
/// Amenity flags are real booleans on the wire, not 0/1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    /// 店名，全表唯一
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    /// 所在地区，作为精确匹配的检索键
    pub location: String,
    /// Free-form seat range text, e.g. "20-30"
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free-form, may carry a currency symbol ("£2.75")
    pub coffee_price: Option<String>,
}

/// Create cafe payload (booleans already decoded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Raw `/add` form body — every field posted as a string
///
/// Amenity flags arrive as the literal tokens `True`/`False`; decoding
/// into [`CafeCreate`] happens in the server's validation layer so a bad
/// token can be reported per-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCafeForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: String,
    pub has_wifi: String,
    pub has_sockets: String,
    pub can_take_calls: String,
    pub coffee_price: String,
}
