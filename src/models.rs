//! Plain records backing the portal views. Nothing here is persisted;
//! the seed collections in `seed.rs` are the only source of instances
//! besides announcements composed during a session.

/// Synthetic identity stamped on announcements composed in the portal.
pub const POST_AUTHOR: &str = "Siz (Xədicə)";
pub const POST_DESCRIPTION: &str = "Ətraflı məlumat yoxdur.";
pub const POST_CATEGORY_PERSONAL: &str = "Şəxsi";
pub const POSTED_NOW: &str = "İndi";

#[derive(Debug, Clone)]
pub struct AnnouncementPost {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub posted_at: String,
}

/// Marketplace listing. `price_azn` is authoritative; display prices
/// are derived through `currency::convert` and never written back.
#[derive(Debug, Clone)]
pub struct MarketplaceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub price_azn: f64,
    pub image: &'static str,
    pub sold: u32,
}

#[derive(Debug, Clone)]
pub struct RideOffer {
    pub id: u64,
    pub driver: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub departure: &'static str,
    pub car: &'static str,
    pub seats: u32,
    pub price_azn: f64,
    pub verified: bool,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct TourPackage {
    pub id: u64,
    pub name: &'static str,
    pub rating: f64,
    pub price_azn: f64,
    pub category: &'static str,
}
