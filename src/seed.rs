//! Static seed collections. These are the portal's entire catalogue;
//! there is no backing store to refresh them from.

use crate::models::{AnnouncementPost, MarketplaceItem, RideOffer, TourPackage};

pub fn announcements() -> Vec<AnnouncementPost> {
    vec![
        AnnouncementPost {
            id: 1,
            author: "Həsən dayı".to_string(),
            title: "Ot biçini üçün kömək lazımdır".to_string(),
            description: "Sabah saat 08:00-da, ödənişli.".to_string(),
            category: "İş".to_string(),
            posted_at: "1 saat əvvəl".to_string(),
        },
        AnnouncementPost {
            id: 2,
            author: "Aygün xanım".to_string(),
            title: "İtmiş açar dəstəsi".to_string(),
            description: "Parkda 3 ədəd açar tapılıb. Sahibini axtarırıq.".to_string(),
            category: "Məlumat".to_string(),
            posted_at: "3 saat əvvəl".to_string(),
        },
    ]
}

pub fn marketplace_items() -> Vec<MarketplaceItem> {
    vec![
        MarketplaceItem {
            id: "m1",
            title: "Qarabağ Kətəsi",
            provider: "Sizin Satışınız",
            price_azn: 5.0,
            image: "https://images.unsplash.com/photo-1556910103-1c02745aae4d?w=800",
            sold: 12,
        },
        MarketplaceItem {
            id: "m2",
            title: "Təbii Bal",
            provider: "Sizin Satışınız",
            price_azn: 45.0,
            image: "https://images.unsplash.com/photo-1587049352846-4a222e784d38?w=800",
            sold: 5,
        },
    ]
}

pub fn ride_offers() -> Vec<RideOffer> {
    vec![
        RideOffer {
            id: 1,
            driver: "Elvin M.",
            origin: "Bakı",
            destination: "Şuşa",
            departure: "08:00",
            car: "Toyota Prius",
            seats: 3,
            price_azn: 15.0,
            verified: true,
        },
        RideOffer {
            id: 2,
            driver: "Aysel K.",
            origin: "Füzuli",
            destination: "Ağalı",
            departure: "14:30",
            car: "Kia Sportage",
            seats: 2,
            price_azn: 10.0,
            verified: true,
        },
    ]
}

pub fn tour_packages() -> Vec<TourPackage> {
    vec![
        TourPackage {
            id: 1,
            name: "Karabakh Eco Tours",
            rating: 4.8,
            price_azn: 150.0,
            category: "Green Tour",
        },
        TourPackage {
            id: 2,
            name: "Shusha Heritage",
            rating: 4.9,
            price_azn: 200.0,
            category: "History",
        },
    ]
}
