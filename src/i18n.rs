//! Static display-string table. Shorter labels live here; longer page
//! copy stays bilingual inline in the templates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Az,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Az => "AZ",
            Language::En => "EN",
        }
    }

    pub fn parse(value: &str) -> Option<Language> {
        match value {
            "AZ" => Some(Language::Az),
            "EN" => Some(Language::En),
            _ => None,
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::Az => Language::En,
            Language::En => Language::Az,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Az => &AZ,
            Language::En => &EN,
        }
    }
}

pub struct Labels {
    pub home: &'static str,
    pub map: &'static str,
    pub support: &'static str,
    pub market: &'static str,
    pub travel: &'static str,
    pub rideshare: &'static str,
    pub logout: &'static str,
    pub scan: &'static str,
    pub verified: &'static str,
    pub book: &'static str,
    pub announcements: &'static str,
    pub mybiz: &'static str,
    pub add_product: &'static str,
    pub resident_badge: &'static str,
    pub guest_badge: &'static str,
}

static AZ: Labels = Labels {
    home: "Ana Səhifə",
    map: "Xəritə",
    support: "Dəstək",
    market: "Bazar",
    travel: "Səyahət",
    rideshare: "Yol Yoldaşı",
    logout: "Çıxış",
    scan: "QR Oxut",
    verified: "Təsdiqlənib",
    book: "Bron Et",
    announcements: "Elanlar",
    mybiz: "Satış Paneli",
    add_product: "Məhsul Əlavə Et",
    resident_badge: "Yerli Sakin",
    guest_badge: "Qonaq",
};

static EN: Labels = Labels {
    home: "Home",
    map: "Map",
    support: "Support",
    market: "Market",
    travel: "Travel",
    rideshare: "Car Pool",
    logout: "Logout",
    scan: "Scan QR",
    verified: "Verified ID",
    book: "Book Now",
    announcements: "Announcements",
    mybiz: "Sales Dashboard",
    add_product: "Add Product",
    resident_badge: "Resident",
    guest_badge: "Guest",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_toggle_alternates() {
        assert_eq!(Language::Az.other(), Language::En);
        assert_eq!(Language::En.other(), Language::Az);
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Language::parse("AZ"), Some(Language::Az));
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("RU"), None);
    }

    #[test]
    fn labels_follow_the_language() {
        assert_eq!(Language::Az.labels().market, "Bazar");
        assert_eq!(Language::En.labels().market, "Market");
        assert_eq!(Language::Az.labels().support, "Dəstək");
        assert_eq!(Language::En.labels().book, "Book Now");
        assert_eq!(Language::En.labels().mybiz, "Sales Dashboard");
    }
}
