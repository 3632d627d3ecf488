/// Store settings for one sales region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub locale: &'static str,
    pub currency: &'static str,
    /// Live target SKU.
    pub sku: &'static str,
    /// Always-listed SKU used by the notification self-test.
    pub test_sku: &'static str,
}

pub const DEFAULT_REGION: &str = "USA";

#[rustfmt::skip]
pub const REGIONS: &[Region] = &[
    Region { code: "AUT", locale: "de_de", currency: "EUR", sku: "5438795700", test_sku: "5394902900" },
    Region { code: "BEL", locale: "fr_fr", currency: "EUR", sku: "5438795600", test_sku: "5394902800" },
    Region { code: "CAN", locale: "en_us", currency: "CAD", sku: "5438481700", test_sku: "5379432500" },
    Region { code: "CZE", locale: "cs_cz", currency: "CZK", sku: "5438793800", test_sku: "5394901900" },
    Region { code: "DEU", locale: "de_de", currency: "EUR", sku: "5438792300", test_sku: "5394902700" },
    Region { code: "DNK", locale: "da_dk", currency: "DKK", sku: "5438793300", test_sku: "5394903100" },
    Region { code: "ESP", locale: "es_es", currency: "EUR", sku: "5438794800", test_sku: "5394903000" },
    Region { code: "FIN", locale: "fi_fi", currency: "EUR", sku: "5438793900", test_sku: "5394903500" },
    Region { code: "FRA", locale: "fr_fr", currency: "EUR", sku: "5438795200", test_sku: "5394903200" },
    Region { code: "GBR", locale: "en_gb", currency: "GBP", sku: "5438792800", test_sku: "5394902400" },
    Region { code: "IRL", locale: "en_gb", currency: "EUR", sku: "5438792800", test_sku: "5394903600" },
    Region { code: "ITA", locale: "it_it", currency: "EUR", sku: "5438796200", test_sku: "5394903700" },
    Region { code: "LUX", locale: "fr_fr", currency: "EUR", sku: "5438795700", test_sku: "5394903800" },
    Region { code: "NLD", locale: "nl_nl", currency: "EUR", sku: "5438796700", test_sku: "5394903900" },
    Region { code: "NOR", locale: "no_no", currency: "NOK", sku: "5438797200", test_sku: "5394904000" },
    Region { code: "POL", locale: "pl_pl", currency: "PLN", sku: "5438797700", test_sku: "5394904100" },
    Region { code: "PRT", locale: "en_gb", currency: "EUR", sku: "5438794300", test_sku: "5394904200" },
    Region { code: "SWE", locale: "sv_se", currency: "SEK", sku: "5438798100", test_sku: "5394904300" },
    Region { code: "USA", locale: "en_us", currency: "USD", sku: "5438481700", test_sku: "5379432500" },
];

/// Look a region up by its three letter code, ignoring case.
pub fn lookup(code: &str) -> Option<&'static Region> {
    let code = code.trim();
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}

pub fn codes() -> Vec<&'static str> {
    REGIONS.iter().map(|r| r.code).collect()
}
