//! Static country, city, and locale reference data for the markets Lalamove
//! serves, plus the `X-LLM-Country` header resolution rule.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// ISO 3166-1 alpha-2 code of a supported country or region.
pub enum CountryCode {
    Brasil,
    HongKong,
    India,
    Indonesia,
    Malaysia,
    Mexico,
    Philippines,
    Singapore,
    Taiwan,
    Thailand,
    Vietnam,
}

impl CountryCode {
    /// The ISO 3166-1 alpha-2 code as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brasil => "BR",
            Self::HongKong => "HK",
            Self::India => "IN",
            Self::Indonesia => "ID",
            Self::Malaysia => "MY",
            Self::Mexico => "MX",
            Self::Philippines => "PH",
            Self::Singapore => "SG",
            Self::Taiwan => "TW",
            Self::Thailand => "TH",
            Self::Vietnam => "VN",
        }
    }

    /// Reference data for this country.
    pub fn country(self) -> &'static Country {
        match self {
            Self::Brasil => &BRASIL,
            Self::HongKong => &HONG_KONG,
            Self::India => &INDIA,
            Self::Indonesia => &INDONESIA,
            Self::Malaysia => &MALAYSIA,
            Self::Mexico => &MEXICO,
            Self::Philippines => &PHILIPPINES,
            Self::Singapore => &SINGAPORE,
            Self::Taiwan => &TAIWAN,
            Self::Thailand => &THAILAND,
            Self::Vietnam => &VIETNAM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// UN/LOCODE of a serviceable city.
pub enum CityCode {
    BrasilSaoPaulo,
    BrasilRioDeJaneiro,
    HongKong,
    IndiaBengaluru,
    IndiaMumbai,
    IndiaDelhi,
    IndonesiaJakarta,
    MalaysiaKualaLumpur,
    MexicoMexicoCity,
    PhilippinesManila,
    PhilippinesCebu,
    Singapore,
    TaiwanTaipei,
    ThailandBangkok,
    ThailandPattaya,
    VietnamHoChiMinh,
    VietnamHanoi,
}

impl CityCode {
    /// The UN/LOCODE as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrasilSaoPaulo => "BR_SAO",
            Self::BrasilRioDeJaneiro => "BR_RIO",
            Self::HongKong => "HK_HKG",
            Self::IndiaBengaluru => "IN_BLR",
            Self::IndiaMumbai => "IN_BOM",
            Self::IndiaDelhi => "IN_DEL",
            Self::IndonesiaJakarta => "ID_JKT",
            Self::MalaysiaKualaLumpur => "MY_KUL",
            Self::MexicoMexicoCity => "MX_MEX",
            Self::PhilippinesManila => "PH_MNL",
            Self::PhilippinesCebu => "PH_CEB",
            Self::Singapore => "SG_SIN",
            Self::TaiwanTaipei => "TW_TPE",
            Self::ThailandBangkok => "TH_BKK",
            Self::ThailandPattaya => "TH_PYX",
            Self::VietnamHoChiMinh => "VN_SGN",
            Self::VietnamHanoi => "VN_HAN",
        }
    }

    /// The country this city belongs to.
    pub fn country_code(self) -> CountryCode {
        match self {
            Self::BrasilSaoPaulo | Self::BrasilRioDeJaneiro => CountryCode::Brasil,
            Self::HongKong => CountryCode::HongKong,
            Self::IndiaBengaluru | Self::IndiaMumbai | Self::IndiaDelhi => CountryCode::India,
            Self::IndonesiaJakarta => CountryCode::Indonesia,
            Self::MalaysiaKualaLumpur => CountryCode::Malaysia,
            Self::MexicoMexicoCity => CountryCode::Mexico,
            Self::PhilippinesManila | Self::PhilippinesCebu => CountryCode::Philippines,
            Self::Singapore => CountryCode::Singapore,
            Self::TaiwanTaipei => CountryCode::Taiwan,
            Self::ThailandBangkok | Self::ThailandPattaya => CountryCode::Thailand,
            Self::VietnamHoChiMinh | Self::VietnamHanoi => CountryCode::Vietnam,
        }
    }

    /// Reference data for the country this city belongs to.
    pub fn country(self) -> &'static Country {
        self.country_code().country()
    }

    /// The `X-LLM-Country` header value for requests targeting this city.
    ///
    /// Five markets are addressed by their country-level code on the wire;
    /// every other market uses the city code itself.
    pub fn llm_country(self) -> &'static str {
        match self {
            Self::HongKong
            | Self::IndonesiaJakarta
            | Self::MalaysiaKualaLumpur
            | Self::Singapore
            | Self::TaiwanTaipei => self.country_code().as_str(),
            _ => self.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Locale for localized address display (`{language}_{COUNTRY}`).
pub enum Locale {
    BrasilEn,
    BrasilPt,
    HongKongEn,
    HongKongZh,
    IndiaEn,
    IndiaHi,
    IndiaKn,
    IndiaMr,
    IndonesiaEn,
    IndonesiaId,
    MalaysiaEn,
    MalaysiaMs,
    MexicoEn,
    MexicoEs,
    PhilippinesEn,
    SingaporeEn,
    TaiwanZh,
    ThailandEn,
    ThailandTh,
    VietnamEn,
    VietnamVi,
}

impl Locale {
    /// The locale code as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrasilEn => "en_BR",
            Self::BrasilPt => "pt_BR",
            Self::HongKongEn => "en_HK",
            Self::HongKongZh => "zh_HK",
            Self::IndiaEn => "en_IN",
            Self::IndiaHi => "hi_IN",
            Self::IndiaKn => "kn_IN",
            Self::IndiaMr => "mr_IN",
            Self::IndonesiaEn => "en_ID",
            Self::IndonesiaId => "id_ID",
            Self::MalaysiaEn => "en_MY",
            Self::MalaysiaMs => "ms_MY",
            Self::MexicoEn => "en_MX",
            Self::MexicoEs => "es_MX",
            Self::PhilippinesEn => "en_PH",
            Self::SingaporeEn => "en_SG",
            Self::TaiwanZh => "zh_TW",
            Self::ThailandEn => "en_TH",
            Self::ThailandTh => "th_TH",
            Self::VietnamEn => "en_VN",
            Self::VietnamVi => "vi_VN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reference data for a supported country or region.
///
/// `phone_regex` is a validation hint for contact phone numbers; formats
/// vary per market and the server is the final authority.
pub struct Country {
    pub name: &'static str,
    pub code: CountryCode,
    pub cities: &'static [CityCode],
    pub locales: &'static [Locale],
    pub phone_regex: &'static str,
}

pub static BRASIL: Country = Country {
    name: "Brasil",
    code: CountryCode::Brasil,
    cities: &[CityCode::BrasilSaoPaulo, CityCode::BrasilRioDeJaneiro],
    locales: &[Locale::BrasilEn, Locale::BrasilPt],
    phone_regex: "^[0-9]{2}[9]{1}[0-9]{8}$",
};

pub static HONG_KONG: Country = Country {
    name: "Hong Kong",
    code: CountryCode::HongKong,
    cities: &[CityCode::HongKong],
    locales: &[Locale::HongKongEn, Locale::HongKongZh],
    phone_regex: "^((?!999)([2-9][0-9]{7}))$",
};

pub static INDIA: Country = Country {
    name: "India",
    code: CountryCode::India,
    cities: &[
        CityCode::IndiaBengaluru,
        CityCode::IndiaMumbai,
        CityCode::IndiaDelhi,
    ],
    locales: &[
        Locale::IndiaEn,
        Locale::IndiaHi,
        Locale::IndiaKn,
        Locale::IndiaMr,
    ],
    phone_regex: "^([6-9][0-9]{9}|22[0-9]{8})$",
};

pub static INDONESIA: Country = Country {
    name: "Indonesia",
    code: CountryCode::Indonesia,
    cities: &[CityCode::IndonesiaJakarta],
    locales: &[Locale::IndonesiaEn, Locale::IndonesiaId],
    phone_regex: "^0(8\\d{8,11}|21\\d{7,8})$",
};

pub static MALAYSIA: Country = Country {
    name: "Malaysia",
    code: CountryCode::Malaysia,
    cities: &[CityCode::MalaysiaKualaLumpur],
    locales: &[Locale::MalaysiaEn, Locale::MalaysiaMs],
    phone_regex: "^0(1[1,5]?\\d{8}|[4-7,9]\\d{7}|8[2-9]\\d{6}|3\\d{8})$",
};

pub static MEXICO: Country = Country {
    name: "Mexico",
    code: CountryCode::Mexico,
    cities: &[CityCode::MexicoMexicoCity],
    locales: &[Locale::MexicoEn, Locale::MexicoEs],
    phone_regex: "^([+]+52?)?(\\d{3}?){2}\\d{4}$",
};

pub static PHILIPPINES: Country = Country {
    name: "Philippines",
    code: CountryCode::Philippines,
    cities: &[CityCode::PhilippinesManila, CityCode::PhilippinesCebu],
    locales: &[Locale::PhilippinesEn],
    phone_regex: "^09[0-9]{9}$|^0?2[0-9]{7}$|^0?32[0-9]{7}$",
};

pub static SINGAPORE: Country = Country {
    name: "Singapore",
    code: CountryCode::Singapore,
    cities: &[CityCode::Singapore],
    locales: &[Locale::SingaporeEn],
    phone_regex: "^[689]{1}[0-9]{7}$",
};

pub static TAIWAN: Country = Country {
    name: "Taiwan",
    code: CountryCode::Taiwan,
    cities: &[CityCode::TaiwanTaipei],
    locales: &[Locale::TaiwanZh],
    phone_regex: "^0([1-8]{1}[0-9]{7,8}|9[0-9]{8})$",
};

pub static THAILAND: Country = Country {
    name: "Thailand",
    code: CountryCode::Thailand,
    cities: &[CityCode::ThailandBangkok, CityCode::ThailandPattaya],
    locales: &[Locale::ThailandEn, Locale::ThailandTh],
    phone_regex: "^(0[0-9]{8,9}|[0-9]{4})$",
};

pub static VIETNAM: Country = Country {
    name: "Vietnam",
    code: CountryCode::Vietnam,
    cities: &[CityCode::VietnamHoChiMinh, CityCode::VietnamHanoi],
    locales: &[Locale::VietnamEn, Locale::VietnamVi],
    phone_regex: "^0?(2|[35789])[0-9]{8}$|^02[48][0-9]{8}$",
};

/// Every supported country, in wire-code order.
pub static COUNTRIES: [&Country; 11] = [
    &BRASIL,
    &HONG_KONG,
    &INDIA,
    &INDONESIA,
    &MALAYSIA,
    &MEXICO,
    &PHILIPPINES,
    &SINGAPORE,
    &TAIWAN,
    &THAILAND,
    &VIETNAM,
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CITIES: [CityCode; 17] = [
        CityCode::BrasilSaoPaulo,
        CityCode::BrasilRioDeJaneiro,
        CityCode::HongKong,
        CityCode::IndiaBengaluru,
        CityCode::IndiaMumbai,
        CityCode::IndiaDelhi,
        CityCode::IndonesiaJakarta,
        CityCode::MalaysiaKualaLumpur,
        CityCode::MexicoMexicoCity,
        CityCode::PhilippinesManila,
        CityCode::PhilippinesCebu,
        CityCode::Singapore,
        CityCode::TaiwanTaipei,
        CityCode::ThailandBangkok,
        CityCode::ThailandPattaya,
        CityCode::VietnamHoChiMinh,
        CityCode::VietnamHanoi,
    ];

    #[test]
    fn single_city_markets_resolve_to_country_code() {
        assert_eq!(CityCode::HongKong.llm_country(), "HK");
        assert_eq!(CityCode::IndonesiaJakarta.llm_country(), "ID");
        assert_eq!(CityCode::MalaysiaKualaLumpur.llm_country(), "MY");
        assert_eq!(CityCode::Singapore.llm_country(), "SG");
        assert_eq!(CityCode::TaiwanTaipei.llm_country(), "TW");
    }

    #[test]
    fn multi_city_markets_resolve_to_city_code() {
        assert_eq!(CityCode::BrasilSaoPaulo.llm_country(), "BR_SAO");
        assert_eq!(CityCode::BrasilRioDeJaneiro.llm_country(), "BR_RIO");
        assert_eq!(CityCode::IndiaDelhi.llm_country(), "IN_DEL");
        assert_eq!(CityCode::PhilippinesCebu.llm_country(), "PH_CEB");
        assert_eq!(CityCode::ThailandPattaya.llm_country(), "TH_PYX");
        assert_eq!(CityCode::VietnamHanoi.llm_country(), "VN_HAN");
        assert_eq!(CityCode::MexicoMexicoCity.llm_country(), "MX_MEX");
    }

    #[test]
    fn every_city_is_listed_by_its_country() {
        for city in ALL_CITIES {
            let country = city.country();
            assert!(
                country.cities.contains(&city),
                "{} missing from {}",
                city.as_str(),
                country.name
            );
        }
    }

    #[test]
    fn country_table_is_consistent() {
        for country in COUNTRIES {
            assert_eq!(country.code.country(), country);
            assert!(!country.cities.is_empty());
            assert!(!country.locales.is_empty());
            assert!(!country.phone_regex.is_empty());
            for locale in country.locales {
                let suffix = &locale.as_str()[3..];
                assert_eq!(suffix, country.code.as_str());
            }
        }
    }

    #[test]
    fn city_codes_carry_their_country_prefix() {
        for city in ALL_CITIES {
            let prefix = &city.as_str()[..2];
            assert_eq!(prefix, city.country_code().as_str());
        }
    }
}
