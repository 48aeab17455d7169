// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry snapshot.
//!
//! Every table here is derived from the IANA language subtag registry, ISO 3166,
//! ISO 4217 and UN M.49 and must stay in sync with the accessors that decode it.
//! Identifiers are offsets into these tables, so regenerating them renumbers
//! identifiers; compare [`crate::registry::fingerprint`] before trusting stored ones.

use crate::alias::{LangAlias, LangAliasKind, RegionAlias};
use crate::index::FixedIndex;

// ---- languages ----

/// Language records: the subtag padded with either the tail of its ISO 639-3
/// code (two-letter subtags) or a zero byte (three-letter subtags). A two-letter
/// record with a zero third byte carries an index into [`ALT_LANG_ISO3`].
pub(crate) const LANG: FixedIndex = FixedIndex::new(
    concat!(
        "---\0aaarabbkace\0affrakkaammhami\0arraarb\0assmast\0azzebeelbgulbnen",
        "bnn\0boodbrrebsoscaatcmn\0csescyymdaandeeuekk\0elllenngeopoes\0\x07etst",
        "euusfaasfiinfil\0foaofrrafyrygalegdlagllggsw\0guujhaauhak\0haw\0heeb",
        "hiinhrrvhsn\0huunhyyeidndin\0\x04ittaiw\0\x03japnjbo\0ji\0\x08jvavjw\0\x05khk\0koor",
        "kw\0\x01lbtzltitlvavlvs\0mnonmoolmssanan\0nbobnlldnnnonoornvavpes\0plol",
        "ptorpwn\0roonruusrw\0\x06sfb\0sgg\0sh\0\x02sklksllvsqqisrrpsvweswwaswh\0taam",
        "tao\0tay\0teelthhatlgltlh\0trurtsu\0ukkrund\0urrduzzbvgt\0viiexhhoyiid",
        "yooryue\0zhhozsm\0zuul",
    )
    .as_bytes(),
);

/// Slot of the literal `und` record, which resolves to the unspecified language.
pub(crate) const NON_CANONICAL_UND: u16 = 105;

/// First identifier of the dense range recovered from the packed ISO 639-3 code.
pub(crate) const LANG_NO_INDEX_OFFSET: u16 = 117;

/// `qaa` through `qtz`, packed and shifted into the dense range.
pub(crate) const LANG_PRIVATE_START: u16 = 10933;
pub(crate) const LANG_PRIVATE_END: u16 = 11452;

pub(crate) const ALT_LANG_ISO3: FixedIndex = FixedIndex::new(
    concat!(
        "---\0cor\0hbs\x01heb\x02ind\x03jav\x04kin\x05spa\x06yid\x07",
    )
    .as_bytes(),
);

/// Language identifiers addressed by the fourth byte of [`ALT_LANG_ISO3`] records.
pub(crate) static ALT_LANG_INDEX: [u16; 8] = [
    0x0040, 0x0057, 0x002f, 0x0035, 0x003c, 0x0054, 0x001e, 0x006f,
];

/// ISO 639-3 codes that have no record in [`LANG`], keyed by their packed value.
pub(crate) static LANG_NO_INDEX: [u8; NO_INDEX_BYTES] = no_index_bitset(&[
    *b"aaa", *b"abh", *b"ang", *b"enm", *b"got", *b"grc", *b"non", *b"see", *b"xtg", *b"zza",
]);

const NO_INDEX_BYTES: usize = 26 * 26 * 26 / 8 + 1;

const fn no_index_bitset(codes: &[[u8; 3]]) -> [u8; NO_INDEX_BYTES] {
    let mut bits = [0u8; NO_INDEX_BYTES];
    let mut i = 0;
    while i < codes.len() {
        let n = crate::packer::pack3(&codes[i]) as usize;
        bits[n / 8] |= 1 << (n % 8);
        i += 1;
    }
    // Private use: qaa..=qtz.
    let mut n = crate::packer::pack3(b"qaa") as usize;
    let end = crate::packer::pack3(b"qtz") as usize;
    while n <= end {
        bits[n / 8] |= 1 << (n % 8);
        n += 1;
    }
    bits
}

pub(crate) static LANG_ALIASES: [LangAlias; 16] = [
    LangAlias::new(0x0009, 0x0008, LangAliasKind::Macro), // arb -> ar
    LangAlias::new(0x0015, 0x0072, LangAliasKind::Macro), // cmn -> zh
    LangAlias::new(0x001a, 0x001f, LangAliasKind::Macro), // ekk -> et
    LangAlias::new(0x0036, 0x0035, LangAliasKind::Deprecated), // in -> id
    LangAlias::new(0x0038, 0x002f, LangAliasKind::Deprecated), // iw -> he
    LangAlias::new(0x003b, 0x006f, LangAliasKind::Deprecated), // ji -> yi
    LangAlias::new(0x003d, 0x003c, LangAliasKind::Deprecated), // jw -> jv
    LangAlias::new(0x003e, 0x0045, LangAliasKind::Macro), // khk -> mn
    LangAlias::new(0x0044, 0x0043, LangAliasKind::Macro), // lvs -> lv
    LangAlias::new(0x0046, 0x0052, LangAliasKind::Deprecated), // mo -> ro
    LangAlias::new(0x004c, 0x0049, LangAliasKind::Legacy), // no -> nb
    LangAlias::new(0x004e, 0x0021, LangAliasKind::Macro), // pes -> fa
    LangAlias::new(0x0057, 0x005b, LangAliasKind::Legacy), // sh -> sr
    LangAlias::new(0x005e, 0x005d, LangAliasKind::Macro), // swh -> sw
    LangAlias::new(0x0064, 0x0023, LangAliasKind::Legacy), // tl -> fil
    LangAlias::new(0x0073, 0x0047, LangAliasKind::Macro), // zsm -> ms
];

// ---- regions ----

/// Regions below this identifier only have a UN M.49 code.
pub(crate) const ISO_REGION_OFFSET: u16 = 32;

/// Region records: the ISO 3166-1 alpha-2 code followed by the tail of the
/// alpha-3 code, two spaces when there is none, or a zero byte and an offset
/// into [`ALT_REGION_ISO3`].
pub(crate) const REGION_ISO: FixedIndex = FixedIndex::new(
    concat!(
        "AAAAACSCADNDAEREAFFGAQTAARRGATUTAUUSBEELBRRABUURCAANCDODCHHECNHN",
        "DDDRDEEUDKNKEGGYESSPEU\0\0FIINFRRAFXXXGBBRGS\0\x03INNDITTAJPPNKM\0\x06KP\0\x09",
        "KRORKY\0\x0cMMMRMXEXNLLDNOORPM\0\x0fQOOORS\0\x12RUUSSEWETF\0\x15TLLSTPMPUK  USSA",
        "XK  YDMDYEEMYT\0\x18ZAAFZRAR",
    )
    .as_bytes(),
);

pub(crate) const ALT_REGION_ISO3: &[u8] = b"QUUSGSCOMPRKCYMSPMSRBATFMYT";

pub(crate) static ALT_REGION_IDS: [u16; 9] = [
    0x0035, 0x003a, 0x003e, 0x003f, 0x0041, 0x0046, 0x0048, 0x004b, 0x0053,
];

/// UN M.49 code per region identifier; zero when the region has none.
pub(crate) static M49: [u16; 86] = [
    0, 1, 2, 3, 5, 9, 11, 13, 14, 15, 17, 18,
    19, 21, 29, 30, 34, 35, 39, 53, 54, 57, 61, 142,
    143, 145, 150, 151, 154, 155, 202, 419, 0, 0, 20, 784,
    4, 10, 32, 40, 36, 56, 76, 104, 124, 180, 756, 156,
    278, 276, 208, 818, 724, 0, 246, 250, 249, 826, 239, 356,
    380, 392, 174, 408, 410, 136, 104, 484, 528, 578, 666, 0,
    688, 643, 752, 260, 626, 626, 0, 840, 0, 720, 887, 175,
    710, 180,
];

/// Reverse M.49 lookup, bucketed by `code >> M49_SEARCH_BITS`. Each word holds
/// the low bits of the code above the region identifier.
pub(crate) static FROM_M49: [u16; 76] = [
    0x0201, 0x0402, 0x0603, 0x0824, 0x0a04, 0x1205, 0x1425, 0x1606,
    0x1a07, 0x1c08, 0x1e09, 0x220a, 0x240b, 0x260c, 0x2822, 0x2a0d,
    0x3a0e, 0x3c0f, 0x4026, 0x4410, 0x4611, 0x4828, 0x4e12, 0x5027,
    0x6a13, 0x6c14, 0x7029, 0x7215, 0x7a16, 0x982a, 0xd042, 0xf82c,
    0x1041, 0x1c17, 0x1e18, 0x2219, 0x2c1a, 0x2e1b, 0x341c, 0x361d,
    0x382f, 0x5c3e, 0x5e53, 0x682d, 0x941e, 0xa032, 0xde3a, 0xec36,
    0xf238, 0xf437, 0x084b, 0x2831, 0x2c30, 0xc83b, 0xf83c, 0x103d,
    0x303f, 0x3440, 0x461f, 0xc843, 0x2044, 0x8445, 0xe44c, 0x0649,
    0x3446, 0x6048, 0x8c54, 0xa051, 0xa834, 0xe04a, 0xe82e, 0x2023,
    0x6433, 0x7439, 0x904f, 0xee52,
];

pub(crate) static M49_INDEX: [u16; 9] = [0, 32, 50, 55, 60, 63, 71, 76, 76];

pub(crate) const M49_SEARCH_BITS: u32 = 7;
pub(crate) const M49_REGION_BITS: u32 = 9;

pub(crate) const ISO3166_USER_ASSIGNED: u8 = 1 << 0;
pub(crate) const CC_TLD: u8 = 1 << 1;
pub(crate) const BCP47_REGION: u8 = 1 << 2;

pub(crate) static REGION_TYPES: [u8; 86] = [
    5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    1, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 4, 6, 6, 6, 6,
    4, 6, 6, 6, 6, 6, 6, 6, 4, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 5, 6, 6, 6, 6, 6, 4, 2, 6,
    5, 4, 6, 6, 6, 4,
];

pub(crate) static REGION_ALIASES: [RegionAlias; 6] = [
    RegionAlias::new(0x002b, 0x0042), // BU -> MM
    RegionAlias::new(0x0030, 0x0031), // DD -> DE
    RegionAlias::new(0x0038, 0x0037), // FX -> FR
    RegionAlias::new(0x004d, 0x004c), // TP -> TL
    RegionAlias::new(0x0051, 0x0052), // YD -> YE
    RegionAlias::new(0x0055, 0x002d), // ZR -> CD
];

pub(crate) const REGION_GB: u16 = 0x0039;
pub(crate) const REGION_UK: u16 = 0x004e;

// ---- scripts ----

pub(crate) const SCRIPT: FixedIndex = FixedIndex::new(
    concat!(
        "----AdlmArabArmnBengBopoBraiCherCyrlDevaEthiGeorGrekGujrGuruHang",
        "HaniHansHantHebrHiraJpanKanaKhmrKndaKoreLaooLatnMlymMongMymrOrya",
        "QaaaQaabQaacQaadQaaeQaafQaagQaahQaaiQaajQaakQaalQaamQaanQaaoQaap",
        "QaaqQaarQaasQaatQaauQaavQaawQaaxQaayQaazQabaQabbQabcQabdQabeQabf",
        "QabgQabhQabiQabjQabkQablQabmQabnQaboQabpQabqQabrQabsQabtQabuQabv",
        "QabwQabxSinhSyrcTamlTeluThaaThaiTibtYiiiZinhZmthZsyeZsymZxxxZyyy",
    )
    .as_bytes(),
);

pub(crate) const SCRIPT_PRIVATE_START: u8 = 32; // Qaaa
pub(crate) const SCRIPT_PRIVATE_END: u8 = 81; // Qabx

// ---- currencies ----

/// Currency records: the ISO 4217 code followed by a [`crate::currency`] info byte.
pub(crate) const CURRENCY: FixedIndex = FixedIndex::new(
    concat!(
        "---\0AUD\x02BHD\x03BRL\x02CAD\x02CHF\x0aCLF\x04CNY\x02EUR\x02",
        "GBP\x02INR\x02JPY\0KRW\0KWD\x03MXN\x02NOK\x02",
        "RUB\x02SEK\x02USD\x02XAG\0XAU\0XDR\0XTS\0ZAR\x02",
    )
    .as_bytes(),
);

pub(crate) static ROUNDING_INCREMENTS: [u8; 2] = [1, 5];

// ---- legacy tags ----

/// Grandfathered and legacy tags, lowercase and sorted. Non-negative values are
/// language identifiers; negative values select a literal from [`ALT_TAGS`].
pub(crate) static GRANDFATHERED: [(&str, i16); 27] = [
    ("art-lojban", 0x003a), // jbo
    ("cel-gaulish", -1),
    ("en-gb-oed", -2),
    ("i-ami", 0x0007), // ami
    ("i-bnn", 0x0010), // bnn
    ("i-default", -3),
    ("i-enochian", -4),
    ("i-hak", 0x002d), // hak
    ("i-klingon", 0x0065), // tlh
    ("i-lux", 0x0041), // lb
    ("i-mingo", -5),
    ("i-navajo", 0x004d), // nv
    ("i-pwn", 0x0051), // pwn
    ("i-tao", 0x0060), // tao
    ("i-tay", 0x0061), // tay
    ("i-tsu", 0x0067), // tsu
    ("no-bok", 0x0049), // nb
    ("no-nyn", 0x004b), // nn
    ("root", 0),
    ("sgn-be-fr", 0x0055), // sfb
    ("sgn-be-nl", 0x006c), // vgt
    ("sgn-ch-de", 0x0056), // sgg
    ("zh-guoyu", 0x0015), // cmn
    ("zh-hakka", 0x002d), // hak
    ("zh-min", -6),
    ("zh-min-nan", 0x0048), // nan
    ("zh-xiang", 0x0032), // hsn
];

pub(crate) static ALT_TAG_INDEX: [u8; 7] = [0, 17, 28, 42, 58, 71, 83];

pub(crate) const ALT_TAGS: &str = concat!(
    "xtg-x-cel-gaulishen-GB-x-oeden-x-i-default",
    "und-x-i-enochiansee-x-i-mingonan-x-zh-min",
);
