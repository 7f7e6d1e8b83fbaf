use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of territories in the roster.
pub const ROSTER_LEN: usize = 196;

/// Canonical lowercase names of the 193 UN member states plus Taiwan,
/// Vatican City and Palestine, sorted ascending.
static ROSTER: [&str; ROSTER_LEN] = [
    "afghanistan", "albania", "algeria", "andorra", "angola", "antigua and barbuda",
    "argentina", "armenia", "australia", "austria", "azerbaijan", "bahamas", "bahrain",
    "bangladesh", "barbados", "belarus", "belgium", "belize", "benin", "bhutan", "bolivia",
    "bosnia and herzegovina", "botswana", "brazil", "brunei", "bulgaria", "burkina faso",
    "burundi", "cambodia", "cameroon", "canada", "cape verde", "central african republic",
    "chad", "chile", "china", "colombia", "comoros", "congo", "costa rica", "croatia", "cuba",
    "cyprus", "czech republic", "democratic republic of the congo", "denmark", "djibouti",
    "dominica", "dominican republic", "ecuador", "egypt", "el salvador", "equatorial guinea",
    "eritrea", "estonia", "eswatini", "ethiopia", "fiji", "finland", "france", "gabon",
    "gambia", "georgia", "germany", "ghana", "greece", "grenada", "guatemala", "guinea",
    "guinea-bissau", "guyana", "haiti", "honduras", "hungary", "iceland", "india", "indonesia",
    "iran", "iraq", "ireland", "israel", "italy", "ivory coast", "jamaica", "japan", "jordan",
    "kazakhstan", "kenya", "kiribati", "kuwait", "kyrgyzstan", "laos", "latvia", "lebanon",
    "lesotho", "liberia", "libya", "liechtenstein", "lithuania", "luxembourg", "madagascar",
    "malawi", "malaysia", "maldives", "mali", "malta", "marshall islands", "mauritania",
    "mauritius", "mexico", "micronesia", "moldova", "monaco", "mongolia", "montenegro",
    "morocco", "mozambique", "myanmar", "namibia", "nauru", "nepal", "netherlands",
    "new zealand", "nicaragua", "niger", "nigeria", "north korea", "north macedonia", "norway",
    "oman", "pakistan", "palau", "palestine", "panama", "papua new guinea", "paraguay", "peru",
    "philippines", "poland", "portugal", "qatar", "romania", "russia", "rwanda",
    "saint kitts and nevis", "saint lucia", "saint vincent and the grenadines", "samoa",
    "san marino", "sao tome and principe", "saudi arabia", "senegal", "serbia", "seychelles",
    "sierra leone", "singapore", "slovakia", "slovenia", "solomon islands", "somalia",
    "south africa", "south korea", "south sudan", "spain", "sri lanka", "sudan", "suriname",
    "sweden", "switzerland", "syria", "taiwan", "tajikistan", "tanzania", "thailand",
    "timor-leste", "togo", "tonga", "trinidad and tobago", "tunisia", "turkey", "turkmenistan",
    "tuvalu", "uganda", "ukraine", "united arab emirates", "united kingdom", "united states",
    "uruguay", "uzbekistan", "vanuatu", "vatican city", "venezuela", "vietnam", "yemen",
    "zambia", "zimbabwe",
];

/// A territory from the fixed roster.
///
/// Wraps the position of the canonical name in the sorted roster, so the
/// derived ordering is canonical-name ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryId(u8);

impl CountryId {
    /// Look up an exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        ROSTER.binary_search(&name).ok().map(|i| Self(i as u8))
    }

    /// The id at position `index` of the roster.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ROSTER_LEN).then(|| Self(index as u8))
    }

    /// Every id in the roster, in canonical order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> + Clone {
        (0..ROSTER_LEN).map(|i| Self(i as u8))
    }

    #[inline] pub fn index(self) -> usize { self.0 as usize }

    #[inline] pub fn name(self) -> &'static str { ROSTER[self.index()] }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl Serialize for CountryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CountryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("not a roster country: {name:?}")))
    }
}

/// Look up an exact canonical name, panicking if it is not in the roster.
///
/// For the static rule tables, where every name is a literal.
pub(crate) fn id(name: &str) -> CountryId {
    CountryId::from_name(name).unwrap_or_else(|| panic!("{name:?} is not in the roster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_sorted_and_unique() {
        assert!(ROSTER.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn roster_names_are_canonical() {
        for name in ROSTER {
            assert_eq!(name, name.trim());
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn lookup_round_trips() {
        for id in CountryId::all() {
            assert_eq!(CountryId::from_name(id.name()), Some(id));
            assert_eq!(CountryId::from_index(id.index()), Some(id));
        }
        assert_eq!(CountryId::all().len(), ROSTER_LEN);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(CountryId::from_name("greenland"), None);
        assert_eq!(CountryId::from_name("France"), None);
        assert_eq!(CountryId::from_index(ROSTER_LEN), None);
    }

    #[test]
    fn order_follows_names() {
        assert!(id("afghanistan") < id("zimbabwe"));
        assert!(id("guinea") < id("guinea-bissau"));
        assert_eq!(id("afghanistan").index(), 0);
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&id("ivory coast")).unwrap();
        assert_eq!(json, "\"ivory coast\"");
        assert_eq!(serde_json::from_str::<CountryId>(&json).unwrap(), id("ivory coast"));
        assert!(serde_json::from_str::<CountryId>("\"atlantis\"").is_err());
    }
}
