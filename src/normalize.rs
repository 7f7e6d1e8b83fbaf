use std::sync::LazyLock;

use ahash::AHashMap;

use crate::roster::CountryId;

/// Alternate spellings mapped to canonical roster names.
static SYNONYMS: &[(&str, &str)] = &[
    ("republic of korea", "south korea"),
    ("korea, republic of", "south korea"),
    ("korea (rep.)", "south korea"),
    ("korea (south)", "south korea"),
    ("korea, dem. people’s rep. (north korea)", "north korea"),
    ("democratic people's republic of korea", "north korea"),
    ("korea, dem. rep. of", "north korea"),
    ("côte d’ivoire", "ivory coast"),
    ("cote d’ivoire", "ivory coast"),
    ("côte d'ivoire", "ivory coast"),
    ("cote d'ivoire", "ivory coast"),
    ("bolivia (plurinational state of)", "bolivia"),
    ("lao people’s democratic republic", "laos"),
    ("lao pdr", "laos"),
    ("brunei darussalam", "brunei"),
    ("union of the comoros", "comoros"),
    ("tibet", "china"),
    ("hong kong", "china"),
    ("syrian arab republic", "syria"),
    ("russian federation", "russia"),
    ("viet nam", "vietnam"),
    ("timor leste", "timor-leste"),
    ("east timor", "timor-leste"),
    ("swaziland", "eswatini"),
    ("kingdom of eswatini", "eswatini"),
    ("bosnia & herzegovina", "bosnia and herzegovina"),
    ("bosnia-herzegovina", "bosnia and herzegovina"),
    ("united states of america", "united states"),
    ("u.s.a.", "united states"),
    ("united states (usa)", "united states"),
    ("republic of the congo", "congo"),
    ("congo, rep. of the", "congo"),
    ("republic of congo", "congo"),
    ("democratic republic of congo", "democratic republic of the congo"),
    ("congo, the democratic republic of", "democratic republic of the congo"),
    ("drc", "democratic republic of the congo"),
    ("iran (islamic republic of)", "iran"),
    ("iran, islamic republic of", "iran"),
    ("gambia, the", "gambia"),
    ("the gambia", "gambia"),
    ("moldova (republic of)", "moldova"),
    ("republic of moldova", "moldova"),
    ("tanzania, united republic of", "tanzania"),
    ("united republic of tanzania", "tanzania"),
    ("venezuela (bolivarian republic of)", "venezuela"),
    ("venezuela, bolivarian republic of", "venezuela"),
    ("south sudan (republic of)", "south sudan"),
    // Natural Earth spellings
    ("czechia", "czech republic"),
    ("the bahamas", "bahamas"),
    ("republic of serbia", "serbia"),
    ("cabo verde", "cape verde"),
    ("macedonia", "north macedonia"),
    ("türkiye", "turkey"),
];

static SYNONYM_INDEX: LazyLock<AHashMap<&'static str, CountryId>> = LazyLock::new(|| {
    SYNONYMS.iter()
        .filter_map(|&(alias, name)| CountryId::from_name(name).map(|id| (alias, id)))
        .collect()
});

/// Map an arbitrary source label to a roster country.
///
/// Matching is case-insensitive and ignores surrounding whitespace. A label
/// that matches neither the roster nor the synonym table is retried with the
/// punctuation `( ) , ' ’ .` removed and doubled spaces collapsed.
pub fn normalize(raw: &str) -> Option<CountryId> {
    let label = raw.trim().to_lowercase();
    lookup(&label).or_else(|| {
        let stripped: String = label.chars()
            .filter(|c| !matches!(c, '(' | ')' | ',' | '\'' | '’' | '.'))
            .collect();
        lookup(stripped.replace("  ", " ").trim())
    })
}

fn lookup(label: &str) -> Option<CountryId> {
    CountryId::from_name(label).or_else(|| SYNONYM_INDEX.get(label).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::id;

    #[test]
    fn every_synonym_targets_the_roster() {
        for &(alias, name) in SYNONYMS {
            assert!(CountryId::from_name(name).is_some(), "{alias:?} -> {name:?}");
        }
    }

    #[test]
    fn canonical_names_pass_through() {
        for country in CountryId::all() {
            assert_eq!(normalize(country.name()), Some(country));
        }
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(normalize("  FRANCE "), Some(id("france")));
        assert_eq!(normalize("United States of America"), Some(id("united states")));
    }

    #[test]
    fn punctuation_is_stripped_on_retry() {
        assert_eq!(normalize("Korea, Republic of"), Some(id("south korea")));
        assert_eq!(normalize("U.S.A."), Some(id("united states")));
        assert_eq!(normalize("Gambia, The"), Some(id("gambia")));
        // "(the)" is not a synonym, but without punctuation it reads "democratic republic of the congo"
        assert_eq!(normalize("Democratic Republic of (the) Congo"), Some(id("democratic republic of the congo")));
    }

    #[test]
    fn natural_earth_names() {
        assert_eq!(normalize("Czechia"), Some(id("czech republic")));
        assert_eq!(normalize("The Bahamas"), Some(id("bahamas")));
        assert_eq!(normalize("Republic of Serbia"), Some(id("serbia")));
        assert_eq!(normalize("eSwatini"), Some(id("eswatini")));
    }

    #[test]
    fn unrecognized_labels() {
        assert_eq!(normalize("Greenland"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("-99"), None);
    }
}
