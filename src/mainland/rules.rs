use crate::roster::CountryId;

use super::{Correction, LonLatBox, Rule};

const KALININGRAD: LonLatBox = LonLatBox::new((19.0, 23.0), (54.0, 55.5));
const CRIMEA: LonLatBox = LonLatBox::new((32.0, 36.5), (44.0, 46.5));

const CONTIGUOUS_US: LonLatBox = LonLatBox::new((-125.0, -66.0), (24.4, 49.5));
const ALASKA: LonLatBox = LonLatBox::new((-172.0, -130.0), (51.2, 72.0));
const HAWAII: LonLatBox = LonLatBox::new((-161.0, -154.0), (18.5, 23.0));

const MANCHESTER: (f64, f64) = (-2.25, 53.48);
const COPENHAGEN: (f64, f64) = (12.56, 55.68);

/// Per-country rules. Countries not listed keep their single largest part.
static RULES: &[(&str, Rule)] = &[
    ("angola", Rule::Largest(2)),
    ("australia", Rule::Largest(5)),
    ("azerbaijan", Rule::Largest(2)),
    ("bahamas", Rule::Largest(3)),
    ("canada", Rule::All),
    ("chile", Rule::NearMainland { km: 500.0 }),
    ("china", Rule::Largest(2)),
    ("croatia", Rule::Custom(Correction::Patched(&[(18.5, 42.4), (18.1, 42.6), (17.8, 42.9)]))),
    ("cuba", Rule::Largest(2)),
    ("denmark", Rule::Custom(Correction::WithinRadius { center: COPENHAGEN, km: 320.0 })),
    ("equatorial guinea", Rule::Largest(2)),
    ("estonia", Rule::Largest(2)),
    ("finland", Rule::Largest(2)),
    ("france", Rule::Largest(1)),
    ("greece", Rule::Largest(3)),
    ("indonesia", Rule::All),
    ("italy", Rule::Largest(3)),
    ("japan", Rule::Custom(Correction::NorthOf { lat: 30.0, count: 4, patches: &[(129.3, 34.4)] })),
    ("malaysia", Rule::Largest(2)),
    ("morocco", Rule::Largest(1)),
    ("netherlands", Rule::Largest(2)),
    ("new zealand", Rule::Largest(3)),
    ("norway", Rule::Custom(Correction::Patched(&[(16.0, 68.5)]))),
    ("oman", Rule::Largest(2)),
    ("papua new guinea", Rule::Largest(5)),
    ("philippines", Rule::All),
    ("portugal", Rule::Largest(1)),
    ("russia", Rule::Custom(Correction::DropRegions(&[KALININGRAD, CRIMEA]))),
    ("solomon islands", Rule::Largest(4)),
    ("south korea", Rule::Largest(2)),
    ("spain", Rule::Largest(2)),
    ("sweden", Rule::Largest(2)),
    ("timor-leste", Rule::Largest(2)),
    ("turkey", Rule::Largest(2)),
    ("united kingdom", Rule::Custom(Correction::WithinRadius { center: MANCHESTER, km: 620.0 })),
    ("united states", Rule::Custom(Correction::KeepRegions(&[CONTIGUOUS_US, ALASKA, HAWAII]))),
    ("vanuatu", Rule::Largest(2)),
    ("venezuela", Rule::Largest(1)),
    ("yemen", Rule::Largest(2)),
];

/// The mainland rule for `country`.
pub fn rule_for(country: CountryId) -> Rule {
    RULES.iter()
        .find(|(name, _)| *name == country.name())
        .map_or(Rule::DEFAULT, |&(_, rule)| rule)
}
