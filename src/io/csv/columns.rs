//! Source header → canonical column names.

/// Every column of the published registration dataset, with its canonical name.
pub(crate) const TRANSLATION: &[(&str, &str)] = &[
    ("StichtagDatJahr", "RecordYear"),
    ("DatenstandCd", "DataStatusCd"), // D = definitive, P = provisional
    ("HalterId", "OwnerID"),
    ("AlterV10Cd", "AgeV10Cd"), // 10-year age group of the owner
    ("AlterV10Lang", "AgeV10Lang"),
    ("AlterV10Sort", "AgeV10Sort"),
    ("SexCd", "SexOwnerCd"),
    ("SexLang", "SexOwnerLang"),
    ("SexSort", "SexOwnerSort"),
    ("KreisCd", "DistrictCd"),
    ("KreisLang", "DistrictLang"),
    ("KreisSort", "DistrictSort"),
    ("QuarCd", "QuarCd"),
    ("QuarLang", "QuarLang"),
    ("QuarSort", "QuarSort"),
    ("Rasse1Text", "Breed1Text"),
    ("Rasse2Text", "Breed2Text"),
    ("RasseMischlingCd", "BreedMixedCd"),
    ("RasseMischlingSort", "BreedMixedSort"),
    ("RasseMischlingLang", "BreedMixedLang"),
    ("RassentypCd", "BreedTypeCd"),
    ("RassentypLang", "BreedTypeLang"),
    ("RassentypSort", "BreedTypeSort"),
    ("GebDatHundJahr", "DogBirthYear"),
    ("AlterVHundCd", "AgeDogCd"),
    ("AlterVHundLang", "AgeDogLang"),
    ("AlterVHundSort", "AgeDogSort"),
    ("SexHundCd", "SexDogCd"),
    ("SexHundLang", "SexDogLang"),
    ("SexHundSort", "SexDogSort"),
    ("HundefarbeText", "DogColorText"),
    ("AnzHunde", "NumDogs"),
];

pub(crate) const OWNER_ID: &str = "OwnerID";
pub(crate) const OWNER_SEX: &str = "SexOwnerLang";
pub(crate) const DOG_SEX: &str = "SexDogLang";
pub(crate) const AREA_CODE: &str = "QuarSort";
pub(crate) const AREA_LABEL: &str = "QuarLang";
pub(crate) const BREED: &str = "Breed1Text";
pub(crate) const DOG_BIRTH_YEAR: &str = "DogBirthYear";
pub(crate) const DOG_COLOR: &str = "DogColorText";
pub(crate) const RECORD_YEAR: &str = "RecordYear";

/// Source header for a canonical name, if the dataset names it differently.
pub(crate) fn source_name(canonical: &str) -> Option<&'static str> {
    TRANSLATION.iter()
        .find(|(_, to)| *to == canonical)
        .map(|(from, _)| *from)
}
