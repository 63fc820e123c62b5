//! Closed choice sets for the student record.
//!
//! Enum-typed fields are held as plain strings in [`super::record::StudentRecord`]
//! (they arrive as strings from form controls and from the backend's JSON);
//! these types are the single source of truth for the allowed literals.
//! `parse` rejects anything outside the closed set instead of panicking.

macro_rules! choice_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $literal:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal),+
                }
            }

            pub fn parse(value: &str) -> Result<Self, String> {
                match value {
                    $($literal => Ok($name::$variant),)+
                    other => Err(format!("invalid choice: {}", other)),
                }
            }

            /// `(value, label)` pairs for select population.
            pub fn options() -> Vec<(String, String)> {
                Self::ALL
                    .iter()
                    .map(|v| (v.as_str().to_string(), v.as_str().to_string()))
                    .collect()
            }

            /// True when `value` is one of the declared literals.
            pub fn is_valid(value: &str) -> bool {
                Self::parse(value).is_ok()
            }
        }
    };
}

choice_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

choice_enum!(ResidenceType {
    Hosteller => "Hosteller",
    DayScholar => "DayScholar",
});

choice_enum!(TransportationType {
    Walk => "Walk",
    Bicycle => "Bicycle",
    Bus => "Bus",
    PrivateVehicle => "PrivateVehicle",
});

choice_enum!(FeeCategory {
    Regular => "Regular",
    SelfFinanced => "SelfFinanced",
    Scholarship => "Scholarship",
    Quota => "Quota",
});

choice_enum!(AddressType {
    Permanent => "Permanent",
    Temporary => "Temporary",
});

choice_enum!(ParentType {
    Father => "Father",
    Mother => "Mother",
    LegalGuardian => "LegalGuardian",
});

choice_enum!(AcademicStatus {
    Active => "Active",
    OnHold => "OnHold",
    Completed => "Completed",
    DroppedOut => "DroppedOut",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_declared_literals() {
        assert_eq!(Gender::parse("Female"), Ok(Gender::Female));
        assert_eq!(FeeCategory::parse("SelfFinanced"), Ok(FeeCategory::SelfFinanced));
        assert_eq!(ParentType::parse("LegalGuardian"), Ok(ParentType::LegalGuardian));
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let err = Gender::parse("Unknown").unwrap_err();
        assert!(err.contains("invalid choice"));
        assert!(AcademicStatus::parse("").is_err());
    }

    #[test]
    fn options_cover_all_variants() {
        assert_eq!(TransportationType::options().len(), 4);
        assert_eq!(AddressType::options()[0].0, "Permanent");
    }
}
