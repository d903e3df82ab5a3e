use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + Display
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(StaffRole {
    Doctor => "doctor",
    Nurse => "nurse",
    Receptionist => "receptionist",
});

impl StaffRole {
    /// Title used in front of a staff member's name in printed lines.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Doctor => "Dr.",
            Self::Nurse => "Nurse",
            Self::Receptionist => "Receptionist",
        }
    }
}
