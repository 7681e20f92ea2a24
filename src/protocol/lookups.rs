//! Enumerated codes of ITU-R M.1371. Each table is closed on the encode side
//! but decoding never fails: codes the table does not list are kept as
//! `Unknown(raw)` and re-encoded untouched.

/// Declare a lookup enum with an `Unknown(u8)` fallback and the raw conversions.
macro_rules! lookup {
    (
        $(#[$meta:meta])*
        $name:ident : $bits:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Reserved or not yet standardised code, preserved as received.
            Unknown(u8),
        }

        impl $name {
            /// Width of the code on the wire.
            pub const BITS: u8 = $bits;

            /// Raw code as transmitted.
            pub const fn raw(self) -> u8 {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(raw) => raw,
                }
            }

            /// `true` for codes listed in the table.
            pub const fn is_known(self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.raw()
            }
        }
    };
}

lookup! {
    /// Type of Aid-to-Navigation (message 21, 5 bits).
    AtonType: 5 {
        NotSpecified = 0,
        ReferencePoint = 1,
        Racon = 2,
        FixedStructureOffShore = 3,
        EmergencyWreckMarkingBuoy = 4,
        LightWithoutSectors = 5,
        LightWithSectors = 6,
        LeadingLightFront = 7,
        LeadingLightRear = 8,
        BeaconCardinalNorth = 9,
        BeaconCardinalEast = 10,
        BeaconCardinalSouth = 11,
        BeaconCardinalWest = 12,
        BeaconPortHand = 13,
        BeaconStarboardHand = 14,
        BeaconPreferredChannelPort = 15,
        BeaconPreferredChannelStarboard = 16,
        BeaconIsolatedDanger = 17,
        BeaconSafeWater = 18,
        BeaconSpecialMark = 19,
        CardinalMarkNorth = 20,
        CardinalMarkEast = 21,
        CardinalMarkSouth = 22,
        CardinalMarkWest = 23,
        PortHandMark = 24,
        StarboardHandMark = 25,
        PreferredChannelPort = 26,
        PreferredChannelStarboard = 27,
        IsolatedDanger = 28,
        SafeWater = 29,
        SpecialMark = 30,
        /// Light vessel, LANBY or rig.
        LightVessel = 31,
    }
}

lookup! {
    /// Type of electronic position fixing device (4 bits).
    EpfdType: 4 {
        Undefined = 0,
        Gps = 1,
        Glonass = 2,
        CombinedGpsGlonass = 3,
        LoranC = 4,
        Chayka = 5,
        IntegratedNavigation = 6,
        Surveyed = 7,
        Galileo = 8,
        InternalGnss = 15,
    }
}

lookup! {
    /// RACON status reported by AtoN monitoring (2 bits).
    RaconStatus: 2 {
        NoRacon = 0,
        NotMonitored = 1,
        Operational = 2,
        Error = 3,
    }
}

lookup! {
    /// Light status reported by AtoN monitoring (2 bits).
    LightStatus: 2 {
        NoLight = 0,
        On = 1,
        Off = 2,
        Error = 3,
    }
}

impl Default for AtonType {
    fn default() -> Self {
        AtonType::NotSpecified
    }
}

impl Default for EpfdType {
    fn default() -> Self {
        EpfdType::Undefined
    }
}

impl Default for RaconStatus {
    fn default() -> Self {
        RaconStatus::NoRacon
    }
}

impl Default for LightStatus {
    fn default() -> Self {
        LightStatus::NoLight
    }
}
