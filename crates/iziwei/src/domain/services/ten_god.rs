//! Ten-God Resolver

use crate::domain::tables::TEN_GODS;
use crate::domain::value_objects::{Stem, TenGod};

/// Classify `target` relative to the `reference` (day master) stem
pub fn ten_god(reference: Stem, target: Stem) -> TenGod {
    TEN_GODS[reference.index()][target.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Derive the role from five-element cycles: wood, fire, earth, metal,
    /// water; even stems are yang.
    fn by_elements(reference: Stem, target: Stem) -> TenGod {
        let (r, t) = (reference.index(), target.index());
        let same_polarity = r % 2 == t % 2;
        let step = (t / 2 + 5 - r / 2) % 5;
        match (step, same_polarity) {
            (0, true) => TenGod::Peer,
            (0, false) => TenGod::RobWealth,
            (1, true) => TenGod::EatingGod,
            (1, false) => TenGod::HurtingOfficer,
            (2, true) => TenGod::IndirectWealth,
            (2, false) => TenGod::DirectWealth,
            (3, true) => TenGod::SevenKillings,
            (3, false) => TenGod::DirectOfficer,
            (4, true) => TenGod::IndirectResource,
            _ => TenGod::DirectResource,
        }
    }

    #[test]
    fn test_jia_against_jia_is_peer() {
        assert_eq!(ten_god(Stem::Jia, Stem::Jia), TenGod::Peer);
        assert_eq!(ten_god(Stem::Jia, Stem::Jia).to_string(), "比肩");
    }

    #[test]
    fn test_every_stem_is_its_own_peer() {
        for stem in Stem::ALL {
            assert_eq!(ten_god(stem, stem), TenGod::Peer);
        }
    }

    #[test]
    fn test_table_agrees_with_element_cycles() {
        for reference in Stem::ALL {
            for target in Stem::ALL {
                assert_eq!(
                    ten_god(reference, target),
                    by_elements(reference, target),
                    "{} -> {}",
                    reference,
                    target
                );
            }
        }
    }

    #[test]
    fn test_known_pairs() {
        assert_eq!(ten_god(Stem::Jia, Stem::Geng), TenGod::SevenKillings);
        assert_eq!(ten_god(Stem::Jia, Stem::Xin), TenGod::DirectOfficer);
        assert_eq!(ten_god(Stem::Yi, Stem::Jia), TenGod::RobWealth);
        assert_eq!(ten_god(Stem::Gui, Stem::Geng), TenGod::DirectResource);
    }
}
