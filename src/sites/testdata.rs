use rand::random_range;

/// Fixed contact email used for valuation submissions.
pub const CONTACT_EMAIL: &str = "qa@example.com";

/// Fixed contact telephone used for valuation submissions.
// TODO: randomise the number once we know why the sites reject synthetic ones
pub const CONTACT_TELEPHONE: &str = "07700900123";

const FULL_NAMES: &[&str] = &[
    "Alex Morgan",
    "Sam Carter",
    "Jordan Reeves",
    "Casey Hammond",
    "Robin Ashworth",
];

/// Seller contact details entered on the your-details page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactProfile {
    pub full_name: String,
    pub email: String,
    pub telephone: String,
}

impl ContactProfile {
    /// A profile with a randomly drawn name and the fixed email and
    /// telephone the sites are known to accept.
    #[must_use]
    pub fn sample() -> Self {
        let full_name = FULL_NAMES[random_range(0..FULL_NAMES.len())];
        Self {
            full_name: full_name.to_string(),
            email: CONTACT_EMAIL.to_string(),
            telephone: CONTACT_TELEPHONE.to_string(),
        }
    }
}

/// A plausible mileage for a valuation request: 10,000 to 199,000 in steps
/// of 1,000.
#[must_use]
pub fn random_mileage() -> u32 {
    random_range(10u32..200) * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mileage_in_range_and_stepped() {
        for _ in 0..100 {
            let mileage = random_mileage();
            assert!((10_000..200_000).contains(&mileage));
            assert_eq!(mileage % 1000, 0);
        }
    }

    #[test]
    fn test_sample_profile_uses_known_good_contact_details() {
        let profile = ContactProfile::sample();
        assert_eq!(profile.email, CONTACT_EMAIL);
        assert_eq!(profile.telephone, CONTACT_TELEPHONE);
        assert!(FULL_NAMES.contains(&profile.full_name.as_str()));
    }
}
