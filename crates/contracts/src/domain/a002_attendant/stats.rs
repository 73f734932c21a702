use crate::domain::common::has_text;

use super::aggregate::Attendant;

/// Summary shown under the attendants table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendantStats {
    pub total: usize,
    pub with_email: usize,
    pub with_mobile: usize,
    pub with_address: usize,
}

impl AttendantStats {
    pub fn from_items(items: &[Attendant]) -> Self {
        Self {
            total: items.len(),
            with_email: items.iter().filter(|a| has_text(&a.email)).count(),
            with_mobile: items.iter().filter(|a| has_text(&a.mobile)).count(),
            with_address: items.iter().filter(|a| has_text(&a.address)).count(),
        }
    }
}

/// Attendants reachable by email or mobile, in list order
pub fn quick_contacts(items: &[Attendant]) -> Vec<&Attendant> {
    items.iter().filter(|a| a.has_contact()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendant(
        id: i64,
        email: Option<&str>,
        mobile: Option<&str>,
        address: Option<&str>,
    ) -> Attendant {
        Attendant {
            id,
            name: format!("a{}", id),
            address: address.map(Into::into),
            mobile: mobile.map(Into::into),
            email: email.map(Into::into),
            comments: None,
        }
    }

    #[test]
    fn test_stats_count_non_empty_fields() {
        let items = vec![
            attendant(1, Some("a@b.co"), None, Some("1 Queen St")),
            attendant(2, Some(""), Some("0211234567"), None),
            attendant(3, None, None, Some("  ")),
            attendant(4, Some(""), Some(""), None),
        ];
        assert_eq!(
            AttendantStats::from_items(&items),
            AttendantStats {
                total: 4,
                with_email: 1,
                with_mobile: 1,
                with_address: 2
            }
        );
        let contacts: Vec<i64> = quick_contacts(&items).iter().map(|a| a.id).collect();
        assert_eq!(contacts, vec![1, 2]);
    }
}
