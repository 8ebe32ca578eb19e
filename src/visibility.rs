//! Which optional form fields each partner type sees, and which it must fill.

use crate::partners::PartnerType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionalField {
    Platform,
    Niche,
    Location,
    PropertyType,
}

impl ConditionalField {
    pub const ALL: [ConditionalField; 4] = [
        ConditionalField::Platform,
        ConditionalField::Niche,
        ConditionalField::Location,
        ConditionalField::PropertyType,
    ];

    /// DOM id of the input, also the `for` of its label.
    pub fn element_id(self) -> &'static str {
        match self {
            ConditionalField::Platform => "platform",
            ConditionalField::Niche => "niche",
            ConditionalField::Location => "location",
            ConditionalField::PropertyType => "propertyType",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ConditionalField,
    pub required: bool,
}

const INFLUENCER_RULES: &[FieldRule] = &[
    FieldRule { field: ConditionalField::Niche, required: false },
    FieldRule { field: ConditionalField::Platform, required: true },
];

const PROPERTY_RULES: &[FieldRule] = &[
    FieldRule { field: ConditionalField::Location, required: true },
    FieldRule { field: ConditionalField::PropertyType, required: true },
];

/// Fields shown for `partner`. Anything not listed is hidden and optional.
pub fn rules_for(partner: PartnerType) -> &'static [FieldRule] {
    match partner {
        PartnerType::Influencer => INFLUENCER_RULES,
        PartnerType::Hotel | PartnerType::Venue => PROPERTY_RULES,
        PartnerType::Conference | PartnerType::Blog | PartnerType::Nightlife => &[],
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

/// Resolved state of every conditional field, in `ConditionalField::ALL` order.
pub fn field_states(partner: PartnerType) -> [(ConditionalField, FieldState); 4] {
    let rules = rules_for(partner);
    ConditionalField::ALL.map(|field| {
        let state = rules
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| FieldState {
                visible: true,
                required: rule.required,
            })
            .unwrap_or_default();
        (field, state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(partner: PartnerType, field: ConditionalField) -> FieldState {
        field_states(partner)
            .into_iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| s)
            .unwrap()
    }

    #[test]
    fn influencer_sees_niche_and_required_platform() {
        let p = PartnerType::Influencer;
        assert_eq!(state(p, ConditionalField::Platform), FieldState { visible: true, required: true });
        assert_eq!(state(p, ConditionalField::Niche), FieldState { visible: true, required: false });
        assert_eq!(state(p, ConditionalField::Location), FieldState::default());
        assert_eq!(state(p, ConditionalField::PropertyType), FieldState::default());
    }

    #[test]
    fn hotel_and_venue_require_location_and_property_type() {
        for p in [PartnerType::Hotel, PartnerType::Venue] {
            assert_eq!(state(p, ConditionalField::Location), FieldState { visible: true, required: true });
            assert_eq!(state(p, ConditionalField::PropertyType), FieldState { visible: true, required: true });
            assert_eq!(state(p, ConditionalField::Platform), FieldState::default());
            assert_eq!(state(p, ConditionalField::Niche), FieldState::default());
        }
    }

    #[test]
    fn other_types_show_no_conditional_fields() {
        for p in [PartnerType::Conference, PartnerType::Blog, PartnerType::Nightlife] {
            assert!(field_states(p).iter().all(|(_, s)| *s == FieldState::default()), "{p}");
        }
    }
}
