use serde::Serialize;

/// Calendar months as a closed enumeration, parsed case-insensitively at
/// the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }

    /// The month's fixed festival list, in listed order.
    pub fn events(&self) -> &'static [&'static str] {
        match self {
            Month::January => &[
                "Baripada Chhau Festival (Baripada)",
                "Lohri Celebrations (Shekhawati)",
                "Republic Day Cultural Fair (Lepakshi)",
            ],
            Month::February => &[
                "Shekhawati Haat & Culture Festival (Shekhawati)",
                "Kangra Valley Miniature Art Festival (Kangra)",
                "Bishnupur Terracotta Music Fest (Bishnupur)",
            ],
            Month::March => &[
                "Mandu Music and Architecture Festival (Mandu)",
                "Kushinagar Buddhist Peace Walk (Kushinagar)",
                "Srirangam Holi Pilgrimage Trail (Srirangam)",
            ],
            Month::April => &[
                "Lonar Crater Earth Heritage Trek (Lonar)",
                "Aihole Chalukya Utsav (Aihole)",
                "Deogarh Spring Tribal Arts Showcase (Deogarh)",
            ],
            Month::May => &[
                "Ziro Tribal Arts Residency (Ziro)",
                "Kalna Riverbank Music Rituals (Kalna)",
                "Champaner-Pavagadh Heritage Monsoon Prep (Champaner)",
            ],
            Month::June => &[
                "Rani ki Vav Cultural Conservation Camp (Rani ki Vav)",
                "Melkote Vairamudi Festival (Melkote)",
                "Tawang Pre-Monsoon Crafts Retreat (Tawang)",
            ],
            Month::July => &[
                "Chanderi Weaving Festival (Chanderi)",
                "Pattadakal Temple Dance Recitals (Pattadakal)",
                "Bateshwar Temple Water Festival (Bateshwar)",
            ],
            Month::August => &[
                "Unakoti Rock Carvings Festival (Unakoti)",
                "Karaikal Coastal Heritage Fair (Karaikal)",
                "Narsinghgarh Tribal Folklore Month (Narsinghgarh)",
            ],
            Month::September => &[
                "Dharanikota Buddhist Heritage Walk (Dharanikota)",
                "Shekhawati Folk Art Festival (Shekhawati)",
                "Kangra Valley Autumn Harvest (Kangra)",
            ],
            Month::October => &[
                "Mandu Monsoon Music and Food (Mandu)",
                "Baripada Tribal Dance (Baripada)",
                "Lonar Crater Geology Seminar (Lonar)",
            ],
            Month::November => &[
                "Ziro Music Festival (Ziro)",
                "Chanderi Handloom Expo (Chanderi)",
                "Kushinagar Peace Meditation (Kushinagar)",
            ],
            Month::December => &[
                "Pattadakal Dance & Light Show (Pattadakal)",
                "Rani ki Vav Winter Cultural Fair (Rani ki Vav)",
                "Melkote Religious Pilgrimage (Melkote)",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_has_its_three_events_in_order() {
        let events = Month::March.events();
        assert_eq!(
            events,
            &[
                "Mandu Music and Architecture Festival (Mandu)",
                "Kushinagar Buddhist Peace Walk (Kushinagar)",
                "Srirangam Holi Pilgrimage Trail (Srirangam)",
            ]
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Month::parse("MARCH"), Some(Month::March));
        assert_eq!(Month::parse(" december "), Some(Month::December));
        assert_eq!(Month::parse("smarch"), None);
    }

    #[test]
    fn every_month_lists_three_events() {
        for month in Month::ALL {
            assert_eq!(month.events().len(), 3, "{}", month.as_str());
        }
    }
}
