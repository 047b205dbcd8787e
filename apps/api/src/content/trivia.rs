/// Fixed "Did you know?" facts, one per curated city.
pub const TRIVIA: &[(&str, &str)] = &[
    (
        "Pattadakal",
        "Where kings were crowned - a blend of North and South Indian temple styles.",
    ),
    (
        "Aihole",
        "Known as the cradle of Indian architecture with 120+ temples.",
    ),
    ("Lepakshi", "Has a hanging pillar that defies gravity!"),
    (
        "Srirangam",
        "The largest functioning Hindu temple complex in the world.",
    ),
    (
        "Melkote",
        "A Bhakti movement stronghold rich in Iyengar traditions.",
    ),
    (
        "Chanderi",
        "Famed for handwoven sarees once exported to royal courts.",
    ),
    (
        "Kalna",
        "Home to 108 Shiva temples arranged in two concentric circles.",
    ),
    (
        "Kushinagar",
        "Believed to be the place where Buddha attained Nirvana.",
    ),
    (
        "Shekhawati",
        "Called the open art gallery of Rajasthan for its painted havelis.",
    ),
    (
        "Kangra",
        "Origin of the delicate Kangra miniature painting style.",
    ),
    (
        "Deogarh (Jharkhand)",
        "Major pilgrimage site during the Shravani Mela.",
    ),
    (
        "Baripada",
        "Its Rath Yatra is pulled by women - a rare tradition!",
    ),
    (
        "Dharanikota",
        "Capital of Satavahanas and ancient Buddhist hub.",
    ),
    (
        "Bishnupur",
        "Famous for terracotta temples and Baluchari sarees.",
    ),
    (
        "Lonar",
        "Crater lake formed by a meteor impact - both saline and alkaline.",
    ),
    (
        "Dholavira",
        "Had water systems 4500 years ago - from the Harappan era!",
    ),
    (
        "Rani ki Vav",
        "Stepwell built as an inverted temple dedicated to water.",
    ),
    (
        "Champaner-Pavagadh",
        "India's only preserved pre-Mughal Islamic city.",
    ),
    (
        "Bateshwar",
        "200+ temples scattered across ravines - now being restored.",
    ),
    ("Mandu", "City of Joy - romantic ruins and Afghan architecture."),
    (
        "Ziro",
        "Apatani tribe's home - known for eco-living and nose plugs.",
    ),
    (
        "Unakoti",
        "Rock carvings of Shiva - literally 'one less than a crore'.",
    ),
    (
        "Tawang",
        "India's largest monastery - second in the world.",
    ),
    (
        "Karaikal",
        "Home of Karaikal Ammaiyar, one of the first female Shaiva saints.",
    ),
    (
        "Narsinghgarh",
        "Picturesque palace-fort overlooking a scenic lake.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_fact_per_curated_city() {
        assert_eq!(TRIVIA.len(), 25);
        let mut names: Vec<_> = TRIVIA.iter().map(|(city, _)| *city).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 25);
    }
}
