/// Responsible-tourism guidance, served verbatim as markdown.
pub const ETIQUETTE_MD: &str = r#"India's cultural sites are living legacies, not just photo ops. Here's how you can explore respectfully:

### General Tips
- **Leave no trace:** Don't litter at heritage sites.
- **Be mindful:** Always ask before photographing people or rituals.
- **Respect customs:** Dress modestly and follow local etiquette.
- **Support artisans:** Buy handmade, not machine-made replicas.
- **Silence is golden:** Many sites are sacred; be quiet and reverent.

### Sustainable Shopping
- **Buy local:** Choose crafts sold directly by artisans.
- **Avoid animal-based products:** Like ivory or fur.
- **Look for Geographical Indication (GI) tags:** They ensure authenticity.

### Community-Based Tourism
- **Opt for guided walks with locals.**
- **Stay in homestays**, not big hotels.
- **Eat local:** Encourage traditional food joints and family kitchens.

### Give Back
- Tip local performers, not just watch.
- Leave positive reviews for small businesses and artists.
- Volunteer if you revisit; many heritage sites welcome help.

> "Take only memories, leave only footprints."

These tips are based on UNESCO guidelines and the Ministry of Tourism's 'Dekho Apna Desh' initiative.
"#;
