//! Built-in seed catalog used until a network ingestion source exists.

use verdex_model::{
    AyurvedicProperties, DetailContent, GrowingStep, MedicinalUse, PlantId, PlantRecord,
};

struct Seed {
    common_name: &'static str,
    scientific_name: &'static str,
    region: &'static str,
    season: &'static str,
    plant_type: &'static str,
    health_benefits: &'static str,
    description: &'static str,
    uses: &'static str,
    image: &'static str,
}

fn record(seed: Seed) -> PlantRecord {
    PlantRecord {
        id: PlantId::from_seed_name(seed.common_name),
        common_name: Some(seed.common_name.to_string()),
        scientific_name: Some(seed.scientific_name.to_string()),
        region: Some(seed.region.to_string()),
        season: Some(seed.season.to_string()),
        plant_type: Some(seed.plant_type.to_string()),
        health_benefits: Some(seed.health_benefits.to_string()),
        description: Some(seed.description.to_string()),
        uses: Some(seed.uses.to_string()),
        image: Some(seed.image.to_string()),
        images: Vec::new(),
        detail: None,
    }
}

fn tulsi_detail() -> DetailContent {
    DetailContent {
        medicinal_uses: vec![
            MedicinalUse {
                title: "Immune System Booster".to_string(),
                description: "Rich in antioxidants and essential oils that strengthen the \
                              body's natural defense mechanisms."
                    .to_string(),
            },
            MedicinalUse {
                title: "Stress & Anxiety Relief".to_string(),
                description: "Acts as an adaptogen, helping the body cope with physical and \
                              mental stress naturally."
                    .to_string(),
            },
            MedicinalUse {
                title: "Respiratory Health".to_string(),
                description: "Effective in treating coughs, colds, bronchitis, and other \
                              respiratory ailments."
                    .to_string(),
            },
            MedicinalUse {
                title: "Cardiovascular Support".to_string(),
                description: "Helps regulate blood pressure and cholesterol levels for better \
                              heart health."
                    .to_string(),
            },
        ],
        growing_steps: vec![
            GrowingStep {
                title: "Seed Preparation".to_string(),
                description: "Soak seeds in lukewarm water for 12-24 hours to improve \
                              germination rates."
                    .to_string(),
                tips: Some("Use filtered water for best results".to_string()),
            },
            GrowingStep {
                title: "Soil Preparation".to_string(),
                description: "Prepare well-draining soil with pH 6.0-7.5. Mix compost for \
                              rich nutrients."
                    .to_string(),
                tips: Some("Avoid waterlogged soil to prevent root rot".to_string()),
            },
            GrowingStep {
                title: "Planting".to_string(),
                description: "Sow seeds 1/4 inch deep in seed trays or directly in garden \
                              beds."
                    .to_string(),
                tips: Some("Space plants 12-18 inches apart for proper growth".to_string()),
            },
        ],
        ayurvedic: Some(AyurvedicProperties {
            rasa: Some("Pungent, Bitter".to_string()),
            virya: Some("Hot".to_string()),
            vipaka: Some("Pungent".to_string()),
            dosha: Some("Balances Kapha and Vata".to_string()),
        }),
        traditional_uses: vec![
            "Tea preparation".to_string(),
            "Religious ceremonies".to_string(),
            "Traditional medicine".to_string(),
        ],
    }
}

fn turmeric_detail() -> DetailContent {
    DetailContent {
        medicinal_uses: vec![
            MedicinalUse {
                title: "Anti-inflammatory".to_string(),
                description: "Curcumin inhibits inflammatory pathways, easing joint pain and \
                              swelling."
                    .to_string(),
            },
            MedicinalUse {
                title: "Digestive Aid".to_string(),
                description: "Stimulates bile production and supports healthy digestion and \
                              metabolism."
                    .to_string(),
            },
        ],
        growing_steps: Vec::new(),
        ayurvedic: Some(AyurvedicProperties {
            rasa: Some("Bitter, Pungent".to_string()),
            virya: Some("Hot".to_string()),
            vipaka: Some("Pungent".to_string()),
            dosha: Some("Balances Kapha".to_string()),
        }),
        traditional_uses: vec![
            "Culinary spice".to_string(),
            "Traditional medicine".to_string(),
        ],
    }
}

/// The seven-entry catalog the browsing page ships with.
pub fn seed_catalog() -> Vec<PlantRecord> {
    let mut items = vec![
        record(Seed {
            common_name: "Tulsi",
            scientific_name: "Ocimum sanctum",
            region: "India, Southeast Asia",
            season: "Spring, Summer, Monsoon",
            plant_type: "Herb",
            health_benefits: "Immunity booster, Anti-stress, Respiratory health, \
                              Anti-inflammatory",
            description: "Sacred basil, revered in Hindu tradition for its medicinal \
                          properties",
            uses: "Tea preparation, Religious ceremonies, Traditional medicine",
            image: "/assets/tulsi.jpg",
        }),
        record(Seed {
            common_name: "Turmeric",
            scientific_name: "Curcuma longa",
            region: "India, Southeast Asia, Central America",
            season: "Summer, Monsoon",
            plant_type: "Rhizomatous Perennial",
            health_benefits: "Anti-inflammatory, Antioxidant, Digestive aid, Wound healing",
            description: "Golden-yellow rhizome used for powerful anti-inflammatory \
                          properties",
            uses: "Culinary spice, Traditional medicine",
            image: "/assets/turmeric.jpg",
        }),
        record(Seed {
            common_name: "Aloe Vera",
            scientific_name: "Aloe barbadensis miller",
            region: "Tropical regions",
            season: "Year-round",
            plant_type: "Succulent",
            health_benefits: "Skin healing, Digestive aid",
            description: "A succulent plant species known for its thick, fleshy leaves \
                          containing healing gel.",
            uses: "Skin care, Internal consumption",
            image: "/assets/aloe-vera.jpg",
        }),
        record(Seed {
            common_name: "Lavender",
            scientific_name: "Lavandula angustifolia",
            region: "Mediterranean",
            season: "Summer",
            plant_type: "Herb",
            health_benefits: "Calming, Sleep aid",
            description: "An aromatic flowering plant in the mint family, prized for its \
                          fragrance and calming properties.",
            uses: "Aromatherapy, Tea",
            image: "/assets/lavender.avif",
        }),
        record(Seed {
            common_name: "Peppermint",
            scientific_name: "Mentha × piperita",
            region: "Europe, North America",
            season: "Spring, Summer",
            plant_type: "Herb",
            health_benefits: "Digestive aid, Headache relief",
            description: "A fast-growing aromatic herb with cooling properties, excellent \
                          for digestive health.",
            uses: "Tea, Essential oil",
            image: "/assets/peppermint.jpg",
        }),
        record(Seed {
            common_name: "German Chamomile",
            scientific_name: "Matricaria chamomilla",
            region: "Europe",
            season: "Spring, Summer",
            plant_type: "Herb",
            health_benefits: "Calming, Anti-inflammatory",
            description: "A gentle flowering herb with small daisy-like flowers, renowned \
                          for its calming properties.",
            uses: "Tea, Skin care",
            image: "/assets/chamomile.jpg",
        }),
        record(Seed {
            common_name: "Purple Coneflower",
            scientific_name: "Echinacea purpurea",
            region: "North America",
            season: "Summer",
            plant_type: "Perennial",
            health_benefits: "Immune booster",
            description: "A striking purple flowering plant native to North America, valued \
                          for immune system support.",
            uses: "Supplements, Tea",
            image: "/assets/echinacea.jpg",
        }),
    ];

    items[0].detail = Some(tulsi_detail());
    items[1].detail = Some(turmeric_detail());
    items
}
